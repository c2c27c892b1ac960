//! JavaScript bindings
//!
//! The page owns one `BallToss` and calls `tick()` from its
//! `requestAnimationFrame` loop, reading `transforms()` back every frame.
//! Pointer positions must already be relative to the container.

use glam::Vec2;
use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

use crate::consts::DEFAULT_HARD_RESET_COUNT;
use crate::settings::PhysicsSettings;
use crate::sim::{PointerId, World, tick};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Ball Toss loaded");
}

/// Engine handle exported to the page
#[wasm_bindgen]
pub struct BallToss {
    world: World,
    packed: Vec<f32>,
}

#[wasm_bindgen]
impl BallToss {
    /// Create a world sized to the container, with `count` bodies laid out
    /// along the top. Settings come from LocalStorage when present.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, count: usize) -> BallToss {
        let seed = js_sys::Date::now() as u64;
        let mut world = World::with_settings(width, height, seed, PhysicsSettings::load());
        world.spawn_initial(count);
        world.start();
        BallToss {
            world,
            packed: Vec::new(),
        }
    }

    /// Run one frame. Returns false once the driver is stopped.
    pub fn tick(&mut self) -> bool {
        tick(&mut self.world);
        self.world.running
    }

    /// Packed `[id, left, top, size, rotation, ...]` for every body
    pub fn transforms(&mut self) -> Float32Array {
        self.packed.clear();
        self.world.render(&mut self.packed);
        Float32Array::from(self.packed.as_slice())
    }

    #[wasm_bindgen(js_name = bodyCount)]
    pub fn body_count(&self) -> usize {
        self.world.bodies.len()
    }

    pub fn unpause(&mut self) {
        self.world.unpause();
    }

    pub fn start(&mut self) -> bool {
        self.world.start()
    }

    pub fn stop(&mut self) {
        self.world.stop();
    }

    #[wasm_bindgen(js_name = addRandom)]
    pub fn add_random(&mut self) -> Option<u32> {
        self.world.add_random()
    }

    #[wasm_bindgen(js_name = resetSoft)]
    pub fn reset_soft(&mut self) {
        self.world.reset_soft();
    }

    #[wasm_bindgen(js_name = resetHard)]
    pub fn reset_hard(&mut self, count: Option<usize>) {
        self.world.reset_hard(count.unwrap_or(DEFAULT_HARD_RESET_COUNT));
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.resize(width, height);
    }

    pub fn scatter(&mut self, intensity: f32) {
        self.world.scatter(intensity);
    }

    /// `target` is the id of the element under the pointer, if known
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, pointer: u32, x: f32, y: f32, target: Option<u32>, time_ms: f64) -> Option<u32> {
        self.world
            .on_pointer_down(PointerId(pointer), Vec2::new(x, y), target, time_ms)
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, pointer: u32, x: f32, y: f32, time_ms: f64) {
        self.world.on_pointer_move(PointerId(pointer), Vec2::new(x, y), time_ms);
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, pointer: u32) {
        self.world.on_pointer_up(PointerId(pointer));
    }

    /// Touch points as a flat `[x0, y0, x1, y1, ...]` list
    #[wasm_bindgen(js_name = touchStart)]
    pub fn touch_start(&mut self, touches: &[f32], target: Option<u32>, time_ms: f64) -> Option<u32> {
        let touches = unpack_points(touches);
        self.world.on_touch_start(&touches, target, time_ms)
    }

    #[wasm_bindgen(js_name = touchMove)]
    pub fn touch_move(&mut self, touches: &[f32], time_ms: f64) {
        let touches = unpack_points(touches);
        self.world.on_touch_move(&touches, time_ms);
    }

    #[wasm_bindgen(js_name = touchEnd)]
    pub fn touch_end(&mut self) {
        self.world.on_touch_end();
    }

    /// Replace the physics settings from JSON and persist them
    #[wasm_bindgen(js_name = setSettings)]
    pub fn set_settings(&mut self, json: &str) -> Result<(), JsValue> {
        let settings = PhysicsSettings::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        settings.save();
        self.world.settings = settings;
        Ok(())
    }
}

fn unpack_points(flat: &[f32]) -> Vec<Vec2> {
    flat.chunks_exact(2).map(|p| Vec2::new(p[0], p[1])).collect()
}
