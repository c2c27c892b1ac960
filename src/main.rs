//! Ball Toss entry point
//!
//! On the web the library's wasm start hook does the work. Natively this runs
//! a scripted headless session and logs where everything ended up.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ball_toss::consts::DEFAULT_HARD_RESET_COUNT;
    use ball_toss::{PhysicsSettings, PointerId, World, tick};
    use glam::Vec2;

    env_logger::init();
    log::info!("Ball Toss (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => PhysicsSettings::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Bad settings in {path}: {e}, using defaults");
                PhysicsSettings::default()
            }),
            Err(e) => {
                log::warn!("Cannot read {path}: {e}, using defaults");
                PhysicsSettings::default()
            }
        },
        None => PhysicsSettings::load(),
    };

    let mut world = World::with_settings(800.0, 600.0, 12345, settings);
    world.spawn_initial(5);
    world.start();

    // Held in place until the page scrolls
    let frame_ms = 1000.0 / 60.0;
    let mut now = 0.0;
    let run = |world: &mut World, frames: usize, now: &mut f64| {
        for _ in 0..frames {
            tick(world);
            *now += frame_ms;
        }
    };

    run(&mut world, 30, &mut now);
    world.unpause();
    run(&mut world, 240, &mut now);

    // Pick up the middle body and fling it to the right
    match world.bodies.get(2).map(|b| (b.id, b.pos)) {
        Some((target, grab)) => {
            world.on_pointer_down(PointerId::MOUSE, grab, Some(target), now);
            for step in 1..=6 {
                run(&mut world, 1, &mut now);
                let pointer = grab + Vec2::new(step as f32 * 25.0, -step as f32 * 40.0);
                world.on_pointer_move(PointerId::MOUSE, pointer, now);
            }
            world.on_pointer_up(PointerId::MOUSE);
            if let Some(body) = world.body(target) {
                log::info!("Threw body {target} at {:?}", body.vel);
            }
            run(&mut world, 120, &mut now);
        }
        None => log::warn!("Only {} bodies, skipping the throw", world.bodies.len()),
    }

    world.scatter(30.0);
    for _ in 0..3 {
        world.add_random();
    }
    run(&mut world, 180, &mut now);

    world.resize(500.0, 400.0);
    run(&mut world, 240, &mut now);

    for t in world.transforms() {
        log::info!(
            "body {:>2}: left {:7.2} top {:7.2} rotation {:8.2}",
            t.id,
            t.left,
            t.top,
            t.rotation
        );
    }

    world.reset_hard(DEFAULT_HARD_RESET_COUNT);
    log::info!("Done after {} frames", world.frame);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's start hook, this is just to satisfy the compiler
}
