//! Platform abstraction layer
//!
//! The simulation is platform-free. On wasm32 the `web` bindings expose a
//! `World` to JavaScript; the page schedules frames, hit-tests elements and
//! copies transforms back onto them.

#[cfg(target_arch = "wasm32")]
pub mod web;
