//! Physics tuning
//!
//! Defaults reproduce the reference feel exactly. Persisted separately in
//! LocalStorage on the web so a page can ship its own tuning.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable physics parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    // === Forces ===
    /// Downward acceleration (units/frame²)
    pub gravity: f32,
    /// Air friction multiplier per frame
    pub friction: f32,
    /// Floor drag on horizontal velocity and spin
    pub ground_friction: f32,
    /// Restitution for walls and body-body impulses
    pub bounce_damping: f32,

    // === Throwing ===
    pub max_throw_velocity: f32,
    pub velocity_multiplier: f32,

    // === Bodies ===
    pub body_diameter: f32,
    pub density: f32,
    pub max_bodies: usize,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            ground_friction: GROUND_FRICTION,
            bounce_damping: BOUNCE_DAMPING,

            max_throw_velocity: MAX_THROW_VELOCITY,
            velocity_multiplier: VELOCITY_MULTIPLIER,

            body_diameter: BODY_DIAMETER,
            density: MASS_DENSITY,
            max_bodies: MAX_BODIES,
        }
    }
}

impl PhysicsSettings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Replace values that would break body invariants with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.body_diameter > 0.0) {
            self.body_diameter = defaults.body_diameter;
        }
        if !(self.density > 0.0) {
            self.density = defaults.density;
        }
        if !(self.max_throw_velocity >= 0.0) {
            self.max_throw_velocity = defaults.max_throw_velocity;
        }
        self
    }

    /// Radius of newly spawned bodies
    pub fn body_radius(&self) -> f32 {
        self.body_diameter / 2.0
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "ball_toss_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded physics settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored physics settings: {e}"),
                }
            }
        }

        log::info!("Using default physics settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Physics settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let s = PhysicsSettings::default();
        assert_eq!(s.gravity, 0.4);
        assert_eq!(s.friction, 0.98);
        assert_eq!(s.ground_friction, 0.99);
        assert_eq!(s.bounce_damping, 0.95);
        assert_eq!(s.max_throw_velocity, 15.0);
        assert_eq!(s.velocity_multiplier, 0.3);
        assert_eq!(s.body_radius(), 35.0);
        assert_eq!(s.max_bodies, 40);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = PhysicsSettings::from_json(r#"{ "gravity": 0.8 }"#).unwrap();
        assert_eq!(s.gravity, 0.8);
        assert_eq!(s.friction, FRICTION);
        assert_eq!(s.max_bodies, MAX_BODIES);
    }

    #[test]
    fn test_invalid_sizes_are_sanitized() {
        let s = PhysicsSettings::from_json(r#"{ "body_diameter": -3, "density": 0 }"#).unwrap();
        assert_eq!(s.body_diameter, BODY_DIAMETER);
        assert_eq!(s.density, MASS_DENSITY);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(PhysicsSettings::from_json("{ gravity: ").is_err());
    }
}
