//! Tunables for the garden. Every field has a default so a partial JSON
//! document (or none at all) still yields a playable garden.
//!
//! Per-frame rates are expressed against the 60 Hz reference rate in
//! [`crate::clock::REFERENCE_FPS`]; the components scale them by `dt`.

use serde::{Deserialize, Serialize};

use crate::error::GardenError;

/// How the lawn is modelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrassRepresentation {
    /// Fine individual strands.
    #[default]
    Blades,
    /// Coarse clustered tufts, far fewer entities.
    Patches,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrassTuning {
    pub representation: GrassRepresentation,
    /// Blades per square unit of field.
    pub density: f64,
    pub min_height: f64,
    pub max_height: f64,
    /// Height of a freshly cut blade as a fraction of its base height.
    pub stub_fraction: f64,
    /// Regrowth progress gained per frame under a full-strength watering.
    pub regrowth_rate: f64,
    /// Strength multiplier applied to a watered area every frame.
    pub water_decay: f64,
    /// Frames a watered area stays active.
    pub water_ttl_frames: f64,
    /// Areas weaker than this are dropped early.
    pub water_min_strength: f64,
}

impl Default for GrassTuning {
    fn default() -> Self {
        Self {
            representation: GrassRepresentation::Blades,
            density: 0.8 / (15.0 * 12.0),
            min_height: 18.0,
            max_height: 46.0,
            stub_fraction: 0.15,
            regrowth_rate: 0.04,
            water_decay: 0.99,
            water_ttl_frames: 180.0,
            water_min_strength: 0.01,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolRadii {
    pub water: f64,
    pub plant_boost: f64,
    pub mow: f64,
    pub harvest: f64,
    pub catch: f64,
    pub sweep: f64,
    pub plant_clearance: f64,
    pub touch: f64,
}

impl Default for ToolRadii {
    fn default() -> Self {
        Self {
            water: 80.0,
            plant_boost: 75.0,
            mow: 50.0,
            harvest: 30.0,
            catch: 80.0,
            sweep: 60.0,
            plant_clearance: 30.0,
            touch: 30.0,
        }
    }
}

/// Stars awarded per successful action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardTable {
    pub water: u32,
    pub plant: u32,
    pub shape: u32,
    pub butterfly: u32,
    pub mowed_item: u32,
    pub harvest_flower: u32,
    pub harvest_vegetable: u32,
    pub catch_butterfly: u32,
    pub catch_shape: u32,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            water: 1,
            plant: 2,
            shape: 1,
            butterfly: 1,
            mowed_item: 1,
            harvest_flower: 5,
            harvest_vegetable: 5,
            catch_butterfly: 5,
            catch_shape: 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    pub grass: GrassTuning,
    pub radii: ToolRadii,
    pub rewards: RewardTable,
    /// Max gap between consecutive paint points before interpolation.
    pub paint_smoothing: f64,
    /// Minimum drag distance between two discrete placements.
    pub placement_min_distance: f64,
    /// Minimum time (seconds) between two discrete placements in one drag.
    pub placement_min_interval: f64,
    /// Chance that a watering drag step skips its droplet burst.
    pub water_skip_chance: f64,
    /// A celebration fires every this many successful actions.
    pub celebration_interval: u64,
    /// Seconds between a harvest and its "counting" praise.
    pub counting_delay_secs: f64,
    /// Harvests after which counting praise stops.
    pub counting_limit: u32,
    /// Butterflies or shapes a single net swing can catch.
    pub max_catch: usize,
    /// Height of the band above the bottom edge where butterflies can be mowed.
    pub mowable_band: f64,
    pub max_particles: usize,
    /// Undo history depth.
    pub history_limit: usize,
    pub seed: u64,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            grass: GrassTuning::default(),
            radii: ToolRadii::default(),
            rewards: RewardTable::default(),
            paint_smoothing: 8.0,
            placement_min_distance: 40.0,
            placement_min_interval: 0.25,
            water_skip_chance: 0.5,
            celebration_interval: 12,
            counting_delay_secs: 0.8,
            counting_limit: 10,
            max_catch: 2,
            mowable_band: 150.0,
            max_particles: 2000,
            history_limit: 50,
            seed: crate::rng::DEFAULT_SEED,
        }
    }
}

impl GardenConfig {
    pub fn from_json(raw: &str) -> Result<Self, GardenError> {
        let cfg: GardenConfig = serde_json::from_str(raw)?;
        Ok(cfg.sanitized())
    }

    /// Parses `raw` if present, otherwise (or on any error) yields defaults.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        match raw.map(Self::from_json) {
            Some(Ok(cfg)) => cfg,
            Some(Err(e)) => {
                log::warn!("ignoring garden config: {e}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn to_json(&self) -> Result<String, GardenError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Clamps every tunable into a range the simulation can run with.
    /// Non-finite values fall back to their defaults.
    pub fn sanitized(mut self) -> Self {
        let d = GardenConfig::default();
        let g = &mut self.grass;
        g.density = bounded(g.density, MIN_DENSITY, MAX_DENSITY, d.grass.density);
        g.min_height = bounded(g.min_height, 1.0, MAX_BLADE_HEIGHT, d.grass.min_height);
        g.max_height = bounded(g.max_height, 1.0, MAX_BLADE_HEIGHT, d.grass.max_height);
        if g.max_height < g.min_height {
            std::mem::swap(&mut g.max_height, &mut g.min_height);
        }
        g.stub_fraction = bounded(g.stub_fraction, 0.0, 1.0, d.grass.stub_fraction);
        g.regrowth_rate = bounded(g.regrowth_rate, 0.0, 1.0, d.grass.regrowth_rate);
        g.water_decay = bounded(g.water_decay, 0.0, 1.0, d.grass.water_decay);
        g.water_ttl_frames = bounded(g.water_ttl_frames, 1.0, MAX_WATER_TTL, d.grass.water_ttl_frames);
        g.water_min_strength = bounded(g.water_min_strength, 0.0, 1.0, d.grass.water_min_strength);

        let r = &mut self.radii;
        let dr = &d.radii;
        for (value, default) in [
            (&mut r.water, dr.water),
            (&mut r.plant_boost, dr.plant_boost),
            (&mut r.mow, dr.mow),
            (&mut r.harvest, dr.harvest),
            (&mut r.catch, dr.catch),
            (&mut r.sweep, dr.sweep),
            (&mut r.plant_clearance, dr.plant_clearance),
            (&mut r.touch, dr.touch),
        ] {
            *value = bounded(*value, 0.0, MAX_RADIUS, default);
        }

        self.paint_smoothing = bounded(self.paint_smoothing, MIN_PAINT_SMOOTHING, MAX_RADIUS, d.paint_smoothing);
        self.placement_min_distance =
            bounded(self.placement_min_distance, 0.0, MAX_RADIUS, d.placement_min_distance);
        self.placement_min_interval =
            bounded(self.placement_min_interval, 0.0, MAX_SECONDS, d.placement_min_interval);
        self.water_skip_chance = bounded(self.water_skip_chance, 0.0, 1.0, d.water_skip_chance);
        self.counting_delay_secs = bounded(self.counting_delay_secs, 0.0, MAX_SECONDS, d.counting_delay_secs);
        self.mowable_band = bounded(self.mowable_band, 0.0, MAX_FIELD_EXTENT, d.mowable_band);
        if self.celebration_interval == 0 {
            self.celebration_interval = d.celebration_interval;
        }
        self.max_catch = self.max_catch.clamp(1, MAX_CATCH);
        self.max_particles = self.max_particles.clamp(1, MAX_PARTICLES);
        self.history_limit = self.history_limit.clamp(1, MAX_HISTORY);
        self
    }
}

const MIN_DENSITY: f64 = 1e-5;
const MAX_DENSITY: f64 = 0.02;
const MAX_BLADE_HEIGHT: f64 = 200.0;
const MAX_WATER_TTL: f64 = 60.0 * 60.0;
const MAX_RADIUS: f64 = 1000.0;
const MIN_PAINT_SMOOTHING: f64 = 1.0;
const MAX_SECONDS: f64 = 10.0;
const MAX_FIELD_EXTENT: f64 = 10_000.0;
const MAX_CATCH: usize = 50;
const MAX_PARTICLES: usize = 20_000;
const MAX_HISTORY: usize = 1000;

fn bounded(value: f64, lo: f64, hi: f64, default: f64) -> f64 {
    if value.is_finite() { value.clamp(lo, hi) } else { default }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GardenConfig::from_json(r#"{"celebration_interval": 5, "radii": {"mow": 70.0}}"#)
            .unwrap();
        assert_eq!(cfg.celebration_interval, 5);
        assert_eq!(cfg.radii.mow, 70.0);
        assert_eq!(cfg.radii.water, ToolRadii::default().water);
        assert_eq!(cfg.rewards, RewardTable::default());
    }

    #[test]
    fn broken_json_falls_back_to_defaults() {
        let cfg = GardenConfig::from_json_or_default(Some("{not json"));
        assert_eq!(cfg, GardenConfig::default());
    }

    #[test]
    fn sanitize_repairs_zero_interval_and_density() {
        let cfg = GardenConfig::from_json(r#"{"celebration_interval": 0, "grass": {"density": -1.0}}"#)
            .unwrap();
        assert_eq!(cfg.celebration_interval, 12);
        assert!(cfg.grass.density > 0.0);
    }

    #[test]
    fn sanitize_bounds_extreme_values() {
        let cfg = GardenConfig::from_json(
            r#"{"grass": {"density": 1e300, "water_ttl_frames": 1e300}, "paint_smoothing": 1e-300,
                "radii": {"mow": 1e300, "water": -5.0}, "max_particles": 18446744073709551615,
                "history_limit": 0, "placement_min_interval": 1e300}"#,
        )
        .unwrap();
        assert!(cfg.grass.density <= MAX_DENSITY);
        assert!(cfg.grass.water_ttl_frames <= MAX_WATER_TTL);
        assert_eq!(cfg.paint_smoothing, MIN_PAINT_SMOOTHING);
        assert_eq!(cfg.radii.mow, MAX_RADIUS);
        assert_eq!(cfg.radii.water, 0.0);
        assert_eq!(cfg.max_particles, MAX_PARTICLES);
        assert_eq!(cfg.history_limit, 1);
        assert_eq!(cfg.placement_min_interval, MAX_SECONDS);
    }
}
