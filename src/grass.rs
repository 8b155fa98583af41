//! Lawn model: blades with sway, cut and watering-driven regrowth.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::clock::frames;
use crate::config::{GrassRepresentation, GrassTuning};
use crate::model::{FieldBounds, Point};
use crate::rng::GardenRng;

/// Patches cover this many blade cells per side.
const PATCH_SCALE: f64 = 3.0;
/// Upper bound on lawn entities, whatever the density and field size.
pub const MAX_BLADES: usize = 250_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrassBlade {
    pub position: Point,
    pub base_height: f64,
    pub height: f64,
    pub sway_phase: f64,
    /// Radians per reference frame.
    pub sway_speed: f64,
    pub sway_amount: f64,
    pub cut: bool,
    /// 0 = just cut, 1 = fully grown.
    pub regrowth: f64,
    /// Small lightness offset in `[-1, 1]` for a natural look.
    pub hue_jitter: f64,
}

impl GrassBlade {
    pub fn sway_offset(&self) -> f64 {
        (self.sway_phase.sin() * self.sway_amount).clamp(-10.0, 10.0)
    }

    fn cut_down(&mut self, stub_fraction: f64) {
        self.cut = true;
        self.regrowth = 0.0;
        self.height = self.base_height * stub_fraction;
    }

    fn restore(&mut self) {
        self.cut = false;
        self.regrowth = 1.0;
        self.height = self.base_height;
    }

    fn regrow(&mut self, amount: f64, stub_fraction: f64) {
        if !self.cut || !(amount > 0.0) {
            return;
        }
        self.regrowth = (self.regrowth + amount).clamp(0.0, 1.0);
        if self.regrowth >= 1.0 {
            self.restore();
        } else {
            self.height = self.base_height * (stub_fraction + (1.0 - stub_fraction) * self.regrowth);
        }
    }
}

/// A decaying source of regrowth created by each watering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WateredArea {
    pub center: Point,
    pub radius: f64,
    pub strength: f64,
    /// Reference frames left.
    pub ttl: f64,
}

impl WateredArea {
    /// `(1 - d/r) * strength` inside the radius, zero outside.
    pub fn influence_at(&self, p: Point) -> f64 {
        if self.radius <= 0.0 {
            return 0.0;
        }
        let d = self.center.distance(p);
        if d >= self.radius {
            0.0
        } else {
            (1.0 - d / self.radius) * self.strength
        }
    }
}

#[derive(Clone, Debug)]
pub struct GrassField {
    bounds: FieldBounds,
    tuning: GrassTuning,
    blades: Vec<GrassBlade>,
    watered: Vec<WateredArea>,
}

impl GrassField {
    pub fn new(tuning: GrassTuning) -> Self {
        Self {
            bounds: FieldBounds::default(),
            tuning,
            blades: Vec::new(),
            watered: Vec::new(),
        }
    }

    /// Scatters blades on a jittered grid, roughly `density` per unit area.
    pub fn initialize(&mut self, bounds: FieldBounds, density: f64, rng: &mut GardenRng) {
        self.bounds = bounds;
        self.tuning.density = density;
        self.watered.clear();
        self.blades.clear();
        if !(density > 0.0) {
            return;
        }
        let patches = self.tuning.representation == GrassRepresentation::Patches;
        let mut cell = (1.0 / density).sqrt();
        if patches {
            cell *= PATCH_SCALE;
        }
        let (min_h, max_h) = (self.tuning.min_height, self.tuning.max_height);
        let height_scale = if patches { 1.5 } else { 1.0 };
        if bounds.area() / (cell * cell) > MAX_BLADES as f64 {
            cell = (bounds.area() / MAX_BLADES as f64).sqrt();
        }
        let cols = (bounds.width / cell).floor().max(1.0) as usize;
        let rows = (bounds.height / cell).floor().max(1.0) as usize;
        self.blades.reserve(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let cx = (col as f64 + 0.5) * cell + rng.spread(cell * 0.66);
                let cy = (row as f64 + 0.5) * cell + rng.spread(cell * 0.66);
                let base_height = rng.range(min_h, max_h) * height_scale;
                self.blades.push(GrassBlade {
                    position: bounds.clamp(Point::new(cx, cy)),
                    base_height,
                    height: base_height,
                    sway_phase: rng.range(0.0, TAU),
                    sway_speed: rng.range(0.008, 0.023),
                    sway_amount: rng.range(2.0, 6.0),
                    cut: false,
                    regrowth: 1.0,
                    hue_jitter: rng.spread(2.0),
                });
            }
        }
        log::debug!(
            "grass field {}x{} initialised with {} {}",
            bounds.width,
            bounds.height,
            self.blades.len(),
            if patches { "patches" } else { "blades" }
        );
    }

    pub fn reset(&mut self, rng: &mut GardenRng) {
        let (bounds, density) = (self.bounds, self.tuning.density);
        self.initialize(bounds, density, rng);
    }

    pub fn bounds(&self) -> FieldBounds {
        self.bounds
    }

    pub fn blades(&self) -> &[GrassBlade] {
        &self.blades
    }

    pub fn watered_areas(&self) -> &[WateredArea] {
        &self.watered
    }

    pub fn blades_within(&self, point: Point, radius: f64) -> impl Iterator<Item = (usize, &GrassBlade)> {
        self.blades
            .iter()
            .enumerate()
            .filter(move |(_, b)| b.position.distance(point) <= radius)
    }

    pub fn cut_count(&self) -> usize {
        self.blades.iter().filter(|b| b.cut).count()
    }

    /// Cuts every standing blade within `radius`; returns the indices of
    /// the blades that were newly cut.
    pub fn mow(&mut self, point: Point, radius: f64) -> Vec<usize> {
        let stub = self.tuning.stub_fraction;
        let mut cut = Vec::new();
        for (i, blade) in self.blades.iter_mut().enumerate() {
            if !blade.cut && blade.position.distance(point) <= radius {
                blade.cut_down(stub);
                cut.push(i);
            }
        }
        cut
    }

    /// Registers a watered area; cut blades inside it regrow over the
    /// following ticks. Returns how many cut blades it reaches.
    pub fn water(&mut self, point: Point, radius: f64) -> usize {
        if !(radius > 0.0) {
            return 0;
        }
        self.watered.push(WateredArea {
            center: point,
            radius,
            strength: 1.0,
            ttl: self.tuning.water_ttl_frames,
        });
        self.blades
            .iter()
            .filter(|b| b.cut && b.position.distance(point) < radius)
            .count()
    }

    /// Stands the given blades back up (used to undo a mow pass).
    pub fn restore(&mut self, indices: &[usize]) -> usize {
        let mut restored = 0;
        for &i in indices {
            if let Some(blade) = self.blades.get_mut(i) {
                if blade.cut {
                    blade.restore();
                    restored += 1;
                }
            }
        }
        restored
    }

    pub fn tick(&mut self, dt: f64) {
        let step = frames(dt);
        let rate = self.tuning.regrowth_rate;
        let stub = self.tuning.stub_fraction;
        for blade in &mut self.blades {
            blade.sway_phase += blade.sway_speed * step;
            if blade.sway_phase > TAU * 2.0 {
                blade.sway_phase %= TAU;
            }
            if blade.cut && !self.watered.is_empty() {
                let influence: f64 = self.watered.iter().map(|a| a.influence_at(blade.position)).sum();
                blade.regrow(influence * rate * step, stub);
            }
        }
        let decay = self.tuning.water_decay.powf(step);
        let min_strength = self.tuning.water_min_strength;
        self.watered.retain_mut(|area| {
            area.strength *= decay;
            area.ttl -= step;
            area.ttl > 0.0 && area.strength > min_strength
        });
    }
}
