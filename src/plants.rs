//! Plants, stickers and butterflies living on the lawn.

use serde::{Deserialize, Serialize};

use crate::clock::frames;
use crate::model::{FieldBounds, Point};
use crate::rng::GardenRng;

/// Per-frame fraction of the remaining gap a plant closes towards its goal size.
const GROWTH_SMOOTHING: f64 = 0.1;
/// A fresh sprout starts at this fraction of its base size.
const SPROUT_FRACTION: f64 = 0.5;
/// Reference frames after planting before a plant counts as ready.
const READY_AFTER_FRAMES: f64 = 180.0;
const MAX_SIZE_FACTOR: f64 = 3.5;
const WATER_SIZE_BOOST: f64 = 0.3;
const WATER_PROGRESS_BOOST: f64 = 30.0;
const BUTTERFLY_MAX_SPEED: f64 = 2.0;
const BUTTERFLY_JITTER: f64 = 0.3;

pub const SHAPE_GLYPHS: [&str; 12] = [
    "⭐", "🌟", "💖", "🌺", "🦋", "🐱", "🐶", "🐸", "🌻", "🌈", "☀️", "🌙",
];
pub const BUTTERFLY_GLYPHS: [&str; 2] = ["🦋", "🧚"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantKind {
    Flower,
    Vegetable,
}

impl PlantKind {
    pub fn varieties(self) -> &'static [Variety] {
        match self {
            PlantKind::Flower => &[Variety::Sunflower, Variety::Rose, Variety::Daisy, Variety::Tulip],
            PlantKind::Vegetable => &[Variety::Carrot, Variety::Tomato, Variety::Corn, Variety::Pumpkin],
        }
    }

    fn base_size(self) -> f64 {
        match self {
            PlantKind::Flower => 20.0,
            PlantKind::Vegetable => 15.0,
        }
    }

    fn max_target(self) -> f64 {
        match self {
            PlantKind::Flower => 50.0,
            PlantKind::Vegetable => 35.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variety {
    Sunflower,
    Rose,
    Daisy,
    Tulip,
    Carrot,
    Tomato,
    Corn,
    Pumpkin,
}

impl Variety {
    pub fn kind(self) -> PlantKind {
        match self {
            Variety::Sunflower | Variety::Rose | Variety::Daisy | Variety::Tulip => PlantKind::Flower,
            Variety::Carrot | Variety::Tomato | Variety::Corn | Variety::Pumpkin => PlantKind::Vegetable,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Variety::Sunflower => "🌻",
            Variety::Rose => "🌹",
            Variety::Daisy => "🌼",
            Variety::Tulip => "🌷",
            Variety::Carrot => "🥕",
            Variety::Tomato => "🍅",
            Variety::Corn => "🌽",
            Variety::Pumpkin => "🎃",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GrowthStage {
    #[default]
    Seeded,
    Growing,
    Ready,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: u64,
    pub position: Point,
    pub variety: Variety,
    pub base_size: f64,
    pub size: f64,
    pub target_size: f64,
    /// Reference frames of growth so far (watering adds to it).
    pub growth_progress: f64,
    pub growth_duration: f64,
    pub stage: GrowthStage,
    /// Cosmetic bounce after being touched, 1 decaying to 0.
    #[serde(default)]
    pub bounce: f64,
}

fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

impl Plant {
    pub fn kind(&self) -> PlantKind {
        self.variety.kind()
    }

    pub fn glyph(&self) -> &'static str {
        self.variety.glyph()
    }

    /// Size the plant is currently easing towards.
    pub fn goal_size(&self) -> f64 {
        let t = if self.growth_duration > 0.0 {
            self.growth_progress / self.growth_duration
        } else {
            1.0
        };
        self.base_size + (self.target_size - self.base_size) * ease_out_cubic(t)
    }

    /// Flowers are planted in bloom; vegetables must ripen first.
    pub fn is_harvestable(&self) -> bool {
        match self.kind() {
            PlantKind::Flower => true,
            PlantKind::Vegetable => self.stage == GrowthStage::Ready,
        }
    }

    fn grow(&mut self, step: f64) {
        self.growth_progress += step;
        self.stage = if self.growth_progress >= READY_AFTER_FRAMES {
            GrowthStage::Ready
        } else {
            GrowthStage::Growing
        };
        let goal = self.goal_size();
        if self.size < goal {
            let k = 1.0 - (1.0 - GROWTH_SMOOTHING).powf(step);
            self.size += (goal - self.size) * k;
        }
        if self.bounce > 0.0 {
            self.bounce = (self.bounce - 0.05 * step).max(0.0);
        }
    }

    fn water_boost(&mut self) {
        let cap = self.base_size * MAX_SIZE_FACTOR;
        self.target_size = (self.target_size + self.base_size * WATER_SIZE_BOOST).min(cap);
        self.growth_progress += WATER_PROGRESS_BOOST;
    }

    /// Repairs values a hand-edited or older save might carry.
    pub fn sanitize(&mut self, bounds: FieldBounds) {
        self.position = repair_position(self.position, bounds);
        let base = self.kind().base_size();
        if !(self.base_size > 0.0) || !self.base_size.is_finite() {
            self.base_size = base;
        }
        let cap = self.base_size * MAX_SIZE_FACTOR;
        if !self.target_size.is_finite() {
            self.target_size = self.base_size;
        }
        self.target_size = self.target_size.clamp(self.base_size, cap);
        if !self.size.is_finite() {
            self.size = self.base_size * SPROUT_FRACTION;
        }
        self.size = self.size.clamp(0.0, cap);
        if !self.growth_progress.is_finite() {
            self.growth_progress = 0.0;
        }
        self.growth_progress = self.growth_progress.max(0.0);
        if !(self.growth_duration > 0.0) || !self.growth_duration.is_finite() {
            self.growth_duration = 300.0;
        }
        self.bounce = 0.0;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecorationKind {
    Shape,
    Butterfly,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub id: u64,
    pub kind: DecorationKind,
    pub position: Point,
    pub glyph: String,
    pub size: f64,
    pub rotation: f64,
    /// Radians per reference frame; shapes only.
    pub spin: f64,
    /// Units per reference frame; butterflies only.
    pub velocity: Point,
    pub flutter_phase: f64,
}

impl Decoration {
    pub fn is_butterfly(&self) -> bool {
        self.kind == DecorationKind::Butterfly
    }
}

/// Everything a mower pass removed from the registry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cleared {
    pub plants: Vec<Plant>,
    pub decorations: Vec<Decoration>,
}

impl Cleared {
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty() && self.decorations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.plants.len() + self.decorations.len()
    }
}

#[derive(Clone, Debug)]
pub struct PlantRegistry {
    bounds: FieldBounds,
    clearance: f64,
    plants: Vec<Plant>,
    decorations: Vec<Decoration>,
    next_id: u64,
}

impl PlantRegistry {
    pub fn new(bounds: FieldBounds, clearance: f64) -> Self {
        Self {
            bounds,
            clearance,
            plants: Vec::new(),
            decorations: Vec::new(),
            next_id: 1,
        }
    }

    pub fn set_bounds(&mut self, bounds: FieldBounds) {
        self.bounds = bounds;
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Decoration> {
        self.decorations.iter().filter(|d| !d.is_butterfly())
    }

    pub fn butterflies(&self) -> impl Iterator<Item = &Decoration> {
        self.decorations.iter().filter(|d| d.is_butterfly())
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Plants at `point` unless another plant is within the clearance radius.
    pub fn plant(&mut self, point: Point, kind: PlantKind, rng: &mut GardenRng) -> Option<&Plant> {
        if self.plants.iter().any(|p| p.position.distance(point) < self.clearance) {
            return None;
        }
        let variety = rng.pick(kind.varieties())?;
        let base_size = kind.base_size();
        let plant = Plant {
            id: self.take_id(),
            position: self.bounds.clamp(point),
            variety,
            base_size,
            size: base_size * SPROUT_FRACTION,
            target_size: rng.range(base_size, kind.max_target()),
            growth_progress: 0.0,
            growth_duration: rng.range(300.0, 480.0),
            stage: GrowthStage::Seeded,
            bounce: 0.0,
        };
        log::debug!("planted {:?} #{} at ({:.0}, {:.0})", variety, plant.id, point.x, point.y);
        self.plants.push(plant);
        self.plants.last()
    }

    pub fn grow_tick(&mut self, dt: f64) {
        let step = frames(dt);
        if !(step > 0.0) {
            return;
        }
        for plant in &mut self.plants {
            plant.grow(step);
        }
    }

    /// Boosts every plant within `radius`; returns how many were boosted.
    pub fn water(&mut self, point: Point, radius: f64) -> usize {
        let mut boosted = 0;
        for plant in self.plants.iter_mut().filter(|p| p.position.distance(point) < radius) {
            plant.water_boost();
            boosted += 1;
        }
        boosted
    }

    /// Removes the nearest harvestable plant of `kind` within `radius`.
    pub fn harvest(&mut self, point: Point, radius: f64, kind: PlantKind) -> Option<Plant> {
        let idx = self
            .plants
            .iter()
            .enumerate()
            .filter(|(_, p)| p.kind() == kind && p.is_harvestable())
            .map(|(i, p)| (i, p.position.distance(point)))
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)?;
        Some(self.plants.remove(idx))
    }

    /// Bounces the nearest plant within `radius`; returns its id.
    pub fn touch(&mut self, point: Point, radius: f64) -> Option<u64> {
        let plant = self
            .plants
            .iter_mut()
            .filter(|p| p.position.distance(point) <= radius)
            .min_by(|a, b| a.position.distance(point).total_cmp(&b.position.distance(point)))?;
        plant.bounce = 1.0;
        Some(plant.id)
    }

    pub fn spawn_decorative(&mut self, point: Point, kind: DecorationKind, rng: &mut GardenRng) -> &Decoration {
        let (glyph, size, spin, velocity) = match kind {
            DecorationKind::Shape => (
                rng.pick(&SHAPE_GLYPHS).unwrap_or("⭐"),
                rng.range(30.0, 50.0),
                rng.spread(0.04),
                Point::default(),
            ),
            DecorationKind::Butterfly => (
                rng.pick(&BUTTERFLY_GLYPHS).unwrap_or("🦋"),
                rng.range(25.0, 35.0),
                0.0,
                Point::new(rng.spread(3.0), rng.spread(3.0)),
            ),
        };
        let decoration = Decoration {
            id: self.take_id(),
            kind,
            position: self.bounds.clamp(point),
            glyph: glyph.to_string(),
            size,
            rotation: 0.0,
            spin,
            velocity,
            flutter_phase: rng.range(0.0, std::f64::consts::TAU),
        };
        let idx = self.decorations.len();
        self.decorations.push(decoration);
        &self.decorations[idx]
    }

    /// Butterflies drift with a random walk and bounce off the field edges;
    /// shapes spin in place.
    pub fn wander_tick(&mut self, dt: f64, rng: &mut GardenRng) {
        let step = frames(dt);
        if !(step > 0.0) {
            return;
        }
        let bounds = self.bounds;
        for d in &mut self.decorations {
            match d.kind {
                DecorationKind::Shape => d.rotation += d.spin * step,
                DecorationKind::Butterfly => {
                    d.velocity.x += rng.spread(BUTTERFLY_JITTER) * step;
                    d.velocity.y += rng.spread(BUTTERFLY_JITTER) * step;
                    let speed = d.velocity.distance(Point::default());
                    if speed > BUTTERFLY_MAX_SPEED {
                        let k = BUTTERFLY_MAX_SPEED / speed;
                        d.velocity = Point::new(d.velocity.x * k, d.velocity.y * k);
                    }
                    d.position = d.position.offset(d.velocity.x * step, d.velocity.y * step);
                    if d.position.x < 0.0 {
                        d.position.x = 0.0;
                        d.velocity.x = d.velocity.x.abs();
                    } else if d.position.x > bounds.width {
                        d.position.x = bounds.width;
                        d.velocity.x = -d.velocity.x.abs();
                    }
                    if d.position.y < 0.0 {
                        d.position.y = 0.0;
                        d.velocity.y = d.velocity.y.abs();
                    } else if d.position.y > bounds.height {
                        d.position.y = bounds.height;
                        d.velocity.y = -d.velocity.y.abs();
                    }
                    d.flutter_phase += 0.2 * step;
                }
            }
        }
    }

    /// Nets up to `max` entities within `radius`, butterflies first, nearest first.
    pub fn catch(&mut self, point: Point, radius: f64, max: usize) -> Vec<Decoration> {
        let mut hits: Vec<(usize, bool, f64)> = self
            .decorations
            .iter()
            .enumerate()
            .map(|(i, d)| (i, d.is_butterfly(), d.position.distance(point)))
            .filter(|(_, _, dist)| *dist <= radius)
            .collect();
        hits.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.total_cmp(&b.2)));
        hits.truncate(max);
        let mut picked: Vec<usize> = hits.iter().map(|h| h.0).collect();
        let order = picked.clone();
        picked.sort_unstable_by(|a, b| b.cmp(a));
        let mut removed: Vec<(usize, Decoration)> =
            picked.into_iter().map(|i| (i, self.decorations.remove(i))).collect();
        removed.sort_by_key(|(i, _)| order.iter().position(|o| o == i));
        removed.into_iter().map(|(_, d)| d).collect()
    }

    /// Clears everything low-lying within `radius`. Butterflies are only
    /// reachable when they flutter below `butterfly_min_y`.
    pub fn mow(&mut self, point: Point, radius: f64, butterfly_min_y: f64) -> Cleared {
        let in_range = |p: Point| p.distance(point) <= radius;
        let (plants, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.plants)
            .into_iter()
            .partition(|p| in_range(p.position));
        self.plants = kept;
        let (decorations, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.decorations)
            .into_iter()
            .partition(|d| in_range(d.position) && (!d.is_butterfly() || d.position.y > butterfly_min_y));
        self.decorations = kept;
        Cleared { plants, decorations }
    }

    /// Removes static shapes within `radius`.
    pub fn sweep(&mut self, point: Point, radius: f64) -> Vec<Decoration> {
        let (swept, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.decorations)
            .into_iter()
            .partition(|d| !d.is_butterfly() && d.position.distance(point) <= radius);
        self.decorations = kept;
        swept
    }

    pub fn remove_plant(&mut self, id: u64) -> Option<Plant> {
        let idx = self.plants.iter().position(|p| p.id == id)?;
        Some(self.plants.remove(idx))
    }

    pub fn remove_decoration(&mut self, id: u64) -> Option<Decoration> {
        let idx = self.decorations.iter().position(|d| d.id == id)?;
        Some(self.decorations.remove(idx))
    }

    /// Puts back previously removed items (undo of a mow pass).
    pub fn reinsert(&mut self, cleared: Cleared) {
        self.plants.extend(cleared.plants);
        self.decorations.extend(cleared.decorations);
    }

    /// Replaces the registry contents with loaded items.
    pub fn load(&mut self, mut plants: Vec<Plant>, mut decorations: Vec<Decoration>) {
        let bounds = self.bounds;
        for p in &mut plants {
            p.sanitize(bounds);
        }
        for d in &mut decorations {
            d.position = repair_position(d.position, bounds);
            if !(d.size > 0.0) || !d.size.is_finite() {
                d.size = 40.0;
            }
        }
        self.next_id = plants
            .iter()
            .map(|p| p.id)
            .chain(decorations.iter().map(|d| d.id))
            .max()
            .map_or(1, |m| m + 1);
        self.plants = plants;
        self.decorations = decorations;
    }

    pub fn clear(&mut self) {
        self.plants.clear();
        self.decorations.clear();
    }
}

/// Saves are loaded before the canvas has its final size, so only positions
/// that can never be drawn are moved.
fn repair_position(p: Point, bounds: FieldBounds) -> Point {
    if p.is_finite() {
        Point::new(p.x.max(0.0), p.y.max(0.0))
    } else {
        bounds.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DT: f64 = 1.0 / 60.0;

    fn registry() -> PlantRegistry {
        PlantRegistry::new(FieldBounds::new(800.0, 600.0), 30.0)
    }

    #[test]
    fn clearance_blocks_crowded_planting() {
        let mut rng = GardenRng::default();
        let mut reg = registry();
        assert!(reg.plant(Point::new(10.0, 10.0), PlantKind::Flower, &mut rng).is_some());
        assert!(reg.plant(Point::new(12.0, 12.0), PlantKind::Flower, &mut rng).is_none());
        assert_eq!(reg.plants().len(), 1);
        assert!(reg.plant(Point::new(60.0, 10.0), PlantKind::Vegetable, &mut rng).is_some());
        assert_eq!(reg.plants().len(), 2);
    }

    #[test]
    fn vegetables_ripen_before_harvest() {
        let mut rng = GardenRng::default();
        let mut reg = registry();
        let id = reg.plant(Point::new(100.0, 100.0), PlantKind::Vegetable, &mut rng).unwrap().id;
        reg.plant(Point::new(300.0, 100.0), PlantKind::Vegetable, &mut rng);
        assert!(reg.harvest(Point::new(100.0, 100.0), 30.0, PlantKind::Vegetable).is_none());
        for _ in 0..200 {
            reg.grow_tick(DT);
        }
        let picked = reg.harvest(Point::new(100.0, 100.0), 30.0, PlantKind::Vegetable).unwrap();
        assert_eq!(picked.id, id);
        assert_eq!(reg.plants().len(), 1);
    }

    #[test]
    fn flowers_are_harvestable_once_placed() {
        let mut rng = GardenRng::default();
        let mut reg = registry();
        reg.plant(Point::new(100.0, 100.0), PlantKind::Flower, &mut rng);
        assert!(reg.harvest(Point::new(100.0, 100.0), 30.0, PlantKind::Vegetable).is_none());
        assert!(reg.harvest(Point::new(110.0, 100.0), 30.0, PlantKind::Flower).is_some());
        assert!(reg.plants().is_empty());
    }

    #[test]
    fn harvest_picks_the_nearest() {
        let mut rng = GardenRng::default();
        let mut reg = registry();
        reg.plant(Point::new(100.0, 100.0), PlantKind::Flower, &mut rng);
        let near = reg.plant(Point::new(140.0, 100.0), PlantKind::Flower, &mut rng).unwrap().id;
        let got = reg.harvest(Point::new(125.0, 100.0), 30.0, PlantKind::Flower).unwrap();
        assert_eq!(got.id, near);
    }

    #[test]
    fn watering_raises_target_up_to_cap() {
        let mut rng = GardenRng::default();
        let mut reg = registry();
        reg.plant(Point::new(100.0, 100.0), PlantKind::Flower, &mut rng);
        for _ in 0..50 {
            assert_eq!(reg.water(Point::new(100.0, 100.0), 75.0), 1);
        }
        let p = &reg.plants()[0];
        assert_eq!(p.target_size, p.base_size * MAX_SIZE_FACTOR);
        assert_eq!(reg.water(Point::new(500.0, 500.0), 75.0), 0);
    }

    #[test]
    fn butterflies_stay_inside_the_field() {
        let mut rng = GardenRng::default();
        let mut reg = PlantRegistry::new(FieldBounds::new(100.0, 100.0), 30.0);
        for i in 0..5 {
            reg.spawn_decorative(Point::new(i as f64 * 20.0, 50.0), DecorationKind::Butterfly, &mut rng);
        }
        for _ in 0..2000 {
            reg.wander_tick(DT, &mut rng);
        }
        for b in reg.butterflies() {
            assert!(FieldBounds::new(100.0, 100.0).contains(b.position));
            assert!(b.velocity.distance(Point::default()) <= BUTTERFLY_MAX_SPEED + 1e-9);
        }
    }

    #[test]
    fn catch_prefers_butterflies_and_respects_limit() {
        let mut rng = GardenRng::default();
        let mut reg = registry();
        reg.spawn_decorative(Point::new(100.0, 100.0), DecorationKind::Shape, &mut rng);
        let far = reg.spawn_decorative(Point::new(150.0, 100.0), DecorationKind::Butterfly, &mut rng).id;
        let near = reg.spawn_decorative(Point::new(110.0, 100.0), DecorationKind::Butterfly, &mut rng).id;
        let caught = reg.catch(Point::new(100.0, 100.0), 80.0, 2);
        assert_eq!(caught.iter().map(|d| d.id).collect::<Vec<_>>(), vec![near, far]);
        assert_eq!(reg.decorations().len(), 1);
        assert!(reg.catch(Point::new(700.0, 500.0), 80.0, 2).is_empty());
    }

    #[test]
    fn mow_spares_high_butterflies() {
        let mut rng = GardenRng::default();
        let mut reg = registry();
        reg.plant(Point::new(100.0, 500.0), PlantKind::Vegetable, &mut rng);
        reg.spawn_decorative(Point::new(110.0, 500.0), DecorationKind::Shape, &mut rng);
        reg.spawn_decorative(Point::new(100.0, 520.0), DecorationKind::Butterfly, &mut rng);
        reg.spawn_decorative(Point::new(100.0, 100.0), DecorationKind::Butterfly, &mut rng);
        let low = reg.mow(Point::new(100.0, 500.0), 50.0, 450.0);
        assert_eq!(low.len(), 3);
        let high = reg.mow(Point::new(100.0, 100.0), 50.0, 450.0);
        assert!(high.is_empty());
        assert_eq!(reg.butterflies().count(), 1);
    }

    #[test]
    fn sweep_only_removes_shapes() {
        let mut rng = GardenRng::default();
        let mut reg = registry();
        reg.spawn_decorative(Point::new(100.0, 100.0), DecorationKind::Shape, &mut rng);
        reg.spawn_decorative(Point::new(100.0, 100.0), DecorationKind::Butterfly, &mut rng);
        assert_eq!(reg.sweep(Point::new(100.0, 100.0), 60.0).len(), 1);
        assert_eq!(reg.decorations().len(), 1);
    }

    #[test]
    fn load_repairs_and_continues_ids() {
        let mut rng = GardenRng::default();
        let mut reg = registry();
        let mut p = reg.plant(Point::new(100.0, 100.0), PlantKind::Flower, &mut rng).unwrap().clone();
        p.id = 41;
        p.size = f64::NAN;
        p.position = Point::new(-50.0, 9000.0);
        let mut lost = p.clone();
        lost.id = 7;
        lost.position = Point::new(f64::NAN, 10.0);
        reg.load(vec![p, lost], Vec::new());
        let loaded = &reg.plants()[0];
        assert!(loaded.size.is_finite());
        // Saved beyond the current field: kept, the canvas may still be growing.
        assert_eq!(loaded.position, Point::new(0.0, 9000.0));
        assert_eq!(reg.plants()[1].position, reg.bounds.center());
        let next = reg.plant(Point::new(400.0, 300.0), PlantKind::Flower, &mut rng).unwrap();
        assert_eq!(next.id, 42);
    }

    proptest! {
        #[test]
        fn growth_never_shrinks(seed in 0u64..500, waters in proptest::collection::vec(0usize..400, 0..6)) {
            let mut rng = GardenRng::from_seed_u64(seed);
            let mut reg = registry();
            reg.plant(Point::new(50.0, 50.0), PlantKind::Flower, &mut rng);
            let mut last = reg.plants()[0].size;
            for t in 0..400 {
                if waters.contains(&t) {
                    reg.water(Point::new(50.0, 50.0), 75.0);
                }
                reg.grow_tick(DT);
                let size = reg.plants()[0].size;
                prop_assert!(size >= last);
                prop_assert!(size <= reg.plants()[0].base_size * MAX_SIZE_FACTOR);
                last = size;
            }
        }
    }
}
