//! The garden session: owns every component and executes tool commands.
//!
//! Input arrives as [`GardenAction`]s (pointer events, palette clicks and
//! animation frames); the session routes them through the
//! [`ToolController`] and applies the resulting commands to the grass,
//! plants, paint and effects it owns.

use std::collections::VecDeque;

use crate::clock::SimulationClock;
use crate::config::GardenConfig;
use crate::effects::{EffectKind, EffectSystem, SpawnConfig};
use crate::feedback::{FeedbackQueue, FeedbackSink};
use crate::grass::GrassField;
use crate::model::{FieldBounds, GardenEvent, Point, PraiseCategory, Rewards, Season, SoundCategory, Tool};
use crate::paint::{BrushSize, PAINT_COLORS, PaintCanvas, StrokeStyle};
use crate::persist::{GardenState, SAVE_VERSION};
use crate::plants::{Cleared, DecorationKind, PlantKind, PlantRegistry};
use crate::rng::GardenRng;
use crate::tools::{Stroke, ToolCommand, ToolController};

/// Confetti falls from just above the visible field.
const CONFETTI_DROP_Y: f64 = -20.0;
const TOUCH_SPARKLES: usize = 3;
const PLACE_SPARKLES: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub enum GardenAction {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    SelectTool(Tool),
    SetPaintColor(String),
    SetBrushSize(BrushSize),
    CycleSeason,
    /// Advance the simulation by `dt` seconds.
    Tick(f64),
    /// Animation-frame timestamp in milliseconds.
    Frame(f64),
    Resize(FieldBounds),
    Undo,
    Reset,
}

#[derive(Clone, Debug)]
enum Undoable {
    Plant(u64),
    Decoration(u64),
    Stroke(u64),
    Mow { blades: Vec<usize>, cleared: Cleared },
}

/// An undoable action plus what it earned, so undo can take it back.
#[derive(Clone, Debug)]
struct HistoryEntry {
    action: Undoable,
    stars: u32,
    counted: bool,
}

#[derive(Clone, Debug, Default)]
struct Gesture {
    /// A continuous tool already counted its action for this drag.
    counted: bool,
    stars: u32,
    mowed_blades: Vec<usize>,
    mowed_items: Cleared,
}

pub struct GardenSession {
    config: GardenConfig,
    rng: GardenRng,
    /// Separate stream so phrase picks never perturb the simulation.
    voice_rng: GardenRng,
    clock: SimulationClock,
    grass: GrassField,
    effects: EffectSystem,
    plants: PlantRegistry,
    paint: PaintCanvas,
    tools: ToolController,
    feedback: FeedbackQueue,
    rewards: Rewards,
    action_count: u64,
    harvest_count: u32,
    season: Season,
    history: VecDeque<HistoryEntry>,
    /// Highest action count that already had its celebration.
    celebrated_through: u64,
    gesture: Gesture,
    paint_color: String,
    brush: BrushSize,
}

impl GardenSession {
    pub fn new(config: GardenConfig, bounds: FieldBounds) -> Self {
        let config = config.sanitized();
        let mut rng = GardenRng::from_seed_u64(config.seed);
        let voice_rng = GardenRng::from_seed_u64(config.seed.wrapping_add(1));
        let mut grass = GrassField::new(config.grass.clone());
        grass.initialize(bounds, config.grass.density, &mut rng);
        log::info!("garden session started ({}x{}, seed {})", bounds.width, bounds.height, config.seed);
        Self {
            rng,
            voice_rng,
            clock: SimulationClock::new(),
            grass,
            effects: EffectSystem::new(bounds, config.max_particles),
            plants: PlantRegistry::new(bounds, config.radii.plant_clearance),
            paint: PaintCanvas::new(config.paint_smoothing),
            tools: ToolController::new(config.placement_min_distance, config.placement_min_interval),
            feedback: FeedbackQueue::new(),
            rewards: Rewards::default(),
            action_count: 0,
            harvest_count: 0,
            season: Season::default(),
            history: VecDeque::new(),
            celebrated_through: 0,
            gesture: Gesture::default(),
            paint_color: PAINT_COLORS[0].to_string(),
            brush: BrushSize::default(),
            config,
        }
    }

    pub fn dispatch(&mut self, action: GardenAction) {
        match action {
            GardenAction::PointerDown(p) => self.pointer_down(p),
            GardenAction::PointerMove(p) => self.pointer_move(p),
            GardenAction::PointerUp => self.pointer_up(),
            GardenAction::SelectTool(tool) => self.select_tool(tool),
            GardenAction::SetPaintColor(color) => self.paint_color = color,
            GardenAction::SetBrushSize(size) => self.brush = size,
            GardenAction::CycleSeason => self.cycle_season(),
            GardenAction::Tick(dt) => self.tick(dt),
            GardenAction::Frame(ts) => self.frame(ts),
            GardenAction::Resize(bounds) => self.resize(bounds),
            GardenAction::Undo => {
                self.undo();
            }
            GardenAction::Reset => self.reset(),
        }
    }

    // ---- read-only views for the renderer ----

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    pub fn bounds(&self) -> FieldBounds {
        self.grass.bounds()
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn grass(&self) -> &GrassField {
        &self.grass
    }

    pub fn effects(&self) -> &EffectSystem {
        &self.effects
    }

    pub fn plants(&self) -> &PlantRegistry {
        &self.plants
    }

    pub fn paint(&self) -> &PaintCanvas {
        &self.paint
    }

    pub fn tools(&self) -> &ToolController {
        &self.tools
    }

    pub fn selected_tool(&self) -> Tool {
        self.tools.selected()
    }

    pub fn rewards(&self) -> Rewards {
        self.rewards
    }

    pub fn action_count(&self) -> u64 {
        self.action_count
    }

    pub fn harvest_count(&self) -> u32 {
        self.harvest_count
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn paint_color(&self) -> &str {
        &self.paint_color
    }

    pub fn brush(&self) -> BrushSize {
        self.brush
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Delivers queued sound/praise events; returns how many were delivered.
    pub fn drain_events(&mut self, sink: &mut dyn FeedbackSink) -> usize {
        self.feedback.drain_into(sink, &mut self.voice_rng)
    }

    /// Removes queued events without phrase selection (tests, headless runs).
    pub fn take_events(&mut self) -> Vec<GardenEvent> {
        self.feedback.take_ready()
    }

    // ---- input ----

    pub fn pointer_down(&mut self, point: Point) {
        let Some(point) = self.to_field(point) else {
            return;
        };
        if self.tools.is_active() {
            // A second finger lands before the first lifts: end the first drag.
            self.tools.pointer_up();
            self.close_gesture();
        }
        self.gesture = Gesture::default();
        let now = self.clock.elapsed();
        if let Some(cmd) = self.tools.pointer_down(point, now) {
            if touches_plants(cmd.tool) {
                self.touch(point);
            }
            self.execute(cmd);
        }
    }

    pub fn pointer_move(&mut self, point: Point) {
        let Some(point) = self.to_field(point) else {
            return;
        };
        let now = self.clock.elapsed();
        if let Some(cmd) = self.tools.pointer_move(point, now) {
            self.execute(cmd);
        }
    }

    pub fn pointer_up(&mut self) {
        if self.tools.pointer_up().is_some() {
            self.close_gesture();
        }
    }

    /// Undo and reset act right away; every other tool becomes the selection.
    pub fn select_tool(&mut self, tool: Tool) {
        if self.tools.select(tool) {
            self.close_gesture();
        }
        match tool {
            Tool::Undo => {
                self.undo();
            }
            Tool::Reset => self.reset(),
            _ => log::debug!("selected {tool:?}"),
        }
    }

    pub fn cycle_season(&mut self) {
        self.season = self.season.next();
        self.feedback.sound(SoundCategory::Season);
        log::debug!("season is now {:?}", self.season);
    }

    fn to_field(&self, point: Point) -> Option<Point> {
        point.is_finite().then(|| self.bounds().clamp(point))
    }

    /// Cosmetic wiggle when a plant is poked with a tool that does not act on it.
    fn touch(&mut self, point: Point) {
        if self.plants.touch(point, self.config.radii.touch).is_some() {
            self.effects
                .spawn(EffectKind::Sparkle, point, SpawnConfig::count(TOUCH_SPARKLES), &mut self.rng);
            self.feedback.sound(SoundCategory::Plant);
        }
    }

    // ---- tool execution ----

    fn execute(&mut self, cmd: ToolCommand) {
        let done = match cmd.tool {
            Tool::Water => self.water(cmd),
            Tool::PlantFlower => self.plant(cmd.point, PlantKind::Flower),
            Tool::PlantVegetable => self.plant(cmd.point, PlantKind::Vegetable),
            Tool::Mow => self.mow(cmd.point),
            Tool::Paint | Tool::Rainbow => self.paint_stroke(cmd),
            Tool::PlaceShape => self.place(cmd.point, DecorationKind::Shape),
            Tool::SpawnButterfly => self.place(cmd.point, DecorationKind::Butterfly),
            Tool::HarvestFlower => self.harvest(cmd.point, PlantKind::Flower),
            Tool::HarvestVegetable => self.harvest(cmd.point, PlantKind::Vegetable),
            Tool::CatchButterfly => self.catch(cmd.point),
            Tool::Sweep => self.sweep(cmd.point),
            Tool::Undo | Tool::Reset => false,
        };
        log::debug!(
            "{:?} {:?} at ({:.0}, {:.0}): {}",
            cmd.tool,
            cmd.stroke,
            cmd.point.x,
            cmd.point.y,
            if done { "ok" } else { "nothing to do" }
        );
    }

    /// Counts a successful action: continuous tools once per drag, discrete
    /// tools every time. Returns false when this drag was already counted.
    fn record_action(&mut self, tool: Tool, sound: SoundCategory, praise: Option<PraiseCategory>) -> bool {
        if tool.is_continuous() {
            if self.gesture.counted {
                return false;
            }
            self.gesture.counted = true;
        }
        self.action_count += 1;
        self.feedback.sound(sound);
        if let Some(p) = praise {
            self.feedback.praise(p);
        }
        if self.action_count % self.config.celebration_interval == 0
            && self.action_count > self.celebrated_through
        {
            self.celebrated_through = self.action_count;
            self.celebrate();
        }
        true
    }

    fn celebrate(&mut self) {
        let origin = Point::new(self.bounds().center().x, CONFETTI_DROP_Y);
        self.effects
            .spawn(EffectKind::Confetti, origin, SpawnConfig::default(), &mut self.rng);
        self.feedback.sound(SoundCategory::Celebration);
        self.feedback.praise(PraiseCategory::Celebration);
        log::info!("celebration after {} actions", self.action_count);
    }

    fn water(&mut self, cmd: ToolCommand) -> bool {
        let radii = &self.config.radii;
        let (water_r, boost_r) = (radii.water, radii.plant_boost);
        self.grass.water(cmd.point, water_r);
        self.plants.water(cmd.point, boost_r);
        let skip = cmd.stroke == Stroke::Continue && self.rng.chance(self.config.water_skip_chance);
        if !skip {
            self.effects
                .spawn(EffectKind::Water, cmd.point, SpawnConfig::default(), &mut self.rng);
        }
        if self.record_action(Tool::Water, SoundCategory::Water, Some(PraiseCategory::Water)) {
            self.rewards.add_stars(self.config.rewards.water);
        }
        true
    }

    fn plant(&mut self, point: Point, kind: PlantKind) -> bool {
        let Some(id) = self.plants.plant(point, kind, &mut self.rng).map(|p| p.id) else {
            return false;
        };
        self.effects
            .spawn(EffectKind::Sparkle, point, SpawnConfig::count(PLACE_SPARKLES), &mut self.rng);
        let stars = self.config.rewards.plant;
        self.rewards.add_stars(stars);
        self.push_history(Undoable::Plant(id), stars, true);
        let tool = match kind {
            PlantKind::Flower => Tool::PlantFlower,
            PlantKind::Vegetable => Tool::PlantVegetable,
        };
        self.record_action(tool, SoundCategory::Plant, Some(PraiseCategory::Plant));
        true
    }

    /// Cuts grass and clears plants, stickers and low butterflies in one pass.
    fn mow(&mut self, point: Point) -> bool {
        let radius = self.config.radii.mow;
        let low_band = self.bounds().height - self.config.mowable_band;
        let blades = self.grass.mow(point, radius);
        let cleared = self.plants.mow(point, radius, low_band);
        if blades.is_empty() && cleared.is_empty() {
            return false;
        }
        if !blades.is_empty() {
            self.effects
                .spawn(EffectKind::Clipping, point, SpawnConfig::default(), &mut self.rng);
        }
        if !cleared.is_empty() {
            let glyphs: Vec<String> = cleared
                .plants
                .iter()
                .map(|p| p.glyph().to_string())
                .chain(cleared.decorations.iter().map(|d| d.glyph.clone()))
                .collect();
            for glyph in glyphs {
                self.effects
                    .spawn(EffectKind::Flyaway, point, SpawnConfig::glyph(glyph), &mut self.rng);
            }
            self.effects
                .spawn(EffectKind::Sparkle, point, SpawnConfig::default(), &mut self.rng);
            let earned = self.config.rewards.mowed_item.saturating_mul(cleared.len() as u32);
            self.rewards.add_stars(earned);
            self.gesture.stars = self.gesture.stars.saturating_add(earned);
        }
        self.gesture.mowed_blades.extend(blades);
        self.gesture.mowed_items.plants.extend(cleared.plants);
        self.gesture.mowed_items.decorations.extend(cleared.decorations);
        self.record_action(Tool::Mow, SoundCategory::Mow, Some(PraiseCategory::Mow));
        true
    }

    fn paint_stroke(&mut self, cmd: ToolCommand) -> bool {
        match cmd.stroke {
            Stroke::Start => {
                let style = if cmd.tool == Tool::Rainbow {
                    StrokeStyle::Rainbow
                } else {
                    StrokeStyle::Solid(self.paint_color.clone())
                };
                self.paint.begin(cmd.point, style, self.brush.width());
                self.record_action(cmd.tool, SoundCategory::Paint, Some(PraiseCategory::Paint));
                true
            }
            Stroke::Continue => self.paint.extend(cmd.point),
        }
    }

    fn place(&mut self, point: Point, kind: DecorationKind) -> bool {
        let id = self.plants.spawn_decorative(point, kind, &mut self.rng).id;
        match kind {
            DecorationKind::Shape => {
                self.effects
                    .spawn(EffectKind::Starburst, point, SpawnConfig::default(), &mut self.rng);
                let stars = self.config.rewards.shape;
                self.rewards.add_stars(stars);
                self.push_history(Undoable::Decoration(id), stars, true);
                self.record_action(Tool::PlaceShape, SoundCategory::Shape, None);
            }
            DecorationKind::Butterfly => {
                self.effects
                    .spawn(EffectKind::Sparkle, point, SpawnConfig::count(PLACE_SPARKLES), &mut self.rng);
                self.rewards.add_stars(self.config.rewards.butterfly);
                self.record_action(Tool::SpawnButterfly, SoundCategory::Butterfly, Some(PraiseCategory::Butterfly));
            }
        }
        true
    }

    fn harvest(&mut self, point: Point, kind: PlantKind) -> bool {
        let Some(plant) = self.plants.harvest(point, self.config.radii.harvest, kind) else {
            return false;
        };
        self.effects
            .spawn(EffectKind::Flyaway, plant.position, SpawnConfig::glyph(plant.glyph()), &mut self.rng);
        self.effects
            .spawn(EffectKind::Sparkle, plant.position, SpawnConfig::default(), &mut self.rng);
        let table = &self.config.rewards;
        let (stars, tool) = match kind {
            PlantKind::Flower => {
                self.rewards.flowers_picked += 1;
                (table.harvest_flower, Tool::HarvestFlower)
            }
            PlantKind::Vegetable => {
                self.rewards.vegetables_picked += 1;
                (table.harvest_vegetable, Tool::HarvestVegetable)
            }
        };
        self.rewards.add_stars(stars);
        self.harvest_count += 1;
        if self.harvest_count <= self.config.counting_limit {
            let at = self.clock.tick_after(self.config.counting_delay_secs);
            self.feedback
                .schedule(at, GardenEvent::SpeakPraise(PraiseCategory::Counting(self.harvest_count)));
        }
        self.record_action(tool, SoundCategory::Harvest, Some(PraiseCategory::Harvest));
        true
    }

    fn catch(&mut self, point: Point) -> bool {
        let caught = self.plants.catch(point, self.config.radii.catch, self.config.max_catch);
        if caught.is_empty() {
            return false;
        }
        for d in &caught {
            let stars = if d.is_butterfly() {
                self.rewards.butterflies_caught += 1;
                self.config.rewards.catch_butterfly
            } else {
                self.config.rewards.catch_shape
            };
            self.rewards.add_stars(stars);
            self.effects
                .spawn(EffectKind::Flyaway, d.position, SpawnConfig::glyph(d.glyph.clone()), &mut self.rng);
            self.effects
                .spawn(EffectKind::Starburst, d.position, SpawnConfig::default(), &mut self.rng);
        }
        self.record_action(Tool::CatchButterfly, SoundCategory::Butterfly, Some(PraiseCategory::Butterfly));
        true
    }

    fn sweep(&mut self, point: Point) -> bool {
        let radius = self.config.radii.sweep;
        let shapes = self.plants.sweep(point, radius);
        let strokes = self.paint.sweep(point, radius);
        if shapes.is_empty() && strokes.is_empty() {
            return false;
        }
        self.effects
            .spawn(EffectKind::Sparkle, point, SpawnConfig::default(), &mut self.rng);
        self.record_action(Tool::Sweep, SoundCategory::Sweep, Some(PraiseCategory::General));
        true
    }

    /// Finalizes whatever the drag produced: an open stroke, a mow pass.
    fn close_gesture(&mut self) {
        let gesture = std::mem::take(&mut self.gesture);
        if let Some(id) = self.paint.finish() {
            self.push_history(Undoable::Stroke(id), gesture.stars, gesture.counted);
            return;
        }
        if !gesture.mowed_blades.is_empty() || !gesture.mowed_items.is_empty() {
            let mow = Undoable::Mow {
                blades: gesture.mowed_blades,
                cleared: gesture.mowed_items,
            };
            self.push_history(mow, gesture.stars, gesture.counted);
        }
    }

    fn push_history(&mut self, action: Undoable, stars: u32, counted: bool) {
        self.history.push_back(HistoryEntry { action, stars, counted });
        while self.history.len() > self.config.history_limit {
            self.history.pop_front();
        }
    }

    /// Reverts the most recent undoable action that still applies, along
    /// with the stars and action count it earned.
    pub fn undo(&mut self) -> bool {
        while let Some(entry) = self.history.pop_back() {
            let undone = match entry.action {
                Undoable::Plant(id) => self.plants.remove_plant(id).is_some(),
                Undoable::Decoration(id) => self.plants.remove_decoration(id).is_some(),
                Undoable::Stroke(id) => self.paint.remove(id).is_some(),
                Undoable::Mow { blades, cleared } => {
                    let restored = self.grass.restore(&blades);
                    let items = cleared.len();
                    self.plants.reinsert(cleared);
                    restored + items > 0
                }
            };
            if undone {
                self.rewards.take_stars(entry.stars);
                if entry.counted {
                    self.action_count = self.action_count.saturating_sub(1);
                }
                self.feedback.sound(SoundCategory::Undo);
                log::debug!("undo applied, {} left", self.history.len());
                return true;
            }
        }
        false
    }

    /// Fresh lawn, empty garden, spring again. Stars are kept.
    pub fn reset(&mut self) {
        self.grass.reset(&mut self.rng);
        self.effects.clear();
        self.plants.clear();
        self.paint.clear();
        self.tools.reset();
        self.feedback.clear();
        self.history.clear();
        self.gesture = Gesture::default();
        self.action_count = 0;
        self.celebrated_through = 0;
        self.harvest_count = 0;
        self.season = Season::Spring;
        self.feedback.sound(SoundCategory::Reset);
        log::info!("garden reset");
    }

    // ---- simulation ----

    pub fn tick(&mut self, dt: f64) {
        let dt = self.clock.advance(dt);
        self.grass.tick(dt);
        self.effects.tick(dt);
        self.plants.grow_tick(dt);
        self.plants.wander_tick(dt, &mut self.rng);
        self.feedback.release_due(self.clock.tick_count());
    }

    /// Call when frames resume after a pause (hidden tab); the next frame
    /// steps one reference frame instead of the whole gap.
    pub fn resync_clock(&mut self) {
        self.clock.resync();
    }

    pub fn frame(&mut self, timestamp_ms: f64) {
        let dt = self.clock.frame_dt(timestamp_ms);
        self.tick(dt);
    }

    /// Rebuilds the lawn for a new canvas size; plants keep their places.
    pub fn resize(&mut self, bounds: FieldBounds) {
        if bounds == self.bounds() {
            return;
        }
        self.grass.initialize(bounds, self.config.grass.density, &mut self.rng);
        self.effects.set_bounds(bounds);
        self.plants.set_bounds(bounds);
        log::debug!("field resized to {}x{}", bounds.width, bounds.height);
    }

    // ---- persistence ----

    pub fn serialize(&self) -> GardenState {
        GardenState {
            version: SAVE_VERSION,
            plants: self.plants.plants().to_vec(),
            shapes: self.plants.shapes().cloned().collect(),
            strokes: self.paint.strokes().to_vec(),
            rewards: self.rewards,
            action_count: self.action_count,
            harvest_count: self.harvest_count,
            season: self.season,
        }
    }

    pub fn deserialize(&mut self, state: GardenState) {
        let shapes = state.shapes.into_iter().filter(|d| !d.is_butterfly()).collect();
        self.plants.load(state.plants, shapes);
        self.paint.load(state.strokes);
        self.rewards = state.rewards;
        self.action_count = state.action_count;
        self.celebrated_through = state.action_count;
        self.harvest_count = state.harvest_count;
        self.season = state.season;
        self.effects.clear();
        self.history.clear();
        self.feedback.clear();
        self.tools.reset();
        log::info!(
            "garden loaded: {} plants, {} stickers, {} strokes",
            self.plants.plants().len(),
            self.plants.decorations().len(),
            self.paint.strokes().len()
        );
    }

    /// Loads a JSON save if it parses, otherwise keeps the fresh garden.
    pub fn load_json_or_fresh(&mut self, raw: Option<&str>) {
        self.deserialize(GardenState::from_json_or_fresh(raw));
    }
}

/// Tools that leave plants alone, so poking one makes it wiggle.
fn touches_plants(tool: Tool) -> bool {
    !matches!(
        tool,
        Tool::Water | Tool::Mow | Tool::HarvestFlower | Tool::HarvestVegetable | Tool::Undo | Tool::Reset
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn session() -> GardenSession {
        GardenSession::new(GardenConfig::default(), FieldBounds::new(800.0, 600.0))
    }

    fn tap(s: &mut GardenSession, tool: Tool, x: f64, y: f64) {
        s.select_tool(tool);
        s.pointer_down(Point::new(x, y));
        s.pointer_up();
    }

    #[test]
    fn resync_skips_the_hidden_gap() {
        let mut s = session();
        s.frame(0.0);
        s.frame(16.0);
        let before = s.clock().elapsed();
        s.resync_clock();
        s.frame(60_000.0);
        assert!((s.clock().elapsed() - before - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn mow_drag_counts_once() {
        let mut s = session();
        s.select_tool(Tool::Mow);
        s.pointer_down(Point::new(100.0, 100.0));
        for i in 1..10 {
            s.pointer_move(Point::new(100.0 + i as f64 * 20.0, 100.0));
        }
        s.pointer_up();
        assert_eq!(s.action_count(), 1);
        assert!(s.grass().cut_count() > 0);
        assert!(s.can_undo());
    }

    #[test]
    fn planting_counts_each_success() {
        let mut s = session();
        tap(&mut s, Tool::PlantFlower, 100.0, 100.0);
        tap(&mut s, Tool::PlantFlower, 101.0, 101.0);
        tap(&mut s, Tool::PlantVegetable, 300.0, 100.0);
        assert_eq!(s.plants().plants().len(), 2);
        assert_eq!(s.action_count(), 2);
        assert_eq!(s.rewards().stars, 4);
    }

    #[test]
    fn harvest_schedules_counting_praise() {
        let mut s = session();
        tap(&mut s, Tool::PlantFlower, 100.0, 100.0);
        tap(&mut s, Tool::HarvestFlower, 100.0, 100.0);
        let events = s.take_events();
        assert!(events.contains(&GardenEvent::SpeakPraise(PraiseCategory::Harvest)));
        assert!(!events.contains(&GardenEvent::SpeakPraise(PraiseCategory::Counting(1))));
        for _ in 0..60 {
            s.tick(DT);
        }
        assert!(s.take_events().contains(&GardenEvent::SpeakPraise(PraiseCategory::Counting(1))));
        assert_eq!(s.rewards().flowers_picked, 1);
    }

    #[test]
    fn undo_restores_a_mow_pass() {
        let mut s = session();
        tap(&mut s, Tool::PlantFlower, 200.0, 200.0);
        tap(&mut s, Tool::Mow, 200.0, 200.0);
        assert!(s.plants().plants().is_empty());
        assert!(s.grass().cut_count() > 0);
        s.select_tool(Tool::Undo);
        assert_eq!(s.grass().cut_count(), 0);
        assert_eq!(s.plants().plants().len(), 1);
        assert_eq!(s.selected_tool(), Tool::Mow);
        assert_eq!(s.rewards().stars, 2);
        assert!(s.undo());
        assert!(s.plants().plants().is_empty());
        assert_eq!((s.rewards().stars, s.action_count()), (0, 0));
        assert!(!s.undo());
    }

    #[test]
    fn undo_skips_entries_that_no_longer_apply() {
        let mut s = session();
        tap(&mut s, Tool::PlaceShape, 400.0, 300.0);
        tap(&mut s, Tool::PlantFlower, 100.0, 100.0);
        tap(&mut s, Tool::HarvestFlower, 100.0, 100.0);
        assert!(s.undo());
        assert_eq!(s.plants().decorations().len(), 0);
    }

    #[test]
    fn rainbow_stroke_is_finished_on_release() {
        let mut s = session();
        s.select_tool(Tool::Rainbow);
        s.pointer_down(Point::new(10.0, 10.0));
        s.pointer_move(Point::new(60.0, 10.0));
        assert!(s.paint().active().is_some());
        s.pointer_up();
        assert!(s.paint().active().is_none());
        assert_eq!(s.paint().strokes()[0].style, StrokeStyle::Rainbow);
        assert_eq!(s.action_count(), 1);
    }

    #[test]
    fn poking_a_plant_with_the_brush_bounces_it() {
        let mut s = session();
        tap(&mut s, Tool::PlantFlower, 100.0, 100.0);
        let before = s.action_count();
        tap(&mut s, Tool::CatchButterfly, 105.0, 100.0);
        assert_eq!(s.plants().plants()[0].bounce, 1.0);
        assert_eq!(s.action_count(), before);
    }

    #[test]
    fn save_round_trip_keeps_the_garden() {
        let mut s = session();
        tap(&mut s, Tool::PlantVegetable, 100.0, 100.0);
        tap(&mut s, Tool::PlaceShape, 300.0, 100.0);
        tap(&mut s, Tool::SpawnButterfly, 500.0, 100.0);
        s.cycle_season();
        let json = s.serialize().to_json().unwrap();

        let mut other = session();
        other.load_json_or_fresh(Some(&json));
        assert_eq!(other.plants().plants(), s.plants().plants());
        assert_eq!(other.plants().shapes().count(), 1);
        assert_eq!(other.plants().butterflies().count(), 0);
        assert_eq!(other.season(), Season::Summer);
        assert_eq!(other.rewards(), s.rewards());
    }
}
