//! Core data models shared by every garden component.

use serde::{Deserialize, Serialize};

/// A position (or a velocity) in the field's logical coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub width: f64,
    pub height: f64,
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
        }
    }
}

impl FieldBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }

    pub fn clamp(&self, p: Point) -> Point {
        let x = if p.x.is_finite() { p.x.clamp(0.0, self.width) } else { 0.0 };
        let y = if p.y.is_finite() { p.y.clamp(0.0, self.height) } else { 0.0 };
        Point::new(x, y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// The interaction mode selected in the tool palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Water,
    PlantFlower,
    PlantVegetable,
    Mow,
    Paint,
    Rainbow,
    PlaceShape,
    SpawnButterfly,
    HarvestFlower,
    HarvestVegetable,
    CatchButterfly,
    Sweep,
    /// Acts on selection, never on the canvas.
    Undo,
    /// Acts on selection, never on the canvas.
    Reset,
}

impl Tool {
    pub const ALL: [Tool; 14] = [
        Tool::Water,
        Tool::PlantFlower,
        Tool::PlantVegetable,
        Tool::Mow,
        Tool::Paint,
        Tool::Rainbow,
        Tool::PlaceShape,
        Tool::SpawnButterfly,
        Tool::HarvestFlower,
        Tool::HarvestVegetable,
        Tool::CatchButterfly,
        Tool::Sweep,
        Tool::Undo,
        Tool::Reset,
    ];

    /// Tools that fire once on selection instead of drawing on the canvas.
    pub fn is_immediate(self) -> bool {
        matches!(self, Tool::Undo | Tool::Reset)
    }

    /// Tools whose drag action fires on every pointer move.
    pub fn is_continuous(self) -> bool {
        matches!(
            self,
            Tool::Water | Tool::Mow | Tool::Paint | Tool::Rainbow | Tool::Sweep
        )
    }

    /// Tools whose drag action is throttled between placements.
    pub fn is_discrete(self) -> bool {
        !self.is_immediate() && !self.is_continuous()
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tool::Water => "💧",
            Tool::PlantFlower => "🌸",
            Tool::PlantVegetable => "🥕",
            Tool::Mow => "🚜",
            Tool::Paint => "🎨",
            Tool::Rainbow => "🌈",
            Tool::PlaceShape => "⭐",
            Tool::SpawnButterfly => "🦋",
            Tool::HarvestFlower => "💐",
            Tool::HarvestVegetable => "🧺",
            Tool::CatchButterfly => "🥅",
            Tool::Sweep => "🧹",
            Tool::Undo => "↶",
            Tool::Reset => "☁️",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Water => "Water",
            Tool::PlantFlower => "Flowers",
            Tool::PlantVegetable => "Veggies",
            Tool::Mow => "Mower",
            Tool::Paint => "Paint",
            Tool::Rainbow => "Rainbow",
            Tool::PlaceShape => "Stickers",
            Tool::SpawnButterfly => "Butterfly",
            Tool::HarvestFlower => "Pick Flowers",
            Tool::HarvestVegetable => "Pick Veggies",
            Tool::CatchButterfly => "Net",
            Tool::Sweep => "Broom",
            Tool::Undo => "Undo",
            Tool::Reset => "New Garden",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn next(self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Fall,
            Season::Fall => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Season::Spring => "🌸",
            Season::Summer => "☀️",
            Season::Fall => "🍂",
            Season::Winter => "❄️",
        }
    }

    /// Lawn base colour used by the renderer.
    pub fn lawn_color(self) -> &'static str {
        match self {
            Season::Spring => "#4CAF50",
            Season::Summer => "#2E7D32",
            Season::Fall => "#8D6E63",
            Season::Winter => "#ECEFF1",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCategory {
    Water,
    Plant,
    Harvest,
    Mow,
    Paint,
    Butterfly,
    Celebration,
    Shape,
    Sweep,
    Undo,
    Reset,
    Season,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PraiseCategory {
    Water,
    Plant,
    Harvest,
    Mow,
    Paint,
    Butterfly,
    General,
    Celebration,
    /// "One!", "Two!"... after the n-th harvest (1-based).
    Counting(u32),
}

/// Abstract feedback for the presentation layer. The core never waits on
/// these being consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GardenEvent {
    PlaySound(SoundCategory),
    SpeakPraise(PraiseCategory),
}

/// Reward counters shown in the stats panel and persisted with the garden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rewards {
    pub stars: u64,
    pub flowers_picked: u32,
    pub vegetables_picked: u32,
    pub butterflies_caught: u32,
}

impl Rewards {
    pub fn add_stars(&mut self, amount: u32) {
        self.stars = self.stars.saturating_add(amount as u64);
    }

    pub fn take_stars(&mut self, amount: u32) {
        self.stars = self.stars.saturating_sub(amount as u64);
    }
}
