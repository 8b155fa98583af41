//! Saved-garden snapshot.
//!
//! Only the things a child would miss are kept: plants, stickers, paint,
//! reward counters and the season. Grass and particles are rebuilt fresh.

use serde::{Deserialize, Serialize};

use crate::error::GardenError;
use crate::model::{Rewards, Season};
use crate::paint::PaintStroke;
use crate::plants::{Decoration, Plant};

pub const SAVE_VERSION: u32 = 1;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenState {
    /// Missing in saves written before versioning; treated as current.
    pub version: u32,
    pub plants: Vec<Plant>,
    /// Static stickers only; butterflies fly away between sessions.
    pub shapes: Vec<Decoration>,
    pub strokes: Vec<PaintStroke>,
    pub rewards: Rewards,
    pub action_count: u64,
    pub harvest_count: u32,
    pub season: Season,
}

impl GardenState {
    pub fn to_json(&self) -> Result<String, GardenError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, GardenError> {
        let mut state: GardenState = serde_json::from_str(raw)?;
        if state.version > SAVE_VERSION {
            return Err(GardenError::UnsupportedVersion {
                found: state.version,
                supported: SAVE_VERSION,
            });
        }
        state.version = SAVE_VERSION;
        state.shapes.retain(|d| !d.is_butterfly());
        Ok(state)
    }

    /// A missing or unreadable save means a fresh garden.
    pub fn from_json_or_fresh(raw: Option<&str>) -> Self {
        match raw.map(Self::from_json) {
            Some(Ok(state)) => state,
            Some(Err(e)) => {
                log::warn!("discarding saved garden: {e}");
                Self::fresh()
            }
            None => Self::fresh(),
        }
    }

    pub fn fresh() -> Self {
        Self {
            version: SAVE_VERSION,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty() && self.shapes.is_empty() && self.strokes.is_empty()
    }
}
