//! Garden toy engine: grass field, particle effects, plants and the tool
//! dispatcher that ties pointer input to them. Nothing in this crate talks
//! to the browser; the yew front-end lives in the binary target.

pub mod clock;
pub mod config;
pub mod effects;
pub mod error;
pub mod feedback;
pub mod grass;
pub mod model;
pub mod paint;
pub mod persist;
pub mod plants;
pub mod rng;
pub mod session;
pub mod tools;

pub use config::GardenConfig;
pub use error::GardenError;
pub use feedback::{FeedbackSink, NullSink};
pub use model::{FieldBounds, GardenEvent, Point, PraiseCategory, Season, SoundCategory, Tool};
pub use persist::GardenState;
pub use session::{GardenAction, GardenSession};
