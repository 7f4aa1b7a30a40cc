mod engine;
mod schedule;
mod types;

pub use engine::{RotationEngine, RotationHandle};
pub use schedule::Rotation;
pub use types::{Frame, HIGHLIGHT_SEQUENCE, Phase, RotationTimings, ViewState};
