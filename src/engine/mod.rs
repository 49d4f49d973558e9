pub mod clip;
pub mod minimap;
pub mod projection;
mod projector;
pub mod scene;
pub mod types;

pub use clip::{ClipOutcome, clip_to_horizon};
pub use minimap::MinimapData;
pub use projector::ViewProjector;
pub use types::Screen;
