mod camera;
mod geometry;
pub mod map;

pub use camera::Pose;
pub use geometry::WallPolyline;
