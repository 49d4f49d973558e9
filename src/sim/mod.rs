mod clock;
mod input;
mod movement;
mod state;

pub use clock::FrameClock;
pub use input::InputCmd;
pub use movement::MoveSpeeds;
pub use state::Simulation;
