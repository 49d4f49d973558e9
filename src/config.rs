//! Command-line configuration for the viewer.

use clap::Parser;
use thiserror::Error;

use crate::{engine::Screen, sim::MoveSpeeds};

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about = "Horizon-clipped wall projection with an overhead minimap")]
pub struct Config {
    /// Window width in logical units.
    #[arg(long, default_value_t = 640)]
    pub width: usize,

    /// Window height in logical units.
    #[arg(long, default_value_t = 480)]
    pub height: usize,

    /// Frame-rate cap (stands in for vsync).
    #[arg(long, default_value_t = 60)]
    pub fps: usize,

    /// Walking speed in map units per second.
    #[arg(long, default_value_t = 120.0)]
    pub walk_speed: f32,

    /// Turning speed in radians per second.
    #[arg(long, default_value_t = std::f32::consts::PI)]
    pub turn_speed: f32,

    /// Hide the camera-plane indicator on the minimap.
    #[arg(long)]
    pub no_camera_plane: bool,

    /// Draw the horizon line.
    #[arg(long)]
    pub show_horizon: bool,

    /// Window title.
    #[arg(long, default_value = "Nada")]
    pub title: String,
}

/// Rejected command-line values.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("window size {0}x{1} has a zero dimension")]
    ZeroSize(usize, usize),

    #[error("fps must be at least 1")]
    ZeroFps,

    /// Speeds must be finite and non-negative.
    #[error("invalid {name} speed: {value}")]
    BadSpeed { name: &'static str, value: f32 },
}

impl Default for Config {
    fn default() -> Self {
        let speeds = MoveSpeeds::default();
        Self {
            width: 640,
            height: 480,
            fps: 60,
            walk_speed: speeds.walk,
            turn_speed: speeds.turn,
            no_camera_plane: false,
            show_horizon: false,
            title: "Nada".to_string(),
        }
    }
}

impl Config {
    /// Parse `std::env::args` and validate.
    pub fn from_args() -> Result<Self, ConfigError> {
        let cfg = Self::parse();
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroSize(self.width, self.height));
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        for (name, value) in [("walk", self.walk_speed), ("turn", self.turn_speed)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::BadSpeed { name, value });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn screen(&self) -> Screen {
        Screen::new(self.width, self.height)
    }

    #[inline]
    pub fn speeds(&self) -> MoveSpeeds {
        MoveSpeeds {
            walk: self.walk_speed,
            turn: self.turn_speed,
        }
    }

    #[inline]
    pub fn show_camera_plane(&self) -> bool {
        !self.no_camera_plane
    }
}
