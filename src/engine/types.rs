use glam::{Vec2, vec2};

/// Constants that depend on the *viewport*, not on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
    pub half_w: f32, // pre-derived for speed
    pub half_h: f32, // pre-derived for speed
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            half_w: w as f32 * 0.5,
            half_h: h as f32 * 0.5,
        }
    }

    /// Where the player lands after rotation into the view frame.
    #[inline]
    pub fn centre(&self) -> Vec2 {
        vec2(self.half_w, self.half_h)
    }

    /// Points with `y` below this line are behind the camera.
    #[inline]
    pub fn horizon_y(&self) -> f32 {
        self.half_h
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(640, 480)
    }
}
