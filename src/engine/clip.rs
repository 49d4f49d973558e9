//! Horizon culling for view-frame segments.
//!
//! Everything with `y ≥ horizon_y` is in front of the camera. A segment with
//! one endpoint on each side is cut where it crosses the horizon, keeping the
//! visible endpoint first.

use glam::{Vec2, vec2};

/// What survives of one segment after horizon culling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipOutcome {
    /// Both endpoints visible, segment passes through untouched.
    Whole(Vec2, Vec2),
    /// One endpoint visible: `(visible endpoint, point on the horizon)`.
    Clipped(Vec2, Vec2),
    /// Both endpoints behind the camera.
    Hidden,
}

impl ClipOutcome {
    /// The drawable pair, if any.
    #[inline]
    pub fn pair(self) -> Option<(Vec2, Vec2)> {
        match self {
            ClipOutcome::Whole(a, b) | ClipOutcome::Clipped(a, b) => Some((a, b)),
            ClipOutcome::Hidden => None,
        }
    }
}

/// Cull / clip segment `a → b` against the line `y = horizon_y`.
pub fn clip_to_horizon(a: Vec2, b: Vec2, horizon_y: f32) -> ClipOutcome {
    match (a.y >= horizon_y, b.y >= horizon_y) {
        (true, true) => ClipOutcome::Whole(a, b),
        (false, false) => ClipOutcome::Hidden,
        (true, false) => ClipOutcome::Clipped(a, horizon_point(a, b, horizon_y)),
        (false, true) => ClipOutcome::Clipped(b, horizon_point(b, a, horizon_y)),
    }
}

/// Where the line through visible `va` and hidden `vb` meets the horizon.
///
/// The two endpoints sit on opposite sides of the horizon, so `Δy ≠ 0` and
/// the slope is never zero. A vertical segment has no slope; its crossing
/// shares `va.x`.
fn horizon_point(va: Vec2, vb: Vec2, horizon_y: f32) -> Vec2 {
    let dx = vb.x - va.x;
    if dx == 0.0 {
        return vec2(va.x, horizon_y);
    }
    let m = (vb.y - va.y) / dx;
    let b_int = va.y - m * va.x;
    let x = (horizon_y - b_int) / m;
    if x.is_finite() {
        vec2(x, horizon_y)
    } else {
        // |dx| so small the slope overflowed: treat as vertical
        vec2(va.x, horizon_y)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
