//! Rendering abstraction layer.
//!
//! *The rest of the crate never touches a pixel buffer directly.*
//! The scene builder produces a list of [`DrawCall`]s (back-to-front) and
//! hands them to a type that implements [`Renderer`].
//!
//! * Coordinates are logical units with **y pointing up**; back-ends flip as
//!   needed.
//! * A blanket-impl [`RendererExt`] adds `draw_frame` so call-sites stay short.

use glam::Vec2;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

pub mod colour {
    use super::Rgba;

    pub const SKY_BLUE: Rgba = 0x00_87CEEB;
    pub const BLACK: Rgba = 0x00_000000;
    pub const RED: Rgba = 0x00_FF0000;
    pub const DARK_GREEN: Rgba = 0x00_006400;
    pub const WHITE: Rgba = 0x00_FFFFFF;
    pub const GREY: Rgba = 0x00_808080;
}

/// One immediate-mode primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall<'a> {
    Clear(Rgba),
    Line {
        a: Vec2,
        b: Vec2,
        width: f32,
        colour: Rgba,
    },
    /// Filled disc.
    Circle {
        centre: Vec2,
        radius: f32,
        colour: Rgba,
    },
    /// Outline through `points`, closed back to the first point.
    Polygon {
        points: &'a [Vec2],
        width: f32,
        colour: Rgba,
    },
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure, which
/// is where a windowed caller presents it.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution.
    fn begin_frame(&mut self, width: usize, height: usize);

    fn clear(&mut self, colour: Rgba);

    fn line(&mut self, a: Vec2, b: Vec2, width: f32, colour: Rgba);

    fn circle(&mut self, centre: Vec2, radius: f32, colour: Rgba);

    fn polygon(&mut self, points: &[Vec2], width: f32, colour: Rgba);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Its error, if any, is returned unchanged.
    fn end_frame<F, E>(&mut self, submit: F) -> Result<(), E>
    where
        F: FnOnce(&[Rgba], usize, usize) -> Result<(), E>;
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F, E>(
        &mut self,
        width: usize,
        height: usize,
        calls: &[DrawCall<'_>],
        submit: F,
    ) -> Result<(), E>
    where
        F: FnOnce(&[Rgba], usize, usize) -> Result<(), E>,
    {
        self.begin_frame(width, height);
        for c in calls {
            match *c {
                DrawCall::Clear(colour) => self.clear(colour),
                DrawCall::Line {
                    a,
                    b,
                    width,
                    colour,
                } => self.line(a, b, width, colour),
                DrawCall::Circle {
                    centre,
                    radius,
                    colour,
                } => self.circle(centre, radius, colour),
                DrawCall::Polygon {
                    points,
                    width,
                    colour,
                } => self.polygon(points, width, colour),
            }
        }
        self.end_frame(submit)
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

mod software;

pub use software::Software;
