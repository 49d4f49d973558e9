//! ---------------------------------------------------------------------------
//! Software (CPU) immediate-mode rasteriser
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format, row-major,
//!   row 0 at the top.
//! * Logical coordinates are y-up; `to_pixel` flips them onto rows.
//! * Lines are clipped to the frame in `f64` before any integer maths, and
//!   discs only visit rows/columns inside the frame, so far-away geometry
//!   costs nothing.
//! ---------------------------------------------------------------------------

use glam::{DVec2, Vec2, dvec2};

use crate::renderer::{Renderer, Rgba};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
    }

    fn clear(&mut self, colour: Rgba) {
        self.scratch.fill(colour);
    }

    fn line(&mut self, a: Vec2, b: Vec2, width: f32, colour: Rgba) {
        let (Some(p0), Some(p1)) = (self.to_pixel(a), self.to_pixel(b)) else {
            return;
        };
        if self.scratch.is_empty() {
            return;
        }
        // brush never needs to be wider than the frame itself
        let limit = self.width.max(self.height) as f32;
        let half = ((width - 1.0) * 0.5).round().clamp(0.0, limit) as i32;

        let pad = half as f64 + 0.5;
        let min = dvec2(-pad, -pad);
        let max = dvec2(self.width as f64 - 1.0 + pad, self.height as f64 - 1.0 + pad);
        let Some((p0, p1)) = clip_to_rect(p0, p1, min, max) else {
            return;
        };

        let (x0, y0) = (p0.x.round() as i32, p0.y.round() as i32);
        let (x1, y1) = (p1.x.round() as i32, p1.y.round() as i32);
        self.draw_line(x0, y0, x1, y1, half, colour);
    }

    fn circle(&mut self, centre: Vec2, radius: f32, colour: Rgba) {
        let Some(c) = self.to_pixel(centre) else {
            return;
        };
        if !radius.is_finite() || radius < 0.0 || self.scratch.is_empty() {
            return;
        }
        let c = c.round();
        let r = (radius as f64).round();

        // only rows and columns that are both inside the disc and the frame
        let top = (c.y - r).max(0.0);
        let bottom = (c.y + r).min(self.height as f64 - 1.0);
        if top > bottom {
            return;
        }
        for row in top as i32..=bottom as i32 {
            let dy = row as f64 - c.y;
            let span = (r * r - dy * dy).max(0.0).sqrt().floor();
            let left = (c.x - span).max(0.0);
            let right = (c.x + span).min(self.width as f64 - 1.0);
            if left > right {
                continue;
            }
            for col in left as i32..=right as i32 {
                self.plot(col, row, colour);
            }
        }
    }

    fn polygon(&mut self, points: &[Vec2], width: f32, colour: Rgba) {
        if points.len() < 2 {
            return;
        }
        for w in points.windows(2) {
            self.line(w[0], w[1], width, colour);
        }
        // closing edge
        self.line(points[points.len() - 1], points[0], width, colour);
    }

    fn end_frame<F, E>(&mut self, submit: F) -> Result<(), E>
    where
        F: FnOnce(&[Rgba], usize, usize) -> Result<(), E>,
    {
        submit(&self.scratch, self.width, self.height)
    }
}

/*──────────────────────── pixel helpers ──────────────────────────────*/

impl Software {
    /// Pixel at logical `(x, y)` (y-up), if on screen.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let row = self.height as i32 - 1 - y;
        self.index(x, row).map(|i| self.scratch[i])
    }

    /// Logical y-up point → unrounded (column, row). `None` for non-finite
    /// input.
    fn to_pixel(&self, p: Vec2) -> Option<DVec2> {
        if !p.is_finite() {
            return None;
        }
        let p = p.as_dvec2();
        Some(dvec2(p.x, self.height as f64 - 1.0 - p.y))
    }

    #[inline]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if (0..self.width as i32).contains(&col) && (0..self.height as i32).contains(&row) {
            Some(row as usize * self.width + col as usize)
        } else {
            None
        }
    }

    #[inline]
    fn plot(&mut self, col: i32, row: i32, colour: Rgba) {
        if let Some(i) = self.index(col, row) {
            self.scratch[i] = colour;
        }
    }

    /// Square brush of side `2 * half + 1` centred on (col, row).
    fn stamp(&mut self, col: i32, row: i32, half: i32, colour: Rgba) {
        for dy in -half..=half {
            for dx in -half..=half {
                self.plot(col + dx, row + dy, colour);
            }
        }
    }

    /// Integer Bresenham line-drawing algorithm.
    fn draw_line(
        &mut self,
        mut x0: i32,
        mut y0: i32,
        x1: i32,
        y1: i32,
        half: i32,
        colour: Rgba,
    ) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x0, y0, half, colour);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

/// Liang–Barsky: the part of `p0 → p1` inside `[min, max]`, if any.
fn clip_to_rect(p0: DVec2, p1: DVec2, min: DVec2, max: DVec2) -> Option<(DVec2, DVec2)> {
    let d = p1 - p0;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-d.x, p0.x - min.x),
        (d.x, max.x - p0.x),
        (-d.y, p0.y - min.y),
        (d.y, max.y - p0.y),
    ] {
        if p == 0.0 {
            // parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let a = (p0 + d * t0).clamp(min, max);
    let b = (p0 + d * t1).clamp(min, max);
    Some((a, b))
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCall, RendererExt, colour};
    use glam::vec2;

    fn frame(calls: &[DrawCall<'_>]) -> Software {
        let mut sw = Software::default();
        sw.draw_frame(16, 16, calls, |_, _, _| Ok::<(), ()>(()))
            .unwrap();
        sw
    }

    #[test]
    fn clear_fills_every_pixel() {
        let sw = frame(&[DrawCall::Clear(colour::SKY_BLUE)]);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(sw.pixel(x, y), Some(colour::SKY_BLUE));
            }
        }
    }

    #[test]
    fn horizontal_line_covers_its_span() {
        let sw = frame(&[
            DrawCall::Clear(colour::BLACK),
            DrawCall::Line {
                a: vec2(2.0, 3.0),
                b: vec2(10.0, 3.0),
                width: 1.0,
                colour: colour::RED,
            },
        ]);
        for x in 2..=10 {
            assert_eq!(sw.pixel(x, 3), Some(colour::RED));
        }
        assert_eq!(sw.pixel(1, 3), Some(colour::BLACK));
        assert_eq!(sw.pixel(5, 4), Some(colour::BLACK));
    }

    #[test]
    fn y_axis_points_up() {
        let mut sw = Software::default();
        sw.begin_frame(4, 4);
        sw.clear(colour::BLACK);
        sw.circle(vec2(0.0, 0.0), 0.0, colour::WHITE);
        // logical origin is the bottom-left pixel: last row of the buffer
        let mut seen = Vec::new();
        sw.end_frame(|fb, w, h| {
            seen = fb.to_vec();
            assert_eq!((w, h), (4, 4));
            Ok::<(), ()>(())
        })
        .unwrap();
        assert_eq!(seen[3 * 4], colour::WHITE);
        assert_eq!(seen[0], colour::BLACK);
    }

    #[test]
    fn circle_is_filled() {
        let sw = frame(&[DrawCall::Circle {
            centre: vec2(8.0, 8.0),
            radius: 3.0,
            colour: colour::RED,
        }]);
        assert_eq!(sw.pixel(8, 8), Some(colour::RED));
        assert_eq!(sw.pixel(10, 8), Some(colour::RED));
        assert_eq!(sw.pixel(8, 11), Some(colour::RED));
        assert_ne!(sw.pixel(11, 11), Some(colour::RED));
    }

    #[test]
    fn polygon_closes_back_to_start() {
        let square = [
            vec2(2.0, 2.0),
            vec2(12.0, 2.0),
            vec2(12.0, 12.0),
            vec2(2.0, 12.0),
        ];
        let sw = frame(&[DrawCall::Polygon {
            points: &square,
            width: 1.0,
            colour: colour::WHITE,
        }]);
        // left edge only exists because of the closing segment
        assert_eq!(sw.pixel(2, 7), Some(colour::WHITE));
        assert_ne!(sw.pixel(7, 7), Some(colour::WHITE));
    }

    #[test]
    fn wide_line_is_thicker() {
        let sw = frame(&[DrawCall::Line {
            a: vec2(2.0, 8.0),
            b: vec2(12.0, 8.0),
            width: 3.0,
            colour: colour::RED,
        }]);
        assert_eq!(sw.pixel(6, 7), Some(colour::RED));
        assert_eq!(sw.pixel(6, 9), Some(colour::RED));
        assert_ne!(sw.pixel(6, 10), Some(colour::RED));
    }

    #[test]
    fn off_screen_and_non_finite_are_ignored() {
        let sw = frame(&[
            DrawCall::Clear(colour::BLACK),
            DrawCall::Line {
                a: vec2(-40.0, -40.0),
                b: vec2(-10.0, -2.0),
                width: 1.0,
                colour: colour::RED,
            },
            DrawCall::Line {
                a: vec2(f32::NAN, 1.0),
                b: vec2(4.0, 4.0),
                width: 1.0,
                colour: colour::RED,
            },
        ]);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(sw.pixel(x, y), Some(colour::BLACK));
            }
        }
    }

    #[test]
    fn submit_error_is_propagated() {
        let mut sw = Software::default();
        let res = sw.draw_frame(2, 2, &[], |_, _, _| Err("closed"));
        assert_eq!(res, Err("closed"));
    }

    #[test]
    fn far_apart_endpoints_are_clipped_to_the_frame() {
        let mut sw = Software::default();
        sw.begin_frame(8, 8);
        sw.clear(colour::BLACK);
        sw.line(vec2(-3.0e9, 1.0), vec2(3.0e9, 1.0), 1.0, colour::RED);
        for x in 0..8 {
            assert_eq!(sw.pixel(x, 1), Some(colour::RED));
            assert_eq!(sw.pixel(x, 2), Some(colour::BLACK));
        }
    }

    #[test]
    fn far_diagonal_keeps_its_slope() {
        let mut sw = Software::default();
        sw.begin_frame(8, 8);
        sw.clear(colour::BLACK);
        sw.line(vec2(-1.0e9, -1.0e9), vec2(1.0e9, 1.0e9), 1.0, colour::WHITE);
        for x in 0..8 {
            let lit: Vec<i32> = (0..8)
                .filter(|&y| sw.pixel(x, y) == Some(colour::WHITE))
                .collect();
            assert!(!lit.is_empty(), "column {x} empty");
            assert!(lit.iter().all(|&y| (y - x).abs() <= 1), "column {x}: {lit:?}");
        }
    }

    #[test]
    fn line_missing_the_frame_draws_nothing() {
        let mut sw = Software::default();
        sw.begin_frame(8, 8);
        sw.clear(colour::BLACK);
        sw.line(vec2(-5.0e8, 100.0), vec2(5.0e8, 3.0e8), 50.0, colour::RED);
        sw.circle(vec2(-1.0e9, 4.0), 20.0, colour::RED);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(sw.pixel(x, y), Some(colour::BLACK));
            }
        }
    }

    #[test]
    fn huge_disc_only_fills_the_frame() {
        let mut sw = Software::default();
        sw.begin_frame(8, 8);
        sw.circle(vec2(4.0, 4.0), 1.0e9, colour::RED);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(sw.pixel(x, y), Some(colour::RED));
            }
        }
    }
}
