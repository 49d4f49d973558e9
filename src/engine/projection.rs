//! World → view-frame rotation.
//!
//! The frame is turned by `π/2 − dir` around the player and shifted so the
//! player sits on the viewport centre; the facing direction ends up on +Y.

use glam::{Vec2, vec2};

use crate::world::Pose;

/// Rotate one world vertex `w` into the view frame.
#[inline]
pub fn rotate_to_view(pose: &Pose, w: Vec2, centre: Vec2) -> Vec2 {
    let (sn, cs) = pose.view_angle().sin_cos();
    rotate_with(w - pose.pos, sn, cs, centre)
}

/// Rotate every vertex of `world` into `out` (cleared first).
/// `out.len() == world.len()` afterwards.
pub fn rotate_all(pose: &Pose, world: &[Vec2], centre: Vec2, out: &mut Vec<Vec2>) {
    // sin/cos once per frame, not once per vertex
    let (sn, cs) = pose.view_angle().sin_cos();
    out.clear();
    out.extend(world.iter().map(|&w| rotate_with(w - pose.pos, sn, cs, centre)));
}

#[inline(always)]
fn rotate_with(rel: Vec2, sn: f32, cs: f32, centre: Vec2) -> Vec2 {
    vec2(
        rel.x * cs - rel.y * sn + centre.x,
        rel.x * sn + rel.y * cs + centre.y,
    )
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const CENTRE: Vec2 = vec2(320.0, 240.0);

    #[test]
    fn identity_when_facing_plus_y() {
        let pose = Pose::new(vec2(320.0, 240.0), FRAC_PI_2);
        let p = rotate_to_view(&pose, vec2(320.0, 100.0), CENTRE);
        assert!((p - vec2(320.0, 100.0)).length() < 1e-4);
        let p = rotate_to_view(&pose, vec2(320.0, 300.0), CENTRE);
        assert!((p - vec2(320.0, 300.0)).length() < 1e-4);
    }

    #[test]
    fn facing_direction_maps_to_plus_y() {
        for dir in [0.0_f32, 0.7, 2.0, -1.3, 9.5] {
            let pose = Pose::new(vec2(-12.0, 40.0), dir);
            let ahead = pose.pos + pose.forward() * 50.0;
            let p = rotate_to_view(&pose, ahead, CENTRE);
            assert!((p - (CENTRE + vec2(0.0, 50.0))).length() < 1e-3, "dir {dir}");
        }
    }

    #[test]
    fn player_maps_to_centre() {
        let pose = Pose::new(vec2(77.0, -5.0), 1.234);
        assert!((rotate_to_view(&pose, pose.pos, CENTRE) - CENTRE).length() < 1e-4);
    }

    #[test]
    fn rotation_preserves_distance() {
        let pts = [vec2(0.0, 0.0), vec2(540.0, 60.0), vec2(-30.0, 900.0)];
        for dir in [0.0_f32, 0.5, 1.0, 3.1, 4.7, -2.2, 25.0] {
            let pose = Pose::new(vec2(100.0, 200.0), dir);
            for &w in &pts {
                let d_world = (w - pose.pos).length();
                let d_view = (rotate_to_view(&pose, w, CENTRE) - CENTRE).length();
                assert!((d_world - d_view).abs() < 1e-2, "dir {dir} w {w}");
            }
        }
    }

    #[test]
    fn rotate_all_matches_single_and_reuses_buffer() {
        let pose = Pose::new(vec2(10.0, 20.0), 0.3);
        let world = [vec2(1.0, 2.0), vec2(30.0, -4.0), vec2(0.0, 0.0)];
        let mut out = vec![Vec2::ZERO; 10];
        rotate_all(&pose, &world, CENTRE, &mut out);
        assert_eq!(out.len(), world.len());
        for (w, r) in world.iter().zip(&out) {
            assert!((rotate_to_view(&pose, *w, CENTRE) - *r).length() < 1e-4);
        }
    }
}
