//! Horizon-clipped wall projection with an overhead minimap.
//!
//! Controls ←/→ (A/D) = turn ↑/↓ (W/S) = forward/back Esc = quit
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- --show-horizon
//! ```

use anyhow::Context;
use minifb::{Key, Window, WindowOptions};
use std::time::{Duration, Instant};

use horizon_caster::{
    config::Config,
    engine::{
        MinimapData, ViewProjector,
        scene::{self, SceneStyle},
    },
    renderer::{DrawCall, RendererExt, Software, colour},
    sim::{FrameClock, InputCmd, Simulation},
    world::map,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::from_args()?;
    log::info!(
        "{}x{} @ {} fps, walk {} u/s, turn {} rad/s",
        cfg.width,
        cfg.height,
        cfg.fps,
        cfg.walk_speed,
        cfg.turn_speed
    );

    let screen = cfg.screen();
    let walls = map::demo_walls();
    let start = map::demo_start(cfg.width, cfg.height);
    let mut sim = Simulation::new(start, &walls, cfg.speeds());
    log::info!(
        "map: {} vertices, {} segments, closed = {}",
        sim.walls.len(),
        sim.walls.segment_count(),
        sim.walls.is_closed()
    );

    let mut projector = ViewProjector::new(screen);
    let mut renderer = Software::default();
    let style = SceneStyle {
        horizon: cfg.show_horizon.then_some(colour::WHITE),
        ..SceneStyle::default()
    };

    let mut win = Window::new(&cfg.title, cfg.width, cfg.height, WindowOptions::default())
        .context("failed to create window")?;
    win.set_target_fps(cfg.fps);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated frame work
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we logged last

    let mut clock = FrameClock::new();
    let mut calls: Vec<DrawCall<'_>> = Vec::new();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now(); // ┌─ frame timer start

        /* --------------- input & movement --------------------------------- */
        let cmd = InputCmd::from_keys(
            win.is_key_down(Key::Left) || win.is_key_down(Key::A),
            win.is_key_down(Key::Right) || win.is_key_down(Key::D),
            win.is_key_down(Key::Down) || win.is_key_down(Key::S),
            win.is_key_down(Key::Up) || win.is_key_down(Key::W),
        );
        sim.step(cmd, clock.tick());

        /* --------------- projection & scene -------------------------------- */
        projector.project(&sim.pose, &walls);
        let minimap = MinimapData::assemble(&sim.pose, &walls, cfg.show_camera_plane());
        scene::build(
            &minimap,
            projector.visible_segments(),
            &screen,
            &style,
            &mut calls,
        );

        /* --------------- draw & present ------------------------------------ */
        renderer.draw_frame(screen.w, screen.h, &calls, |fb, w, h| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            win.update_with_buffer(fb, w, h)
        })
        .context("failed to present frame")?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames.max(1) as f64;
            log::info!(
                "avg frame: {:.2} ms over {} frames, pose ({:.1}, {:.1}) dir {:.2}",
                avg_ms,
                acc_frames,
                sim.pose.pos.x,
                sim.pose.pos.y,
                sim.pose.dir
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
