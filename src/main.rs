//! Headless demo: simulates scrolling down a page and back up, and logs the
//! camera pose each frame. Set `RUST_LOG=info` (or `debug`) to see output.

use std::path::Path;

use scroll_orbit::{
    frame_loop::{FrameLoop, FrameTick, IntervalClock},
    options::Options,
    progress::ScrollRegion,
    session::{Frame, FrameRenderer, SceneSession, Viewport},
    OrbitError,
};

const DEFAULT_FRAMES: u64 = 240;

/// Stand-in renderer that logs the camera instead of drawing.
struct LogRenderer {
    report_every: u64,
}

impl FrameRenderer for LogRenderer {
    type Error = OrbitError;

    fn render(&mut self, frame: &Frame<'_>) -> Result<(), OrbitError> {
        let eye = frame.camera.eye;
        let up = frame.camera.up;
        if frame.tick.index % self.report_every == 0 {
            log::info!(
                "frame {:>4} progress {:.3} eye ({:6.2}, {:5.2}, {:6.2}) up ({:.3}, {:.3}, {:.3})",
                frame.tick.index,
                frame.progress,
                eye.x,
                eye.y,
                eye.z,
                up.x,
                up.y,
                up.z,
            );
        } else {
            log::debug!(
                "frame {} dt {:.4} surface {:?}",
                frame.tick.index,
                frame.tick.dt,
                frame.surface_size
            );
        }
        Ok(())
    }
}

struct Args {
    options_path: Option<String>,
    frames: u64,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        options_path: None,
        frames: DEFAULT_FRAMES,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--frames" {
            let value = iter
                .next()
                .ok_or_else(|| "--frames needs a value".to_owned())?;
            args.frames = value
                .parse()
                .map_err(|e| format!("invalid frame count {value:?}: {e}"))?;
        } else if args.options_path.is_none() {
            args.options_path = Some(arg);
        } else {
            return Err(format!("unexpected argument {arg:?}"));
        }
    }
    Ok(args)
}

/// Scroll offset for a simulated visit: down the whole region, then back
/// up.
fn simulated_offset(tick: FrameTick, frames: u64, region: ScrollRegion) -> f32 {
    let t = tick.index as f32 / frames.saturating_sub(1).max(1) as f32;
    let phase = if t < 0.5 { 2.0 * t } else { 2.0 - 2.0 * t };
    region.start() + phase * (region.end() - region.start())
}

fn run(args: &Args) -> Result<u64, OrbitError> {
    let options = match &args.options_path {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let viewport = Viewport::new(1280, 800);
    let region = options.scroll.region(viewport.height as f32)?;
    let target_fps = options.frame.target_fps;

    let mut session = SceneSession::setup(options, viewport)?;
    let mut renderer = LogRenderer {
        report_every: u64::from(target_fps.max(1)) / 4 + 1,
    };
    let mut frame_loop = FrameLoop::new(target_fps);
    let mut clock = IntervalClock::from_fps(target_fps).with_frame_limit(args.frames);

    let frames = frame_loop.run(&mut clock, |tick| {
        let _ = session.scroll_to(simulated_offset(tick, args.frames, region));
        session.render_frame(tick, &mut renderer)
    })?;
    session.teardown();
    Ok(frames)
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!("Usage: scroll-orbit [OPTIONS.toml] [--frames N]");
            std::process::exit(1);
        }
    };

    match run(&args) {
        Ok(frames) => log::info!("rendered {frames} frames"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
