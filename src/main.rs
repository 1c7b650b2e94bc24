use std::time::Duration;

use log::{error, info};
use mandelbrot_explorer::{FrameLoop, RenderConfig};

const DEFAULT_FRAMES: u32 = 10;
const ENV_FRAMES: &str = "MANDELBROT_FRAMES";

fn frames_to_render() -> Result<u32, Box<dyn std::error::Error>> {
    match std::env::var(ENV_FRAMES) {
        Ok(value) => Ok(value.trim().parse()?),
        Err(_) => Ok(DEFAULT_FRAMES),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = RenderConfig::from_env()?;
    let frames = frames_to_render()?;
    let mut frame_loop = FrameLoop::set_up(&config)?;

    info!(
        "Rendering {} frames at {}x{}, max iterations {}, {}",
        frames, config.width, config.height, config.max_iterations, config.kernel
    );

    let mut total = Duration::ZERO;
    let mut fastest: Option<Duration> = None;

    for _ in 0..frames {
        frame_loop.render();

        if let Some(duration) = frame_loop.last_frame_duration() {
            total += duration;
            fastest = Some(fastest.map_or(duration, |f| f.min(duration)));
        }
    }

    if let Some(fastest) = fastest {
        info!("Mean frame: {:?}", total / frames);
        info!("Fastest:    {:?}", fastest);
    }

    frame_loop.tear_down();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run().inspect_err(|e| {
        error!("Error: {e}");
    })
}
