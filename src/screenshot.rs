use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::VisConfig;
use crate::renderer::framebuffer::Canvas;
use crate::scene::Scene;

pub struct ScreenshotConfig {
    pub vis: VisConfig,
    pub frames: u64,
    pub seed: u64,
    pub output: PathBuf,
}

pub fn parse_args(config: &VisConfig) -> Option<ScreenshotConfig> {
    let args: Vec<String> = std::env::args().collect();
    if !args.iter().any(|a| a == "--screenshot") {
        return None;
    }

    let mut shot = ScreenshotConfig {
        vis: *config,
        frames: 120,
        seed: 0,
        output: PathBuf::from("screenshot.png"),
    };

    let get_val = |flag: &str| -> Option<String> {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1).cloned())
    };

    if let Some(v) = get_val("--frames") {
        shot.frames = v.parse().expect("Invalid --frames");
    }
    if let Some(v) = get_val("--seed") {
        shot.seed = v.parse().expect("Invalid --seed");
    }
    if let Some(v) = get_val("--width") {
        shot.vis.screen_width = v.parse().expect("Invalid --width");
    }
    if let Some(v) = get_val("--height") {
        shot.vis.screen_height = v.parse().expect("Invalid --height");
    }
    if let Some(v) = get_val("--output") {
        shot.output = PathBuf::from(v);
    }

    Some(shot)
}

/// Advance a seeded scene off-screen and write the final frame as a PNG.
/// No window or GPU involved; the whole frame comes from the CPU canvas.
pub fn render_screenshot(shot: &ScreenshotConfig) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(shot.seed);
    let mut scene = Scene::new(shot.vis, &mut rng);
    let mut canvas = Canvas::new(shot.vis.screen_width, shot.vis.screen_height);

    for _ in 0..shot.frames.max(1) {
        scene.advance(&mut canvas);
    }

    let image = image::RgbaImage::from_raw(
        canvas.width(),
        canvas.height(),
        canvas.bytes().to_vec(),
    )
    .context("canvas dimensions do not match the pixel buffer")?;
    image
        .save(&shot.output)
        .with_context(|| format!("failed to write {}", shot.output.display()))?;

    println!(
        "Screenshot of frame {} saved to {}",
        scene.frame,
        shot.output.display()
    );
    Ok(())
}
