//! RTT overlay demo
//!
//! Runs a few frames of the overlay against the headless recording renderer:
//! off-screen pass, rebind of the main target, composite. Each frame's
//! command log is summarized at INFO.
//!
//! Usage: `rtt_overlay_demo [WIDTH HEIGHT [FRAMES]]`

use std::collections::BTreeMap;
use std::f32::consts::{FRAC_PI_4, TAU};
use std::sync::{Arc, RwLock};

use anyhow::{bail, Context};
use clap::Parser;
use glam::{Mat4, Vec3};
use rtt_overlay::rtt::device::{RenderTargetView, TextureDesc, TextureFormat, TextureUsage, Viewport};
use rtt_overlay::rtt::{Camera, Overlay, Renderer};
use rtt_overlay::{rtt_info, rtt_warn};
use rtt_overlay_renderer_recording::rtt::{Command, RecordingRenderer};

const LOG_SOURCE: &str = "rtt::demo";

#[derive(Parser, Debug)]
#[command(about = "Render frames of the RTT overlay through the recording backend")]
struct Args {
    /// Window width in pixels
    #[arg(default_value_t = 1920)]
    width: u32,
    /// Window height in pixels
    #[arg(default_value_t = 1080)]
    height: u32,
    /// Number of frames to record
    #[arg(default_value_t = 3)]
    frames: u32,
}

/// Camera circling the origin at a fixed height
fn orbit_view(frame: u32, frames: u32) -> Mat4 {
    let angle = TAU * frame as f32 / frames.max(1) as f32;
    let eye = Vec3::new(5.0 * angle.sin(), 2.0, 5.0 * angle.cos());
    Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y)
}

/// Back buffer stand-in: single-sampled, window-sized
fn create_main_target(renderer: &RecordingRenderer, width: u32, height: u32) -> anyhow::Result<Arc<dyn RenderTargetView>> {
    let desc = TextureDesc::new_2d(width, height, TextureFormat::B8G8R8A8_UNORM, TextureUsage::RENDER_TARGET);
    let texture = renderer.device().create_texture(&desc).context("creating main target")?;
    let view = renderer
        .device()
        .create_render_target_view(&texture, None)
        .context("creating main target view")?;
    Ok(view)
}

fn summarize(commands: &[Command]) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for command in commands {
        *counts.entry(command.name()).or_default() += 1;
    }
    counts
        .iter()
        .map(|(name, count)| format!("{}x{}", name, count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let renderer = Arc::new(RecordingRenderer::default());
    let aspect = args.width as f32 / args.height.max(1) as f32;
    let camera = Arc::new(RwLock::new(Camera::new(
        orbit_view(0, args.frames),
        Mat4::perspective_rh(FRAC_PI_4, aspect, 0.1, 100.0),
    )));

    let mut overlay = Overlay::new(renderer.clone(), camera.clone());
    overlay.load(args.width, args.height).context("loading overlay")?;

    let main_target = create_main_target(&renderer, args.width, args.height)?;
    let main_viewport = Viewport::full(args.width, args.height);
    renderer.clear_commands();

    for frame in 0..args.frames {
        camera
            .write()
            .map_err(|_| anyhow::anyhow!("camera lock poisoned"))?
            .set_view(orbit_view(frame, args.frames));

        overlay.set_render_target_view()?;
        // Scene draws into the off-screen target here

        let context = renderer.device_context();
        context.set_render_targets(std::slice::from_ref(&main_target), None);
        context.set_viewports(&[main_viewport]);

        overlay.render()?;

        let commands = renderer.take_commands();
        let rejected = commands.iter().filter(|c| c.is_rejected()).count();
        rtt_info!(LOG_SOURCE, "Frame {}: {} commands ({})", frame, commands.len(), summarize(&commands));
        if rejected > 0 {
            rtt_warn!(LOG_SOURCE, "Frame {}: {} commands rejected", frame, rejected);
            bail!("frame {} recorded {} rejected commands", frame, rejected);
        }
    }

    rtt_info!(
        LOG_SOURCE,
        "Done: {} frames, {} live resources, {} bytes in use",
        args.frames,
        renderer.live_resources(),
        renderer.bytes_in_use()
    );
    Ok(())
}
