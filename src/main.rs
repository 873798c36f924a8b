// src/main.rs

use std::time::Duration;

use anyhow::Context;
use log::info;

use surface_host::config::CONFIG;
use surface_host::engine::HeadlessEngine;
use surface_host::panel::VirtualKeyPanel;
use surface_host::surface::SurfaceHost;

// How long the demo runs before detaching cleanly.
const DEMO_DURATION_SECS: u64 = 5;

/// Demo entry point: hosts a headless engine and stands in for the platform,
/// driving the draw callback at a fixed rate. A real platform binds the same
/// host methods to its surface, vsync and input callbacks instead.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting surface-host demo...");

    let mut host = SurfaceHost::new(HeadlessEngine::new());
    let panel = VirtualKeyPanel::new();
    info!(
        "Virtual key panel carries {} keys",
        panel.descriptors().len()
    );

    // Surface created: attach, then report the initial measurement.
    host.attach().context("Failed to attach surface")?;
    host.on_size_changed(
        CONFIG.surface.initial_width_px as i32,
        CONFIG.surface.initial_height_px as i32,
    )
    .context("Failed to report initial surface size")?;

    // Fixed-rate tick loop standing in for the platform draw callback.
    let frame_duration = Duration::from_secs_f64(1.0 / CONFIG.performance.target_fps.max(1) as f64);
    let total_ticks = CONFIG.performance.target_fps.max(1) as u64 * DEMO_DURATION_SECS;
    info!(
        "Ticking at {} FPS for {}s",
        CONFIG.performance.target_fps, DEMO_DURATION_SECS
    );
    for _ in 0..total_ticks {
        std::thread::sleep(frame_duration);
        host.on_tick().context("Engine failed during tick")?;
    }

    // Tap every panel key once so the synthesized pairs show up in the log.
    for descriptor in panel.descriptors() {
        host.on_virtual_key(descriptor)
            .with_context(|| format!("Engine rejected virtual key '{}'", descriptor.label))?;
    }

    let (width_px, height_px) = host.engine().size_px();
    info!(
        "Rendered {} frames at {}x{} over {:.3}s engine time",
        host.engine().frames_rendered(),
        width_px,
        height_px,
        host.engine().elapsed_seconds()
    );

    host.detach().context("Failed to detach surface")?;
    host.destroy().context("Failed to tear down session")?;
    info!("surface-host demo exited successfully.");

    Ok(())
}
