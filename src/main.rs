use anyhow::Result;
use log::info;
use std::{env, fs, path::PathBuf};

use canvas_fireworks::physic_engine::config::PhysicConfig;
use canvas_fireworks::physic_engine::PhysicEngineFireworks;
use canvas_fireworks::renderer_engine::{RasterSurface, RendererConfig};
use canvas_fireworks::utils::show_rust_core_dependencies;
use canvas_fireworks::{InputEvent, Simulator, SimulatorSettingsBuilder};

/// Une frame exportée sur `EXPORT_EVERY` (≈ 10 images / seconde à 60 FPS).
const EXPORT_EVERY: u64 = 6;

/// Main entry point for the fireworks show.
fn main() -> Result<()> {
    env_logger::init();

    info!("🎆 Starting canvas fireworks...");

    show_rust_core_dependencies();

    let physic_config = PhysicConfig::from_file("assets/config/physic.toml").unwrap_or_default();
    info!("Physic config loaded:\n{:#?}", physic_config);
    let renderer_config =
        RendererConfig::from_file("assets/config/renderer.toml").unwrap_or_default();
    info!("Renderer config loaded:\n{:#?}", renderer_config);

    // --------------------------
    // Gestion du chemin d'export des frames
    // --------------------------
    let export_dir = env::args()
        .nth(1) // priorité à l'argument CLI
        .map(PathBuf::from)
        .or_else(|| env::var("FIREWORKS_EXPORT_DIR").ok().map(PathBuf::from));

    if let Some(dir) = &export_dir {
        fs::create_dir_all(dir)?;
        info!("Frame export directory set to: {}", dir.display());
    }

    let settings = SimulatorSettingsBuilder::default()
        // en export, pas besoin d'attendre entre les frames
        .realtime(export_dir.is_none())
        .max_frames(Some(600))
        .build()?;

    let viewport = renderer_config.viewport();
    let surface = RasterSurface::new(
        viewport,
        renderer_config.device_pixel_ratio,
        renderer_config.clear_color,
    );
    let physic_engine = PhysicEngineFireworks::new(&physic_config, viewport);

    let mut simulator = Simulator::new(surface, physic_engine, renderer_config, settings);

    // Scénario de la page : chargement, un clic sur le bouton, un clic au centre
    let input = simulator.input_sender();
    input.send(InputEvent::PageLoaded)?;
    input.send(InputEvent::LaunchButton)?;
    input.send(InputEvent::PointerClick {
        x: viewport.width / 2.0,
        y: viewport.height / 3.0,
        on_button: false,
    })?;

    simulator.run(|frame, surface| {
        if let Some(dir) = &export_dir {
            if frame % EXPORT_EVERY == 0 {
                surface.save_png(dir.join(format!("frame_{:05}.png", frame)))?;
            }
        }
        Ok(())
    })?;
    simulator.close();

    info!("✨ Show finished after {} frames", simulator.frames());
    Ok(())
}
