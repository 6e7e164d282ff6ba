use glam::Vec2;
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::input_engine::{input_channel, InputEvent, InputReceiver, InputSender};
use crate::log_metrics_and_fps;
use crate::physic_engine::{PhysicEngine, UpdateResult, Viewport};
use crate::profiler::Profiler;
use crate::renderer_engine::{RendererConfig, Surface};
use crate::settings::SimulatorSettings;

/// Contrôle de démarrage / arrêt partageable (gestionnaires de fermeture, tests).
#[derive(Debug, Clone)]
pub struct SimulatorHandle {
    running: Arc<AtomicBool>,
}

impl SimulatorHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

/// Boucle hôte : une frame = entrées, voile de fond, physique + dessin.
pub struct Simulator<S, P>
where
    S: Surface,
    P: PhysicEngine,
{
    surface: S,
    physic_engine: P,
    renderer_config: RendererConfig,
    settings: SimulatorSettings,

    input_sender: InputSender,
    input_receiver: InputReceiver,
    running: Arc<AtomicBool>,

    frames: u64,
    reduced_motion: bool,

    profiler: Profiler,
    last_log: Instant,
    first_frame: bool,
}

impl<S, P> Simulator<S, P>
where
    S: Surface,
    P: PhysicEngine,
{
    pub fn new(
        surface: S,
        physic_engine: P,
        renderer_config: RendererConfig,
        settings: SimulatorSettings,
    ) -> Self {
        let (input_sender, input_receiver) = input_channel();
        Self {
            surface,
            physic_engine,
            renderer_config,
            settings,
            input_sender,
            input_receiver,
            running: Arc::new(AtomicBool::new(false)),
            frames: 0,
            reduced_motion: false,
            profiler: Profiler::new(200),
            last_log: Instant::now(),
            first_frame: true,
        }
    }

    /// Émetteur à confier aux gestionnaires d'événements externes.
    pub fn input_sender(&self) -> InputSender {
        self.input_sender.clone()
    }

    pub fn handle(&self) -> SimulatorHandle {
        SimulatorHandle {
            running: self.running.clone(),
        }
    }

    pub fn start(&mut self) {
        if !self.running.swap(true, Ordering::Relaxed) {
            info!("🚀 Simulator started");
        }
    }

    pub fn stop(&self) {
        if self.running.swap(false, Ordering::Relaxed) {
            info!("🛑 Simulator stopped after {} frames", self.frames);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Applique un événement d'entrée immédiatement.
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::LaunchButton => {
                debug!("🎇 Launch button pressed");
                self.physic_engine.grand_show(self.settings.button_show_count);
            }
            InputEvent::GrandShow(count) => {
                let count = count.unwrap_or(self.settings.default_show_count);
                self.physic_engine.grand_show(count);
            }
            InputEvent::PointerClick { on_button: true, .. } => {
                // déjà traité par LaunchButton
            }
            InputEvent::PointerClick { x, y, .. } => {
                self.physic_engine.launch_toward(Vec2::new(x, y));
            }
            InputEvent::PageLoaded => {
                self.physic_engine.schedule_grand_show(
                    self.settings.load_show_delay_ms,
                    self.settings.load_show_count,
                );
            }
            InputEvent::Resize {
                width,
                height,
                device_pixel_ratio,
            } => {
                // dimensions non finies ramenées à 0
                let viewport = Viewport::new(width, height).sanitized();
                self.surface.resize(viewport, device_pixel_ratio);
                self.physic_engine.set_viewport(viewport);
                info!(
                    "🖥️ Viewport resized: {} x {} (dpr {})",
                    width, height, device_pixel_ratio
                );
            }
            InputEvent::ReducedMotion(enabled) => {
                // ne concerne que les animations décoratives de l'hôte
                self.reduced_motion = enabled;
                info!("Reduced motion preference: {}", enabled);
            }
        }
    }

    fn drain_inputs(&mut self) {
        while let Ok(event) = self.input_receiver.try_recv() {
            self.dispatch(event);
        }
    }

    /// Exécute une frame. Retourne `false` (sans rien faire) une fois arrêté.
    pub fn step(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let frame_start = Instant::now();

        self.drain_inputs();

        // voile translucide : les frames précédentes s'estompent
        let viewport = self.surface.viewport();
        self.surface.set_global_alpha(1.0);
        self.surface.fill_rect(
            Vec2::ZERO,
            viewport.size(),
            self.renderer_config.background_fade,
        );

        let dt = self.settings.frame_interval_ms;
        let update_result = self.profiler.profile_block("physic - update", || {
            self.physic_engine.update(dt, &mut self.surface)
        });
        self.record_frame(&update_result);

        self.frames += 1;
        self.profiler
            .record_frame_time(frame_start.elapsed().as_secs_f32() * 1000.0);

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }

        if self.last_log.elapsed().as_secs_f32() >= self.settings.log_interval_secs {
            log_metrics_and_fps!(&self.profiler);
            self.last_log = Instant::now();
        }

        if let Some(max) = self.settings.max_frames {
            if self.frames >= max {
                self.stop();
            }
        }
        true
    }

    fn record_frame(&mut self, update_result: &UpdateResult) {
        for (i, pos) in update_result.explosions.iter().enumerate() {
            debug!("💥 Explosion triggered: {} at ({:.1}, {:.1})", i, pos.x, pos.y);
        }
        self.profiler
            .record_metric("rockets alive", update_result.rockets_alive);
        self.profiler
            .record_metric("particles alive", update_result.particles_alive);
    }

    /// Démarre puis boucle jusqu'à l'arrêt. `on_frame` reçoit le numéro de
    /// frame et la surface après chaque frame (export, affichage...).
    pub fn run<F>(&mut self, mut on_frame: F) -> anyhow::Result<()>
    where
        F: FnMut(u64, &S) -> anyhow::Result<()>,
    {
        self.start();
        let interval = Duration::from_secs_f64(self.settings.frame_interval_ms.max(0.0) / 1000.0);

        loop {
            let frame_start = Instant::now();
            if !self.step() {
                break;
            }
            if let Err(e) = on_frame(self.frames, &self.surface) {
                self.stop();
                return Err(e);
            }
            if self.settings.realtime {
                if let Some(remaining) = interval.checked_sub(frame_start.elapsed()) {
                    std::thread::sleep(remaining);
                }
            }
        }
        Ok(())
    }

    /// Exécute au plus `count` frames sans attente ; retourne le nombre exécuté.
    pub fn run_frames(&mut self, count: u64) -> u64 {
        let mut done = 0;
        while done < count && self.step() {
            done += 1;
        }
        done
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }

    pub fn physic_engine_mut(&mut self) -> &mut P {
        &mut self.physic_engine
    }

    pub fn settings(&self) -> &SimulatorSettings {
        &self.settings
    }

    pub fn close(&mut self) {
        self.stop();
        self.physic_engine.close();
        log_metrics_and_fps!(&self.profiler);
    }
}
