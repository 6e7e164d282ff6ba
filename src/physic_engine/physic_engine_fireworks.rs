use glam::Vec2;
use itertools::Itertools;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::physic_engine::{
    config::PhysicConfig,
    particle::Particle,
    r#trait::{Entity, StepEnv},
    rocket::Rocket,
    scheduler::{ScheduledAction, Scheduler},
    types::{sample_span, Span, UpdateResult, Viewport},
    PhysicEngine, PhysicEngineIterator,
};
use crate::renderer_engine::Surface;

/// Moteur de feux d'artifice : seul propriétaire des fusées et des particules.
///
/// Tout se passe sur un unique fil d'exécution : les lancers modifient les
/// collections immédiatement, la frame suivante les prend en compte. Les
/// lancers échelonnés d'un grand show passent par une file de timers pilotée
/// par l'horloge de simulation (`advance`).
#[derive(Debug)]
pub struct PhysicEngineFireworks<R: Rng = StdRng> {
    rockets: Vec<Rocket>,
    particles: Vec<Particle>,
    rng: R,
    config: PhysicConfig,
    viewport: Viewport,

    /// Horloge de simulation, en millisecondes
    clock_ms: f64,
    scheduler: Scheduler,

    next_rocket_id: u64,
    launched_total: u64,
    explosions_total: u64,
}

impl PhysicEngineFireworks<StdRng> {
    /// Générateur initialisé avec `config.seed` si présent, sinon par l'OS.
    pub fn new(config: &PhysicConfig, viewport: Viewport) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, viewport, rng)
    }
}

impl<R: Rng> PhysicEngineFireworks<R> {
    pub fn with_rng(config: &PhysicConfig, viewport: Viewport, rng: R) -> Self {
        debug!(
            "PhysicEngineFireworks created for a {}x{} viewport",
            viewport.width, viewport.height
        );
        Self {
            rockets: Vec::new(),
            particles: Vec::new(),
            rng,
            config: config.clone(),
            viewport: viewport.sanitized(),
            clock_ms: 0.0,
            scheduler: Scheduler::new(),
            next_rocket_id: 0,
            launched_total: 0,
            explosions_total: 0,
        }
    }

    /// Bornes `[min, max]` d'une bande de lancement, en coordonnées surface.
    fn band(span: Span, extent: f32) -> Span {
        let (min, max) = [span[0] * extent, span[1] * extent]
            .iter()
            .copied()
            .minmax()
            .into_option()
            .unwrap_or((0.0, 0.0));
        [min, max]
    }

    /// Point de départ aléatoire, juste sous le bord bas.
    fn random_start(&mut self) -> Vec2 {
        let x = sample_span(
            &mut self.rng,
            Self::band(self.config.launch_start_x, self.viewport.width),
        );
        Vec2::new(x, self.viewport.height + self.config.launch_start_offset)
    }

    /// Cible aléatoire dans la zone haute et centrale.
    fn random_target(&mut self) -> Vec2 {
        let x = sample_span(
            &mut self.rng,
            Self::band(self.config.launch_target_x, self.viewport.width),
        );
        let y = sample_span(
            &mut self.rng,
            Self::band(self.config.launch_target_y, self.viewport.height),
        );
        Vec2::new(x, y)
    }

    /// Ajoute une fusée déjà construite ; retourne l'ID attribué.
    pub fn enqueue_rocket(&mut self, mut rocket: Rocket) -> u64 {
        rocket.id = self.next_rocket_id;
        self.next_rocket_id += 1;
        self.launched_total += 1;
        debug!(
            "🚀 Rocket {} launched from ({:.1}, {:.1}) toward ({:.1}, {:.1})",
            rocket.id, rocket.pos.x, rocket.pos.y, rocket.target.x, rocket.target.y
        );
        let id = rocket.id;
        self.rockets.push(rocket);
        id
    }

    /// Lance une fusée de `start` vers `target`.
    pub fn launch_from(&mut self, start: Vec2, target: Vec2) -> u64 {
        let rocket = Rocket::new(&mut self.rng, &self.config, start, target);
        self.enqueue_rocket(rocket)
    }

    /// Avance l'horloge et exécute les timers échus. Retourne le nombre de fusées lancées.
    pub fn advance(&mut self, dt_ms: f64) -> usize {
        self.clock_ms += dt_ms.max(0.0);
        let mut launched = 0;
        while let Some((due_ms, action)) = self.scheduler.pop_due(self.clock_ms) {
            match action {
                ScheduledAction::LaunchRandom => {
                    self.launch_random_inner();
                    launched += 1;
                }
                // les lancers partent de l'échéance du show, pas de l'horloge courante
                ScheduledAction::GrandShow(count) => self.grand_show_inner(due_ms, count),
            }
        }
        launched
    }

    /// Fait avancer puis dessine chaque entité vivante, une fois.
    ///
    /// Les fusées expirées explosent dans la même frame et ne sont plus
    /// dessinées ; leurs particules rejoignent la collection avant la passe
    /// des particules.
    pub fn step_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> UpdateResult {
        let mut env = StepEnv::new(&self.config, &mut self.rng);
        self.rockets.retain_mut(|rocket| {
            let alive = rocket.step(&mut env);
            if alive {
                rocket.draw(&mut *surface);
            }
            alive
        });
        let StepEnv {
            spawned,
            explosions,
            ..
        } = env;
        self.particles.extend(spawned);

        let mut env = StepEnv::new(&self.config, &mut self.rng);
        self.particles.retain_mut(|particle| {
            let alive = particle.step(&mut env);
            if alive {
                particle.draw(&mut *surface);
            }
            alive
        });

        self.explosions_total += explosions.len() as u64;
        UpdateResult {
            launched: 0,
            explosions,
            rockets_alive: self.rockets.len(),
            particles_alive: self.particles.len(),
        }
    }

    fn launch_random_inner(&mut self) -> u64 {
        let start = self.random_start();
        let target = self.random_target();
        self.launch_from(start, target)
    }

    fn grand_show_inner(&mut self, start_ms: f64, count: usize) {
        let stagger = self.config.show_stagger_ms.max(0.0) as f64;
        let jitter = self.config.show_jitter_ms.max(0.0) as f64;
        for i in 0..count {
            let delay = i as f64 * stagger + self.rng.random::<f64>() * jitter;
            self.scheduler
                .schedule(start_ms + delay, ScheduledAction::LaunchRandom);
        }
        debug!("🎆 Grand show of {} rockets scheduled", count);
    }

    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn rockets_count(&self) -> usize {
        self.rockets.len()
    }

    pub fn particles_count(&self) -> usize {
        self.particles.len()
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Échéances (ms, horloge de simulation) des actions en attente.
    pub fn pending_due_times(&self) -> Vec<f64> {
        self.scheduler.due_times().collect()
    }

    pub fn pending_count(&self) -> usize {
        self.scheduler.len()
    }

    pub fn launched_total(&self) -> u64 {
        self.launched_total
    }

    pub fn explosions_total(&self) -> u64 {
        self.explosions_total
    }
}

// ==================================
// Trait PhysicEngine
// ==================================
impl<R: Rng> PhysicEngineIterator for PhysicEngineFireworks<R> {
    fn iter_rockets<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Rocket> + 'a> {
        Box::new(self.rockets.iter())
    }

    fn iter_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a> {
        Box::new(self.particles.iter())
    }
}

impl<R: Rng> PhysicEngine for PhysicEngineFireworks<R> {
    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport.sanitized();
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn launch_random(&mut self) -> u64 {
        self.launch_random_inner()
    }

    fn launch_toward(&mut self, target: Vec2) -> u64 {
        let start = self.random_start();
        self.launch_from(start, target)
    }

    fn grand_show(&mut self, count: usize) {
        self.grand_show_inner(self.clock_ms, count)
    }

    fn schedule_grand_show(&mut self, delay_ms: f64, count: usize) {
        self.scheduler.schedule(
            self.clock_ms + delay_ms.max(0.0),
            ScheduledAction::GrandShow(count),
        );
    }

    fn update<S: Surface + ?Sized>(&mut self, dt_ms: f64, surface: &mut S) -> UpdateResult {
        let launched = self.advance(dt_ms);
        let mut result = self.step_frame(surface);
        result.launched = launched;
        result
    }

    fn reload_config(&mut self, config: &PhysicConfig) {
        if config.seed != self.config.seed {
            info!("Physic config reloaded; the new seed only applies to a new engine");
        }
        self.config = config.clone();
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn close(&mut self) {
        self.rockets.clear();
        self.particles.clear();
        self.scheduler.clear();
        debug!("PhysicEngineFireworks closed and reset.");
    }
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait PhysicEngineTestHelpers {
    /// Exécute immédiatement toutes les actions en attente, quelle que soit leur échéance.
    fn flush_pending(&mut self) -> usize;
}

#[cfg(any(test, feature = "test_helpers"))]
impl<R: Rng> PhysicEngineTestHelpers for PhysicEngineFireworks<R> {
    fn flush_pending(&mut self) -> usize {
        let mut launched = 0;
        while let Some(due) = self.scheduler.next_due() {
            let wait = (due - self.clock_ms).max(0.0);
            launched += self.advance(wait);
        }
        launched
    }
}
