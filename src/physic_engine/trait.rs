use glam::Vec2;
use rand::Rng;

use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::particle::Particle;
use crate::physic_engine::rocket::Rocket;
use crate::physic_engine::types::{UpdateResult, Viewport};
use crate::physic_engine::ParticleType;
use crate::renderer_engine::Surface;

/// Contexte partagé par toutes les entités pendant une frame.
///
/// Les fusées y déposent leurs particules (traînées, explosions) au lieu de
/// toucher directement aux collections du moteur ; le moteur les récupère
/// une fois la passe terminée.
pub struct StepEnv<'a, R: Rng> {
    pub config: &'a PhysicConfig,
    pub rng: &'a mut R,
    pub spawned: Vec<Particle>,
    pub explosions: Vec<Vec2>,
}

impl<'a, R: Rng> StepEnv<'a, R> {
    pub fn new(config: &'a PhysicConfig, rng: &'a mut R) -> Self {
        Self {
            config,
            rng,
            spawned: Vec::new(),
            explosions: Vec::new(),
        }
    }
}

/// Capacité commune aux fusées et aux particules : avancer d'un pas, se dessiner.
pub trait Entity {
    /// Avance l'entité d'une frame. Retourne `false` sur la frame où elle expire.
    fn step<R: Rng>(&mut self, env: &mut StepEnv<'_, R>) -> bool;

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S);
}

pub trait PhysicEngineIterator {
    /// Itère sur les fusées encore en vol.
    fn iter_rockets<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Rocket> + 'a>;

    /// Itère sur toutes les particules vivantes.
    fn iter_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a>;

    /// Itère sur les particules vivantes d'un type donné.
    fn iter_particles_by_type<'a>(
        &'a self,
        particle_type: ParticleType,
    ) -> Box<dyn Iterator<Item = &'a Particle> + 'a> {
        Box::new(
            self.iter_particles()
                .filter(move |p| p.particle_type == particle_type),
        )
    }
}

/// 🔧 Trait `PhysicEngine`
///
/// Interface entre la boucle hôte (`Simulator`) et le moteur de feux
/// d'artifice. Les gestionnaires d'entrée n'appellent que les opérations de
/// lancement ; la boucle appelle `update` une fois par frame.
pub trait PhysicEngine {
    /// Ajuste la zone logique (utile si la surface change de taille).
    fn set_viewport(&mut self, viewport: Viewport);

    fn viewport(&self) -> Viewport;

    /// Lance une fusée d'un point bas aléatoire vers le haut de l'écran.
    fn launch_random(&mut self) -> u64;

    /// Lance une fusée d'un point bas aléatoire vers `target`.
    fn launch_toward(&mut self, target: Vec2) -> u64;

    /// Programme `count` lancers aléatoires échelonnés dans le temps.
    fn grand_show(&mut self, count: usize);

    /// Programme un `grand_show(count)` dans `delay_ms` millisecondes.
    fn schedule_grand_show(&mut self, delay_ms: f64, count: usize);

    /// Avance l'horloge de `dt_ms`, déclenche les lancers échus puis
    /// fait avancer et dessine toutes les entités.
    fn update<S: Surface + ?Sized>(&mut self, dt_ms: f64, surface: &mut S) -> UpdateResult;

    fn reload_config(&mut self, config: &PhysicConfig);

    fn get_config(&self) -> &PhysicConfig;

    /// Ferme / libère le moteur physique.
    fn close(&mut self) {} // Par défaut, fait rien.
}
