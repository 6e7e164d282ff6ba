use glam::Vec2;
use rand::Rng;

use crate::physic_engine::color::Color;
use crate::physic_engine::r#trait::{Entity, StepEnv};
use crate::physic_engine::ParticleType;
use crate::renderer_engine::Surface;

/// Rayon minimal dessiné, même pour une particule totalement transparente.
pub const MIN_DRAW_RADIUS: f32 = 0.8;
/// Opacité sous laquelle une particule est retirée.
pub const EXPIRY_OPACITY: f32 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    pub size: f32,
    /// Nombre de pas déjà simulés
    pub age: u32,
    /// Durée de vie en pas, tirée à la création
    pub ttl: f32,
    /// Conservé pour les traînées et l'onde de choc ; la courbe d'opacité est
    /// pour l'instant la même avec ou sans.
    pub fade: bool,
    pub opacity: f32,
    pub particle_type: ParticleType,
}

impl Particle {
    pub fn new(
        particle_type: ParticleType,
        pos: Vec2,
        vel: Vec2,
        color: Color,
        size: f32,
        ttl: f32,
    ) -> Self {
        Self {
            pos,
            vel,
            color,
            size: size.max(0.0),
            age: 0,
            ttl,
            fade: particle_type.fades(),
            opacity: 1.0,
            particle_type,
        }
    }

    /// `max(0, 1 - age/ttl)`, identique quel que soit `fade`.
    #[inline]
    fn compute_opacity(&self) -> f32 {
        if self.ttl <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age as f32 / self.ttl).max(0.0)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        (self.age as f32) < self.ttl && self.opacity > EXPIRY_OPACITY
    }

    /// Rayon effectivement peint à l'opacité courante.
    #[inline]
    pub fn draw_radius(&self) -> f32 {
        (self.size * self.opacity).max(MIN_DRAW_RADIUS)
    }
}

impl Entity for Particle {
    fn step<R: Rng>(&mut self, env: &mut StepEnv<'_, R>) -> bool {
        let cfg = env.config;
        self.pos += self.vel;
        self.vel.y += cfg.particle_gravity;
        self.vel *= cfg.particle_damping;
        self.age += 1;
        self.opacity = self.compute_opacity();
        self.is_alive()
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_global_alpha(self.opacity);
        surface.fill_circle(self.pos, self.draw_radius(), self.color);
        // l'opacité ne doit pas fuir sur les dessins suivants
        surface.set_global_alpha(1.0);
    }
}
