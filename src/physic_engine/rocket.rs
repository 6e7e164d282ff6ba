use log::debug;
use rand::Rng;

use crate::physic_engine::color::Color;
use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::explosion::explode;
use crate::physic_engine::particle::Particle;
use crate::physic_engine::r#trait::{Entity, StepEnv};
use crate::physic_engine::types::sample_span;
use crate::physic_engine::ParticleType;
use crate::renderer_engine::Surface;
use glam::Vec2;

/// Représentation d’une fusée
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    /// ID unique de la rocket (attribué par le moteur)
    pub id: u64,

    pub pos: Vec2,
    /// Vitesse : constante hormis la gravité
    pub vel: Vec2,
    /// Point visé au lancement
    pub target: Vec2,
    pub color: Color,

    pub age: u32,
    pub ttl: f32,
    pub radius: f32,
}

impl Rocket {
    /// Crée une fusée partant de `start` et visant `target`.
    ///
    /// La vitesse vaut `(target - start) / k`, avec `k` tiré indépendamment
    /// pour chaque axe : les temps de trajet en x et en y diffèrent, la
    /// trajectoire n'est donc pas balistique.
    pub fn new(rng: &mut impl Rng, config: &PhysicConfig, start: Vec2, target: Vec2) -> Self {
        let kx = sample_span(rng, config.rocket_travel_steps).max(f32::EPSILON);
        let ky = sample_span(rng, config.rocket_travel_steps).max(f32::EPSILON);
        let delta = target - start;

        Self {
            id: 0,
            pos: start,
            vel: Vec2::new(delta.x / kx, delta.y / ky),
            target,
            color: config.rocket_tone.sample(rng),
            age: 0,
            ttl: sample_span(rng, config.rocket_ttl),
            radius: config.rocket_radius,
        }
    }

    /// Force la durée de vie (scénarios reproductibles).
    pub fn with_ttl(mut self, ttl: f32) -> Self {
        self.ttl = ttl;
        self
    }

    #[inline(always)]
    fn update_movement(&mut self, gravity: f32) {
        self.pos += self.vel;
        self.vel.y += gravity;
    }

    #[inline(always)]
    fn update_trail<R: Rng>(&self, env: &mut StepEnv<'_, R>) {
        let cfg = env.config;
        if !env.rng.random_bool(cfg.trail_probability.clamp(0.0, 1.0)) {
            return;
        }
        let spread = cfg.trail_spread.abs();
        let vel = Vec2::new(
            sample_span(env.rng, [-spread, spread]),
            sample_span(env.rng, [-spread, spread]),
        );
        let ttl = sample_span(env.rng, cfg.particle_ttl);
        env.spawned.push(Particle::new(
            ParticleType::Trail,
            self.pos,
            vel,
            self.color,
            cfg.trail_size,
            ttl,
        ));
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age as f32 >= self.ttl
    }
}

impl Entity for Rocket {
    fn step<R: Rng>(&mut self, env: &mut StepEnv<'_, R>) -> bool {
        self.update_movement(env.config.rocket_gravity);
        self.age += 1;
        self.update_trail(env);

        if self.is_expired() {
            let n = explode(env.rng, env.config, self.pos, self.color, &mut env.spawned);
            env.explosions.push(self.pos);
            debug!(
                "💥 Rocket {} exploded at ({:.1}, {:.1}) into {} particles",
                self.id, self.pos.x, self.pos.y, n
            );
            return false;
        }
        true
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pos, self.radius, self.color);
    }
}
