use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::physic_engine::color::Color;
use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::particle::Particle;
use crate::physic_engine::types::sample_span;
use crate::physic_engine::ParticleType;

/// Génère une gerbe à `pos` et l'ajoute à `out`.
///
/// La gerbe compte `burst_count` éclats colorés (directions uniformes,
/// teinte dérivée de `color` à ±`burst_hue_jitter` degrés) suivis d'une
/// unique particule d'onde de choc immobile.
///
/// Retourne le nombre de particules ajoutées (éclats + onde de choc).
pub fn explode(
    rng: &mut impl Rng,
    config: &PhysicConfig,
    pos: Vec2,
    color: Color,
    out: &mut Vec<Particle>,
) -> usize {
    let [min_count, max_count] = config.burst_count;
    let count = if max_count <= min_count {
        min_count
    } else {
        rng.random_range(min_count..=max_count)
    };
    out.reserve(count + 1);

    let tone = config.burst_tone;
    for _ in 0..count {
        let angle = rng.random_range(0.0..TAU);
        let speed = sample_span(rng, config.burst_speed);
        let vel = Vec2::from_angle(angle) * speed;

        let base_hue = match color.hue() {
            Some(h) => h,
            None => sample_span(rng, tone.hue),
        };
        let jitter = config.burst_hue_jitter.abs();
        let burst_color = Color::Hsl {
            h: base_hue + sample_span(rng, [-jitter, jitter]),
            s: sample_span(rng, tone.saturation),
            l: sample_span(rng, tone.lightness),
        };

        let size = sample_span(rng, config.burst_size);
        let ttl = sample_span(rng, config.particle_ttl);
        out.push(Particle::new(
            ParticleType::Burst,
            pos,
            vel,
            burst_color,
            size,
            ttl,
        ));
    }

    // petite onde de choc, indépendante de la gerbe colorée
    let ttl = sample_span(rng, config.particle_ttl);
    out.push(Particle::new(
        ParticleType::Shockwave,
        pos,
        Vec2::ZERO,
        config.shockwave_color,
        config.shockwave_size,
        ttl,
    ));

    count + 1
}
