use serde::{Deserialize, Serialize};

use crate::physic_engine::color::{Color, ColorTone};
use crate::physic_engine::types::Span;

/// Paramètres physiques de la simulation.
///
/// Toutes les grandeurs sont exprimées par pas de simulation (une frame),
/// en coordonnées logiques de la surface (y vers le bas).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicConfig {
    /// Graine du générateur aléatoire (aléatoire OS si absente)
    pub seed: Option<u64>,

    pub rocket_gravity: f32,
    pub rocket_ttl: Span,
    /// Diviseur `k` appliqué à `(cible - départ)` pour obtenir la vitesse, tiré par axe
    pub rocket_travel_steps: Span,
    pub rocket_radius: f32,

    pub trail_probability: f64,
    pub trail_spread: f32,
    pub trail_size: f32,

    pub particle_gravity: f32,
    pub particle_damping: f32,
    pub particle_ttl: Span,

    /// Nombre de particules colorées par explosion (bornes incluses)
    pub burst_count: [usize; 2],
    pub burst_speed: Span,
    pub burst_size: Span,
    pub burst_hue_jitter: f32,

    pub shockwave_color: Color,
    pub shockwave_size: f32,

    /// Départ des lancers aléatoires, en fraction de la largeur
    pub launch_start_x: Span,
    /// Distance sous le bord bas d'où partent les fusées
    pub launch_start_offset: f32,
    /// Cibles des lancers aléatoires, en fraction de la largeur / hauteur
    pub launch_target_x: Span,
    pub launch_target_y: Span,

    pub show_stagger_ms: f32,
    pub show_jitter_ms: f32,

    pub rocket_tone: ColorTone,
    /// Saturation / luminosité des éclats ; la teinte vient de la fusée
    pub burst_tone: ColorTone,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rocket_gravity: 0.12,
            rocket_ttl: [40.0, 70.0],
            rocket_travel_steps: [20.0, 30.0],
            rocket_radius: 3.0,
            trail_probability: 0.35,
            trail_spread: 0.8,
            trail_size: 14.0,
            particle_gravity: 0.06,
            particle_damping: 0.99,
            particle_ttl: [40.0, 90.0],
            burst_count: [30, 80],
            burst_speed: [1.6, 5.6],
            burst_size: [1.6, 3.5],
            burst_hue_jitter: 8.0,
            shockwave_color: Color::rgba(255, 240, 200, 0.7),
            shockwave_size: 18.0,
            launch_start_x: [0.2, 0.8],
            launch_start_offset: 10.0,
            launch_target_x: [0.25, 0.75],
            launch_target_y: [0.08, 0.45],
            show_stagger_ms: 220.0,
            show_jitter_ms: 120.0,
            rocket_tone: ColorTone::YELLOWISH,
            burst_tone: ColorTone::WARM,
        }
    }
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
