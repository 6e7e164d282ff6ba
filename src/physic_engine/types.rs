use glam::Vec2;
use rand::Rng;

/// Intervalle `[min, max]` échantillonné uniformément (borne haute exclue).
pub type Span = [f32; 2];

/// Tire une valeur dans `span`. Un intervalle vide, inversé ou non fini
/// (NaN, infini) renvoie `min` sans consommer d'aléa.
#[inline]
pub fn sample_span(rng: &mut impl Rng, [min, max]: Span) -> f32 {
    if !(max > min && (max - min).is_finite()) {
        return min;
    }
    rng.random_range(min..max)
}

/// Dimensions logiques de la surface (en pixels CSS, avant device pixel ratio).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Dimensions NaN, infinies ou négatives ramenées à 0.
    pub fn sanitized(self) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self::new(clean(self.width), clean(self.height))
    }
}

// ------------------------
// UpdateResult
// ------------------------
/// Bilan d'une frame de simulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateResult {
    /// Fusées lancées par des timers échus pendant cette frame
    pub launched: usize,
    /// Positions des explosions déclenchées pendant cette frame
    pub explosions: Vec<Vec2>,
    pub rockets_alive: usize,
    pub particles_alive: usize,
}
