use glam::Vec2;

use crate::physic_engine::{Color, Viewport};

/// Surface de dessin 2D consommée par la simulation.
///
/// Les coordonnées sont logiques ; la surface est responsable de leur
/// conversion vers son espace pixel (device pixel ratio).
pub trait Surface {
    fn viewport(&self) -> Viewport;

    /// Redimensionne la surface ; l'espace logique doit rester aligné sur
    /// l'espace pixel après l'appel.
    fn resize(&mut self, viewport: Viewport, device_pixel_ratio: f32);

    /// Remplit un rectangle (couleur éventuellement translucide).
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    /// Dessine un disque plein, modulé par l'opacité globale courante.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn set_global_alpha(&mut self, alpha: f32);

    fn global_alpha(&self) -> f32;
}
