use glam::Vec2;

use crate::physic_engine::{Color, Viewport};
use crate::renderer_engine::Surface;

/// Surface sans rendu : garde la taille et l'opacité globale, ignore les dessins.
#[derive(Debug, Clone, Copy)]
pub struct NullSurface {
    viewport: Viewport,
    global_alpha: f32,
}

impl NullSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            global_alpha: 1.0,
        }
    }
}

impl Surface for NullSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport, _device_pixel_ratio: f32) {
        self.viewport = viewport;
    }

    fn fill_rect(&mut self, _origin: Vec2, _size: Vec2, _color: Color) {}

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn global_alpha(&self) -> f32 {
        self.global_alpha
    }
}
