use glam::{Vec2, Vec4};
use image::{Rgba, RgbaImage};
use log::debug;
use std::path::Path;

use crate::physic_engine::{Color, Viewport};
use crate::renderer_engine::Surface;

/// Surface logicielle : rastérise dans une image RGBA en mémoire.
///
/// La taille pixel vaut `floor(largeur * dpr) x floor(hauteur * dpr)` ; toutes
/// les primitives reçoivent des coordonnées logiques multipliées par `dpr`.
/// Le mélange est de type *source-over* avec `alpha = couleur.a * global_alpha`.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    viewport: Viewport,
    device_pixel_ratio: f32,
    global_alpha: f32,
    clear_color: Color,
}

impl RasterSurface {
    pub fn new(viewport: Viewport, device_pixel_ratio: f32, clear_color: Color) -> Self {
        let (w, h) = Self::pixel_size(viewport, device_pixel_ratio);
        Self {
            image: RgbaImage::from_pixel(w, h, to_pixel(clear_color.to_rgba())),
            viewport,
            device_pixel_ratio: Self::sanitize_dpr(device_pixel_ratio),
            global_alpha: 1.0,
            clear_color,
        }
    }

    fn sanitize_dpr(dpr: f32) -> f32 {
        if dpr.is_finite() && dpr > 0.0 {
            dpr
        } else {
            1.0
        }
    }

    fn pixel_size(viewport: Viewport, dpr: f32) -> (u32, u32) {
        let dpr = Self::sanitize_dpr(dpr);
        (
            (viewport.width.max(0.0) * dpr).floor() as u32,
            (viewport.height.max(0.0) * dpr).floor() as u32,
        )
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    /// Dimensions en pixels physiques.
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x < self.image.width() && y < self.image.height() {
            Some(*self.image.get_pixel(x, y))
        } else {
            None
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn clear(&mut self) {
        let px = to_pixel(self.clear_color.to_rgba());
        self.image.pixels_mut().for_each(|p| *p = px);
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        self.image.save(path.as_ref())?;
        debug!("🖼️ Frame saved to {}", path.as_ref().display());
        Ok(())
    }

    #[inline]
    fn blend(&mut self, x: u32, y: u32, src: Vec4) {
        let dst = self.image.get_pixel_mut(x, y);
        let a = src.w;
        let inv = 1.0 - a;
        let mix = |s: f32, d: u8| ((s * 255.0) * a + d as f32 * inv).round().clamp(0.0, 255.0) as u8;
        let out_a = (a * 255.0 + dst[3] as f32 * inv).round().clamp(0.0, 255.0) as u8;
        *dst = Rgba([
            mix(src.x, dst[0]),
            mix(src.y, dst[1]),
            mix(src.z, dst[2]),
            out_a,
        ]);
    }

    /// Couleur source effective (alpha couleur x alpha global).
    #[inline]
    fn source(&self, color: Color) -> Vec4 {
        let mut rgba = color.to_rgba();
        rgba.w = (rgba.w * self.global_alpha).clamp(0.0, 1.0);
        rgba
    }
}

fn to_pixel(rgba: Vec4) -> Rgba<u8> {
    let c = (rgba.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
    Rgba([c.x as u8, c.y as u8, c.z as u8, c.w as u8])
}

impl Surface for RasterSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport, device_pixel_ratio: f32) {
        let (w, h) = Self::pixel_size(viewport, device_pixel_ratio);
        self.viewport = viewport;
        self.device_pixel_ratio = Self::sanitize_dpr(device_pixel_ratio);
        self.image = RgbaImage::from_pixel(w, h, to_pixel(self.clear_color.to_rgba()));
        debug!(
            "🖥️ Surface resized: {} x {} logical, {} x {} pixels",
            viewport.width, viewport.height, w, h
        );
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        let src = self.source(color);
        if src.w <= 0.0 {
            return;
        }
        let dpr = self.device_pixel_ratio;
        let (w, h) = self.image.dimensions();
        let a = origin * dpr;
        let b = (origin + size) * dpr;
        let min = a.min(b);
        let max = a.max(b);

        let x0 = min.x.round().clamp(0.0, w as f32) as u32;
        let x1 = max.x.round().clamp(0.0, w as f32) as u32;
        let y0 = min.y.round().clamp(0.0, h as f32) as u32;
        let y1 = max.y.round().clamp(0.0, h as f32) as u32;

        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, src);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let src = self.source(color);
        if src.w <= 0.0 || radius.is_nan() || radius <= 0.0 {
            return;
        }
        let dpr = self.device_pixel_ratio;
        let (w, h) = self.image.dimensions();
        let c = center * dpr;
        let r = radius * dpr;
        let r2 = r * r;

        let x0 = (c.x - r).floor().clamp(0.0, w as f32) as u32;
        let x1 = (c.x + r).ceil().clamp(0.0, w as f32) as u32;
        let y0 = (c.y - r).floor().clamp(0.0, h as f32) as u32;
        let y1 = (c.y + r).ceil().clamp(0.0, h as f32) as u32;

        for y in y0..y1 {
            for x in x0..x1 {
                // centre du pixel
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - c;
                if d.length_squared() <= r2 {
                    self.blend(x, y, src);
                }
            }
        }
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn global_alpha(&self) -> f32 {
        self.global_alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black() -> Color {
        Color::rgba(0, 0, 0, 1.0)
    }

    #[test]
    fn test_pixel_size_follows_dpr() {
        let surface = RasterSurface::new(Viewport::new(100.5, 50.0), 2.0, black());
        assert_eq!(surface.pixel_dimensions(), (201, 100));
    }

    #[test]
    fn test_invalid_dpr_falls_back_to_one() {
        let surface = RasterSurface::new(Viewport::new(10.0, 10.0), 0.0, black());
        assert_eq!(surface.device_pixel_ratio(), 1.0);
        assert_eq!(surface.pixel_dimensions(), (10, 10));
    }

    #[test]
    fn test_opaque_rect_overwrites() {
        let mut surface = RasterSurface::new(Viewport::new(4.0, 4.0), 1.0, black());
        surface.fill_rect(Vec2::ZERO, Vec2::new(2.0, 2.0), Color::rgba(255, 0, 0, 1.0));
        assert_eq!(surface.pixel(0, 0), Some(Rgba([255, 0, 0, 255])));
        assert_eq!(surface.pixel(1, 1), Some(Rgba([255, 0, 0, 255])));
        assert_eq!(surface.pixel(2, 2), Some(Rgba([0, 0, 0, 255])));
        assert_eq!(surface.pixel(4, 0), None);
    }

    #[test]
    fn test_circle_outside_surface_is_clipped() {
        let mut surface = RasterSurface::new(Viewport::new(8.0, 8.0), 1.0, black());
        surface.fill_circle(Vec2::new(-100.0, 5000.0), 20.0, Color::rgba(255, 255, 255, 1.0));
        assert!(surface.image().pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
    }
}
