use serde::{Deserialize, Serialize};

use crate::physic_engine::{Color, Viewport};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Taille logique de la surface
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
    /// Couleur initiale de la surface
    pub clear_color: Color,
    /// Voile peint chaque frame : laisse des traînées au lieu d'effacer
    pub background_fade: Color,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 800.0,
            device_pixel_ratio: 1.0,
            clear_color: Color::rgba(6, 8, 16, 1.0),
            background_fade: Color::rgba(6, 8, 16, 0.35),
        }
    }
}

impl RendererConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
