//! Couleurs procédurales des feux d'artifice.
//!
//! Les couleurs sont manipulées en HSL (teinte en degrés, saturation et
//! luminosité en pourcentage) pour pouvoir dériver la teinte d'une explosion
//! de celle de sa fusée. Les couleurs littérales (`rgba(...)`) servent aux
//! éléments neutres comme l'onde de choc ou le fond.

use anyhow::{anyhow, bail};
use glam::{Vec3, Vec4};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::physic_engine::types::{sample_span, Span};

lazy_static::lazy_static! {
    static ref HSL_RE: Regex = Regex::new(
        r"^\s*hsl\(\s*(-?\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*\)\s*$"
    )
    .expect("static regex");
    static ref RGBA_RE: Regex = Regex::new(
        r"^\s*rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d+(?:\.\d+)?)\s*)?\)\s*$"
    )
    .expect("static regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// Teinte en degrés, saturation et luminosité en pourcentage
    Hsl { h: f32, s: f32, l: f32 },
    /// Couleur littérale, alpha dans [0, 1]
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

impl Default for Color {
    fn default() -> Self {
        Color::Rgba {
            r: 255,
            g: 255,
            b: 255,
            a: 1.0,
        }
    }
}

impl Color {
    pub fn hsl(h: f32, s: f32, l: f32) -> Self {
        Color::Hsl { h, s, l }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// Teinte de la couleur, si elle est exprimée en HSL.
    pub fn hue(&self) -> Option<f32> {
        match self {
            Color::Hsl { h, .. } => Some(*h),
            Color::Rgba { .. } => None,
        }
    }

    /// Composantes RGBA normalisées dans [0, 1].
    pub fn to_rgba(&self) -> Vec4 {
        match *self {
            Color::Hsl { h, s, l } => hsl_to_rgb(h, s, l).extend(1.0),
            Color::Rgba { r, g, b, a } => Vec4::new(
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
                a.clamp(0.0, 1.0),
            ),
        }
    }
}

fn hsl_to_rgb(h_deg: f32, s_pct: f32, l_pct: f32) -> Vec3 {
    let h = h_deg.rem_euclid(360.0) / 360.0;
    let s = (s_pct / 100.0).clamp(0.0, 1.0);
    let l = (l_pct / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h * 6.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hsl { h, s, l } => write!(f, "hsl({:.1}, {:.1}%, {:.1}%)", h, s, l),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        if let Some(caps) = HSL_RE.captures(s) {
            return Ok(Color::Hsl {
                h: caps[1].parse()?,
                s: caps[2].parse()?,
                l: caps[3].parse()?,
            });
        }

        if let Some(caps) = RGBA_RE.captures(s) {
            let channel = |i: usize| -> anyhow::Result<u8> {
                caps[i]
                    .parse::<u8>()
                    .map_err(|e| anyhow!("invalid channel '{}' in '{}': {}", &caps[i], s, e))
            };
            let a = match caps.get(4) {
                Some(m) => m.as_str().parse::<f32>()?,
                None => 1.0,
            };
            if !(0.0..=1.0).contains(&a) {
                bail!("alpha out of [0, 1] in '{}'", s);
            }
            return Ok(Color::Rgba {
                r: channel(1)?,
                g: channel(2)?,
                b: channel(3)?,
                a,
            });
        }

        bail!("unsupported color token: '{}'", s)
    }
}

impl TryFrom<String> for Color {
    type Error = anyhow::Error;

    fn try_from(value: String) -> anyhow::Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Plage de teintes HSL dans laquelle on tire les couleurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorTone {
    pub hue: Span,
    pub saturation: Span,
    pub lightness: Span,
}

impl ColorTone {
    /// Tons jaunes, utilisés pour le corps des fusées
    pub const YELLOWISH: ColorTone = ColorTone {
        hue: [45.0, 60.0],
        saturation: [80.0, 100.0],
        lightness: [50.0, 60.0],
    };

    /// Tons chauds plus larges (compléments orangés / verts tendres)
    pub const WARM: ColorTone = ColorTone {
        hue: [30.0, 70.0],
        saturation: [70.0, 100.0],
        lightness: [45.0, 60.0],
    };

    pub fn sample(&self, rng: &mut impl Rng) -> Color {
        Color::Hsl {
            h: sample_span(rng, self.hue),
            s: sample_span(rng, self.saturation),
            l: sample_span(rng, self.lightness),
        }
    }
}
