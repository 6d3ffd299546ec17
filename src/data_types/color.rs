use super::{CellValue, Dataset};
use eyre::{bail, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// RGBA color, components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const STEELBLUE: Self = Self::rgb(0x4682b4);
    pub const BLACK: Self = Self::rgb(0x000000);

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let value = match u32::from_str_radix(digits, 16) {
            Ok(v) => v,
            Err(_) => bail!("invalid hex color {:?}", hex),
        };
        match digits.len() {
            6 => Ok(Self::rgb(value)),
            8 => Ok(Self::rgb(value >> 8).with_alpha((value & 0xff) as f32 / 255.0)),
            _ => bail!("invalid hex color {:?}", hex),
        }
    }

    pub fn to_hex(&self) -> String {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", c(self.r), c(self.g), c(self.b))
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                c(self.r),
                c(self.g),
                c(self.b),
                c(self.a)
            )
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation in RGB space.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// The ten-color categorical palette used for ordinal groupings.
pub const CATEGORY10: [Color; 10] = [
    Color::rgb(0x1f77b4),
    Color::rgb(0xff7f0e),
    Color::rgb(0x2ca02c),
    Color::rgb(0xd62728),
    Color::rgb(0x9467bd),
    Color::rgb(0x8c564b),
    Color::rgb(0xe377c2),
    Color::rgb(0x7f7f7f),
    Color::rgb(0xbcbd22),
    Color::rgb(0x17becf),
];

/// Grouping value -> stroke color. Rows without a mapped value get `default`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorMap {
    pub dimension: Option<String>,
    pub colors: HashMap<String, Color>,
    pub default: Color,
}

impl Default for ColorMap {
    fn default() -> Self {
        Self {
            dimension: None,
            colors: HashMap::new(),
            default: Color::STEELBLUE,
        }
    }
}

impl ColorMap {
    pub fn new(dimension: impl Into<String>) -> Self {
        Self {
            dimension: Some(dimension.into()),
            ..Default::default()
        }
    }

    pub fn with_color(mut self, value: impl Into<String>, color: Color) -> Self {
        self.colors.insert(value.into(), color);
        self
    }

    pub fn with_default(mut self, color: Color) -> Self {
        self.default = color;
        self
    }

    /// Assigns `palette` to the distinct values of `dimension` in order of first
    /// appearance, cycling when there are more values than colors.
    pub fn from_palette(dimension: &str, dataset: &Dataset, palette: &[Color]) -> Self {
        let mut map = Self::new(dimension);
        let (Some(column), false) = (dataset.column_index(dimension), palette.is_empty()) else {
            return map;
        };

        let mut next = 0;
        for row in dataset.rows() {
            let key = row[column].to_string();
            if !map.colors.contains_key(&key) {
                map.colors.insert(key, palette[next % palette.len()]);
                next += 1;
            }
        }
        map
    }

    /// Stroke for a row. A missing grouping column or unmapped value falls back
    /// to the default.
    pub fn resolve(&self, dataset: &Dataset, row: &[CellValue]) -> Color {
        self.dimension
            .as_deref()
            .and_then(|dim| dataset.column_index(dim))
            .and_then(|col| row.get(col))
            .and_then(|value| self.colors.get(&value.to_string()))
            .copied()
            .unwrap_or(self.default)
    }

    pub fn resolve_value(&self, value: &str) -> Color {
        self.colors.get(value).copied().unwrap_or(self.default)
    }
}
