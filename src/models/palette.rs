//! Group color palette and the selection strategy applied at creation.
//! The palette is explicit configuration passed into the create operation,
//! never ambient mutable state; the sequential cursor lives in the store
//! document so cycling survives across invocations.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: String,
    pub hex: String,
}

impl PaletteColor {
    fn new(name: &str, hex: &str) -> Self {
        Self {
            name: name.to_string(),
            hex: hex.to_string(),
        }
    }
}

/// How a color is assigned to a newly created group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorStrategy {
    /// Cycle through the palette in order, remembering the cursor.
    #[default]
    Sequential,
    /// Pick any palette entry; the cursor is left untouched.
    Random,
}

#[derive(Debug, Clone)]
pub struct Palette {
    pub colors: Vec<PaletteColor>,
    pub strategy: ColorStrategy,
}

impl Palette {
    pub fn new(colors: Vec<PaletteColor>, strategy: ColorStrategy) -> Self {
        let colors = if colors.is_empty() {
            default_colors()
        } else {
            colors
        };
        Self { colors, strategy }
    }

    /// Pick a color for a new group. Returns the chosen entry and the next
    /// value of the persisted cursor.
    pub fn pick(&self, cursor: usize) -> (&PaletteColor, usize) {
        match self.strategy {
            ColorStrategy::Sequential => {
                let idx = cursor % self.colors.len();
                (&self.colors[idx], cursor.wrapping_add(1))
            }
            ColorStrategy::Random => {
                let nanos = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.subsec_nanos())
                    .unwrap_or(0);
                let idx = nanos as usize % self.colors.len();
                (&self.colors[idx], cursor)
            }
        }
    }

    /// Resolve a user-supplied token (entry name, case-insensitive, or hex)
    /// against the palette.
    pub fn resolve(&self, token: &str) -> Option<&PaletteColor> {
        let wanted = token.trim();
        self.colors
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(wanted) || c.hex.eq_ignore_ascii_case(wanted))
    }
}

/// The fixed default palette (ten entries, cycled for new groups).
pub fn default_colors() -> Vec<PaletteColor> {
    vec![
        PaletteColor::new("blue", "#1e90ff"),
        PaletteColor::new("orange", "#e67e22"),
        PaletteColor::new("magenta", "#c62fa0"),
        PaletteColor::new("green", "#27ae60"),
        PaletteColor::new("red", "#f44336"),
        PaletteColor::new("cyan", "#00bcd4"),
        PaletteColor::new("yellow", "#ffeb3b"),
        PaletteColor::new("purple", "#9c27b0"),
        PaletteColor::new("amber", "#ff9800"),
        PaletteColor::new("blue-grey", "#607d8b"),
    ]
}
