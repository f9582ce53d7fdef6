//! The closed set of named filters.
//!
//! Each [`Filter`] resolves to a [`Recipe`], and each recipe is a pure
//! per-pixel transform. Output dimensions always equal input dimensions.
//!
//! | Filter | Recipe |
//! |--------|--------|
//! | Grayscale | luma replicated to all channels |
//! | Paris | gain 1.2, pink palette |
//! | London | gain 0.9, winter palette |
//! | Tokyo | gain 1.3, hot palette |
//! | Oslo | gain 0.8, bone palette |

mod tone;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use image::RgbImage;

use crate::colormap::Colormap;
use crate::error::FilterError;

pub use tone::{apply_gain, grayscale};

/// A named filter from the fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    Grayscale,
    Paris,
    London,
    Tokyo,
    Oslo,
}

/// How a filter transforms pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recipe {
    /// Replace each pixel by its luma on all three channels
    Luma,
    /// Scale channels by `gain`, then recolor through `colormap`
    ToneMap { gain: f32, colormap: Colormap },
}

impl Filter {
    /// Every filter, in menu order.
    pub const ALL: [Filter; 5] = [
        Filter::Grayscale,
        Filter::Paris,
        Filter::London,
        Filter::Tokyo,
        Filter::Oslo,
    ];

    /// Display name as shown in the filter menu.
    pub fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "Grayscale",
            Filter::Paris => "Paris",
            Filter::London => "London",
            Filter::Tokyo => "Tokyo",
            Filter::Oslo => "Oslo",
        }
    }

    /// Lowercase name, used for download file names.
    pub fn slug(self) -> String {
        self.name().to_lowercase()
    }

    /// Download file name: `<slug>.png`.
    pub fn file_name(self) -> String {
        format!("{}.png", self.slug())
    }

    pub fn recipe(self) -> Recipe {
        match self {
            Filter::Grayscale => Recipe::Luma,
            Filter::Paris => Recipe::ToneMap {
                gain: 1.2,
                colormap: Colormap::Pink,
            },
            Filter::London => Recipe::ToneMap {
                gain: 0.9,
                colormap: Colormap::Winter,
            },
            Filter::Tokyo => Recipe::ToneMap {
                gain: 1.3,
                colormap: Colormap::Hot,
            },
            Filter::Oslo => Recipe::ToneMap {
                gain: 0.8,
                colormap: Colormap::Bone,
            },
        }
    }

    /// Apply this filter, producing a new buffer of the same size.
    pub fn apply(self, image: &RgbImage) -> RgbImage {
        self.recipe().apply(image)
    }
}

impl Recipe {
    pub fn apply(self, image: &RgbImage) -> RgbImage {
        match self {
            Recipe::Luma => grayscale(image),
            Recipe::ToneMap { gain, colormap } => colormap.apply(&apply_gain(image, gain)),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recipe::Luma => f.write_str("luma"),
            Recipe::ToneMap { gain, colormap } => write!(f, "gain {gain} -> {colormap}"),
        }
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    /// Case-insensitive match on the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Filter::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FilterError::UnsupportedFilter(s.to_string()))
    }
}
