//! Fixed palette lookup tables.
//!
//! A [`Colormap`] recolors an image by its brightness alone: each pixel's
//! [`palette_index`] picks one of 256 embedded RGB entries. The tables live in
//! [`tables`] as static data and are never computed at runtime.

mod tables;

use image::{Rgb, RgbImage};

use crate::color::palette_index;

/// One of the embedded 256-entry palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colormap {
    /// Sepia-like pastel pink
    Pink,
    /// Blue fading into green
    Winter,
    /// Black, red, yellow, white
    Hot,
    /// Gray with a blue cast
    Bone,
}

impl Colormap {
    /// All palettes, in table order.
    pub const ALL: [Colormap; 4] = [
        Colormap::Pink,
        Colormap::Winter,
        Colormap::Hot,
        Colormap::Bone,
    ];

    /// The embedded lookup table.
    pub fn table(self) -> &'static [[u8; 3]; 256] {
        match self {
            Colormap::Pink => &tables::PINK,
            Colormap::Winter => &tables::WINTER,
            Colormap::Hot => &tables::HOT,
            Colormap::Bone => &tables::BONE,
        }
    }

    /// Lowercase palette name.
    pub fn name(self) -> &'static str {
        match self {
            Colormap::Pink => "pink",
            Colormap::Winter => "winter",
            Colormap::Hot => "hot",
            Colormap::Bone => "bone",
        }
    }

    #[inline]
    pub fn lookup(self, intensity: u8) -> [u8; 3] {
        self.table()[intensity as usize]
    }

    /// Replace every pixel with the table entry for its palette index.
    pub fn apply(self, image: &RgbImage) -> RgbImage {
        let table = self.table();
        let mut out = RgbImage::new(image.width(), image.height());
        for (dst, src) in out.pixels_mut().zip(image.pixels()) {
            *dst = Rgb(table[palette_index(src.0) as usize]);
        }
        out
    }
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
