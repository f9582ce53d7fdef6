//! Per-channel color arithmetic shared by the filters.
//!
//! Everything here works on 8-bit sRGB values directly; no filter in this
//! crate needs linear light.

/// Fixed-point BT.601 weights, scaled by 2^14.
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

/// Weighted luma of an RGB triple.
///
/// The weights sum to exactly `1 << 14`, so a gray pixel maps to itself.
#[inline]
pub fn luma([r, g, b]: [u8; 3]) -> u8 {
    let weighted = r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B;
    ((weighted + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
}

/// Palette index of an RGB triple.
///
/// Same fixed-point weights as [`luma`] but applied in B, G, R order: red
/// carries the blue weight and blue the red weight. Tone-mapped filters
/// index their palettes this way; [`luma`] remains the grayscale value.
#[inline]
pub fn palette_index([r, g, b]: [u8; 3]) -> u8 {
    luma([b, g, r])
}

/// Scale a channel by `gain`, rounding half to even and saturating at 0 and 255.
#[inline]
pub fn scale_channel(value: u8, gain: f32) -> u8 {
    saturate((value as f32 * gain).abs().round_ties_even())
}

/// Clamp a float into the 0..=255 range and convert.
#[inline]
pub fn saturate(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
