//! tone-filters: named color and tone filters for photos
//!
//! This library implements a small, linear photo pipeline: decode a JPEG or
//! PNG, apply one filter from a fixed set, adjust brightness and scale, and
//! encode the result as PNG.
//!
//! # Quick Start
//!
//! The [`FilterPipeline`] builder is the primary entry point:
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use tone_filters::{Filter, FilterPipeline};
//!
//! let image = RgbImage::from_pixel(4, 4, Rgb([255, 0, 0]));
//! let gray = FilterPipeline::new(Filter::Grayscale).run(&image).unwrap();
//!
//! assert_eq!(gray.get_pixel(0, 0).0, [76, 76, 76]);
//! ```
//!
//! # Session State
//!
//! Input handling is modelled as an owned [`Session`] value that the caller
//! threads through each interaction:
//!
//! ```
//! use tone_filters::{FilterPipeline, InputMode, Session, SessionPhase};
//!
//! let session = Session::new().select_mode(InputMode::Upload);
//! assert_eq!(session.phase(), SessionPhase::InputSelected);
//! assert!(session.render(&FilterPipeline::default()).is_err());
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! JPEG/PNG bytes
//!     |
//!     v
//! decode                  (alpha dropped, gray expanded to RGB)
//!     |
//!     v
//! Filter recipe           Luma, or gain + palette lookup
//!     |
//!     v
//! brightness              (multiply, truncate, clamp)
//!     |
//!     v
//! resize                  (Catmull-Rom, skipped at scale 1.0)
//!     |
//!     v
//! PNG bytes
//! ```
//!
//! Palettes are embedded 256-entry tables; see [`Colormap`].

pub mod adjust;
pub mod codec;
pub mod color;
pub mod colormap;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod session;


pub use adjust::{Adjustments, BRIGHTNESS_RANGE, SCALE_RANGE, SLIDER_STEP};
pub use codec::{decode, encode_png, InputFormat};
pub use colormap::Colormap;
pub use error::FilterError;
pub use filter::{Filter, Recipe};
pub use pipeline::{FilterPipeline, Rendered};
pub use session::{InputMode, Session, SessionPhase};
