//! Frame type and disk I/O.
//!
//! Frames are `image::RgbImage` buffers so they can be decoded, drawn on with
//! `imageproc` and encoded again without conversion.

pub mod io;

pub use ::image::{Rgb, RgbImage};

/// RGB colour as stored in configs and options.
pub type Rgb8 = [u8; 3];
