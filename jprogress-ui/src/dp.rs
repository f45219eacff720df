//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] type for sizes that should look the same
//! physical size on every screen, such as the default label text size of a
//! progress view.
//!
//! ## Scale Factor
//!
//! The conversion between dp and physical pixels is controlled by a global
//! scale factor stored in [`SCALE_FACTOR`]. Hosts set it once from the display
//! density; when it has never been set, one dp equals one pixel.
//!
//! ## Usage
//!
//! ```
//! use jprogress_ui::Dp;
//!
//! let text_size = Dp(20.0);
//! let pixels = text_size.to_pixels_f32();
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

/// Global scale factor for converting between dp and physical pixels.
///
/// The value is how many physical pixels correspond to one dp unit. A scale
/// factor of 2.0 means `Dp(20.0)` is 40 pixels wide.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global scale factor, creating it on first use.
///
/// Later calls overwrite the previous value, which lets a host react to a
/// density change (moving a window to another monitor, for example).
pub fn set_scale_factor(scale_factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(scale_factor));
    *lock.write() = scale_factor;
}

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels (dp) for UI scaling.
///
/// `Dp` wraps a single `f64` and is converted to pixels through the global
/// [`SCALE_FACTOR`] whenever drawing needs concrete pixel values.
///
/// ```
/// use jprogress_ui::Dp;
///
/// let stroke = Dp(4.0);
/// let double = Dp(stroke.0 * 2.0);
/// assert!(double > stroke);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Converts this dp value to physical pixels as an `f32`.
    ///
    /// This is the conversion used for paint sizes, which are `f32` like
    /// every other drawing coordinate.
    pub fn to_pixels_f32(&self) -> f32 {
        (self.0 * scale_factor()) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_factor_multiplies_dp() {
        set_scale_factor(2.0);
        assert_eq!(Dp(20.0).to_pixels_f32(), 40.0);
        set_scale_factor(1.0);
        assert_eq!(Dp(20.0).to_pixels_f32(), 20.0);
    }
}
