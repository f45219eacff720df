//! The capability set a host drives every custom view through.

use crate::{Canvas, Constraint, MeasurementError, PxSize};

/// A custom view: something the host can lay out and paint.
///
/// The host calls [`measure`](View::measure) during its layout pass, every
/// time the offered space may have changed, and [`draw`](View::draw) during
/// its paint pass. Both are called on the UI thread.
pub trait View {
    /// Resolves the view's size and recomputes any size-dependent geometry.
    ///
    /// Must be idempotent: measuring twice with the same constraint yields the
    /// same size and the same geometry.
    fn measure(&mut self, constraint: &Constraint) -> Result<PxSize, MeasurementError>;

    /// Paints the view onto `canvas` using the geometry from the last
    /// [`measure`](View::measure).
    fn draw(&mut self, canvas: &mut dyn Canvas);
}
