//! Scalar precision and the comparison tolerance.
//!
//! Exactly one of the `f64` / `f32` features picks [`Real`]; everything in the
//! crate is written against that alias and the angle constants below.

use std::sync::OnceLock;

#[cfg(feature = "f64")]
mod precision {
    pub type Real = f64;
    pub use core::f64::consts::{FRAC_PI_2, PI, TAU};
    pub const DEFAULT_TOLERANCE: Real = 1e-6;
}

#[cfg(feature = "f32")]
mod precision {
    pub type Real = f32;
    pub use core::f32::consts::{FRAC_PI_2, PI, TAU};
    pub const DEFAULT_TOLERANCE: Real = 1e-4;
}

/// Floating-point scalar used for every coordinate and length.
pub use precision::Real;
/// π, τ = 2π and π/2 at the active precision.
pub use precision::{FRAC_PI_2, PI, TAU};

static TOLERANCE: OnceLock<Real> = OnceLock::new();

/// Distance below which two lengths count as equal in the wireframe checks.
///
/// Generation never reads it. Resolved on first use from, in order:
/// a [`set_tolerance`] call made before that, the `HSPHERE_TOLERANCE`
/// variable present at compile time, then 1e-6 (f64) or 1e-4 (f32).
pub fn tolerance() -> Real {
    *TOLERANCE.get_or_init(|| {
        option_env!("HSPHERE_TOLERANCE")
            .and_then(|text| text.parse::<Real>().ok())
            .map_or(precision::DEFAULT_TOLERANCE, |value| value.max(Real::EPSILON))
    })
}

/// Fix the tolerance for the rest of the process. Only the first call that
/// happens before [`tolerance`] is read takes effect; values under
/// `Real::EPSILON` are raised to it.
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE.set(value.max(Real::EPSILON));
}
