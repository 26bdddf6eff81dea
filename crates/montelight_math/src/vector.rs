//! Three-component vector algebra.
//!
//! `Vector3` is glam's double-precision `DVec3`, which already provides
//! component-wise `+`, `-`, scalar `*`, `dot` and the right-handed `cross`.
//! This module adds the normalization policy used across the renderer.

use glam::DVec3;
use thiserror::Error;

/// A 3D vector of `f64` components.
pub type Vector3 = DVec3;

/// An RGB color stored in a `Vector3` (channels conceptually in [0, 1]).
pub type Color = DVec3;

/// Errors from checked vector operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("cannot normalize a non-finite vector: {0}")]
    NonFinite(DVec3),
}

/// Result type for checked math operations.
pub type MathResult<T> = Result<T, MathError>;

/// Normalization to unit length.
///
/// The unchecked forms divide by the Euclidean magnitude without looking at
/// it: a zero vector becomes NaN and that NaN propagates through whatever
/// consumes it. Use [`Normalize::normalized_checked`] when the input comes
/// from user-provided setup data.
pub trait Normalize: Sized {
    /// Normalize in place, returning `self` for chaining.
    fn norm(&mut self) -> &mut Self;

    /// Return a normalized copy (unchecked).
    fn normalized(self) -> Self;

    /// Return a normalized copy, failing on zero-length or non-finite input.
    fn normalized_checked(self) -> MathResult<Self>;
}

impl Normalize for DVec3 {
    #[inline]
    fn norm(&mut self) -> &mut Self {
        *self = *self * (1.0 / self.length());
        self
    }

    #[inline]
    fn normalized(mut self) -> Self {
        self.norm();
        self
    }

    fn normalized_checked(self) -> MathResult<Self> {
        if !self.is_finite() {
            return Err(MathError::NonFinite(self));
        }
        let length = self.length();
        if length == 0.0 {
            return Err(MathError::ZeroLength);
        }
        Ok(self * (1.0 / length))
    }
}
