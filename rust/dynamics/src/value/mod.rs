//! Value types a filter can track, and the arithmetic it needs from them.

use glam::{Quat, Vec2, Vec3};

/// The arithmetic a tracked value type supplies to the filter.
///
/// The update algorithm touches values only through these operations, which
/// is what keeps it generic across scalars, vectors, and rotations without
/// dynamic dispatch.
pub trait Value: Copy {
    /// Additive identity, and the velocity of a freshly initialized filter.
    const ZERO: Self;

    #[must_use]
    fn add(self, other: Self) -> Self;

    #[must_use]
    fn sub(self, other: Self) -> Self;

    #[must_use]
    fn scale(self, factor: f32) -> Self;

    /// Move `self` onto the hemisphere of `reference`, for representations
    /// where a value and its negation mean the same thing. Identity for
    /// everything except rotations.
    #[must_use]
    fn align_to(self, _reference: Self) -> Self {
        self
    }

    /// Restore the representation's invariant after integration. Identity
    /// for everything except rotations, which return to unit length.
    #[must_use]
    fn renormalize(self) -> Self {
        self
    }
}

impl Value for f32 {
    const ZERO: Self = 0.;

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn scale(self, factor: f32) -> Self {
        self * factor
    }
}

impl Value for Vec2 {
    const ZERO: Self = Vec2::ZERO;

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn scale(self, factor: f32) -> Self {
        self * factor
    }
}

impl Value for Vec3 {
    const ZERO: Self = Vec3::ZERO;

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn scale(self, factor: f32) -> Self {
        self * factor
    }
}

/// Rotations are treated as plain 4-component values during integration:
/// component-wise sums and scaling, with the two rotation-specific hooks
/// doing the real work. `ZERO` is the all-zero quaternion, not the identity
/// rotation, since it plays the role of a zero velocity.
impl Value for Quat {
    const ZERO: Self = Quat::from_xyzw(0., 0., 0., 0.);

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn scale(self, factor: f32) -> Self {
        self * factor
    }

    fn align_to(self, reference: Self) -> Self {
        // A rotation and its negation are the same orientation; pick the
        // representative nearest the reference so finite differences stay
        // continuous.
        if reference.dot(self) < 0. {
            -self
        } else {
            self
        }
    }

    fn renormalize(self) -> Self {
        let magnitude = self.length();
        if magnitude > 0. {
            self / magnitude
        } else {
            Quat::IDENTITY
        }
    }
}

#[cfg(test)]
mod tests;
