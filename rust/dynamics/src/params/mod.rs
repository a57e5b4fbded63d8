//! Tunable response of a second-order tracking filter, and the per-step
//! coefficients derived from it.

use std::f32::consts::{PI, TAU};
use std::ops::RangeInclusive;

/// Smallest usable natural frequency. Zero or negative frequencies clamp to
/// this, since the frequency divides the base coefficients.
pub const MIN_FREQUENCY: f32 = 1e-3;

/// Recommended tuning ranges. The update imposes no upper bounds of its own,
/// but larger frequency and damping values shrink the numerical margin.
pub const FREQUENCY_RANGE: RangeInclusive<f32> = MIN_FREQUENCY..=100.0;
pub const DAMPING_RANGE: RangeInclusive<f32> = 0.0..=5.0;
pub const IMPULSE_RANGE: RangeInclusive<f32> = -10.0..=10.0;

/// Response tunables plus the base coefficients derived from them.
///
/// Every mutation goes through a setter that re-derives the base
/// coefficients, so a `Params` is always internally consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Tunables", into = "Tunables")
)]
pub struct Params {
    frequency: f32,
    damping: f32,
    impulse: f32,

    w: f32,
    z: f32,
    d: f32,
    k1: f32,
    k2: f32,
    k3: f32,
}

/// The persisted form of [`Params`]: just the three tunables. Derived
/// coefficients are re-derived on load rather than stored.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Tunables {
    frequency: f32,
    damping: f32,
    impulse: f32,
}

#[cfg(feature = "serde")]
impl From<Tunables> for Params {
    fn from(tunables: Tunables) -> Self {
        Self::new(tunables.frequency, tunables.damping, tunables.impulse)
    }
}

#[cfg(feature = "serde")]
impl From<Params> for Tunables {
    fn from(params: Params) -> Self {
        Self {
            frequency: params.frequency,
            damping: params.damping,
            impulse: params.impulse,
        }
    }
}

/// Integration coefficients for a single step.
///
/// Freshly derived from the elapsed time on every step and never cached, so
/// a `Params` shared between filters stepping at different rates stays
/// consistent.
#[derive(Debug, Clone, Copy)]
pub struct Stabilized {
    pub k1: f32,
    pub k2: f32,
    pub k3: f32,
}

impl Params {
    /// `frequency` is the natural frequency in hertz, `damping` the damping
    /// ratio (1 is critical damping), and `impulse` biases the initial
    /// transient toward (positive) or away from (negative) the target's
    /// motion.
    #[must_use]
    pub fn new(frequency: f32, damping: f32, impulse: f32) -> Self {
        let mut params = Self {
            frequency,
            damping,
            impulse,
            w: 0.,
            z: 0.,
            d: 0.,
            k1: 0.,
            k2: 0.,
            k3: 0.,
        };
        params.recompute();
        params
    }

    #[must_use]
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    #[must_use]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    #[must_use]
    pub fn impulse(&self) -> f32 {
        self.impulse
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
        self.recompute();
    }

    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping;
        self.recompute();
    }

    pub fn set_impulse(&mut self, impulse: f32) {
        self.impulse = impulse;
        self.recompute();
    }

    fn recompute(&mut self) {
        if self.frequency <= 0. {
            self.frequency = MIN_FREQUENCY;
        }

        self.w = TAU * self.frequency;
        self.z = self.damping;
        self.d = self.w * (self.damping * self.damping - 1.).abs().sqrt();

        self.k1 = self.damping / (PI * self.frequency);
        self.k2 = 1. / (self.w * self.w);
        self.k3 = self.impulse * self.damping / self.w;
    }

    /// Derive the integration coefficients for a step of length `dt`.
    ///
    /// Short steps keep the base coefficients, with a floor on `k2` below
    /// which the semi-implicit update would go unstable; once `w * dt`
    /// reaches `z`, the closed-form discretization of the underlying ODE
    /// takes over.
    #[must_use]
    pub fn stabilize(&self, dt: f32) -> Stabilized {
        // following https://www.youtube.com/watch?v=KPoeNZZ6H4s
        if self.w * dt < self.z {
            let k2 = self
                .k2
                .max(dt * dt / 2. + dt * self.k1 / 2.)
                .max(dt * self.k1);
            Stabilized {
                k1: self.k1,
                k2,
                k3: self.k3,
            }
        } else {
            let decay = self.z * self.w * dt;
            let t1 = (-decay).exp();
            let alpha = if self.z <= 1. {
                2. * t1 * (dt * self.d).cos()
            } else {
                // Equal to 2 * t1 * cosh(dt * d), whose factors overflow and
                // underflow f32 separately on long steps. Folding the decay
                // into the exponentials keeps both terms bounded, since
                // d < z * w whenever z > 1.
                (dt * self.d - decay).exp() + (-dt * self.d - decay).exp()
            };
            let beta = t1 * t1;
            let t2 = dt / (1. + beta - alpha);
            Stabilized {
                k1: (1. - beta) * t2,
                k2: dt * t2,
                k3: self.k3,
            }
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new(1., 1., 0.)
    }
}
