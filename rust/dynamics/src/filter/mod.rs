//! Per-signal filter state and the generic update step.

use crate::params::{Params, Stabilized};
use crate::value::Value;

/// Smoothed state tracking a single target signal.
///
/// One `Filter` per tracked signal, mutated in place once per tick. An
/// uninitialized filter snaps to the first target it observes instead of
/// interpolating from a default.
#[derive(Debug, Clone, Copy)]
pub struct Filter<T> {
    position: T,
    velocity: T,
    last_target: T,
    initialized: bool,
}

impl<T: Value> Filter<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: T::ZERO,
            velocity: T::ZERO,
            last_target: T::ZERO,
            initialized: false,
        }
    }

    /// Current smoothed output.
    #[must_use]
    pub fn position(&self) -> T {
        self.position
    }

    /// Current estimated rate of change of the output.
    #[must_use]
    pub fn velocity(&self) -> T {
        self.velocity
    }

    #[must_use]
    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// Snap to `value`: position and target history become `value`, velocity
    /// becomes zero.
    pub fn init(&mut self, value: T) {
        self.position = value;
        self.velocity = T::ZERO;
        self.last_target = value;
        self.initialized = true;
    }

    /// Re-enter tracking at `value`, discarding accumulated momentum (for
    /// example after teleporting the tracked object).
    pub fn reset(&mut self, value: T) {
        self.init(value);
    }

    /// Advance toward `target` over `dt` seconds, estimating the target's
    /// velocity by finite difference against the previously observed target.
    ///
    /// The estimate trails target-velocity changes by one step; callers that
    /// know the true velocity can use [`Filter::update_with_velocity`].
    pub fn update(&mut self, params: &Params, target: T, dt: f32) -> T {
        debug_assert!(dt >= 0.);

        if !self.initialized {
            self.init(target);
        }
        if dt == 0. {
            return self.position;
        }

        let target = target.align_to(self.last_target);
        let target_velocity = target.sub(self.last_target).scale(1. / dt);
        self.last_target = target;

        self.step(params.stabilize(dt), target, target_velocity, dt)
    }

    /// Advance toward `target` over `dt` seconds with a caller-supplied
    /// target velocity.
    pub fn update_with_velocity(
        &mut self,
        params: &Params,
        target: T,
        target_velocity: T,
        dt: f32,
    ) -> T {
        debug_assert!(dt >= 0.);

        if !self.initialized {
            self.init(target);
        }
        if dt == 0. {
            return self.position;
        }

        let target = target.align_to(self.last_target);
        self.last_target = target;

        self.step(params.stabilize(dt), target, target_velocity, dt)
    }

    fn step(
        &mut self,
        Stabilized { k1, k2, k3 }: Stabilized,
        target: T,
        target_velocity: T,
        dt: f32,
    ) -> T {
        // Explicit Euler advance of the position, then a semi-implicit pull
        // of the velocity toward closing the remaining gap. The velocity
        // update sees the advanced position but the pre-step velocity.
        let position = self.position.add(self.velocity.scale(dt));
        let velocity = self.velocity.add(
            target
                .add(target_velocity.scale(k3))
                .sub(position.add(self.velocity.scale(k1)))
                .scale(dt / k2),
        );

        self.position = position.renormalize();
        self.velocity = velocity;
        self.position
    }
}

impl<T: Value> Default for Filter<T> {
    fn default() -> Self {
        Self::new()
    }
}
