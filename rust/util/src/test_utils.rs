#![allow(clippy::cast_precision_loss)]

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::f32::lerp;

pub fn fill_with_white_noise(buffer: &mut [f32]) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(420);
    for sample in buffer.iter_mut() {
        *sample = rng.gen_range(-1.0..1.0);
    }
}

#[must_use]
pub fn white_noise(len: usize) -> Vec<f32> {
    let mut buffer = vec![0.0; len];
    fill_with_white_noise(&mut buffer);
    buffer
}

/// Target sequence moving at constant velocity from `from` to `to`.
///
/// # Panics
///
/// Panics if `len` is less than 2.
#[must_use]
pub fn ramp(len: usize, from: f32, to: f32) -> Vec<f32> {
    assert!(len > 1);
    (0..len)
        .map(|i| lerp(from, to, i as f32 / (len - 1) as f32))
        .collect()
}

/// Random unit rotations as `[x, y, z, w]` components, deterministic across
/// runs.
#[must_use]
pub fn random_rotations(len: usize) -> Vec<[f32; 4]> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(420);
    (0..len)
        .map(|_| loop {
            let q: [f32; 4] = [
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            ];
            let magnitude = q.iter().map(|c| c * c).sum::<f32>().sqrt();
            if magnitude > 0.1 {
                break q.map(|c| c / magnitude);
            }
        })
        .collect()
}
