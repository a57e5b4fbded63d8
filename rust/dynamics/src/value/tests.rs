use assert_approx_eq::assert_approx_eq;
use glam::{Quat, Vec3};

use super::Value;

#[test]
fn zero_is_the_additive_identity() {
    assert_eq!(<f32 as Value>::ZERO.add(3.5), 3.5);

    let v = Vec3::new(1., -2., 3.);
    assert_eq!(<Vec3 as Value>::ZERO.add(v), v);

    let q = Quat::from_rotation_y(0.3);
    let sum = <Quat as Value>::ZERO.add(q);
    assert_approx_eq!(sum.x, q.x);
    assert_approx_eq!(sum.y, q.y);
    assert_approx_eq!(sum.z, q.z);
    assert_approx_eq!(sum.w, q.w);
}

#[test]
fn align_flips_an_opposite_hemisphere_rotation() {
    let q = Quat::from_rotation_y(0.3);
    let aligned = (-q).align_to(q);
    assert_approx_eq!(aligned.x, q.x);
    assert_approx_eq!(aligned.y, q.y);
    assert_approx_eq!(aligned.z, q.z);
    assert_approx_eq!(aligned.w, q.w);
}

#[test]
fn align_keeps_a_same_hemisphere_rotation() {
    let q = Quat::from_rotation_y(0.3);
    let near = Quat::from_rotation_y(0.4);
    let aligned = near.align_to(q);
    assert_eq!(aligned, near);
}

#[test]
fn renormalize_restores_unit_length() {
    let scaled = Quat::from_rotation_z(1.).scale(3.);
    assert_approx_eq!(scaled.renormalize().length(), 1.);
}

#[test]
fn renormalize_of_zero_is_the_identity() {
    let zero = Quat::from_xyzw(0., 0., 0., 0.);
    assert_eq!(zero.renormalize(), Quat::IDENTITY);
}

#[test]
fn scale_is_component_wise_for_vectors() {
    let v = Vec3::new(1., -2., 3.).scale(2.);
    assert_eq!(v, Vec3::new(2., -4., 6.));
}
