//! 2D affine transforms
//!
//! A `Transform` is the top two rows `(a, b, c, d, e, f)` of the homogeneous
//! matrix `[[a, b, c], [d, e, f], [0, 0, 1]]`, i.e. the map `p ↦ L·p + t`
//! with linear part `L = [[a, b], [d, e]]` and translation `t = (c, f)`.
//! The bottom row is always `(0, 0, 1)` - affine, never projective.
//!
//! Transforms are immutable values: every operation returns a new one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An affine transform from an object's local frame to the world frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    /// The zero map (every point to the origin, translation included)
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    /// The identity map
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0);
    /// Reflection across the x axis: `(x, y) ↦ (x, -y)`
    pub const REFLECT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0);
    /// Reflection across the y axis: `(x, y) ↦ (-x, y)`
    pub const REFLECT_Y: Self = Self::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0);
    /// Reflection across the line x = y: `(x, y) ↦ (y, x)`
    pub const REFLECT_XY: Self = Self::new(0.0, 1.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Pure translation by `(dx, dy)`
    pub const fn translation(dx: f32, dy: f32) -> Self {
        Self::new(1.0, 0.0, dx, 0.0, 1.0, dy)
    }

    /// Counter-clockwise rotation by `radians` about the origin
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, -sin, 0.0, sin, cos, 0.0)
    }

    /// Map a point through the transform
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.b * p.y + self.c,
            self.d * p.x + self.e * p.y + self.f,
        )
    }

    /// Compose with `t`, applying `self` first and `t` second.
    ///
    /// As matrices this is the product `t · self`, so
    /// `a.compose(b).apply(p) == b.apply(a.apply(p))`. Callers rely on this
    /// order everywhere; see the motion stepping in [`crate::sim::body`].
    pub fn compose(&self, t: Self) -> Self {
        Self::new(
            t.a * self.a + t.b * self.d,
            t.a * self.b + t.b * self.e,
            t.a * self.c + t.b * self.f + t.c,
            t.d * self.a + t.e * self.d,
            t.d * self.b + t.e * self.e,
            t.d * self.c + t.e * self.f + t.f,
        )
    }

    /// The linear part `L` alone (translation zeroed)
    pub fn linear_part(&self) -> Self {
        Self::new(self.a, self.b, 0.0, self.d, self.e, 0.0)
    }

    /// The translation alone (linear part replaced by identity)
    pub fn translate_part(&self) -> Self {
        Self::translation(self.c, self.f)
    }

    /// Determinant of the linear part
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.a * self.e - self.b * self.d
    }

    /// Whether the transform flips orientation (reflections, not rotations)
    pub fn is_reflected(&self) -> bool {
        self.determinant() < 0.0
    }

    /// Invert the linear part and negate the translation, independently.
    ///
    /// Not the true inverse of a general affine map: the translation is not
    /// run back through `L⁻¹`. Every transform this system inverts is either
    /// translation-only or linear-only, where the two agree. Inverting a
    /// singular transform is a contract violation.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        debug_assert!(det != 0.0, "inverse of singular transform");
        Self::new(
            self.e / det,
            -self.b / det,
            -self.c,
            -self.d / det,
            self.a / det,
            -self.f,
        )
    }

    /// Conjugate by `t`: the transform that applies `self` as seen from the
    /// frame defined by `t` (e.g. a world-axis reflection re-centered on the
    /// arena middle, or a local thrust expressed in world coordinates).
    pub fn conjugate(&self, t: Self) -> Self {
        t.inverse().compose(self.compose(t))
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} {} {}]\n[{} {} {}]\n[0 0 1]",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn assert_vec2_near(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-3, "{a} != {b}");
    }

    fn assert_transform_near(a: Transform, b: Transform) {
        for (x, y) in [
            (a.a, b.a),
            (a.b, b.b),
            (a.c, b.c),
            (a.d, b.d),
            (a.e, b.e),
            (a.f, b.f),
        ] {
            assert!((x - y).abs() < 1e-4, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_identity_apply() {
        let p = Vec2::new(3.5, -7.25);
        assert_eq!(Transform::IDENTITY.apply(p), p);
        assert_eq!(Transform::IDENTITY.apply(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_translation_apply() {
        let t = Transform::translation(10.0, -4.0);
        assert_eq!(t.apply(Vec2::new(1.0, 2.0)), Vec2::new(11.0, -2.0));
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let r = Transform::rotation(FRAC_PI_2);
        assert_vec2_near(r.apply(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0));
        assert_vec2_near(r.apply(Vec2::new(0.0, 1.0)), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_reflections() {
        assert_eq!(
            Transform::REFLECT_X.apply(Vec2::new(2.0, 3.0)),
            Vec2::new(2.0, -3.0)
        );
        assert_eq!(
            Transform::REFLECT_Y.apply(Vec2::new(2.0, 3.0)),
            Vec2::new(-2.0, 3.0)
        );
        assert_eq!(
            Transform::REFLECT_XY.apply(Vec2::new(2.0, 3.0)),
            Vec2::new(3.0, 2.0)
        );
    }

    #[test]
    fn test_determinant_sign() {
        assert!(Transform::REFLECT_X.is_reflected());
        assert!(Transform::REFLECT_Y.is_reflected());
        assert!(Transform::REFLECT_XY.is_reflected());
        assert!(!Transform::rotation(1.234).is_reflected());
        assert!(!Transform::IDENTITY.is_reflected());
    }

    #[test]
    fn test_compose_order() {
        // a.compose(b) applies a first, then b
        let a = Transform::rotation(FRAC_PI_2);
        let b = Transform::translation(10.0, 0.0);
        let p = Vec2::new(1.0, 0.0);
        assert_vec2_near(a.compose(b).apply(p), Vec2::new(10.0, 1.0));
        assert_vec2_near(b.compose(a).apply(p), Vec2::new(0.0, 11.0));
    }

    #[test]
    fn test_linear_and_translate_parts() {
        let t = Transform::rotation(PI / 3.0).compose(Transform::translation(5.0, 6.0));
        let recomposed = t.linear_part().compose(t.translate_part());
        assert_transform_near(recomposed, t);
        assert_eq!(t.linear_part().apply(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_inverse_of_translation() {
        let t = Transform::translation(12.5, -3.0);
        assert_transform_near(t.inverse().compose(t), Transform::IDENTITY);
        assert_transform_near(t.compose(t.inverse()), Transform::IDENTITY);
    }

    #[test]
    fn test_inverse_of_rotation() {
        let r = Transform::rotation(0.7);
        assert_transform_near(r.inverse().compose(r), Transform::IDENTITY);
    }

    #[test]
    fn test_conjugate_by_identity() {
        let t = Transform::rotation(0.3).compose(Transform::translation(4.0, -2.0));
        assert_transform_near(t.conjugate(Transform::IDENTITY), t);
    }

    #[test]
    fn test_conjugate_recentres_reflection() {
        // Reflecting across x as seen from a frame centered at (250, 250)
        // maps (x, y) to (x, 500 - y).
        let r = Transform::REFLECT_X.conjugate(Transform::translation(250.0, 250.0));
        assert_vec2_near(r.apply(Vec2::new(100.0, 30.0)), Vec2::new(100.0, 470.0));
        assert_vec2_near(r.apply(Vec2::new(250.0, 250.0)), Vec2::new(250.0, 250.0));
    }

    #[test]
    fn test_display_matrix_layout() {
        let shown = Transform::IDENTITY.to_string();
        assert_eq!(shown, "[1 0 0]\n[0 1 0]\n[0 0 1]");
    }

    fn transform_strategy() -> impl Strategy<Value = Transform> {
        let coeff = -10.0f32..10.0;
        (
            coeff.clone(),
            coeff.clone(),
            coeff.clone(),
            coeff.clone(),
            coeff.clone(),
            coeff,
        )
            .prop_map(|(a, b, c, d, e, f)| Transform::new(a, b, c, d, e, f))
    }

    proptest! {
        #[test]
        fn prop_identity_applies_to_any_point(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            let p = Vec2::new(x, y);
            prop_assert_eq!(Transform::IDENTITY.apply(p), p);
        }

        #[test]
        fn prop_compose_order_contract(
            a in transform_strategy(),
            b in transform_strategy(),
            x in -10.0f32..10.0,
            y in -10.0f32..10.0,
        ) {
            let p = Vec2::new(x, y);
            let composed = a.compose(b).apply(p);
            let sequenced = b.apply(a.apply(p));
            prop_assert!((composed - sequenced).length() < 5e-2);
        }

        #[test]
        fn prop_translation_inverse_cancels(dx in -500.0f32..500.0, dy in -500.0f32..500.0) {
            let t = Transform::translation(dx, dy);
            let round = t.inverse().compose(t);
            prop_assert!((round.c).abs() < 1e-4);
            prop_assert!((round.f).abs() < 1e-4);
            prop_assert!((round.a - 1.0).abs() < 1e-6);
            prop_assert!((round.e - 1.0).abs() < 1e-6);
        }

        #[test]
        fn prop_rotation_never_reflects(angle in -10.0f32..10.0) {
            prop_assert!(!Transform::rotation(angle).is_reflected());
            prop_assert!((Transform::rotation(angle).determinant() - 1.0).abs() < 1e-5);
        }

        #[test]
        fn prop_conjugate_by_identity_is_noop(t in transform_strategy()) {
            let conj = t.conjugate(Transform::IDENTITY);
            prop_assert!((conj.a - t.a).abs() < 1e-5);
            prop_assert!((conj.b - t.b).abs() < 1e-5);
            prop_assert!((conj.c - t.c).abs() < 1e-5);
            prop_assert!((conj.d - t.d).abs() < 1e-5);
            prop_assert!((conj.e - t.e).abs() < 1e-5);
            prop_assert!((conj.f - t.f).abs() < 1e-5);
        }
    }
}
