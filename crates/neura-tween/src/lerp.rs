use neura_core::Vec2;

/// Interpolation contract for tweenable values.
pub trait Lerp: Copy {
    /// Interpolate from `a` to `b` with factor `t` in `[0, 1]`.
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f64 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * f64::from(t)
    }
}

impl Lerp for Vec2 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        Vec2::new(f32::lerp(a.x, b.x, t), f32::lerp(a.y, b.y, t))
    }
}
