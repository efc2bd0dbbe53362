// External libraries
use cgmath::{Matrix3, Matrix4, Point2, Quaternion, Vector2, Vector3, Vector4};

/// Tolerance allowing for floating point rounding during computations.
pub const COMPARISON_TOLERANCE: f32 = 1e-5;

/// Comparison with a small absolute tolerance per component.
pub trait NearlyEqual {
    fn nearly_equal(&self, other: &Self) -> bool;
}

impl NearlyEqual for f32 {
    fn nearly_equal(&self, other: &Self) -> bool {
        (self - other).abs() < COMPARISON_TOLERANCE
    }
}

impl NearlyEqual for Vector2<f32> {
    fn nearly_equal(&self, other: &Self) -> bool {
        self.x.nearly_equal(&other.x) && self.y.nearly_equal(&other.y)
    }
}

impl NearlyEqual for Vector3<f32> {
    fn nearly_equal(&self, other: &Self) -> bool {
        self.x.nearly_equal(&other.x)
            && self.y.nearly_equal(&other.y)
            && self.z.nearly_equal(&other.z)
    }
}

impl NearlyEqual for Vector4<f32> {
    fn nearly_equal(&self, other: &Self) -> bool {
        self.x.nearly_equal(&other.x)
            && self.y.nearly_equal(&other.y)
            && self.z.nearly_equal(&other.z)
            && self.w.nearly_equal(&other.w)
    }
}

impl NearlyEqual for Point2<f32> {
    fn nearly_equal(&self, other: &Self) -> bool {
        self.x.nearly_equal(&other.x) && self.y.nearly_equal(&other.y)
    }
}

impl NearlyEqual for Matrix3<f32> {
    fn nearly_equal(&self, other: &Self) -> bool {
        self.x.nearly_equal(&other.x)
            && self.y.nearly_equal(&other.y)
            && self.z.nearly_equal(&other.z)
    }
}

impl NearlyEqual for Matrix4<f32> {
    fn nearly_equal(&self, other: &Self) -> bool {
        self.x.nearly_equal(&other.x)
            && self.y.nearly_equal(&other.y)
            && self.z.nearly_equal(&other.z)
            && self.w.nearly_equal(&other.w)
    }
}

impl NearlyEqual for Quaternion<f32> {
    fn nearly_equal(&self, other: &Self) -> bool {
        self.s.nearly_equal(&other.s) && self.v.nearly_equal(&other.v)
    }
}

/// Rotation comparison: `q` and `-q` represent the same rotation.
pub fn nearly_equal_rotation(a: &Quaternion<f32>, b: &Quaternion<f32>) -> bool {
    a.nearly_equal(b) || a.nearly_equal(&-*b)
}
