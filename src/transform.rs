use crate::all::*;
use std::fmt;
use std::ops::{Mul, MulAssign, Sub};

// Precision used by `PartialEq`-like comparisons of transforms.
pub const DEFAULT_PRECISION: f64 = 1e-8;

// Rigid 3D transformation `x -> R * x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
  rotation: Matrix3d,
  translation: Vector3d,
}

impl Default for Transform3d {
  fn default() -> Transform3d {
    Transform3d::identity()
  }
}

impl Transform3d {
  pub fn identity() -> Transform3d {
    Transform3d {
      rotation: Matrix3d::identity(),
      translation: Vector3d::zeros(),
    }
  }

  pub fn new(rotation: Matrix3d, translation: Vector3d) -> Transform3d {
    Transform3d { rotation, translation }
  }

  // Reads the top 3x4 block of a homogeneous matrix. The bottom row is ignored.
  pub fn from_matrix(m: &Matrix4d) -> Transform3d {
    Transform3d {
      rotation: m.fixed_slice::<3, 3>(0, 0).into_owned(),
      translation: m.fixed_slice::<3, 1>(0, 3).into_owned(),
    }
  }

  pub fn rotation(&self) -> Matrix3d {
    self.rotation
  }

  pub fn translation(&self) -> Vector3d {
    self.translation
  }

  pub fn set_identity(&mut self) {
    *self = Transform3d::identity();
  }

  pub fn set_rotation(&mut self, rotation: Matrix3d) {
    self.rotation = rotation;
  }

  pub fn set_translation(&mut self, translation: Vector3d) {
    self.translation = translation;
  }

  pub fn to_matrix(&self) -> Matrix4d {
    let mut m = Matrix4d::identity();
    m.fixed_slice_mut::<3, 3>(0, 0).copy_from(&self.rotation);
    m.fixed_slice_mut::<3, 1>(0, 3).copy_from(&self.translation);
    m
  }

  // The 3x4 matrix [R | t].
  pub fn dehomogenize(&self) -> Matrix34d {
    let mut m = Matrix34d::zeros();
    m.fixed_slice_mut::<3, 3>(0, 0).copy_from(&self.rotation);
    m.fixed_slice_mut::<3, 1>(0, 3).copy_from(&self.translation);
    m
  }

  // Assumes the rotation is orthonormal.
  pub fn inverse(&self) -> Transform3d {
    let rotation_t = self.rotation.transpose();
    Transform3d {
      rotation: rotation_t,
      translation: -rotation_t * self.translation,
    }
  }

  pub fn transform_point(&self, p: &Vector3d) -> Vector3d {
    self.rotation * p + self.translation
  }

  // The transform `d` such that `self * d == other`.
  pub fn delta(&self, other: &Transform3d) -> Transform3d {
    let rotation_t = self.rotation.transpose();
    Transform3d {
      rotation: rotation_t * other.rotation,
      translation: rotation_t * (other.translation - self.translation),
    }
  }

  // Relative comparison of both components. Components with norm below one are compared
  // absolutely, so that a transform can be compared against one with zero translation.
  pub fn approx_eq(&self, other: &Transform3d, precision: f64) -> bool {
    let rotation_scale = self.rotation.norm().min(other.rotation.norm()).max(1.);
    let translation_scale = self.translation.norm().min(other.translation.norm()).max(1.);
    (self.rotation - other.rotation).norm() <= precision * rotation_scale
      && (self.translation - other.translation).norm() <= precision * translation_scale
  }
}

impl Mul<Transform3d> for Transform3d {
  type Output = Transform3d;

  fn mul(self, rhs: Transform3d) -> Transform3d {
    Transform3d {
      rotation: self.rotation * rhs.rotation,
      translation: self.rotation * rhs.translation + self.translation,
    }
  }
}

impl MulAssign<Transform3d> for Transform3d {
  fn mul_assign(&mut self, rhs: Transform3d) {
    *self = *self * rhs;
  }
}

impl Mul<Vector3d> for Transform3d {
  type Output = Vector3d;

  fn mul(self, rhs: Vector3d) -> Vector3d {
    self.transform_point(&rhs)
  }
}

impl Sub<Transform3d> for Transform3d {
  type Output = Transform3d;

  fn sub(self, rhs: Transform3d) -> Transform3d {
    self.delta(&rhs)
  }
}

impl fmt::Display for Transform3d {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Rotation: {}", self.rotation)?;
    write!(f, "Translation: {}", self.translation.transpose())
  }
}
