use crate::all::*;

// Below this |cos(theta)| the X and Z rotation axes are treated as aligned.
const GIMBAL_LOCK_THRESHOLD: f64 = 1e-9;

// Angles are in radians: `phi` about X, `theta` about Y and `psi` about Z.
// The rotations are applied in that order, that is R = Rz(psi) * Ry(theta) * Rx(phi).
pub fn euler_angles_to_matrix(phi: f64, theta: f64, psi: f64) -> Matrix3d {
  let (s1, c1) = phi.sin_cos();
  let (s2, c2) = theta.sin_cos();
  let (s3, c3) = psi.sin_cos();
  Matrix3d::new(
    c2 * c3, c3 * s1 * s2 - c1 * s3, s1 * s3 + c1 * c3 * s2,
    c2 * s3, c1 * c3 + s1 * s2 * s3, c1 * s2 * s3 - c3 * s1,
    -s2, c2 * s1, c1 * c2,
  )
}

// Inverse of `euler_angles_to_matrix()` with theta in [-pi/2, pi/2].
// At gimbal lock only the combination of phi and psi is observable, and phi is set to zero.
#[allow(non_snake_case)]
pub fn matrix_to_euler_angles(R: &Matrix3d) -> Vector3d {
  let theta = (-R[(2, 0)]).clamp(-1., 1.).asin();
  if theta.cos().abs() < GIMBAL_LOCK_THRESHOLD {
    let psi = (-R[(0, 1)]).atan2(R[(1, 1)]);
    return Vector3d::new(0., theta, psi);
  }
  let phi = R[(2, 1)].atan2(R[(2, 2)]);
  let psi = R[(1, 0)].atan2(R[(0, 0)]);
  Vector3d::new(phi, theta, psi)
}

// Orthonormal with determinant +1, up to `tolerance`.
#[allow(non_snake_case)]
pub fn is_rotation(R: &Matrix3d, tolerance: f64) -> bool {
  let orthonormality_error = (R.transpose() * R - Matrix3d::identity()).norm();
  orthonormality_error <= tolerance && (R.determinant() - 1.).abs() <= tolerance
}

#[allow(non_snake_case)]
pub fn transform_3d(T: &Matrix4d, x: &Vector3d) -> Vector3d {
  T.fixed_slice::<3, 3>(0, 0) * x + T.fixed_slice::<3, 1>(0, 3)
}
