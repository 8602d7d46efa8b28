// Extrinsic parameters of a single camera following the OpenCV convention:
// a world point `p` is `R * p + t` in camera coordinates. The default camera
// frame coincides with the world frame.
//
// The stored translation `t` is expressed in camera coordinates. All the
// translation methods below instead work with the camera center `c`, the camera
// position in world coordinates. By H&Z (page 156) the extrinsics matrix is
//   [R -Rc]
//   [0  1 ]
// so that t = -Rc and c = -R't.

use crate::all::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraPose {
  world_to_camera: Transform3d,
}

#[allow(non_snake_case)]
impl CameraPose {
  pub fn new() -> CameraPose {
    CameraPose::default()
  }

  pub fn from_world_to_camera(world_to_camera: Transform3d) -> CameraPose {
    CameraPose { world_to_camera }
  }

  pub fn set_world_to_camera(&mut self, world_to_camera: Transform3d) {
    debug!("Replacing world-to-camera transform. {}", world_to_camera);
    self.world_to_camera = world_to_camera;
  }

  pub fn world_to_camera(&self) -> Transform3d {
    self.world_to_camera
  }

  pub fn camera_to_world(&self) -> Transform3d {
    self.world_to_camera.inverse()
  }

  // Keeps the camera center fixed. `R` is trusted to be a rotation.
  pub fn set_rotation(&mut self, R: Matrix3d) {
    let c = self.translation();
    self.world_to_camera.set_rotation(R);
    self.world_to_camera.set_translation(-R * c);
  }

  pub fn set_rotation_euler(&mut self, phi: f64, theta: f64, psi: f64) {
    self.set_rotation(euler_angles_to_matrix(phi, theta, psi));
  }

  // Like `set_rotation()`, but rejects matrices that are not rotations and leaves the pose unchanged.
  pub fn try_set_rotation(&mut self, R: Matrix3d) -> Result<()> {
    let tolerance = rotation_tolerance()?;
    if !is_rotation(&R, tolerance) {
      warn!("Rejected rotation with determinant {}.", R.determinant());
      bail!("Invalid rotation: matrix is not orthonormal with determinant +1 (tolerance {}).", tolerance);
    }
    self.set_rotation(R);
    debug!("Camera rotation set, center {}", self.translation().transpose());
    Ok(())
  }

  // The delta is in world axes: R_new = delta * R.
  pub fn rotate(&mut self, delta: Matrix3d) {
    let R = self.rotation();
    self.set_rotation(delta * R);
  }

  pub fn rotate_euler(&mut self, dphi: f64, dtheta: f64, dpsi: f64) {
    self.rotate(euler_angles_to_matrix(dphi, dtheta, dpsi));
  }

  pub fn try_rotate(&mut self, delta: Matrix3d) -> Result<()> {
    let R = self.rotation();
    self.try_set_rotation(delta * R)
      .context("Failed to apply incremental rotation.")
  }

  pub fn rotation(&self) -> Matrix3d {
    self.world_to_camera.rotation()
  }

  // Moves the camera center to `c`, keeping the orientation.
  pub fn set_translation(&mut self, c: Vector3d) {
    let R = self.rotation();
    self.world_to_camera.set_translation(-R * c);
  }

  pub fn set_translation_xyz(&mut self, x: f64, y: f64, z: f64) {
    self.set_translation(Vector3d::new(x, y, z));
  }

  // Moves the camera center by `delta` given in world coordinates.
  pub fn translate(&mut self, delta: Vector3d) {
    let c = self.translation() + delta;
    self.set_translation(c);
  }

  pub fn translate_xyz(&mut self, dx: f64, dy: f64, dz: f64) {
    self.translate(Vector3d::new(dx, dy, dz));
  }

  pub fn translate_x(&mut self, dx: f64) {
    self.translate(Vector3d::new(dx, 0., 0.));
  }

  pub fn translate_y(&mut self, dy: f64) {
    self.translate(Vector3d::new(0., dy, 0.));
  }

  pub fn translate_z(&mut self, dz: f64) {
    self.translate(Vector3d::new(0., 0., dz));
  }

  // The camera center in world coordinates, not the stored translation.
  pub fn translation(&self) -> Vector3d {
    let R = self.world_to_camera.rotation();
    let t = self.world_to_camera.translation();
    -R.transpose() * t
  }

  // The 3x4 extrinsics matrix [R | t] with the stored translation.
  pub fn rt(&self) -> Matrix34d {
    self.world_to_camera.dehomogenize()
  }

  pub fn world_to_camera_point(&self, wx: f64, wy: f64, wz: f64) -> Vector3d {
    self.world_to_camera_vector(&Vector3d::new(wx, wy, wz))
  }

  pub fn camera_to_world_point(&self, cx: f64, cy: f64, cz: f64) -> Vector3d {
    self.camera_to_world_vector(&Vector3d::new(cx, cy, cz))
  }

  pub fn world_to_camera_vector(&self, w: &Vector3d) -> Vector3d {
    self.world_to_camera.transform_point(w)
  }

  pub fn camera_to_world_vector(&self, c: &Vector3d) -> Vector3d {
    self.camera_to_world().transform_point(c)
  }
}
