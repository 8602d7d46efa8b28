#[macro_use] extern crate lazy_static;

mod all;
pub mod camera_pose;
pub mod math;
pub mod parameters;
pub mod transform;
pub mod types;
pub mod util;

pub use crate::{
  camera_pose::CameraPose,
  math::{euler_angles_to_matrix, is_rotation, matrix_to_euler_angles},
  parameters::{ParameterSet, PARAMETER_SET},
  transform::Transform3d,
  types::*,
};
