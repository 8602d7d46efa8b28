// Eigen-like aliases.
pub type Vector3d = nalgebra::Vector3::<f64>;
pub type Matrix3d = nalgebra::Matrix3::<f64>;
pub type Matrix4d = nalgebra::Matrix4::<f64>;
pub type Matrix34d = nalgebra::Matrix3x4::<f64>;
