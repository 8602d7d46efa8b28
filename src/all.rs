// NOTE This kind of import-all file isn't a common Rust idiom.

pub use crate::{
  camera_pose::*,
  math::*,
  parameters::*,
  transform::*,
  types::*,
  util::*,
};

pub use {
  std::sync::Mutex,
  log::{debug, info, warn, LevelFilter},
  anyhow::{anyhow, bail, Context as AnyhowContext, Result},
};
