use crate::all::*;

lazy_static! {
  pub static ref PARAMETER_SET: Mutex<ParameterSet> = Mutex::new(ParameterSet::default());
}

pub const DEFAULT_ROTATION_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Debug)]
#[derive(clap::Parser)]
pub struct ParameterSet {
  // Accepted deviation from orthonormality in checked rotation setters.
  #[clap(long, default_value_t = DEFAULT_ROTATION_TOLERANCE)]
  pub rotation_tolerance: f64,

  // Log pose mutations.
  #[clap(long)]
  pub verbose: bool,
}

impl Default for ParameterSet {
  fn default() -> ParameterSet {
    ParameterSet {
      rotation_tolerance: DEFAULT_ROTATION_TOLERANCE,
      verbose: false,
    }
  }
}

pub fn rotation_tolerance() -> Result<f64> {
  let p = PARAMETER_SET.lock()
    .map_err(|_| anyhow!("Parameter set lock is poisoned."))?;
  Ok(p.rotation_tolerance)
}
