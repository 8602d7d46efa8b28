use clap::Parser;
use extrinsics::{
  euler_angles_to_matrix,
  matrix_to_euler_angles,
  util::{format_log, parse_vector3},
  CameraPose,
  ParameterSet,
  PARAMETER_SET,
};
use anyhow::{anyhow, Context, Result};
use log::{info, LevelFilter};

#[derive(Parser)]
struct Args {
  // Camera center in world coordinates as "x,y,z".
  #[clap(long, default_value = "0,0,0", allow_hyphen_values = true)]
  center: String,
  // Euler angles "phi,theta,psi" in radians about the X, Y and Z axes.
  #[clap(long, default_value = "0,0,0", allow_hyphen_values = true)]
  euler: String,
  // Incremental rotation in world axes applied after the initial pose.
  #[clap(long, allow_hyphen_values = true)]
  rotate: Option<String>,
  // Displacement of the camera center in world coordinates.
  #[clap(long, allow_hyphen_values = true)]
  translate: Option<String>,
  // World point to express in camera coordinates.
  #[clap(long, allow_hyphen_values = true)]
  point: Option<String>,
  #[clap(flatten)]
  parameters: ParameterSet,
}

fn handle_error(err: &anyhow::Error) {
  for (i, e) in err.chain().enumerate() {
    println!("  {}: {}", i + 1, e);
  }
}

fn main() {
  if let Err(err) = run() {
    handle_error(&err);
    std::process::exit(1);
  }
}

fn run() -> Result<()> {
  let args = Args::parse();

  env_logger::Builder::new()
    .filter_level(if args.parameters.verbose { LevelFilter::Debug } else { LevelFilter::Info })
    .format(format_log)
    .init();

  {
    let mut p = PARAMETER_SET.lock()
      .map_err(|_| anyhow!("Parameter set lock is poisoned."))?;
    *p = args.parameters.clone();
  }

  let center = parse_vector3(&args.center).context("Invalid --center.")?;
  let euler = parse_vector3(&args.euler).context("Invalid --euler.")?;

  let mut pose = CameraPose::new();
  pose.try_set_rotation(euler_angles_to_matrix(euler[0], euler[1], euler[2]))?;
  pose.set_translation(center);

  if let Some(rotate) = &args.rotate {
    let d = parse_vector3(rotate).context("Invalid --rotate.")?;
    pose.try_rotate(euler_angles_to_matrix(d[0], d[1], d[2]))?;
  }
  if let Some(translate) = &args.translate {
    pose.translate(parse_vector3(translate).context("Invalid --translate.")?);
  }

  info!("Camera center: {}", pose.translation().transpose());
  info!("Euler angles: {}", matrix_to_euler_angles(&pose.rotation()).transpose());
  info!("Rt: {}", pose.rt());

  if let Some(point) = &args.point {
    let w = parse_vector3(point).context("Invalid --point.")?;
    let c = pose.world_to_camera_point(w[0], w[1], w[2]);
    info!("Camera coordinates: {}", c.transpose());
    let back = pose.camera_to_world_point(c[0], c[1], c[2]);
    info!("Back to world: {}", back.transpose());
  }
  Ok(())
}
