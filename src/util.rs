use crate::all::*;

pub fn format_log(
  buf: &mut env_logger::fmt::Formatter,
  record: &log::Record,
) -> std::io::Result<()> {
  use std::io::Write;
  let mut style = buf.style();
  use env_logger::fmt::Color::*;
  use log::Level::*;
  style.set_color(match record.level() {
    Error => Red,
    Warn => Rgb(200, 200, 200),
    Info => Green,
    Debug => Magenta,
    Trace => Blue,
  });

  let s = format!("{:30}{}",
    format!("{}:{}",
      record.file().unwrap_or("?"),
      record.line().unwrap_or(0),
    ),
    record.args()
  );
  writeln!(buf, "{}", style.value(s))
}

// Parses "x,y,z" as used by the command line flags.
pub fn parse_vector3(s: &str) -> Result<Vector3d> {
  let v = s.split(',')
    .map(|x| x.trim().parse::<f64>()
      .context(format!("Failed to parse `{}` as a number.", x.trim())))
    .collect::<Result<Vec<_>>>()?;
  if v.len() != 3 {
    bail!("Expected three comma separated values, got {} in `{}`.", v.len(), s);
  }
  Ok(Vector3d::new(v[0], v[1], v[2]))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_vector3() {
    assert_eq!(parse_vector3("1,-2.5, 3").unwrap(), Vector3d::new(1., -2.5, 3.));
    assert!(parse_vector3("1,2").is_err());
    assert!(parse_vector3("1,2,3,4").is_err());
    assert!(parse_vector3("1,x,3").is_err());
  }
}
