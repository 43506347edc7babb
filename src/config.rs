use crate::error::{VersorError, VersorResult};
use crate::vector::Vec3;


/// Parsing states.
enum Parse {
    None,
    Axis,
    Angle,
    Euler,
}

/// Rotation described on the command line.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Source {
    AxisAngle(Vec3, f32),
    Euler(f32, f32, f32),
}

/// User defined rotation input.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Config {
    pub source: Source,
}
impl Config {
    /// Create a new Config with the specified command line arguments.
    pub fn new(args: Vec<String>) -> VersorResult<Config> {
        let mut parser  = Parse::None;
        let mut axis    = Vec::new();
        let mut euler   = Vec::new();
        let mut angle   = None;
        let mut degrees = false;

        for arg in args.into_iter() {
            match arg.as_str() {
                "-axis" => {
                    parser = Parse::Axis;
                    continue;
                }
                "-angle" => {
                    parser = Parse::Angle;
                    continue;
                }
                "-euler" => {
                    parser = Parse::Euler;
                    continue;
                }
                "-deg" => {
                    degrees = true;
                    parser = Parse::None;
                    continue;
                }
                _ => {},
            }
            let num = match arg.parse::<f32>() {
                Ok(num) => num,
                Err(_) => return Err(VersorError::InvalidNumber(arg)),
            };
            match parser {
                Parse::Axis if axis.len() < 3 => {
                    axis.push(num);
                }
                Parse::Euler if euler.len() < 3 => {
                    euler.push(num);
                }
                Parse::Angle => {
                    angle = Some(num);
                    parser = Parse::None;
                }
                _ => return Err(VersorError::UnexpectedValue(arg)),
            }
        }

        let to_rad = |v: f32| if degrees { v.to_radians() } else { v };

        let source = if !euler.is_empty() {
            if euler.len() != 3 {
                return Err(VersorError::MissingValue("-euler (three angles)"));
            }
            Source::Euler(to_rad(euler[0]), to_rad(euler[1]), to_rad(euler[2]))
        }
        else if !axis.is_empty() {
            if axis.len() != 3 {
                return Err(VersorError::MissingValue("-axis (three components)"));
            }
            match angle {
                Some(angle) => {
                    Source::AxisAngle(Vec3::new(axis[0], axis[1], axis[2]), to_rad(angle))
                }
                None => return Err(VersorError::MissingValue("-angle")),
            }
        }
        else {
            Source::Euler(0.0, 0.0, 0.0)
        };

        Ok(Config { source })
    }
}


#[cfg(test)]
fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn parse_axis_angle() {
    let cfg = Config::new(args(&["-axis", "0", "0", "1", "-angle", "1.5"])).unwrap();
    assert!(cfg.source == Source::AxisAngle(Vec3::new(0.0, 0.0, 1.0), 1.5));
}

#[test]
fn parse_euler_degrees() {
    let cfg = Config::new(args(&["-deg", "-euler", "90", "0", "0"])).unwrap();
    match cfg.source {
        Source::Euler(heading, attitude, bank) => {
            assert!((heading - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
            assert!(attitude == 0.0 && bank == 0.0);
        }
        _ => panic!("expected an euler source"),
    }
}

#[test]
fn no_args_defaults_to_identity() {
    let cfg = Config::new(Vec::new()).unwrap();
    assert!(cfg.source == Source::Euler(0.0, 0.0, 0.0));
}

#[test]
fn missing_angle_is_rejected() {
    assert!(Config::new(args(&["-axis", "0", "1", "0"])).is_err());
}

#[test]
fn incomplete_axis_is_rejected() {
    assert!(Config::new(args(&["-axis", "0", "1", "-angle", "2.0"])).is_err());
}

#[test]
fn bad_number_is_rejected() {
    assert!(Config::new(args(&["-euler", "up", "0", "0"])).is_err());
}

#[test]
fn stray_value_is_rejected() {
    assert!(Config::new(args(&["1.0"])).is_err());
}
