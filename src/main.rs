use std::env;
use std::process;

use versor::config::{Config, Source};
use versor::matrix::Mat4x4;
use versor::quaternion::Quaternion;
use versor::vector::Vec3;

fn main() {
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<String>>();
    let config = match Config::new(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let quat = match config.source {
        Source::AxisAngle(axis, angle) => Quaternion::from_axis_angle(axis, angle),
        Source::Euler(heading, attitude, bank) => {
            Quaternion::from_euler_angle(heading, attitude, bank)
        }
    };

    log::info!("length squared: {}", quat.len_sq());
    if !quat.is_normalized() {
        log::warn!("rotation is not normalized");
    }

    println!("quaternion: {quat}");
    println!("euler (heading, attitude, bank): {}", quat.to_euler_angle());

    let mat: [[f32; 4]; 4] = Mat4x4::from(quat).into();
    println!("matrix columns:");
    for col in mat {
        println!("    {:>9.5} {:>9.5} {:>9.5} {:>9.5}", col[0], col[1], col[2], col[3]);
    }

    println!("rotated basis:");
    for basis in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] {
        let rotated = quat * Vec3::from(basis);
        println!("    ({}, {}, {}) -> ({}, {}, {})",
            basis[0], basis[1], basis[2],
            rotated.x, rotated.y, rotated.z,
        );
    }
}
