use std::ops::Range;
use std::f32::consts::PI;

use crate::vector::Vec3;
use crate::quaternion::Quaternion;

/// Constant for converting u64 numbers to f64s in [0,1).
/// It is the maximum value of mantissa plus one.
pub const F64_MANTISSA: f64 = (1u64 << f64::MANTISSA_DIGITS) as f64; // is 2^53


pub struct Randf32 {
    state: u64,
}
impl Randf32 {
    pub fn new() -> Self {
        Self {
            state: 555555555,
        }
    }
    pub fn seed(seed: u64) -> Self {
        Self {
            state: seed,
        }
    }
    pub fn next(&mut self) -> f32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        ((self.state >> 11) as f64 / F64_MANTISSA) as f32
    }
    pub fn next_in(&mut self, range: Range<f32>) -> f32 {
        (range.end - range.start) * self.next() + range.start
    }
    /// Uniform direction, by rejection sampling the unit ball.
    pub fn unit_vec3(&mut self) -> Vec3 {
        loop {
            let vec = Vec3::new(
                self.next_in(-1.0..1.0),
                self.next_in(-1.0..1.0),
                self.next_in(-1.0..1.0),
            );
            if vec.len_sq() <= 1.0 {
                return vec.normalized();
            }
        }
    }
    /// Rotation about a uniform random axis by an angle in (-PI, PI).
    pub fn rotation(&mut self) -> Quaternion {
        Quaternion::from_axis_angle(self.unit_vec3(), self.next_in(-PI..PI))
    }
}
impl Default for Randf32 {
    fn default() -> Self {
        Self::new()
    }
}


#[test]
fn seeded_sequences_repeat() {
    let mut a = Randf32::seed(12345);
    let mut b = Randf32::seed(12345);

    for _ in 0..10 {
        assert!(a.next() == b.next());
    }
}

#[test]
fn next_stays_in_unit_interval() {
    let mut rand = Randf32::new();

    for _ in 0..1000 {
        let x = rand.next();
        assert!((0.0..1.0).contains(&x));
    }
}

#[test]
fn rotations_are_normalized() {
    let mut rand = Randf32::seed(99);

    for _ in 0..100 {
        assert!(rand.rotation().is_normalized());
    }
}
