use std::ops::{Add, Mul, Neg, Sub};

use derive_more::Display;
use serde::{Deserialize, Serialize};

// s is implied (-q-r); order walks counter-clockwise starting east in a pointy layout
pub const DIRECTIONS: [Axial; 6] = [
        Axial { q: 1, r: 0 },  // east
        Axial { q: 1, r: -1 }, // north-east
        Axial { q: 0, r: -1 }, // north-west
        Axial { q: -1, r: 0 }, // west
        Axial { q: -1, r: 1 }, // south-west
        Axial { q: 0, r: 1 },  // south-east
];

/// A hex cell addressed by axial coordinates.
#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[display("({q}, {r})")]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    pub const ORIGIN: Axial = Axial { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn s(&self) -> i32 { -self.q - self.r }

    pub fn distance(&self, other: &Axial) -> u32 {
        (self.q - other.q).unsigned_abs()
            .max((self.r - other.r).unsigned_abs())
            .max((self.s() - other.s()).unsigned_abs())
    }

    pub fn neighbors(&self) -> [Axial; 6] {
        DIRECTIONS.map(|dir| *self + dir)
    }

    /// Cells at exactly `radius` steps, walking the ring counter-clockwise from the south-west corner.
    pub fn ring(&self, radius: u32) -> Vec<Axial> {
        if radius == 0 { return vec![*self]; }
        let mut ret = Vec::with_capacity(6 * radius as usize);
        let mut it = *self + DIRECTIONS[4] * radius as i32;
        for dir in DIRECTIONS {
            for _ in 0..radius {
                ret.push(it);
                it = it + dir;
            }
        }
        ret
    }

    /// Every cell within `radius` steps, including `self`.
    pub fn range(&self, radius: u32) -> Vec<Axial> {
        let n = radius as i32;
        let mut ret = Vec::with_capacity(1 + 3 * (radius * (radius + 1)) as usize);
        for q in -n..=n {
            for r in (-n).max(-q - n)..=n.min(-q + n) {
                ret.push(*self + Axial { q, r });
            }
        }
        ret
    }
}

impl Mul<i32> for Axial {
    type Output = Axial;
    fn mul(self, rhs: i32) -> Self::Output {
        Axial { q: self.q * rhs, r: self.r * rhs }
    }
}

impl Add<Axial> for Axial {
    type Output = Axial;
    fn add(self, rhs: Axial) -> Self::Output {
        Axial { q: self.q + rhs.q, r: self.r + rhs.r }
    }
}

impl Sub<Axial> for Axial {
    type Output = Axial;
    fn sub(self, rhs: Axial) -> Self::Output {
        Axial { q: self.q - rhs.q, r: self.r - rhs.r }
    }
}

impl Neg for Axial {
    type Output = Axial;
    fn neg(self) -> Self::Output {
        Axial { q: -self.q, r: -self.r }
    }
}

/// Rounds fractional axial coordinates to the containing cell.
pub fn round(q0: f64, r0: f64) -> Axial {
    let s0 = -q0-r0;
    let mut q = q0.round();
    let mut r = r0.round();
    let s = s0.round();

    let q_diff = (q - q0).abs();
    let r_diff = (r - r0).abs();
    let s_diff = (s - s0).abs();

    if q_diff > r_diff && q_diff > s_diff {
        q = -r-s;
    } else if r_diff > s_diff {
        r = -q-s;
    }

    Axial { q: q as i32, r: r as i32 }
}
