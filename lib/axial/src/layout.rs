//! # Layout: Axial ↔ Pixel Conversion
//!
//! A `Layout` pairs a hex orientation (pointy-top or flat-top) with a per-axis
//! cell size and a pixel origin. Sizes are per axis so isometric boards can
//! squash the vertical axis without a separate transform.
//!
//! ## Example
//!
//! ```rust
//! use axial::{Axial, Convert, Layout, Orientation};
//! use glam::DVec2;
//!
//! let layout = Layout::new(Orientation::POINTY, 10.);
//! let cell = Axial::new(2, -1);
//!
//! let px: DVec2 = layout.convert(cell);
//! let back: Axial = layout.convert(px);
//! assert_eq!(cell, back);
//! ```

use std::f64::consts::PI;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::axial::{self, Axial};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Trait for bidirectional coordinate conversion
pub trait Convert<T,U> {
    /// Convert from type T to type U
    fn convert(&self, it: T) -> U;
}

/// Affine basis for one hex orientation
///
/// `forward` maps axial to unit pixel space, `inverse` maps it back, and
/// `start_angle` (in sixths of a turn) places corner 0.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Orientation {
    pub forward: [f64; 4],
    pub inverse: [f64; 4],
    pub start_angle: f64,
}

impl Orientation {
    pub const POINTY: Orientation = Orientation {
        forward: [SQRT_3, SQRT_3/2., 0., 3./2.],
        inverse: [SQRT_3/3., -1./3., 0., 2./3.],
        start_angle: 0.5,
    };

    pub const FLAT: Orientation = Orientation {
        forward: [3./2., 0., SQRT_3/2., SQRT_3],
        inverse: [2./3., 0., -1./3., SQRT_3/3.],
        start_angle: 0.,
    };
}

/// Placement of a hex grid in pixel space
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Layout {
    pub orientation: Orientation,
    pub size: DVec2,
    pub origin: DVec2,
}

impl Layout {
    pub fn new(orientation: Orientation, size: f64) -> Self {
        Self { orientation, size: DVec2::splat(size), origin: DVec2::ZERO }
    }

    pub fn with_scale(orientation: Orientation, size: DVec2) -> Self {
        Self { orientation, size, origin: DVec2::ZERO }
    }

    pub fn with_origin(self, origin: DVec2) -> Self {
        Self { origin, ..self }
    }

    /// Analytic corner positions, counter-clockwise from `start_angle`.
    pub fn corners(&self, cell: Axial) -> [DVec2; 6] {
        let center: DVec2 = self.convert(cell);
        std::array::from_fn(|i| {
            let angle = 2. * PI * (self.orientation.start_angle + i as f64) / 6.;
            center + DVec2::new(self.size.x * angle.cos(), self.size.y * angle.sin())
        })
    }
}

impl Convert<DVec2,Axial> for Layout {
    fn convert(&self, other: DVec2) -> Axial {
        let m = self.orientation.inverse;
        let pt = (other - self.origin) / self.size;
        let q = m[0] * pt.x + m[1] * pt.y;
        let r = m[2] * pt.x + m[3] * pt.y;
        axial::round(q, r)
    }
}

impl Convert<Axial,DVec2> for Layout {
    fn convert(&self, other: Axial) -> DVec2 {
        let m = self.orientation.forward;
        let x = (m[0] * other.q as f64 + m[1] * other.r as f64) * self.size.x;
        let y = (m[2] * other.q as f64 + m[3] * other.r as f64) * self.size.y;
        DVec2 { x, y } + self.origin
    }
}
