use crate::numeric::{atan2, hypot, sin_cos};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A point in the complex plane (`x` real, `y` imaginary).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point<T> {
    x: T,
    y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &T {
        &self.x
    }

    pub fn y(&self) -> &T {
        &self.y
    }

    pub fn add(&self, other: &Self) -> Self
    where
        T: Add<Output = T> + Clone,
    {
        Self {
            x: self.x.clone() + other.x.clone(),
            y: self.y.clone() + other.y.clone(),
        }
    }
}

impl Point<f64> {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// `rho·(cos θ, sin θ)`.
    pub fn from_polar(rho: f64, theta: f64) -> Self {
        let (sin, cos) = sin_cos(theta);
        Self {
            x: rho * cos,
            y: rho * sin,
        }
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        hypot(self.x, self.y)
    }

    /// Quadrant-correct angle, `0` at the origin.
    pub fn arg(&self) -> f64 {
        atan2(self.y, self.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A complex value in polar form, used for solver input and output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    pub rho: f64,
    pub theta: f64,
}

impl PolarPoint {
    pub fn new(rho: f64, theta: f64) -> Self {
        Self { rho, theta }
    }

    pub fn to_cartesian(&self) -> Point<f64> {
        Point::from_polar(self.rho, self.theta)
    }
}
