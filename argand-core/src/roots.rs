//! Integer powers and n-th roots in polar form.

use crate::config::LIMITS;
use crate::coordinates::ComplexForm;
use crate::error::InputError;
use crate::numeric::{clamp, parse_number, pow};
use crate::points::PolarPoint;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootOperation {
    /// `z^n`, a single principal value.
    #[default]
    Power,
    /// All `n` values `w` with `w^n = z`.
    Root,
}

impl FromStr for RootOperation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pow" | "power" => Ok(RootOperation::Power),
            "root" | "sqrt" => Ok(RootOperation::Root),
            other => Err(InputError::UnknownOperation(other.to_string())),
        }
    }
}

/// Power/root order, always within `[LIMITS.min_order, LIMITS.max_order]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Order(u32);

impl Order {
    /// Round and clamp; never rejects. NaN becomes the minimum order.
    pub fn from_raw(raw: f64) -> Self {
        let min = LIMITS.min_order as f64;
        let max = LIMITS.max_order as f64;
        let rounded = if raw.is_nan() { min } else { raw.round() };
        Order(clamp(rounded, min, max) as u32)
    }

    /// Empty text is order 1.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        Ok(parse_number(text)?.map_or(Order(LIMITS.min_order), Order::from_raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Order {
    fn default() -> Self {
        Order(2)
    }
}

/// Result points of one solve. Replaced wholesale, never mutated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RootResult {
    points: Vec<PolarPoint>,
}

impl RootResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PolarPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PolarPoint> {
        self.points.iter()
    }
}

/// De Moivre for `Power`; the `n` equally spaced roots for `Root`, ordered by
/// increasing `k`.
pub fn solve(z: PolarPoint, operation: RootOperation, order: Order) -> RootResult {
    let n = order.get();
    let points = match operation {
        RootOperation::Power => vec![PolarPoint::new(pow(z.rho, n as f64), z.theta * n as f64)],
        RootOperation::Root => {
            let rho = pow(z.rho, 1.0 / n as f64);
            (0..n)
                .map(|k| PolarPoint::new(rho, (z.theta + TAU * k as f64) / n as f64))
                .collect()
        }
    };
    RootResult { points }
}

/// Plot extent for the primary vector plus its results, never below 1.
pub fn scale_extent(primary_rho: f64, result: &RootResult) -> f64 {
    result
        .iter()
        .map(|p| p.rho)
        .fold(primary_rho.max(1.0), f64::max)
}

/// The "apply operation" controls: checkbox, operation selector, order box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationPanel {
    pub enabled: bool,
    pub operation: RootOperation,
    pub order: Order,
}

impl OperationPanel {
    /// Update the order from text; invalid text keeps the current order.
    pub fn set_order_text(&mut self, text: &str) -> bool {
        match Order::parse(text) {
            Ok(order) => {
                self.order = order;
                true
            }
            Err(err) => {
                log::debug!("Ignoring order input: {}", err);
                false
            }
        }
    }

    /// Empty when disabled; otherwise solved against the form's polar side.
    pub fn results(&self, form: &ComplexForm) -> RootResult {
        if !self.enabled {
            return RootResult::empty();
        }
        solve(form.polar().resolved(), self.operation, self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Field;
    use std::f64::consts::PI;

    #[test]
    fn power_of_one_is_identity() {
        let z = PolarPoint::new(2.5, 0.7);
        let result = solve(z, RootOperation::Power, Order::from_raw(1.0));
        assert_eq!(result.points(), &[z]);
    }

    #[test]
    fn power_applies_de_moivre() {
        let result = solve(PolarPoint::new(2.0, 0.5), RootOperation::Power, Order::from_raw(3.0));
        assert_eq!(result.len(), 1);
        assert!((result.points()[0].rho - 8.0).abs() < 1e-12);
        assert!((result.points()[0].theta - 1.5).abs() < 1e-12);
    }

    #[test]
    fn cube_roots_of_eight() {
        let result = solve(PolarPoint::new(8.0, 0.0), RootOperation::Root, Order::from_raw(3.0));
        assert_eq!(result.len(), 3);
        for (k, p) in result.iter().enumerate() {
            assert!((p.rho - 2.0).abs() < 1e-12);
            assert!((p.theta - TAU * k as f64 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn order_is_rounded_and_clamped() {
        assert_eq!(Order::from_raw(2.4).get(), 2);
        assert_eq!(Order::from_raw(2.6).get(), 3);
        assert_eq!(Order::from_raw(0.0).get(), 1);
        assert_eq!(Order::from_raw(-5.0).get(), 1);
        assert_eq!(Order::from_raw(99.0).get(), 20);
        assert_eq!(Order::from_raw(f64::NAN).get(), 1);
    }

    #[test]
    fn order_text_parsing() {
        assert_eq!(Order::parse("").unwrap().get(), 1);
        assert_eq!(Order::parse("4").unwrap().get(), 4);
        assert!(Order::parse("four").is_err());
    }

    #[test]
    fn operation_names() {
        assert_eq!("pow".parse::<RootOperation>(), Ok(RootOperation::Power));
        assert_eq!("sqrt".parse::<RootOperation>(), Ok(RootOperation::Root));
        assert_eq!("root".parse::<RootOperation>(), Ok(RootOperation::Root));
        assert!("log".parse::<RootOperation>().is_err());
    }

    #[test]
    fn disabled_panel_yields_empty_result() {
        let mut form = ComplexForm::new();
        form.apply(Field::Rho, "4");
        let panel = OperationPanel::default();
        assert!(panel.results(&form).is_empty());
    }

    #[test]
    fn enabled_panel_solves_against_polar_side() {
        let mut form = ComplexForm::new();
        form.apply(Field::Re, "-4");
        let panel = OperationPanel {
            enabled: true,
            operation: RootOperation::Root,
            order: Order::from_raw(2.0),
        };
        let result = panel.results(&form);
        assert_eq!(result.len(), 2);
        assert!((result.points()[0].rho - 2.0).abs() < 1e-12);
        assert!((result.points()[0].theta - PI / 2.0).abs() < 1e-12);
        assert!((result.points()[1].theta - 3.0 * PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_form_solves_at_origin() {
        let panel = OperationPanel {
            enabled: true,
            operation: RootOperation::Power,
            order: Order::from_raw(5.0),
        };
        let result = panel.results(&ComplexForm::new());
        assert_eq!(result.points(), &[PolarPoint::new(0.0, 0.0)]);
    }

    #[test]
    fn invalid_order_text_keeps_previous_order() {
        let mut panel = OperationPanel::default();
        assert!(panel.set_order_text("7"));
        assert!(!panel.set_order_text("x"));
        assert_eq!(panel.order.get(), 7);
    }

    #[test]
    fn scale_extent_never_below_one() {
        assert_eq!(scale_extent(0.2, &RootResult::empty()), 1.0);
        let result = solve(PolarPoint::new(3.0, 0.0), RootOperation::Power, Order::from_raw(2.0));
        assert_eq!(scale_extent(3.0, &result), 9.0);
    }
}
