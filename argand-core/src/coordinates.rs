//! One complex value held in rectangular and polar form at the same time.
//!
//! Every edit goes through [`ComplexForm::apply`], which writes the edited
//! field and rebuilds the opposite side in the same call. Nothing is derived
//! lazily or reactively, so the two sides cannot chase each other.

use crate::config::LIMITS;
use crate::equation::{polar_equation, rectangular_equation};
use crate::error::InputError;
use crate::numeric::{clamp, format_number, parse_number};
use crate::points::{Point, PolarPoint};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which representation the user is currently driving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Rectangular,
    Polar,
}

/// One of the four editable input fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Re,
    Im,
    Rho,
    Theta,
}

impl Field {
    pub fn side(self) -> Side {
        match self {
            Field::Re | Field::Im => Side::Rectangular,
            Field::Rho | Field::Theta => Side::Polar,
        }
    }

    /// Clamp a user-entered value into this field's range.
    fn clamp(self, value: f64) -> f64 {
        match self {
            Field::Re | Field::Im => clamp(value, -LIMITS.value_bound, LIMITS.value_bound),
            Field::Rho => clamp(value, 0.0, LIMITS.value_bound),
            Field::Theta => clamp(value, -LIMITS.theta_bound, LIMITS.theta_bound),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Re => "re",
            Field::Im => "im",
            Field::Rho => "rho",
            Field::Theta => "theta",
        };
        f.write_str(name)
    }
}

impl FromStr for Field {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "re" => Ok(Field::Re),
            "im" => Ok(Field::Im),
            "rho" => Ok(Field::Rho),
            "theta" => Ok(Field::Theta),
            other => Err(InputError::UnknownField(other.to_string())),
        }
    }
}

/// What an edit did to the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// A number was stored and the other side re-derived.
    Applied,
    /// The field was emptied; the other side was re-derived with it as `0`.
    Cleared,
    /// The text was not a number; nothing changed.
    Ignored,
}

/// `(re, im)`. `None` is an empty input box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangular {
    pub re: Option<f64>,
    pub im: Option<f64>,
}

impl Rectangular {
    /// The value with unset fields read as `0`.
    pub fn resolved(&self) -> Point<f64> {
        Point::new(self.re.unwrap_or(0.0), self.im.unwrap_or(0.0))
    }

    /// Derive the polar side from the resolved value, clamped to the
    /// rectangular bounds first.
    pub fn to_polar(&self) -> Polar {
        let z = self.resolved();
        let z = Point::new(Field::Re.clamp(*z.x()), Field::Im.clamp(*z.y()));
        Polar {
            rho: Some(z.norm()),
            theta: Some(z.arg()),
        }
    }
}

/// `(rho, theta)`. `None` is an empty input box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub rho: Option<f64>,
    pub theta: Option<f64>,
}

impl Polar {
    /// The value with unset fields read as `0`.
    pub fn resolved(&self) -> PolarPoint {
        PolarPoint::new(self.rho.unwrap_or(0.0), self.theta.unwrap_or(0.0))
    }

    /// Derive the rectangular side. A derived `rho` may exceed the bound, so
    /// both values are clamped before use; `re` and `im` stay within
    /// `±LIMITS.value_bound`.
    pub fn to_rectangular(&self) -> Rectangular {
        let PolarPoint { rho, theta } = self.resolved();
        let z = PolarPoint::new(Field::Rho.clamp(rho), Field::Theta.clamp(theta)).to_cartesian();
        Rectangular {
            re: Some(*z.x()),
            im: Some(*z.y()),
        }
    }
}

/// The coordinate model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComplexForm {
    rectangular: Rectangular,
    polar: Polar,
    last_edited: Side,
}

impl ComplexForm {
    /// Both sides empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rectangular(&self) -> Rectangular {
        self.rectangular
    }

    pub fn polar(&self) -> Polar {
        self.polar
    }

    pub fn last_edited(&self) -> Side {
        self.last_edited
    }

    /// Apply one user edit.
    ///
    /// The new state is built in full and then swapped in, so an ignored
    /// edit leaves every field (and the authority flag) untouched.
    pub fn apply(&mut self, field: Field, text: &str) -> EditOutcome {
        let parsed = match parse_number(text) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::debug!("Ignoring edit of {}: {}", field, err);
                return EditOutcome::Ignored;
            }
        };
        let value = parsed.map(|v| field.clamp(v));

        let mut next = *self;
        match field {
            Field::Re => next.rectangular.re = value,
            Field::Im => next.rectangular.im = value,
            Field::Rho => next.polar.rho = value,
            Field::Theta => next.polar.theta = value,
        }
        match field.side() {
            Side::Rectangular => next.polar = next.rectangular.to_polar(),
            Side::Polar => next.rectangular = next.polar.to_rectangular(),
        }
        next.last_edited = field.side();
        *self = next;

        if value.is_some() {
            EditOutcome::Applied
        } else {
            EditOutcome::Cleared
        }
    }

    pub fn edit_rectangular(&mut self, field: Field, text: &str) -> EditOutcome {
        debug_assert_eq!(field.side(), Side::Rectangular);
        self.apply(field, text)
    }

    pub fn edit_polar(&mut self, field: Field, text: &str) -> EditOutcome {
        debug_assert_eq!(field.side(), Side::Polar);
        self.apply(field, text)
    }

    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Re => self.rectangular.re,
            Field::Im => self.rectangular.im,
            Field::Rho => self.polar.rho,
            Field::Theta => self.polar.theta,
        }
    }

    /// Text for the field's input box; empty when unset.
    pub fn field_text(&self, field: Field) -> String {
        self.value(field).map(format_number).unwrap_or_default()
    }

    pub fn rectangular_equation(&self) -> String {
        rectangular_equation(&self.rectangular)
    }

    pub fn polar_equation(&self) -> String {
        polar_equation(&self.polar)
    }

    pub fn snapshot(&self) -> CoordinateSnapshot {
        CoordinateSnapshot {
            re: self.rectangular.re,
            im: self.rectangular.im,
            rho: self.polar.rho,
            theta: self.polar.theta,
            rectangular_equation: self.rectangular_equation(),
            polar_equation: self.polar_equation(),
            last_edited: self.last_edited,
        }
    }
}

/// Read-only view handed to renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSnapshot {
    pub re: Option<f64>,
    pub im: Option<f64>,
    pub rho: Option<f64>,
    pub theta: Option<f64>,
    pub rectangular_equation: String,
    pub polar_equation: String,
    pub last_edited: Side,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn new_form_is_empty() {
        let form = ComplexForm::new();
        for field in [Field::Re, Field::Im, Field::Rho, Field::Theta] {
            assert_eq!(form.value(field), None);
            assert_eq!(form.field_text(field), "");
        }
    }

    #[test]
    fn rectangular_edit_derives_polar() {
        let mut form = ComplexForm::new();
        assert_eq!(form.apply(Field::Re, "3"), EditOutcome::Applied);
        assert_eq!(form.apply(Field::Im, "4"), EditOutcome::Applied);

        assert!(approx(form.value(Field::Rho), 5.0));
        assert!(approx(form.value(Field::Theta), 4.0f64.atan2(3.0)));
        assert_eq!(form.last_edited(), Side::Rectangular);
    }

    #[test]
    fn polar_edit_derives_rectangular() {
        let mut form = ComplexForm::new();
        form.apply(Field::Rho, "2");
        form.apply(Field::Theta, &FRAC_PI_2.to_string());

        assert!(approx(form.value(Field::Re), 0.0));
        assert!(approx(form.value(Field::Im), 2.0));
        assert_eq!(form.last_edited(), Side::Polar);
    }

    #[test]
    fn first_edit_fills_the_opposite_side_completely() {
        let mut form = ComplexForm::new();
        form.apply(Field::Re, "-2");

        // im is still unset, but both polar fields are derived
        assert_eq!(form.value(Field::Im), None);
        assert!(approx(form.value(Field::Rho), 2.0));
        assert!(approx(form.value(Field::Theta), PI));
    }

    #[test]
    fn clearing_a_field_keeps_its_sibling_and_derives_with_zero() {
        let mut form = ComplexForm::new();
        form.apply(Field::Re, "3");
        form.apply(Field::Im, "4");

        assert_eq!(form.apply(Field::Re, ""), EditOutcome::Cleared);
        assert_eq!(form.value(Field::Re), None);
        assert_eq!(form.field_text(Field::Re), "");
        assert_eq!(form.value(Field::Im), Some(4.0));
        assert!(approx(form.value(Field::Rho), 4.0));
        assert!(approx(form.value(Field::Theta), FRAC_PI_2));
    }

    #[test]
    fn invalid_text_is_ignored() {
        let mut form = ComplexForm::new();
        form.apply(Field::Rho, "1");
        let before = form;

        assert_eq!(form.apply(Field::Re, "abc"), EditOutcome::Ignored);
        assert_eq!(form, before);
        assert_eq!(form.last_edited(), Side::Polar);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        let mut form = ComplexForm::new();
        form.apply(Field::Re, "5e9");
        assert_eq!(form.value(Field::Re), Some(1e6));

        form.apply(Field::Rho, "-3");
        assert_eq!(form.value(Field::Rho), Some(0.0));

        form.apply(Field::Theta, "1000");
        assert!(approx(form.value(Field::Theta), 10.0 * PI));
    }

    #[test]
    fn derived_rho_beyond_bound_keeps_rectangular_side_bounded() {
        let mut form = ComplexForm::new();
        form.apply(Field::Re, "1000000");
        form.apply(Field::Im, "1000000");
        // derived text is kept as computed
        assert!(approx(form.value(Field::Rho), 2.0f64.sqrt() * 1e6));

        form.apply(Field::Theta, "0");
        let re = form.value(Field::Re).unwrap();
        let im = form.value(Field::Im).unwrap();
        assert!(re.abs() <= 1e6, "re {} exceeds bound", re);
        assert!(im.abs() <= 1e6, "im {} exceeds bound", im);
        assert_eq!(re, 1e6);
    }

    #[test]
    fn derived_values_are_clamped_before_converting() {
        let polar = Polar {
            rho: Some(5e6),
            theta: Some(100.0),
        };
        let rect = polar.to_rectangular();
        let expected = PolarPoint::new(1e6, 10.0 * PI).to_cartesian();
        assert_eq!(rect.re, Some(*expected.x()));
        assert_eq!(rect.im, Some(*expected.y()));

        let rect = Rectangular {
            re: Some(-3e6),
            im: None,
        };
        let polar = rect.to_polar();
        assert_eq!(polar.rho, Some(1e6));
        assert!(approx(polar.theta, PI));
    }

    #[test]
    fn origin_derives_zero_angle() {
        let mut form = ComplexForm::new();
        form.apply(Field::Re, "0");
        assert_eq!(form.value(Field::Rho), Some(0.0));
        assert_eq!(form.value(Field::Theta), Some(0.0));
    }

    #[test]
    fn editing_one_side_never_touches_its_own_sibling() {
        let mut form = ComplexForm::new();
        form.apply(Field::Rho, "2");
        form.apply(Field::Theta, "1");
        form.apply(Field::Rho, "3");
        assert_eq!(form.value(Field::Theta), Some(1.0));
    }

    #[test]
    fn field_text_uses_canonical_numbers() {
        let mut form = ComplexForm::new();
        form.apply(Field::Re, "3.0");
        assert_eq!(form.field_text(Field::Re), "3");
    }

    #[test]
    fn field_parses_from_name() {
        assert_eq!("theta".parse::<Field>(), Ok(Field::Theta));
        assert!("phi".parse::<Field>().is_err());
        assert_eq!(Field::Rho.to_string(), "rho");
    }

    #[test]
    fn snapshot_serializes_unset_fields_as_null() {
        let mut form = ComplexForm::new();
        form.apply(Field::Re, "1");
        let json = serde_json::to_string(&form.snapshot()).unwrap();
        assert!(json.contains(r#""im":null"#));
        assert!(json.contains(r#""last_edited":"rectangular""#));
    }
}
