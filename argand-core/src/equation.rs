//! Display equations for the two representations.
//!
//! `=` is used when every set field's rounded text equals its canonical text,
//! `≈` otherwise. The comparison is on strings, the same strings the input
//! boxes and the equations show.

use crate::coordinates::{Polar, Rectangular};
use crate::numeric::{format_number, round_display, sin_cos};

pub const RECTANGULAR_TEMPLATE: &str = "c = a + bi";
pub const POLAR_TEMPLATE: &str = "c = ρ(cosθ + i sinθ)";

fn is_exact(value: Option<f64>) -> bool {
    match value {
        Some(v) => format_number(v) == round_display(v),
        None => true,
    }
}

fn relation(values: &[Option<f64>]) -> &'static str {
    if values.iter().all(|v| is_exact(*v)) {
        "="
    } else {
        "≈"
    }
}

/// Rounded text for a term, `None` when unset or rounding to zero.
fn nonzero_term(value: Option<f64>) -> Option<String> {
    value.map(round_display).filter(|text| text != "0")
}

pub fn rectangular_equation(rect: &Rectangular) -> String {
    let eq = relation(&[rect.re, rect.im]);
    let negative_im = rect.im.is_some_and(|im| im < 0.0);
    let sign = if negative_im { "-" } else { "+" };

    let re = nonzero_term(rect.re);
    let im = nonzero_term(rect.im.map(f64::abs));

    match (re, im) {
        (Some(re), Some(im)) => format!("c {} {} {} {}i", eq, re, sign, im),
        (Some(re), None) => format!("c {} {}", eq, re),
        (None, Some(im)) if negative_im => format!("c {} -{}i", eq, im),
        (None, Some(im)) => format!("c {} {}i", eq, im),
        (None, None) => RECTANGULAR_TEMPLATE.to_string(),
    }
}

pub fn polar_equation(polar: &Polar) -> String {
    let (Some(rho), Some(theta)) = (nonzero_term(polar.rho), polar.theta) else {
        return POLAR_TEMPLATE.to_string();
    };
    let eq = relation(&[polar.rho, polar.theta]);

    // trig of the angle as displayed, so the terms agree with the theta box
    let shown_theta: f64 = round_display(theta).parse().unwrap_or(0.0);
    let (sin, cos) = sin_cos(shown_theta);
    let sign = if sin < 0.0 { "-" } else { "+" };

    format!(
        "c {} {}({} {} {}i)",
        eq,
        rho,
        round_display(cos),
        sign,
        round_display(sin.abs())
    )
}
