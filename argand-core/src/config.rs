//! Numeric limits and simulator defaults.
//!
//! The statics here are the single source of truth for every bound the
//! coordinate model, the root solver and the epicycle simulator enforce.
//! `SimulatorConfig` can also be loaded from JSON so a host page can tune the
//! playground without a rebuild.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Bounds for the coordinate model and the root solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    /// Magnitude bound for `re`, `im` and `rho`.
    pub value_bound: f64,
    /// Magnitude bound for `theta`. Wider than one turn on purpose.
    pub theta_bound: f64,
    /// Smallest accepted power/root order.
    pub min_order: u32,
    /// Largest accepted power/root order.
    pub max_order: u32,
}

pub static LIMITS: Limits = Limits {
    value_bound: 1e6,
    theta_bound: 10.0 * PI,
    min_order: 1,
    max_order: 20,
};

/// Configuration for the epicycle simulator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Capacity of both the trail and the wave ring buffers.
    pub history_capacity: usize,
    /// Step size (in units of `1 / max|omega|`) before the speed multiplier.
    pub base_step: f64,
    /// Step used when every component has zero frequency.
    pub fallback_step: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub default_speed: f64,
    /// Policy cap on the number of components.
    pub max_components: usize,
    /// Upper bound for a component amplitude (lower bound is 0).
    pub max_component_rho: f64,
    /// Magnitude bound for a component frequency.
    pub max_component_omega: f64,
}

pub static SIMULATOR_CONFIG: SimulatorConfig = SimulatorConfig {
    history_capacity: 2000,
    base_step: 0.01,
    fallback_step: 0.01,
    min_speed: 0.1,
    max_speed: 10.0,
    default_speed: 1.0,
    max_components: 5,
    max_component_rho: 100.0,
    max_component_omega: 100.0,
};

impl Default for SimulatorConfig {
    fn default() -> Self {
        SIMULATOR_CONFIG.clone()
    }
}

impl SimulatorConfig {
    /// Parse a JSON object; missing keys fall back to [`SIMULATOR_CONFIG`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimulatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid(
                "history_capacity must be positive".to_string(),
            ));
        }
        if !(self.base_step > 0.0 && self.base_step.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "base_step must be positive, got {}",
                self.base_step
            )));
        }
        if !(self.fallback_step > 0.0 && self.fallback_step.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "fallback_step must be positive, got {}",
                self.fallback_step
            )));
        }
        if !(self.min_speed > 0.0 && self.min_speed <= self.max_speed) {
            return Err(ConfigError::Invalid(format!(
                "speed range [{}, {}] is not a positive ordered range",
                self.min_speed, self.max_speed
            )));
        }
        if !(self.min_speed..=self.max_speed).contains(&self.default_speed) {
            return Err(ConfigError::Invalid(format!(
                "default_speed {} outside [{}, {}]",
                self.default_speed, self.min_speed, self.max_speed
            )));
        }
        if self.max_component_rho < 0.0 || self.max_component_omega < 0.0 {
            return Err(ConfigError::Invalid(
                "component bounds must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
