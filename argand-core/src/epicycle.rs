//! Fourier epicycle simulation.
//!
//! A chain of rotating vectors `rho_i·e^(i·omega_i·t)` is summed at a
//! simulation time that advances once per tick. The composite tip is recorded
//! in two ring buffers: the trail in the complex plane and the `(t, y)` wave.
//!
//! [`SimulationState::advance`] is the step function: it consumes a state and
//! returns the next one, and holds no timers. [`EpicycleSimulator`] adds the
//! configuration snapshot a tick runs against; edits are staged and swapped in
//! at the start of the next tick, so time and history carry across them.

use crate::config::{SimulatorConfig, SIMULATOR_CONFIG};
use crate::coordinates::EditOutcome;
use crate::error::InputError;
use crate::numeric::{clamp, parse_number, sanitize};
use crate::points::Point;
use crate::ring_buffer::RingBuffer;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One rotating vector of the chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FourierComponent {
    /// Amplitude, `>= 0`.
    pub rho: f64,
    /// Signed angular frequency.
    pub omega: f64,
    /// Display tag for the renderer; does not affect the simulation.
    pub color: String,
}

impl FourierComponent {
    pub fn new(rho: f64, omega: f64, color: impl Into<String>) -> Self {
        Self {
            rho,
            omega,
            color: color.into(),
        }
    }

    /// Position of this vector alone at `time`.
    pub fn phasor(&self, time: f64) -> Point<f64> {
        Point::from_polar(self.rho, self.omega * time)
    }

    /// Copy with amplitude and frequency forced into the configured bounds.
    fn bounded(&self, config: &SimulatorConfig) -> Self {
        Self {
            rho: clamp(sanitize(self.rho, 0.0), 0.0, config.max_component_rho),
            omega: clamp(
                sanitize(self.omega, 0.0),
                -config.max_component_omega,
                config.max_component_omega,
            ),
            color: self.color.clone(),
        }
    }
}

/// The default playground: two components of opposite rotation.
pub fn default_components() -> Vec<FourierComponent> {
    vec![
        FourierComponent::new(3.0, 5.0, "#ff4d4d"),
        FourierComponent::new(1.0, -10.0, "#4d79ff"),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentField {
    Rho,
    Omega,
    Color,
}

impl FromStr for ComponentField {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rho" => Ok(ComponentField::Rho),
            "omega" => Ok(ComponentField::Omega),
            "color" => Ok(ComponentField::Color),
            other => Err(InputError::UnknownField(other.to_string())),
        }
    }
}

/// The user-edited, order-significant component list.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentList {
    components: Vec<FourierComponent>,
    config: SimulatorConfig,
}

impl Default for ComponentList {
    fn default() -> Self {
        Self::new(SIMULATOR_CONFIG.clone())
    }
}

impl ComponentList {
    pub fn new(config: SimulatorConfig) -> Self {
        let components = default_components()
            .into_iter()
            .take(config.max_components)
            .collect();
        Self { components, config }
    }

    pub fn as_slice(&self) -> &[FourierComponent] {
        &self.components
    }

    pub fn to_vec(&self) -> Vec<FourierComponent> {
        self.components.clone()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.components.len() >= self.config.max_components
    }

    /// Append `{rho: 1, omega: 1, color: "#000000"}`; refused when full.
    pub fn add(&mut self) -> bool {
        if self.is_full() {
            log::debug!(
                "Component list full ({} components), add ignored",
                self.config.max_components
            );
            return false;
        }
        self.components.push(FourierComponent::new(1.0, 1.0, "#000000"));
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<FourierComponent> {
        (index < self.components.len()).then(|| self.components.remove(index))
    }

    /// Edit one field from input text.
    ///
    /// Numeric fields are clamped, read empty text as `0` and ignore text
    /// that is not a number. Only an index past the end is an error.
    pub fn edit(
        &mut self,
        index: usize,
        field: ComponentField,
        text: &str,
    ) -> Result<EditOutcome, InputError> {
        let len = self.components.len();
        let component = self
            .components
            .get_mut(index)
            .ok_or(InputError::IndexOutOfRange { index, len })?;

        let max_rho = self.config.max_component_rho;
        let max_omega = self.config.max_component_omega;
        let (slot, min, max) = match field {
            ComponentField::Color => {
                component.color = text.trim().to_string();
                return Ok(EditOutcome::Applied);
            }
            ComponentField::Rho => (&mut component.rho, 0.0, max_rho),
            ComponentField::Omega => (&mut component.omega, -max_omega, max_omega),
        };

        let parsed = match parse_number(text) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::debug!("Ignoring component {} {:?} edit: {}", index, field, err);
                return Ok(EditOutcome::Ignored);
            }
        };
        *slot = clamp(parsed.unwrap_or(0.0), min, max);
        Ok(if parsed.is_some() {
            EditOutcome::Applied
        } else {
            EditOutcome::Cleared
        })
    }
}

/// `base_step / max|omega|`, or `fallback_step` when every frequency is zero.
pub fn base_time_step(components: &[FourierComponent], config: &SimulatorConfig) -> f64 {
    let max_omega = components
        .iter()
        .map(|c| c.omega.abs())
        .fold(0.0, f64::max);
    if max_omega > 0.0 {
        config.base_step / max_omega
    } else {
        config.fallback_step
    }
}

/// One link of the drawn chain: a vector from `origin` to `tip`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub origin: Point<f64>,
    pub tip: Point<f64>,
    pub rho: f64,
    pub color: String,
}

/// Partial sums in component order; link `i` starts where link `i - 1` ends.
pub fn epicycle_chain(components: &[FourierComponent], time: f64) -> Vec<ChainLink> {
    let mut origin = Point::ORIGIN;
    components
        .iter()
        .map(|c| {
            let tip = origin.add(&c.phasor(time));
            let link = ChainLink {
                origin,
                tip,
                rho: c.rho,
                color: c.color.clone(),
            };
            origin = tip;
            link
        })
        .collect()
}

/// `Σ rho_i·(cos omega_i·t, sin omega_i·t)`, summed in component order so it
/// equals the last tip of [`epicycle_chain`] exactly.
pub fn composite(components: &[FourierComponent], time: f64) -> Point<f64> {
    components
        .iter()
        .fold(Point::ORIGIN, |acc, c| acc.add(&c.phasor(time)))
}

/// One time-domain sample of the composite's imaginary part.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveSample {
    pub time: f64,
    pub amplitude: f64,
}

/// Clock and history. Owned by the simulator; others get read-only views.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SimulationState {
    time: f64,
    trail: RingBuffer<Point<f64>>,
    wave: RingBuffer<WaveSample>,
}

impl SimulationState {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            time: 0.0,
            trail: RingBuffer::new(history_capacity),
            wave: RingBuffer::new(history_capacity),
        }
    }

    /// Advance the clock by `dt` and record the composite tip.
    pub fn advance(mut self, components: &[FourierComponent], dt: f64) -> Self {
        let time = self.time + sanitize(dt, 0.0);
        let tip = composite(components, time);
        let tip = Point::new(sanitize(*tip.x(), 0.0), sanitize(*tip.y(), 0.0));

        self.time = time;
        self.wave.push(WaveSample {
            time,
            amplitude: *tip.y(),
        });
        self.trail.push(tip);
        self
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn trail(&self) -> &RingBuffer<Point<f64>> {
        &self.trail
    }

    pub fn wave(&self) -> &RingBuffer<WaveSample> {
        &self.wave
    }
}

/// The configuration a tick runs against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSettings {
    pub components: Vec<FourierComponent>,
    pub speed_multiplier: f64,
}

/// What a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub time: f64,
    pub tip: Point<f64>,
    pub chain: Vec<ChainLink>,
    /// `Σ|rho_i|`, the largest reachable `|y|`.
    pub amplitude_bound: f64,
}

/// A frame plus ordered copies of both history buffers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: Frame,
    pub trail: Vec<Point<f64>>,
    pub wave: Vec<WaveSample>,
}

#[derive(Clone, Debug)]
pub struct EpicycleSimulator {
    config: SimulatorConfig,
    active: PlaybackSettings,
    pending: Option<PlaybackSettings>,
    state: SimulationState,
}

impl Default for EpicycleSimulator {
    fn default() -> Self {
        Self::new(SIMULATOR_CONFIG.clone(), default_components())
    }
}

impl EpicycleSimulator {
    pub fn new(config: SimulatorConfig, components: Vec<FourierComponent>) -> Self {
        let active = PlaybackSettings {
            components: Self::bound_components(&config, components),
            speed_multiplier: config.default_speed,
        };
        let state = SimulationState::new(config.history_capacity);
        Self {
            config,
            active,
            pending: None,
            state,
        }
    }

    fn bound_components(
        config: &SimulatorConfig,
        components: Vec<FourierComponent>,
    ) -> Vec<FourierComponent> {
        if components.len() > config.max_components {
            log::warn!(
                "Truncating {} components to {}",
                components.len(),
                config.max_components
            );
        }
        components
            .iter()
            .take(config.max_components)
            .map(|c| c.bounded(config))
            .collect()
    }

    /// Settings the next tick will use.
    fn staged(&self) -> &PlaybackSettings {
        self.pending.as_ref().unwrap_or(&self.active)
    }

    /// Replace the component list from the next tick on.
    pub fn set_components(&mut self, components: Vec<FourierComponent>) {
        let components = Self::bound_components(&self.config, components);
        let speed_multiplier = self.staged().speed_multiplier;
        self.pending = Some(PlaybackSettings {
            components,
            speed_multiplier,
        });
    }

    /// Clamped to the configured speed range; applies from the next tick on.
    pub fn set_speed_multiplier(&mut self, speed: f64) {
        let speed = clamp(
            sanitize(speed, self.config.default_speed),
            self.config.min_speed,
            self.config.max_speed,
        );
        let components = self.staged().components.clone();
        self.pending = Some(PlaybackSettings {
            components,
            speed_multiplier: speed,
        });
    }

    /// Advance one frame.
    pub fn tick(&mut self) -> Frame {
        if let Some(next) = self.pending.take() {
            log::debug!(
                "Applying reconfiguration at t={}: {} components, speed {}",
                self.state.time(),
                next.components.len(),
                next.speed_multiplier
            );
            self.active = next;
        }
        let dt = self.time_step();
        let state = std::mem::take(&mut self.state);
        self.state = state.advance(&self.active.components, dt);
        self.frame()
    }

    /// `dt` of the next tick under the active settings.
    pub fn time_step(&self) -> f64 {
        base_time_step(&self.active.components, &self.config) * self.active.speed_multiplier
    }

    /// The chain and tip at the current time under the active settings.
    pub fn frame(&self) -> Frame {
        let time = self.state.time();
        let chain = epicycle_chain(&self.active.components, time);
        let tip = chain.last().map_or(Point::ORIGIN, |link| link.tip);
        let amplitude_bound = self.active.components.iter().map(|c| c.rho.abs()).sum();
        Frame {
            time,
            tip,
            chain,
            amplitude_bound,
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame(),
            trail: self.state.trail().to_vec(),
            wave: self.state.wave().to_vec(),
        }
    }

    pub fn time(&self) -> f64 {
        self.state.time()
    }

    pub fn trail(&self) -> &RingBuffer<Point<f64>> {
        self.state.trail()
    }

    pub fn wave(&self) -> &RingBuffer<WaveSample> {
        self.state.wave()
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Components the last tick ran with.
    pub fn components(&self) -> &[FourierComponent] {
        &self.active.components
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.active.speed_multiplier
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }
}
