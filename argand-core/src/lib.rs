pub mod config;
pub mod coordinates;
pub mod epicycle;
pub mod equation;
pub mod error;
pub mod numeric;
pub mod points;
pub mod ring_buffer;
pub mod roots;

pub use config::{Limits, SimulatorConfig, LIMITS, SIMULATOR_CONFIG};
pub use coordinates::{
    ComplexForm, CoordinateSnapshot, EditOutcome, Field, Polar, Rectangular, Side,
};
pub use epicycle::{
    base_time_step, composite, default_components, epicycle_chain, ChainLink, ComponentField,
    ComponentList, EpicycleSimulator, FourierComponent, Frame, FrameSnapshot, PlaybackSettings,
    SimulationState, WaveSample,
};
pub use equation::{polar_equation, rectangular_equation};
pub use error::{ConfigError, InputError};
pub use numeric::{clamp, format_number, parse_number, round_display};
pub use points::{Point, PolarPoint};
pub use ring_buffer::RingBuffer;
pub use roots::{scale_extent, solve, OperationPanel, Order, RootOperation, RootResult};
