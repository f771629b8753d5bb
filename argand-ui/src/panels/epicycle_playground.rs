//! Fourier playground: component editor, speed control and the frame loop.

use crate::js_error;
use crate::rendering::FrameLoop;
use argand_core::{
    ComponentField, ComponentList, EditOutcome, EpicycleSimulator, FourierComponent,
    FrameSnapshot, SimulatorConfig,
};
use gloo_utils::format::JsValueSerdeExt;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct EpicyclePlayground {
    components: ComponentList,
    simulator: Rc<RefCell<EpicycleSimulator>>,
    frame_loop: Option<FrameLoop>,
}

impl Default for EpicyclePlayground {
    fn default() -> Self {
        Self::with_simulator_config(SimulatorConfig::default())
    }
}

#[wasm_bindgen]
impl EpicyclePlayground {
    #[wasm_bindgen(constructor)]
    pub fn new() -> EpicyclePlayground {
        Self::default()
    }

    /// Build from a JSON `SimulatorConfig`; missing keys take defaults.
    pub fn from_config_json(json: &str) -> Result<EpicyclePlayground, JsValue> {
        let config = SimulatorConfig::from_json(json).map_err(js_error)?;
        Ok(Self::with_simulator_config(config))
    }

    pub fn can_add(&self) -> bool {
        !self.components.is_full()
    }

    pub fn add_component(&mut self) -> bool {
        let added = self.components.add();
        if added {
            self.sync_components();
        }
        added
    }

    pub fn remove_component(&mut self, index: usize) -> bool {
        let removed = self.components.remove(index).is_some();
        if removed {
            self.sync_components();
        }
        removed
    }

    /// Edit `rho`, `omega` or `color` of one component. Returns `false` when
    /// the text was ignored.
    pub fn edit_component(
        &mut self,
        index: usize,
        field: &str,
        text: &str,
    ) -> Result<bool, JsValue> {
        let field: ComponentField = field.parse().map_err(js_error)?;
        let outcome = self.edit(index, field, text).map_err(js_error)?;
        Ok(outcome != EditOutcome::Ignored)
    }

    pub fn components(&self) -> Result<JsValue, JsValue> {
        JsValue::from_serde(self.components.as_slice()).map_err(js_error)
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.simulator.borrow_mut().set_speed_multiplier(speed);
    }

    /// Speed multiplier the last tick ran with.
    pub fn speed(&self) -> f64 {
        self.simulator.borrow().speed_multiplier()
    }

    pub fn time(&self) -> f64 {
        self.simulator.borrow().time()
    }

    /// Advance one frame by hand and return its snapshot.
    pub fn tick(&mut self) -> Result<JsValue, JsValue> {
        let snapshot = self.step();
        JsValue::from_serde(&snapshot).map_err(js_error)
    }

    /// Tick once per animation frame, passing each snapshot to `on_frame`.
    pub fn start(&mut self, on_frame: js_sys::Function) -> Result<(), JsValue> {
        self.stop();
        let simulator = Rc::clone(&self.simulator);
        let frame_loop = FrameLoop::start(move |_timestamp| {
            // borrow released before calling out, so the callback may edit
            let snapshot = tick_snapshot(&simulator);
            let result = JsValue::from_serde(&snapshot)
                .map_err(js_error)
                .and_then(|value| on_frame.call1(&JsValue::NULL, &value));
            if let Err(e) = result {
                web_sys::console::error_1(&e);
            }
        })?;
        self.frame_loop = Some(frame_loop);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop
            .as_ref()
            .is_some_and(|frame_loop| frame_loop.is_active())
    }
}

impl EpicyclePlayground {
    pub fn with_simulator_config(config: SimulatorConfig) -> Self {
        let components = ComponentList::new(config.clone());
        let simulator = EpicycleSimulator::new(config, components.to_vec());
        Self {
            components,
            simulator: Rc::new(RefCell::new(simulator)),
            frame_loop: None,
        }
    }

    pub fn edit(
        &mut self,
        index: usize,
        field: ComponentField,
        text: &str,
    ) -> Result<EditOutcome, argand_core::InputError> {
        let outcome = self.components.edit(index, field, text)?;
        if outcome != EditOutcome::Ignored {
            self.sync_components();
        }
        Ok(outcome)
    }

    pub fn component_list(&self) -> &[FourierComponent] {
        self.components.as_slice()
    }

    pub fn step(&mut self) -> FrameSnapshot {
        tick_snapshot(&self.simulator)
    }

    /// Stage the edited list; the simulator picks it up on its next tick.
    fn sync_components(&mut self) {
        self.simulator
            .borrow_mut()
            .set_components(self.components.to_vec());
    }
}

fn tick_snapshot(simulator: &RefCell<EpicycleSimulator>) -> FrameSnapshot {
    let mut simulator = simulator.borrow_mut();
    simulator.tick();
    simulator.snapshot()
}
