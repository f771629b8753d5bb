//! Rectangular/polar input panel with the power/root overlay.

use crate::js_error;
use argand_core::{
    scale_extent, ComplexForm, CoordinateSnapshot, EditOutcome, Field, OperationPanel,
    RootOperation, RootResult,
};
use gloo_utils::format::JsValueSerdeExt;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Everything the Argand chart and the two equation labels draw from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub coordinates: CoordinateSnapshot,
    pub operation: OperationPanel,
    pub roots: RootResult,
    /// Radius of the outermost grid circle.
    pub extent: f64,
}

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct CoordinatePanel {
    form: ComplexForm,
    operation: OperationPanel,
}

#[wasm_bindgen]
impl CoordinatePanel {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CoordinatePanel {
        Self::default()
    }

    /// Edit `re`, `im`, `rho` or `theta`. Returns `false` when the text was
    /// ignored.
    pub fn edit(&mut self, field: &str, text: &str) -> Result<bool, JsValue> {
        let field: Field = field.parse().map_err(js_error)?;
        Ok(self.apply(field, text) != EditOutcome::Ignored)
    }

    /// Current input-box text for a field (empty when unset).
    pub fn field_text(&self, field: &str) -> Result<String, JsValue> {
        let field: Field = field.parse().map_err(js_error)?;
        Ok(self.form.field_text(field))
    }

    pub fn rectangular_equation(&self) -> String {
        self.form.rectangular_equation()
    }

    pub fn polar_equation(&self) -> String {
        self.form.polar_equation()
    }

    pub fn set_operation_enabled(&mut self, enabled: bool) {
        self.operation.enabled = enabled;
    }

    /// `"pow"` or `"sqrt"` (also `"power"` / `"root"`).
    pub fn set_operation(&mut self, name: &str) -> Result<(), JsValue> {
        self.operation.operation = name.parse::<RootOperation>().map_err(js_error)?;
        Ok(())
    }

    /// Order text for the `n` box; returns `false` when ignored.
    pub fn set_order(&mut self, text: &str) -> bool {
        self.operation.set_order_text(text)
    }

    pub fn order(&self) -> u32 {
        self.operation.order.get()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        JsValue::from_serde(&self.panel_snapshot()).map_err(js_error)
    }
}

impl CoordinatePanel {
    pub fn apply(&mut self, field: Field, text: &str) -> EditOutcome {
        let outcome = self.form.apply(field, text);
        log::trace!("edit {}={:?}: {:?}", field, text, outcome);
        outcome
    }

    pub fn form(&self) -> &ComplexForm {
        &self.form
    }

    pub fn roots(&self) -> RootResult {
        self.operation.results(&self.form)
    }

    pub fn panel_snapshot(&self) -> PanelSnapshot {
        let roots = self.roots();
        let extent = scale_extent(self.form.polar().resolved().rho, &roots);
        PanelSnapshot {
            coordinates: self.form.snapshot(),
            operation: self.operation,
            roots,
            extent,
        }
    }
}
