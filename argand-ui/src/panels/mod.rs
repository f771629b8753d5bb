pub mod coordinate_panel;
pub mod epicycle_playground;

pub use coordinate_panel::{CoordinatePanel, PanelSnapshot};
pub use epicycle_playground::EpicyclePlayground;
