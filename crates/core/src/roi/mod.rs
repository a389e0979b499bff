//! ROI module - input/output models and the calculator.

mod roi_calculator;
mod roi_model;

pub use roi_calculator::calculate_roi;
pub use roi_model::{RoiInput, RoiOutput, UpliftInputs};
