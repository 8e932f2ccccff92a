//! Reusable UI components

mod alert;
mod button;
mod skeleton;

pub use alert::{render_alert, ALERT_HEIGHT};
pub use button::{button_width, render_button, BUTTON_HEIGHT};
pub use skeleton::render_skeleton_block;
