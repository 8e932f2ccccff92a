//! Application state module

mod app_state;
mod form_page;
mod forms;
mod skeleton_state;
mod transient;

pub use app_state::*;
pub use form_page::*;
pub use forms::*;
pub use transient::*;
