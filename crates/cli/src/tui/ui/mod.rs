//! UI rendering modules.

mod form;
mod layout;
mod results;
mod status;

pub use layout::draw;
