pub mod action_button;
pub mod swatch;

pub use action_button::ActionButton;
pub use swatch::Swatch;
