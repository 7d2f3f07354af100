//! Styled building blocks shared by every screen.

mod button;
mod input;
mod label;
mod modal_overlay;

pub use button::{Button, ButtonVariant};
pub use input::{FieldError, Input};
pub use label::Label;
pub use modal_overlay::ModalOverlay;
