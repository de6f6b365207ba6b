//! Form primitives shared by the views and dialogs.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::Label;

mod text_field;
pub use text_field::TextField;
