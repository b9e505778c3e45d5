pub mod field_input;
pub mod mode_buttons;
