mod alert;
mod text_field;

pub use alert::ErrorAlert;
pub use text_field::TextField;
