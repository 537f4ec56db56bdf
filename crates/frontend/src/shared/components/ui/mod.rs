pub mod badge;
pub mod button;
