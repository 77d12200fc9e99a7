pub mod components;
pub mod widgets;
