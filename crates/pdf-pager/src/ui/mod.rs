pub mod canvas;
pub mod controls;
pub mod layout;
pub mod style;
