pub mod painter;
pub mod panels;
