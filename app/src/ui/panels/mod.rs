pub mod clips;
pub mod preview;
