pub mod engine;
pub mod status;
pub mod views;
