pub mod extract;
pub mod gate;
pub mod models;
pub mod session;
