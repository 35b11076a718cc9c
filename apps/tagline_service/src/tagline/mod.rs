pub mod tagline_controller;
pub mod tagline_store;
