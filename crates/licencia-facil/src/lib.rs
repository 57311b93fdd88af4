//! Landing page, lead capture and privacy policy for the Clase B exam simulator.

pub mod config;
pub mod error;
pub mod leads;
pub mod pages;
pub mod telemetry;
