//! Server-rendered HTML for the landing and privacy pages.

pub mod landing;
mod layout;
pub mod privacy;

pub const PRIVACY_PATH: &str = "/politica-privacidad";
