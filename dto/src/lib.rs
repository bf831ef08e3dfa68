pub mod email;
pub mod recipients;
