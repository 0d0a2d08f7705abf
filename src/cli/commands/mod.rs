//! Command implementations

mod config;
mod issuer;
mod schemes;
mod validate;

pub use config::config;
pub use issuer::issuer;
pub use schemes::schemes;
pub use validate::validate;
