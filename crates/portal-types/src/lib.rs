pub mod auth;
pub mod form;

pub use auth::*;
pub use form::*;
