#![allow(non_snake_case)]

pub mod client;
pub mod error;

pub use client::AuthClient;
pub use error::RemoteAuthError;
