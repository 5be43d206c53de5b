//! Build-time configuration of the ESP32 boiler controller.
//!
//! Values come from `cfg.toml` and are validated and turned into the
//! [`config::CONFIG`] constant by the build script. The firmware reads them
//! through the accessors in [`wifi`], [`ntp`], [`ota`] and [`mqtt`].

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod error;
pub mod mqtt;
pub mod ntp;
pub mod ota;
#[cfg(test)]
mod raw;
pub mod validate;
pub mod wifi;

pub use config::{Config, CONFIG};
pub use error::Error;
pub use mqtt::Credentials;
pub use ota::OtaAuth;
