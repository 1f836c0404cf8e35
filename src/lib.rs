//! Explains error messages and stack traces by matching them against a
//! catalog of known error signatures.

pub mod catalog;
pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod workers;
