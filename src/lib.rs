//! Keypad calculator engine and its terminal front end.

pub mod calculator;
pub mod config;
pub mod error;
pub mod keys;
pub mod session;
