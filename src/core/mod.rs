//! Core library components.
//!
//! Credential checking, the login form model, configuration loading and
//! display text. Nothing here touches the terminal.

pub mod auth;
pub mod config;
pub mod constants;
pub mod domain;
pub mod form;
pub mod messages;
pub mod types;
pub mod validation;
