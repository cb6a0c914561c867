//! Core library for oauth2-login-pkce
pub mod config;
pub mod random;
pub mod pkce;
pub mod provider;
pub mod authorization;
