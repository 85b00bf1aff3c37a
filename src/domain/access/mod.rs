//! Service-account credential resolution

pub mod token_service;
