//! Namespace provisioning for portal users

pub mod namespace_service;
