//! Read-only cluster-wide statistics

pub mod stats_service;
