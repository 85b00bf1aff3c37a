pub mod cluster_controller;
pub mod namespace_controller;
pub mod token_controller;
