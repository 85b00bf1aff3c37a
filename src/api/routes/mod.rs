pub mod cluster_routes;
pub mod namespace_routes;
