pub mod access;
pub mod inventory;
pub mod provision;
