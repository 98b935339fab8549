pub mod access;
pub mod permissions;
