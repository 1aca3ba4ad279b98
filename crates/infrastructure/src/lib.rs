//! Stubzone Infrastructure Layer
pub mod dns;
pub mod storage;
