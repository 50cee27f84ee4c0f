pub mod config;
pub mod domain;
pub mod error;
pub mod session;
pub mod srs;
pub mod stats;
