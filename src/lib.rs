// Library exports for nongtritue
// The binary and the integration tests both build on these modules

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod realtime;
pub mod routes;
pub mod state;
