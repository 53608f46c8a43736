//! staffdir-server: HTTP CRUD API over the personnel schema
//!
//! Resources: employees, departments, supervisors, plus a one-shot
//! login check and photo upload serving.

pub mod db;
pub mod http;
pub mod models;
pub mod uploads;

pub use http::{run_server, ServerConfig};
