//! Typed endpoint wrappers, one module per API resource. Each function
//! is a thin call through the shared [`ApiClient`](crate::client::ApiClient);
//! authentication and retry live entirely in the client.

pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod employees;
pub mod labels;
pub mod routines;
pub mod tasks;
