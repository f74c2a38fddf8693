//! ShopDesk — client library for the ShopDesk task & attendance API.
//!
//! The pieces compose explicitly (no ambient globals):
//! - [`client::TokenStore`] owns the in-memory access/refresh pair.
//! - [`client::ApiClient`] attaches the bearer token to every request and
//!   recovers transparently from an expired access token with a
//!   single-shot refresh-and-retry.
//! - [`session::Session`] tracks the authenticated user and exposes
//!   bootstrap / login / logout.
//! - [`api`] holds the typed endpoint wrappers per resource.

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod session;
