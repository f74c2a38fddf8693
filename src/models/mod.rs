//! Wire types for the ShopDesk REST API, one module per resource.

pub mod attendance;
pub mod dashboard;
pub mod employee;
pub mod routine;
pub mod task;
pub mod user;
