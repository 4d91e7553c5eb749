//! Response helpers shared by the route handlers

pub mod error;
pub mod response;

pub use error::{
    handle_domain_error, handle_validation_errors, json_error_handler, path_error_handler,
    query_error_handler,
};
pub use response::{created, ok};
