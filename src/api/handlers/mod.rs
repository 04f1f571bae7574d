//! HTTP request handlers for the service endpoints.

pub mod bad_request;
pub mod redirect;
pub mod shorten;

pub use bad_request::bad_request_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
