//! HTTP facade for the portal backend.
//!
//! Every request goes through [`ApiClient`], which stamps the current bearer
//! token, and reports authorization failures back to the session.

pub(crate) mod client;


pub use client::{
    ApiClient, ApiResult, ClientError, ErrorKind, LoginResponse, Navigator, SessionHandle,
};
