//! Typed bindings for the repository endpoints of Github's v3 API
//! https://docs.github.com/en/rest/repos
//!
//! Every endpoint is a function in [`endpoints`] returning a [`Request`] that describes the call
//! without performing it. A [`Client`] executes requests, or use [`Client::repos`] to do both in
//! one step.

pub mod client;
mod common;
pub mod endpoints;
mod name;
mod repo;
pub mod request;
mod user;

pub use client::Client;
pub use common::*;
pub use name::*;
pub use repo::*;
pub use request::{Capability, FetchCount, ReadOnly, ReadWrite, Request};
pub use user::*;
