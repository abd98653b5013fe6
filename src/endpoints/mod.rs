//! Request builders, one function per API endpoint.
//!
//! Builders are pure: they only shape their arguments into a [`Request`](crate::request::Request)
//! and never touch the network.

pub mod repos;
