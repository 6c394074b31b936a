//! Core components for signing Product Advertising API requests.
//!
//! This crate provides the foundational types and traits shared by the
//! paapi crates. It defines the seams that keep the signing pipeline
//! testable: credential loading ([`ProvideCredential`]), request signing
//! ([`SignRequest`]), and the [`Context`] that carries the HTTP and
//! environment implementations.
//!
//! ## Overview
//!
//! - **Context**: a container holding the `HttpSend` and `Env`
//!   implementations used during credential loading and request delivery.
//! - **Traits**: abstract interfaces for credential loading and request
//!   signing, so the pipeline can run against fixtures in tests.
//! - **Signer**: the orchestrator that loads a credential and delegates
//!   to the service-specific request signer.
//!
//! ## Utilities
//!
//! - [`hash`]: SHA-256 and HMAC-SHA256 helpers.
//! - [`time`]: timestamp formatting for credential scopes.
//! - [`utils`]: data redaction for credential material.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
