//! Signed product search against the Amazon Product Advertising API.
//!
//! This crate bundles the paapi workspace behind one dependency:
//!
//! - [`paapi_core`] types and traits are re-exported at the root.
//! - The [`search`] module exposes the service crate: credential
//!   providers, the SigV4 request signer, and the search client.
//! - [`DefaultContext`] wires a reqwest-backed transport and OS
//!   environment access together for the common case.
//!
//! ## Example
//!
//! ```no_run
//! use paapi::search::{DefaultCredentialProvider, RequestSigner, SearchClient, DEFAULT_REGION};
//! use paapi::{DefaultContext, Signer};
//!
//! # async fn example() -> paapi::Result<()> {
//! let ctx = DefaultContext::new();
//! let signer = Signer::new(
//!     ctx.clone(),
//!     DefaultCredentialProvider::new(),
//!     RequestSigner::new(DEFAULT_REGION),
//! );
//! let client = SearchClient::new(ctx, signer);
//!
//! for product in client.search("coffee mug").await? {
//!     println!("{} <{}>", product.title, product.url);
//! }
//! # Ok(())
//! # }
//! ```

pub use paapi_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::DefaultContext;

#[cfg(feature = "search")]
pub mod search {
    //! Product Advertising API signer and search client.
    pub use paapi_search::*;
}
