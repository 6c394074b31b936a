//! Product Advertising API signer and search client.
//!
//! The signing scheme is AWS Signature Version 4 scoped to the
//! `ProductAdvertisingAPI` service: a canonical request over the POST
//! body and five mandatory headers, a four-stage key-derivation chain,
//! and an `Authorization` header binding both to a credential scope.

mod constants;
pub use constants::{
    AMAZON_ACCESS_KEY, AMAZON_ASSOCIATE_TAG, AMAZON_SECRET_KEY, DEFAULT_HOST, DEFAULT_MARKETPLACE,
    DEFAULT_REGION,
};

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::DefaultCredentialProvider;
pub use provide_credential::EnvCredentialProvider;
pub use provide_credential::StaticCredentialProvider;

mod sign_request;
pub use sign_request::RequestSigner;

mod search;
pub use search::{ProductResult, SearchClient};
