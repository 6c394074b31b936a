use crate::provide_credential::EnvCredentialProvider;
use crate::Credential;
use async_trait::async_trait;
use paapi_core::{Context, ProvideCredential, Result};

/// DefaultCredentialProvider loads credentials via the default sources.
///
/// Resolution order:
///
/// 1. Environment variables (`AMAZON_ACCESS_KEY`, `AMAZON_SECRET_KEY`,
///    `AMAZON_ASSOCIATE_TAG`)
///
/// The product credentials are long-lived process configuration, so there
/// is no instance-metadata or file-based fallback here.
#[derive(Debug, Default)]
pub struct DefaultCredentialProvider {
    env: EnvCredentialProvider,
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        match self.env.provide_credential(ctx).await? {
            Some(cred) => Ok(Some(cred)),
            None => {
                log::debug!("no credential found in environment");
                Ok(None)
            }
        }
    }
}
