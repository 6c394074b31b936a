use crate::Credential;
use async_trait::async_trait;
use paapi_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides fixed credentials.
///
/// This provider is used when the access key, secret key and partner tag
/// are known directly, for example in tests or one-off tooling.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    access_key_id: String,
    secret_access_key: String,
    partner_tag: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider.
    pub fn new(access_key_id: &str, secret_access_key: &str, partner_tag: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            partner_tag: partner_tag.to_string(),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential {
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
            partner_tag: self.partner_tag.clone(),
        }))
    }
}
