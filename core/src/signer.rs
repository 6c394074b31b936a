use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use bytes::Bytes;
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// It loads a credential through the configured provider, caches it while
/// it stays valid, and delegates the actual signing to the service's
/// request signer. Derived keys are never cached; only the long-lived
/// credential is.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Fetch the credential, loading it through the provider when the
    /// cached one is absent or no longer valid.
    pub async fn credential(&self) -> Result<Option<K>> {
        let cached = self.credential.lock().expect("lock poisoned").clone();
        if cached.is_valid() {
            return Ok(cached);
        }

        let loaded = self.loader.provide_credential(&self.ctx).await?;
        *self.credential.lock().expect("lock poisoned") = loaded.clone();
        Ok(loaded)
    }

    /// Sign the request in place.
    ///
    /// A missing credential is a configuration fault and surfaces here,
    /// before any network call is attempted.
    pub async fn sign(&self, req: &mut http::request::Parts, body: &Bytes) -> Result<()> {
        let credential = self.credential().await?;

        let Some(credential) = credential else {
            return Err(Error::config_invalid(
                "no valid credential found, check the configured providers",
            ));
        };

        self.builder
            .sign_request(&self.ctx, req, body, Some(&credential))
            .await
    }
}
