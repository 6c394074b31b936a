use paapi_core::{Context, OsEnv};
use paapi_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

/// Builds a [`Context`] wired for production use: a reqwest-backed HTTP
/// transport and OS environment access.
///
/// Pass a preconfigured [`Client`] to control transport policy; a bounded
/// timeout on the client is strongly recommended so a stalled call
/// surfaces as a transport failure.
#[derive(Debug, Default, Clone)]
pub struct DefaultContext;

impl DefaultContext {
    /// Create a context with a default reqwest client.
    pub fn new() -> Context {
        Self::with_client(Client::new())
    }

    /// Create a context with the given reqwest client.
    pub fn with_client(client: Client) -> Context {
        Context::new()
            .with_http_send(ReqwestHttpSend::new(client))
            .with_env(OsEnv)
    }
}
