//! HttpSend implementation backed by [`reqwest`].
//!
//! The client passed in controls transport policy: set the timeout on the
//! `reqwest::Client` so a stalled search surfaces as a transport failure
//! instead of hanging.

#![warn(missing_docs)]

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use paapi_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// HttpSend implementation over a shared `reqwest::Client`.
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("converting request failed").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport_failed("sending http request failed").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport_failed("reading response body failed").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
