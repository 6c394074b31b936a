//! End-to-end client tests over a mock HTTP transport.

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use paapi_core::{Context, ErrorKind, HttpSend, Result, Signer};
use paapi_search::{ProductResult, RequestSigner, SearchClient, StaticCredentialProvider};
use std::sync::{Arc, Mutex};

/// HttpSend stub that records the outgoing request and replies with a
/// canned response.
#[derive(Debug, Clone)]
struct MockHttpSend {
    status: StatusCode,
    body: &'static str,
    seen: Arc<Mutex<Option<http::Request<Bytes>>>>,
}

impl MockHttpSend {
    fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body,
            seen: Arc::new(Mutex::new(None)),
        }
    }

    fn seen_request(&self) -> http::Request<Bytes> {
        self.seen
            .lock()
            .unwrap()
            .take()
            .expect("a request must have been sent")
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        *self.seen.lock().unwrap() = Some(req);
        Ok(http::Response::builder()
            .status(self.status)
            .body(Bytes::from_static(self.body.as_bytes()))
            .expect("response must be valid"))
    }
}

/// HttpSend stub that fails the test when reached.
#[derive(Debug, Clone, Copy)]
struct PanicHttpSend;

#[async_trait]
impl HttpSend for PanicHttpSend {
    async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        panic!("no network call expected");
    }
}

fn client_with(http: impl HttpSend + Clone) -> SearchClient {
    let ctx = Context::new().with_http_send(http);
    let signer = Signer::new(
        ctx.clone(),
        StaticCredentialProvider::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
            "demo-22",
        ),
        RequestSigner::new("us-west-2"),
    );
    SearchClient::new(ctx, signer)
}

const TWO_ITEMS: &str = r#"{
    "SearchResult": {
        "Items": [
            {
                "DetailPageURL": "https://www.amazon.co.jp/dp/B000000001",
                "ItemInfo": {"Title": {"DisplayValue": "<b>Great</b> Mug"}},
                "Images": {"Primary": {"Medium": {"URL": "https://img.example/m.jpg"}}}
            },
            {
                "DetailPageURL": "https://www.amazon.co.jp/dp/B000000002",
                "ItemInfo": {"Title": {"DisplayValue": "Plain Mug"}}
            }
        ]
    }
}"#;

#[tokio::test]
async fn test_search_normalizes_items() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mock = MockHttpSend::new(StatusCode::OK, TWO_ITEMS);
    let client = client_with(mock.clone());

    let results = client.search("coffee mug").await?;
    assert_eq!(
        results,
        vec![
            ProductResult {
                title: "Great Mug".to_string(),
                url: "https://www.amazon.co.jp/dp/B000000001".to_string(),
                image_url: Some("https://img.example/m.jpg".to_string()),
            },
            ProductResult {
                title: "Plain Mug".to_string(),
                url: "https://www.amazon.co.jp/dp/B000000002".to_string(),
                image_url: None,
            },
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_search_sends_signed_post() -> anyhow::Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, r#"{"SearchResult":{"Items":[]}}"#);
    let client = client_with(mock.clone());

    client.search("coffee mug").await?;

    let req = mock.seen_request();
    assert_eq!(req.method(), http::Method::POST);
    assert_eq!(
        req.uri().to_string(),
        "https://webservices.amazon.co.jp/paapi5/searchitems"
    );

    let headers = req.headers();
    assert_eq!(headers.get("content-encoding").unwrap(), "amz-1.0");
    assert_eq!(
        headers.get("content-type").unwrap(),
        "application/json; charset=UTF-8"
    );
    assert_eq!(
        headers.get("x-amz-target").unwrap(),
        "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.SearchItems"
    );
    assert!(headers.contains_key("x-amz-date"));
    let authorization = headers.get("authorization").unwrap().to_str()?;
    assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
    assert!(authorization.contains(
        "SignedHeaders=content-encoding;content-type;host;x-amz-date;x-amz-target"
    ));

    // The partner tag rides in the payload, not in the query.
    let body: serde_json::Value = serde_json::from_slice(req.body())?;
    assert_eq!(body["Keywords"], "coffee mug");
    assert_eq!(body["PartnerTag"], "demo-22");
    assert_eq!(body["ItemCount"], 3);
    assert_eq!(req.uri().query(), None);
    Ok(())
}

#[tokio::test]
async fn test_search_zero_items_is_empty() -> anyhow::Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, r#"{"SearchResult":{"Items":[]}}"#);
    let client = client_with(mock);
    assert!(client.search("unobtainium").await?.is_empty());

    // Vendor may omit SearchResult entirely when nothing matched.
    let mock = MockHttpSend::new(StatusCode::OK, "{}");
    let client = client_with(mock);
    assert!(client.search("unobtainium").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_search_empty_query_skips_network() -> anyhow::Result<()> {
    let client = client_with(PanicHttpSend);
    assert!(client.search("").await?.is_empty());
    assert!(client.search("   ").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_search_rejection_carries_vendor_body() {
    let vendor_body =
        r#"{"Errors":[{"Code":"InvalidSignature","Message":"The request signature is invalid."}]}"#;
    let mock = MockHttpSend::new(StatusCode::UNAUTHORIZED, vendor_body);
    let client = client_with(mock);

    let err = client.search("coffee mug").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteRejected);
    assert!(err.to_string().contains("InvalidSignature"));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_search_without_credentials_is_config_fault() {
    #[derive(Debug)]
    struct NoCredential;

    #[async_trait]
    impl paapi_core::ProvideCredential for NoCredential {
        type Credential = paapi_search::Credential;

        async fn provide_credential(
            &self,
            _: &Context,
        ) -> Result<Option<Self::Credential>> {
            Ok(None)
        }
    }

    let ctx = Context::new().with_http_send(PanicHttpSend);
    let signer = Signer::new(ctx.clone(), NoCredential, RequestSigner::new("us-west-2"));
    let client = SearchClient::new(ctx, signer);

    let err = client.search("coffee mug").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}
