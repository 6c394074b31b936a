use crate::constants::{
    CONTENT_ENCODING_AMZ, CONTENT_TYPE_JSON, DEFAULT_HOST, DEFAULT_MARKETPLACE, SEARCH_ITEMS_PATH,
    SEARCH_ITEMS_TARGET, X_AMZ_TARGET,
};
use crate::Credential;
use bytes::Bytes;
use http::{header, Request};
use log::debug;
use paapi_core::{Context, Error, Result, Signer};
use serde::{Deserialize, Serialize};

/// Result attributes requested for every search.
const RESOURCES: &[&str] = &[
    "Images.Primary.Medium",
    "ItemInfo.Title",
    "ItemInfo.ProductInfo",
];

/// Number of items requested per search.
const ITEM_COUNT: u32 = 3;

/// A single normalized product record.
///
/// Ordering of records follows the vendor response; the vendor determines
/// rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductResult {
    /// Item title, with any embedded markup stripped.
    pub title: String,
    /// Detail page URL.
    pub url: String,
    /// Medium-size primary image URL, absent when the vendor omits it.
    pub image_url: Option<String>,
}

/// SearchClient issues signed `SearchItems` calls and normalizes the
/// response.
///
/// Each call is independent: one signing pass, one round trip, no state
/// shared between calls beyond the credential cached inside the signer.
/// Cloning is cheap and clones may be used concurrently.
#[derive(Clone, Debug)]
pub struct SearchClient {
    ctx: Context,
    signer: Signer<Credential>,

    host: String,
    marketplace: String,
}

impl SearchClient {
    /// Create a new search client.
    ///
    /// The signer decides region and credentials; host and marketplace
    /// default to the Japanese marketplace and can be overridden.
    pub fn new(ctx: Context, signer: Signer<Credential>) -> Self {
        Self {
            ctx,
            signer,
            host: DEFAULT_HOST.to_string(),
            marketplace: DEFAULT_MARKETPLACE.to_string(),
        }
    }

    /// Override the API host.
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Override the marketplace sent in the payload.
    pub fn with_marketplace(mut self, marketplace: &str) -> Self {
        self.marketplace = marketplace.to_string();
        self
    }

    /// Search products matching the given keywords.
    ///
    /// Returns an empty list when the vendor reports no matches; that is
    /// not an error. An empty query short-circuits to an empty list
    /// without a network round trip.
    pub async fn search(&self, keywords: &str) -> Result<Vec<ProductResult>> {
        if keywords.trim().is_empty() {
            return Ok(Vec::new());
        }

        let Some(credential) = self.signer.credential().await? else {
            return Err(Error::config_invalid(
                "no valid credential found, check the configured providers",
            ));
        };

        let payload = SearchItemsPayload {
            keywords,
            resources: RESOURCES,
            search_index: "All",
            item_count: ITEM_COUNT,
            partner_tag: &credential.partner_tag,
            partner_type: "Associates",
            marketplace: &self.marketplace,
        };
        let body = Bytes::from(
            serde_json::to_vec(&payload)
                .map_err(|e| Error::unexpected("serializing payload failed").with_source(e))?,
        );

        let req = Request::post(format!("https://{}{}", self.host, SEARCH_ITEMS_PATH))
            .header(header::CONTENT_ENCODING, CONTENT_ENCODING_AMZ)
            .header(header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(X_AMZ_TARGET, SEARCH_ITEMS_TARGET)
            .body(())?;
        let (mut parts, _) = req.into_parts();

        // Signing samples the timestamp, so the request goes out right
        // after this call while the signature is fresh.
        self.signer.sign(&mut parts, &body).await?;

        let resp = self
            .ctx
            .http_send(Request::from_parts(parts, body))
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = String::from_utf8_lossy(resp.body());
            return Err(if body.trim().is_empty() {
                Error::remote_rejected(format!("search rejected with status {status}"))
            } else {
                Error::remote_rejected(body.into_owned())
            });
        }

        let parsed: SearchItemsResponse = serde_json::from_slice(resp.body())
            .map_err(|e| Error::unexpected("decoding search response failed").with_source(e))?;

        let items = parsed
            .search_result
            .map(|sr| sr.items)
            .unwrap_or_default();
        debug!("search returned {} items", items.len());

        Ok(items.into_iter().map(ProductResult::from).collect())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SearchItemsPayload<'a> {
    keywords: &'a str,
    resources: &'a [&'a str],
    search_index: &'a str,
    item_count: u32,
    partner_tag: &'a str,
    partner_type: &'a str,
    marketplace: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchItemsResponse {
    search_result: Option<SearchResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchResult {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Item {
    #[serde(rename = "DetailPageURL", default)]
    detail_page_url: String,
    item_info: Option<ItemInfo>,
    images: Option<Images>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ItemInfo {
    title: Option<Title>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Title {
    display_value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Images {
    primary: Option<ImageSet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ImageSet {
    medium: Option<Image>,
}

#[derive(Debug, Deserialize)]
struct Image {
    #[serde(rename = "URL")]
    url: Option<String>,
}

impl From<Item> for ProductResult {
    fn from(item: Item) -> Self {
        let title = item
            .item_info
            .and_then(|info| info.title)
            .and_then(|t| t.display_value)
            .map(|t| strip_markup(&t))
            .unwrap_or_default();
        let image_url = item
            .images
            .and_then(|i| i.primary)
            .and_then(|p| p.medium)
            .and_then(|m| m.url);

        ProductResult {
            title,
            url: item.detail_page_url,
            image_url,
        }
    }
}

/// Remove `<...>` markup from a title, keeping the text between tags.
fn strip_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
