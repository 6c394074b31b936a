use crate::constants::{SERVICE, X_AMZ_DATE};
use crate::Credential;
use async_trait::async_trait;
use bytes::Bytes;
use http::request::Parts;
use http::{header, HeaderValue};
use log::debug;
use paapi_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use paapi_core::time::{format_date, format_iso8601, now, DateTime};
use paapi_core::{Context, Error, Result, SignRequest, SigningRequest};
use std::fmt::Write;

/// RequestSigner that implements AWS SigV4 for the Product Advertising API.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The service name is fixed to `ProductAdvertisingAPI`; only the region
/// varies between marketplaces.
#[derive(Debug)]
pub struct RequestSigner {
    service: String,
    region: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given region.
    pub fn new(region: &str) -> Self {
        Self {
            service: SERVICE.into(),
            region: region.into(),

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: &Bytes,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid("no credential to sign with"));
        };

        // The signed timestamp must match the transmitted date header, so
        // sample the clock here and nowhere else.
        let now = self.time.unwrap_or_else(now);
        let mut signed_req = SigningRequest::build(req)?;

        canonicalize_header(&mut signed_req, now)?;

        // Build canonical request and string to sign.
        let payload_hash = hex_sha256(body);
        let creq = canonical_request_string(&signed_req, &payload_hash)?;
        let encoded_req = hex_sha256(creq.as_bytes());

        // Scope: "20220313/<region>/ProductAdvertisingAPI/aws4_request"
        let scope = format!(
            "{}/{}/{}/aws4_request",
            format_date(now),
            self.region,
            self.service
        );
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20220313T072004Z
        // 20220313/<region>/ProductAdvertisingAPI/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "AWS4-HMAC-SHA256")?;
            writeln!(f, "{}", format_iso8601(now))?;
            writeln!(f, "{}", &scope)?;
            write!(f, "{}", &encoded_req)?;
            f
        };
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            generate_signing_key(&cred.secret_access_key, now, &self.region, &self.service);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let mut authorization = HeaderValue::from_str(&format!(
            "AWS4-HMAC-SHA256 Credential={}/{}, SignedHeaders={}, Signature={}",
            cred.access_key_id,
            scope,
            signed_req.header_name_to_vec_sorted().join(";"),
            signature
        ))?;
        authorization.set_sensitive(true);

        signed_req
            .headers
            .insert(header::AUTHORIZATION, authorization);

        // Apply to the request.
        signed_req.apply(req)
    }
}

/// Serialize the request into its canonical form.
///
/// Every header present at this point is a signed header. Sorting happens
/// here, so the caller's insertion order never reaches the signature.
fn canonical_request_string(ctx: &SigningRequest, payload_hash: &str) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    writeln!(f, "{}", ctx.method)?;
    // Insert path; the vendor path is fixed and already normalized, no
    // further encoding is applied.
    writeln!(f, "{}", ctx.path)?;
    // Insert query; always empty for this POST-only service, query
    // parameters are never signed.
    writeln!(
        f,
        "{}",
        ctx.query
            .iter()
            .map(|(k, v)| { format!("{k}={v}") })
            .collect::<Vec<_>>()
            .join("&")
    )?;
    // Insert signed headers, ascending lexical order of name.
    let signed_headers = ctx.header_name_to_vec_sorted();
    for name in signed_headers.iter() {
        let value = ctx.headers[*name].to_str()?;
        writeln!(f, "{name}:{value}")?;
    }
    writeln!(f)?;
    writeln!(f, "{}", signed_headers.join(";"))?;
    // Insert the payload digest.
    write!(f, "{payload_hash}")?;

    Ok(f)
}

fn canonicalize_header(ctx: &mut SigningRequest, now: DateTime) -> Result<()> {
    // Header values are trimmed before entering the canonical request.
    for (_, value) in ctx.headers.iter_mut() {
        SigningRequest::header_value_normalize(value)
    }

    // Insert HOST header if not present.
    if ctx.headers.get(header::HOST).is_none() {
        let host: HeaderValue = ctx.authority.as_str().parse()?;
        ctx.headers.insert(header::HOST, host);
    }

    // Insert DATE header if not present.
    if ctx.headers.get(X_AMZ_DATE).is_none() {
        let date_header = HeaderValue::try_from(format_iso8601(now))?;
        ctx.headers.insert(X_AMZ_DATE, date_header);
    }

    Ok(())
}

/// Derive the request-scoped signing key.
///
/// Each stage's output keys the next stage; the order is fixed and a
/// reversed chain produces a key that verifies against nothing.
fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), "aws4_request".as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        CONTENT_ENCODING_AMZ, CONTENT_TYPE_JSON, SEARCH_ITEMS_TARGET, X_AMZ_TARGET,
    };
    use anyhow::Result;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    const TEST_ACCESS_KEY: &str = "AKIDEXAMPLE";
    const TEST_SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY";

    const TEST_PAYLOAD: &str = "{\"Keywords\":\"coffee mug\",\"Resources\":[\"Images.Primary.Medium\",\"ItemInfo.Title\",\"ItemInfo.ProductInfo\"],\"SearchIndex\":\"All\",\"ItemCount\":3,\"PartnerTag\":\"demo-22\",\"PartnerType\":\"Associates\",\"Marketplace\":\"www.amazon.co.jp\"}";

    fn test_credential() -> Credential {
        Credential {
            access_key_id: TEST_ACCESS_KEY.to_string(),
            secret_access_key: TEST_SECRET_KEY.to_string(),
            partner_tag: "demo-22".to_string(),
        }
    }

    fn test_time() -> DateTime {
        chrono::Utc.with_ymd_and_hms(2022, 3, 13, 7, 20, 4).unwrap()
    }

    fn test_parts() -> Parts {
        let req = http::Request::post("https://webservices.amazon.co.jp/paapi5/searchitems")
            .header(header::CONTENT_ENCODING, CONTENT_ENCODING_AMZ)
            .header(header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(X_AMZ_TARGET, SEARCH_ITEMS_TARGET)
            .body(())
            .expect("request must be valid");
        req.into_parts().0
    }

    #[test]
    fn test_generate_signing_key() {
        // Derivation must be reproducible byte-for-byte for a fixed
        // (secret, date, region, service) tuple.
        let time = chrono::Utc.with_ymd_and_hms(2015, 8, 30, 0, 0, 0).unwrap();
        let key = generate_signing_key(TEST_SECRET_KEY, time, "us-east-1", "iam");
        assert_eq!(
            hex::encode(&key),
            "2c94c0cf5378ada6887f09bb697df8fc0affdb34ba1cdd5bda32b664bd55b73c"
        );
    }

    #[test]
    fn test_canonical_request_string() -> Result<()> {
        let mut parts = test_parts();
        let mut ctx = SigningRequest::build(&mut parts)?;
        canonicalize_header(&mut ctx, test_time())?;

        let creq = canonical_request_string(&ctx, &hex_sha256(TEST_PAYLOAD.as_bytes()))?;
        assert_eq!(
            creq,
            "POST\n\
             /paapi5/searchitems\n\
             \n\
             content-encoding:amz-1.0\n\
             content-type:application/json; charset=UTF-8\n\
             host:webservices.amazon.co.jp\n\
             x-amz-date:20220313T072004Z\n\
             x-amz-target:com.amazon.paapi5.v1.ProductAdvertisingAPIv1.SearchItems\n\
             \n\
             content-encoding;content-type;host;x-amz-date;x-amz-target\n\
             5c29da841473c140c4c7462dbad9b86b901ab576c823b9af6ab343a00411d889"
        );
        Ok(())
    }

    #[test]
    fn test_canonical_request_is_header_order_invariant() -> Result<()> {
        let mut shuffled = http::Request::post("https://webservices.amazon.co.jp/paapi5/searchitems")
            .header(X_AMZ_TARGET, SEARCH_ITEMS_TARGET)
            .header(header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(header::CONTENT_ENCODING, CONTENT_ENCODING_AMZ)
            .body(())?
            .into_parts()
            .0;
        let mut ordered = test_parts();

        let payload_hash = hex_sha256(TEST_PAYLOAD.as_bytes());

        let mut a = SigningRequest::build(&mut shuffled)?;
        canonicalize_header(&mut a, test_time())?;
        let mut b = SigningRequest::build(&mut ordered)?;
        canonicalize_header(&mut b, test_time())?;

        assert_eq!(
            canonical_request_string(&a, &payload_hash)?,
            canonical_request_string(&b, &payload_hash)?
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_reference_signature() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut parts = test_parts();
        let body = Bytes::from_static(TEST_PAYLOAD.as_bytes());

        let signer = RequestSigner::new("us-west-2").with_time(test_time());
        signer
            .sign_request(&Context::new(), &mut parts, &body, Some(&test_credential()))
            .await?;

        assert_eq!(
            parts.headers.get(X_AMZ_DATE).unwrap(),
            &HeaderValue::from_static("20220313T072004Z")
        );
        assert_eq!(
            parts.headers.get(header::AUTHORIZATION).unwrap().to_str()?,
            "AWS4-HMAC-SHA256 \
             Credential=AKIDEXAMPLE/20220313/us-west-2/ProductAdvertisingAPI/aws4_request, \
             SignedHeaders=content-encoding;content-type;host;x-amz-date;x-amz-target, \
             Signature=f3c7644ff69f77937e1415d41687c260dcb085244070055154d27d1f8772c205"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_body_change_changes_signature() -> Result<()> {
        let signer = RequestSigner::new("us-west-2").with_time(test_time());
        let cred = test_credential();

        let mut parts_a = test_parts();
        signer
            .sign_request(
                &Context::new(),
                &mut parts_a,
                &Bytes::from_static(TEST_PAYLOAD.as_bytes()),
                Some(&cred),
            )
            .await?;

        let mut tweaked = TEST_PAYLOAD.to_string().into_bytes();
        *tweaked.last_mut().unwrap() = b' ';
        let mut parts_b = test_parts();
        signer
            .sign_request(&Context::new(), &mut parts_b, &Bytes::from(tweaked), Some(&cred))
            .await?;

        assert_ne!(
            parts_a.headers.get(header::AUTHORIZATION),
            parts_b.headers.get(header::AUTHORIZATION)
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_without_credential_fails() {
        let signer = RequestSigner::new("us-west-2");
        let mut parts = test_parts();
        let res = signer
            .sign_request(&Context::new(), &mut parts, &Bytes::new(), None)
            .await;
        assert!(res.is_err());
    }
}
