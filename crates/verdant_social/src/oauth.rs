//! OAuth 1.0a request signing (HMAC-SHA1).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// User-context credentials for a signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    /// Application (consumer) key
    pub consumer_key: String,
    /// Application (consumer) secret
    pub consumer_secret: String,
    /// User access token
    pub access_token: String,
    /// User access token secret
    pub access_secret: String,
}

/// RFC 3986 percent-encoding; only unreserved characters pass through.
///
/// # Examples
///
/// ```
/// use verdant_social::percent_encode;
///
/// assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
/// assert_eq!(percent_encode("a-b.c_d~e"), "a-b.c_d~e");
/// ```
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Builds the `Authorization` header for one request.
///
/// `params` are the query or form parameters that take part in the signature;
/// multipart and JSON bodies do not. `url` must not carry a query string.
///
/// # Errors
///
/// Returns an error if the signing key is rejected by the MAC.
pub fn authorization_header(
    credentials: &OAuthCredentials,
    method: &str,
    url: &str,
    params: &[(&str, &str)],
    nonce: &str,
    timestamp: i64,
) -> Result<String, String> {
    let timestamp = timestamp.to_string();
    let oauth_params = [
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_token", credentials.access_token.as_str()),
        ("oauth_version", "1.0"),
    ];

    let mut encoded: Vec<(String, String)> = oauth_params
        .iter()
        .chain(params.iter())
        .map(|(key, value)| (percent_encode(key), percent_encode(value)))
        .collect();
    encoded.sort();

    let parameter_string = encoded
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let base_string = format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(url),
        percent_encode(&parameter_string)
    );
    let signing_key = format!(
        "{}&{}",
        percent_encode(&credentials.consumer_secret),
        percent_encode(&credentials.access_secret)
    );

    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes()).map_err(|e| e.to_string())?;
    mac.update(base_string.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());

    let header = oauth_params
        .iter()
        .copied()
        .chain(std::iter::once(("oauth_signature", signature.as_str())))
        .map(|(key, value)| format!("{}=\"{}\"", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("OAuth {}", header))
}
