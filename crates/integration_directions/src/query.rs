//! Provider query URL construction

use url::Url;

use crate::error::DirectionsError;

const KEY_PARAM: &str = "key";

/// Build the request URL from a base endpoint, query pairs, and API key
///
/// Query parameters already present on `base` are kept, unless a pair with
/// the same key is set here. Pairs with blank values are skipped. The key
/// is always appended last.
///
/// # Errors
///
/// Returns [`DirectionsError::MissingApiKey`] for a blank key and
/// [`DirectionsError::InvalidUrl`] when `base` does not parse.
pub fn build_directions_url(
    base: &str,
    query: &[(&str, String)],
    api_key: &str,
) -> Result<Url, DirectionsError> {
    if api_key.trim().is_empty() {
        return Err(DirectionsError::MissingApiKey);
    }
    let mut url = Url::parse(base).map_err(|e| DirectionsError::InvalidUrl(e.to_string()))?;

    let set: Vec<(&str, &str)> = query
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (*key, value.as_str()))
        .collect();

    let preserved: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != KEY_PARAM && !set.iter().any(|(k, _)| k == key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(preserved)
        .extend_pairs(set)
        .append_pair(KEY_PARAM, api_key);

    Ok(url)
}

/// Render a URL for logging with the API key value masked
#[must_use]
pub fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == KEY_PARAM {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
