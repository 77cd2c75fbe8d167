//! Query-string rewriting for paginated API URLs.

use url::{form_urlencoded, Url};

/// Sets `key=value` in the query of `raw`, returning the new URL.
///
/// The first occurrence of `key` is replaced in place and later repeats are
/// dropped; if the key is missing the pair is appended. Every other query
/// segment is kept byte for byte, along with scheme, host, path and fragment.
pub fn set_query_param(raw: &str, key: &str, value: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(raw)?;

    let replacement = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();

    let mut segments: Vec<&str> = Vec::new();
    let mut replaced = false;

    let query = url.query().unwrap_or("").to_string();
    for segment in query.split('&').filter(|s| !s.is_empty()) {
        if segment_key(segment) == key {
            if !replaced {
                segments.push(&replacement);
                replaced = true;
            }
            continue;
        }
        segments.push(segment);
    }

    if !replaced {
        segments.push(&replacement);
    }

    url.set_query(Some(&segments.join("&")));
    Ok(url.to_string())
}

/// Decoded name of one `name=value` query segment.
fn segment_key(segment: &str) -> String {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .map(|(k, _)| k.into_owned())
        .unwrap_or_default()
}
