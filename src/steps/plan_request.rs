//! Turns a live attribute value into an absolute request URL.

/// Absolute `http`/`https` URIs pass through, whatever the scheme's case; root-relative ones
/// get the API origin prepended. Anything else (or a relative URI with no origin) is `None`.
pub fn plan_request(uri: &str, api: Option<&str>) -> Option<String> {
  let uri = uri.trim();
  if has_http_scheme(uri) {
    return Some(uri.to_string());
  }
  if uri.starts_with('/') {
    let origin = api?.trim().trim_end_matches('/');
    if origin.is_empty() {
      return None;
    }
    return Some(format!("{origin}{uri}"));
  }
  None
}

fn has_http_scheme(uri: &str) -> bool {
  ["http://", "https://"].iter().any(|scheme| {
    uri
      .get(..scheme.len())
      .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
  })
}
