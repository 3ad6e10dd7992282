/// Build the URL for a service endpoint under `api_base_url`.
///
/// The service name is percent-encoded as a single path segment, and each
/// parameter value is percent-encoded independently (a space becomes `%20`).
/// Parameter keys are emitted as-is; callers in this crate only use plain
/// ASCII identifiers. With no parameters the result is `{base}/{service}`,
/// otherwise `{base}/{service}?k1=v1&k2=v2...` in slice order.
///
/// Trailing slashes on `api_base_url` are stripped so the join is always
/// exactly one `/`. The slice order is an implementation detail of the call
/// site, not a contract of the resulting URL.
pub fn service_url(api_base_url: &str, service: &str, params: &[(&str, &str)]) -> String {
    let base = api_base_url.trim_end_matches('/');
    let mut url = format!("{}/{}", base, urlencoding::encode(service));

    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }

    url
}
