use crate::constants::FALLBACK_ORIGIN;

/// Join a public asset path onto the page origin.
///
/// `origin` is the page's `location.origin` when known; without one the local
/// development server is assumed.
pub fn resolve_asset_url(origin: Option<&str>, path: &str) -> String {
    let base = origin
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .unwrap_or(FALLBACK_ORIGIN)
        .trim_end_matches('/');
    let url = if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };
    log::debug!("[assets] resolving {} -> {}", path, url);
    url
}
