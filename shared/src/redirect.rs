use crate::controller::SessionHandle;

pub const DEFAULT_REDIRECT: &str = "/dashboard";

/// Where to send a logged-in user, given the page's query string (with or
/// without the leading `?`). `?path=settings` leads to `/settings`.
pub fn redirect_target(query: &str, default: &str) -> String {
    match path_param(query) {
        Some(path) => format!("/{path}"),
        None => default.to_string(),
    }
}

/// The page to leave for, or `None` while the session is logged out and the
/// form should be shown.
pub fn redirect_for(session: &impl SessionHandle, query: &str, default: &str) -> Option<String> {
    session
        .is_logged_in()
        .then(|| redirect_target(query, default))
}

fn path_param(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let raw = query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find_map(|(key, value)| (key == "path").then_some(value))?;

    // Form encoding uses '+' for spaces.
    let raw = raw.replace('+', " ");
    let decoded = match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            log::warn!("Ignoring undecodable redirect path {raw:?}: {e}");
            return None;
        }
    };

    // Browsers read '\\' as '/' and drop tabs and newlines, either of which
    // can turn the target into a protocol-relative URL.
    if decoded.contains('\\') || decoded.chars().any(char::is_control) {
        log::warn!("Ignoring redirect path {decoded:?}");
        return None;
    }

    let trimmed = decoded.trim().trim_start_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
