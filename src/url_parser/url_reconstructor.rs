use tracing::{debug, trace};
use url::form_urlencoded;

use super::component::{UrlComponent, UrlPartType};

/// Finds the first enabled component of the given type
fn first_enabled(parts: &[UrlComponent], part_type: UrlPartType) -> Option<&UrlComponent> {
    parts.iter().find(|p| p.part_type == part_type && p.is_enabled)
}

/// Rebuilds a URL string from the enabled components
///
/// Components are looked up by type rather than by list position, so the
/// output layout is fixed: protocol, credentials, host, port, path, query,
/// fragment. Each piece contributes its own separators and nothing is
/// inserted between pieces, so a disabled hostname with an enabled port
/// yields `https://:8080/...`.
///
/// A password is only written after an enabled username. On its own it is
/// dropped together with the `@`.
///
/// # Arguments
/// * `parts` - Component list as produced by the parser and edited by the caller
///
/// # Returns
/// * `String` - The reconstructed URL, empty when nothing is enabled
pub fn reconstruct_url(parts: &[UrlComponent]) -> String {
    let mut built = String::new();

    if let Some(protocol) = first_enabled(parts, UrlPartType::Protocol) {
        built.push_str(&protocol.value);
        if protocol.value.ends_with(':') {
            built.push_str("//");
        }
    }

    if let Some(username) = first_enabled(parts, UrlPartType::Username) {
        built.push_str(&username.value);
        if let Some(password) = first_enabled(parts, UrlPartType::Password) {
            built.push(':');
            built.push_str(&password.value);
        }
        built.push('@');
    }

    if let Some(hostname) = first_enabled(parts, UrlPartType::Hostname) {
        built.push_str(&hostname.value);
    }

    if let Some(port) = first_enabled(parts, UrlPartType::Port) {
        built.push(':');
        built.push_str(&port.value);
    }

    if let Some(pathname) = first_enabled(parts, UrlPartType::Pathname) {
        built.push_str(&pathname.value);
    }

    if let Some(query) = build_query(parts) {
        built.push('?');
        built.push_str(&query);
    }

    if let Some(hash) = first_enabled(parts, UrlPartType::Hash) {
        built.push_str(&hash.value);
    }

    debug!("Reconstructed URL from {} components: {}", parts.len(), built);
    built
}

/// Serializes every enabled search component, in list order, as
/// `application/x-www-form-urlencoded`
///
/// Returns `None` when no search component is enabled.
pub fn build_query(parts: &[UrlComponent]) -> Option<String> {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut count = 0;

    for param in parts.iter().filter(|p| p.part_type == UrlPartType::Search && p.is_enabled) {
        let key = param.key.as_deref().unwrap_or_default();
        trace!("Appending query pair {}={}", key, param.value);
        serializer.append_pair(key, &param.value);
        count += 1;
    }

    (count > 0).then(|| serializer.finish())
}
