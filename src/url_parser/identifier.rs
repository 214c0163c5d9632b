use rand::{thread_rng, Rng};
use std::collections::HashSet;
use tracing::trace;

use super::component::UrlComponent;

const ID_LENGTH: usize = 7;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a short opaque id for a component
///
/// Ids only need to be unique within one component list and are never
/// security sensitive, so a thread-local RNG is plenty.
pub fn generate_id() -> String {
    let mut rng = thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Re-rolls any id that already appeared earlier in the list
///
/// # Arguments
/// * `parts` - Component list whose ids must end up pairwise distinct
///
/// # Returns
/// * `usize` - Number of ids that had to be regenerated
pub fn ensure_unique_ids(parts: &mut [UrlComponent]) -> usize {
    let mut seen = HashSet::with_capacity(parts.len());
    let mut regenerated = 0;

    for part in parts.iter_mut() {
        while !seen.insert(part.id.clone()) {
            trace!("Id collision on {}, regenerating", part.id);
            part.id = generate_id();
            regenerated += 1;
        }
    }

    regenerated
}
