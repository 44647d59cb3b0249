// src/policy.rs

/// Decide whether a save needs a fresh slug.
///
/// Regeneration is skipped when the slug is permanent and already set, or
/// when there is nothing to slugify (absent or empty source). Otherwise
/// non-permanent slugs refresh on every save; permanent slugs are generated
/// once and frozen.
pub fn needs_regeneration(
    permanent: bool,
    current_slug: Option<&str>,
    source: Option<&str>,
) -> bool {
    if permanent && current_slug.is_some_and(|s| !s.is_empty()) {
        return false;
    }
    if source.is_none_or(str::is_empty) {
        return false;
    }
    true
}
