// src/resolver.rs
use std::sync::Arc;

use crate::error::{SlugError, SlugResult};
use crate::record::{SlugLookup, SluggedRecord};

pub(crate) const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Turns a normalized base candidate into a slug that is unique among
/// existing records, excluding the record being saved.
pub struct UniqueSlugResolver<R: SluggedRecord> {
    lookup: Arc<dyn SlugLookup<R>>,
    max_attempts: u32,
}

impl<R: SluggedRecord> UniqueSlugResolver<R> {
    pub fn new(lookup: Arc<dyn SlugLookup<R>>) -> Self {
        Self {
            lookup,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Resolve a unique slug for `record` from `base_candidate`.
    ///
    /// The base is truncated to `max_length` characters first. If the result
    /// already equals the record's stored slug the stored slug is returned
    /// without any collision search, so an unchanged record re-saves to the
    /// same slug and never collides with itself.
    ///
    /// Colliding candidates get a `-2`, `-3`, ... suffix, with the base
    /// re-truncated so the suffixed candidate still fits `max_length`. When
    /// `max_length` is smaller than the suffix the candidate degenerates to
    /// just the suffix, which is accepted. `exclude` marks one candidate as
    /// taken regardless of what the lookup says; the conflict-retry path uses
    /// it to step past a slug that lost a storage-level uniqueness race.
    pub async fn resolve(
        &self,
        base_candidate: &str,
        max_length: usize,
        record: &R,
        exclude: Option<&str>,
    ) -> SlugResult<String> {
        let base = truncate_chars(base_candidate, max_length);

        if record.slug() == Some(base) && exclude != Some(base) {
            return Ok(base.to_owned());
        }

        let mut candidate = base.to_owned();
        let mut counter: u32 = 1;

        for _ in 0..self.max_attempts {
            if exclude != Some(candidate.as_str()) {
                match self.lookup.find_by_slug(&candidate).await? {
                    None => return Ok(candidate),
                    Some(existing) => {
                        let is_self = match (record.record_id(), existing.record_id()) {
                            (Some(a), Some(b)) => a == b,
                            _ => false,
                        };
                        if is_self {
                            return Ok(candidate);
                        }
                    }
                }
            }

            counter += 1;
            let suffix = format!("-{counter}");
            let room = max_length.saturating_sub(suffix.len());
            candidate = format!("{}{}", truncate_chars(base, room), suffix);
        }

        Err(SlugError::Exhausted {
            base: base.to_owned(),
            attempts: self.max_attempts,
        })
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn truncates_by_character_count() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd");
        assert_eq!(truncate_chars("abc", 4), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
