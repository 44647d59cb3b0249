use crate::error::SlugResult;
use async_trait::async_trait;

/// A persisted record carrying a slug field.
///
/// Identity is needed so the resolver can tell "the candidate is taken by me"
/// apart from "the candidate is taken by someone else". Records that have not
/// been persisted yet report `None` and collide with everything.
pub trait SluggedRecord {
    type Id: PartialEq;

    fn record_id(&self) -> Option<Self::Id>;
    fn slug(&self) -> Option<&str>;
    fn set_slug(&mut self, slug: String);

    /// Externally visible identifier, e.g. for a URL path segment.
    fn to_param(&self) -> Option<&str> {
        self.slug()
    }
}

/// Query capability the resolver probes during collision search. The lookup
/// must not exclude anything itself; self-exclusion happens in the resolver.
#[async_trait]
pub trait SlugLookup<R: SluggedRecord>: Send + Sync {
    async fn find_by_slug(&self, candidate: &str) -> SlugResult<Option<R>>;
}
