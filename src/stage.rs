// src/stage.rs
use std::sync::Arc;

use crate::error::{SlugError, SlugResult};
use crate::escape::{DefaultSlugEscaper, SlugEscaper};
use crate::policy::needs_regeneration;
use crate::record::{SlugLookup, SluggedRecord};
use crate::resolver::UniqueSlugResolver;

pub const DEFAULT_MAX_LENGTH: usize = 50;

type SourceFn<R> = Arc<dyn Fn(&R) -> SlugResult<Option<String>> + Send + Sync>;

/// What a stage invocation did to the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugOutcome {
    Generated(String),
    Skipped,
}

/// Pre-save pipeline stage that keeps a record's slug populated.
///
/// The host registers [`SlugStage::apply`] to run synchronously before the
/// record is validated or persisted. The stage mutates only the slug field;
/// committing it is the enclosing save's responsibility.
pub struct SlugStage<R: SluggedRecord> {
    source_name: String,
    source: SourceFn<R>,
    permanent: bool,
    max_length: usize,
    escaper: Arc<dyn SlugEscaper>,
    resolver: UniqueSlugResolver<R>,
}

impl<R: SluggedRecord> std::fmt::Debug for SlugStage<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlugStage")
            .field("source_name", &self.source_name)
            .field("permanent", &self.permanent)
            .field("max_length", &self.max_length)
            .finish_non_exhaustive()
    }
}

impl<R: SluggedRecord> SlugStage<R> {
    pub fn builder(lookup: Arc<dyn SlugLookup<R>>) -> SlugStageBuilder<R> {
        SlugStageBuilder::new(lookup)
    }

    /// Regenerate the record's slug if the permanence policy calls for it.
    pub async fn apply(&self, record: &mut R) -> SlugResult<SlugOutcome> {
        let source = (self.source)(record)?;

        if !needs_regeneration(self.permanent, record.slug(), source.as_deref()) {
            tracing::debug!(source = %self.source_name, "slug regeneration skipped");
            return Ok(SlugOutcome::Skipped);
        }

        let base = self.escaper.escape(&source.unwrap_or_default());
        let slug = self
            .resolver
            .resolve(&base, self.max_length, record, None)
            .await?;
        record.set_slug(slug.clone());
        tracing::debug!(source = %self.source_name, slug = %slug, "slug generated");
        Ok(SlugOutcome::Generated(slug))
    }

    /// Re-resolve after the enclosing save hit a storage-level uniqueness
    /// violation on `conflicting`. Two records can race to the same candidate
    /// between lookup and commit; this path steps past the lost candidate.
    /// The host should call it once and surface the original error if the
    /// retried save still fails.
    pub async fn retry_after_conflict(
        &self,
        record: &mut R,
        conflicting: &str,
    ) -> SlugResult<SlugOutcome> {
        let source = (self.source)(record)?;
        let Some(value) = source.filter(|s| !s.is_empty()) else {
            return Err(SlugError::invalid_source(format!(
                "source {:?} is empty; cannot re-resolve conflicting slug {conflicting:?}",
                self.source_name
            )));
        };

        tracing::warn!(
            source = %self.source_name,
            conflicting = %conflicting,
            "slug lost a uniqueness race at commit time; re-resolving"
        );

        let base = self.escaper.escape(&value);
        let slug = self
            .resolver
            .resolve(&base, self.max_length, record, Some(conflicting))
            .await?;
        record.set_slug(slug.clone());
        Ok(SlugOutcome::Generated(slug))
    }
}

pub struct SlugStageBuilder<R: SluggedRecord> {
    lookup: Arc<dyn SlugLookup<R>>,
    source: Option<(String, SourceFn<R>)>,
    permanent: bool,
    max_length: usize,
    max_attempts: u32,
    escaper: Arc<dyn SlugEscaper>,
}

impl<R: SluggedRecord> SlugStageBuilder<R> {
    fn new(lookup: Arc<dyn SlugLookup<R>>) -> Self {
        Self {
            lookup,
            source: None,
            permanent: true,
            max_length: DEFAULT_MAX_LENGTH,
            max_attempts: crate::resolver::DEFAULT_MAX_ATTEMPTS,
            escaper: Arc::new(DefaultSlugEscaper),
        }
    }

    /// Declare the accessor supplying the raw text to slugify. `name` is a
    /// diagnostic label (typically the field name).
    pub fn source<F>(self, name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> Option<String> + Send + Sync + 'static,
    {
        self.try_source(name, move |record| Ok(accessor(record)))
    }

    /// Like [`source`](Self::source), for accessors that can fail to read
    /// the record.
    pub fn try_source<F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> SlugResult<Option<String>> + Send + Sync + 'static,
    {
        self.source = Some((name.into(), Arc::new(accessor)));
        self
    }

    /// Whether the slug is frozen once set. Defaults to `true`.
    pub fn permanent(mut self, permanent: bool) -> Self {
        self.permanent = permanent;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Ceiling on collision probes before the resolver gives up.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn escaper(mut self, escaper: Arc<dyn SlugEscaper>) -> Self {
        self.escaper = escaper;
        self
    }

    /// Missing source declarations are a configuration error caught here,
    /// not at save time.
    pub fn build(self) -> SlugResult<SlugStage<R>> {
        let (source_name, source) = self
            .source
            .ok_or_else(|| SlugError::invalid_source("no source accessor configured"))?;

        Ok(SlugStage {
            source_name,
            source,
            permanent: self.permanent,
            max_length: self.max_length,
            escaper: self.escaper,
            resolver: UniqueSlugResolver::new(self.lookup).with_max_attempts(self.max_attempts),
        })
    }
}
