//! URL-safe, unique, bounded-length slugs for persisted records.
//!
//! A [`SlugStage`] is configured once per record type and registered by the
//! host as a pre-save step. On each save it decides whether the slug is stale
//! (per the permanence policy), normalizes the source text, and resolves
//! collisions against existing records through a [`SlugLookup`].
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use permaslug::{SlugLookup, SlugStage, SluggedRecord, SlugResult};
//! # struct Post { id: Option<i64>, title: String, slug: Option<String> }
//! # impl SluggedRecord for Post {
//! #     type Id = i64;
//! #     fn record_id(&self) -> Option<i64> { self.id }
//! #     fn slug(&self) -> Option<&str> { self.slug.as_deref() }
//! #     fn set_slug(&mut self, slug: String) { self.slug = Some(slug); }
//! # }
//! # async fn demo(lookup: Arc<dyn SlugLookup<Post>>) -> SlugResult<()> {
//! let stage = SlugStage::builder(lookup)
//!     .source("title", |post: &Post| Some(post.title.clone()))
//!     .permanent(true)
//!     .max_length(50)
//!     .build()?;
//!
//! let mut post = Post { id: None, title: "Hot deals on Boxing Day".into(), slug: None };
//! stage.apply(&mut post).await?;
//! assert_eq!(post.slug.as_deref(), Some("hot-deals-on-boxing-day"));
//! # Ok(())
//! # }
//! ```

mod error;
mod escape;
mod policy;
mod record;
mod resolver;
mod stage;

pub use error::{SlugError, SlugResult};
pub use escape::{DefaultSlugEscaper, SlugEscaper, escape};
pub use policy::needs_regeneration;
pub use record::{SlugLookup, SluggedRecord};
pub use resolver::UniqueSlugResolver;
pub use stage::{DEFAULT_MAX_LENGTH, SlugOutcome, SlugStage, SlugStageBuilder};
