// tests/support/mocks.rs
use std::sync::Mutex;

use async_trait::async_trait;

use permaslug::{SlugError, SlugLookup, SlugResult, SluggedRecord};

/* -------------------------------- Post -------------------------------- */

/// Minimal persisted record with a slug field.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: Option<i64>,
    pub title: String,
    pub slug: Option<String>,
}

impl Post {
    pub fn draft(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            slug: None,
        }
    }
}

impl SluggedRecord for Post {
    type Id = i64;

    fn record_id(&self) -> Option<i64> {
        self.id
    }

    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    fn set_slug(&mut self, slug: String) {
        self.slug = Some(slug);
    }
}

/* -------------------------------- SlugLookup -------------------------------- */

/// In-memory post store answering `find_by_slug` probes.
#[derive(Default)]
pub struct InMemoryPosts {
    posts: Mutex<Vec<Post>>,
}

impl InMemoryPosts {
    pub fn insert(&self, post: &Post) {
        self.posts.lock().unwrap().push(post.clone());
    }
}

#[async_trait]
impl SlugLookup<Post> for InMemoryPosts {
    async fn find_by_slug(&self, candidate: &str) -> SlugResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug.as_deref() == Some(candidate))
            .cloned())
    }
}

/// Reports every candidate as taken by some other record.
pub struct SaturatedPosts;

#[async_trait]
impl SlugLookup<Post> for SaturatedPosts {
    async fn find_by_slug(&self, candidate: &str) -> SlugResult<Option<Post>> {
        Ok(Some(Post {
            id: Some(i64::MAX),
            title: "occupant".into(),
            slug: Some(candidate.to_owned()),
        }))
    }
}

/// Fails every probe, standing in for a broken storage backend.
pub struct BrokenPosts;

#[async_trait]
impl SlugLookup<Post> for BrokenPosts {
    async fn find_by_slug(&self, _candidate: &str) -> SlugResult<Option<Post>> {
        Err(SlugError::persistence("connection refused"))
    }
}
