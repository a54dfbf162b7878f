//! The collection store: one ordered, process-wide sequence of posts addressed
//! by zero-based position.
//!
//! Positions are not stable identifiers. Removing a post shifts every later
//! post one position earlier, and new posts are always appended at the end.

use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use crate::models::{Post, PostPatch};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no post at index {index} (collection holds {len})")]
    NotFound { index: usize, len: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Shared handle on the post collection.
///
/// Cloning is cheap and every clone sees the same collection. Each operation
/// holds the lock for its whole duration, so the bounds check and the access it
/// guards cannot be separated by another request.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Arc<Mutex<Vec<Post>>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Post>> {
        self.posts.lock().expect("post store lock poisoned")
    }

    /// Append a post and return a snapshot of the whole collection.
    pub fn append(&self, post: Post) -> Vec<Post> {
        let mut posts = self.lock();
        posts.push(post);
        posts.clone()
    }

    pub fn all(&self) -> Vec<Post> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn get(&self, index: usize) -> StoreResult<Post> {
        let posts = self.lock();
        posts
            .get(index)
            .cloned()
            .ok_or(StoreError::NotFound {
                index,
                len: posts.len(),
            })
    }

    /// Overwrite the post at `index` wholesale.
    pub fn replace(&self, index: usize, post: Post) -> StoreResult<Post> {
        let mut posts = self.lock();
        let len = posts.len();
        let slot = posts
            .get_mut(index)
            .ok_or(StoreError::NotFound { index, len })?;
        *slot = post;
        Ok(slot.clone())
    }

    /// Merge a partial document into the post at `index`.
    pub fn patch(&self, index: usize, patch: PostPatch) -> StoreResult<Post> {
        let mut posts = self.lock();
        let len = posts.len();
        let slot = posts
            .get_mut(index)
            .ok_or(StoreError::NotFound { index, len })?;
        slot.apply(patch);
        Ok(slot.clone())
    }

    /// Remove the post at `index`, compacting the collection.
    pub fn remove(&self, index: usize) -> StoreResult<Post> {
        let mut posts = self.lock();
        let len = posts.len();
        if index >= len {
            return Err(StoreError::NotFound { index, len });
        }
        Ok(posts.remove(index))
    }
}
