//! Domain models for the posts service.
//!
//! - [`Post`]: a record in the collection, with a title, body and embedded [`Author`].
//!   A post carries no identifier of its own; its identity is its current position
//!   in the [`PostStore`](crate::store::PostStore).
//! - [`PostPatch`]: a partially-specified post used for in-place merges.

mod post;

pub use post::*;
