//! Storyboard pipeline: free-form text is reformatted into a screenplay,
//! parsed into an ordered scene collection, and each scene gets media from a
//! generation backend. The formatter and parser are pure and total; only the
//! backend call and the storage boundary can fail.

pub mod api;
pub mod error;
pub mod scene;
pub mod script;
pub mod storage;

pub use error::{Result, StoryboardError};
