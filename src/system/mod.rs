//! Sharing a map between pipeline threads.
//!
//! Shots and landmarks hold no locks of their own. Pipelines that run stages
//! on several threads share the whole [`Map`](crate::map::Map) through
//! [`SharedMap`].

pub mod shared_state;

pub use shared_state::SharedMap;
