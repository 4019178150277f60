//! Discovery handlers: searching events and showcase posts.

mod search;

pub use search::{
    SearchEventsHandler, SearchEventsQuery, SearchPostsHandler, SearchPostsQuery,
};
