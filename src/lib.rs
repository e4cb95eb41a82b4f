//! The library code for the `gistlog` static blog generator. Posts are
//! Markdown files whose names carry all of their metadata
//! (`{year}-{month}-{day}-{gist}-{title}.md`). The architecture can be
//! broken down into three steps:
//!
//! 1. Collecting posts from the posts directory, ordered newest first
//!    ([`crate::collection`], [`crate::post`])
//! 2. Rendering each post: discovering its tags ([`crate::tag`]), converting
//!    its Markdown ([`crate::markdown`]), and summarizing it
//!    ([`crate::summary`])
//! 3. Emitting one page per post, the index page, and the RSS feed
//!    ([`crate::build`], [`crate::page`], [`crate::feed`]) to a
//!    [`crate::sink::Sink`]
//!
//! Every step runs sequentially and the first error aborts the build.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod collection;
pub mod config;
pub mod feed;
pub mod markdown;
pub mod page;
pub mod post;
pub mod sink;
pub mod summary;
pub mod tag;
