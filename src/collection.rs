//! Defines [`SiteCollection`], the ordered set of every post on the site,
//! and [`collect_posts`] which builds it by walking the posts directory.

use crate::post::{self, PostSource, MARKDOWN_EXTENSION};
use chrono::NaiveDate;
use std::cmp::Reverse;
use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Every post on the site keyed by publication date, most recent first. The
/// index page and the RSS feed are both built in this order.
#[derive(Debug, Default)]
pub struct SiteCollection(BTreeMap<Reverse<NaiveDate>, PostSource>);

impl SiteCollection {
    pub fn new() -> SiteCollection {
        SiteCollection::default()
    }

    /// Adds `post` to the collection. Publication dates are the collection's
    /// keys, so adding a second post with an already-taken date fails.
    pub fn insert(&mut self, post: PostSource) -> Result<()> {
        match self.0.entry(Reverse(post.metadata.date)) {
            Entry::Occupied(entry) => Err(Error::DuplicateDate {
                date: post.metadata.date,
                first: entry.get().path.clone(),
                second: post.path,
            }),
            Entry::Vacant(entry) => {
                entry.insert(post);
                Ok(())
            }
        }
    }

    /// Iterates over the posts from most to least recent.
    pub fn iter(&self) -> impl Iterator<Item = &PostSource> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Searches `source_directory` (recursively) for post files (extension =
/// `.md`) and returns them as a [`SiteCollection`]. Every post file name must
/// be of the form `{year}-{month}-{day}-{gist}-{title}.md`; the first file
/// that isn't aborts the search. Other files are ignored.
pub fn collect_posts(source_directory: &Path) -> Result<SiteCollection> {
    let mut posts = SiteCollection::new();
    for result in WalkDir::new(source_directory) {
        let entry = result?;
        if !entry.file_type().is_file()
            || !entry
                .file_name()
                .to_string_lossy()
                .ends_with(MARKDOWN_EXTENSION)
        {
            continue;
        }

        let post = PostSource::from_path(entry.path())?;
        debug!(
            path = %post.path.display(),
            date = %post.metadata.date,
            "found post"
        );
        posts.insert(post)?;
    }
    Ok(posts)
}

/// Represents the result of collecting posts.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error collecting posts.
#[derive(Debug)]
pub enum Error {
    /// Returned when a post's file name can't be parsed.
    Post(post::Error),

    /// Returned when two posts have the same publication date.
    DuplicateDate {
        date: NaiveDate,
        first: PathBuf,
        second: PathBuf,
    },

    /// Returned for I/O errors while walking the posts directory.
    Walk(walkdir::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Post(err) => err.fmt(f),
            Error::DuplicateDate {
                date,
                first,
                second,
            } => write!(
                f,
                "Posts `{}` and `{}` share the date {}",
                first.display(),
                second.display(),
                date
            ),
            Error::Walk(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Post(err) => Some(err),
            Error::DuplicateDate { .. } => None,
            Error::Walk(err) => Some(err),
        }
    }
}

impl From<post::Error> for Error {
    /// Converts a [`post::Error`] into an [`Error`]. This allows us to use
    /// the `?` operator when parsing post file names.
    fn from(err: post::Error) -> Error {
        Error::Post(err)
    }
}

impl From<walkdir::Error> for Error {
    /// Converts a [`walkdir::Error`] into an [`Error`]. This allows us to
    /// use the `?` operator while walking the posts directory.
    fn from(err: walkdir::Error) -> Error {
        Error::Walk(err)
    }
}
