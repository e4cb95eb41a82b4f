//! Defines [`PostMetadata`], [`PostSource`], and the logic for decoding a
//! post's metadata from its file name. Post files are named
//! `{year}-{month}-{day}-{gist}-{title}.md`, e.g.
//! `2021-03-10-42-Hello_World.md`. The file name is the only place post
//! metadata lives; there is no frontmatter.

use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};

/// The extension for post source files.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// The number of hyphen-separated components in a post file name.
const COMPONENTS: usize = 5;

/// The metadata for a post, derived from its file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostMetadata {
    /// The publication date. This is also the post's ordering key.
    pub date: NaiveDate,

    /// The identifier of the gist which hosts the post's comments. An empty
    /// gist component means the post takes no comments.
    pub gist: Option<String>,

    /// The title, i.e. the title slug with underscores replaced by spaces.
    pub title: String,

    /// The file name less its extension. Output pages are named
    /// `{permalink}.html`.
    pub permalink: String,
}

impl PostMetadata {
    /// Parses [`PostMetadata`] from a post's file name. A trailing `.md` is
    /// stripped before parsing; the remainder must split on `-` into exactly
    /// five components.
    pub fn from_file_name(file_name: &str) -> Result<PostMetadata> {
        let permalink = file_name
            .strip_suffix(MARKDOWN_EXTENSION)
            .unwrap_or(file_name);
        let components: Vec<&str> = permalink.split('-').collect();
        if components.len() != COMPONENTS {
            return Err(Error::Format {
                file_name: file_name.to_owned(),
                components: components.len(),
            });
        }

        let date = NaiveDate::parse_from_str(
            &format!("{}-{}-{}", components[0], components[1], components[2]),
            "%Y-%m-%d",
        )
        .map_err(|err| Error::InvalidDate {
            file_name: file_name.to_owned(),
            err,
        })?;

        Ok(PostMetadata {
            date,
            gist: match components[3] {
                "" => None,
                gist => Some(gist.to_owned()),
            },
            title: components[4].replace('_', " "),
            permalink: permalink.to_owned(),
        })
    }
}

/// A handle to a post's Markdown source file along with the metadata decoded
/// from its name.
#[derive(Clone, Debug)]
pub struct PostSource {
    /// The location of the source file on disk.
    pub path: PathBuf,

    /// The metadata parsed from the file name.
    pub metadata: PostMetadata,
}

impl PostSource {
    /// Creates a [`PostSource`] for the file at `path`, parsing its metadata
    /// from the file name.
    pub fn from_path(path: &Path) -> Result<PostSource> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::InvalidFileName(path.to_owned()))?;
        Ok(PostSource {
            path: path.to_owned(),
            metadata: PostMetadata::from_file_name(file_name)?,
        })
    }
}

/// Represents the result of parsing post metadata.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error decoding a post's metadata from its file name.
#[derive(Debug)]
pub enum Error {
    /// Returned when the file name doesn't split into exactly five
    /// hyphen-separated components.
    Format { file_name: String, components: usize },

    /// Returned when the first three components aren't a calendar date.
    InvalidDate {
        file_name: String,
        err: chrono::ParseError,
    },

    /// Returned when the file name isn't valid UTF-8.
    InvalidFileName(PathBuf),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Format {
                file_name,
                components,
            } => write!(
                f,
                "Wrong format for `{}`: wanted year-month-day-gist-title, \
                 found {} components",
                file_name, components
            ),
            Error::InvalidDate { file_name, err } => {
                write!(f, "Invalid date in `{}`: {}", file_name, err)
            }
            Error::InvalidFileName(path) => {
                write!(f, "Invalid file name: {:?}", path)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Format { .. } => None,
            Error::InvalidDate { err, .. } => Some(err),
            Error::InvalidFileName(_) => None,
        }
    }
}
