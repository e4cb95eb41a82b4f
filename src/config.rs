//! Loads the generator's [`Config`]. Settings come from three layers, each
//! overriding the last: built-in defaults, an optional `gistlog.yaml`
//! project file, and command-line flags ([`Overrides`]).

use crate::page::Site;
use crate::tag::TagVocabulary;
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use url::Url;

/// The name of the project file searched for by [`Config::from_directory`].
pub const PROJECT_FILE: &str = "gistlog.yaml";

const DEFAULT_POSTS: &str = "posts";
const DEFAULT_SITE: &str = "site";
const DEFAULT_TAGS: &str = "java,jvm,lambda";
const DEFAULT_TITLE: &str = "Blog";
const DEFAULT_SITE_URL: &str = "http://localhost/";
const DEFAULT_COMMENTS_URL: &str = "https://gist.github.com/";

/// The contents of a project file. Every field is optional.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct Project {
    #[serde(default)]
    posts: Option<PathBuf>,

    #[serde(default)]
    site: Option<PathBuf>,

    /// A comma-separated list, e.g. `java,jvm,lambda`.
    #[serde(default)]
    tags: Option<String>,

    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    description: Option<String>,

    #[serde(default)]
    site_url: Option<Url>,

    #[serde(default)]
    comments_url: Option<Url>,
}

/// Settings given on the command line. These take precedence over the
/// project file.
#[derive(Default)]
pub struct Overrides {
    pub posts: Option<PathBuf>,
    pub site: Option<PathBuf>,
    pub tags: Option<String>,
}

/// The resolved configuration for a run.
#[derive(Debug)]
pub struct Config {
    /// The directory searched (recursively) for post source files.
    pub posts_directory: PathBuf,

    /// The directory the generated site is written to.
    pub site_directory: PathBuf,

    /// The words which are recognized as tags.
    pub tags: TagVocabulary,

    /// The blog-wide settings rendered into every page and the feed.
    pub site: Site,
}

impl Config {
    /// Builds a [`Config`] from `gistlog.yaml` in `dir` or the nearest parent
    /// directory which has one. If there is no project file at all, the
    /// defaults are used.
    pub fn from_directory(dir: &Path, overrides: Overrides) -> Result<Config> {
        let path = dir.join(PROJECT_FILE);
        if path.is_file() {
            Config::from_project_file(&path, overrides)
        } else {
            match dir.parent() {
                Some(parent) => Config::from_directory(parent, overrides),
                None => Ok(Config::resolve(Project::default(), Path::new(""), overrides)),
            }
        }
    }

    /// Builds a [`Config`] from the project file at `path`. Relative `posts`
    /// and `site` directories are resolved against the file's directory.
    pub fn from_project_file(path: &Path, overrides: Overrides) -> Result<Config> {
        let file = File::open(path).map_err(|err| Error::Open {
            path: path.to_owned(),
            err,
        })?;
        let project: Project = serde_yaml::from_reader(file).map_err(|err| Error::Yaml {
            path: path.to_owned(),
            err,
        })?;
        let root = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Config::resolve(project, root, overrides))
    }

    fn resolve(project: Project, root: &Path, overrides: Overrides) -> Config {
        let Project {
            posts,
            site,
            tags,
            title,
            description,
            site_url,
            comments_url,
        } = project;

        Config {
            posts_directory: overrides
                .posts
                .unwrap_or_else(|| root.join(posts.unwrap_or_else(|| DEFAULT_POSTS.into()))),
            site_directory: overrides
                .site
                .unwrap_or_else(|| root.join(site.unwrap_or_else(|| DEFAULT_SITE.into()))),
            tags: TagVocabulary::parse(
                overrides
                    .tags
                    .as_deref()
                    .or_else(|| tags.as_deref())
                    .unwrap_or(DEFAULT_TAGS),
            ),
            site: Site {
                title: title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
                description: description.unwrap_or_default(),
                url: directory_url(site_url, DEFAULT_SITE_URL),
                comments_url: directory_url(comments_url, DEFAULT_COMMENTS_URL),
            },
        }
    }
}

// Relative URLs are joined onto these, so they must end in a slash or the
// last path segment is dropped.
fn directory_url(url: Option<Url>, default: &str) -> Url {
    let mut url = match url {
        Some(url) => url,
        None => Url::parse(default).unwrap(), // defaults are valid URLs
    };
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Represents the result of loading a [`Config`].
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error loading a [`Config`].
#[derive(Debug)]
pub enum Error {
    /// Returned when the project file can't be opened.
    Open { path: PathBuf, err: std::io::Error },

    /// Returned when the project file isn't valid YAML or has invalid
    /// settings (e.g., a malformed URL).
    Yaml {
        path: PathBuf,
        err: serde_yaml::Error,
    },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Open { path, err } => {
                write!(f, "Opening project file '{}': {}", path.display(), err)
            }
            Error::Yaml { path, err } => {
                write!(f, "Loading project file '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { err, .. } => Some(err),
            Error::Yaml { err, .. } => Some(err),
        }
    }
}
