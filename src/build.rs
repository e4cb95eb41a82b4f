//! Exports the [`build_site`] function which stitches together the high-level
//! steps of building the output static site: collecting the posts
//! ([`crate::collection`]), rendering each post's page, and emitting the index
//! page and the RSS feed. Files are handed to a [`Sink`], which for
//! [`build_site`] is the site directory.

use crate::collection::{collect_posts, Error as CollectError, SiteCollection};
use crate::config::Config;
use crate::feed::{self, Entry};
use crate::markdown::{self, RenderedPost};
use crate::page::{Article, Site};
use crate::post::PostSource;
use crate::sink::{DirectorySink, Sink};
use crate::summary::{summary, Flavor};
use crate::tag::{TagSet, TagVocabulary};
use chrono::{Local, NaiveDate};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// The name of the index page in the output directory.
pub const INDEX_FILE: &str = "index.html";

/// The name of the RSS feed in the output directory.
pub const FEED_FILE: &str = "rss.xml";

/// Builds the site from a [`Config`] object: collects the posts from
/// [`Config::posts_directory`] and writes every page and the feed into
/// [`Config::site_directory`]. Files written before an error are left in
/// place.
pub fn build_site(config: &Config) -> Result<()> {
    debug!(?config, "building site");
    let posts = collect_posts(&config.posts_directory)?;
    info!(
        posts = posts.len(),
        directory = %config.posts_directory.display(),
        "collected posts"
    );
    if posts.is_empty() {
        warn!(
            directory = %config.posts_directory.display(),
            "no posts found; the index and feed will be empty"
        );
    }

    let builder = Builder {
        site: &config.site,
        tags: &config.tags,
        build_date: Local::now().naive_local().date(),
    };
    let mut sink = DirectorySink::new(&config.site_directory);
    info!(directory = %sink.root().display(), "writing site");
    builder.build(&posts, &mut sink)
}

/// Renders a [`SiteCollection`] into pages and a feed.
pub struct Builder<'a> {
    /// The blog-wide settings for pages and the feed.
    pub site: &'a Site,

    /// The words which are recognized as tags.
    pub tags: &'a TagVocabulary,

    /// The date the feed reports as its build and publication date.
    pub build_date: NaiveDate,
}

impl Builder<'_> {
    /// Writes one page per post, then the RSS feed and the index page. Index
    /// entries and feed items follow the collection's order (newest first).
    pub fn build<S: Sink>(&self, posts: &SiteCollection, sink: &mut S) -> Result<()> {
        let mut index: Vec<String> = Vec::with_capacity(posts.len());
        let mut items = Vec::with_capacity(posts.len());

        for post in posts.iter() {
            let (tags, rendered) = self.render_post(post)?;
            let metadata = &post.metadata;

            let file_name = format!("{}.html", metadata.permalink);
            let page = self.site.page(&self.site.article(&Article {
                title: &metadata.title,
                tags: &tags,
                date: metadata.date,
                gist: metadata.gist.as_deref(),
                permalink: &metadata.permalink,
                content: &rendered.html,
            }));
            persist(sink, &file_name, &page)?;
            let tag_list: Vec<&str> = tags.iter().collect();
            info!(post = %metadata.permalink, tags = ?tag_list, "written");

            index.push(self.site.article(&Article {
                title: &metadata.title,
                tags: &tags,
                date: metadata.date,
                gist: None,
                permalink: &metadata.permalink,
                content: &summary(&rendered.root, Flavor::Html),
            }));
            items.push(feed::item(
                self.site,
                &Entry {
                    title: &metadata.title,
                    summary: &summary(&rendered.root, Flavor::Plain),
                    date: metadata.date,
                    permalink: &metadata.permalink,
                },
            ));
        }

        let item_count = items.len();
        persist(sink, FEED_FILE, &feed::to_xml(self.site, items, self.build_date))?;
        info!(items = item_count, "written {}", FEED_FILE);

        persist(sink, INDEX_FILE, &self.site.page(&index.join("\n")))?;
        info!(entries = index.len(), "written {}", INDEX_FILE);
        Ok(())
    }

    /// Reads a post's source, discovering its tags line by line while
    /// gathering the lines for the Markdown parser.
    fn render_post(&self, post: &PostSource) -> Result<(TagSet, RenderedPost)> {
        let source = fs::read_to_string(&post.path).map_err(|err| Error::Read {
            path: post.path.clone(),
            err,
        })?;

        let mut tags = TagSet::new();
        let lines: Vec<&str> = source
            .lines()
            .inspect(|line| self.tags.scan_line(line, &mut tags))
            .collect();
        let rendered = markdown::render(&lines.join("\n"));
        Ok((tags, rendered))
    }
}

fn persist<S: Sink>(sink: &mut S, name: &str, contents: &str) -> Result<()> {
    sink.persist(name, contents).map_err(|err| Error::Persist {
        name: name.to_owned(),
        err,
    })
}

/// The result of a fallible site-building operation.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site. Errors can be during collecting
/// posts, reading post sources, or persisting output files.
#[derive(Debug)]
pub enum Error {
    /// Returned for errors while collecting posts.
    Collect(CollectError),

    /// Returned for I/O problems while reading a post's source file.
    Read { path: PathBuf, err: std::io::Error },

    /// Returned for I/O problems while persisting an output file.
    Persist { name: String, err: std::io::Error },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Collect(err) => err.fmt(f),
            Error::Read { path, err } => {
                write!(f, "Reading post '{}': {}", path.display(), err)
            }
            Error::Persist { name, err } => {
                write!(f, "Writing '{}': {}", name, err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Collect(err) => Some(err),
            Error::Read { err, .. } => Some(err),
            Error::Persist { err, .. } => Some(err),
        }
    }
}

impl From<CollectError> for Error {
    /// Converts [`CollectError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: CollectError) -> Error {
        Error::Collect(err)
    }
}
