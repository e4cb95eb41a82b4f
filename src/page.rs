//! HTML rendering for article and index pages. Pages are assembled from
//! string literals; titles and tags are inserted as-is.

use crate::tag::TagSet;
use chrono::NaiveDate;
use url::Url;

/// The blog-wide settings that appear on every page.
#[derive(Clone, Debug)]
pub struct Site {
    /// The blog's title, shown in the page header and `<title>`.
    pub title: String,

    /// A one-line description shown under the title.
    pub description: String,

    /// The public base URL of the site. Always ends in `/`.
    pub url: Url,

    /// The base URL for comment gists. A post's gist ID is appended to it.
    pub comments_url: Url,
}

/// One `<article>` element: a full post on its own page, or a post summary
/// on the index page.
pub struct Article<'a> {
    pub title: &'a str,
    pub tags: &'a TagSet,
    pub date: NaiveDate,

    /// Index entries never carry a gist, so they never show a comment link.
    pub gist: Option<&'a str>,

    pub permalink: &'a str,
    pub content: &'a str,
}

impl Site {
    /// Wraps `content` in the site's page shell.
    pub fn page(&self, content: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset='UTF-8'>
    <meta name='viewport' content='width=device-width'>
    <title>{title}</title>
    <link rel='stylesheet' href='style.css' type='text/css' media='all' />
  </head>
  <body class='home blog'>
    <div id='page' class='site'>
      <header id='masthead' class='site-header' role='banner'>
        <a class='home-link' href='index.html' title='{title}' rel='home'>
          <h1 class='site-title'>{title}</h1>
          <h2 class='site-description'>{description}</h2>
        </a>
      </header>
      <div id='main' class='site-main'>
        <div id='content' class='site-content' role='main'>
{content}
        </div><!-- #content -->
      </div><!-- #main -->
    </div><!-- #page -->
  </body>
</html>
"#,
            title = self.title,
            description = self.description,
            content = content,
        )
    }

    /// Renders an [`Article`]. When the article has a gist, a comment link
    /// and the script which fetches the gist's comments are appended.
    pub fn article(&self, article: &Article) -> String {
        let tags: Vec<&str> = article.tags.iter().collect();
        let mut out = format!(
            r#"<article class='post'>
<header class='entry-header'>
  <h1 class='entry-title'>
    <a href='{permalink}.html' title='Permalink' rel='bookmark'>{title}</a>
  </h1>
  <div class='entry-meta'>
    <span class='date'><time class='entry-date' datetime='{datetime}'>{date}</time></span>
    <span class='categories-links'>{tags}</span>
  </div>
</header>
<div class='entry-content'>
{content}
</div>
<footer class='entry-meta'>
  <div class='comments-link'>{comments}</div>
  <span id='comments'></span>
</footer>
</article>"#,
            permalink = article.permalink,
            title = article.title,
            datetime = article.date.format("%Y-%m-%d"),
            date = article.date.format("%A, %B %-d, %Y"),
            tags = tags.join(" "),
            content = article.content,
            comments = match article.gist {
                Some(gist) => format!(
                    "<a href='{}' title='Comments'>Write a comment</a>",
                    self.gist_url(gist)
                ),
                None => String::new(),
            },
        );

        if let Some(gist) = article.gist {
            out.push_str(&format!(
                "\n<script type='text/javascript' src='assets/ajax.js'></script>\
                 \n<script type='text/javascript'>fetchComments('{}');</script>",
                gist
            ));
        }
        out
    }

    fn gist_url(&self, gist: &str) -> String {
        match self.comments_url.join(gist) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", self.comments_url, gist),
        }
    }
}
