//! Support for creating an RSS 2.0 feed from a list of posts.

use crate::page::Site;
use chrono::NaiveDate;
use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder};

/// How long, in seconds, readers may cache the feed.
const TTL: &str = "1800";

/// The data for a single feed item.
pub struct Entry<'a> {
    pub title: &'a str,

    /// The plain-text summary of the post.
    pub summary: &'a str,

    pub date: NaiveDate,
    pub permalink: &'a str,
}

/// Creates the feed [`Item`] for a post. The item's GUID is the post's
/// permalink, which isn't a URL, so it's marked as not being a permalink.
pub fn item(site: &Site, entry: &Entry) -> Item {
    let link = post_url(site, entry.permalink);
    ItemBuilder::default()
        .title(entry.title.to_owned())
        .description(entry.summary.to_owned())
        .link(Some(link))
        .guid(
            GuidBuilder::default()
                .permalink(false)
                .value(entry.permalink.to_owned())
                .build(),
        )
        .pub_date(rfc2822(entry.date))
        .build()
}

/// Wraps `items` in the site's channel and serializes the feed as XML. The
/// channel's build and publication dates are both `build_date` at midnight.
pub fn to_xml(site: &Site, items: Vec<Item>, build_date: NaiveDate) -> String {
    let now = rfc2822(build_date);
    ChannelBuilder::default()
        .title(site.title.as_str())
        .description(site.description.as_str())
        .link(site.url.as_str())
        .last_build_date(Some(now.clone()))
        .pub_date(Some(now))
        .ttl(Some(TTL.to_owned()))
        .items(items)
        .build()
        .to_string()
}

fn post_url(site: &Site, permalink: &str) -> String {
    let file_name = format!("{}.html", permalink);
    match site.url.join(&file_name) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", site.url, file_name),
    }
}

// RSS wants RFC 2822 dates. Posts carry no time of day, so everything is
// published at midnight UTC.
fn rfc2822(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y 00:00:00 +0000").to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use url::Url;

    fn site() -> Site {
        Site {
            title: String::from("Test Blog"),
            description: String::from("about things"),
            url: Url::parse("https://example.org/blog/").unwrap(),
            comments_url: Url::parse("https://gist.github.com/").unwrap(),
        }
    }

    #[test]
    fn test_item() {
        let item = item(
            &site(),
            &Entry {
                title: "Hello World",
                summary: "Hello world.",
                date: NaiveDate::from_ymd_opt(2021, 3, 10).unwrap(),
                permalink: "2021-03-10-42-Hello_World",
            },
        );
        assert_eq!(Some("Hello World"), item.title());
        assert_eq!(Some("Hello world."), item.description());
        assert_eq!(
            Some("https://example.org/blog/2021-03-10-42-Hello_World.html"),
            item.link()
        );
        let guid = item.guid().unwrap();
        assert_eq!("2021-03-10-42-Hello_World", guid.value());
        assert!(!guid.is_permalink());
        assert_eq!(Some("Wed, 10 Mar 2021 00:00:00 +0000"), item.pub_date());
    }

    #[test]
    fn test_to_xml() {
        let site = site();
        let items = vec![
            item(
                &site,
                &Entry {
                    title: "Newer",
                    summary: "new",
                    date: NaiveDate::from_ymd_opt(2021, 6, 15).unwrap(),
                    permalink: "2021-06-15-1-Newer",
                },
            ),
            item(
                &site,
                &Entry {
                    title: "Older",
                    summary: "old",
                    date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                    permalink: "2020-01-01-2-Older",
                },
            ),
        ];
        let xml = to_xml(&site, items, NaiveDate::from_ymd_opt(2022, 2, 2).unwrap());

        assert!(xml.contains("<rss version=\"2.0\""));
        assert!(xml.contains("<title>Test Blog</title>"));
        assert!(xml.contains("<ttl>1800</ttl>"));
        assert!(xml.contains("<lastBuildDate>Wed, 02 Feb 2022 00:00:00 +0000</lastBuildDate>"));
        assert!(xml.contains("<pubDate>Wed, 02 Feb 2022 00:00:00 +0000</pubDate>"));
        let newer = xml.find("<title>Newer</title>").unwrap();
        let older = xml.find("<title>Older</title>").unwrap();
        assert!(newer < older);
    }
}
