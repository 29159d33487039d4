//! Blog posts scraped from the company blog archive.

use log::{debug, info};
use reqwest::Url;
use scraper::Html;

use super::html::{selector, text_of};

use crate::content::provider::{get_text, http_client};
use crate::content::{ContentProvider, FetchError, Item};
use crate::core::config::ResolvedConfig;

const BLOGS_PATH: &str = "/blog/archive/";

pub struct BlogsProvider {
    client: reqwest::blocking::Client,
}

impl BlogsProvider {
    pub fn new() -> Self {
        Self {
            client: http_client(),
        }
    }
}

impl Default for BlogsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentProvider for BlogsProvider {
    fn name(&self) -> &str {
        "blogs"
    }

    fn title(&self) -> &str {
        "BLOGS:"
    }

    fn title_url(&self, config: &ResolvedConfig) -> String {
        format!("{}{}", config.site_url, BLOGS_PATH)
    }

    fn fetch(&self, config: &ResolvedConfig) -> Result<Vec<Item>, FetchError> {
        let url = self.title_url(config);
        info!("Blogs request: {}", url);
        let body = get_text(self.name(), self.client.get(&url))?;
        parse_blogs(&body, &config.site_url)
    }
}

/// Extracts blog posts from the archive HTML. Post links are resolved
/// against `site_url`.
fn parse_blogs(html: &str, site_url: &str) -> Result<Vec<Item>, FetchError> {
    let base = Url::parse(site_url)
        .map_err(|e| FetchError::Config(format!("invalid site url {site_url}: {e}")))?;

    let document = Html::parse_document(html);
    let post_sel = selector(".blog-listing__post")?;
    let headline_sel = selector(".blog-posting__headline")?;
    let pubdate_sel = selector(".blog-posting__pubdate")?;
    let body_sel = selector(".blog-posting__body")?;

    let mut items = Vec::new();
    for post in document.select(&post_sel) {
        let Some(headline) = post.select(&headline_sel).next().map(text_of) else {
            debug!("Skipping blog post without a headline");
            continue;
        };

        let mut item = Item::new(headline);
        if let Some(date) = post.select(&pubdate_sel).next().map(text_of) {
            item = item.with_date(date);
        }
        let href = post
            .select(&body_sel)
            .next()
            .and_then(|el| el.value().attr("href"));
        if let Some(href) = href {
            match base.join(href) {
                Ok(link) => item = item.with_link(link.to_string()),
                Err(e) => debug!("Dropping unresolvable blog link {}: {}", href, e),
            }
        }
        items.push(item);
    }

    debug!("Parsed {} blog posts", items.len());
    Ok(items)
}
