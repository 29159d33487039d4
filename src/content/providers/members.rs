//! Team members scraped from the company "work with us" page.
//!
//! Each `.team-member__body` block carries a name, a role line and up to
//! three profile links. The line links to the best profile available.

use log::{debug, info};
use scraper::{ElementRef, Html, Selector};

use super::html::{selector, text_of};

use crate::content::provider::{get_text, http_client};
use crate::content::{ContentProvider, FetchError, Item};
use crate::core::config::ResolvedConfig;

const MEMBERS_PATH: &str = "/work-with-us/";

/// Profile classes in order of preference.
const PROFILE_PREFERENCE: [&str; 3] = [
    ".team-member__profile--github",
    ".team-member__profile--linkedin",
    ".team-member__profile--twitter",
];

const WOMAN_ICON: &str = "👩‍💻";
const MAN_ICON: &str = "👨‍💻";

pub struct MembersProvider {
    client: reqwest::blocking::Client,
}

impl MembersProvider {
    pub fn new() -> Self {
        Self {
            client: http_client(),
        }
    }
}

impl Default for MembersProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentProvider for MembersProvider {
    fn name(&self) -> &str {
        "members"
    }

    fn title(&self) -> &str {
        "MEMBERS:"
    }

    fn title_url(&self, config: &ResolvedConfig) -> String {
        format!("{}{}", config.site_url, MEMBERS_PATH)
    }

    fn fetch(&self, config: &ResolvedConfig) -> Result<Vec<Item>, FetchError> {
        let url = self.title_url(config);
        info!("Members request: {}", url);
        let body = get_text(self.name(), self.client.get(&url))?;
        parse_members(&body, config)
    }
}

/// Extracts member items from the page HTML.
fn parse_members(html: &str, config: &ResolvedConfig) -> Result<Vec<Item>, FetchError> {
    let document = Html::parse_document(html);
    let body_sel = selector(".team-member__body")?;
    let name_sel = selector(".team-member__name")?;
    let alt_sel = selector(".team-member__alt")?;
    let profile_sels = PROFILE_PREFERENCE
        .iter()
        .map(|css| selector(css))
        .collect::<Result<Vec<_>, _>>()?;

    let mut items = Vec::new();
    for member in document.select(&body_sel) {
        let Some(name) = member.select(&name_sel).next().map(text_of) else {
            debug!("Skipping member block without a name");
            continue;
        };
        let alt = member.select(&alt_sel).next().map(text_of);

        let label = match alt.as_deref() {
            Some(alt) if !alt.is_empty() => format!("{} ({})", name, alt),
            _ => name.clone(),
        };

        let mut item = Item::new(label).with_icon(icon_for(&name, config));
        if let Some(profile) = best_profile(member, &profile_sels) {
            item = item.with_link(profile);
        }
        items.push(item);
    }

    debug!("Parsed {} members", items.len());
    Ok(items)
}

/// First profile link found, following `PROFILE_PREFERENCE`.
fn best_profile(member: ElementRef<'_>, profile_sels: &[Selector]) -> Option<String> {
    profile_sels
        .iter()
        .filter_map(|sel| member.select(sel).next())
        .find_map(link_href)
}

/// The element's own `href`, or the first `href` among its descendants.
fn link_href(el: ElementRef<'_>) -> Option<String> {
    if let Some(href) = el.value().attr("href") {
        return Some(href.to_string());
    }
    el.descendants()
        .filter_map(ElementRef::wrap)
        .find_map(|child| child.value().attr("href"))
        .map(str::to_string)
}

/// Configured icon for the full name, else a guess from the first name.
fn icon_for(name: &str, config: &ResolvedConfig) -> String {
    if let Some(icon) = config.member_icons.get(name) {
        return icon.clone();
    }
    let first_name = name.split_whitespace().next().unwrap_or_default();
    if first_name.ends_with('a') {
        WOMAN_ICON.to_string()
    } else {
        MAN_ICON.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body>
  <div class="team-member__body">
    <h3 class="team-member__name">Jana Nováková</h3>
    <p class="team-member__alt">Designer</p>
    <a class="team-member__profile--twitter" href="https://twitter.com/jana">t</a>
    <a class="team-member__profile--linkedin" href="https://linkedin.com/in/jana">in</a>
  </div>
  <div class="team-member__body">
    <h3 class="team-member__name"> Petr Svoboda </h3>
    <p class="team-member__alt">Backend</p>
    <span class="team-member__profile--github"><a href="https://github.com/petr">gh</a></span>
    <a class="team-member__profile--linkedin" href="https://linkedin.com/in/petr">in</a>
  </div>
  <div class="team-member__body">
    <p class="team-member__alt">Ghost without a name</p>
  </div>
  <div class="team-member__body">
    <h3 class="team-member__name">Karel Novák</h3>
  </div>
</body></html>
"#;

    #[test]
    fn test_parse_members() {
        let items = parse_members(PAGE, &ResolvedConfig::default()).unwrap();
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].name, "Jana Nováková (Designer)");
        assert_eq!(items[0].link.as_deref(), Some("https://linkedin.com/in/jana"));
        assert_eq!(items[0].icon.as_deref(), Some(WOMAN_ICON));

        assert_eq!(items[1].name, "Petr Svoboda (Backend)");
        assert_eq!(items[1].link.as_deref(), Some("https://github.com/petr"));
        assert_eq!(items[1].icon.as_deref(), Some(MAN_ICON));

        assert_eq!(items[2].name, "Karel Novák");
        assert!(items[2].link.is_none());
        assert!(items[2].date.is_none());
    }

    #[test]
    fn test_configured_icon_wins() {
        let mut config = ResolvedConfig::default();
        config
            .member_icons
            .insert("Petr Svoboda".to_string(), "🥜".to_string());
        assert_eq!(icon_for("Petr Svoboda", &config), "🥜");
        assert_eq!(icon_for("Eva Malá", &config), WOMAN_ICON);
    }

    #[test]
    fn test_empty_page_yields_no_items() {
        let items = parse_members("<html></html>", &ResolvedConfig::default()).unwrap();
        assert!(items.is_empty());
    }
}
