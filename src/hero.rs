use log::warn;
use regex::Regex;

use crate::media::{HeroItem, RawShow, SearchHit, HERO_PLACEHOLDER_URL};
use crate::tvmaze::ApiError;

pub const DEFAULT_HERO_QUERY: &str = "avengers";

const DEFAULT_HERO_RATING: f64 = 7.5;
const DEFAULT_HERO_RUNTIME: u32 = 60;
const DEFAULT_HERO_OVERVIEW: &str =
    "An epic Avengers-style adventure presented with real TV data and HD images from TVMaze.";

/// Picks the featured show. Tried in order: a search hit whose name contains
/// the query, any search hit, the first catalog show with artwork, the first
/// catalog show. Only an empty catalog yields `None`; search failure is a
/// soft degradation and falls through to the catalog.
pub fn resolve_hero_show(
    search: Result<Vec<SearchHit>, ApiError>,
    query: &str,
    catalog: &[RawShow],
) -> Option<RawShow> {
    let from_search = match search {
        Ok(hits) if !hits.is_empty() => {
            let needle = query.to_lowercase();
            let best = hits.iter().find(|hit| {
                hit.show
                    .as_ref()
                    .and_then(|s| s.name.as_ref())
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            });
            best.or_else(|| hits.first())
                .and_then(|hit| hit.show.clone())
        }
        Ok(_) => {
            warn!("Hero search for {:?} returned no results, falling back to catalog", query);
            None
        }
        Err(e) => {
            warn!("Hero search for {:?} failed, falling back to catalog: {}", query, e);
            None
        }
    };

    from_search.or_else(|| {
        catalog
            .iter()
            .find(|s| s.image_url().is_some())
            .or_else(|| catalog.first())
            .cloned()
    })
}

fn strip_html(markup: &str) -> String {
    match Regex::new(r"<[^>]*>") {
        Ok(re) => re.replace_all(markup, "").to_string(),
        Err(_) => markup.to_string(),
    }
}

pub fn build_hero_item(show: &RawShow) -> HeroItem {
    HeroItem {
        id: show.id,
        title: show
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| String::from("Featured Title")),
        rating: show.rating_average().unwrap_or(DEFAULT_HERO_RATING),
        release_year: show
            .premiered
            .as_ref()
            .map(|d| d.chars().take(4).collect::<String>())
            .filter(|y| !y.is_empty())
            .unwrap_or_else(|| String::from("2025")),
        language: show
            .language
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| String::from("English")),
        runtime: show.runtime.unwrap_or(DEFAULT_HERO_RUNTIME),
        kind: String::from("TV Show"),
        image_url: show
            .image_url()
            .unwrap_or_else(|| String::from(HERO_PLACEHOLDER_URL)),
        tags: if show.genres.is_empty() {
            vec![String::from("Action"), String::from("Superhero")]
        } else {
            show.genres.clone()
        },
        overview: show
            .summary
            .as_ref()
            .map(|s| strip_html(s))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_HERO_OVERVIEW)),
    }
}
