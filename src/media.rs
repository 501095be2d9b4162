use serde::Deserialize;

pub const HERO_PLACEHOLDER_URL: &str =
    "https://placehold.co/1920x1080/0A132C/1F2937?text=HD+FEATURED+BACKDROP";
pub const CARD_PLACEHOLDER_URL: &str = "https://placehold.co/300x450/333333/AAAAAA?text=POSTER";

pub const UNKNOWN_NETWORK: &str = "Unknown Network";

pub type ShowId = u64;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ImageSet {
    pub medium: Option<String>,
    pub original: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ShowRating {
    pub average: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Channel {
    pub name: Option<String>,
}

/// One record from the TVMaze catalog or search endpoints. Every field
/// except `id` may be missing or null upstream.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawShow {
    pub id: ShowId,
    pub name: Option<String>,
    pub rating: Option<ShowRating>,
    pub premiered: Option<String>,
    pub language: Option<String>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image: Option<ImageSet>,
    pub network: Option<Channel>,
    #[serde(rename = "webChannel")]
    pub web_channel: Option<Channel>,
    pub summary: Option<String>,
}

impl RawShow {
    pub fn rating_average(&self) -> Option<f64> {
        self.rating.as_ref().and_then(|r| r.average)
    }

    /// Best available artwork, preferring the original resolution.
    pub fn image_url(&self) -> Option<String> {
        self.image
            .as_ref()
            .and_then(|i| i.original.clone().or_else(|| i.medium.clone()))
    }
}

/// Entry shape of `/search/shows`; the nested show is occasionally absent.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchHit {
    pub show: Option<RawShow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSeason {
    pub id: u64,
    pub number: u32,
    pub name: Option<String>,
    #[serde(rename = "episodeOrder")]
    pub episode_order: Option<u32>,
    #[serde(rename = "premiereDate")]
    pub premiere_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    pub image: Option<ImageSet>,
}

/// Display-ready projection of a raw show for the content rows.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCard {
    pub id: ShowId,
    pub title: String,
    pub rating: Option<f64>,
    pub runtime: Option<u32>,
    pub genres: Vec<String>,
    pub image_url: String,
    pub author: String,
}

impl From<&RawShow> for NormalizedCard {
    fn from(show: &RawShow) -> Self {
        let author = show
            .network
            .as_ref()
            .and_then(|n| n.name.clone())
            .or_else(|| show.web_channel.as_ref().and_then(|c| c.name.clone()))
            .unwrap_or_else(|| String::from(UNKNOWN_NETWORK));
        Self {
            id: show.id,
            title: show.name.clone().unwrap_or_default(),
            rating: show.rating_average(),
            runtime: show.runtime,
            genres: show.genres.clone(),
            image_url: show
                .image_url()
                .unwrap_or_else(|| String::from(CARD_PLACEHOLDER_URL)),
            author,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeroItem {
    pub id: ShowId,
    pub title: String,
    pub rating: f64,
    pub release_year: String,
    pub language: String,
    pub runtime: u32,
    pub kind: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub overview: String,
}

/// Layout hint for a content row: 2:3 poster cards or 16:9 banner cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Poster,
    Banner,
}

#[derive(Debug, Clone)]
pub struct ContentSection {
    pub title: String,
    pub card_style: CardStyle,
    pub content: Vec<NormalizedCard>,
}

#[derive(Debug, Clone)]
pub struct ContinueWatchingEntry {
    pub card: NormalizedCard,
    pub minutes_left: u32,
}

#[derive(Debug, Clone)]
pub struct SeasonEntry {
    pub id: u64,
    pub number: u32,
    pub name: String,
    pub episode_order: Option<u32>,
    pub premiere_date: Option<String>,
    pub end_date: Option<String>,
    pub image_url: Option<String>,
}

impl From<&RawSeason> for SeasonEntry {
    fn from(season: &RawSeason) -> Self {
        Self {
            id: season.id,
            number: season.number,
            name: season
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| format!("Season {}", season.number)),
            episode_order: season.episode_order,
            premiere_date: season.premiere_date.clone(),
            end_date: season.end_date.clone(),
            image_url: season
                .image
                .as_ref()
                .and_then(|i| i.original.clone().or_else(|| i.medium.clone())),
        }
    }
}

/// Everything presentation needs for the home screen, assembled once per
/// pipeline run.
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub hero_item: HeroItem,
    pub grouped_content: Vec<ContentSection>,
    pub all_shows: Vec<NormalizedCard>,
    pub hero_seasons: Vec<SeasonEntry>,
    pub continue_watching: Vec<ContinueWatchingEntry>,
}

#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(ViewModel),
    Failed(String),
}
