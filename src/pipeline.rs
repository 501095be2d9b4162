use log::warn;
use thiserror::Error;

use crate::hero::{build_hero_item, resolve_hero_show};
use crate::media::{LoadState, SeasonEntry, ShowId, ViewModel};
use crate::sections::{build_sections, normalize_cards, synthesize_continue_watching};
use crate::tvmaze::{ApiError, ShowApi};

const CATALOG_PAGE: u32 = 1;

/// The only failure that terminates a pipeline run. Hero search and season
/// fetch degrade softly and never surface here.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Failed to fetch shows from TVMaze: {0}")]
    Fetch(#[from] ApiError),
    #[error("No shows returned from TVMaze")]
    Empty,
}

async fn fetch_hero_seasons<A: ShowApi + ?Sized>(api: &A, show_id: ShowId) -> Vec<SeasonEntry> {
    match api.fetch_seasons(show_id).await {
        Ok(raw) => raw.iter().map(SeasonEntry::from).collect(),
        Err(e) => {
            warn!("Season fetch for show {} failed: {}", show_id, e);
            Vec::new()
        }
    }
}

/// Runs one full aggregation pass: catalog fetch and hero search go out
/// concurrently, the hero resolves against both, the card rows derive from
/// the catalog alone, and the season fetch follows the resolved hero.
pub async fn run_pipeline<A: ShowApi + ?Sized>(
    api: &A,
    hero_query: &str,
) -> Result<ViewModel, CatalogError> {
    let (catalog, search) = tokio::join!(
        api.fetch_catalog_page(CATALOG_PAGE),
        api.search_shows(hero_query)
    );

    let shows = catalog?;
    if shows.is_empty() {
        return Err(CatalogError::Empty);
    }

    let hero_show = resolve_hero_show(search, hero_query, &shows).ok_or(CatalogError::Empty)?;
    let hero_item = build_hero_item(&hero_show);

    let all_shows = normalize_cards(&shows);
    let grouped_content = build_sections(&all_shows);
    let continue_watching = synthesize_continue_watching(&all_shows);

    let hero_seasons = fetch_hero_seasons(api, hero_show.id).await;

    Ok(ViewModel {
        hero_item,
        grouped_content,
        all_shows,
        hero_seasons,
        continue_watching,
    })
}

/// Owns the home-screen lifecycle. A refresh replaces the state wholesale;
/// consumers never observe a partially assembled view-model, and dropping an
/// in-flight refresh leaves the store in `Loading` untouched.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    state: LoadState,
}

impl ContentStore {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub async fn refresh<A: ShowApi + ?Sized>(&mut self, api: &A, hero_query: &str) {
        self.state = LoadState::Loading;
        self.state = match run_pipeline(api, hero_query).await {
            Ok(view_model) => LoadState::Ready(view_model),
            Err(e) => LoadState::Failed(e.to_string()),
        };
    }
}
