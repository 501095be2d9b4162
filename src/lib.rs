pub mod hero;
pub mod media;
pub mod pipeline;
pub mod sections;
pub mod settings;
pub mod tvmaze;

pub use media::{
    CardStyle, ContentSection, ContinueWatchingEntry, HeroItem, LoadState, NormalizedCard,
    RawSeason, RawShow, SearchHit, SeasonEntry, ShowId, ViewModel,
};
pub use pipeline::{run_pipeline, CatalogError, ContentStore};
pub use settings::AppSettings;
pub use tvmaze::{ApiError, ShowApi, TvMazeClient};
