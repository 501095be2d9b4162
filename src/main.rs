use showstream::{AppSettings, ContentStore, LoadState, TvMazeClient, ViewModel};

fn print_summary(view_model: &ViewModel) {
    let hero = &view_model.hero_item;
    println!(
        "Featured: {} ({}) - {:.1}/10, {} min, {}",
        hero.title, hero.release_year, hero.rating, hero.runtime, hero.language
    );
    println!("  {}", hero.overview);
    println!("  Tags: {}", hero.tags.join(", "));

    for section in &view_model.grouped_content {
        println!();
        println!("{} ({} shows)", section.title, section.content.len());
        for card in &section.content {
            match card.rating {
                Some(rating) => println!("  {:.1}  {} [{}]", rating, card.title, card.author),
                None => println!("   -   {} [{}]", card.title, card.author),
            }
        }
    }

    if !view_model.continue_watching.is_empty() {
        println!();
        println!("Continue Watching");
        for entry in &view_model.continue_watching {
            println!("  {} ({} min left)", entry.card.title, entry.minutes_left);
        }
    }

    if !view_model.hero_seasons.is_empty() {
        println!();
        println!("Seasons of {}", hero.title);
        for season in &view_model.hero_seasons {
            match season.episode_order {
                Some(episodes) => println!("  {} - {} episodes", season.name, episodes),
                None => println!("  {}", season.name),
            }
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let settings = AppSettings::load_or_default();
    let client = TvMazeClient::from_settings(&settings);

    let mut store = ContentStore::new();
    store.refresh(&client, &settings.hero_query).await;

    match store.state() {
        LoadState::Ready(view_model) => print_summary(view_model),
        LoadState::Failed(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        LoadState::Loading => unreachable!("refresh always settles"),
    }
}
