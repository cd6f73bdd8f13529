use std::sync::Arc;

use clap::{Parser, Subcommand};

use squadbook_api::HttpPlayerSource;
use squadbook_app::{
    config::Config,
    favorites::FavoritesManager,
    repository::{KeyValueStore, PlayerSource},
    views,
};
use squadbook_db::{SqliteKeyValueStore, establish_connection_pool};
use squadbook_types::player::{Player, PlayerData};
use squadbook_types::{ApplicationError, Result};

mod logs;
use logs::setup_logging;

/// squadbook - browse the remote squad and keep local favorites
#[derive(Parser, Debug)]
#[command(name = "squadbook")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List players, optionally restricted to one team
    #[command(alias = "ls")]
    Players {
        /// Team name to filter by
        #[arg(long)]
        team: Option<String>,
    },

    /// List the team names present in the remote collection
    Teams,

    /// Show one player's details
    Show {
        /// Player id
        id: String,
    },

    /// Toggle a player in the local favorites
    Fav {
        /// Player id
        id: String,
    },

    /// Show the favorite players
    Favorites {
        /// Dump the raw stored value instead of resolving details
        #[arg(long)]
        raw: bool,
    },

    /// Create a player in the remote collection
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        team: String,
        #[arg(long)]
        position: String,
        /// Year of birth
        #[arg(long)]
        yob: i32,
        #[arg(long, default_value_t = 0)]
        minutes: u32,
        #[arg(long)]
        captain: bool,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long, default_value_t = 0.0)]
        passing: f64,
    },

    /// Replace a player's record in the remote collection
    Update {
        /// Player id
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        team: String,
        #[arg(long)]
        position: String,
        /// Year of birth
        #[arg(long)]
        yob: i32,
        #[arg(long, default_value_t = 0)]
        minutes: u32,
        #[arg(long)]
        captain: bool,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long, default_value_t = 0.0)]
        passing: f64,
    },

    /// Delete a player from the remote collection
    Remove {
        /// Player id
        id: String,
    },
}

struct App {
    source: HttpPlayerSource,
    store: Arc<SqliteKeyValueStore>,
    favorites: FavoritesManager,
    favorites_key: String,
}

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();
    let cli = Cli::parse();
    let app = setup_app().await?;

    match cli.command {
        Commands::Players { team } => {
            let players = app.source.list().await?;
            let favorites = app.favorites.load().await;
            let view = views::filter_by_team(&players, team.as_deref());

            for (index, player) in view.iter().enumerate() {
                let marker = if favorites.contains(&player.id) { "*" } else { " " };
                println!("{marker} {}", player_row(index, player));
            }
        }

        Commands::Teams => {
            let players = app.source.list().await?;
            for team in views::team_names(&players) {
                println!("{team}");
            }
        }

        Commands::Show { id } => {
            let player = app.source.get_by_id(&id).await?;
            print_player_detail(&player);
        }

        Commands::Fav { id } => {
            let players = app.source.list().await?;
            let current = app.favorites.load().await;
            let next = app.favorites.toggle_and_save(&id, &current, &players).await;

            if next.contains(&id) {
                println!("Added {id} to favorites ({} total)", next.len());
            } else {
                println!("Removed {id} from favorites ({} total)", next.len());
            }
        }

        Commands::Favorites { raw } => {
            if raw {
                let stored = app.store.get(&app.favorites_key).await?;
                println!("{}", stored.unwrap_or_else(|| "<absent>".to_string()));
            } else {
                let players = app.source.list().await?;
                let favorites = app.favorites.load().await;
                let details = app.favorites.resolve_favorite_details(&favorites, &players);

                for (index, player) in details.iter().enumerate() {
                    println!("{}", player_row(index, player));
                }
            }
        }

        Commands::Add {
            name,
            team,
            position,
            yob,
            minutes,
            captain,
            image,
            passing,
        } => {
            let data = player_data(name, team, position, yob, minutes, captain, image, passing);
            let player = app.source.create(&data).await?;
            println!("Created player {}", player.id);
        }

        Commands::Update {
            id,
            name,
            team,
            position,
            yob,
            minutes,
            captain,
            image,
            passing,
        } => {
            let data = player_data(name, team, position, yob, minutes, captain, image, passing);
            let player = app.source.update(&id, &data).await?;
            println!("Updated player {}", player.id);
        }

        Commands::Remove { id } => {
            app.source.remove(&id).await?;
            println!("Removed player {id}");
        }
    }

    Ok(())
}

async fn setup_app() -> Result<App, ApplicationError> {
    let config = Config::from_env();

    let pool = establish_connection_pool(&config.database_url).await?;
    let store = Arc::new(SqliteKeyValueStore::new(pool));
    let kv: Arc<dyn KeyValueStore> = store.clone();
    let favorites = FavoritesManager::new(config.favorites_key.clone(), kv);
    let source = HttpPlayerSource::new(config.api_url.clone());

    Ok(App {
        source,
        store,
        favorites,
        favorites_key: config.favorites_key,
    })
}

#[allow(clippy::too_many_arguments)]
fn player_data(
    name: String,
    team: String,
    position: String,
    yob: i32,
    minutes: u32,
    captain: bool,
    image: String,
    passing: f64,
) -> PlayerData {
    PlayerData {
        player_name: name,
        birth_year: yob,
        minutes_played: minutes,
        position,
        is_captain: captain,
        image,
        team,
        passing_accuracy: passing,
    }
}

/// One-line listing entry. An empty id gets a positional label so the row
/// stays addressable in output; the fallback is display-only and never
/// written back into storage.
fn player_row(index: usize, player: &Player) -> String {
    let label = if player.id.is_empty() {
        tracing::warn!("Player at index {index} is missing an id");
        format!("#{index}")
    } else {
        player.id.clone()
    };

    format!(
        "[{label}] {} - {} ({}), YoB {}{}",
        player.player_name,
        player.position,
        player.team,
        player.birth_year,
        if player.is_captain { ", captain" } else { "" },
    )
}

fn print_player_detail(player: &Player) {
    println!("{}", player.player_name);
    println!("  Position: {}", player.position);
    println!("  Team: {}", player.team);
    println!("  Passing accuracy: {}", player.passing_accuracy);
    println!("  Minutes played: {}", player.minutes_played);
    println!("  Year of birth: {}", player.birth_year);
    println!("  Captain: {}", if player.is_captain { "yes" } else { "no" });
    if !player.image.is_empty() {
        println!("  Image: {}", player.image);
    }
}
