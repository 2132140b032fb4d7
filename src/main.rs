use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{Parser, Subcommand};

use learntech::{
    Route,
    config::{DEFAULT_SITE_URL, PREFS_DB_ENV, SITE_URL_ENV, Settings, default_prefs_db},
    core::{
        catalogue,
        db::{FontSize, PreferenceChange, Preferences, SqliteStore, ThemeMode},
        export::ExportFile,
        filter::FilterEngine,
        i18n::Language,
        navigation::{self, DetailView},
        share::{self, SharePlatform},
    },
};

#[derive(Parser)]
#[command(name = "learntech")]
#[command(about = "Browse the Learn Tech Hub project catalogue")]
#[command(version)]
struct Cli {
    /// Interface language (en, zh, hi, ru, he, de, es, fr)
    #[arg(long, global = true, default_value = "en")]
    lang: Language,

    /// Preferences database file
    #[arg(long, global = true, env = PREFS_DB_ENV, value_name = "FILE")]
    prefs_db: Option<PathBuf>,

    /// Base URL used for shared links
    #[arg(long, global = true, env = SITE_URL_ENV, default_value = DEFAULT_SITE_URL)]
    site_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the desktop app (default when no command given)
    Gui {
        /// Path to open at start-up, e.g. /project/sbc#features
        #[arg(long, default_value = "/")]
        route: Route,
    },
    /// List every project in catalogue order
    List,
    /// Filter projects by title or description
    Search {
        query: String,
        /// Also show autocomplete suggestions
        #[arg(long)]
        suggest: bool,
        /// Write the matches to search_results.json in this directory
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
    },
    /// Show a project by id or path
    Show { target: String },
    /// Print a share link
    Share {
        /// twitter, linkedin or facebook
        platform: SharePlatform,
        /// Page to share
        #[arg(long, default_value = "/")]
        path: Route,
    },
    /// Inspect or change stored preferences
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },
}

#[derive(Subcommand)]
enum PrefsCommands {
    /// Print stored preferences
    Show,
    /// Offer the onboarding tour again on next start
    ResetTour,
    /// Store the colour theme (dark or light)
    SetTheme { theme: ThemeMode },
    /// Store the font size (sm, base or lg)
    SetFontSize { size: FontSize },
}

fn main() -> anyhow::Result<()> {
    // WARN by default, RUST_LOG=info also shows narrated feedback
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Cli::parse();
    let settings = Settings {
        prefs_db: args.prefs_db.unwrap_or_else(default_prefs_db),
        site_url: args.site_url,
        language: args.lang,
        start_route: Route::Catalogue,
    };

    match args.command.unwrap_or(Commands::Gui {
        route: Route::Catalogue,
    }) {
        Commands::Gui { route } => run_gui(Settings {
            start_route: route,
            ..settings
        }),
        Commands::List => {
            let t = settings.language.translation();
            for record in catalogue::catalogue() {
                println!("{:<18} {}", record.id, t.project(record.content_key).title);
            }
            Ok(())
        }
        Commands::Search {
            query,
            suggest,
            export,
        } => search(&settings, &query, suggest, export.as_deref()),
        Commands::Show { target } => show(&settings, &target),
        Commands::Share { platform, path } => {
            let title = settings.language.translation().title;
            let page = share::page_url(&settings.site_url, &path);
            println!("{}", platform.share_url(&page, title));
            Ok(())
        }
        Commands::Prefs { command } => {
            tokio::runtime::Runtime::new()?.block_on(prefs(&settings.prefs_db, command))
        }
    }
}

#[cfg(feature = "gui")]
fn run_gui(settings: Settings) -> anyhow::Result<()> {
    use anyhow::Context;

    learntech::gui::run(settings).context("GUI exited with an error")
}

#[cfg(not(feature = "gui"))]
fn run_gui(_settings: Settings) -> anyhow::Result<()> {
    bail!("built without the `gui` feature")
}

fn search(
    settings: &Settings,
    query: &str,
    suggest: bool,
    export: Option<&Path>,
) -> anyhow::Result<()> {
    let t = settings.language.translation();
    let engine = FilterEngine::new(catalogue::catalogue(), t);
    let matches = engine.filter(query);

    if matches.is_empty() {
        println!("{}", t.no_results);
    }
    for record in &matches {
        let content = t.project(record.content_key);
        println!("{:<18} {}", record.id, content.title);
        println!("{:<18} {}", "", content.description);
    }

    if suggest {
        println!();
        for record in engine.autocomplete(query) {
            println!("suggestion: {}", t.project(record.content_key).title);
        }
    }

    if let Some(dir) = export {
        let file = ExportFile::from_records(&matches)?;
        let path = tokio::runtime::Runtime::new()?.block_on(file.write_to_dir(dir))?;
        println!("Exported {} results to {}", matches.len(), path.display());
    }
    Ok(())
}

fn show(settings: &Settings, target: &str) -> anyhow::Result<()> {
    let route = if target.starts_with('/') {
        target.parse::<Route>()?
    } else {
        Route::project(target)
    };
    let Route::Project { id, .. } = &route else {
        bail!("`{target}` is not a project path");
    };

    let t = settings.language.translation();
    match navigation::lookup(id, t) {
        DetailView::Found { record, content } => {
            println!("{}", content.title);
            println!("{}\n", content.description);
            println!("About the Project\n{}\n", content.long_description);
            println!("Key Features");
            for feature in content.features {
                println!("  - {feature}");
            }
            println!("\n{}", record.external_link);
            println!("{}", share::page_url(&settings.site_url, &route));
            Ok(())
        }
        DetailView::NotFound { id } => bail!("Project Not Found: {id}"),
    }
}

async fn prefs(db_file: &Path, command: PrefsCommands) -> anyhow::Result<()> {
    let store = SqliteStore::open(db_file).await?;
    let change = match command {
        PrefsCommands::Show => {
            let preferences = Preferences::load(&store).await?;
            println!("database     {}", store.path().display());
            println!("theme        {}", preferences.theme);
            println!("font size    {}", preferences.font_size);
            println!("seen tour    {}", preferences.has_seen_tour);
            for entry in store.entries().await? {
                println!("  {} = {} (updated {})", entry.key, entry.value, entry.updated_at);
            }
            None
        }
        PrefsCommands::ResetTour => Some(PreferenceChange::TourReset),
        PrefsCommands::SetTheme { theme } => Some(PreferenceChange::Theme(theme)),
        PrefsCommands::SetFontSize { size } => Some(PreferenceChange::FontSize(size)),
    };
    if let Some(change) = change {
        change.apply(&store).await?;
        println!("updated {}", change.key());
    }
    store.close().await
}
