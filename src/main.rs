use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use studio_search::catalog::CatalogFile;
use studio_search::listing::ListingAction;
use studio_search::listing::tools::{
    ApplyListingActionParams, ListProjectsParams, ProjectDetailsParams,
};
use studio_search::pages::tools::ResolveRouteParams;
use studio_search::routes::{HOME_PATH, Location, Navigation};
use studio_search::search::Suggestion;
use studio_search::search::config::DEFAULT_DEBOUNCE_MS;
use studio_search::search::tools::SuggestParams;
use studio_search::{StudioConfig, StudioService};

/// Search, filter and navigation coordinator for the studio portfolio site
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog file (defaults to ~/.config/studio-search/catalog.json, then the built-in catalog)
    #[arg(long, env = "STUDIO_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Idle interval before typed input settles
    #[arg(long, env = "STUDIO_DEBOUNCE_MS", default_value_t = DEFAULT_DEBOUNCE_MS, global = true)]
    debounce_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Suggestions for a settled query
    Suggest { query: String },
    /// Projects visible on a listing href
    List {
        #[arg(default_value = "/projects")]
        href: String,
    },
    /// Full details of one project
    Project { project_id: String },
    /// Resolve an href to the view it renders
    Route { href: String },
    /// Apply a listing action to an href
    Apply {
        href: String,
        /// submit_search, clear_search, set_category or set_location
        action: String,
        value: Option<String>,
    },
    /// Featured projects, leadership and services
    Overview,
    /// Type into a search box line by line (:submit, :clear, :pick N, :go HREF, :menu, :quit)
    Interactive,
    /// JSON Schema of the catalog file format
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries command output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    if let Commands::Schema = args.command {
        let schema = schemars::schema_for!(CatalogFile);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let config = StudioConfig::resolve(args.catalog, args.debounce_ms);
    let service = StudioService::from_config(&config)?;

    match args.command {
        Commands::Suggest { query } => println!("{}", service.suggest(SuggestParams { query })),
        Commands::List { href } => {
            println!("{}", service.list_projects(ListProjectsParams { href: Some(href) }))
        }
        Commands::Project { project_id } => {
            println!("{}", service.project_details(ProjectDetailsParams { project_id }))
        }
        Commands::Route { href } => {
            println!("{}", service.resolve_route(ResolveRouteParams { href }))
        }
        Commands::Apply {
            href,
            action,
            value,
        } => {
            let action = parse_action(&action, value)?;
            println!(
                "{}",
                service.apply_listing_action(ApplyListingActionParams { href, action })
            );
        }
        Commands::Overview => println!("{}", service.overview()),
        Commands::Interactive => run_interactive(&service).await?,
        Commands::Schema => {}
    }
    Ok(())
}

fn parse_action(action: &str, value: Option<String>) -> Result<ListingAction> {
    let raw = match value {
        Some(value) => serde_json::json!({ "action": action, "value": value }),
        None => serde_json::json!({ "action": action }),
    };
    serde_json::from_value(raw).with_context(|| format!("Invalid listing action '{action}'"))
}

enum Event {
    Line(Option<String>),
    Settled(Option<Vec<Suggestion>>),
}

async fn run_interactive(service: &StudioService) -> Result<()> {
    let mut search_box = service.search_box();
    let mut current = Location::new(HOME_PATH);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line.context("Failed to read stdin")?),
            settled = search_box.next_settled() => Event::Settled(settled.map(<[Suggestion]>::to_vec)),
        };

        let line = match event {
            Event::Settled(Some(suggestions)) => {
                print_suggestions(&suggestions);
                continue;
            }
            Event::Settled(None) | Event::Line(None) => break,
            Event::Line(Some(line)) => line,
        };

        let navigation = match line.trim() {
            ":quit" => break,
            ":submit" => Some(search_box.submit()),
            ":clear" => search_box.clear(&current),
            ":menu" => {
                search_box.toggle_menu();
                println!("menu {}", if search_box.is_menu_open() { "open" } else { "closed" });
                None
            }
            cmd if cmd.starts_with(":pick") => {
                let picked = cmd[":pick".len()..]
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| search_box.suggestions().get(i))
                    .cloned();
                match picked {
                    Some(suggestion) => Some(search_box.select(&suggestion)),
                    None => {
                        eprintln!("Usage: :pick N, where N numbers a listed suggestion");
                        None
                    }
                }
            }
            cmd if cmd.starts_with(":go ") => match Location::parse(&cmd[":go ".len()..]) {
                Ok(location) => Some(Navigation::push(location)),
                Err(e) => {
                    eprintln!("{e:#}");
                    None
                }
            },
            cmd if cmd.starts_with(':') => {
                eprintln!("Unknown command {cmd}");
                None
            }
            _ => {
                search_box.input(line.as_str());
                None
            }
        };

        if let Some(navigation) = navigation {
            current = navigation.location;
            search_box.sync_from_location(&current);
            println!(
                "{} {}",
                if navigation.replace { "replace" } else { "push" },
                current
            );
            println!(
                "{}",
                service.resolve_route(ResolveRouteParams {
                    href: current.to_href(),
                })
            );
        }
    }

    search_box.close();
    Ok(())
}

fn print_suggestions(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("(no suggestions)");
        return;
    }
    for (i, suggestion) in suggestions.iter().enumerate() {
        match suggestion {
            Suggestion::Project { title, .. } => println!("{:>2}. [project] {}", i + 1, title),
            Suggestion::Team { name, role, .. } => {
                println!("{:>2}. [team] {} ({})", i + 1, name, role)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!(
            parse_action("set_location", Some("Jaipur".to_string())).unwrap(),
            ListingAction::SetLocation("Jaipur".to_string())
        );
        assert_eq!(
            parse_action("clear_search", None).unwrap(),
            ListingAction::ClearSearch
        );
        assert!(parse_action("sort", None).is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["studio-search", "--debounce-ms", "100", "list"]).unwrap();
        assert_eq!(args.debounce_ms, 100);
        assert!(matches!(args.command, Commands::List { ref href } if href == "/projects"));

        let args = Args::try_parse_from(["studio-search", "project", "foyer"]).unwrap();
        assert!(matches!(args.command, Commands::Project { ref project_id } if project_id == "foyer"));
    }
}
