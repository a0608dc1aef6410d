//! Covid Dashboard
//!
//! Interactive terminal dashboard. Starts on the country table and reads
//! commands from stdin:
//!
//! - `search <text>`: live filter by country name (no text clears it)
//! - `sort <column>`: column-header click (toggle, or switch descending)
//! - `open <country>` / `go <path>`: navigate to a country or path
//! - `back`, `refresh`, `export <file>`, `columns`, `help`, `quit`
//!
//! # Configuration
//!
//! See `covid-cli config` for the config file template. Environment:
//! - `COVID_DASHBOARD_API_URL`: statistics API base URL
//! - `COVID_DASHBOARD_LOG_LEVEL`: log level (default: info)
//! - `RUST_LOG`: full filter directive, overrides the level

use anyhow::{Context, Result};
use clap::Parser;
use covid_dashboard::client::{ClientConfig, DiseaseClient, StatsSource};
use covid_dashboard::config::Config;
use covid_dashboard::export;
use covid_dashboard::listing::Column;
use covid_dashboard::render::{render_detail, render_listing, TableOptions};
use covid_dashboard::view::{DetailView, ListingView, Route};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "covid-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive COVID-19 statistics dashboard")]
struct Args {
    /// Config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Statistics API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Initial path ("/" or "/country/<name>")
    #[arg(long, default_value = "/")]
    start: String,

    /// Table columns (comma-separated ids; default: all)
    #[arg(long, value_delimiter = ',')]
    columns: Vec<Column>,
}

/// A parsed dashboard command
#[derive(Debug, PartialEq)]
enum Command {
    Search(String),
    Sort(String),
    Open(String),
    Go(String),
    Back,
    Refresh,
    Export(PathBuf),
    Columns,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match word.to_lowercase().as_str() {
            "search" | "s" | "/" => Ok(Command::Search(rest.to_string())),
            "sort" | "o" => require(rest, "sort <column>").map(Command::Sort),
            "open" => require(rest, "open <country>").map(Command::Open),
            "go" => require(rest, "go <path>").map(Command::Go),
            "back" | "b" => Ok(Command::Back),
            "refresh" | "r" => Ok(Command::Refresh),
            "export" => require(rest, "export <file>").map(|p| Command::Export(p.into())),
            "columns" => Ok(Command::Columns),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command: {} (type 'help')", other)),
        }
    }
}

fn require(arg: &str, usage: &str) -> Result<String, String> {
    if arg.is_empty() {
        Err(format!("Usage: {}", usage))
    } else {
        Ok(arg.to_string())
    }
}

const HELP: &str = "\
Commands:
  search <text>    Filter countries by name (empty clears)
  sort <column>    Sort by column; repeat to toggle direction
  open <country>   Show a country's chart and statistics
  go <path>        Navigate to a path (/ or /country/<name>)
  back             Return to the country table
  refresh          Reload the current view
  export <file>    Export table rows (CSV) or chart data (JSON)
  columns          List sortable columns
  quit             Exit";

/// Screen currently on display
enum Screen {
    Listing(ListingView),
    Detail(DetailView),
    NotFound(String),
}

struct Dashboard {
    source: Arc<dyn StatsSource>,
    config: Config,
    options: TableOptions,
    route: Route,
    screen: Screen,
}

impl Dashboard {
    fn new(source: Arc<dyn StatsSource>, config: Config, options: TableOptions) -> Self {
        Self {
            source,
            config,
            options,
            route: Route::Listing,
            screen: Screen::NotFound(String::new()),
        }
    }

    /// Build a fresh view for `route` and run its one-shot load
    async fn navigate(&mut self, route: Route) -> Result<()> {
        tracing::debug!(path = %route, "Navigate");
        self.route = route.clone();
        self.screen = match route {
            Route::Listing => Screen::Listing(ListingView::new(self.config.display.initial_sort())),
            Route::Detail(country) => Screen::Detail(DetailView::new(country)),
            Route::NotFound(path) => Screen::NotFound(path),
        };
        self.render()?;

        match &mut self.screen {
            Screen::Listing(view) => view.load(self.source.as_ref()).await,
            Screen::Detail(view) => view.load(self.source.as_ref()).await,
            Screen::NotFound(_) => return Ok(()),
        }
        self.render()
    }

    fn render(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out)?;
        writeln!(out, "== {} ==", self.route)?;

        match &self.screen {
            Screen::Listing(view) => render_listing(&mut out, view, &self.options)?,
            Screen::Detail(view) => render_detail(&mut out, view, &self.config.display.placeholder)?,
            Screen::NotFound(path) => writeln!(out, "Page not found: {}", path)?,
        }
        Ok(())
    }

    /// Execute one command; returns false when the user quits
    async fn handle(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Search(text) => match &mut self.screen {
                Screen::Listing(view) => {
                    view.set_search(text);
                    self.render()?;
                }
                _ => println!("Search is only available on the country table"),
            },
            Command::Sort(field) => match &mut self.screen {
                Screen::Listing(view) => {
                    let field = field
                        .parse::<Column>()
                        .map(|c| c.id().to_string())
                        .unwrap_or(field);
                    view.request_sort(&field);
                    self.render()?;
                }
                _ => println!("Sorting is only available on the country table"),
            },
            Command::Open(country) => self.navigate(Route::Detail(country)).await?,
            Command::Go(path) => self.navigate(Route::parse(&path)).await?,
            Command::Back => self.navigate(Route::Listing).await?,
            Command::Refresh => self.navigate(self.route.clone()).await?,
            Command::Export(path) => self.export(&path)?,
            Command::Columns => {
                for column in Column::ALL {
                    println!("  {:<24} {}", column.id(), column.label());
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn export(&self, path: &Path) -> Result<()> {
        match &self.screen {
            Screen::Listing(view) => {
                let file = std::fs::File::create(path)
                    .with_context(|| format!("Failed to create {:?}", path))?;
                export::write_csv(file, &view.rows(), &self.options.columns)?;
            }
            Screen::Detail(view) => {
                std::fs::write(path, export::chart_to_json(&view.chart_data())?)
                    .with_context(|| format!("Failed to write {:?}", path))?;
            }
            Screen::NotFound(_) => {
                println!("Nothing to export");
                return Ok(());
            }
        }
        println!("Exported to {:?}", path);
        Ok(())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &args.api_url {
        config.api.base_url = url.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    covid_dashboard::logging::init(&config.logging);
    tracing::info!("Covid Dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Statistics API: {}", config.api.base_url);

    let client = DiseaseClient::new(ClientConfig::from(&config.api))
        .context("Failed to create statistics client")?;

    let options = TableOptions {
        columns: if args.columns.is_empty() {
            Column::ALL.to_vec()
        } else {
            args.columns.clone()
        },
        limit: None,
        placeholder: String::new(),
    };

    let mut dashboard = Dashboard::new(Arc::new(client), config, options);
    dashboard.navigate(Route::parse(&args.start)).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(command) => {
                if !dashboard.handle(command).await? {
                    break;
                }
            }
            Err(message) => println!("{}", message),
        }
    }

    tracing::info!("Dashboard closed");
    Ok(())
}
