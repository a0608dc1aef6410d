//! Covid Dashboard CLI
//!
//! One-shot commands against the statistics API:
//! - List countries (filtered, sorted, as table/JSON/CSV)
//! - Show one country's statistics and history
//! - Generate a config file

use clap::{Parser, Subcommand};
use covid_dashboard::client::{ClientConfig, DiseaseClient};
use covid_dashboard::config::{generate_default_config, Config};
use covid_dashboard::export::{self, ExportFormat};
use covid_dashboard::listing::{Column, SortOrder, SortState};
use covid_dashboard::render::{render_detail, render_listing, TableOptions};
use covid_dashboard::view::{DetailView, ListingView};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "covid-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "COVID-19 statistics from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Statistics API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List countries
    List {
        /// Case-insensitive substring of the country name
        #[arg(short, long, default_value = "")]
        search: String,
        /// Field to sort by (default: from config)
        #[arg(long)]
        sort: Option<String>,
        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,
        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
        /// Columns to show (comma-separated ids; default: all)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<Column>,
        /// Maximum number of rows
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one country's statistics and history
    Country {
        /// Country name as the API spells it
        name: String,
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, &content)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    covid_dashboard::logging::init(&config.logging);
    let client = DiseaseClient::new(ClientConfig::from(&config.api))?;

    match cli.command {
        Commands::List {
            search,
            sort,
            asc,
            format,
            columns,
            limit,
        } => {
            let format = parse_format(&format)?;
            let order = if asc { SortOrder::Asc } else { SortOrder::Desc };
            let sort = match sort {
                Some(field) => {
                    let field = field
                        .parse::<Column>()
                        .map(|c| c.id().to_string())
                        .unwrap_or(field);
                    SortState::new(field, order)
                }
                None if asc => SortState::new(config.display.default_order_by.clone(), order),
                None => config.display.initial_sort(),
            };

            let mut view = ListingView::new(sort);
            view.load(&client).await;
            view.set_search(search);

            let columns = if columns.is_empty() {
                Column::ALL.to_vec()
            } else {
                columns
            };

            match format {
                None => {
                    let options = TableOptions {
                        columns,
                        limit,
                        placeholder: String::new(),
                    };
                    render_listing(&mut std::io::stdout().lock(), &view, &options)?;
                }
                Some(format) => {
                    let rows = view.rows();
                    let rows = &rows[..limit.unwrap_or(rows.len()).min(rows.len())];
                    match format {
                        ExportFormat::Json => println!("{}", export::rows_to_json(rows)?),
                        ExportFormat::Csv => {
                            export::write_csv(std::io::stdout().lock(), rows, &columns)?
                        }
                    }
                }
            }
        }

        Commands::Country { name, format } => {
            let mut view = DetailView::new(name);
            view.load(&client).await;

            match parse_format(&format)? {
                None => render_detail(
                    &mut std::io::stdout().lock(),
                    &view,
                    &config.display.placeholder,
                )?,
                Some(ExportFormat::Json) => {
                    let body = serde_json::json!({
                        "country": view.country(),
                        "snapshot": view.snapshot(),
                        "chart": view.chart_data(),
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Some(ExportFormat::Csv) => {
                    eprintln!("CSV output is only available for 'list'");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

/// `None` for the text table, otherwise an export format
fn parse_format(format: &str) -> Result<Option<ExportFormat>, String> {
    match format {
        "table" => Ok(None),
        other => other.parse().map(Some),
    }
}
