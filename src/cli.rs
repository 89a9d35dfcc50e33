// src/cli.rs
//
// Headless front end: list/filter/export and create, same library paths as the GUI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::options::{AppOptions, ExportFormat};
use crate::download::DirSink;
use crate::error::ConfigError;
use crate::export;
use crate::filter::FilterController;
use crate::model::{Column, Spot};
use crate::net::{ApiClient, SpotApi};
use crate::table::SpotTable;

#[derive(Parser, Debug)]
#[command(name = "spot_cli")]
#[command(about = "List, filter, export and create music video spots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// API base URL (default: $SPOTS_API_URL or http://127.0.0.1:5000)
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Request timeout in seconds, 0 = none
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch spots, filter them and print or export the result
    List {
        /// Case-insensitive substring to search for
        #[arg(short, long, default_value = "")]
        query: String,

        /// `all` or a column name (Naslov, Redatelj, … izvodaci)
        #[arg(short, long, default_value = "all")]
        attribute: String,

        /// Column to sort by
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Write filtered_data.<fmt> instead of printing (repeatable)
        #[arg(long, value_enum)]
        export: Vec<FormatArg>,

        /// Output directory for exports (default: $SPOTS_OUT_DIR or ./downloads)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Create a spot, then reload and report the new total
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        director: String,
        #[arg(long, default_value = "")]
        label: String,
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value_t = 0)]
        duration: i64,
        #[arg(long, default_value = "")]
        genre: String,
        #[arg(long, default_value_t = 0)]
        views: i64,
        #[arg(long, default_value_t = 0)]
        comments: i64,
        #[arg(long, default_value_t = 0)]
        likes: i64,
        /// Performer name (repeatable)
        #[arg(long = "performer")]
        performers: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let mut options = AppOptions::from_env();
    if let Some(api) = cli.api {
        options.api.base_url = api.trim_end_matches('/').to_string();
    }
    if let Some(t) = cli.timeout {
        options.api.timeout_secs = t;
    }

    let client = ApiClient::new(&options.api).wrap_err("building HTTP client")?;

    match cli.command {
        Commands::List { query, attribute, sort, desc, export: formats, out } => {
            if let Some(dir) = out {
                options.export.out_dir = dir;
            }
            let filter = FilterController::from_raw(&query, &attribute)?;
            let sort = sort
                .map(|name| Column::from_name(&name).ok_or(ConfigError::UnknownColumn(name)))
                .transpose()?;

            let table = load_table(&client, &filter, sort.map(|c| (c, !desc)))?;
            if formats.is_empty() {
                print_table(&table)?;
            } else {
                let mut sink = DirSink::new(&options.export.out_dir);
                for fmt in formats {
                    let path = export::export(&table, fmt.into(), &mut sink)?;
                    println!("Wrote {} ({} rows)", path.display(), table.len());
                }
            }
        }

        Commands::Create {
            title, director, label, date, duration, genre, views, comments, likes, performers,
        } => {
            let spot = Spot {
                title, director, label, date,
                duration_secs: duration,
                genre, views, comments, likes, performers,
            };
            client.create_spot(&spot).wrap_err_with(|| format!("creating {:?}", spot.title))?;
            println!("Created {:?}", spot.title);

            let table = load_table(&client, &FilterController::new(), None)?;
            println!("Now {} spot(s) on the server", table.total());
        }
    }
    Ok(())
}

fn load_table(api: &dyn SpotApi, filter: &FilterController, sort: Option<(Column, bool)>) -> Result<SpotTable> {
    let rows = api.load_spots().wrap_err("loading spots")?;
    let mut table = SpotTable::new(rows);
    if let Some((column, ascending)) = sort {
        table.sort_by(column, ascending);
    }
    filter.apply(&mut table);
    Ok(table)
}

/// Tab-separated, header first.
fn print_table(table: &SpotTable) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let header: Vec<&str> = Column::ALL.iter().map(|c| c.name()).collect();
    writeln!(out, "{}", header.join("\t"))?;
    for spot in table.visible() {
        let cells: Vec<String> = Column::ALL.iter().map(|c| c.display(spot)).collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }
    writeln!(out, "-- {} of {} rows", table.len(), table.total())?;
    out.flush()
}
