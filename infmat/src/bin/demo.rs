use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use infmat::{diagonal_cross, parse_window, print, Coord, PrintConfig};
use tracing::info;

/// Populate a diagonal cross in a sparse matrix and list what got stored
#[derive(Parser, Debug)]
#[command(name = "infmat-demo")]
#[command(version)]
#[command(about = "Fill the diagonal and antidiagonal of a sparse matrix and print the stored cells")]
struct Args {
    /// Side length of the cross
    #[arg(short, long, default_value_t = 10)]
    size: Coord,

    /// Value that stands for "no entry"
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    default: Coord,

    /// Also print the matrix as a grid
    #[arg(short, long)]
    print: bool,

    /// Rows to print (format: start:end)
    #[arg(long, allow_hyphen_values = true)]
    rows: Option<String>,

    /// Last column to print
    #[arg(long)]
    max_column: Option<Coord>,

    /// Print configuration as JSON
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dump stored cells as JSON instead of one line per cell
    #[arg(long)]
    json: bool,
}

fn main() -> infmat::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let matrix = diagonal_cross(args.size, args.default)?;
    info!(size = args.size, stored = matrix.size(), "built diagonal cross");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.json {
        serde_json::to_writer(&mut out, &matrix)?;
        writeln!(out)?;
    } else {
        for triple in &matrix {
            writeln!(out, "{}{}{}", triple.row, triple.column, triple.value)?;
        }
    }

    if args.print {
        let mut config = match &args.config {
            Some(path) => PrintConfig::from_json_file(path)?,
            None => PrintConfig::default(),
        };
        if let Some(rows) = &args.rows {
            config = config.with_rows(parse_window(rows)?);
        }
        if let Some(max_column) = args.max_column {
            config = config.with_max_column(max_column);
        }
        print(&matrix, &config, &mut out)?;
    }

    writeln!(out, "Matrix capacity {}", matrix.size())?;
    Ok(())
}
