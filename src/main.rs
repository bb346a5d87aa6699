use bucketsql::config::DEFAULT_DATA_DIR;
use bucketsql::{Result, Session, SessionConfig, cli};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// SQL-like shell over an embedded key-value store
#[derive(Parser, Debug)]
#[command(name = "bucketsql", version, about)]
struct Args {
    /// Directory holding one `<name>.db` keyspace per database
    #[arg(long, default_value = DEFAULT_DATA_DIR, env = "BUCKETSQL_DATA_DIR")]
    data_dir: PathBuf,

    /// Database to open before the first prompt
    #[arg(short = 'd', long)]
    database: Option<String>,

    /// Execute one line of statements and exit
    #[arg(short = 'c', long)]
    command: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Suppress the banner
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut session = Session::new(SessionConfig::new(args.data_dir));
    if let Some(name) = &args.database {
        session.open_database(name)?;
    }

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    if let Some(command) = &args.command {
        cli::execute_line(&mut session, command, &mut output)?;
        return session.close();
    }

    if !args.quiet {
        writeln!(
            output,
            "bucketsql {} (type EXIT to quit)",
            env!("CARGO_PKG_VERSION")
        )?;
    }
    cli::cli(&mut session, std::io::stdin().lock(), &mut output)
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "bucketsql=debug"
    } else {
        "bucketsql=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
