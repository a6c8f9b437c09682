use clap::Parser;
use std::error::Error;
use std::io;
use std::process::ExitCode;
use subnet_calculator::config::{init_logging, Config, OutputFormat};
use subnet_calculator::processing::{calculate, calculate_cidr};
use subnet_calculator::shell::{run_lines, write_outcome};

/// Compute IPv4 subnet mask, network, usable range, broadcast and host count.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// IPv4 address, or a.b.c.d/prefix when PREFIX is omitted. Reads requests
    /// from stdin when absent.
    address: Option<String>,

    /// Prefix length, 0-32.
    #[arg(allow_hyphen_values = true)]
    prefix: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if cli.json {
        config.output = OutputFormat::Json;
    }
    if cli.no_color {
        config.color = false;
    }
    if !config.color {
        colored::control::set_override(false);
    }
    init_logging(&config.log_config)?;
    log::info!("#Start main() {config:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let all_ok = match (cli.address.as_deref(), cli.prefix.as_deref()) {
        (Some(address), Some(prefix)) => {
            write_outcome(&mut out, &calculate(address, prefix), &config)?
        }
        (Some(cidr), None) => write_outcome(&mut out, &calculate_cidr(cidr), &config)?,
        (None, _) => run_lines(io::stdin().lock(), &mut out, &config)?.failed == 0,
    };

    log::info!("# End main()");
    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
