use acp_times::{compute_control_times, parse_start_time, ControlTime};
use anyhow::Result;
use clap::{Parser, Subcommand};
use shared::{domain::BrevetDistance, protocol::format_control_time};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print open and close times for each control of a brevet.
    Times {
        #[arg(long, default_value_t = 200, allow_negative_numbers = true)]
        brevet: i64,
        /// Start time, e.g. 2024-06-01T07:00:00+02:00
        #[arg(long)]
        start: String,
        #[arg(required = true, allow_negative_numbers = true)]
        controls: Vec<f64>,
    },
    /// List the sanctioned brevet distances.
    Brevets,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("warn").init();
    let cli = Cli::parse();

    match cli.command {
        Command::Times {
            brevet,
            start,
            controls,
        } => {
            let start = parse_start_time(&start)?;
            println!("{brevet} km brevet starting {}", format_control_time(&start));
            for control_km in controls {
                println!("{}", control_line(control_km, brevet, start));
            }
        }
        Command::Brevets => {
            for brevet in BrevetDistance::ALL {
                println!("{brevet}");
            }
        }
    }

    Ok(())
}

fn control_line(control_km: f64, brevet_km: i64, start: ControlTime) -> String {
    match compute_control_times(control_km, brevet_km, start) {
        Ok(times) => format!(
            "{control_km:>7.1} km  open {}  close {}",
            format_control_time(&times.open),
            format_control_time(&times.close)
        ),
        Err(error) => format!("{control_km:>7.1} km  {error}"),
    }
}
