//! Michelson simulator command-line interface.
//!
//! Run computations from TOML job files:
//! ```sh
//! michelson-cli run job.toml
//! michelson-cli validate job.toml
//! michelson-cli presets
//! ```

mod config;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "michelson-cli")]
#[command(about = "Michelson Interferometer Simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the response curve (and optional snapshots) from a job file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a job file without computing anything.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// List the named laser presets usable in `[optics]`.
    Presets,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            println!("Michelson Interferometer Simulator");
            println!("==================================");
            let job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());

            let result = runner::run_job(&job)?;

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));

            if job.output.save_response {
                runner::write_response_csv(&result, &out_dir.join("response.csv"), &job)?;
            }
            if job.output.save_json {
                runner::write_response_json(&result.response, &out_dir.join("response.json"))?;
            }
            if let Some(fringes) = &result.fringes {
                runner::write_fringes_csv(
                    &result.detector_axis,
                    fringes,
                    &out_dir.join("fringes.csv"),
                )?;
            }
            if let Some(waves) = &result.waves {
                runner::write_waves_csv(waves, &out_dir.join("waves.csv"))?;
            }

            println!("Simulation complete.");
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            runner::check_job(&job)?;
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
        Commands::Presets => {
            println!("Available laser presets:");
            println!();
            for (name, wavelength_nm, description) in config::LASER_PRESETS {
                println!("    {:<10} — {:>6.1} nm, {}", name, wavelength_nm, description);
            }
            Ok(())
        }
    }
}
