use std::path::Path;
use std::process;

use crate::constants::DEFAULT_PLACES;
use crate::file::{load_config, RunConfig};
use crate::reference::{complex_slices_almost_equal, expected_output};
use crate::sample::{modulated_samples, ModulatedSample};
use crate::{Flowgraph, PhaseModulator, VectorSink, VectorSource};

use tracing::{info, warn};

fn calculate_phase_modulation(
    config: &RunConfig,
) -> Result<Vec<ModulatedSample>, Box<dyn std::error::Error>> {
    let modulator = PhaseModulator::new(config.sensitivity);
    let mut flowgraph = Flowgraph::new(
        VectorSource::new(config.samples.clone()),
        modulator.clone(),
        VectorSink::new(),
    )
    .with_chunk_size(config.chunk_size);
    flowgraph.run()?;

    let output = flowgraph.sink().data();
    let expected = expected_output(&config.samples, config.sensitivity);
    complex_slices_almost_equal(&expected, output, DEFAULT_PLACES)?;
    info!(places = DEFAULT_PLACES, "output matches reference");

    Ok(modulated_samples(&config.samples, output, &modulator))
}

#[cfg(feature = "cli")]
pub fn init_logging(log_level: Option<&str>) {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG wins over the config file, info if neither is set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // tests run several configs in one process, only the first subscriber sticks
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}

// basename.toml -> basename.html, anything else just gets .html appended
pub fn html_output_path(config_path: &Path) -> String {
    let mut path_html = match config_path.extension() {
        Some(extension) if extension == "toml" => {
            config_path.with_extension("html").display().to_string()
        }
        _ => format!("{}.html", config_path.display()),
    };
    // Remove the UNC prefix on Windows if present
    if cfg!(target_os = "windows") && path_html.starts_with(r"\\?\") {
        path_html = path_html[4..].to_string();
    }
    path_html
}

pub struct Config {}

impl Config {
    pub fn run(args: &[String]) -> Result<Config, Box<dyn std::error::Error>> {
        if args.len() < 2 {
            return Err("not enough arguments".into());
        }

        if args.len() > 2 {
            return Err("too many arguments, expecting only 2, such as `phasemod filepath`".into());
        }

        // Check for special flags
        match args[1].as_str() {
            "--version" | "-v" => {
                print_version();
                process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            _ => {}
        }

        let cwd = std::env::current_dir()?;
        // cargo run arg[1], such as cargo run files/simple_config.toml
        // phasemod arg[1], such as phasemod files/simple_config.toml
        let file_path = args[1].clone();
        println!("Config Path: {}", file_path);
        let full_path_to_config = cwd.join(file_path);
        println!("Full Path: {}", full_path_to_config.display());

        let config = match load_config(&full_path_to_config.display().to_string()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                return Err(e);
            }
        };

        #[cfg(feature = "cli")]
        init_logging(config.log_level.as_deref());

        let samples = calculate_phase_modulation(&config)?;
        print_samples(config.sensitivity, &samples);

        let output_html_path = html_output_path(&full_path_to_config);

        #[cfg(feature = "plot")]
        {
            println!("Generating HTML table at: {}", output_html_path);
            if let Err(e) =
                crate::plot::generate_html_table(config.sensitivity, &samples, &output_html_path)
            {
                warn!(error = %e, "could not write html table");
                eprintln!("Error generating HTML table: {}", e);
            }
        }
        #[cfg(not(feature = "plot"))]
        warn!(path = %output_html_path, "built without the plot feature, skipping html table");

        Ok(Config {})
    }
}

pub fn print_version() {
    println!("phasemod {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_error(error: &str) {
    const RED: &str = "\x1b[31m";
    const RESET: &str = "\x1b[0m";
    println!("{}Problem running phasemod: {error}{}", RED, RESET);
}

pub fn print_help() {
    // ANSI color codes
    const BOLD: &str = "\x1b[1m";
    const CYAN: &str = "\x1b[36m";
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const RESET: &str = "\x1b[0m";

    println!("📡 Phase modulator test bench{}", RESET);
    println!();
    println!("{}{}VERSION:{}", BOLD, YELLOW, RESET);
    println!("    {}{}{}", GREEN, env!("CARGO_PKG_VERSION"), RESET);
    println!();
    println!("{}{}USAGE:{}", BOLD, YELLOW, RESET);
    println!("    {} phasemod <FILE_PATH>{}", GREEN, RESET);
    println!();
    println!("     FILE_PATH: path to a toml config file");
    println!();
    println!("     The samples in the toml file are run through a phase modulator,");
    println!("     checked against cos + i*sin to 5 decimal places, and an html table");
    println!("     is written next to the config file.");
    println!();
    println!("{}{}OPTIONS:{}", BOLD, YELLOW, RESET);
    println!(
        "    {}  -v, --version{}{}    Print version information",
        GREEN, RESET, RESET
    );
    println!(
        "    {}  -h, --help{}{}       Print help information",
        GREEN, RESET, RESET
    );
    println!();
    println!("{}{}ENVIRONMENT:{}", BOLD, YELLOW, RESET);
    println!("    {}  RUST_LOG{}           Overrides `log_level` from the config", GREEN, RESET);
    println!();
    println!("{}{}EXAMPLES:{}", BOLD, YELLOW, RESET);
    println!("    {} # Single file (Relative path){}", CYAN, RESET);
    println!("    {} phasemod files/simple_config.toml{}", GREEN, RESET);
    println!();
}

pub fn print_samples(sensitivity: f32, samples: &[ModulatedSample]) {
    println!();
    println!("Sensitivity:\t{:>10.6} rad/unit", sensitivity);
    println!();
    println!(
        "{:>6}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
        "Index", "Input", "Phase", "Real", "Imag", "|y|"
    );
    for sample in samples {
        // `{:>10.5}` aligns positive and negative numbers on the decimal
        println!(
            "{:>6}  {:>10.5}  {:>10.5}  {:>10.5}  {:>10.5}  {:>10.5}",
            sample.index,
            sample.input,
            sample.phase,
            sample.output.re,
            sample.output.im,
            sample.magnitude()
        );
    }
    println!();
    println!("Summary:");
    println!("--------");
    println!("Number of Samples: {}", samples.len());
}
