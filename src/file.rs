use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::constants::DEFAULT_CHUNK_SIZE;

#[derive(Deserialize, Debug)]
struct Config {
    sensitivity: Option<f32>,
    sensitivity_over_pi: Option<f32>,
    chunk_size: Option<usize>,
    log_level: Option<String>,
    samples: Vec<SampleConfig>,
}

#[derive(Deserialize, Debug)]
struct IncludedConfig {
    samples: Vec<SampleConfig>,
}

#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SampleConfig {
    Explicit { values: Vec<f32> },
    Constant { value: f32, count: usize },
    Ramp { start: f32, stop: f32, count: usize },
    Include { path: String },
}

// everything a run needs, resolved from the toml file
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub sensitivity: f32, // radians per unit amplitude
    pub chunk_size: usize,
    pub log_level: Option<String>,
    pub samples: Vec<f32>,
}

pub fn load_config(path: &str) -> Result<RunConfig, Box<dyn std::error::Error>> {
    info!(path, "loading config");
    let config_content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_content)?;
    debug!(?config, "parsed config");

    let sensitivity = match (config.sensitivity, config.sensitivity_over_pi) {
        (Some(sensitivity), None) => sensitivity,
        (None, Some(multiple)) => multiple * std::f32::consts::PI,
        (Some(_), Some(_)) => {
            return Err("set only one of `sensitivity` and `sensitivity_over_pi`".into())
        }
        (None, None) => return Err("missing `sensitivity` or `sensitivity_over_pi`".into()),
    };

    let mut samples = Vec::new();
    let config_path = Path::new(path);
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    load_samples_recursive(config.samples, &mut samples, base_dir)?;
    info!(samples = samples.len(), sensitivity, "config loaded");

    Ok(RunConfig {
        sensitivity,
        chunk_size: config.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
        log_level: config.log_level,
        samples,
    })
}

fn load_samples_recursive(
    sample_configs: Vec<SampleConfig>,
    samples: &mut Vec<f32>,
    base_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    for sample_config in sample_configs {
        match sample_config {
            SampleConfig::Explicit { values } => {
                samples.extend(values);
            }
            SampleConfig::Constant { value, count } => {
                samples.extend(std::iter::repeat(value).take(count));
            }
            SampleConfig::Ramp { start, stop, count } => {
                samples.extend(ramp(start, stop, count));
            }
            SampleConfig::Include { path } => {
                // included files are relative to the file that includes them
                let included_path = base_dir.join(&path);
                debug!(path = %included_path.display(), "loading included samples");
                let content = fs::read_to_string(&included_path)?;
                let included: IncludedConfig = toml::from_str(&content)?;

                let new_base_dir = included_path.parent().unwrap_or_else(|| Path::new("."));
                load_samples_recursive(included.samples, samples, new_base_dir)?;
            }
        }
    }
    Ok(())
}

// evenly spaced from start to stop inclusive
fn ramp(start: f32, stop: f32, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f32;
            (0..count).map(|i| start + step * i as f32).collect()
        }
    }
}
