use std::{env, error::Error, fs, path::PathBuf};

// Shared with the library so cfg.toml is checked by the exact same rules
#[allow(dead_code)]
#[path = "src/constants.rs"]
mod constants;
#[allow(dead_code)]
#[path = "src/error.rs"]
mod error;
#[allow(dead_code)]
#[path = "src/raw.rs"]
mod raw;
#[allow(dead_code)]
#[path = "src/validate.rs"]
mod validate;

use constants::*;
use raw::{config_source, RawConfig};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-env-changed={CONFIG_PATH_ENV}");
    let source = config_source(
        env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
        PathBuf::from(CONFIG_FILE).exists(),
    );

    // Tell Cargo to rerun if toml changes
    for path in &source.watch {
        println!("cargo:rerun-if-changed={}", path.display());
    }
    if source.fallback {
        println!("cargo:warning={CONFIG_FILE} not found, building with {CONFIG_EXAMPLE_FILE}");
    }

    let path = &source.path;

    // Read, parse and validate
    let toml_str = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let raw = RawConfig::parse(&toml_str)
        .map_err(|e| format!("invalid {}: {e}", path.display()))?;
    let code = raw
        .render()
        .map_err(|e| format!("invalid {}: {e}", path.display()))?;

    if !raw.ota.password.is_empty() && !raw.ota.password_hash.is_empty() {
        println!("cargo:warning=ota.password and ota.password_hash both set, the hash wins");
    }

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = PathBuf::from(out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
