use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use tfcopen::browser;
use tfcopen::config;
use tfcopen::error::TfcopenError;
use tfcopen::org;
use tfcopen::uri;

// Exit codes: 0 success, 1 config discovery, 2 org resolution
const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 1;
const EXIT_ORG: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "tfcopen")]
#[command(about = "Open the current project's Terraform Cloud page in a browser", long_about = None)]
struct Cli {
    /// Print the URL instead of opening it
    #[arg(short, long)]
    print: bool,

    /// Open the private module registry instead of the workspaces view
    #[arg(short, long)]
    registry: bool,

    /// Print version and exit
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Path to a .tfcopen file (skips the upward directory search)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        process::exit(EXIT_SUCCESS);
    }

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: failed to determine the current directory: {}", e);
            process::exit(EXIT_CONFIG);
        }
    };

    let url = match resolve_url(&cwd, cli.registry, cli.config.as_deref(), cli.verbose) {
        Ok(url) => url,
        Err(e @ TfcopenError::OrgUnresolved) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_ORG);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_CONFIG);
        }
    };

    browser::open_or_print(&url, cli.print);
    process::exit(EXIT_SUCCESS);
}

/// Locate config, resolve the org, and compose the final URL.
///
/// With `registry` set, config discovery failures are tolerated: the
/// registry URL needs only an org, which an org-only marker file (carried
/// inside `ConfigInvalid`) or the environment can still supply. Without it,
/// any discovery failure is terminal.
fn resolve_url(
    start: &Path,
    registry: bool,
    config_override: Option<&Path>,
    verbose: bool,
) -> Result<String, TfcopenError> {
    let located = match config_override {
        Some(path) => {
            if verbose {
                eprintln!("Using config file override: {}", path.display());
            }
            config::load_marker(path)
        }
        None => config::locate_config_from(start),
    };

    let config = match located {
        Ok(config) => Some(config),
        Err(TfcopenError::ConfigInvalid { config, .. }) if registry => Some(config),
        Err(e) if registry => {
            if verbose {
                eprintln!("Ignoring config discovery failure for the registry URL: {}", e);
            }
            None
        }
        Err(e) => return Err(e),
    };

    let org = org::resolve_org(config.as_ref())?;
    if verbose {
        eprintln!("Resolved org: {}", org);
    }

    let fragment = if registry {
        uri::REGISTRY_URI.to_string()
    } else {
        // The non-registry flow only reaches here with a located config.
        match &config {
            Some(config) => uri::workspaces_uri(config),
            None => String::new(),
        }
    };

    Ok(uri::compose_url(&org, &fragment))
}
