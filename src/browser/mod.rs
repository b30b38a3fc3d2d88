//! Delivery of the composed URL: print it, or hand it to the browser.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

/// Print the URL to stdout, or launch the platform's default browser on it.
///
/// Print mode writes nothing but the URL, keeping stdout clean for
/// pipelines. Open mode is fire-and-forget: launch failures are reported on
/// stderr and are not fatal, since the composed URL was already the useful
/// part of the work.
pub fn open_or_print(url: &str, print_only: bool) {
    if print_only {
        println!("{}", url);
        return;
    }

    match open_url(url) {
        Ok(()) => {
            if std::io::stdout().is_terminal() {
                println!("Opening {}", url.underline());
            } else {
                println!("Opening {}", url);
            }
        }
        Err(e) => eprintln!("{:#}", e),
    }
}

/// Open a URL in the user's default browser.
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_url(url: &str) -> Result<()> {
    webbrowser::open(url)
        .with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(())
}
