//! Devfolio - A single-page developer portfolio for the terminal.

use anyhow::{Context, Result};
use clap::Parser;

use devfolio::app::{self, AppOptions};
use devfolio::cli::Cli;
use devfolio::content::Profile;
use devfolio::log;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut profile = Profile::load_or_builtin(cli.profile.as_deref()).with_context(|| {
        match &cli.profile {
            Some(path) => format!("failed to load profile from {}", path.display()),
            None => "failed to load built-in profile".to_string(),
        }
    })?;
    if let Some(delay) = cli.type_delay {
        profile.type_delay_ms = delay;
    }

    log!("profile"; "{}, {} sections", profile.name, profile.sections().len());

    let handle = app::mount(
        profile,
        AppOptions {
            dark_mode: cli.theme.dark_mode(),
        },
    )
    .context("failed to set up the terminal")?;

    let result = app::run(&handle);
    handle.unmount();
    result.context("event loop failed")?;

    Ok(())
}
