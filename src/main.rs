use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::warn;

use twirl::app::settings::SpinnerSettings;
use twirl::app::spinner_loop;
use twirl::error;
use twirl::infra::logging;
use twirl::ui::adapters::TerminalSink;

/// CLI arguments (empty, but needed for --help and --version)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    Args::parse(); // --help, --version
    logging::init()?;

    let settings = SpinnerSettings::default();
    let mut sink = TerminalSink::stdout().wrap_err("stdout is not writable")?;
    if !sink.is_terminal() {
        warn!("stdout is not a terminal; backspaces will be written as raw bytes");
    }

    spinner_loop::run_and_settle(&mut sink, &settings).await?;

    Ok(())
}
