use bulls_and_cows::fit::{builtin_series, format_report};
use bulls_and_cows::logging;
use bulls_and_cows::plot::{DEFAULT_FIGURE_PATH, FigureViewer, write_figure};
use clap::Parser;
use log::{info, warn};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

/// Fit propagation and coupling loss to waveguide insertion-loss data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Where to write the rendered figure
    #[arg(short = 'o', long = "output", default_value = DEFAULT_FIGURE_PATH)]
    output: PathBuf,

    /// Write the figure without opening the interactive viewer
    #[arg(long = "no-show")]
    no_show: bool,
}

/// The viewer needs a real terminal; piped or redirected output skips it.
fn should_show(args: &Args, stdout_is_terminal: bool) -> bool {
    !args.no_show && stdout_is_terminal
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let series = builtin_series()?;
    println!("{}", format_report(&series));

    write_figure(&args.output, &series)?;
    info!("Figure written to {}", args.output.display());

    if !should_show(args, io::stdout().is_terminal()) {
        if !args.no_show {
            warn!("stdout is not a terminal; skipping the interactive viewer");
        }
        return Ok(());
    }

    match FigureViewer::new() {
        Ok(mut viewer) => viewer.show(&series)?,
        Err(e) => warn!(
            "Cannot open the interactive viewer ({e}); figure is in {}",
            args.output.display()
        ),
    }
    Ok(())
}

fn main() {
    logging::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("insertion-loss: {e}");
        process::exit(1);
    }
}
