use bulls_and_cows::cli::{CliInterface, parse_cli};
use bulls_and_cows::error::GameError;
use bulls_and_cows::game_state::game_loop;
use bulls_and_cows::logging;
use bulls_and_cows::secret::generate_secret;
use bulls_and_cows::tui::TuiInterface;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process;

fn main() {
    logging::init();
    let cli = parse_cli();

    let secret = match cli.seed {
        Some(seed) => generate_secret(&mut StdRng::seed_from_u64(seed)),
        None => generate_secret(&mut rand::thread_rng()),
    };
    info!("New session (seeded: {})", cli.seed.is_some());

    let result = if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => match game_loop(&secret, &mut interface) {
                // ESC in the terminal UI is a deliberate quit
                Err(GameError::InputClosed) => Ok(()),
                other => other,
            },
            Err(e) => Err(GameError::Io(e)),
        }
    } else {
        let mut interface = CliInterface::new(io::stdin().lock(), io::stdout().lock());
        game_loop(&secret, &mut interface)
    };

    if let Err(e) = result {
        eprintln!("\n{e}");
        process::exit(1);
    }
}
