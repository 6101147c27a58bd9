// Library interface for bulls-and-cows
// Shared by the game binary, the insertion-loss utility and integration tests

pub mod cli;
pub mod error;
pub mod fit;
pub mod game_state;
pub mod logging;
pub mod plot;
pub mod scorer;
pub mod secret;
pub mod tui;

// Re-export commonly used items for easier testing
pub use error::{FitError, GameError, PlotError, SecretError};
pub use fit::{LineFit, Series, builtin_series, fit_line, format_report};
pub use game_state::{GameInterface, Round, evaluate_guess, game_loop};
pub use scorer::{Feedback, score};
pub use secret::{CODE_LENGTH, Secret, generate_secret};
