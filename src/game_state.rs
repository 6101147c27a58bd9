use crate::error::GameError;
use crate::scorer::{Feedback, score};
use crate::secret::Secret;
use crate::{debug_log, info_log};

/// Outcome of one submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    /// Guess length differs from the secret; nothing was scored.
    WrongLength { expected: usize },
    /// Scored but not yet correct.
    Miss(Feedback),
    /// Guess equals the secret.
    Solved(Feedback),
}

/// Front end the interaction loop talks to.
///
/// `read_guess` returns `Ok(None)` when the input stream ends.
pub trait GameInterface {
    fn read_guess(&mut self) -> Result<Option<String>, GameError>;
    fn display_length_error(&mut self, expected: usize) -> Result<(), GameError>;
    fn display_feedback(&mut self, guess: &str, feedback: &Feedback) -> Result<(), GameError>;
    fn display_victory(&mut self) -> Result<(), GameError>;
}

/// Validate and score a single guess.
#[must_use]
pub fn evaluate_guess(secret: &Secret, guess: &str) -> Round {
    let expected = secret.as_str().chars().count();
    if guess.chars().count() != expected {
        return Round::WrongLength { expected };
    }
    let feedback = score(guess, secret.as_str());
    if guess == secret.as_str() {
        Round::Solved(feedback)
    } else {
        Round::Miss(feedback)
    }
}

/// Run one session until the secret is guessed.
pub fn game_loop<I: GameInterface + ?Sized>(
    secret: &Secret,
    interface: &mut I,
) -> Result<(), GameError> {
    info_log!("game_loop() - session started");
    loop {
        let Some(guess) = interface.read_guess()? else {
            info_log!("game_loop() - input closed");
            return Err(GameError::InputClosed);
        };

        match evaluate_guess(secret, &guess) {
            Round::WrongLength { expected } => {
                debug_log!("game_loop() - rejected guess {:?}", guess);
                interface.display_length_error(expected)?;
            }
            Round::Miss(feedback) => {
                debug_log!("game_loop() - {:?} scored {:?}", guess, feedback);
                interface.display_feedback(&guess, &feedback)?;
            }
            Round::Solved(feedback) => {
                interface.display_feedback(&guess, &feedback)?;
                interface.display_victory()?;
                info_log!("game_loop() - secret guessed");
                return Ok(());
            }
        }
    }
}
