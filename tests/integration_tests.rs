// Integration tests for bulls-and-cows
// These drive whole sessions through the console front end

use bulls_and_cows::cli::CliInterface;
use bulls_and_cows::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

fn play(secret: &str, input: &str) -> (Result<(), GameError>, String) {
    let secret = Secret::parse(secret).unwrap();
    let mut interface = CliInterface::new(Cursor::new(input.to_string()), Vec::new());
    let result = game_loop(&secret, &mut interface);
    let output = String::from_utf8(interface.into_writer()).unwrap();
    (result, output)
}

#[test]
fn test_end_to_end_session() {
    // Secret 4821 holds its only 1 at the last position
    let (result, output) = play("4821", "1111\n1100\n4821\n");
    assert!(result.is_ok());
    assert_eq!(
        output,
        "Guess: 1 correct positions, 0 correct digits.\n\
         Guess: 0 correct positions, 1 correct digits.\n\
         Guess: 4 correct positions, 0 correct digits.\n\
         Correct! You win!\n"
    );
}

#[test]
fn test_wrong_length_guess_reprompts() {
    let (result, output) = play("4821", "482\n48210\n4821\n");
    assert!(result.is_ok());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Guess: Your guess must have 4 digits.");
    assert_eq!(lines[1], "Guess: Your guess must have 4 digits.");
    assert_eq!(lines[2], "Guess: 4 correct positions, 0 correct digits.");
    assert_eq!(lines[3], "Correct! You win!");
}

#[test]
fn test_repeated_digit_guess_scoring() {
    let (result, output) = play("1234", "1122\n1234\n");
    assert!(result.is_ok());
    assert!(output.starts_with("Guess: 1 correct positions, 1 correct digits.\n"));
}

#[test]
fn test_non_digit_guess_scores_zero() {
    let (result, output) = play("1234", "abcd\n1234\n");
    assert!(result.is_ok());
    assert!(output.starts_with("Guess: 0 correct positions, 0 correct digits.\n"));
}

#[test]
fn test_whitespace_is_part_of_the_guess() {
    // " 1234" is five characters, so it is a length error rather than a win
    let (result, output) = play("1234", " 1234\n1234 \n1234\n");
    assert!(result.is_ok());
    assert_eq!(output.matches("Your guess must have 4 digits.").count(), 2);
    assert!(output.ends_with("Correct! You win!\n"));
}

#[test]
fn test_windows_line_endings() {
    let (result, output) = play("1234", "1234\r\n");
    assert!(result.is_ok());
    assert!(output.ends_with("Correct! You win!\n"));
}

#[test]
fn test_input_ends_before_win() {
    let (result, output) = play("4821", "1234\n");
    assert!(matches!(result, Err(GameError::InputClosed)));
    assert!(!output.contains("Correct! You win!"));
}

#[test]
fn test_all_digits_misplaced_keeps_playing() {
    let (result, output) = play("1234", "4321\n1234\n");
    assert!(result.is_ok());
    assert!(output.starts_with("Guess: 0 correct positions, 4 correct digits.\n"));
}

#[test]
fn test_generated_secret_can_be_won() {
    let secret = generate_secret(&mut StdRng::seed_from_u64(2024));
    let input = format!("0000\n{secret}\n");
    let mut interface = CliInterface::new(Cursor::new(input), Vec::new());
    game_loop(&secret, &mut interface).unwrap();
    let output = String::from_utf8(interface.into_writer()).unwrap();
    assert!(output.ends_with("Correct! You win!\n"));
}

#[test]
fn test_every_valid_secret_scores_itself_perfectly() {
    for n in 0..10_000u32 {
        let code = format!("{n:04}");
        if let Ok(secret) = Secret::parse(&code) {
            assert_eq!(score(&code, secret.as_str()), Feedback::new(4, 0));
            assert_eq!(evaluate_guess(&secret, &code), Round::Solved(Feedback::new(4, 0)));
        }
    }
}

#[test]
fn test_fit_report_matches_builtin_data() {
    let series = builtin_series().unwrap();
    let report = format_report(&series);
    assert!(report.contains("Propagation loss: (4.6 +/- 0.3) dB/cm"));
    assert!(report.contains("Coupling loss: (20.2 +/- 0.4) dB"));
}
