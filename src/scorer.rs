use std::fmt;

/// Result of scoring one guess against the secret.
///
/// `exact` counts characters in the right position. `partial` counts the
/// remaining shared characters, each credited at most as many times as it
/// is left in the secret once exact matches are taken out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub exact: usize,
    pub partial: usize,
}

impl Feedback {
    #[must_use]
    pub fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// Total number of characters the guess shares with the secret.
    #[must_use]
    pub fn matched(&self) -> usize {
        self.exact + self.partial
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} correct positions, {} correct digits.",
            self.exact, self.partial
        )
    }
}

/// Score `guess` against `secret`. Both must have the same number of
/// characters; the interaction loop rejects mismatched lengths before
/// calling this.
#[must_use]
pub fn score(guess: &str, secret: &str) -> Feedback {
    let exact = guess
        .chars()
        .zip(secret.chars())
        .filter(|(g, s)| g == s)
        .count();

    let mut remaining: Vec<char> = secret.chars().collect();
    let secret_len = remaining.len();
    for g in guess.chars() {
        if let Some(pos) = remaining.iter().position(|&c| c == g) {
            remaining.swap_remove(pos);
        }
    }

    let partial = secret_len - remaining.len() - exact;
    let feedback = Feedback { exact, partial };
    debug_assert!(feedback.matched() <= secret_len);
    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_identical() {
        assert_eq!(score("4821", "4821"), Feedback::new(4, 0));
        assert_eq!(score("0123", "0123"), Feedback::new(4, 0));
    }

    #[test]
    fn test_score_no_overlap() {
        assert_eq!(score("5678", "1234"), Feedback::new(0, 0));
    }

    #[test]
    fn test_score_all_partial() {
        // Every digit present, none in place
        assert_eq!(score("4321", "1234"), Feedback::new(0, 4));
        assert_eq!(score("2143", "1234"), Feedback::new(0, 4));
    }

    #[test]
    fn test_score_mixed() {
        assert_eq!(score("1243", "1234"), Feedback::new(2, 2));
        assert_eq!(score("1350", "1234"), Feedback::new(1, 1));
    }

    #[test]
    fn test_score_repeated_guess_digits_with_exact() {
        // Only position 0 lines up; the second 1 finds nothing left, one 2 is misplaced
        assert_eq!(score("1122", "1234"), Feedback::new(1, 1));
    }

    #[test]
    fn test_score_repeated_guess_digits_partial_capped() {
        // A repeated digit is credited once per occurrence in the secret
        assert_eq!(score("1111", "4821"), Feedback::new(1, 0));
        assert_eq!(score("2222", "4821"), Feedback::new(1, 0));
        assert_eq!(score("1100", "4812"), Feedback::new(0, 1));
        assert_eq!(score("3311", "1234"), Feedback::new(0, 2));
    }

    #[test]
    fn test_score_non_digit_characters_never_match() {
        assert_eq!(score("abcd", "1234"), Feedback::new(0, 0));
        assert_eq!(score("1x3y", "1234"), Feedback::new(2, 0));
    }

    #[test]
    fn test_score_bound_holds_for_all_four_digit_guesses() {
        let secret = "4821";
        for n in 0..10_000 {
            let guess = format!("{n:04}");
            let feedback = score(&guess, secret);
            assert!(feedback.matched() <= 4, "{guess}: {feedback:?}");
        }
    }

    #[test]
    fn test_matched_is_multiset_overlap() {
        fn overlap(guess: &str, secret: &str) -> usize {
            (b'0'..=b'9')
                .map(|d| {
                    let in_guess = guess.bytes().filter(|&b| b == d).count();
                    let in_secret = secret.bytes().filter(|&b| b == d).count();
                    in_guess.min(in_secret)
                })
                .sum()
        }

        let secret = "1234";
        for guess in ["1122", "4321", "9999", "1350", "3311", "2214", "0000"] {
            assert_eq!(score(guess, secret).matched(), overlap(guess, secret), "{guess}");
        }
    }

    #[test]
    fn test_matched_invariant_under_guess_permutation() {
        let secret = "5970";
        let permutations = ["7590", "0597", "9075", "5970", "7059"];
        let totals: Vec<usize> = permutations
            .iter()
            .map(|g| score(g, secret).matched())
            .collect();
        assert!(totals.iter().all(|&t| t == 4));

        let with_repeats = ["7755", "5757", "5577", "7575"];
        for guess in with_repeats {
            assert_eq!(score(guess, secret).matched(), 2, "{guess}");
        }
    }

    #[test]
    fn test_feedback_display() {
        assert_eq!(
            Feedback::new(0, 1).to_string(),
            "0 correct positions, 1 correct digits."
        );
        assert_eq!(
            Feedback::new(4, 0).to_string(),
            "4 correct positions, 0 correct digits."
        );
    }
}
