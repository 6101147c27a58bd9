use crate::debug_log;
use crate::error::SecretError;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

pub const CODE_LENGTH: usize = 4;
const MAX_CODE: u32 = 9999;

/// A code of `CODE_LENGTH` pairwise-distinct ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Parse a code supplied from outside the generator.
    pub fn parse(code: &str) -> Result<Self, SecretError> {
        let actual = code.chars().count();
        if actual != CODE_LENGTH {
            return Err(SecretError::WrongLength {
                expected: CODE_LENGTH,
                actual,
            });
        }
        let mut seen = HashSet::new();
        for c in code.chars() {
            if !c.is_ascii_digit() {
                return Err(SecretError::NonDigit(c));
            }
            if !seen.insert(c) {
                return Err(SecretError::RepeatedDigit(c));
            }
        }
        Ok(Self(code.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn has_distinct_digits(candidate: &str) -> bool {
    candidate.chars().collect::<HashSet<_>>().len() == CODE_LENGTH
}

/// Draw zero-padded codes from `[0, 9999]` until one has no repeated digit.
pub fn generate_secret<R: Rng + ?Sized>(rng: &mut R) -> Secret {
    let mut tries = 0u32;
    loop {
        tries += 1;
        let candidate = format!("{:04}", rng.gen_range(0..=MAX_CODE));
        if has_distinct_digits(&candidate) {
            debug_log!("generate_secret() - accepted after {} tries", tries);
            return Secret(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_valid() {
        let secret = Secret::parse("4821").unwrap();
        assert_eq!(secret.as_str(), "4821");
        assert_eq!(secret.as_str().len(), 4);
        assert_eq!(secret.to_string(), "4821");
    }

    #[test]
    fn test_parse_leading_zero() {
        assert!(Secret::parse("0123").is_ok());
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            Secret::parse("123"),
            Err(SecretError::WrongLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Secret::parse("12345"),
            Err(SecretError::WrongLength {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn test_parse_non_digit() {
        assert_eq!(Secret::parse("12a4"), Err(SecretError::NonDigit('a')));
    }

    #[test]
    fn test_parse_repeated_digit() {
        assert_eq!(Secret::parse("1233"), Err(SecretError::RepeatedDigit('3')));
    }

    #[test]
    fn test_generated_secrets_have_distinct_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let secret = generate_secret(&mut rng);
            assert_eq!(secret.as_str().len(), CODE_LENGTH);
            assert!(secret.as_str().chars().all(|c| c.is_ascii_digit()));
            assert!(has_distinct_digits(secret.as_str()), "{secret}");
            assert!(Secret::parse(secret.as_str()).is_ok());
        }
    }

    #[test]
    fn test_same_seed_same_secret() {
        let a = generate_secret(&mut StdRng::seed_from_u64(42));
        let b = generate_secret(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_has_distinct_digits() {
        assert!(has_distinct_digits("0123"));
        assert!(!has_distinct_digits("0012"));
        assert!(!has_distinct_digits("1233"));
        assert!(!has_distinct_digits("0000"));
    }
}
