//! Confirmation codes
//!
//! A code is two letters taken from the user name followed by a random
//! number in 1000..=9999, e.g. `AD4821`. Codes are cosmetic and may repeat.

use crate::constants::code::{PREFIX_FILLER, PREFIX_LEN, SUFFIX_MAX, SUFFIX_MIN};
use crate::random::RandomSource;

/// Uppercased first two characters of `name`, padded with `X`
///
/// Leading and trailing whitespace is ignored, so `""` and `"  "` both give
/// `"XX"` and `"q"` gives `"QX"`.
pub fn code_prefix(name: &str) -> String {
    let head: String = name.trim().chars().take(PREFIX_LEN).collect();
    // Some characters uppercase to more than one (ß -> SS)
    let mut prefix: String = head.to_uppercase().chars().take(PREFIX_LEN).collect();
    while prefix.chars().count() < PREFIX_LEN {
        prefix.push(PREFIX_FILLER);
    }
    prefix
}

/// Build a confirmation code for `name`
pub fn confirmation_code(name: &str, rng: &dyn RandomSource) -> String {
    format!(
        "{}{}",
        code_prefix(name),
        rng.int_inclusive(SUFFIX_MIN, SUFFIX_MAX)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::pseudo::SeededSource;

    #[test]
    fn test_prefix() {
        assert_eq!(code_prefix("ada"), "AD");
        assert_eq!(code_prefix("Grace Hopper"), "GR");
        assert_eq!(code_prefix("  li  "), "LI");
    }

    #[test]
    fn test_prefix_short_names_are_padded() {
        assert_eq!(code_prefix("q"), "QX");
        assert_eq!(code_prefix(""), "XX");
        assert_eq!(code_prefix("   "), "XX");
    }

    #[test]
    fn test_prefix_non_ascii() {
        assert_eq!(code_prefix("émile"), "ÉM");
        assert_eq!(code_prefix("ßa"), "SS");
    }

    #[test]
    fn test_code_shape() {
        let rng = SeededSource::new(42);
        for _ in 0..200 {
            let code = confirmation_code("Ada", &rng);
            assert_eq!(code.len(), 6);
            assert!(code.starts_with("AD"));
            let suffix: u32 = code[2..].parse().unwrap();
            assert!((1000..=9999).contains(&suffix));
        }
    }
}
