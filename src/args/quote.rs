// SPDX-License-Identifier: GPL-2.0-only

use std::borrow::Cow;

/// Quote a user-supplied value for the argument vector.
///
/// Values containing a space or a double quote are wrapped in double quotes, with
/// embedded double quotes escaped by a backslash. Anything else passes through
/// unchanged.
pub fn quote(value: &str) -> Cow<'_, str> {
    if value.contains([' ', '"']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\\\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn plain_values_are_borrowed() {
        assert!(matches!(quote("src/main.rs"), Cow::Borrowed("src/main.rs")));
        assert!(matches!(quote(""), Cow::Borrowed("")));
    }

    #[test]
    fn spaces_and_quotes() {
        assert_eq!(quote("my file"), "\"my file\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("\"x y\""), "\"\\\"x y\\\"\"");
    }

    #[test]
    fn other_metacharacters_pass_through() {
        assert_eq!(quote("$(rm -rf)"), "\"$(rm -rf)\"");
        assert_eq!(quote("a;b|c&d"), "a;b|c&d");
    }

    proptest! {
        #[test]
        fn prop_quoted_iff_space_or_quote(value in "[a-z \"/.]{0,16}") {
            let quoted = quote(&value);
            let needs_quotes = value.contains(' ') || value.contains('"');
            prop_assert_eq!(matches!(quoted, Cow::Owned(_)), needs_quotes);
            if needs_quotes {
                prop_assert!(quoted.starts_with('"') && quoted.ends_with('"'));
                let inner = &quoted[1..quoted.len() - 1];
                prop_assert_eq!(inner.replace("\\\"", "\""), value);
            }
        }
    }
}
