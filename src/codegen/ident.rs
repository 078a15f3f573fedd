//! Trajectory-name identifier rules for generated code.
//!
//! Names become Java constants in the generated names class, so user input is
//! checked against Java identifier rules before it is accepted.

use std::fmt;

/// Reserved words of the target language, plus the literals `true`, `false`,
/// and `null`, which are equally unusable as identifiers.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract",
    "continue",
    "for",
    "new",
    "switch",
    "assert",
    "default",
    "goto",
    "package",
    "synchronized",
    "boolean",
    "do",
    "if",
    "private",
    "this",
    "break",
    "double",
    "implements",
    "protected",
    "throw",
    "byte",
    "else",
    "import",
    "public",
    "throws",
    "case",
    "enum",
    "instanceof",
    "return",
    "transient",
    "catch",
    "extends",
    "int",
    "short",
    "try",
    "char",
    "final",
    "interface",
    "static",
    "void",
    "class",
    "finally",
    "long",
    "strictfp",
    "volatile",
    "const",
    "float",
    "native",
    "super",
    "while",
    "true",
    "false",
    "null",
];

const SHOULD_NOT_APPEAR_CODEGEN: &str =
    "This error should never appear in generated code. Tell the developers.";
const RENAME_TRAJECTORY: &str = "Rename the trajectory to fix this error.";

/// Why a trajectory name was rejected. Checks run in a fixed priority order;
/// the first failure wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameIssue {
    Empty,
    Exists { name: String },
    StartsWithNumber { name: String },
    /// Carries the deduplicated offending characters in first-seen order.
    InvalidCharacter { name: String, characters: Vec<char> },
    IsJavaKeyword { name: String },
}

impl NameIssue {
    /// Short message suitable for an inline input hint.
    pub fn ui_message(&self) -> String {
        match self {
            Self::Empty => "Empty".to_owned(),
            Self::Exists { .. } => "Exists".to_owned(),
            Self::StartsWithNumber { .. } => "Must start with letter or _".to_owned(),
            Self::InvalidCharacter { characters, .. } => {
                let list = characters
                    .iter()
                    .map(|c| {
                        if *c == ' ' {
                            "[space]".to_owned()
                        } else {
                            c.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("Can only use letters, 0-9, and _. Can't use {list}")
            }
            Self::IsJavaKeyword { .. } => "Can't be Java keyword".to_owned(),
        }
    }

    /// Longer remediation message embedded in generated code comments.
    pub fn codegen_message(&self) -> &'static str {
        match self {
            Self::Empty | Self::Exists { .. } => SHOULD_NOT_APPEAR_CODEGEN,
            Self::StartsWithNumber { .. }
            | Self::InvalidCharacter { .. }
            | Self::IsJavaKeyword { .. } => RENAME_TRAJECTORY,
        }
    }
}

impl fmt::Display for NameIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ui_message())
    }
}

/// Checks a user-supplied trajectory name, returning the first issue found or
/// `None` when the name is acceptable.
pub fn validate_name(name: &str, existing: &[impl AsRef<str>]) -> Option<NameIssue> {
    if name.is_empty() {
        return Some(NameIssue::Empty);
    }
    if existing.iter().any(|n| n.as_ref() == name) {
        return Some(NameIssue::Exists {
            name: name.to_owned(),
        });
    }
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Some(NameIssue::StartsWithNumber {
            name: name.to_owned(),
        });
    }

    let mut characters = Vec::new();
    for c in name.chars() {
        if !is_identifier_char(c) && !characters.contains(&c) {
            characters.push(c);
        }
    }
    if !characters.is_empty() {
        return Some(NameIssue::InvalidCharacter {
            name: name.to_owned(),
            characters,
        });
    }

    if JAVA_KEYWORDS.contains(&name) {
        return Some(NameIssue::IsJavaKeyword {
            name: name.to_owned(),
        });
    }
    None
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Turns an arbitrary trajectory name into a usable identifier: camel-cases
/// across spaces, drops remaining invalid characters, and prefixes `_` when
/// the result would start with a digit. Unlike [`validate_name`] this never
/// rejects; it is for generated identifiers, not user input.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == ' ' {
            upper_next = true;
            continue;
        }
        if !is_identifier_char(c) {
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_priority_order_is_fixed() {
        let none: [&str; 0] = [];
        assert_eq!(validate_name("", &none), Some(NameIssue::Empty));
        assert_eq!(
            validate_name("Test", &["Test"]),
            Some(NameIssue::Exists {
                name: "Test".to_owned()
            })
        );
        // Digit check precedes the character-class check.
        assert_eq!(
            validate_name("1a bc", &none),
            Some(NameIssue::StartsWithNumber {
                name: "1a bc".to_owned()
            })
        );
        assert_eq!(
            validate_name("New Path", &none),
            Some(NameIssue::InvalidCharacter {
                name: "New Path".to_owned(),
                characters: vec![' '],
            })
        );
        assert_eq!(
            validate_name("class", &none),
            Some(NameIssue::IsJavaKeyword {
                name: "class".to_owned()
            })
        );
        assert_eq!(validate_name("NewPath", &none), None);
        assert_eq!(validate_name("test_2", &none), None);
    }

    #[test]
    fn invalid_characters_are_deduped_in_order() {
        let none: [&str; 0] = [];
        let issue = validate_name("a-b c-d!", &none).unwrap();
        assert_eq!(
            issue,
            NameIssue::InvalidCharacter {
                name: "a-b c-d!".to_owned(),
                characters: vec!['-', ' ', '!'],
            }
        );
        assert!(issue.ui_message().contains("[space]"));
    }

    #[test]
    fn every_keyword_is_rejected() {
        let none: [&str; 0] = [];
        for kw in JAVA_KEYWORDS {
            assert_eq!(
                validate_name(kw, &none),
                Some(NameIssue::IsJavaKeyword {
                    name: (*kw).to_owned()
                }),
                "keyword {kw} slipped through"
            );
        }
    }

    #[test]
    fn sanitize_camel_cases_and_strips() {
        assert_eq!(sanitize_name("New Path"), "NewPath");
        assert_eq!(sanitize_name("fast lap 2"), "fastLap2");
        assert_eq!(sanitize_name("a-b!c"), "abc");
        assert_eq!(sanitize_name("2024 auto"), "_2024Auto");
        assert_eq!(sanitize_name("   "), "");
    }

    #[test]
    fn messages_distinguish_user_errors_from_bugs() {
        assert_eq!(NameIssue::Empty.codegen_message(), SHOULD_NOT_APPEAR_CODEGEN);
        assert_eq!(
            NameIssue::IsJavaKeyword {
                name: "int".to_owned()
            }
            .codegen_message(),
            RENAME_TRAJECTORY
        );
    }
}
