//! Resource strings for diagnostic titles, messages, and descriptions.
//!
//! The analyzer never formats user-visible text itself; it looks the text up
//! here by key. Swapping this table out (e.g. for a translated set) changes
//! every message without touching rule logic.

/// A single localizable resource entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceString {
    pub key: &'static str,
    pub text: &'static str,
}

/// Resource keys used by the exception-message rule.
pub mod resource_keys {
    pub const EXCEPTION_LITERAL_TITLE: &str = "ExceptionLiteralTitle";
    pub const EXCEPTION_LITERAL_MESSAGE: &str = "ExceptionLiteralMessageFormat";
    pub const EXCEPTION_LITERAL_DESCRIPTION: &str = "ExceptionLiteralDescription";
}

/// The default (en) resource table.
pub static RESOURCE_STRINGS: &[ResourceString] = &[
    ResourceString {
        key: resource_keys::EXCEPTION_LITERAL_TITLE,
        text: "Exception message parameter should use resource strings",
    },
    ResourceString {
        key: resource_keys::EXCEPTION_LITERAL_MESSAGE,
        text: "Exception message parameter should use resource strings",
    },
    ResourceString {
        key: resource_keys::EXCEPTION_LITERAL_DESCRIPTION,
        text: "Exception messages built from literal strings cannot be localized; \
               move the text to a resource string and reference it instead.",
    },
];

/// Look up the text for a resource key.
pub fn message_for(key: &str) -> Option<&'static str> {
    RESOURCE_STRINGS
        .iter()
        .find(|r| r.key == key)
        .map(|r| r.text)
}

/// Substitute `{0}`, `{1}`, ... placeholders in a message template.
pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_known_keys() {
        assert_eq!(
            message_for(resource_keys::EXCEPTION_LITERAL_MESSAGE),
            Some("Exception message parameter should use resource strings")
        );
        assert!(message_for(resource_keys::EXCEPTION_LITERAL_DESCRIPTION).is_some());
    }

    #[test]
    fn lookup_misses_unknown_keys() {
        assert_eq!(message_for("NoSuchKey"), None);
    }

    #[test]
    fn placeholder_substitution() {
        assert_eq!(
            format_message("type '{0}' derives from '{1}'", &["Boom", "System.Exception"]),
            "type 'Boom' derives from 'System.Exception'"
        );
    }
}
