//! Form input sanitization.
//!
//! Both fields end up as single arguments to an external process. Names lose
//! every ASCII control character; emails pass a denylist strip followed by an
//! allow-list check on the stripped value, and only the stripped value
//! travels downstream.

use lazy_static::lazy_static;
use regex::Regex;

use super::SubmissionError;

/// Shell-metacharacter-like characters removed from emails before validation.
const EMAIL_DENYLIST: [char; 10] = [';', '|', '&', '`', '$', '>', '<', '\n', '\r', '\t'];

lazy_static! {
    static ref EMAIL_ALLOWED: Regex = Regex::new(r"^[A-Za-z0-9@._+\-/: ]+$").unwrap();
}

/// Remove ASCII control characters (0x00-0x1F, 0x7F) and surrounding
/// whitespace from a name.
pub fn sanitize_name(raw: &str) -> Result<String, SubmissionError> {
    let cleaned: String = raw.chars().filter(|c| !c.is_ascii_control()).collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return Err(SubmissionError::InvalidName);
    }
    Ok(trimmed.to_string())
}

/// Strip the denylist characters, then require the remainder to match the
/// email allow-list. Returns the stripped value; the raw input is never used
/// past this point.
pub fn validate_email(raw: &str) -> Result<String, SubmissionError> {
    let filtered: String = raw.chars().filter(|c| !EMAIL_DENYLIST.contains(c)).collect();
    if filtered.is_empty() {
        return Err(SubmissionError::EmptyEmail);
    }
    if !EMAIL_ALLOWED.is_match(&filtered) {
        return Err(SubmissionError::InvalidEmail);
    }
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_loses_control_characters() {
        let name = sanitize_name("Mario\x00\x1f M\u{e4}tas\x7f").unwrap();
        assert_eq!(name, "Mario M\u{e4}tas");
        assert!(!name.chars().any(|c| c.is_ascii_control()));
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(sanitize_name("  Luigi R\u{e4}stas \n").unwrap(), "Luigi R\u{e4}stas");
    }

    #[test]
    fn name_empty_after_cleanup_is_rejected() {
        assert!(matches!(sanitize_name(""), Err(SubmissionError::InvalidName)));
        assert!(matches!(sanitize_name("  \x01\x02  "), Err(SubmissionError::InvalidName)));
    }

    #[test]
    fn email_denylist_characters_are_stripped() {
        // The stripped value is what gets validated and returned.
        assert_eq!(validate_email("foo;bar@x.com").unwrap(), "foobar@x.com");
        assert_eq!(validate_email("a|b&c`d$e@x.com").unwrap(), "abcde@x.com");
        assert_eq!(validate_email("user@x.com\r\n").unwrap(), "user@x.com");
    }

    #[test]
    fn email_outside_allow_list_is_rejected() {
        assert!(matches!(
            validate_email("foo(bar)@x.com"),
            Err(SubmissionError::InvalidEmail)
        ));
        assert!(matches!(
            validate_email("m\u{e4}tas@x.com"),
            Err(SubmissionError::InvalidEmail)
        ));
    }

    #[test]
    fn email_empty_after_stripping_is_rejected() {
        assert!(matches!(validate_email(""), Err(SubmissionError::EmptyEmail)));
        assert!(matches!(validate_email(";;;`$"), Err(SubmissionError::EmptyEmail)));
    }

    #[test]
    fn injection_attempt_survives_as_plain_text() {
        // ';' is stripped; the rest are allow-listed characters. The value
        // stays a single opaque string and never reaches a shell.
        assert_eq!(
            validate_email("foo@bar.com; rm -rf /").unwrap(),
            "foo@bar.com rm -rf /"
        );
    }
}
