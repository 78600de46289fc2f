//! Russian telephone number format

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Optional `+7`/`7`/`8` prefix, a 4xx/8xx/9xx area code optionally in
/// parentheses, then 3-2-2 digit groups each optionally preceded by a space or hyphen.
pub const RUSSIAN_PHONE_PATTERN: &str =
    r"^(\+7|7|8)?[\s\-]?\(?[489][0-9]{2}\)?[\s\-]?[0-9]{3}[\s\-]?[0-9]{2}[\s\-]?[0-9]{2}$";

// ASCII classes: `\s` must not match non-breaking or other Unicode spaces
static RUSSIAN_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(RUSSIAN_PHONE_PATTERN)
        .unicode(false)
        .build()
        .unwrap()
});

/// Vertical tab is ASCII whitespace to `regex` but is not accepted as a separator
pub fn is_russian_phone(s: &str) -> bool {
    !s.contains('\u{b}') && RUSSIAN_PHONE_REGEX.is_match(s)
}
