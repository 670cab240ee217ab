//! Process-wide compiled patterns shared by the field extractors.

use std::sync::LazyLock;

use regex::Regex;

/// North-American phone number: optional country code, optional parens,
/// space/dot/hyphen separators.
pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\+\d{1,2}\s)?\(?\d{3}\)?[\s.-]\d{3}[\s.-]\d{4}").unwrap());

/// "ext." marker followed by 1-10 digits, on the same block as a phone match.
pub static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ext\. (\d{1,10})").unwrap());

/// Permissive RFC-like email: local part, "@", domain with a 2-64 char TLD.
pub static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}").unwrap());

/// "City, State  ZIP" middle line of a three-line address block. The two
/// spaces before the postal code are the directory's rendering of an nbsp.
pub static CITY_STATE_ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\w\s]+), ([\w\s]+)  (\d+)").unwrap());

/// Name substring after the "Contact:" marker.
pub static CONTACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Contact: ([a-zA-Z][0-9a-zA-Z .,'-]*)").unwrap());

/// Website link; the profile pages place it after all contact details.
pub static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[\w-]+(\.[\w-]+)*(/[^\s]*)?").unwrap());
