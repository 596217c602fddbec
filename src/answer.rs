//! Extracts the respondent's answer from the query string the form service redirects with.
//!
//! The query is parsed like the browser's `URLSearchParams` (`+` is a space and broken escapes
//! are kept as they are) and the value is then decoded a second time with
//! `decodeURIComponent` semantics.

use std::borrow::Cow;
use std::fmt::{self, Display};

use percent_encoding::percent_decode_str;
use thiserror::Error;

const KEY: &str = "answer";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed percent escape at byte {position}")]
    MalformedEscape { position: usize },
    #[error("Decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// The answer shown on the page and substituted into the share text. Empty when none was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer(String);

impl Answer {
    /// Reads the first `answer` value from a raw query string (without the leading `?`).
    /// Never fails: an undecodable value is used as it arrived.
    pub fn from_query(query: Option<&str>) -> Self {
        let Some(raw) = query.and_then(first_answer) else {
            return Self::default();
        };

        match decode_uri_component(&raw) {
            Ok(decoded) => Self(decoded.into_owned()),
            Err(error) => {
                tracing::debug!("Using raw answer \"{raw}\" as it could not be decoded: {error}");
                Self(raw)
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn first_answer(query: &str) -> Option<String> {
    let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(query) {
        Ok(pairs) => pairs,
        Err(error) => {
            tracing::warn!("Expected query string to be form encoded: {error}");
            return None;
        }
    };

    pairs
        .into_iter()
        .find_map(|(key, value)| (key == KEY).then_some(value))
}

/// Strict percent decoding. Every `%` has to start a two digit hex escape and the result has
/// to be UTF-8, otherwise the whole value is rejected.
pub fn decode_uri_component(value: &str) -> Result<Cow<'_, str>, DecodeError> {
    let bytes = value.as_bytes();
    let mut position = 0;
    while position < bytes.len() {
        if bytes[position] == b'%' {
            let escape = bytes.get(position + 1..position + 3);
            let is_valid = escape.is_some_and(|digits| digits.iter().all(u8::is_ascii_hexdigit));
            if !is_valid {
                return Err(DecodeError::MalformedEscape { position });
            }
            position += 3;
        } else {
            position += 1;
        }
    }

    percent_decode_str(value)
        .decode_utf8()
        .map_err(|_| DecodeError::InvalidUtf8)
}
