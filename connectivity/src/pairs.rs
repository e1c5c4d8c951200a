//! Textual pair format: one `p q` per line, whitespace separated.
//! Blank lines and lines starting with `#` are ignored.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected two sites, found {0}")]
    FieldCount(usize),

    #[error("'{0}' is not a nonnegative integer")]
    NotASite(String),
}

/// Parse every pair in `input`.
pub fn parse_pairs(input: &str) -> Result<Vec<(usize, usize)>, ParseError> {
    let mut pairs = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let err = |kind| ParseError {
            line: idx + 1,
            kind,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(err(ParseErrorKind::FieldCount(fields.len())));
        }
        let site = |s: &str| {
            s.parse::<usize>()
                .map_err(|_| err(ParseErrorKind::NotASite(s.to_string())))
        };
        pairs.push((site(fields[0])?, site(fields[1])?));
    }
    Ok(pairs)
}
