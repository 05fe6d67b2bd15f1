//! Persisted monitor selection string.
//!
//! The selection is stored as 1-based catalog positions joined by commas
//! (`"1,3,4"`), or as the sentinel `"all"`. Parsing is purely syntactic:
//! it does not know how many monitors exist, so an index of `0` parses to
//! `-1` and range checks are left to the caller.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Sentinel selecting every monitor.
pub const ALL_MONITORS: &str = "all";

/// Result of parsing a selection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSelection {
    /// The `"all"` sentinel.
    All,
    /// 0-based catalog positions. May hold negative values for input `0`.
    Indices(BTreeSet<i32>),
}

impl ParsedSelection {
    /// Positions as parsed, or `None` for [`ParsedSelection::All`].
    pub fn indices(&self) -> Option<&BTreeSet<i32>> {
        match self {
            ParsedSelection::All => None,
            ParsedSelection::Indices(indices) => Some(indices),
        }
    }
}

impl fmt::Display for ParsedSelection {
    /// Canonical form: sorted, 1-based, no spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedSelection::All => f.write_str(ALL_MONITORS),
            ParsedSelection::Indices(indices) => {
                let mut separator = "";
                for index in indices {
                    write!(f, "{separator}{}", i64::from(*index) + 1)?;
                    separator = ",";
                }
                Ok(())
            }
        }
    }
}

impl FromStr for ParsedSelection {
    type Err = IndexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Syntax errors in a selection string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexParseError {
    #[error("unexpected character {found:?} at offset {position}")]
    InvalidToken { position: usize, found: char },

    #[error("monitor index {token} at offset {position} is too large")]
    IndexOverflow { position: usize, token: String },
}

/// Parse a selection string.
///
/// Digit runs are 1-based indices; commas and spaces separate them and
/// may repeat. Anything else fails the whole parse.
pub fn parse(text: &str) -> Result<ParsedSelection, IndexParseError> {
    if text == ALL_MONITORS {
        return Ok(ParsedSelection::All);
    }

    let mut indices = BTreeSet::new();
    let mut run_start: Option<usize> = None;

    for (offset, ch) in text.char_indices() {
        match ch {
            '0'..='9' => {
                if run_start.is_none() {
                    run_start = Some(offset);
                }
            }
            ',' | ' ' => {
                if let Some(start) = run_start.take() {
                    indices.insert(parse_index(&text[start..offset], start)?);
                }
            }
            _ => {
                return Err(IndexParseError::InvalidToken {
                    position: offset,
                    found: ch,
                })
            }
        }
    }

    if let Some(start) = run_start {
        indices.insert(parse_index(&text[start..], start)?);
    }

    Ok(ParsedSelection::Indices(indices))
}

/// Convert one digit run to a 0-based position.
fn parse_index(token: &str, position: usize) -> Result<i32, IndexParseError> {
    token
        .parse::<i32>()
        .map(|value| value - 1)
        .map_err(|_| IndexParseError::IndexOverflow {
            position,
            token: token.to_string(),
        })
}

/// Serialize 0-based positions to the persisted form.
///
/// Positions whose 1-based value exceeds `i32::MAX` cannot be parsed back
/// and are left out with a warning.
pub fn serialize(indices: &BTreeSet<usize>) -> String {
    let mut values = Vec::with_capacity(indices.len());
    let mut dropped = Vec::new();

    for &index in indices {
        match index.checked_add(1).and_then(|value| i32::try_from(value).ok()) {
            Some(value) => values.push(value.to_string()),
            None => dropped.push(index),
        }
    }

    if !dropped.is_empty() {
        tracing::warn!(?dropped, "Monitor positions too large to persist");
    }
    values.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(values: &[i32]) -> ParsedSelection {
        ParsedSelection::Indices(values.iter().copied().collect())
    }

    #[test]
    fn test_parse_all_sentinel() {
        assert_eq!(parse("all"), Ok(ParsedSelection::All));
        assert_eq!(
            parse("All"),
            Err(IndexParseError::InvalidToken {
                position: 0,
                found: 'A'
            })
        );
        assert!(parse(" all").is_err());
    }

    #[test]
    fn test_parse_tolerates_spaces() {
        assert_eq!(parse("1, 3,5"), Ok(indices(&[0, 2, 4])));
        assert_eq!(parse("  2 ,1  "), Ok(indices(&[0, 1])));
        assert_eq!(parse("1,,3,"), Ok(indices(&[0, 2])));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(""), Ok(indices(&[])));
        assert_eq!(parse(" , "), Ok(indices(&[])));
    }

    #[test]
    fn test_parse_rejects_invalid_characters() {
        assert_eq!(
            parse("1,x"),
            Err(IndexParseError::InvalidToken {
                position: 2,
                found: 'x'
            })
        );
        assert!(matches!(
            parse("-1"),
            Err(IndexParseError::InvalidToken { found: '-', .. })
        ));
        assert!(matches!(
            parse("1;2"),
            Err(IndexParseError::InvalidToken { found: ';', .. })
        ));
        assert!(parse("1\t2").is_err());
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            parse("1,99999999999"),
            Err(IndexParseError::IndexOverflow {
                position: 2,
                token: "99999999999".to_string()
            })
        );
        assert_eq!(parse("2147483647"), Ok(indices(&[i32::MAX - 1])));
        assert!(parse("2147483648").is_err());
    }

    #[test]
    fn test_parse_zero_is_left_for_the_caller() {
        assert_eq!(parse("0,2"), Ok(indices(&[-1, 1])));
        assert_eq!(parse("007"), Ok(indices(&[6])));
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serialize(&BTreeSet::new()), "");
        assert_eq!(serialize(&BTreeSet::from([3, 0, 2])), "1,3,4");
    }

    #[test]
    fn test_serialize_stops_at_the_parse_limit() {
        let last = (i32::MAX - 1) as usize;
        let set = BTreeSet::from([0, last, last + 1, usize::MAX]);

        let text = serialize(&set);
        assert_eq!(text, "1,2147483647");
        assert_eq!(parse(&text), Ok(indices(&[0, i32::MAX - 1])));
    }

    #[test]
    fn test_display_is_canonical() {
        let parsed: ParsedSelection = " 4,1 , 2".parse().unwrap();
        assert_eq!(parsed.to_string(), "1,2,4");
        assert_eq!(ParsedSelection::All.to_string(), "all");
        assert_eq!(parse("0").unwrap().to_string(), "0");
    }

    #[test]
    fn test_roundtrip() {
        let set = BTreeSet::from([0, 1, 7, 15]);
        let expected: BTreeSet<i32> = set.iter().map(|&i| i as i32).collect();
        assert_eq!(parse(&serialize(&set)), Ok(ParsedSelection::Indices(expected)));
    }
}
