//! Scale-function notation.
//!
//! ```text
//! # comment lines start with '#'
//! 6 5 3 2
//! (1 5) 2 r 2
//! ```
//!
//! Each token is a scale code, a parenthesized group of codes sounding
//! together, or `r` for a rest. Blank lines are skipped.

use crate::cadence::Pitch;
use crate::decodex::{Decodex, ScaleCode};
use crate::error::{Error, Result};
use std::path::Path;

pub const COMMENT_MARKER: char = '#';
pub const REST_TOKEN: &str = "r";

/// Harmonies of a notation source, one entry per chord.
pub type Harmonies = Vec<Vec<Pitch>>;

/// Non-blank, non-comment lines with their 1-based line numbers.
pub(crate) fn content_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
}

#[derive(Debug, PartialEq)]
enum Token {
    Single(String),
    Group(Vec<String>),
}

fn tokenize(line: &str, line_no: usize) -> Result<Vec<Token>> {
    let malformed = |reason: &str| Error::MalformedNotation {
        line: line_no,
        reason: reason.to_string(),
    };

    let mut tokens = Vec::new();
    let mut group: Option<Vec<String>> = None;
    let mut word = String::new();

    let flush = |word: &mut String, group: &mut Option<Vec<String>>, tokens: &mut Vec<Token>| {
        if word.is_empty() {
            return;
        }
        let w = std::mem::take(word);
        match group {
            Some(g) => g.push(w),
            None => tokens.push(Token::Single(w)),
        }
    };

    for c in line.chars() {
        match c {
            '(' => {
                if group.is_some() {
                    return Err(malformed("nested '('"));
                }
                flush(&mut word, &mut group, &mut tokens);
                group = Some(Vec::new());
            }
            ')' => {
                flush(&mut word, &mut group, &mut tokens);
                match group.take() {
                    None => return Err(malformed("unmatched ')'")),
                    Some(g) if g.is_empty() => return Err(malformed("empty group '()'")),
                    Some(g) => tokens.push(Token::Group(g)),
                }
            }
            c if c.is_whitespace() => flush(&mut word, &mut group, &mut tokens),
            c => word.push(c),
        }
    }

    if group.is_some() {
        return Err(malformed("unclosed '('"));
    }
    flush(&mut word, &mut group, &mut tokens);

    Ok(tokens)
}

fn decode_word(word: &str, line: usize, decodex: &Decodex) -> Result<Pitch> {
    if word == REST_TOKEN {
        return Ok(Pitch::Empty);
    }
    word.parse::<ScaleCode>()
        .ok()
        .and_then(|code| decodex.get(code))
        .map(Pitch::Freq)
        .ok_or_else(|| Error::UnknownCode {
            code: word.to_string(),
            line,
        })
}

/// Decode notation text into harmonies.
pub fn parse_notation(source: &str, decodex: &Decodex) -> Result<Harmonies> {
    let mut harmonies = Vec::new();

    for (line_no, line) in content_lines(source) {
        for token in tokenize(line, line_no)? {
            let harmony = match token {
                Token::Single(word) => vec![decode_word(&word, line_no, decodex)?],
                Token::Group(words) => words
                    .iter()
                    .map(|w| decode_word(w, line_no, decodex))
                    .collect::<Result<Vec<_>>>()?,
            };
            harmonies.push(harmony);
        }
    }

    Ok(harmonies)
}

/// Read and decode a notation file.
pub fn read_notation(path: impl AsRef<Path>, decodex: &Decodex) -> Result<Harmonies> {
    let source = std::fs::read_to_string(path.as_ref())?;
    parse_notation(&source, decodex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decodex::ScaleDecoder;
    use crate::scale::Scale;
    use std::io::Write;

    fn decodex() -> Decodex {
        let scale = Scale::new(vec![260.0, 240.0, 480.0, 720.0, 960.0, 1200.0]).unwrap();
        ScaleDecoder::build(&scale, Some(&[1, 2, 3, 5, 6])).unwrap()
    }

    fn freqs(harmonies: &Harmonies) -> Vec<Vec<Option<f64>>> {
        harmonies
            .iter()
            .map(|h| h.iter().map(Pitch::freq).collect())
            .collect()
    }

    #[test]
    fn test_tokenize_groups() {
        let tokens = tokenize("6 (1 5)(2  3) r", 1).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Single("6".into()),
                Token::Group(vec!["1".into(), "5".into()]),
                Token::Group(vec!["2".into(), "3".into()]),
                Token::Single("r".into()),
            ]
        );
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let source = "# simple melody\n6 5 3 2\n\n   \n(1 5) 2 3 2\n";
        let harmonies = parse_notation(source, &decodex()).unwrap();
        assert_eq!(
            freqs(&harmonies),
            vec![
                vec![Some(1200.0)],
                vec![Some(960.0)],
                vec![Some(720.0)],
                vec![Some(480.0)],
                vec![Some(240.0), Some(960.0)],
                vec![Some(480.0)],
                vec![Some(720.0)],
                vec![Some(480.0)],
            ]
        );
    }

    #[test]
    fn test_rest_token() {
        let harmonies = parse_notation("1 r (r 2)", &decodex()).unwrap();
        assert_eq!(harmonies[1], vec![Pitch::Empty]);
        assert_eq!(harmonies[2], vec![Pitch::Empty, Pitch::Freq(480.0)]);
    }

    #[test]
    fn test_unknown_code_names_code_and_line() {
        let err = parse_notation("# header\n1 2\n3 4", &decodex()).unwrap_err();
        match err {
            Error::UnknownCode { code, line } => {
                assert_eq!(code, "4");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_token() {
        let err = parse_notation("1 x", &decodex()).unwrap_err();
        assert!(matches!(err, Error::UnknownCode { ref code, line: 1 } if code == "x"));
    }

    #[test]
    fn test_read_notation_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# file\n6 (1 2)").unwrap();
        let harmonies = read_notation(file.path(), &decodex()).unwrap();
        assert_eq!(harmonies.len(), 2);
        assert_eq!(harmonies[1], vec![Pitch::Freq(240.0), Pitch::Freq(480.0)]);

        let missing = read_notation("/nonexistent/quenzer/notation", &decodex());
        assert!(matches!(missing, Err(Error::Io(_))));
    }

    #[test]
    fn test_malformed_groups() {
        for bad in ["(1 2", "1 2)", "((1) 2)", "()"] {
            let err = parse_notation(bad, &decodex()).unwrap_err();
            assert!(
                matches!(err, Error::MalformedNotation { line: 1, .. }),
                "{bad}: {err}"
            );
        }
    }
}
