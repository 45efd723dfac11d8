//! Splits a path-data string into command letters and numeric literals.

use crate::math::{point, Point};

/// A single lexical item of the path-data grammar.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Token {
    /// One of the command letters `MmLlHhVvCcSsQqTtAaZz`.
    Command(u8),
    /// A signed numeric literal, optionally fractional, with an optional
    /// exponent.
    Number(f32),
}

/// A lazy tokenizer over a path-data string.
///
/// Tokenization never fails: bytes that are neither a command letter, the
/// start of a number, whitespace nor a comma are skipped. Validating
/// operand counts is the caller's job.
#[derive(Copy, Clone)]
pub struct Tokenizer<'l> {
    src: &'l str,
    ix: usize,
}

impl<'l> Tokenizer<'l> {
    pub fn new(src: &'l str) -> Self {
        Tokenizer { src, ix: 0 }
    }

    fn skip_separators(&mut self) {
        while let Some(&c) = self.src.as_bytes().get(self.ix) {
            if !(c == b' ' || c == b'\t' || c == b'\n' || c == b'\r' || c == b'\x0c' || c == b',') {
                break;
            }
            self.ix += 1;
        }
    }

    // Scans one numeric literal starting at the current position. Consumes
    // at least one byte so that a lone sign or dot cannot stall the
    // iterator.
    fn scan_number(&mut self) -> Option<f32> {
        let bytes = self.src.as_bytes();
        let start = self.ix;
        let mut ix = self.ix;

        if let Some(b'+') | Some(b'-') = bytes.get(ix) {
            ix += 1;
        }

        let mut has_digits = false;
        while let Some(b'0'..=b'9') = bytes.get(ix) {
            ix += 1;
            has_digits = true;
        }
        if let Some(b'.') = bytes.get(ix) {
            ix += 1;
            while let Some(b'0'..=b'9') = bytes.get(ix) {
                ix += 1;
                has_digits = true;
            }
        }

        if !has_digits {
            self.ix = ix.max(start + 1);
            return None;
        }

        // Only consume an exponent when it is well formed.
        if let Some(b'e') | Some(b'E') = bytes.get(ix) {
            let mut exp = ix + 1;
            if let Some(b'+') | Some(b'-') = bytes.get(exp) {
                exp += 1;
            }
            if let Some(b'0'..=b'9') = bytes.get(exp) {
                ix = exp;
                while let Some(b'0'..=b'9') = bytes.get(ix) {
                    ix += 1;
                }
            }
        }

        let text = &self.src[start..ix];
        self.ix = ix;

        text.parse().ok()
    }
}

impl<'l> Iterator for Tokenizer<'l> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            self.skip_separators();
            let c = *self.src.as_bytes().get(self.ix)?;

            if is_command(c) {
                self.ix += 1;
                return Some(Token::Command(c));
            }

            if c.is_ascii_digit() || c == b'-' || c == b'+' || c == b'.' {
                if let Some(value) = self.scan_number() {
                    return Some(Token::Number(value));
                }
                continue;
            }

            // Not a token of the grammar, skip it.
            self.ix += 1;
        }
    }
}

fn is_command(c: u8) -> bool {
    match c {
        b'M' | b'm' | b'L' | b'l' | b'H' | b'h' | b'V' | b'v' | b'C' | b'c' | b'S' | b's'
        | b'Q' | b'q' | b'T' | b't' | b'A' | b'a' | b'Z' | b'z' => true,
        _ => false,
    }
}

/// Parses the flat coordinate list of a polyline/polygon element, grouped
/// into pairs. An odd trailing coordinate is dropped.
pub fn parse_point_list(src: &str) -> Vec<Point> {
    let mut points = Vec::new();
    let mut pending: Option<f32> = None;

    for token in Tokenizer::new(src) {
        if let Token::Number(value) = token {
            match pending.take() {
                Some(x) => points.push(point(x, value)),
                None => pending = Some(value),
            }
        }
    }

    points
}

#[test]
fn tokenize_simple_path() {
    let tokens: Vec<_> = Tokenizer::new("M 0 0 L 10,0 z").collect();
    assert_eq!(
        tokens,
        vec![
            Token::Command(b'M'),
            Token::Number(0.0),
            Token::Number(0.0),
            Token::Command(b'L'),
            Token::Number(10.0),
            Token::Number(0.0),
            Token::Command(b'z'),
        ]
    );
}

#[test]
fn tokenize_signs_and_fractions() {
    let tokens: Vec<_> = Tokenizer::new("l-1.5.5+2").collect();
    assert_eq!(
        tokens,
        vec![
            Token::Command(b'l'),
            Token::Number(-1.5),
            Token::Number(0.5),
            Token::Number(2.0),
        ]
    );
}

#[test]
fn tokenize_packed_negative_numbers() {
    let tokens: Vec<_> = Tokenizer::new("10-5").collect();
    assert_eq!(tokens, vec![Token::Number(10.0), Token::Number(-5.0)]);
}

#[test]
fn tokenize_exponents() {
    let tokens: Vec<_> = Tokenizer::new("1e3 -2.5E-1").collect();
    assert_eq!(tokens, vec![Token::Number(1000.0), Token::Number(-0.25)]);
}

#[test]
fn tokenize_skips_garbage() {
    let tokens: Vec<_> = Tokenizer::new("M 1 1 # 2 2").collect();
    assert_eq!(
        tokens,
        vec![
            Token::Command(b'M'),
            Token::Number(1.0),
            Token::Number(1.0),
            Token::Number(2.0),
            Token::Number(2.0),
        ]
    );
}

#[test]
fn tokenize_lone_sign() {
    let tokens: Vec<_> = Tokenizer::new("- 5").collect();
    assert_eq!(tokens, vec![Token::Number(5.0)]);
}

#[test]
fn point_list() {
    use crate::math::point;

    assert_eq!(
        parse_point_list("0,0 10,5 20 0"),
        vec![point(0.0, 0.0), point(10.0, 5.0), point(20.0, 0.0)]
    );
    // An odd trailing coordinate is dropped.
    assert_eq!(parse_point_list("1 2 3"), vec![point(1.0, 2.0)]);
    assert_eq!(parse_point_list(""), vec![]);
}
