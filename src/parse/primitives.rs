//! Character-level parsers over `&str`
//!
//! These are the leaves every grammar is built from. Each one either
//! consumes a prefix and returns it (or the single char it matched), or
//! fails with its own name as the tag and leaves the input alone.

use super::combinators::Parser;
use super::result::{PResult, ParseError};

/// Per-character test accepted by `satisfy` and `take_while`
pub trait CharTest {
    fn test(&self, c: char) -> bool;
}

impl<F> CharTest for F
where
    F: Fn(char) -> bool,
{
    fn test(&self, c: char) -> bool {
        self(c)
    }
}

#[cfg(feature = "regex")]
impl CharTest for regex::Regex {
    fn test(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.is_match(c.encode_utf8(&mut buf))
    }
}

/// Something `take_till` can search for
pub trait Pattern {
    /// Byte offset of the first match in `haystack`, if any
    fn find_in(&self, haystack: &str) -> Option<usize>;
}

impl Pattern for &str {
    fn find_in(&self, haystack: &str) -> Option<usize> {
        haystack.find(*self)
    }
}

impl Pattern for char {
    fn find_in(&self, haystack: &str) -> Option<usize> {
        haystack.find(*self)
    }
}

/// Matches at the end of the input, so `take_till(Eof)` takes the rest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eof;

impl Pattern for Eof {
    fn find_in(&self, haystack: &str) -> Option<usize> {
        Some(haystack.len())
    }
}

#[cfg(feature = "regex")]
impl Pattern for regex::Regex {
    fn find_in(&self, haystack: &str) -> Option<usize> {
        self.find(haystack).map(|m| m.start())
    }
}

fn split_first(input: &str) -> Option<(char, &str)> {
    let mut chars = input.chars();
    chars.next().map(|c| (c, chars.as_str()))
}

/// Recognizes the next character, whatever it is.
pub fn any_char<'a>() -> impl Parser<&'a str, char> {
    move |input: &'a str| match split_first(input) {
        Some((c, rest)) => (rest, Ok(c)),
        None => (input, Err(ParseError::new("any_char"))),
    }
}

/// Recognizes exactly `expected`.
pub fn char<'a>(expected: char) -> impl Parser<&'a str, char> {
    move |input: &'a str| match split_first(input) {
        Some((c, rest)) if c == expected => (rest, Ok(c)),
        _ => (input, Err(ParseError::new("char"))),
    }
}

/// Recognizes one character that passes `test`.
pub fn satisfy<'a, C: CharTest>(test: C) -> impl Parser<&'a str, char> {
    move |input: &'a str| match split_first(input) {
        Some((c, rest)) if test.test(c) => (rest, Ok(c)),
        _ => (input, Err(ParseError::new("satisfy"))),
    }
}

/// Recognizes the literal `s` at the start of the input.
pub fn tag<'a>(s: &'static str) -> impl Parser<&'a str, &'a str> {
    move |input: &'a str| match input.strip_prefix(s) {
        Some(rest) => (rest, Ok(&input[..s.len()])),
        None => (input, Err(ParseError::new("tag"))),
    }
}

fn take_while_m<'a, C: CharTest>(min: usize, test: C) -> impl Parser<&'a str, &'a str> {
    move |input: &'a str| {
        let mut taken = 0usize;
        let mut end = input.len();
        for (i, c) in input.char_indices() {
            if !test.test(c) {
                end = i;
                break;
            }
            taken += 1;
        }
        split_taken(input, end, taken, min, "take_while_m")
    }
}

fn take_till_m<'a, P: Pattern>(min: usize, pattern: P) -> impl Parser<&'a str, &'a str> {
    move |input: &'a str| {
        let end = pattern.find_in(input).unwrap_or(input.len());
        let taken = input[..end].chars().count();
        split_taken(input, end, taken, min, "take_till_m")
    }
}

fn split_taken<'a>(
    input: &'a str,
    end: usize,
    taken: usize,
    min: usize,
    name: &str,
) -> (&'a str, PResult<&'a str>) {
    if taken < min {
        return (input, Err(ParseError::new(name)));
    }
    let (head, rest) = input.split_at(end);
    (rest, Ok(head))
}

/// Longest prefix whose characters all pass `test`. Never fails.
pub fn take_while<'a, C: CharTest>(test: C) -> impl Parser<&'a str, &'a str> {
    take_while_m(0, test)
}

/// Like `take_while`, but fails when no character passes.
pub fn take_while1<'a, C: CharTest>(test: C) -> impl Parser<&'a str, &'a str> {
    take_while_m(1, test)
}

/// Everything before the first match of `pattern`, or the whole input when
/// there is none. The match itself is not consumed. Never fails.
pub fn take_till<'a, P: Pattern>(pattern: P) -> impl Parser<&'a str, &'a str> {
    take_till_m(0, pattern)
}

/// Like `take_till`, but fails when the result would be empty.
pub fn take_till1<'a, P: Pattern>(pattern: P) -> impl Parser<&'a str, &'a str> {
    take_till_m(1, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_char() {
        assert_eq!(any_char().parse("ab"), ("b", Ok('a')));
        assert_eq!(any_char().parse("é!"), ("!", Ok('é')));
        let (rest, result) = any_char().parse("");
        assert_eq!(rest, "");
        assert_eq!(result.unwrap_err().message(), "any_char");
    }

    #[test]
    fn test_char() {
        assert_eq!(char('.').parse(".,$"), (",$", Ok('.')));
        assert_eq!(char('.').parse("x").0, "x");
        assert!(char('.').parse("").1.is_err());
    }

    #[test]
    fn test_satisfy() {
        let digit = satisfy(|c: char| c.is_ascii_digit());
        assert_eq!(digit.parse("7a"), ("a", Ok('7')));
        assert_eq!(digit.parse("a7").1.unwrap_err().message(), "satisfy");
    }

    #[test]
    fn test_tag() {
        assert_eq!(tag("w ").parse("w notes"), ("notes", Ok("w ")));
        let (rest, result) = tag("schema ").parse("share x");
        assert_eq!(rest, "share x");
        assert!(result.is_err());
    }

    #[test]
    fn test_take_while_never_fails() {
        let digits = take_while(|c: char| c.is_ascii_digit());
        assert_eq!(digits.parse("123abc"), ("abc", Ok("123")));
        assert_eq!(digits.parse("abc"), ("abc", Ok("")));
        assert_eq!(digits.parse("99"), ("", Ok("99")));
    }

    #[test]
    fn test_take_while1_requires_a_match() {
        let digits = take_while1(|c: char| c.is_ascii_digit());
        assert_eq!(digits.parse("1x"), ("x", Ok("1")));
        let (rest, result) = digits.parse("x1");
        assert_eq!(rest, "x1");
        assert_eq!(result.unwrap_err().message(), "take_while_m");
    }

    #[test]
    fn test_take_till() {
        assert_eq!(take_till(",").parse("21,22"), (",22", Ok("21")));
        assert_eq!(take_till(',').parse("2122"), ("", Ok("2122")));
        assert_eq!(take_till(Eof).parse("my sheet"), ("", Ok("my sheet")));
        assert_eq!(take_till(",").parse(",x"), (",x", Ok("")));
    }

    #[test]
    fn test_take_till1() {
        assert_eq!(take_till1(',').parse("a,b"), (",b", Ok("a")));
        let (rest, result) = take_till1(',').parse(",b");
        assert_eq!(rest, ",b");
        assert_eq!(result.unwrap_err().message(), "take_till_m");
        assert!(take_till1(Eof).parse("").1.is_err());
    }

    #[cfg(feature = "regex")]
    #[test]
    fn test_regex_tests_and_patterns() {
        let sign = regex::Regex::new("[+-]").unwrap();
        assert_eq!(satisfy(sign).parse("-3"), ("3", Ok('-')));

        let digit = regex::Regex::new("[0-9]").unwrap();
        assert_eq!(take_till(digit).parse("abc12"), ("12", Ok("abc")));
    }
}
