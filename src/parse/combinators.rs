//! Parser trait and generic combinators
//!
//! A parser is a pure function from an input to the remaining input and a
//! `PResult`. A parser that fails must hand back exactly the input it was
//! given, so `alt` and `optional` can retry from the same position.
//!
//! The combinators here are generic over any `Copy` input; the character
//! level primitives live in `primitives`.

use super::result::{PResult, ParseError};

/// Consume a prefix of the input and produce a value
pub trait Parser<I, T> {
    fn parse(&self, input: I) -> (I, PResult<T>);
}

impl<I, T, F> Parser<I, T> for F
where
    F: Fn(I) -> (I, PResult<T>),
{
    fn parse(&self, input: I) -> (I, PResult<T>) {
        self(input)
    }
}

/// Inputs that can report how much is left
pub trait InputLength {
    fn input_len(&self) -> usize;
}

impl InputLength for &str {
    fn input_len(&self) -> usize {
        self.len()
    }
}

impl<T> InputLength for &[T] {
    fn input_len(&self) -> usize {
        self.len()
    }
}

// ============================================================================
// Repetition
// ============================================================================

fn many_m_n<I, T, P>(min: usize, max: usize, parser: P) -> impl Parser<I, Vec<T>>
where
    I: Copy + InputLength,
    P: Parser<I, T>,
{
    move |input: I| {
        let mut current = input;
        let mut items = Vec::new();
        while items.len() < max {
            match parser.parse(current) {
                (next, Ok(item)) => {
                    // A success that consumes nothing would repeat forever
                    // once `min` is met
                    let stalled = next.input_len() == current.input_len();
                    items.push(item);
                    current = next;
                    if stalled && items.len() >= min {
                        break;
                    }
                }
                (_, Err(e)) if items.len() < min => {
                    return (input, Err(ParseError::context("many_m_n", e)));
                }
                (_, Err(_)) => break,
            }
        }
        if items.len() < min {
            return (input, Err(ParseError::new("many_m_n")));
        }
        (current, Ok(items))
    }
}

/// Repeats `parser` until it fails and collects the results. Never fails.
pub fn many<I, T, P>(parser: P) -> impl Parser<I, Vec<T>>
where
    I: Copy + InputLength,
    P: Parser<I, T>,
{
    many_m_n(0, usize::MAX, parser)
}

/// Like `many`, but requires at least one success.
pub fn many1<I, T, P>(parser: P) -> impl Parser<I, Vec<T>>
where
    I: Copy + InputLength,
    P: Parser<I, T>,
{
    many_m_n(1, usize::MAX, parser)
}

/// Exactly `n` repetitions of `parser`.
pub fn count<I, T, P>(n: usize, parser: P) -> impl Parser<I, Vec<T>>
where
    I: Copy + InputLength,
    P: Parser<I, T>,
{
    many_m_n(n, n, parser)
}

fn fold_many_m<I, T, R, P, F>(min: usize, parser: P, reducer: F, initial: R) -> impl Parser<I, R>
where
    I: Copy + InputLength,
    P: Parser<I, T>,
    F: Fn(R, T) -> R,
    R: Clone,
{
    move |input: I| {
        let mut current = input;
        let mut acc = initial.clone();
        let mut seen = 0usize;
        loop {
            match parser.parse(current) {
                (next, Ok(item)) => {
                    let stalled = next.input_len() == current.input_len();
                    acc = reducer(acc, item);
                    current = next;
                    seen += 1;
                    if stalled && seen >= min {
                        break;
                    }
                }
                (_, Err(e)) if seen < min => {
                    return (input, Err(ParseError::context("fold_many_m", e)));
                }
                (_, Err(_)) => break,
            }
        }
        (current, Ok(acc))
    }
}

/// Repeats `parser`, folding each result into an accumulator. Never fails.
pub fn fold_many<I, T, R, P, F>(parser: P, reducer: F, initial: R) -> impl Parser<I, R>
where
    I: Copy + InputLength,
    P: Parser<I, T>,
    F: Fn(R, T) -> R,
    R: Clone,
{
    fold_many_m(0, parser, reducer, initial)
}

/// Like `fold_many`, but requires at least one success.
pub fn fold_many1<I, T, R, P, F>(parser: P, reducer: F, initial: R) -> impl Parser<I, R>
where
    I: Copy + InputLength,
    P: Parser<I, T>,
    F: Fn(R, T) -> R,
    R: Clone,
{
    fold_many_m(1, parser, reducer, initial)
}

// ============================================================================
// Choice
// ============================================================================

/// An ordered list of alternatives producing the same type
pub trait Alt<I, T> {
    fn choice(&self, input: I) -> (I, PResult<T>);
}

macro_rules! impl_alt {
    ($($p:ident $idx:tt),+) => {
        impl<I: Copy, T, $($p: Parser<I, T>),+> Alt<I, T> for ($($p,)+) {
            #[allow(unused_assignments)]
            fn choice(&self, input: I) -> (I, PResult<T>) {
                let mut last = ParseError::new("alt");
                $(
                    match self.$idx.parse(input) {
                        (rest, Ok(value)) => return (rest, Ok(value)),
                        (_, Err(e)) => last = e,
                    }
                )+
                (input, Err(last))
            }
        }
    };
}

impl_alt!(P0 0, P1 1);
impl_alt!(P0 0, P1 1, P2 2);
impl_alt!(P0 0, P1 1, P2 2, P3 3);
impl_alt!(P0 0, P1 1, P2 2, P3 3, P4 4);
impl_alt!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5);

/// Tries each parser in order; the first success wins.
///
/// When every alternative fails the failure of the last one is returned.
/// Earlier alternatives shadow later ones on a shared prefix, so list the
/// more specific parser first.
pub fn alt<I, T, L>(alternatives: L) -> impl Parser<I, T>
where
    I: Copy,
    L: Alt<I, T>,
{
    move |input: I| alternatives.choice(input)
}

/// `Ok(default)` without consuming anything when `parser` fails.
pub fn optional<I, T, P>(parser: P, default: T) -> impl Parser<I, T>
where
    I: Copy,
    T: Clone,
    P: Parser<I, T>,
{
    move |input: I| match parser.parse(input) {
        (rest, Ok(value)) => (rest, Ok(value)),
        (_, Err(_)) => (input, Ok(default.clone())),
    }
}

// ============================================================================
// Sequencing
// ============================================================================

/// A fixed sequence of parsers producing a tuple
pub trait Consecutive<I, O> {
    fn sequence(&self, input: I) -> (I, PResult<O>);
}

macro_rules! impl_consecutive {
    ($($p:ident $t:ident $v:ident $idx:tt),+) => {
        impl<I: Copy, $($t,)+ $($p: Parser<I, $t>),+> Consecutive<I, ($($t,)+)> for ($($p,)+) {
            fn sequence(&self, input: I) -> (I, PResult<($($t,)+)>) {
                let rest = input;
                $(
                    let (rest, $v) = match self.$idx.parse(rest) {
                        (next, Ok(value)) => (next, value),
                        (_, Err(e)) => return (input, Err(e)),
                    };
                )+
                (rest, Ok(($($v,)+)))
            }
        }
    };
}

impl_consecutive!(P0 T0 v0 0, P1 T1 v1 1);
impl_consecutive!(P0 T0 v0 0, P1 T1 v1 1, P2 T2 v2 2);
impl_consecutive!(P0 T0 v0 0, P1 T1 v1 1, P2 T2 v2 2, P3 T3 v3 3);
impl_consecutive!(P0 T0 v0 0, P1 T1 v1 1, P2 T2 v2 2, P3 T3 v3 3, P4 T4 v4 4);
impl_consecutive!(P0 T0 v0 0, P1 T1 v1 1, P2 T2 v2 2, P3 T3 v3 3, P4 T4 v4 4, P5 T5 v5 5);

/// Runs the parsers one after another and returns their results as a tuple.
/// Any failure rewinds to the input before the first parser.
pub fn consecutive<I, O, S>(parsers: S) -> impl Parser<I, O>
where
    I: Copy,
    S: Consecutive<I, O>,
{
    move |input: I| parsers.sequence(input)
}

/// Runs two parsers in sequence and concatenates their text.
pub fn add<I, A, B, P1, P2>(first: P1, second: P2) -> impl Parser<I, String>
where
    I: Copy,
    A: Into<String>,
    B: Into<String>,
    P1: Parser<I, A>,
    P2: Parser<I, B>,
{
    move |input: I| {
        let (rest, a) = match first.parse(input) {
            (next, Ok(a)) => (next, a),
            (_, Err(e)) => return (input, Err(e)),
        };
        match second.parse(rest) {
            (next, Ok(b)) => {
                let mut joined: String = a.into();
                joined.push_str(&b.into());
                (next, Ok(joined))
            }
            (_, Err(e)) => (input, Err(e)),
        }
    }
}

/// Matches `discard`, drops its value, then returns the value of `keep`.
pub fn preceded<I, D, T, P1, P2>(discard: P1, keep: P2) -> impl Parser<I, T>
where
    I: Copy,
    P1: Parser<I, D>,
    P2: Parser<I, T>,
{
    move |input: I| {
        let rest = match discard.parse(input) {
            (next, Ok(_)) => next,
            (_, Err(e)) => return (input, Err(e)),
        };
        match keep.parse(rest) {
            (next, Ok(value)) => (next, Ok(value)),
            (_, Err(e)) => (input, Err(e)),
        }
    }
}

/// Returns the value of `keep`, then matches and drops `discard`.
pub fn terminated<I, T, D, P1, P2>(keep: P1, discard: P2) -> impl Parser<I, T>
where
    I: Copy,
    P1: Parser<I, T>,
    P2: Parser<I, D>,
{
    move |input: I| {
        let (rest, value) = match keep.parse(input) {
            (next, Ok(value)) => (next, value),
            (_, Err(e)) => return (input, Err(e)),
        };
        match discard.parse(rest) {
            (next, Ok(_)) => (next, Ok(value)),
            (_, Err(e)) => (input, Err(e)),
        }
    }
}

/// `open`, then `keep`, then `close`; only the middle value is returned.
pub fn delimited<I, O, T, C, P1, P2, P3>(open: P1, keep: P2, close: P3) -> impl Parser<I, T>
where
    I: Copy,
    P1: Parser<I, O>,
    P2: Parser<I, T>,
    P3: Parser<I, C>,
{
    preceded(open, terminated(keep, close))
}

// ============================================================================
// Whole-input and value transforms
// ============================================================================

/// Fails unless `parser` consumes the entire input.
pub fn all_consuming<I, T, P>(parser: P) -> impl Parser<I, T>
where
    I: Copy + InputLength,
    P: Parser<I, T>,
{
    move |input: I| match parser.parse(input) {
        (rest, Ok(_)) if rest.input_len() > 0 => (input, Err(ParseError::new("all_consuming"))),
        (rest, Ok(value)) => (rest, Ok(value)),
        (_, Err(e)) => (input, Err(e)),
    }
}

/// Transforms the success value; failures pass through.
pub fn map<I, T, R, P, F>(parser: P, f: F) -> impl Parser<I, R>
where
    I: Copy,
    P: Parser<I, T>,
    F: Fn(T) -> R,
{
    move |input: I| {
        let (rest, result) = parser.parse(input);
        (rest, result.map(&f))
    }
}

/// Transforms the success value with a step that may itself fail.
/// A failing step rewinds to the input `parser` was given.
pub fn try_map<I, T, R, P, F>(parser: P, f: F) -> impl Parser<I, R>
where
    I: Copy,
    P: Parser<I, T>,
    F: Fn(T) -> PResult<R>,
{
    move |input: I| match parser.parse(input) {
        (rest, Ok(value)) => match f(value) {
            Ok(mapped) => (rest, Ok(mapped)),
            Err(e) => (input, Err(e)),
        },
        (_, Err(e)) => (input, Err(e)),
    }
}
