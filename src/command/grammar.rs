//! Vim-style command grammar
//!
//! Operates on the command line with the leading `:` already stripped.
//!
//! ```text
//! addr    := "." | "^" | "$" | int | ("+" | "-") int
//! int     := "0" | [1-9][0-9]*
//! range   := "%" | addr ("," addr)?          (absent: ".,.")
//! command := "w " name | "schema " name | "share " name
//!          | range "i" int?                  (count defaults to 1)
//!          | range "m" addr
//!          | range "d"
//! ```
//!
//! Alternatives are tried in the order written. Within `addr` the single
//! symbol parsers come before the signed integer parser.

use crate::parse::{
    add, alt, char, consecutive, map, optional, preceded, satisfy, tag, take_till, take_while,
    terminated, try_map, Eof, ParseError, Parser,
};

use super::types::{Addr, ParsedCommand};

/// Decimal digits without a leading zero, or exactly `0`
pub fn decimal<'a>() -> impl Parser<&'a str, String> {
    alt((
        map(char('0'), |c: char| c.to_string()),
        add(
            satisfy(|c: char| ('1'..='9').contains(&c)),
            take_while(|c: char| c.is_ascii_digit()),
        ),
    ))
}

fn integer<'a>() -> impl Parser<&'a str, i64> {
    try_map(decimal(), |s: String| {
        s.parse::<i64>().map_err(|_| ParseError::new("integer"))
    })
}

fn signed_integer<'a>() -> impl Parser<&'a str, i64> {
    try_map(
        add(satisfy(|c: char| c == '+' || c == '-'), decimal()),
        |s: String| s.parse::<i64>().map_err(|_| ParseError::new("signed_integer")),
    )
}

fn row_count<'a>() -> impl Parser<&'a str, usize> {
    try_map(decimal(), |s: String| {
        s.parse::<usize>().map_err(|_| ParseError::new("row_count"))
    })
}

/// A single line reference
pub fn addr<'a>() -> impl Parser<&'a str, Addr> {
    alt((
        map(char('.'), |_| Addr::HERE),
        map(char('^'), |_| Addr::Start),
        map(char('$'), |_| Addr::End),
        map(integer(), Addr::Absolute),
        map(signed_integer(), Addr::Relative),
    ))
}

/// `%`, `a` or `a,b`; an absent range means the current line
pub fn range<'a>() -> impl Parser<&'a str, (Addr, Addr)> {
    let whole = map(char('%'), |_| (Addr::Start, Addr::End));
    let explicit = map(
        consecutive((addr(), optional(map(preceded(char(','), addr()), Some), None))),
        |(start, end): (Addr, Option<Addr>)| (start, end.unwrap_or(start)),
    );
    optional(alt((whole, explicit)), (Addr::HERE, Addr::HERE))
}

fn file_command<'a>(
    word: &'static str,
    build: fn(String) -> ParsedCommand,
) -> impl Parser<&'a str, ParsedCommand> {
    map(preceded(tag(word), take_till(Eof)), move |arg: &str| {
        build(arg.to_string())
    })
}

pub fn write_command<'a>() -> impl Parser<&'a str, ParsedCommand> {
    file_command("w ", ParsedCommand::Write)
}

pub fn schema_command<'a>() -> impl Parser<&'a str, ParsedCommand> {
    file_command("schema ", ParsedCommand::Schema)
}

pub fn share_command<'a>() -> impl Parser<&'a str, ParsedCommand> {
    file_command("share ", ParsedCommand::Share)
}

pub fn insert_command<'a>() -> impl Parser<&'a str, ParsedCommand> {
    map(
        consecutive((range(), preceded(char('i'), optional(row_count(), 1)))),
        |(range, count): ((Addr, Addr), usize)| ParsedCommand::Insert { range, count },
    )
}

pub fn move_command<'a>() -> impl Parser<&'a str, ParsedCommand> {
    map(
        consecutive((range(), preceded(char('m'), addr()))),
        |(range, dest): ((Addr, Addr), Addr)| ParsedCommand::Move { range, dest },
    )
}

pub fn delete_command<'a>() -> impl Parser<&'a str, ParsedCommand> {
    map(terminated(range(), char('d')), |range: (Addr, Addr)| {
        ParsedCommand::Delete { range }
    })
}

/// Any one command. Callers wrap this in `all_consuming`.
pub fn vim_parser<'a>() -> impl Parser<&'a str, ParsedCommand> {
    alt((
        write_command(),
        schema_command(),
        share_command(),
        insert_command(),
        move_command(),
        delete_command(),
    ))
}
