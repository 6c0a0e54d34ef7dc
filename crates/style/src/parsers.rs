//! nom parsers for the small subset of CSS found on rendered content elements:
//! `style="text-align: center; width: 320px"` declarations and length values.

use crate::dimension::Dimension;
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case, take_while, take_while1};
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{map, map_res, opt, recognize, rest};
use nom::sequence::{delimited, pair, separated_pair};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| {
            s.parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or("number out of range")
        },
    )
    .parse(input)
}

// --- Dimension Parsers ---

/// Parses a dimension: `auto`, a percentage, or a length whose unit defaults to px.
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    alt((
        map(tag_no_case("auto"), |_| Dimension::Auto),
        map(pair(parse_f32, char('%')), |(v, _)| Dimension::Percent(v)),
        map(pair(parse_f32, tag_no_case("px")), |(v, _)| Dimension::Px(v)),
        map(pair(parse_f32, tag_no_case("pt")), |(v, _)| Dimension::Pt(v)),
        map(pair(parse_f32, tag_no_case("mm")), |(v, _)| Dimension::Mm(v)),
        map(pair(parse_f32, tag_no_case("cm")), |(v, _)| Dimension::Mm(v * 10.0)),
        map(parse_f32, Dimension::Px),
    ))
    .parse(input)
}

// --- Declaration Parsers ---

fn property_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_').parse(input)
}

fn declaration(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        ws(property_name),
        char(':'),
        map(rest, str::trim),
    )
    .parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

/// Parses a single dimension value, e.g. `"320px"` or `"50%"`.
pub fn parse_dimension_value(input: &str) -> Result<Dimension, StyleParseError> {
    run_parser(parse_dimension, input).map_err(|_| StyleParseError::InvalidValue {
        property: "length".to_string(),
        value: input.to_string(),
    })
}

/// Parses one `name: value` declaration. The property name is normalized to kebab-case.
pub fn parse_declaration(input: &str) -> Result<(String, String), StyleParseError> {
    let (name, value) = run_parser(declaration, input)?;
    if value.is_empty() {
        return Err(StyleParseError::InvalidValue {
            property: name.to_string(),
            value: String::new(),
        });
    }
    Ok((kebab_case(name), strip_important(value).to_string()))
}

fn strip_important(value: &str) -> &str {
    let important: IResult<&str, &str> =
        recognize((take_while(|c: char| c != '!'), tag("!"), ws(tag_no_case("important"))))
            .parse(value);
    match important {
        Ok(("", _)) => value.split('!').next().map(str::trim).unwrap_or(value),
        _ => value,
    }
}

/// Converts DOM-style property names (`textAlign`) to CSS names (`text-align`).
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch.to_ascii_lowercase());
        }
    }
    out
}

/// The declarations of an inline `style` attribute, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    /// Parses a declaration block leniently: malformed declarations are skipped.
    pub fn parse(input: &str) -> Self {
        let declarations = input
            .split(';')
            .filter(|d| !d.trim().is_empty())
            .filter_map(|d| parse_declaration(d).ok())
            .collect();
        Self { declarations }
    }

    /// The value of `property` (CSS or DOM spelling). Later declarations win.
    pub fn get(&self, property: &str) -> Option<&str> {
        let wanted = kebab_case(property);
        self.declarations
            .iter()
            .rev()
            .find(|(name, _)| *name == wanted)
            .map(|(_, value)| value.as_str())
    }

    pub fn dimension(&self, property: &str) -> Option<Dimension> {
        self.get(property).and_then(|v| parse_dimension_value(v).ok())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
