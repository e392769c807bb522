//! A selector engine for the CSS subset the animator's markup contract
//! uses. Supported: type selectors, `#id`, `.class`, attribute predicates
//! (`[attr]`, `[attr="v"]`, `[attr^="v"]`), compounds thereof, and the
//! descendant combinator (whitespace).

use std::fmt;
use std::str::FromStr;

use festoon_types::ElementId;
use thiserror::Error;

use crate::element::Element;
use crate::page::Page;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("expected identifier at byte {0}")]
    ExpectedIdentifier(usize),
    #[error("unexpected character `{0}` at byte {1}")]
    UnexpectedChar(char, usize),
    #[error("unterminated attribute selector")]
    UnterminatedAttribute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrPredicate {
    Present(String),
    Equals(String, String),
    StartsWith(String, String),
}

impl AttrPredicate {
    fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Present(name) => element.attribute(name).is_some(),
            Self::Equals(name, value) => element.attribute(name) == Some(value),
            Self::StartsWith(name, prefix) => element
                .attribute(name)
                .is_some_and(|attr| attr.starts_with(prefix)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SimpleSelector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrPredicate>,
}

impl SimpleSelector {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag() != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.dom_id() != Some(id) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| element.has_class(class)) {
            return false;
        }
        self.attrs.iter().all(|attr| attr.matches(element))
    }
}

/// A parsed selector. Matching walks the steps right to left, scanning up
/// the ancestor chain for each descendant combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    steps: Vec<SimpleSelector>,
    source: String,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let mut scanner = Scanner::new(source);
        scanner.skip_ws();
        if scanner.is_done() {
            return Err(SelectorError::Empty);
        }

        let mut steps = Vec::new();
        while !scanner.is_done() {
            steps.push(parse_simple(&mut scanner)?);
            scanner.skip_ws();
        }
        Ok(Self {
            steps,
            source: source.to_string(),
        })
    }

    /// The text this selector was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the element identified by `id` matches this selector within
    /// `page`. Unknown ids never match.
    #[must_use]
    pub fn matches(&self, page: &Page, id: ElementId) -> bool {
        let mut steps = self.steps.iter().rev();
        let Some(last) = steps.next() else {
            return false;
        };
        let Some(element) = page.element(id) else {
            return false;
        };
        if !last.matches(element) {
            return false;
        }

        let mut current = element.parent();
        for step in steps {
            loop {
                let Some(ancestor_id) = current else {
                    return false;
                };
                let Some(ancestor) = page.element(ancestor_id) else {
                    return false;
                };
                current = ancestor.parent();
                if step.matches(ancestor) {
                    break;
                }
            }
        }
        true
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_simple(scanner: &mut Scanner<'_>) -> Result<SimpleSelector, SelectorError> {
    let mut simple = SimpleSelector::default();
    let mut matched = false;

    if let Some(tag) = scanner.take_ident() {
        simple.tag = Some(tag.to_ascii_lowercase());
        matched = true;
    }
    loop {
        match scanner.peek() {
            Some('#') => {
                scanner.bump();
                let ident = scanner
                    .take_ident()
                    .ok_or(SelectorError::ExpectedIdentifier(scanner.pos()))?;
                simple.id = Some(ident);
                matched = true;
            }
            Some('.') => {
                scanner.bump();
                let ident = scanner
                    .take_ident()
                    .ok_or(SelectorError::ExpectedIdentifier(scanner.pos()))?;
                simple.classes.push(ident);
                matched = true;
            }
            Some('[') => {
                scanner.bump();
                simple.attrs.push(parse_attr(scanner)?);
                matched = true;
            }
            _ => break,
        }
    }

    if !matched {
        return match scanner.peek() {
            Some(ch) => Err(SelectorError::UnexpectedChar(ch, scanner.pos())),
            None => Err(SelectorError::Empty),
        };
    }
    Ok(simple)
}

fn parse_attr(scanner: &mut Scanner<'_>) -> Result<AttrPredicate, SelectorError> {
    scanner.skip_ws();
    let name = scanner
        .take_ident()
        .ok_or(SelectorError::ExpectedIdentifier(scanner.pos()))?;
    scanner.skip_ws();
    match scanner.peek() {
        Some(']') => {
            scanner.bump();
            Ok(AttrPredicate::Present(name))
        }
        Some('^') => {
            scanner.bump();
            expect_char(scanner, '=')?;
            let value = parse_attr_value(scanner)?;
            scanner.skip_ws();
            expect_char(scanner, ']')?;
            Ok(AttrPredicate::StartsWith(name, value))
        }
        Some('=') => {
            scanner.bump();
            let value = parse_attr_value(scanner)?;
            scanner.skip_ws();
            expect_char(scanner, ']')?;
            Ok(AttrPredicate::Equals(name, value))
        }
        Some(ch) => Err(SelectorError::UnexpectedChar(ch, scanner.pos())),
        None => Err(SelectorError::UnterminatedAttribute),
    }
}

fn parse_attr_value(scanner: &mut Scanner<'_>) -> Result<String, SelectorError> {
    scanner.skip_ws();
    match scanner.peek() {
        Some(quote @ ('"' | '\'')) => {
            scanner.bump();
            scanner.take_until(quote)
        }
        Some(_) => {
            let value = scanner.take_while(|ch| ch != ']' && !ch.is_whitespace());
            if value.is_empty() {
                Err(SelectorError::ExpectedIdentifier(scanner.pos()))
            } else {
                Ok(value)
            }
        }
        None => Err(SelectorError::UnterminatedAttribute),
    }
}

fn expect_char(scanner: &mut Scanner<'_>, expected: char) -> Result<(), SelectorError> {
    match scanner.peek() {
        Some(ch) if ch == expected => {
            scanner.bump();
            Ok(())
        }
        Some(ch) => Err(SelectorError::UnexpectedChar(ch, scanner.pos())),
        None => Err(SelectorError::UnterminatedAttribute),
    }
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn pos(&self) -> usize {
        self.pos
    }

    fn is_done(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.bump();
        }
    }

    fn take_ident(&mut self) -> Option<String> {
        let start = self.pos;
        while matches!(self.peek(), Some(ch) if ch.is_alphanumeric() || ch == '-' || ch == '_') {
            self.bump();
        }
        (self.pos > start).then(|| self.src[start..self.pos].to_string())
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(ch) if keep(ch)) {
            self.bump();
        }
        self.src[start..self.pos].to_string()
    }

    fn take_until(&mut self, terminator: char) -> Result<String, SelectorError> {
        let start = self.pos;
        loop {
            match self.peek() {
                Some(ch) if ch == terminator => {
                    let value = self.src[start..self.pos].to_string();
                    self.bump();
                    return Ok(value);
                }
                Some(_) => self.bump(),
                None => return Err(SelectorError::UnterminatedAttribute),
            }
        }
    }
}
