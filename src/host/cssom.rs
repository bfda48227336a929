//! In-memory CSS object model built from stylesheet source text.

use cssparser::{
    parse_important, AtRuleParser, BasicParseError, CowRcStr, DeclarationParser, ParseError,
    Parser, ParserInput, ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
    StyleSheetParser, ToCss, Token,
};

use super::shorthand::expand_shorthand;
use super::{AccessError, HostRule, HostStyleSheet, StyleSheetSource};
use super::{MEDIA_RULE_TYPE, STYLE_RULE_TYPE};

/// A document holding stylesheets parsed from text.
#[derive(Debug, Clone, Default)]
pub struct CssomDocument {
    /// Stylesheets in document order
    pub style_sheets: Vec<CssomStyleSheet>,
}

impl CssomDocument {
    /// Create a document with no stylesheets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stylesheet.
    pub fn add_style_sheet(&mut self, sheet: CssomStyleSheet) {
        self.style_sheets.push(sheet);
    }

    /// Append a stylesheet (builder style).
    pub fn with_style_sheet(mut self, sheet: CssomStyleSheet) -> Self {
        self.style_sheets.push(sheet);
        self
    }
}

impl StyleSheetSource for CssomDocument {
    type Sheet = CssomStyleSheet;

    fn style_sheets(&self) -> &[CssomStyleSheet] {
        &self.style_sheets
    }
}

/// A parsed stylesheet.
#[derive(Debug, Clone, Default)]
pub struct CssomStyleSheet {
    href: Option<String>,
    rules: Vec<CssomRule>,
    cross_origin: bool,
}

impl CssomStyleSheet {
    /// Parse an inline stylesheet.
    pub fn parse(css: &str) -> Self {
        Self {
            href: None,
            rules: parse_rule_list_from_str(css),
            cross_origin: false,
        }
    }

    /// Parse a stylesheet loaded from `href`.
    pub fn parse_with_href(css: &str, href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::parse(css)
        }
    }

    /// A sheet from another origin whose rules cannot be read.
    pub fn cross_origin(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            rules: Vec::new(),
            cross_origin: true,
        }
    }

    /// Whether reading the rules is refused.
    pub fn is_cross_origin(&self) -> bool {
        self.cross_origin
    }
}

impl HostStyleSheet for CssomStyleSheet {
    type Rule = CssomRule;

    fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    fn css_rules(&self) -> Result<&[CssomRule], AccessError> {
        if self.cross_origin {
            return Err(AccessError::new(
                self.href.as_deref().unwrap_or("<inline>"),
            ));
        }
        Ok(&self.rules)
    }
}

/// A rule in the in-memory object model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssomRule {
    /// `selector { declarations }`
    Style {
        /// Raw selector text
        selector_text: String,
        /// `(property, value)` pairs, longhands only
        declarations: Vec<(String, String)>,
    },
    /// `@media condition { rules }`
    Media {
        /// Serialized condition text
        condition_text: String,
        /// Nested rules
        css_rules: Vec<CssomRule>,
    },
    /// Any other at-rule; its content is not kept
    Other {
        /// CSSOM type code (0 when CSSOM has none)
        type_code: u16,
        /// At-rule name, lowercase
        name: String,
    },
}

impl HostRule for CssomRule {
    fn type_code(&self) -> u16 {
        match self {
            CssomRule::Style { .. } => STYLE_RULE_TYPE,
            CssomRule::Media { .. } => MEDIA_RULE_TYPE,
            CssomRule::Other { type_code, .. } => *type_code,
        }
    }

    fn selector_text(&self) -> &str {
        match self {
            CssomRule::Style { selector_text, .. } => selector_text,
            _ => "",
        }
    }

    fn declarations(&self) -> Vec<(&str, &str)> {
        match self {
            CssomRule::Style { declarations, .. } => declarations
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn condition_text(&self) -> &str {
        match self {
            CssomRule::Media { condition_text, .. } => condition_text,
            _ => "",
        }
    }

    fn css_rules(&self) -> &[CssomRule] {
        match self {
            CssomRule::Media { css_rules, .. } => css_rules,
            _ => &[],
        }
    }
}

/// CSSOM type code for an at-rule name.
fn at_rule_type_code(name: &str) -> u16 {
    match name {
        "import" => 3,
        "media" => MEDIA_RULE_TYPE,
        "font-face" => 5,
        "page" => 6,
        "keyframes" => 7,
        "namespace" => 10,
        "supports" => 12,
        _ => 0,
    }
}

fn parse_rule_list_from_str(css: &str) -> Vec<CssomRule> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    parse_rule_list(&mut parser)
}

/// Parse rules until the input is exhausted, skipping invalid ones.
fn parse_rule_list(input: &mut Parser) -> Vec<CssomRule> {
    let mut rule_parser = RuleListParser;
    StyleSheetParser::new(input, &mut rule_parser)
        .filter_map(|result| match result {
            Ok(rule) => Some(rule),
            Err((err, slice)) => {
                log::trace!("Skipping invalid rule {:?}: {:?}", slice, err.kind);
                None
            }
        })
        .collect()
}

/// Raw prelude text, consuming the rest of the prelude.
fn consume_raw<'i>(input: &mut Parser<'i, '_>) -> &'i str {
    let start = input.position();
    while input.next_including_whitespace_and_comments().is_ok() {}
    input.slice_from(start).trim()
}

/// Serialize a media query list the way CSSOM reports `mediaText`.
///
/// Identifiers and units are lowercased, comments dropped, and features
/// written as `(name: value)`. A leading `all and` is omitted.
fn serialize_media_query(input: &mut Parser) -> String {
    let parts = media_query_parts(input);
    match parts.as_slice() {
        [all, and, rest @ ..] if all == "all" && and == "and" && !rest.is_empty() => rest.join(" "),
        _ => parts.join(" "),
    }
}

fn media_query_parts(input: &mut Parser) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    loop {
        let token = match input.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        let part = match token {
            Token::Colon => {
                attach_punctuation(&mut parts, ':');
                continue;
            }
            Token::Comma => {
                attach_punctuation(&mut parts, ',');
                continue;
            }
            Token::Ident(ref name) => name.to_ascii_lowercase(),
            Token::Dimension {
                has_sign,
                value,
                int_value,
                ref unit,
            } => {
                let number = Token::Number {
                    has_sign,
                    value,
                    int_value,
                };
                format!("{}{}", number.to_css_string(), unit.to_ascii_lowercase())
            }
            Token::ParenthesisBlock | Token::Function(_) => {
                let open = match token {
                    Token::Function(ref name) => format!("{}(", name.to_ascii_lowercase()),
                    _ => "(".to_string(),
                };
                let inner = input
                    .parse_nested_block(|nested| {
                        Ok::<_, ParseError<'_, ()>>(media_query_parts(nested).join(" "))
                    })
                    .unwrap_or_default();
                format!("{}{})", open, inner)
            }
            other => other.to_css_string(),
        };
        parts.push(part);
    }
    parts
}

fn attach_punctuation(parts: &mut Vec<String>, punct: char) {
    match parts.last_mut() {
        Some(last) => last.push(punct),
        None => parts.push(punct.to_string()),
    }
}

/// `!important` followed by the end of the value.
fn important_suffix<'i>(input: &mut Parser<'i, '_>) -> Result<(), BasicParseError<'i>> {
    parse_important(input)?;
    input.expect_exhausted()
}

/// Serialize a declaration value, dropping comments and collapsing
/// whitespace. Returns the value and whether it was `!important`.
fn serialize_value(input: &mut Parser) -> (String, bool) {
    let mut value = String::new();
    let mut important = false;
    loop {
        if input.try_parse(important_suffix).is_ok() {
            important = true;
            break;
        }
        let token = match input.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        write_token(input, &token, &mut value);
    }
    (value.trim().to_string(), important)
}

fn write_tokens(input: &mut Parser, out: &mut String) {
    loop {
        let token = match input.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        write_token(input, &token, out);
    }
}

fn write_token<'i>(input: &mut Parser<'i, '_>, token: &Token<'i>, out: &mut String) {
    let close = match token {
        Token::WhiteSpace(_) => {
            if !out.is_empty() && !out.ends_with(&[' ', '(', '['][..]) {
                out.push(' ');
            }
            return;
        }
        Token::Function(_) | Token::ParenthesisBlock => ')',
        Token::SquareBracketBlock => ']',
        Token::CurlyBracketBlock => '}',
        _ => {
            out.push_str(&token.to_css_string());
            return;
        }
    };

    out.push_str(&token.to_css_string());
    let _ = input.parse_nested_block(|nested| {
        write_tokens(nested, out);
        Ok::<_, ParseError<'_, ()>>(())
    });
    if out.ends_with(' ') {
        out.pop();
    }
    out.push(close);
}

struct AtPrelude {
    name: String,
    text: String,
}

/// Parser for top-level and `@media`-nested rule lists.
struct RuleListParser;

impl<'i> AtRuleParser<'i> for RuleListParser {
    type Prelude = AtPrelude;
    type AtRule = CssomRule;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let name = name.to_ascii_lowercase();
        let text = if name == "media" {
            serialize_media_query(input)
        } else {
            consume_raw(input).to_string()
        };
        Ok(AtPrelude { name, text })
    }

    fn rule_without_block(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        Ok(CssomRule::Other {
            type_code: at_rule_type_code(&prelude.name),
            name: prelude.name,
        })
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        if prelude.name == "media" {
            return Ok(CssomRule::Media {
                condition_text: prelude.text,
                css_rules: parse_rule_list(input),
            });
        }

        while input.next().is_ok() {}
        Ok(CssomRule::Other {
            type_code: at_rule_type_code(&prelude.name),
            name: prelude.name,
        })
    }
}

impl<'i> QualifiedRuleParser<'i> for RuleListParser {
    type Prelude = String;
    type QualifiedRule = CssomRule;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Ok(consume_raw(input).to_string())
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        Ok(CssomRule::Style {
            selector_text: prelude,
            declarations: parse_declarations(input),
        })
    }
}

/// A parsed declaration before it is stored on the rule.
struct Declaration {
    name: String,
    value: String,
    important: bool,
}

/// Parse a declaration block, expanding box shorthands into longhands.
///
/// Each property keeps one value: a later declaration replaces an earlier
/// one unless only the earlier one is `!important`.
fn parse_declarations(input: &mut Parser) -> Vec<(String, String)> {
    let mut body = DeclarationListParser;
    let mut declarations: Vec<Declaration> = Vec::new();

    for declaration in RuleBodyParser::new(input, &mut body).flatten() {
        let longhands = expand_shorthand(&declaration.name, &declaration.value)
            .unwrap_or_else(|| vec![(declaration.name, declaration.value)]);
        for (name, value) in longhands {
            set_declaration(&mut declarations, name, value, declaration.important);
        }
    }

    declarations
        .into_iter()
        .map(|d| (d.name, d.value))
        .collect()
}

fn set_declaration(
    declarations: &mut Vec<Declaration>,
    name: String,
    value: String,
    important: bool,
) {
    match declarations.iter_mut().find(|d| d.name == name) {
        Some(existing) if existing.important && !important => {}
        Some(existing) => {
            existing.value = value;
            existing.important = important;
        }
        None => declarations.push(Declaration {
            name,
            value,
            important,
        }),
    }
}

struct DeclarationListParser;

impl<'i> DeclarationParser<'i> for DeclarationListParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _declaration_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let name = if name.starts_with("--") {
            String::from(&*name)
        } else {
            name.to_ascii_lowercase()
        };
        let (value, important) = serialize_value(input);
        if value.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok(Declaration {
            name,
            value,
            important,
        })
    }
}

impl<'i> AtRuleParser<'i> for DeclarationListParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationListParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, Declaration, ()> for DeclarationListParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}
