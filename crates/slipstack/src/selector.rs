//! Selector types and parsing for handle/ignore filtering.
//!
//! Handle and ignore filters only ever name a single element shape (a tag,
//! an id, classes, or a compound of those), so a [`Selector`] is one
//! compound part. Combinators (` `, `>`, `+`, `~`) are rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Type portion of a selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSelector {
    /// Matches a specific element tag ("li", "div", ...).
    Tag(String),
    /// The universal selector (`*`), matching any tag.
    Universal,
}

/// A single compound selector (e.g., `li.card.pinned` or `#grip`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Selector {
    /// Type selector (element tag or universal).
    pub type_selector: Option<TypeSelector>,
    /// ID selector (#id).
    pub id: Option<String>,
    /// Class selectors (.class).
    pub classes: Vec<String>,
}

impl Selector {
    /// Create a tag-only selector.
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            type_selector: Some(TypeSelector::Tag(tag.into())),
            ..Default::default()
        }
    }

    /// Create a universal selector (`*`).
    pub fn universal() -> Self {
        Self {
            type_selector: Some(TypeSelector::Universal),
            ..Default::default()
        }
    }

    /// Create a class-only selector.
    pub fn class(class_name: impl Into<String>) -> Self {
        Self {
            classes: vec![class_name.into()],
            ..Default::default()
        }
    }

    /// Create an ID-only selector.
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Parse a selector from its CSS source form.
    pub fn parse(input: &str) -> Result<Self, Error> {
        input.parse()
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_selector(input, "selector is empty"));
        }
        if trimmed.chars().any(|c| c.is_whitespace())
            || trimmed.contains(['>', '+', '~', ','])
        {
            return Err(Error::invalid_selector(
                input,
                "combinators and selector lists are not supported",
            ));
        }

        let mut selector = Self::default();
        let mut rest = trimmed;

        // Leading type selector, if any.
        if let Some(stripped) = rest.strip_prefix('*') {
            selector.type_selector = Some(TypeSelector::Universal);
            rest = stripped;
        } else if !rest.starts_with(['.', '#']) {
            let end = rest.find(['.', '#']).unwrap_or(rest.len());
            let (tag, tail) = rest.split_at(end);
            if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(Error::invalid_selector(input, "malformed tag name"));
            }
            selector.type_selector = Some(TypeSelector::Tag(tag.to_ascii_lowercase()));
            rest = tail;
        }

        // Remaining `.class` / `#id` segments.
        while !rest.is_empty() {
            let marker = rest
                .chars()
                .next()
                .filter(|c| matches!(c, '.' | '#'))
                .ok_or_else(|| Error::invalid_selector(input, "malformed selector"))?;
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let (name, tail) = body.split_at(end);
            if name.is_empty()
                || !name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(Error::invalid_selector(input, "malformed class or id name"));
            }
            match marker {
                '.' => selector.classes.push(name.to_string()),
                '#' => {
                    if selector.id.replace(name.to_string()).is_some() {
                        return Err(Error::invalid_selector(input, "more than one id"));
                    }
                }
                _ => unreachable!("marker is restricted to '.' and '#'"),
            }
            rest = tail;
        }

        Ok(selector)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_selector {
            Some(TypeSelector::Tag(tag)) => write!(f, "{}", tag)?,
            Some(TypeSelector::Universal) => write!(f, "*")?,
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag() {
        let sel = Selector::parse("li").unwrap();
        assert_eq!(sel.type_selector, Some(TypeSelector::Tag("li".into())));
        assert!(sel.classes.is_empty());
        assert!(sel.id.is_none());
    }

    #[test]
    fn test_parse_class() {
        let sel = Selector::parse(".grip").unwrap();
        assert_eq!(sel, Selector::class("grip"));
    }

    #[test]
    fn test_parse_compound() {
        let sel = Selector::parse("li.card.pinned#row-3").unwrap();
        assert_eq!(sel.type_selector, Some(TypeSelector::Tag("li".into())));
        assert_eq!(sel.classes, vec!["card".to_string(), "pinned".to_string()]);
        assert_eq!(sel.id.as_deref(), Some("row-3"));
    }

    #[test]
    fn test_parse_universal() {
        assert_eq!(Selector::parse("*").unwrap(), Selector::universal());
        let sel = Selector::parse("*.card").unwrap();
        assert_eq!(sel.type_selector, Some(TypeSelector::Universal));
        assert_eq!(sel.classes, vec!["card".to_string()]);
    }

    #[test]
    fn test_tag_case_insensitive() {
        assert_eq!(Selector::parse("LI").unwrap(), Selector::tag("li"));
    }

    #[test]
    fn test_parse_rejects_combinators() {
        assert!(Selector::parse("ul li").is_err());
        assert!(Selector::parse("ul > li").is_err());
        assert!(Selector::parse(".a, .b").is_err());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("   ").is_err());
        assert!(Selector::parse(".").is_err());
        assert!(Selector::parse("li.").is_err());
        assert!(Selector::parse("#a#b").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for source in ["li", ".grip", "#row", "li#row-3.card.pinned", "*.card"] {
            let sel = Selector::parse(source).unwrap();
            assert_eq!(sel.to_string(), source.to_ascii_lowercase());
        }
    }
}
