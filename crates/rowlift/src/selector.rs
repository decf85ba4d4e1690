//! Scoped selector matching.
//!
//! Items, handles, and announced-text sources are all located by CSS-like
//! selectors scoped to an ancestor element (container → items, item →
//! handle, item → text source). A selector is one or more comma-separated
//! compound parts; a compound part combines an optional type (or `*`), an
//! optional `#id`, and any number of `.class` segments:
//!
//! ```
//! use rowlift::selector::Selector;
//!
//! let selector = Selector::parse("li.task, .row").unwrap();
//! assert_eq!(selector.to_string(), "li.task, .row");
//! ```
//!
//! Combinators are not supported: every query in this crate is already
//! bounded to the descendants of an explicit scope element.

use std::fmt;

use rowlift_core::{Error, Result};

use crate::dom::{Dom, ElementId};

/// A parsed selector: one or more compound parts, any of which may match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Comma-separated alternatives.
    parts: Vec<SelectorPart>,
}

impl Selector {
    /// Create a simple type selector.
    pub fn type_selector(tag: impl Into<String>) -> Self {
        Self {
            parts: vec![SelectorPart::type_only(tag)],
        }
    }

    /// Create a universal selector (`*`).
    pub fn universal() -> Self {
        Self {
            parts: vec![SelectorPart::universal()],
        }
    }

    /// Create a class selector.
    pub fn class(class_name: impl Into<String>) -> Self {
        Self {
            parts: vec![SelectorPart::class_only(class_name)],
        }
    }

    /// Create an ID selector.
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            parts: vec![SelectorPart::id_only(id)],
        }
    }

    /// Parse a selector string such as `li`, `.grip`, `li.task`, or
    /// `li, .row`.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = Vec::new();
        for raw in input.split(',') {
            let raw = raw.trim();
            if raw.is_empty() {
                return Err(Error::invalid_selector(input, "empty selector part"));
            }
            parts.push(SelectorPart::parse(input, raw)?);
        }
        if parts.is_empty() {
            return Err(Error::invalid_selector(input, "empty selector"));
        }
        Ok(Self { parts })
    }

    /// The compound alternatives of this selector.
    pub fn parts(&self) -> &[SelectorPart] {
        &self.parts
    }

    /// Check whether any alternative matches the element.
    pub fn matches<D: Dom>(&self, dom: &D, element: ElementId) -> bool {
        self.parts.iter().any(|part| part.matches(dom, element))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// A single compound segment (e.g. `li.task.done`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorPart {
    /// Type selector (tag name or universal).
    pub type_selector: Option<TypeSelector>,
    /// ID selector (`#id`), matched against the `id` attribute.
    pub id: Option<String>,
    /// Class selectors (`.class`).
    pub classes: Vec<String>,
}

impl SelectorPart {
    /// Create a type-only selector part.
    pub fn type_only(tag: impl Into<String>) -> Self {
        Self {
            type_selector: Some(TypeSelector::Type(tag.into())),
            ..Default::default()
        }
    }

    /// Create a universal selector part.
    pub fn universal() -> Self {
        Self {
            type_selector: Some(TypeSelector::Universal),
            ..Default::default()
        }
    }

    /// Create a class-only selector part.
    pub fn class_only(class_name: impl Into<String>) -> Self {
        Self {
            classes: vec![class_name.into()],
            ..Default::default()
        }
    }

    /// Create an ID-only selector part.
    pub fn id_only(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Parse one compound part. `input` is the full selector string, used
    /// only for error context.
    fn parse(input: &str, raw: &str) -> Result<Self> {
        let mut part = Self::default();
        let mut chars = raw.chars().peekable();

        fn read_name(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    name.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            name
        }

        // Leading type selector or universal.
        match chars.peek() {
            Some('*') => {
                chars.next();
                part.type_selector = Some(TypeSelector::Universal);
            }
            Some(c) if c.is_ascii_alphabetic() => {
                part.type_selector = Some(TypeSelector::Type(read_name(&mut chars)));
            }
            _ => {}
        }

        while let Some(c) = chars.next() {
            match c {
                '.' => {
                    let name = read_name(&mut chars);
                    if name.is_empty() {
                        return Err(Error::invalid_selector(input, "empty class name"));
                    }
                    part.classes.push(name);
                }
                '#' => {
                    let name = read_name(&mut chars);
                    if name.is_empty() {
                        return Err(Error::invalid_selector(input, "empty id name"));
                    }
                    if part.id.is_some() {
                        return Err(Error::invalid_selector(input, "multiple id selectors"));
                    }
                    part.id = Some(name);
                }
                other => {
                    return Err(Error::invalid_selector(
                        input,
                        format!("unexpected character '{other}'"),
                    ));
                }
            }
        }

        if part.type_selector.is_none() && part.id.is_none() && part.classes.is_empty() {
            return Err(Error::invalid_selector(input, "empty selector part"));
        }
        Ok(part)
    }

    /// Check whether this compound part matches the element.
    pub fn matches<D: Dom>(&self, dom: &D, element: ElementId) -> bool {
        match &self.type_selector {
            Some(TypeSelector::Type(tag)) => {
                let Some(element_tag) = dom.tag(element) else {
                    return false;
                };
                if !element_tag.eq_ignore_ascii_case(tag) {
                    return false;
                }
            }
            Some(TypeSelector::Universal) | None => {
                if dom.tag(element).is_none() {
                    return false;
                }
            }
        }

        if let Some(id) = &self.id
            && dom.attribute(element, "id").as_deref() != Some(id.as_str())
        {
            return false;
        }

        self.classes
            .iter()
            .all(|class| dom.has_class(element, class))
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_selector {
            Some(TypeSelector::Universal) => write!(f, "*")?,
            Some(TypeSelector::Type(tag)) => write!(f, "{}", tag)?,
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

/// Type selector - matches the element tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSelector {
    /// Universal selector (`*`) - matches any element.
    Universal,
    /// Named tag (e.g. `li`, `div`).
    Type(String),
}
