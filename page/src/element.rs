use std::collections::BTreeMap;

use festoon_types::{ElementId, InlineStyle};

/// A single node in a [`Page`](crate::Page).
///
/// The `id` attribute and the class list are modeled as dedicated fields
/// rather than entries in the attribute map; selector matching relies on
/// that split.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) id: ElementId,
    pub(crate) tag: String,
    pub(crate) dom_id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) text: String,
    pub(crate) style: InlineStyle,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
}

impl Element {
    pub(crate) fn new(id: ElementId, tag: String) -> Self {
        Self {
            id,
            tag,
            dom_id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            style: InlineStyle::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn dom_id(&self) -> Option<&str> {
        self.dom_id.as_deref()
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut InlineStyle {
        &mut self.style
    }

    #[must_use]
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

/// Declarative description of an element subtree, materialized with
/// [`Page::append`](crate::Page::append).
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    pub(crate) tag: String,
    pub(crate) dom_id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) text: String,
    pub(crate) children: Vec<ElementSpec>,
}

impl ElementSpec {
    /// Starts a spec for `tag`. Tag names are stored lowercased, matching
    /// how HTML normalizes them.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.dom_id = Some(id.into());
        self
    }

    /// Adds one class. Call repeatedly for multiple classes.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }
}
