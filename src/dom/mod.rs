// SPDX-License-Identifier: MPL-2.0
//! Document contract between page markup and the localization engine.
//!
//! The engine never holds element references across calls; it asks the
//! document for elements by id, class, or attribute and writes back through
//! the setters below. Any page representation can implement [`Document`];
//! [`MemoryDocument`] is the in-process one used by the CLI and tests.

pub mod memory;

pub use memory::{Element, MemoryDocument};

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// How a translated string is written into an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    /// `input` and `textarea`: the placeholder.
    Placeholder,
    /// `option`: plain label text.
    TextContent,
    /// `title`: the document title.
    DocumentTitle,
    /// Everything else: inner markup, which may itself contain markup.
    InnerHtml,
}

impl TextTarget {
    /// Picks the target for an element by its (case-insensitive) tag name.
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "input" | "textarea" => TextTarget::Placeholder,
            "option" => TextTarget::TextContent,
            "title" => TextTarget::DocumentTitle,
            _ => TextTarget::InnerHtml,
        }
    }
}

pub trait Document {
    /// The root (`html`) element.
    fn root(&self) -> NodeId;

    /// The `body` element, if the page has one.
    fn body(&self) -> Option<NodeId>;

    /// All elements in document order.
    fn elements(&self) -> Vec<NodeId>;

    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Lowercase tag name.
    fn tag_name(&self, node: NodeId) -> &str;

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Replaces the element's children with `html`.
    fn set_inner_html(&mut self, node: NodeId, html: &str);

    fn inner_html(&self, node: NodeId) -> &str;

    /// Returns whether `node` is `ancestor` or lies inside it.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    fn title(&self) -> &str;

    fn set_title(&mut self, title: &str);

    /// Replaces the element's children with literal text.
    fn set_text_content(&mut self, node: NodeId, text: &str) {
        self.set_inner_html(node, &escape_text(text));
    }

    fn set_placeholder(&mut self, node: NodeId, text: &str) {
        self.set_attribute(node, "placeholder", text);
    }

    fn placeholder(&self, node: NodeId) -> Option<&str> {
        self.attribute(node, "placeholder")
    }

    /// First element carrying `class`, in document order.
    fn first_by_class(&self, class: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|&node| self.has_class(node, class))
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attribute(node, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        let classes = match self.attribute(node, "class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing.trim(), class),
            _ => class.to_string(),
        };
        self.set_attribute(node, "class", &classes);
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        self.retain_classes(node, &|c| c != class);
    }

    /// Keeps only the classes for which `keep` returns true.
    fn retain_classes(&mut self, node: NodeId, keep: &dyn Fn(&str) -> bool) {
        let Some(existing) = self.attribute(node, "class") else {
            return;
        };
        let kept: Vec<&str> = existing.split_whitespace().filter(|&c| keep(c)).collect();
        let classes = kept.join(" ");
        if classes != existing {
            self.set_attribute(node, "class", &classes);
        }
    }

    /// Toggles `class`, returning whether it is now present.
    fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    /// Writes `text` into the element according to its [`TextTarget`].
    fn write_text(&mut self, node: NodeId, text: &str) {
        match TextTarget::for_tag(self.tag_name(node)) {
            TextTarget::Placeholder => self.set_placeholder(node, text),
            TextTarget::TextContent => self.set_text_content(node, text),
            TextTarget::DocumentTitle => {
                self.set_title(text);
                self.set_text_content(node, text);
            }
            TextTarget::InnerHtml => self.set_inner_html(node, text),
        }
    }
}

/// Escapes the characters that would otherwise be read as markup.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
