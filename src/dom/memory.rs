// SPDX-License-Identifier: MPL-2.0
//! In-memory element tree implementing [`Document`].

use super::{Document, NodeId};

/// An element description used to build a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    inner_html: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attributes: Vec::new(),
            inner_html: String::new(),
        }
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_attr(&mut self.attributes, name.into(), value.into());
        self
    }

    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    #[must_use]
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.inner_html = html.into();
        self
    }
}

fn set_attr(attributes: &mut Vec<(String, String)>, name: String, value: String) {
    match attributes.iter_mut().find(|(existing, _)| *existing == name) {
        Some((_, slot)) => *slot = value,
        None => attributes.push((name, value)),
    }
}

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A page held entirely in memory.
///
/// Starts with an `html` root containing an empty `body`.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    title: String,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![Node {
                element: Element::new("html"),
                parent: None,
                children: Vec::new(),
            }],
            title: String::new(),
        };
        doc.append(doc.root(), Element::new("body"));
        doc
    }

    /// Appends `element` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        // A parent from another document leaves the element detached.
        let parent = self.node_mut(parent).map(|node| {
            node.children.push(id);
            parent
        });
        self.nodes.push(Node {
            element,
            parent,
            children: Vec::new(),
        });
        id
    }

    /// Number of elements, including root and body.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }
}

impl Document for MemoryDocument {
    fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    fn body(&self) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|&id| self.tag_name(id) == "body")
    }

    fn elements(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(node) = self.node(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|&node| self.attribute(node, "id") == Some(id))
    }

    fn tag_name(&self, node: NodeId) -> &str {
        self.node(node).map_or("", |n| n.element.tag.as_str())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)?
            .element
            .attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.node_mut(node) {
            set_attr(&mut n.element.attributes, name.to_string(), value.to_string());
        }
    }

    fn set_inner_html(&mut self, node: NodeId, html: &str) {
        if let Some(n) = self.node_mut(node) {
            html.clone_into(&mut n.element.inner_html);
        }
    }

    fn inner_html(&self, node: NodeId) -> &str {
        self.node(node).map_or("", |n| n.element.inner_html.as_str())
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_has_root_and_body() {
        let doc = MemoryDocument::new();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.tag_name(doc.root()), "html");
        assert_eq!(doc.body().map(|b| doc.tag_name(b)), Some("body"));
    }

    #[test]
    fn elements_are_in_document_order() {
        let mut doc = MemoryDocument::new();
        let body = doc.body().unwrap();
        let nav = doc.append(body, Element::new("nav"));
        let main = doc.append(body, Element::new("main"));
        // Appended after `main` but belongs before it.
        let link = doc.append(nav, Element::new("a"));

        let order = doc.elements();
        let pos = |id| order.iter().position(|&n| n == id).unwrap();
        assert!(pos(nav) < pos(link));
        assert!(pos(link) < pos(main));
    }

    #[test]
    fn attributes_overwrite_in_place() {
        let mut doc = MemoryDocument::new();
        let body = doc.body().unwrap();
        let el = doc.append(body, Element::new("DIV").id("x").attr("data-en", "one"));
        doc.set_attribute(el, "data-en", "two");

        assert_eq!(doc.tag_name(el), "div");
        assert_eq!(doc.attribute(el, "data-en"), Some("two"));
        assert_eq!(doc.element_by_id("x"), Some(el));
        assert!(doc.element_by_id("y").is_none());
    }

    #[test]
    fn contains_walks_ancestors() {
        let mut doc = MemoryDocument::new();
        let body = doc.body().unwrap();
        let menu = doc.append(body, Element::new("div").id("langDropdown"));
        let item = doc.append(menu, Element::new("a"));
        let other = doc.append(body, Element::new("p"));

        assert!(doc.contains(menu, item));
        assert!(doc.contains(menu, menu));
        assert!(!doc.contains(menu, other));
    }

    #[test]
    fn first_by_class_finds_earliest_match() {
        let mut doc = MemoryDocument::new();
        let body = doc.body().unwrap();
        let first = doc.append(body, Element::new("span").class("current-lang big"));
        doc.append(body, Element::new("span").class("current-lang"));
        assert_eq!(doc.first_by_class("current-lang"), Some(first));
    }

    #[test]
    fn nodes_from_another_document_are_ignored() {
        let mut big = MemoryDocument::new();
        let body = big.body().unwrap();
        let mut last = body;
        for _ in 0..5 {
            last = big.append(body, Element::new("p"));
        }

        let mut small = MemoryDocument::new();
        assert_eq!(small.tag_name(last), "");
        assert_eq!(small.attribute(last, "id"), None);
        assert_eq!(small.inner_html(last), "");
        assert!(!small.contains(small.root(), last));
        small.set_attribute(last, "class", "x");
        small.set_inner_html(last, "x");
        small.add_class(last, "y");

        let detached = small.append(last, Element::new("span"));
        assert!(!small.elements().contains(&detached));
        assert_eq!(small.elements().len(), 2);
    }
}
