//! In-memory host document.
//!
//! A small arena of element, text, and trusted-markup nodes that stands in
//! for the page the sections are rendered into. Nodes are addressed by
//! [`NodeId`] and never removed.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("node {0:?} already has a parent")]
    AlreadyAttached(NodeId),
    #[error("cannot append node {child:?} inside itself via {parent:?}")]
    Cycle { parent: NodeId, child: NodeId },
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
}

#[derive(Debug, Clone)]
enum NodeType {
    Element(Element),
    Text(String),
    /// Markup inserted verbatim on serialization.
    Markup(String),
}

#[derive(Debug, Clone)]
struct Element {
    tag_name: String,
    /// Attribute order is preserved for stable output.
    attrs: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    node_type: NodeType,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    body: NodeId,
    title: String,
    /// Every element that has carried an id, connected or not.
    id_index: HashMap<String, Vec<NodeId>>,
}

impl Document {
    /// Empty page: a `<body>` holding an `<h1>` with the page title.
    pub fn new(page_title: &str) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            title: page_title.to_string(),
            id_index: HashMap::new(),
        };
        doc.root = doc.create_element("html");
        doc.body = doc.create_element("body");
        doc.attach(doc.root, doc.body);

        let heading = doc.create_element("h1");
        let text = doc.create_node(NodeType::Text(page_title.to_string()));
        doc.attach(heading, text);
        doc.attach(doc.body, heading);
        doc
    }

    /// Page with a `<div id="...">` container at the end of the body.
    pub fn with_container(page_title: &str, container_id: &str) -> Self {
        let mut doc = Self::new(page_title);
        let container = doc.create_element("div");
        doc.index_id(container_id, container);
        doc.element_mut(container)
            .attrs
            .push(("id".to_string(), container_id.to_string()));
        doc.attach(doc.body, container);
        doc
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.create_node(NodeType::Element(Element {
            tag_name: tag_name.to_string(),
            attrs: Vec::new(),
        }))
    }

    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), DocumentError> {
        self.ensure_element(node)?;
        if name == "id" {
            if let Some(old) = self.attribute(node, "id").map(str::to_string)
                && let Some(nodes) = self.id_index.get_mut(&old)
            {
                nodes.retain(|n| *n != node);
                if nodes.is_empty() {
                    self.id_index.remove(&old);
                }
            }
            self.index_id(value, node);
        }
        let element = self.element_mut(node);
        match element.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => element.attrs.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    pub fn set_class_name(&mut self, node: NodeId, class: &str) -> Result<(), DocumentError> {
        self.set_attribute(node, "class", class)
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[node.0].node_type {
            NodeType::Element(e) => e
                .attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].node_type {
            NodeType::Element(e) => Some(e.tag_name.as_str()),
            _ => None,
        }
    }

    /// Append a text child; the text is escaped on serialization.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<(), DocumentError> {
        self.ensure_element(parent)?;
        let text = self.create_node(NodeType::Text(text.to_string()));
        self.attach(parent, text);
        Ok(())
    }

    /// Replace the children of `node` with `markup`, inserted without escaping.
    pub fn set_inner_html(&mut self, node: NodeId, markup: &str) -> Result<(), DocumentError> {
        self.ensure_element(node)?;
        for child in std::mem::take(&mut self.nodes[node.0].children) {
            self.nodes[child.0].parent = None;
        }
        let markup = self.create_node(NodeType::Markup(markup.to_string()));
        self.attach(node, markup);
        Ok(())
    }

    /// Append a detached node as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        if self.nodes[child.0].parent.is_some() || child == self.root {
            return Err(DocumentError::AlreadyAttached(child));
        }
        self.ensure_element(parent)?;
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(DocumentError::Cycle { parent, child });
            }
            cursor = self.nodes[node.0].parent;
        }
        self.attach(parent, child);
        Ok(())
    }

    /// First element in tree order carrying `id` that is part of the page.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let candidates: Vec<NodeId> = self
            .id_index
            .get(id)?
            .iter()
            .copied()
            .filter(|node| self.is_connected(*node))
            .collect();
        match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => self.first_in_tree_order(self.root, &candidates),
        }
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Concatenated text of the subtree; markup counts as its raw source.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    /// Serialize the subtree rooted at `node`.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    /// Serialize the whole page, including the doctype and stylesheet.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(16384);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        html.push_str("<style>\n");
        html.push_str(CSS);
        html.push_str("</style>\n</head>\n");
        self.write_node(self.body, &mut html);
        html.push_str("\n</html>\n");
        html
    }

    fn create_node(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            node_type,
        });
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn element_mut(&mut self, node: NodeId) -> &mut Element {
        match &mut self.nodes[node.0].node_type {
            NodeType::Element(e) => e,
            _ => unreachable!("element_mut called on a non-element node"),
        }
    }

    fn index_id(&mut self, id: &str, node: NodeId) {
        let nodes = self.id_index.entry(id.to_string()).or_default();
        if !nodes.contains(&node) {
            nodes.push(node);
        }
    }

    fn ensure_element(&self, node: NodeId) -> Result<(), DocumentError> {
        match self.nodes[node.0].node_type {
            NodeType::Element(_) => Ok(()),
            _ => Err(DocumentError::NotAnElement(node)),
        }
    }

    fn first_in_tree_order(&self, node: NodeId, candidates: &[NodeId]) -> Option<NodeId> {
        if candidates.contains(&node) {
            return Some(node);
        }
        self.nodes[node.0]
            .children
            .iter()
            .find_map(|child| self.first_in_tree_order(*child, candidates))
    }

    fn is_connected(&self, mut node: NodeId) -> bool {
        loop {
            if node == self.root {
                return true;
            }
            match self.nodes[node.0].parent {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].node_type {
            NodeType::Text(text) | NodeType::Markup(text) => out.push_str(text),
            NodeType::Element(_) => {
                for child in &self.nodes[node.0].children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].node_type {
            NodeType::Text(text) => out.push_str(&escape_html(text)),
            NodeType::Markup(markup) => out.push_str(markup),
            NodeType::Element(element) => {
                out.push('<');
                out.push_str(&element.tag_name);
                for (name, value) in &element.attrs {
                    out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
                }
                out.push('>');
                for child in &self.nodes[node.0].children {
                    self.write_node(*child, out);
                }
                out.push_str(&format!("</{}>", element.tag_name));
            }
        }
    }
}

/// Escape text for use in element content or a quoted attribute.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

const CSS: &str = r#"body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; max-width: 900px; margin: 0 auto; padding: 2rem; color: #222; line-height: 1.5; }
h1 { border-bottom: 2px solid #3178c6; padding-bottom: 0.5rem; }
.section { background: #f7f9fc; border-left: 4px solid #3178c6; margin: 1.5rem 0; padding: 1rem 1.5rem; border-radius: 4px; }
.section h2 { margin-top: 0; color: #3178c6; }
.output { background: #272822; color: #f8f8f2; font-family: monospace; padding: 0.5rem 1rem; border-radius: 4px; margin-top: 1rem; }
pre { background: #eef1f5; padding: 0.75rem; overflow-x: auto; }
code { background: #eef1f5; padding: 0 0.25rem; }
"#;
