//! Content tree produced from the user's document.
//!
//! Every element carries its tag, a per-tag document-order ordinal, and the
//! mutable style mapping and class set the application engine writes into.
//! The tree is built fresh for each render pass, styled in place, serialized
//! and dropped.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use restyle_core::serialize_declarations;

use crate::utilities::{escape_html_attr, escape_html_text, is_raw_text, is_void};

/// Node kinds of the content tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node
    Element,
    /// Text node
    Text,
    /// Root of a parsed fragment
    Fragment,
}

/// A node of the content tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNode {
    pub node_type: NodeType,

    /// Lowercase tag name for elements, `#text` / `#fragment` otherwise
    pub tag: String,

    /// Zero-based position among same-tag elements of the whole tree
    pub ordinal: usize,

    /// Text content for text nodes
    pub text: Option<String>,

    /// Attributes other than `class` and `style`, in source order
    pub attributes: IndexMap<String, String>,

    /// Style mapping, serialized as the `style` attribute
    pub style: IndexMap<String, String>,

    /// Class set, serialized as the `class` attribute
    pub classes: IndexSet<String>,

    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            tag: tag_name.to_lowercase(),
            ordinal: 0,
            text: None,
            attributes: IndexMap::new(),
            style: IndexMap::new(),
            classes: IndexSet::new(),
            children: Vec::new(),
        }
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        let mut node = Self::element("#text");
        node.node_type = NodeType::Text;
        node.text = Some(content.to_string());
        node
    }

    /// Create a fragment root
    pub fn fragment() -> Self {
        let mut node = Self::element("#fragment");
        node.node_type = NodeType::Fragment;
        node
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Add a child node
    pub fn add_child(&mut self, child: ContentNode) {
        self.children.push(child);
    }

    /// Builder form of [`add_child`](Self::add_child)
    pub fn with_child(mut self, child: ContentNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set an attribute. `class` and `style` are routed to the class set and
    /// the style mapping.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match name.to_lowercase().as_str() {
            "class" => self
                .classes
                .extend(value.split_whitespace().map(str::to_string)),
            "style" => {
                for decl in restyle_core::parse_declarations(value) {
                    self.style.insert(decl.property, decl.value);
                }
            }
            lower => {
                self.attributes.insert(lower.to_string(), value.to_string());
            }
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(&name.to_lowercase()).map(String::as_str)
    }

    /// The value currently held for a style property, explicit or inherited
    pub fn effective_style(&self, property: &str) -> Option<&str> {
        self.style
            .get(property)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Assign per-tag document-order ordinals to every element
    pub fn assign_ordinals(&mut self) {
        let mut counters: HashMap<String, usize> = HashMap::new();
        let mut stack: Vec<&mut ContentNode> = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_element() {
                let counter = counters.entry(node.tag.clone()).or_insert(0);
                node.ordinal = *counter;
                *counter += 1;
            }
            stack.extend(node.children.iter_mut().rev());
        }
    }

    /// All elements with the given tag, in document order
    pub fn nodes_by_tag(&self, tag: &str) -> Vec<&ContentNode> {
        let mut found = Vec::new();
        let mut stack: Vec<&ContentNode> = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_element() && node.tag == tag {
                found.push(node);
            }
            stack.extend(node.children.iter().rev());
        }
        found
    }

    /// Number of elements in the tree
    pub fn element_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&ContentNode> = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_element() {
                count += 1;
            }
            stack.extend(node.children.iter());
        }
        count
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<&ContentNode> = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_text() {
                out.push_str(node.text.as_deref().unwrap_or(""));
            }
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// Serialize this node with its styles and classes
    pub fn outer_html(&self) -> String {
        let mut out = String::with_capacity(256);
        write_steps(&mut out, vec![Step::Node(self, false)]);
        out
    }

    /// Serialize the children of this node
    pub fn inner_html(&self) -> String {
        let mut out = String::with_capacity(1024);
        let mut stack = Vec::new();
        push_children(&mut stack, self);
        write_steps(&mut out, stack);
        out
    }

    fn write_attributes(&self, out: &mut String) {
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                out.push_str("=\"");
                out.push_str(&escape_html_attr(value));
                out.push('"');
            }
        }

        if !self.classes.is_empty() {
            let classes = self.classes.iter().map(String::as_str).collect::<Vec<_>>();
            out.push_str(" class=\"");
            out.push_str(&escape_html_attr(&classes.join(" ")));
            out.push('"');
        }

        if !self.style.is_empty() {
            let text =
                serialize_declarations(self.style.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            out.push_str(" style=\"");
            out.push_str(&escape_html_attr(&text));
            out.push('"');
        }
    }
}

impl Drop for ContentNode {
    // Deep trees would otherwise be dropped one stack frame per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Pending serialization work
enum Step<'a> {
    /// A node to write, and whether its text is raw
    Node(&'a ContentNode, bool),
    /// A closing tag
    Close(&'a str),
}

fn push_children<'a>(stack: &mut Vec<Step<'a>>, node: &'a ContentNode) {
    let raw = node.is_element() && is_raw_text(&node.tag);
    stack.extend(node.children.iter().rev().map(|child| Step::Node(child, raw)));
}

fn write_steps<'a>(out: &mut String, mut stack: Vec<Step<'a>>) {
    while let Some(step) = stack.pop() {
        let (node, raw_text) = match step {
            Step::Close(tag) => {
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                continue;
            }
            Step::Node(node, raw_text) => (node, raw_text),
        };

        match node.node_type {
            NodeType::Text => {
                let text = node.text.as_deref().unwrap_or("");
                if raw_text {
                    out.push_str(text);
                } else {
                    out.push_str(&escape_html_text(text));
                }
            }
            NodeType::Fragment => push_children(&mut stack, node),
            NodeType::Element => {
                out.push('<');
                out.push_str(&node.tag);
                node.write_attributes(out);
                out.push('>');

                if is_void(&node.tag) {
                    continue;
                }

                stack.push(Step::Close(&node.tag));
                push_children(&mut stack, node);
            }
        }
    }
}
