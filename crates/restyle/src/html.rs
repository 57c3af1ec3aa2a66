//! HTML parsing support.
//!
//! This module parses HTML strings into the [`ContentNode`] tree the
//! application engine styles in place.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::ContentNode;

/// Parse an HTML fragment into a content tree with ordinals assigned.
///
/// # Example
///
/// ```rust
/// use restyle::parse_html;
///
/// let tree = parse_html("<p>One</p><p>Two <em>three</em></p>");
/// assert_eq!(tree.nodes_by_tag("p")[1].ordinal, 1);
/// assert_eq!(tree.inner_html(), "<p>One</p><p>Two <em>three</em></p>");
/// ```
pub fn parse_html(html: &str) -> ContentNode {
    let document = Html::parse_fragment(html);

    // The fragment parser wraps everything in a synthetic <html> element.
    let mut root = build_tree(document.root_element());
    root.assign_ordinals();
    root
}

/// Convert the children of `top` into a fragment, depth first without
/// recursion
fn build_tree(top: ElementRef) -> ContentNode {
    // Open nodes paired with the scraper children not yet visited
    let mut stack = vec![(ContentNode::fragment(), top.children())];

    loop {
        let next = stack.last_mut().and_then(|(_, children)| children.next());
        match next {
            Some(child) => match child.value() {
                ScraperNode::Text(text) => {
                    if let Some((node, _)) = stack.last_mut() {
                        node.add_child(ContentNode::text(&text.text));
                    }
                }
                ScraperNode::Element(_) => {
                    if let Some(element) = ElementRef::wrap(child) {
                        stack.push((element_node(element), element.children()));
                    }
                }
                _ => {}
            },
            None => {
                let Some((node, _)) = stack.pop() else {
                    return ContentNode::fragment();
                };
                match stack.last_mut() {
                    Some((parent, _)) => parent.add_child(node),
                    None => return node,
                }
            }
        }
    }
}

/// A childless content node for a scraper element
fn element_node(element: ElementRef) -> ContentNode {
    let mut node = ContentNode::element(element.value().name());

    for (name, value) in element.value().attrs() {
        node.set_attr(name, value);
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_html() {
        let root = parse_html("<p>Hello World</p>");
        assert!(!root.is_element());
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].tag, "p");
        assert_eq!(root.text_content(), "Hello World");
    }

    #[test]
    fn test_parse_lifts_class_and_style() {
        let root = parse_html(r#"<p class="note" style="color: red" data-x="1">x</p>"#);
        let p = &root.children[0];
        assert!(p.classes.contains("note"));
        assert_eq!(p.effective_style("color"), Some("red"));
        assert_eq!(p.attr("data-x"), Some("1"));
    }

    #[test]
    fn test_parse_round_trips_plain_markup() {
        let html = "<ul>\n<li>One</li>\n<li>Two &amp; <a href=\"x?a=1&amp;b=2\">three</a></li>\n</ul>\n";
        assert_eq!(parse_html(html).inner_html(), html);
    }

    #[test]
    fn test_parse_assigns_ordinals_across_nesting() {
        let root = parse_html("<ul><li>a<ul><li>b</li></ul></li><li>c</li></ul>");
        let items = root.nodes_by_tag("li");
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].text_content(), "c");
        assert_eq!(items[2].ordinal, 2);
        assert_eq!(root.nodes_by_tag("ul")[1].ordinal, 1);
    }

    #[test]
    fn test_parse_deeply_nested_markup() {
        let depth = 3000;
        let html = format!("{}deep{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let root = parse_html(&html);

        assert_eq!(root.element_count(), depth);
        assert_eq!(root.text_content(), "deep");
        assert_eq!(root.inner_html(), html);
        assert_eq!(root.nodes_by_tag("div")[depth - 1].ordinal, depth - 1);
    }
}
