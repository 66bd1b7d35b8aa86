//! Small DOM helpers shared by the section extractors.

use scraper::{ElementRef, Html, Node, Selector};

/// Parses a static selector from [`crate::layout`].
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid layout selector {css:?}: {e}"))
}

/// All descendant text of `element`, concatenated in document order.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text of the first element matching `selector`, if any.
pub(crate) fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).next().map(element_text)
}

/// Text of the first child node of `element`.
///
/// For a text node that is the raw text; for an element child it is the
/// element's full text.
pub(crate) fn first_child_text(element: ElementRef<'_>) -> Option<String> {
    let child = element.children().next()?;
    match child.value() {
        Node::Text(text) => Some((**text).to_owned()),
        Node::Element(_) => ElementRef::wrap(child).map(element_text),
        _ => None,
    }
}

/// Concatenated contents of every inline `<script>` element.
pub(crate) fn inline_script_text(document: &Html, scripts: &Selector) -> String {
    document
        .select(scripts)
        .map(element_text)
        .collect::<Vec<_>>()
        .join("\n")
}
