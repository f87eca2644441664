// src/core/dom.rs
//! Structural queries over a parsed page.
//!
//! Parsing itself belongs to `scraper` (html5ever underneath). This module is
//! the small vocabulary the site specs speak: select, read attributes, read
//! text, step to cells and siblings.
//!
//! Keep in mind html5ever builds a *spec-compliant* tree: a `<tr>` written
//! directly under `<table>` ends up inside an implied `<tbody>`, so child
//! selectors need `table > tbody > tr`.

use scraper::{ElementRef, Html, Selector};

/// Compile a selector literal. Only ever called with constants, so a bad
/// selector is a programming error.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

pub fn first<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}

pub fn first_in<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// All descendant text, concatenated in document order.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Direct element children with the given tag name.
pub fn children_named<'a>(el: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |c| c.value().name() == tag)
}

/// The `<td>` cells of a row, in order.
pub fn cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    children_named(row, "td").collect()
}

/// First following sibling element with the given tag name.
pub fn next_sibling_named<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == tag)
}

/// First direct text child that is not just whitespace, trimmed.
pub fn first_text_child<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.children()
        .filter_map(|n| n.value().as_text())
        .map(|t| t.trim())
        .find(|t| !t.is_empty())
}

pub fn parent_element<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.parent().and_then(ElementRef::wrap)
}

/// Rows like `<td><b>Weakness</b></td><td><img …></td>`: find the cell whose
/// bold label contains `label`, return the cell right after it.
pub fn cell_after_label<'a>(doc: &'a Html, td: &Selector, label: &str) -> Option<ElementRef<'a>> {
    doc.select(td)
        .find(|cell| children_named(*cell, "b").any(|b| text_of(b).contains(label)))
        .and_then(|cell| next_sibling_named(cell, "td"))
}
