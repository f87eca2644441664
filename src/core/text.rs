// src/core/text.rs
//! Mixed text/icon content → one string.
//!
//! Card text on the site interleaves plain text with inline energy icons and
//! `<br>` breaks, e.g. `Discard a <img alt="Fire"> Energy from this Pokémon.`
//! Only the *immediate* children of the node are visited; nested elements
//! (the bold attack name, links) are deliberately skipped.

use scraper::{ElementRef, Node};

use super::sanitize::normalize_entities;

/// One immediate child of a text-bearing node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fragment<'a> {
    Text(&'a str),
    /// Inline icon; carries its alt text (may be empty).
    Icon(&'a str),
    LineBreak,
    Other,
}

impl<'a> Fragment<'a> {
    pub fn of(node: &'a Node) -> Self {
        match node {
            Node::Text(text) => Fragment::Text(&**text),
            Node::Element(el) => match el.name() {
                "img" => Fragment::Icon(el.attr("alt").unwrap_or("")),
                "br" => Fragment::LineBreak,
                _ => Fragment::Other,
            },
            _ => Fragment::Other,
        }
    }
}

pub fn fragments<'a>(el: ElementRef<'a>) -> impl Iterator<Item = Fragment<'a>> + 'a {
    el.children().map(|n| Fragment::of(n.value()))
}

/// Normalized text of `el`, or `None` when nothing but whitespace is left.
pub fn normalize(el: ElementRef<'_>) -> Option<String> {
    normalize_fragments(fragments(el))
}

pub fn normalize_fragments<'a, I>(frags: I) -> Option<String>
where
    I: IntoIterator<Item = Fragment<'a>>,
{
    let mut out = s!();
    for frag in frags {
        match frag {
            Fragment::Text(t) => out.push_str(&normalize_entities(t.trim())),
            Fragment::Icon(alt) if !alt.is_empty() => {
                out.push(' ');
                out.push_str(alt);
                out.push(' ');
            }
            Fragment::LineBreak => out.push('\n'),
            Fragment::Icon(_) | Fragment::Other => {}
        }
    }

    let trimmed = out.trim();
    if trimmed.is_empty() { None } else { Some(s!(trimmed)) }
}
