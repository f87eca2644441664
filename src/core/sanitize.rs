// src/core/sanitize.rs

/// Entities that survive the parser as literal text (double-escaped markup)
/// plus the decoded non-breaking space, all folded to plain characters.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace('\u{a0}', " ")
}

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop every non-breaking space, encoded or decoded. `001&nbsp;/&nbsp;226` → `001/226`.
pub fn strip_nbsp(s: &str) -> String {
    s.replace("&nbsp;", "").replace('\u{a0}', "")
}

/// Nidoran and friends: the site prints ♀/♂ as numeric entities.
/// Depending on how the page was saved these arrive decoded or as raw
/// entity text, with or without the trailing `;`.
pub fn transliterate_gender(s: &str) -> String {
    s.replace("&#9792;", "-F")
        .replace("&#9792", "-F")
        .replace('\u{2640}', "-F")
        .replace("&#9794;", "-M")
        .replace("&#9794", "-M")
        .replace('\u{2642}', "-M")
}

/// Last path segment of an icon URL without its extension.
/// `/tcgpocket/image/grass.png` → `grass`.
pub fn icon_stem(src: &str) -> &str {
    let file = src.rsplit('/').next().unwrap_or(src);
    match file.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => file,
    }
}

/// Leading ASCII digits of `s` (after trimming) as a number.
pub fn leading_number(s: &str) -> Option<u32> {
    let t = s.trim_start();
    let end = t.find(|c: char| !c.is_ascii_digit()).unwrap_or(t.len());
    t[..end].parse().ok()
}
