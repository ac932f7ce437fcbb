// src/inline.rs
//
// Inline span substitution applied to the literal text of headings, list items
// and paragraph lines.
//
// Passes run in a fixed order, each over the output of the previous one:
//     **x**  → <b>x</b>
//     __x__  → <em>x</em>
//     ((x))  → x with every 'c'/'C' removed
//     [[x]]  → lowercase hex MD5 of x
// Matching is non-greedy and left-to-right: an opener pairs with the nearest
// closer after it. An opener without a closer is left as literal text.

use memchr::memmem;

/// A single named substitution pass.
pub type Pass = fn(&str) -> String;

/// Substitution passes in application order.
pub const PIPELINE: &[(&str, Pass)] = &[
    ("bold", bold),
    ("emphasis", emphasis),
    ("censor", censor),
    ("hash", hash_digest),
];

/// Apply every pass in `PIPELINE` to `text`.
pub fn format(text: &str) -> String {
    PIPELINE
        .iter()
        .fold(text.to_owned(), |acc, (_, pass)| pass(&acc))
}

pub fn bold(text: &str) -> String {
    replace_spans(text, "**", "**", |inner, out| {
        out.push_str("<b>");
        out.push_str(inner);
        out.push_str("</b>");
    })
}

pub fn emphasis(text: &str) -> String {
    replace_spans(text, "__", "__", |inner, out| {
        out.push_str("<em>");
        out.push_str(inner);
        out.push_str("</em>");
    })
}

pub fn censor(text: &str) -> String {
    replace_spans(text, "((", "))", |inner, out| {
        out.extend(inner.chars().filter(|c| !matches!(c, 'c' | 'C')));
    })
}

pub fn hash_digest(text: &str) -> String {
    replace_spans(text, "[[", "]]", |inner, out| {
        out.push_str(&format!("{:x}", md5::compute(inner.as_bytes())));
    })
}

/* ============================== Span matching ============================ */

/// Replace every `open … close` span in `text` with whatever `render` writes
/// for its inner content. Text outside spans is copied verbatim.
///
/// If an opener has no closer after it, no later opener can have one either,
/// so the remaining text is copied and the scan stops.
fn replace_spans<F>(text: &str, open: &str, close: &str, mut render: F) -> String
where
    F: FnMut(&str, &mut String),
{
    let open_finder = memmem::Finder::new(open.as_bytes());
    let close_finder = memmem::Finder::new(close.as_bytes());
    let bytes = text.as_bytes();

    let mut out = String::with_capacity(text.len());
    let mut i = 0usize;
    while let Some(off) = open_finder.find(&bytes[i..]) {
        let start = i + off;
        let inner_start = start + open.len();
        let Some(len) = close_finder.find(&bytes[inner_start..]) else {
            break;
        };
        let inner_end = inner_start + len;
        // Delimiters are ASCII, so all of these offsets are char boundaries.
        out.push_str(&text[i..start]);
        render(&text[inner_start..inner_end], &mut out);
        i = inner_end + close.len();
    }
    out.push_str(&text[i..]);
    out
}
