// src/classify.rs
//
// Line classification. Every input line is trimmed and mapped to exactly one
// `Line` kind; the block state machine never looks at raw text itself.
//
// - Heading: 1..=6 leading '#' followed by a literal space.
// - "- " → unordered item, "* " → ordered item (this convention is intentional).
// - Blank: nothing left after trimming.
// - Anything else is paragraph text, including "####### too deep" and "#nospace".

/// Deepest heading level that is recognized (`<h6>`).
pub const MAX_HEADING_LEVEL: usize = 6;

const UNORDERED_MARKER: &str = "- ";
const ORDERED_MARKER: &str = "* ";

/// One classified input line. Content slices borrow from the input and are
/// already trimmed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Heading { level: usize, content: &'a str },
    UnorderedItem(&'a str),
    OrderedItem(&'a str),
    Blank,
    PlainText(&'a str),
}

pub fn classify(raw: &str) -> Line<'_> {
    // Headings keep their trailing whitespace so "# " still has its space.
    if let Some((level, content)) = heading(raw.trim_start()) {
        return Line::Heading { level, content };
    }
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if let Some(rest) = line.strip_prefix(UNORDERED_MARKER) {
        return Line::UnorderedItem(rest.trim());
    }
    if let Some(rest) = line.strip_prefix(ORDERED_MARKER) {
        return Line::OrderedItem(rest.trim());
    }
    Line::PlainText(line)
}

/// `Some((level, content))` if `line` (leading whitespace already stripped)
/// is an ATX heading.
fn heading(line: &str) -> Option<(usize, &str)> {
    // '#' is ASCII, so the byte count is also a valid char boundary.
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }
    let rest = line[level..].strip_prefix(' ')?;
    Some((level, rest.trim()))
}
