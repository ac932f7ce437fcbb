// src/block.rs
//
// Block state machine. At most one block is open at a time:
//   None | Paragraph(buffered lines) | UnorderedList | OrderedList
// Each classified line drives one transition, and each emitted tag or content
// line is one output line. Paragraph lines are buffered until something closes
// the paragraph, then written as <p>, line, <br/>, line, ..., </p>.

use crate::classify::{classify, Line, MAX_HEADING_LEVEL};
use crate::inline;
use tracing::{debug, trace};

/// Which block is currently open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    None,
    Paragraph(Vec<String>),
    UnorderedList,
    OrderedList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }

    fn state(self) -> State {
        match self {
            ListKind::Unordered => State::UnorderedList,
            ListKind::Ordered => State::OrderedList,
        }
    }
}

/// Line-at-a-time converter. Construct one per document; `finish` closes
/// whatever is still open and hands back the output lines.
#[derive(Debug, Default)]
pub struct Converter {
    state: State,
    out: Vec<String>,
    blocks: usize,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Output lines emitted so far. A buffered paragraph is not included
    /// until it is closed.
    pub fn output(&self) -> &[String] {
        &self.out
    }

    /// Classify `raw` and apply the matching transition.
    pub fn feed(&mut self, raw: &str) {
        let line = classify(raw);
        trace!(?line, state = ?self.state, "line");
        match line {
            Line::Heading { level, content } => self.heading(level, content),
            Line::UnorderedItem(content) => self.unordered_item(content),
            Line::OrderedItem(content) => self.ordered_item(content),
            Line::Blank => self.blank(),
            Line::PlainText(text) => self.plain_text(text),
        }
    }

    pub fn heading(&mut self, level: usize, content: &str) {
        debug_assert!(
            (1..=MAX_HEADING_LEVEL).contains(&level),
            "heading level {level} out of range"
        );
        self.flush_paragraph();
        self.close_list();
        self.out
            .push(format!("<h{level}>{}</h{level}>", inline::format(content)));
        self.blocks += 1;
    }

    pub fn unordered_item(&mut self, content: &str) {
        self.list_item(ListKind::Unordered, content);
    }

    pub fn ordered_item(&mut self, content: &str) {
        self.list_item(ListKind::Ordered, content);
    }

    pub fn blank(&mut self) {
        self.flush_paragraph();
        self.close_list();
    }

    pub fn plain_text(&mut self, text: &str) {
        // A list cannot stay open around a paragraph.
        self.close_list();
        if let State::Paragraph(buf) = &mut self.state {
            buf.push(text.to_owned());
            return;
        }
        self.state = State::Paragraph(vec![text.to_owned()]);
    }

    /// Close any open block and return the complete output.
    pub fn finish(mut self) -> Vec<String> {
        self.flush_paragraph();
        self.close_list();
        debug!(blocks = self.blocks, lines = self.out.len(), "conversion finished");
        self.out
    }

    /* ----------------------------- helpers ------------------------------ */

    fn list_item(&mut self, kind: ListKind, content: &str) {
        self.flush_paragraph();
        if self.open_list() != Some(kind) {
            self.close_list();
            self.out.push(kind.open_tag().to_owned());
            self.state = kind.state();
            self.blocks += 1;
        }
        self.out.push(format!("<li>{}</li>", inline::format(content)));
    }

    fn open_list(&self) -> Option<ListKind> {
        match self.state {
            State::UnorderedList => Some(ListKind::Unordered),
            State::OrderedList => Some(ListKind::Ordered),
            _ => None,
        }
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.open_list() {
            self.out.push(kind.close_tag().to_owned());
            self.state = State::None;
        }
    }

    fn flush_paragraph(&mut self) {
        let State::Paragraph(buf) = std::mem::take(&mut self.state) else {
            return;
        };
        self.out.push("<p>".to_owned());
        for (i, line) in buf.iter().enumerate() {
            if i > 0 {
                self.out.push("<br/>".to_owned());
            }
            self.out.push(inline::format(line));
        }
        self.out.push("</p>".to_owned());
        self.blocks += 1;
    }
}
