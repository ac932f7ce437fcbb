// src/lib.rs
//
// markdown2html — converts a small Markdown subset to HTML, one pass, line by line.
//
// - Headings: "# " .. "###### " → <h1>..<h6>.
// - "- " items → <ul>, "* " items → <ol>.
// - Runs of plain lines → one <p>, lines separated by <br/>.
// - Inline: **bold**, __emphasis__, ((censor: drop c/C)), [[md5 hex digest]].
//
// Every call starts from fresh state; nothing is shared between conversions.

pub mod block;
pub mod classify;
pub mod error;
pub mod inline;

pub use block::{Converter, State};
pub use classify::{classify, Line};
pub use error::{Error, Result};

/// Convert input lines to HTML output lines.
pub fn convert_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut conv = Converter::new();
    for line in lines {
        conv.feed(line.as_ref());
    }
    conv.finish()
}

/// Convert a whole document. Output lines are joined with '\n', without a
/// trailing newline.
pub fn convert_str(src: &str) -> String {
    convert_lines(src.lines()).join("\n")
}
