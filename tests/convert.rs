use markdown2html::{convert_lines, convert_str};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
fn every_heading_level(#[case] level: usize) {
    let input = format!("{} text", "#".repeat(level));
    assert_eq!(convert_str(&input), format!("<h{level}>text</h{level}>"));
}

#[test]
fn seven_hashes_is_paragraph_text() {
    assert_eq!(convert_str("####### text"), "<p>\n####### text\n</p>");
}

#[test]
fn heading_with_only_trailing_space_is_empty_heading() {
    assert_eq!(convert_str("# "), "<h1></h1>");
    assert_eq!(convert_str("text\n## \t\n"), "<p>\ntext\n</p>\n<h2></h2>");
}

#[test]
fn readme_scenario() {
    let input = "# Title\n\nSome *text*\n- a\n- b\n\nEnd.\n";
    let expected = [
        "<h1>Title</h1>",
        "<p>",
        "Some *text*",
        "</p>",
        "<ul>",
        "<li>a</li>",
        "<li>b</li>",
        "</ul>",
        "<p>",
        "End.",
        "</p>",
    ]
    .join("\n");
    assert_eq!(convert_str(input), expected);
}

#[test]
fn list_runs_wrap_once() {
    let out = convert_lines(["- one", "- two", "- three", "", "* x", "* y"]);
    assert_eq!(
        out,
        [
            "<ul>",
            "<li>one</li>",
            "<li>two</li>",
            "<li>three</li>",
            "</ul>",
            "<ol>",
            "<li>x</li>",
            "<li>y</li>",
            "</ol>",
        ]
    );
}

#[test]
fn paragraph_lines_are_joined_with_breaks() {
    let src = "Hello\nI'm a text\nwith 3 lines\n";
    assert_eq!(
        convert_str(src),
        "<p>\nHello\n<br/>\nI'm a text\n<br/>\nwith 3 lines\n</p>"
    );
}

#[test]
fn crlf_input() {
    assert_eq!(
        convert_str("## A\r\n- b\r\n"),
        "<h2>A</h2>\n<ul>\n<li>b</li>\n</ul>"
    );
}

#[test]
fn inline_directives_end_to_end() {
    let src = "# **Bold** and __em__\n* ((Chicago))\n* [[abc]]\n\nkeep **open";
    let expected = [
        "<h1><b>Bold</b> and <em>em</em></h1>",
        "<ol>",
        "<li>hiago</li>",
        "<li>900150983cd24fb0d6963f7d28e17f72</li>",
        "</ol>",
        "<p>",
        "keep **open",
        "</p>",
    ]
    .join("\n");
    assert_eq!(convert_str(src), expected);
}

#[test]
fn empty_input_gives_empty_output() {
    assert_eq!(convert_str(""), "");
    assert_eq!(convert_str("\n\n  \n"), "");
}

#[test]
fn conversion_is_deterministic() {
    let src = "# T\n\npara **b**\nmore [[x]]\n- a\n* b\n";
    assert_eq!(convert_str(src), convert_str(src));
}
