use pagekeep_markup::{markup_to_html, parse, Block, Span};
use pretty_assertions::assert_eq;

// ── Line classification ──────────────────────────────────────────

#[test]
fn heading_and_paragraph_lines() {
    let blocks = parse("# Title\nBody line");
    assert_eq!(blocks.len(), 2);
    assert!(matches!(blocks[0], Block::Heading(_)));
    assert!(matches!(blocks[1], Block::Paragraph(_)));
}

#[test]
fn empty_lines_are_skipped() {
    let blocks = parse("one\n\n\ntwo\n");
    assert_eq!(blocks.len(), 2);
}

#[test]
fn heading_without_space_is_paragraph() {
    let blocks = parse("#NoSpace");
    assert!(matches!(blocks[0], Block::Paragraph(_)));
}

#[test]
fn heading_renders_distinct_wrapper() {
    assert_eq!(markup_to_html("# Title"), "<h1>Title</h1>");
    assert_eq!(markup_to_html("Title"), "<p>Title</p>");
}

// ── Bold and italic toggles ──────────────────────────────────────

#[test]
fn bold_toggle() {
    assert_eq!(
        markup_to_html("Hi *there* friend"),
        "<p>Hi <b>there</b> friend</p>"
    );
}

#[test]
fn italic_toggle() {
    assert_eq!(markup_to_html("an _italic_ word"), "<p>an <i>italic</i> word</p>");
}

#[test]
fn unclosed_bold_runs_to_end_of_line() {
    assert_eq!(markup_to_html("a *loud end"), "<p>a <b>loud end</b></p>");
}

#[test]
fn bold_and_italic_do_not_nest() {
    // Entering bold while italic is active replaces the kind; the
    // trailing toggle re-enters italic, flushed empty at end of line.
    let blocks = parse("_a*b*c_");
    let Block::Paragraph(spans) = &blocks[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(
        spans,
        &vec![
            Span::Plain(String::new()),
            Span::Italic("a".to_string()),
            Span::Bold("b".to_string()),
            Span::Plain("c".to_string()),
            Span::Italic(String::new()),
        ]
    );
}

#[test]
fn toggles_flush_empty_spans() {
    let blocks = parse("*bold*");
    let Block::Paragraph(spans) = &blocks[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(
        spans,
        &vec![
            Span::Plain(String::new()),
            Span::Bold("bold".to_string()),
            Span::Plain(String::new()),
        ]
    );
}

// ── Links ────────────────────────────────────────────────────────

#[test]
fn link_renders_anchor() {
    assert_eq!(
        markup_to_html("see [[Main:Home]] here"),
        "<p>see <a href=\"/wiki/Main:Home\">Main:Home</a> here</p>"
    );
}

#[test]
fn link_resumes_surrounding_kind() {
    assert_eq!(
        markup_to_html("*bold [[X]] still*"),
        "<p><b>bold </b><a href=\"/wiki/X\">X</a><b> still</b></p>"
    );
}

#[test]
fn unclosed_link_brackets_are_literal() {
    assert_eq!(markup_to_html("a [[dangling"), "<p>a [[dangling</p>");
}

#[test]
fn link_inside_heading() {
    assert_eq!(
        markup_to_html("# See [[Docs:Intro]]"),
        "<h1>See <a href=\"/wiki/Docs:Intro\">Docs:Intro</a></h1>"
    );
}

// ── Raw mode ─────────────────────────────────────────────────────

#[test]
fn raw_span_disables_delimiters() {
    assert_eq!(
        markup_to_html("code $START*not bold* [[x]]$END done"),
        "<p>code *not bold* [[x]] done</p>"
    );
}

#[test]
fn raw_mode_persists_across_lines() {
    // $START opened on line one keeps line two raw from its first char.
    assert_eq!(
        markup_to_html("open $START*raw\nstill *raw* here$END tail"),
        "<p>open *raw</p><p>still *raw* here tail</p>"
    );
}

#[test]
fn raw_close_without_open_is_literal() {
    // Outside raw mode $END is not a token.
    assert_eq!(markup_to_html("costs $END today"), "<p>costs $END today</p>");
}

#[test]
fn raw_open_inside_raw_is_literal() {
    assert_eq!(
        markup_to_html("$START one $START two$END"),
        "<p> one $START two</p>"
    );
}

#[test]
fn raw_state_returned_per_line() {
    let blocks = parse("$STARTraw\nplain$END*b*");
    let Block::Paragraph(spans) = &blocks[1] else {
        panic!("expected paragraph");
    };
    assert_eq!(
        spans,
        &vec![
            Span::Raw("plain".to_string()),
            Span::Plain(String::new()),
            Span::Bold("b".to_string()),
            Span::Plain(String::new()),
        ]
    );
}

// ── Document rendering ───────────────────────────────────────────

#[test]
fn document_concatenates_in_source_order() {
    assert_eq!(
        markup_to_html("# Title\nfirst\nsecond"),
        "<h1>Title</h1><p>first</p><p>second</p>"
    );
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(markup_to_html(""), "");
}

#[test]
fn span_text_is_not_escaped() {
    // Faithful to the renderer contract: text passes through as-is.
    assert_eq!(markup_to_html("a <em>b</em>"), "<p>a <em>b</em></p>");
}
