use super::*;

#[test]
fn renders_emphasis_and_lists() {
    let html = render_markdown_html("**Key idea**\n\n- retrieval\n- generation");
    assert!(html.contains("<strong>Key idea</strong>"));
    assert!(html.contains("<li>retrieval</li>"));
    assert!(html.contains("<li>generation</li>"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| Model | Params |\n| --- | --- |\n| BERT | 110M |");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>BERT</td>"));
}

#[test]
fn drops_raw_html_blocks_and_inline_tags() {
    let html = render_markdown_html("<script>alert(1)</script>\n\nplain <b>bold</b> text");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("plain"));
    assert!(html.contains("text"));
}

#[test]
fn empty_input_renders_nothing() {
    assert!(render_markdown_html("").is_empty());
}

#[test]
fn blanks_script_link_targets() {
    let html = render_markdown_html("[click](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript:"));
    assert!(html.contains(">click</a>"));
}

#[test]
fn blanks_script_targets_regardless_of_case_or_image() {
    let html = render_markdown_html("[a](JavaScript:alert(1)) ![b](data:image/svg+xml;base64,PHN2Zz4=) [c](vbscript:x)");
    assert!(!html.to_ascii_lowercase().contains("javascript:"));
    assert!(!html.contains("data:"));
    assert!(!html.contains("vbscript:"));
}

#[test]
fn keeps_web_mail_and_relative_targets() {
    let html = render_markdown_html(
        "[paper](https://arxiv.org/abs/1706.03762) [plain](http://example.org) \
         [mail](mailto:team@example.org) [local](/papers/1?q=a:b) [anchor](#results)",
    );
    assert!(html.contains(r#"href="https://arxiv.org/abs/1706.03762""#));
    assert!(html.contains(r#"href="http://example.org""#));
    assert!(html.contains(r#"href="mailto:team@example.org""#));
    assert!(html.contains(r#"href="/papers/1?q=a:b""#));
    assert!(html.contains(r##"href="#results""##));
}
