use super::*;

#[test]
fn blank_lines_split_paragraphs() {
    let html = PlainRichText
        .render("First line\nsecond line\n\n  \nNext paragraph\r\n", "rich-text")
        .into_string();
    assert_eq!(
        html,
        r#"<div class="rich-text"><p>First line<br>second line</p><p>Next paragraph</p></div>"#
    );
}

#[test]
fn content_is_escaped() {
    let html = PlainRichText.render("<b>bold</b> & co", "x").into_string();
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
}

#[test]
fn empty_content_renders_empty_block() {
    assert_eq!(
        PlainRichText.render("\n\n", "x").into_string(),
        r#"<div class="x"></div>"#
    );
}
