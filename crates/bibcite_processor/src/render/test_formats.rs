/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use super::*;

#[test]
fn test_html_title_and_link() {
    let fmt = Html;
    let title = fmt.affix("", fmt.emph(fmt.text("Principia")), ".");
    assert_eq!(fmt.finish(title), "<i>Principia</i>.");

    let url = "https://doi.org/10.1/x";
    assert_eq!(
        fmt.link(url, fmt.text(url)),
        r#"<a href="https://doi.org/10.1/x">https://doi.org/10.1/x</a>"#
    );
}

#[test]
fn test_plain_title_and_link() {
    let fmt = PlainText;
    assert_eq!(fmt.emph(fmt.text("Principia")), "_Principia_");
    assert_eq!(fmt.link("https://example.com", fmt.text("https://example.com")), "https://example.com");
}

#[test]
fn test_empty_content_stays_empty() {
    let fmt = Html;
    assert_eq!(fmt.emph(String::new()), "");
    assert_eq!(fmt.quote(String::new()), "");
    assert_eq!(fmt.link("https://example.com", String::new()), "");
}

#[test]
fn test_wrap_and_quote() {
    let fmt = PlainText;
    assert_eq!(fmt.parenthesize("2020".into()), "(2020)");
    assert_eq!(fmt.quote(fmt.text("Title.")), "\u{201C}Title.\u{201D}");
    assert_eq!(fmt.join(vec!["a".into(), "b".into()], ", "), "a, b");
}

#[test]
fn test_html_escapes_text_and_href() {
    let fmt = Html;
    assert_eq!(
        fmt.emph(fmt.text("<script>alert(1)</script>")),
        "<i>&lt;script&gt;alert(1)&lt;/script&gt;</i>"
    );
    assert_eq!(fmt.affix("", fmt.text("Smith & Sons"), " & Co."), "Smith &amp; Sons &amp; Co.");
    let url = r#"https://e.com/?a=1&b=" onmouseover="alert(1)"#;
    assert_eq!(
        fmt.link(url, fmt.text("x")),
        r#"<a href="https://e.com/?a=1&amp;b=&quot; onmouseover=&quot;alert(1)">x</a>"#
    );
}

#[test]
fn test_plain_text_is_not_escaped() {
    let fmt = PlainText;
    assert_eq!(fmt.affix("", fmt.text("Smith & Sons <Ltd>"), "."), "Smith & Sons <Ltd>.");
}

#[test]
fn test_render_format_from_str() {
    assert_eq!("HTML".parse::<RenderFormat>().unwrap(), RenderFormat::Html);
    assert_eq!("text".parse::<RenderFormat>().unwrap(), RenderFormat::Plain);
    assert!("docx".parse::<RenderFormat>().is_err());
}
