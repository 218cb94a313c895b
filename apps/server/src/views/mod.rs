//! Server-side HTML rendering.
//!
//! Pages are typed payloads implementing [`Template`]; [`render`] wraps the
//! page body in the shared layout.

pub mod nodegroup_list;

pub use nodegroup_list::NodeGroupListPage;

use crate::i18n::Translator;

/// A page that can be rendered to HTML.
pub trait Template {
    /// Template identifier, e.g. `nodegrouplist.html`.
    fn name(&self) -> &'static str;

    /// Already translated page title.
    fn title(&self) -> &str;

    /// HTML for the content area.
    fn render_body(&self, t: &Translator) -> String;
}

/// Output of [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub template: &'static str,
    pub html: String,
}

/// Render `page` inside the layout.
pub fn render<T: Template>(page: &T, t: &Translator) -> RenderedPage {
    let title = escape_html(page.title());
    let body = page.render_body(t);

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="utf-8">
    <title>LMS: {title}</title>
    <style>
        body {{ font-family: system-ui, -apple-system, sans-serif; margin: 20px; }}
        table.lmsbox {{ border-collapse: collapse; min-width: 600px; }}
        table.lmsbox th, table.lmsbox td {{ border: 1px solid #ccc; padding: 4px 8px; }}
        table.lmsbox thead {{ background: #ebe4d6; }}
        td.number {{ text-align: right; }}
        .empty {{ text-align: center; font-style: italic; }}
    </style>
</head>
<body>
<h1>{title}</h1>
<!-- {template} -->
{body}
</body>
</html>"#,
        lang = t.language().code(),
        template = page.name(),
    );

    RenderedPage {
        template: page.name(),
        html,
    }
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
