use super::theme::THEME_ATTRIBUTE;

/// Complete HTML document ready for a display panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    html: String,
}

impl RenderedPage {
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <style>
    body {
      font-family: sans-serif;
      padding: 10px;
    }
    table {
      border-collapse: collapse;
      width: 100%;
      margin-bottom: 20px;
    }
    th, td {
      border: 1px solid #ccc;
      padding: 6px 10px;
    }
    th {
      background-color: var(--header-bg);
      color: var(--header-color);
    }
    h3, h2 {
      margin-top: 20px;
    }
"#;

const PAGE_TAIL: &str = r#"  </style>
</head>
<body>
"#;

const PAGE_END: &str = "\n</body>\n</html>\n";

/// Render table fragments into a themed HTML document.
///
/// Fragments are concatenated in order with no separator and are trusted
/// to be well-formed HTML; nothing is escaped. The theme is picked by the
/// host through the `data-theme-kind` attribute on `<body>`.
pub fn render_page<T: AsRef<str>>(tables: &[T]) -> RenderedPage {
    let body: String = tables.iter().map(AsRef::<str>::as_ref).collect();

    let mut html = String::with_capacity(PAGE_HEAD.len() + PAGE_TAIL.len() + body.len() + 512);
    html.push_str(PAGE_HEAD);
    for theme in super::Theme::ALL {
        let (bg, fg) = theme.header_colors();
        html.push_str(&format!(
            "    body[{}=\"{}\"] {{\n      --header-bg: {};\n      --header-color: {};\n    }}\n",
            THEME_ATTRIBUTE,
            theme.attribute_value(),
            bg,
            fg
        ));
    }
    html.push_str(PAGE_TAIL);
    html.push_str(&body);
    html.push_str(PAGE_END);

    RenderedPage { html }
}

