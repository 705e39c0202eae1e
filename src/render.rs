//! Markdown rendering
//!
//! Pure transformation of explanation markdown into a themed HTML
//! document with an embedded style sheet. Rendering never executes
//! input and never touches the network; links and images come out as
//! plain references for the display surface to resolve.

use pulldown_cmark::{html, Options, Parser};

/// Display theme for rendered explanations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}' (expected 'light' or 'dark')", other)),
        }
    }
}

/// Color palette backing one theme's style sheet
struct Palette {
    background: &'static str,
    text: &'static str,
    border: &'static str,
    heading: &'static str,
    cell_background: &'static str,
    head_background: &'static str,
    head_text: &'static str,
    code_background: &'static str,
    code_text: &'static str,
    quote_accent: &'static str,
    quote_text: &'static str,
    quote_background: &'static str,
    emphasis: &'static str,
}

const LIGHT: Palette = Palette {
    background: "#fdfdfd",
    text: "#222",
    border: "#ccc",
    heading: "#1565c0",
    cell_background: "#ffffff88",
    head_background: "#f5f5f5",
    head_text: "#222",
    code_background: "#f0f0f0",
    code_text: "#d32f2f",
    quote_accent: "#4caf50",
    quote_text: "#2e7d32",
    quote_background: "#f1f8e9",
    emphasis: "#c2185b",
};

const DARK: Palette = Palette {
    background: "#121212",
    text: "#e0e0e0",
    border: "#444",
    heading: "#90caf9",
    cell_background: "#222",
    head_background: "#333",
    head_text: "#fafafa",
    code_background: "#2e2e2e",
    code_text: "#ffeb3b",
    quote_accent: "#66bb6a",
    quote_text: "#a5d6a7",
    quote_background: "#1b1b1b",
    emphasis: "#f48fb1",
};

fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

/// Render explanation markdown into a full HTML document.
///
/// Tables and strikethrough are enabled on top of CommonMark; headings,
/// emphasis, lists, fenced code, blockquotes, inline code, images and
/// links are core syntax.
pub fn render_document(markdown: &str, theme: Theme) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut body = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut body, parser);

    format!(
        "<html><head><style>{}</style></head><body>{}</body></html>",
        stylesheet(theme),
        body
    )
}

fn stylesheet(theme: Theme) -> String {
    let p = palette(theme);

    format!(
        r#"
body {{
    font-family: 'Segoe UI', sans-serif;
    font-size: 16px;
    line-height: 1.7;
    background-color: {background};
    color: {text};
    padding: 16px;
}}

table {{
    border-collapse: separate;
    border-spacing: 0;
    width: 100%;
}}
th, td {{
    border: 1px solid {border};
    padding: 10px;
    text-align: left;
    background-color: {cell_background};
}}
th {{
    background-color: {head_background};
    font-weight: bold;
    color: {head_text};
}}

code {{
    background-color: {code_background};
    padding: 3px 6px;
    border-radius: 4px;
    color: {code_text};
}}

img {{
    max-width: 100%;
    height: auto;
    margin: 12px 0;
    border: 2px solid {border};
    border-radius: 6px;
}}

h1, h2, h3 {{
    color: {heading};
    border-bottom: 1px solid {border};
    padding-bottom: 6px;
    margin-top: 24px;
}}

ul {{
    padding-left: 24px;
    margin-bottom: 10px;
}}

li {{
    margin-bottom: 6px;
    line-height: 1.5;
}}

blockquote {{
    border-left: 4px solid {quote_accent};
    padding-left: 12px;
    margin-left: 0;
    color: {quote_text};
    background-color: {quote_background};
}}

strong {{
    color: {emphasis};
}}
"#,
        background = p.background,
        text = p.text,
        border = p.border,
        heading = p.heading,
        cell_background = p.cell_background,
        head_background = p.head_background,
        head_text = p.head_text,
        code_background = p.code_background,
        code_text = p.code_text,
        quote_accent = p.quote_accent,
        quote_text = p.quote_text,
        quote_background = p.quote_background,
        emphasis = p.emphasis,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_renders_with_light_emphasis_color() {
        let doc = render_document("**bold**", Theme::Light);
        assert!(doc.contains("<strong>bold</strong>"));
        assert!(doc.contains("#c2185b"));
    }

    #[test]
    fn test_dark_theme_uses_dark_palette() {
        let doc = render_document("# Heading", Theme::Dark);
        assert!(doc.contains("<h1>Heading</h1>"));
        assert!(doc.contains("#121212"));
        assert!(doc.contains("#90caf9"));
        assert!(!doc.contains("#fdfdfd"));
    }

    #[test]
    fn test_core_markdown_elements() {
        let markdown = "\
# Title

Some *emphasis* and `inline code`.

- one
- two

> quoted

```rust
fn main() {}
```

[link](https://example.com) ![alt](image.png)
";
        let doc = render_document(markdown, Theme::Light);
        assert!(doc.contains("<h1>Title</h1>"));
        assert!(doc.contains("<em>emphasis</em>"));
        assert!(doc.contains("<code>inline code</code>"));
        assert!(doc.contains("<ul>"));
        assert!(doc.contains("<blockquote>"));
        assert!(doc.contains(r#"<code class="language-rust">"#));
        assert!(doc.contains(r#"<a href="https://example.com">link</a>"#));
        assert!(doc.contains(r#"<img src="image.png" alt="alt""#));
    }

    #[test]
    fn test_tables_are_enabled() {
        let markdown = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        let doc = render_document(markdown, Theme::Light);
        assert!(doc.contains("<table>"));
        assert!(doc.contains("<th>a</th>"));
        assert!(doc.contains("<td>1</td>"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let markdown = "# Same\n\ninput";
        assert_eq!(
            render_document(markdown, Theme::Dark),
            render_document(markdown, Theme::Dark)
        );
    }

    #[test]
    fn test_empty_input_still_yields_document() {
        let doc = render_document("", Theme::Light);
        assert!(doc.starts_with("<html><head><style>"));
        assert!(doc.ends_with("</body></html>"));
    }

    #[test]
    fn test_theme_parsing_and_toggle() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("solarized".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Light);
    }
}
