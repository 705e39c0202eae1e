use regex::Regex;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Render explanation markdown to terminal text
pub fn render_text(markdown: &str, use_color: bool) -> String {
    render_lines(markdown, use_color).join("\n")
}

/// Render explanation markdown to terminal lines
///
/// Line-based: block structure (headings, quotes, lists, tables, fenced
/// code) is recognized per line, inline markup is rewritten in place.
pub fn render_lines(markdown: &str, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let mut in_code_block = false;

    for raw in markdown.lines() {
        let trimmed = raw.trim_start();

        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            lines.push(colorize(raw, Color::CYAN, use_color));
            continue;
        }

        if in_code_block {
            // Code is kept literal, inline markup and all
            lines.push(colorize(raw, Color::CYAN, use_color));
            continue;
        }

        if trimmed.starts_with('#') {
            let styled = if use_color {
                format!("{}{}{}", Color::BOLD, render_inline(trimmed, false), Color::RESET)
            } else {
                render_inline(trimmed, false)
            };
            lines.push(styled);
        } else if trimmed.starts_with('>') {
            let styled = if use_color {
                format!(
                    "{}{}{}{}",
                    Color::GREEN,
                    Color::ITALIC,
                    render_inline(trimmed, false),
                    Color::RESET
                )
            } else {
                render_inline(trimmed, false)
            };
            lines.push(styled);
        } else if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
            let indent = " ".repeat(raw.len() - trimmed.len());
            lines.push(format!(
                "{}\u{2022} {}",
                indent,
                render_inline(&trimmed[2..], use_color)
            ));
        } else if trimmed.starts_with('|') {
            lines.push(render_inline(trimmed, use_color));
        } else if trimmed.is_empty() {
            lines.push(String::new());
        } else {
            for wrapped in wrap_line(&render_inline(trimmed, use_color), 80) {
                lines.push(wrapped);
            }
        }
    }

    // Remove trailing blank lines
    while lines.last().map_or(false, |l| l.is_empty()) {
        lines.pop();
    }

    lines
}

/// Rewrite inline markdown spans for terminal display
fn render_inline(text: &str, use_color: bool) -> String {
    let mut result = text.to_string();

    // Images first, so the link rule does not eat them: ![alt](url)
    let image_re = Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").unwrap();
    result = image_re.replace_all(&result, "[image: $1]").to_string();

    // Links: [text](url) -> text (url)
    let link_re = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
    result = link_re.replace_all(&result, "$1 ($2)").to_string();

    // Bold before italic so ** is not consumed as two *
    let bold_re = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    result = if use_color {
        bold_re
            .replace_all(&result, format!("{}$1{}", Color::BOLD, Color::RESET))
            .to_string()
    } else {
        bold_re.replace_all(&result, "$1").to_string()
    };

    let italic_re = Regex::new(r"\*([^*]+)\*").unwrap();
    result = if use_color {
        italic_re
            .replace_all(&result, format!("{}$1{}", Color::ITALIC, Color::RESET))
            .to_string()
    } else {
        italic_re.replace_all(&result, "$1").to_string()
    };

    let code_re = Regex::new(r"`([^`]+)`").unwrap();
    result = if use_color {
        code_re
            .replace_all(&result, format!("{}$1{}", Color::YELLOW, Color::RESET))
            .to_string()
    } else {
        code_re.replace_all(&result, "$1").to_string()
    };

    result
}

/// Wrap a line at the given width on whitespace
fn wrap_line(text: &str, width: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            wrapped.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        wrapped.push(current);
    }

    if wrapped.is_empty() {
        wrapped.push(String::new());
    }

    wrapped
}

fn colorize(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_render_strips_inline_markup() {
        let lines = render_lines("Some **bold** and `code` here.", false);
        assert_eq!(lines, vec!["Some bold and code here."]);
    }

    #[test]
    fn test_bullets_and_headings() {
        let lines = render_lines("# Title\n\n- first\n- second", false);
        assert_eq!(lines[0], "# Title");
        assert_eq!(lines[2], "\u{2022} first");
        assert_eq!(lines[3], "\u{2022} second");
    }

    #[test]
    fn test_code_block_is_kept_literal() {
        let lines = render_lines("```\nlet x = **not bold**;\n```", false);
        assert_eq!(lines[1], "let x = **not bold**;");
    }

    #[test]
    fn test_links_and_images() {
        let lines = render_lines("See [docs](https://example.com) ![icon](i.png)", false);
        assert_eq!(lines, vec!["See docs (https://example.com) [image: icon]"]);
    }

    #[test]
    fn test_long_paragraphs_wrap() {
        let long = "word ".repeat(40);
        let lines = render_lines(long.trim(), false);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 80));
    }
}
