use pulldown_cmark::{html, Options, Parser};

/// Renders summary markdown to sanitised HTML.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(input, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    ammonia::clean(&out)
}

/// Escapes arbitrary text for use inside HTML markup.
#[must_use]
pub fn escape_text(input: &str) -> String {
    ammonia::clean_text(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_bullets_become_html() {
        let html = markdown_to_html("# Cells\n\n- nucleus\n- **membrane**\n");

        assert!(html.contains("<h1>Cells</h1>"));
        assert!(html.contains("<li>nucleus</li>"));
        assert!(html.contains("<strong>membrane</strong>"));
    }

    #[test]
    fn tables_are_rendered() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");

        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn scripts_are_stripped() {
        let html = markdown_to_html("Hello <script>alert('x')</script> world");

        assert!(!html.contains("<script"));
        assert!(html.contains("Hello"));
    }

    #[test]
    fn escape_text_neutralises_markup() {
        let escaped = escape_text("<b>bold</b> & \"quoted\"");

        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('"'));
        assert!(escaped.contains("&amp;"));
    }
}
