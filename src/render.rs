use pulldown_cmark::{html, Options, Parser};

/// Convert accumulated markdown text to HTML for display.
///
/// Called on every content event with the full buffer so far, so the output
/// always replaces the previous render rather than appending to it.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_heading() {
        let html = render_markdown("# Brand Positioning");
        assert!(html.contains("<h1>Brand Positioning</h1>"));
    }

    #[test]
    fn test_render_list() {
        let html = render_markdown("- ownable\n- scalable\n- timeless\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>ownable</li>"));
    }

    #[test]
    fn test_render_plain_text_wrapped_in_paragraph() {
        let html = render_markdown("Full Insight");
        assert_eq!(html.trim(), "<p>Full Insight</p>");
    }

    #[test]
    fn test_render_empty_string() {
        assert_eq!(render_markdown(""), "");
    }

    #[test]
    fn test_render_is_idempotent_on_same_input() {
        let a = render_markdown("## Voice & Tone\n\nwarm, direct");
        let b = render_markdown("## Voice & Tone\n\nwarm, direct");
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_emphasis() {
        let html = render_markdown("make it **stick**");
        assert!(html.contains("<strong>stick</strong>"));
    }
}
