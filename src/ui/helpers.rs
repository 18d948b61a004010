use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/// Flatten a stored HTML payload to plain text lines for the terminal.
///
/// Block-closing tags and `<br>` become line breaks, all other tags are
/// dropped, and the handful of entities the editor produces are decoded.
/// Runs of blank lines collapse to one.
pub(crate) fn flatten_html(html: &str) -> Vec<String> {
    let mut text = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '<' {
            text.push(ch);
            continue;
        }
        let mut tag = String::new();
        for inner in chars.by_ref() {
            if inner == '>' {
                break;
            }
            tag.push(inner);
        }
        let name: String = tag
            .trim_start_matches('/')
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        let closing = tag.starts_with('/');
        match name.as_str() {
            "br" => text.push('\n'),
            "p" | "div" | "li" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" if closing => {
                text.push('\n')
            }
            _ => {}
        }
    }

    let decoded = decode_entities(&text);

    let mut lines = Vec::new();
    let mut previous_blank = true;
    for raw in decoded.lines() {
        let line = raw.trim();
        if line.is_empty() {
            if !previous_blank {
                lines.push(String::new());
            }
            previous_blank = true;
        } else {
            lines.push(line.to_string());
            previous_blank = false;
        }
    }
    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Replace the common named entities. Unknown entities pass through verbatim.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};

    #[test]
    fn surface_error_returns_root_cause() {
        let err = anyhow!("Song not found")
            .context("failed to load song")
            .context("refresh failed");
        assert_eq!(surface_error(&err), "Song not found");
    }

    #[test]
    fn flatten_html_splits_on_block_tags() {
        let lines = flatten_html("<p>My, my</p><p>At Waterloo</p>");
        assert_eq!(lines, vec!["My, my", "At Waterloo"]);
    }

    #[test]
    fn flatten_html_honors_line_breaks_and_entities() {
        let lines = flatten_html("<div>Tom &amp; Jerry<br>&quot;duet&quot;</div>");
        assert_eq!(lines, vec!["Tom & Jerry", "\"duet\""]);
    }

    #[test]
    fn flatten_html_collapses_blank_runs() {
        let lines = flatten_html("<p>one</p><p></p><p></p><p>two</p>");
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn flatten_html_passes_plain_text_through() {
        assert_eq!(flatten_html("just words"), vec!["just words"]);
        assert!(flatten_html("").is_empty());
    }
}
