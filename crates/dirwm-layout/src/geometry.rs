//! Pane geometry: size and title derived from a window's text.
//!
//! Geometry is recomputed from scratch on every redraw; nothing here keeps
//! state, so equal input always gives equal output.

use unicode_width::UnicodeWidthStr;

/// Columns added to the widest line.
const WIDTH_PADDING: usize = 1;
/// Rows added to the content line count (title, blank, blank, size line).
const HEIGHT_PADDING: usize = 4;

/// Size and title of one pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneGeometry {
    pub title: String,
    pub width: usize,
    pub height: usize,
}

impl PaneGeometry {
    /// Measure a window.
    ///
    /// `title = id + " " + tag`, `width = max(title, widest line) + 1`,
    /// `height = lines + 4` where lines are split on `\n` (an empty body
    /// still counts as one line).
    pub fn measure(id: &str, tag: &str, content: &str) -> Self {
        let title = format!("{id} {tag}");
        let widest_line = content.split('\n').map(UnicodeWidthStr::width).max().unwrap_or(0);
        let line_count = content.split('\n').count();

        Self {
            width: title.width().max(widest_line) + WIDTH_PADDING,
            height: line_count + HEIGHT_PADDING,
            title,
        }
    }

    /// The text shown inside the pane:
    /// title, blank line, body, then `w: <width>, h: <height>`.
    pub fn body_text(&self, content: &str) -> String {
        format!(
            "{}\n\n{}\nw: {}, h: {}",
            self.title, content, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_example_window() {
        let g = PaneGeometry::measure("a", "T", "x\ny");
        assert_eq!(g.title, "a T");
        assert_eq!(g.width, 4);
        assert_eq!(g.height, 6);
    }

    #[test]
    fn content_wider_than_title_drives_width() {
        let g = PaneGeometry::measure("a", "T", "a much longer line\nshort");
        assert_eq!(g.width, "a much longer line".len() + 1);
    }

    #[test]
    fn empty_content_counts_as_one_line() {
        let g = PaneGeometry::measure("w", "New Del Look", "");
        assert_eq!(g.height, 5);
        assert_eq!(g.width, "w New Del Look".len() + 1);
    }

    #[test]
    fn trailing_newline_adds_a_line() {
        let g = PaneGeometry::measure("a", "T", "x\n");
        assert_eq!(g.height, 6);
    }

    #[test]
    fn wide_characters_use_display_width() {
        let g = PaneGeometry::measure("a", "", "日本");
        assert_eq!(g.width, 5);
    }

    #[test]
    fn measure_is_idempotent() {
        let first = PaneGeometry::measure("notes", "Del", "one\ntwo\nthree");
        let second = PaneGeometry::measure("notes", "Del", "one\ntwo\nthree");
        assert_eq!(first, second);
    }

    #[test]
    fn body_text_layout() {
        let g = PaneGeometry::measure("a", "T", "x\ny\n");
        assert_eq!(g.body_text("x\ny\n"), "a T\n\nx\ny\n\nw: 4, h: 7");
    }
}
