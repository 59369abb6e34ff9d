//! Clickable building blocks. Each one renders (or produces) its text and
//! registers the matching click targets from the same data, so what is drawn
//! and what is tappable cannot drift apart.
//!
//! - [`TabBar`]: one row of tab labels.
//! - [`ButtonRow`]: one line mixing plain text and inline buttons.
//! - [`ClickableList`]: lines where some rows are actions.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── TabBar ─────────────────────────────────────────────────────

/// ```ignore
/// TabBar::new(" │ ")
///     .tab("Grid", active, TAB_BASE)
///     .tab("Stats", idle, TAB_BASE + 1)
///     .render(f, area, &mut cs);
/// ```
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, u16)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
            block: None,
        }
    }

    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.tabs.push((label.into(), style, action_id));
        self
    }

    /// Borders shift the click targets to the block's inner area.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let sep_width = Line::from(self.separator).width() as u16;
        let mut spans = Vec::new();
        let mut widths = Vec::with_capacity(self.tabs.len());

        for (i, (label, style, action_id)) in self.tabs.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.separator, Style::default().fg(Color::DarkGray)));
            }
            let padded = format!(" {label} ");
            widths.push((Line::from(padded.as_str()).width() as u16, action_id));
            spans.push(Span::styled(padded, style));
        }

        let inner = self.block.as_ref().map_or(area, |b| b.inner(area));
        let mut paragraph = Paragraph::new(Line::from(spans));
        if let Some(block) = self.block {
            paragraph = paragraph.block(block);
        }
        f.render_widget(paragraph, area);

        // Horizontal extent from the inner area, vertical from the whole bar
        // so taps on the border still land.
        cs.register_tab_targets(&widths, sep_width, inner.x, area.y, inner.width, area.height.max(1));
    }
}

// ── ButtonRow ──────────────────────────────────────────────────

/// A single line whose buttons get column-exact targets.
///
/// ```ignore
/// let mut row = ButtonRow::new();
/// row.push_text(Span::raw("Life expectancy "));
/// row.push_button(Span::raw("[-]"), EXPECTANCY_DOWN);
/// let line = row.register(x, y, &mut cs);
/// ```
pub struct ButtonRow<'a> {
    spans: Vec<(Span<'a>, Option<u16>)>,
}

impl<'a> ButtonRow<'a> {
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    pub fn push_text(&mut self, span: Span<'a>) {
        self.spans.push((span, None));
    }

    pub fn push_button(&mut self, span: Span<'a>, action_id: u16) {
        self.spans.push((span, Some(action_id)));
    }

    /// Continue this row with the spans of `other`.
    pub fn append(&mut self, other: ButtonRow<'a>) {
        self.spans.extend(other.spans);
    }

    pub fn width(&self) -> u16 {
        self.spans.iter().map(|(s, _)| s.width() as u16).sum()
    }

    /// Register a target for every button as laid out from column `x` on
    /// `row`, then hand back the line to render there.
    pub fn register(self, x: u16, row: u16, cs: &mut ClickState) -> Line<'a> {
        let mut col = x;
        let mut spans = Vec::with_capacity(self.spans.len());
        for (span, action) in self.spans {
            let w = span.width() as u16;
            if let Some(action_id) = action {
                cs.add_click_target(Rect::new(col, row, w, 1), action_id);
            }
            col += w;
            spans.push(span);
        }
        Line::from(spans)
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// Lines annotated with actions as they are pushed. Targets follow their line
/// wherever it ends up, so inserting a header above never breaks a button.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line index, action id)`
    actions: Vec<(usize, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len(), action_id));
        self.lines.push(line);
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register one full-width target per visual row of each clickable line.
    ///
    /// `top_offset`/`bottom_offset` are the rows taken by borders, `scroll`
    /// is in visual rows, and `wrap_width` is the content width the widget
    /// wraps at (`0` when it does not wrap).
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        wrap_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        let heights: Vec<u16> = self
            .lines
            .iter()
            .map(|line| match wrap_width {
                0 => 1,
                w => (line.width() as u16).div_ceil(w).max(1),
            })
            .collect();

        let mut starts = Vec::with_capacity(heights.len());
        let mut acc = 0u16;
        for h in &heights {
            starts.push(acc);
            acc += h;
        }

        for &(idx, action_id) in &self.actions {
            for visual in starts[idx]..starts[idx] + heights[idx] {
                if visual < scroll {
                    continue;
                }
                let row = content_y + (visual - scroll);
                if row >= content_end {
                    break;
                }
                cs.add_row_target(area, row, action_id);
            }
        }
    }
}

/// Rows `lines` occupy once wrapped at `width`.
pub fn wrapped_height(lines: Vec<Line<'_>>, width: u16) -> u16 {
    if width == 0 {
        return lines.len() as u16;
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .line_count(width) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_targets_follow_their_lines() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("EXPLORATION 2/6"));
        cl.push_clickable(Line::from("[x] Swim in an ocean"), 10);
        cl.push(Line::from(""));
        cl.push_clickable(Line::from("[ ] Solo trip"), 11);

        let area = Rect::new(0, 5, 40, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(3, 6), None);
        assert_eq!(cs.hit_test(3, 7), Some(10));
        assert_eq!(cs.hit_test(3, 8), None);
        assert_eq!(cs.hit_test(3, 9), Some(11));
    }

    #[test]
    fn list_scroll_and_clip() {
        let mut cl = ClickableList::new();
        for i in 0..10u16 {
            cl.push_clickable(Line::from(format!("item {i}")), 100 + i);
        }
        // 3 content rows, two lines scrolled away
        let area = Rect::new(0, 0, 20, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 2, 0);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(0, 1), Some(102));
        assert_eq!(cs.hit_test(0, 3), Some(104));
        assert_eq!(cs.hit_test(0, 4), None);
    }

    #[test]
    fn wrapped_line_is_clickable_on_every_row() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("12345678901234567890")); // 2 rows at width 10
        cl.push_clickable(Line::from("123456789012345"), 42); // 2 rows

        let area = Rect::new(0, 0, 10, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0, 10);

        assert_eq!(cs.hit_test(0, 1), None);
        assert_eq!(cs.hit_test(0, 2), Some(42));
        assert_eq!(cs.hit_test(0, 3), Some(42));
        assert_eq!(cs.hit_test(0, 4), None);
    }

    #[test]
    fn empty_line_still_takes_a_row() {
        let mut cl = ClickableList::new();
        cl.push(Line::from(""));
        cl.push_clickable(Line::from("go"), 1);
        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 10, 5), &mut cs, 0, 0, 0, 10);
        assert_eq!(cs.hit_test(0, 1), Some(1));
    }

    #[test]
    fn button_row_targets_are_column_exact() {
        let mut row = ButtonRow::new();
        row.push_text(Span::raw("EXP "));
        row.push_button(Span::raw("[-]"), 1);
        row.push_text(Span::raw(" 80 "));
        row.push_button(Span::raw("[+]"), 2);
        assert_eq!(row.width(), 14);

        let mut cs = ClickState::new();
        let line = row.register(10, 3, &mut cs);
        assert_eq!(line.width(), 14);

        assert_eq!(cs.hit_test(13, 3), None);
        assert_eq!(cs.hit_test(14, 3), Some(1));
        assert_eq!(cs.hit_test(16, 3), Some(1));
        assert_eq!(cs.hit_test(17, 3), None);
        assert_eq!(cs.hit_test(21, 3), Some(2));
        assert_eq!(cs.hit_test(21, 4), None);
    }

    #[test]
    fn appended_rows_keep_their_buttons() {
        let mut left = ButtonRow::new();
        left.push_button(Span::raw("[a]"), 1);
        let mut right = ButtonRow::new();
        right.push_text(Span::raw("  "));
        right.push_button(Span::raw("[b]"), 2);
        left.append(right);

        let mut cs = ClickState::new();
        left.register(0, 0, &mut cs);
        assert_eq!(cs.hit_test(2, 0), Some(1));
        assert_eq!(cs.hit_test(3, 0), None);
        assert_eq!(cs.hit_test(5, 0), Some(2));
    }

    #[test]
    fn wrapped_height_counts_rows() {
        let lines = vec![Line::from("one two three four"), Line::from("five")];
        assert_eq!(wrapped_height(lines.clone(), 100), 2);
        assert_eq!(wrapped_height(lines.clone(), 12), 3);
        assert_eq!(wrapped_height(lines, 0), 2);
    }
}
