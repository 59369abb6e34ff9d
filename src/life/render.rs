//! Life in Weeks rendering: header with the live ticker, a tab bar, one
//! content panel per tab and a status footer.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{wrapped_height, ButtonRow, ClickableList, TabBar};

use super::achievements::MODULES;
use super::actions::*;
use super::allocation::Share;
use super::calendar::format_age_ticker;
use super::export::EXPORT_FILE_NAME;
use super::grid::{self, LifeStage, WeekCell, WeekStatus, MILESTONE_AGES, WEEKS_PER_YEAR};
use super::logic::grid_row_count;
use super::quotes::quote_text;
use super::save::{KEY_ACHIEVEMENTS, KEY_BIRTH_DATE, KEY_LANGUAGE, KEY_LIFE_EXPECTANCY};
use super::state::{Field, LifeState, Tab, BIRTH_INPUT_LEN};
use super::stats::{format_count, StatsView};

const TEXT: Color = Color::Rgb(228, 228, 231);
const MUTED: Color = Color::Rgb(113, 113, 122);
const FRAME: Color = Color::Rgb(63, 63, 70);
const ACCENT: Color = Color::Rgb(239, 68, 68);
const FUTURE_CELL: Color = Color::Rgb(39, 39, 42);

/// Label column + 52 weeks + milestone marker.
const GRID_FULL_WIDTH: u16 = 4 + WEEKS_PER_YEAR as u16 + 6;

pub fn render(state: &LifeState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let narrow = is_narrow_layout(area.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height(state, area.width, narrow)),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(state, f, chunks[0], narrow, click_state);
    render_tab_bar(state, f, chunks[1], click_state);
    match state.tab {
        Tab::Grid => render_grid(state, f, chunks[2], click_state),
        Tab::Stats => render_stats(state, f, chunks[2], click_state),
        Tab::Freedom => render_freedom(state, f, chunks[2], click_state),
        Tab::Social => render_social(state, f, chunks[2], click_state),
        Tab::Achievements => render_achievements(state, f, chunks[2], click_state),
        Tab::System => render_system(state, f, chunks[2], click_state),
    }
    render_footer(state, f, chunks[3]);
}

fn panel(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FRAME))
        .title(Span::styled(title, Style::default().fg(TEXT).add_modifier(Modifier::BOLD)))
}

fn key_span(key: impl Display) -> Span<'static> {
    Span::styled(
        format!("[{key}]"),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )
}

fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(MUTED))
}

fn bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    "█".repeat(filled) + &"░".repeat(width.saturating_sub(filled))
}

/// Bar width that leaves room for a label and a figure on each side.
fn bar_width(inner_width: u16) -> usize {
    (inner_width.saturating_sub(34) as usize).clamp(8, 40)
}

/// Shown wherever a panel has nothing to derive from yet.
fn push_origin_prompt(cl: &mut ClickableList) {
    cl.push_clickable(
        Line::from(vec![key_span('o'), muted(" set your origin date to begin")]),
        EDIT_BIRTH_DATE,
    );
}

// ── Header ─────────────────────────────────────────────────────

fn quote_line(state: &LifeState) -> Line<'static> {
    Line::from(Span::styled(
        format!("\"{}\"", quote_text(state.quote_index, state.language)),
        Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
    ))
}

fn header_height(state: &LifeState, width: u16, narrow: bool) -> u16 {
    let quote_rows = wrapped_height(vec![quote_line(state)], width.saturating_sub(2));
    let control_rows = if narrow { 3 } else { 1 };
    2 + quote_rows + 1 + control_rows
}

fn ticker_line(state: &LifeState) -> Line<'static> {
    match state.age_years {
        Some(age) => Line::from(vec![
            muted("AGE "),
            Span::styled(
                format_age_ticker(age),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            muted(" YEARS"),
        ]),
        None => Line::from(vec![muted("AGE "), muted("--.---------  awaiting origin date")]),
    }
}

fn date_field(state: &LifeState) -> Span<'static> {
    if state.editing == Some(Field::BirthDate) {
        let typed = format!("{:_<width$}", state.birth_input, width = BIRTH_INPUT_LEN);
        Span::styled(
            format!("‹{typed}›"),
            Style::default().fg(Color::Black).bg(TEXT),
        )
    } else if state.birth_input.is_empty() {
        Span::styled("‹YYYY-MM-DD›", Style::default().fg(MUTED))
    } else {
        Span::styled(
            format!("‹{}›", state.birth_input),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )
    }
}

fn header_controls(state: &LifeState, narrow: bool) -> Vec<ButtonRow<'static>> {
    let mut origin = ButtonRow::new();
    origin.push_text(muted("ORIGIN "));
    origin.push_button(date_field(state), EDIT_BIRTH_DATE);

    let mut cycle = ButtonRow::new();
    cycle.push_text(muted("CYCLE "));
    cycle.push_button(key_span('-'), EXPECTANCY_DOWN);
    cycle.push_text(Span::styled(
        format!(" {} YRS ", state.profile.life_expectancy()),
        Style::default().fg(TEXT),
    ));
    cycle.push_button(key_span('+'), EXPECTANCY_UP);

    let mut lang = ButtonRow::new();
    lang.push_text(muted("LANG "));
    lang.push_button(key_span(state.language.code()), TOGGLE_LANGUAGE);

    if narrow {
        return vec![origin, cycle, lang];
    }
    let mut row = origin;
    for part in [cycle, lang] {
        let mut gap = ButtonRow::new();
        gap.push_text(Span::raw("   "));
        row.append(gap);
        row.append(part);
    }
    vec![row]
}

fn render_header(
    state: &LifeState,
    f: &mut Frame,
    area: Rect,
    narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = panel(" LIFE_OS // WEEKS ".to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let quote_rows = wrapped_height(vec![quote_line(state)], inner.width).min(inner.height);
    f.render_widget(
        Paragraph::new(quote_line(state)).wrap(Wrap { trim: true }),
        Rect::new(inner.x, inner.y, inner.width, quote_rows),
    );

    let mut y = inner.y + quote_rows;
    let bottom = inner.y + inner.height;
    if y < bottom {
        f.render_widget(Paragraph::new(ticker_line(state)), Rect::new(inner.x, y, inner.width, 1));
        y += 1;
    }

    let mut cs = click_state.borrow_mut();
    for row in header_controls(state, narrow) {
        if y >= bottom {
            break;
        }
        let x = centered_x(inner, row.width());
        let line = row.register(x, y, &mut cs);
        f.render_widget(Paragraph::new(line), Rect::new(x, y, inner.right() - x, 1));
        y += 1;
    }
}

/// Left column that centers `width` cells in `area`, flush left when it
/// does not fit.
fn centered_x(area: Rect, width: u16) -> u16 {
    area.x + area.width.saturating_sub(width) / 2
}

fn render_tab_bar(state: &LifeState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    // Six full labels need about 84 columns.
    let compact = area.width < 84;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FRAME));

    let mut tabs = TabBar::new(if compact { "│" } else { " │ " }).block(block);
    for tab in Tab::all() {
        let label = if compact {
            format!("{}{}", tab.key(), &tab.label()[..3])
        } else {
            format!("{} {}", tab.key(), tab.label())
        };
        let style = if *tab == state.tab {
            Style::default().fg(Color::Black).bg(TEXT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        tabs = tabs.tab(label, style, TAB_BASE + tab.index() as u16);
    }
    tabs.render(f, area, &mut click_state.borrow_mut());
}

// ── Grid ───────────────────────────────────────────────────────

fn cell_color(cell: &WeekCell) -> Color {
    match cell.status {
        WeekStatus::Past => cell.stage.color(),
        WeekStatus::Current => ACCENT,
        WeekStatus::Future => FUTURE_CELL,
    }
}

/// One terminal row holds two years: the upper half-block is the even year,
/// the lower half the odd one.
fn grid_row(cells: &[WeekCell], top_year: u32, years: u32, labelled: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(WEEKS_PER_YEAR as usize + 2);
    if labelled {
        spans.push(muted(format!("{top_year:>3} ")));
    }
    for week in 0..WEEKS_PER_YEAR {
        let top = &cells[(top_year * WEEKS_PER_YEAR + week) as usize];
        let bottom = if top_year + 1 < years {
            cell_color(&cells[((top_year + 1) * WEEKS_PER_YEAR + week) as usize])
        } else {
            Color::Reset
        };
        spans.push(Span::styled("▀", Style::default().fg(cell_color(top)).bg(bottom)));
    }
    if labelled {
        let milestone = MILESTONE_AGES
            .iter()
            .find(|age| **age == top_year || (**age == top_year + 1 && top_year + 1 < years));
        if let Some(age) = milestone {
            spans.push(muted(format!(" ◂ {age}")));
        }
    }
    Line::from(spans)
}

fn render_grid(state: &LifeState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let years = state.profile.life_expectancy();
    let lived = state.lived_weeks().unwrap_or(-1);
    let cells = grid::derive_grid(lived, years);
    let counts = grid::status_counts(lived, years);

    let block = panel(format!(
        " {} WEEKS · {} LIVED ",
        format_count(counts.total() as i64),
        format_count(counts.past as i64)
    ));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 2 {
        return;
    }

    let labelled = inner.width >= GRID_FULL_WIDTH;
    let mut legend = ButtonRow::new();
    if labelled {
        for stage in LifeStage::all() {
            legend.push_text(Span::styled("■", Style::default().fg(stage.color())));
            legend.push_text(muted(format!(" {}  ", stage.name())));
        }
    } else {
        legend.push_text(Span::styled("■", Style::default().fg(LifeStage::Career.color())));
        legend.push_text(muted(" lived  "));
    }
    legend.push_text(Span::styled("■", Style::default().fg(ACCENT)));
    legend.push_text(muted(" now  "));
    legend.push_text(Span::styled("■", Style::default().fg(FUTURE_CELL)));
    legend.push_text(muted(" ahead  "));
    legend.push_button(key_span('k'), GRID_SCROLL_UP);
    legend.push_text(Span::raw(" "));
    legend.push_button(key_span('j'), GRID_SCROLL_DOWN);
    let legend = legend.register(inner.x, inner.y, &mut click_state.borrow_mut());

    let visible = inner.height - 1;
    let total_rows = grid_row_count(years);
    let first = state.grid_scroll.min(total_rows.saturating_sub(visible));
    let mut lines = vec![legend];
    for row in first..total_rows.min(first + visible) {
        lines.push(grid_row(&cells, row as u32 * 2, years, labelled));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

// ── Stats ──────────────────────────────────────────────────────

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        muted(format!("{label:<18}")),
        Span::styled(value, Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
    ])
}

fn render_stats(state: &LifeState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let block = panel(format!(" STATS · {} ", state.view.label().to_uppercase()));
    let width = bar_width(block.inner(area).width);

    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(vec![
            key_span('v'),
            muted(format!(" show {}", state.view.toggled().label().to_lowercase())),
        ]),
        TOGGLE_STATS_VIEW,
    );
    cl.push(Line::from(""));

    match state.temporal_stats() {
        None => push_origin_prompt(&mut cl),
        Some(stats) => match state.view {
            StatsView::Temporal => {
                cl.push(stat_line("WEEKS LIVED", format_count(stats.lived_weeks)));
                cl.push(stat_line(
                    "WEEKS REMAINING",
                    format_count(stats.displayed_remaining_weeks()),
                ));
                cl.push(stat_line("TOTAL CAPACITY", format_count(stats.total_weeks)));
                cl.push(Line::from(""));
                cl.push(Line::from(vec![
                    muted(format!("{:<18}", "LIFE CONSUMED")),
                    Span::styled(bar(stats.percentage_consumed, width), Style::default().fg(TEXT)),
                    Span::styled(
                        format!(" {:.2}%", stats.percentage_consumed),
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    ),
                ]));
                if stats.remaining_weeks < 0 {
                    cl.push(Line::from(""));
                    cl.push(Line::from(Span::styled(
                        "EXPECTANCY EXCEEDED · every week from here is a bonus",
                        Style::default().fg(ACCENT),
                    )));
                }
            }
            StatsView::Experiential => {
                let e = stats.experiential();
                cl.push(stat_line("SUMMERS LEFT", format_count(e.summers_left as i64)));
                cl.push(stat_line("MONDAYS LEFT", format_count(e.mondays_left as i64)));
                cl.push(stat_line("MEALS LEFT", format_count(e.meals_left as i64)));
                cl.push(stat_line("NIGHTS OF SLEEP", format_count(e.sleeps_left as i64)));
            }
        },
    }

    cl.register_targets(area, &mut click_state.borrow_mut(), 1, 1, 0, 0);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

// ── Freedom ────────────────────────────────────────────────────

fn render_freedom(state: &LifeState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let block = panel(" RESOURCE ALLOCATION ".to_string());
    let width = bar_width(block.inner(area).width);

    let mut cl = ClickableList::new();
    match state.allocation() {
        None if !state.has_birth_date() => push_origin_prompt(&mut cl),
        None => cl.push(Line::from(Span::styled(
            "NO REMAINING TIME TO ALLOCATE.",
            Style::default().fg(ACCENT),
        ))),
        Some(alloc) => {
            cl.push(Line::from(vec![
                muted("REMAINING "),
                Span::styled(
                    format!("{:.1} YEARS", alloc.remaining_years),
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                ),
            ]));
            cl.push(Line::from(""));
            for share in Share::all() {
                let free = *share == Share::Free;
                let color = if free { ACCENT } else { MUTED };
                cl.push(Line::from(vec![
                    Span::styled(format!("{:<14}", share.label()), Style::default().fg(color)),
                    Span::styled(bar(alloc.percentage(*share), width), Style::default().fg(color)),
                    Span::styled(
                        format!(" {:>5.1} YRS {:>5.1}%", alloc.years(*share), alloc.percentage(*share)),
                        Style::default().fg(TEXT),
                    ),
                ]));
            }
            cl.push(Line::from(""));
            cl.push(Line::from(vec![
                muted("Only "),
                Span::styled(
                    format!("{:.1}%", alloc.free_percentage),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                muted(format!(
                    " of what is left is yours; {:.1}% is already spoken for.",
                    alloc.overhead_percentage()
                )),
            ]));
        }
    }

    cl.register_targets(area, &mut click_state.borrow_mut(), 1, 1, 0, 0);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block).wrap(Wrap { trim: false }), area);
}

// ── Social ─────────────────────────────────────────────────────

fn render_social(state: &LifeState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let block = panel(" SOCIAL ESTIMATOR ".to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let editing_name = state.editing == Some(Field::SocialName);
    let name_span = if editing_name {
        Span::styled(format!("‹{}_›", state.social.name), Style::default().fg(Color::Black).bg(TEXT))
    } else if state.social.name.is_empty() {
        Span::styled("‹someone›", Style::default().fg(MUTED))
    } else {
        Span::styled(format!("‹{}›", state.social.name), Style::default().fg(TEXT))
    };

    let mut name = ButtonRow::new();
    name.push_text(muted("NAME          "));
    name.push_button(name_span, EDIT_SOCIAL_NAME);
    name.push_text(muted("  n"));

    let mut age = ButtonRow::new();
    age.push_text(muted("THEIR AGE     "));
    age.push_button(key_span('-'), SOCIAL_AGE_DOWN);
    age.push_text(Span::styled(format!(" {:>3} ", state.social.their_age), Style::default().fg(TEXT)));
    age.push_button(key_span('+'), SOCIAL_AGE_UP);
    age.push_text(muted("  q/w"));

    let mut visits = ButtonRow::new();
    visits.push_text(muted("VISITS / YEAR "));
    visits.push_button(key_span('-'), SOCIAL_VISITS_DOWN);
    visits.push_text(Span::styled(
        format!(" {:>3} ", state.social.visits_per_year),
        Style::default().fg(TEXT),
    ));
    visits.push_button(key_span('+'), SOCIAL_VISITS_UP);
    visits.push_text(muted("  z/x"));

    let mut lines = Vec::new();
    {
        let mut cs = click_state.borrow_mut();
        for row in [name, age, visits] {
            let y = inner.y + lines.len() as u16;
            lines.push(row.register(inner.x, y, &mut cs));
        }
    }

    let estimate = state.social_estimate();
    let who = if state.social.name.is_empty() { "THEM" } else { state.social.name.as_str() };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        muted("YOU WILL SEE "),
        Span::styled(who.to_uppercase(), Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
        muted(" ABOUT "),
        Span::styled(
            format_count(estimate.interactions_left as i64),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        muted(" MORE TIMES"),
    ]));
    lines.push(Line::from(muted(format!(
        "over the {:.0} years until they turn 80",
        estimate.years_left
    ))));
    lines.push(Line::from(""));

    let mut dots = "●".repeat(estimate.rendered_dots() as usize);
    if estimate.is_capped() {
        dots.push_str(" ...SYSTEM_LIMIT_REACHED");
    }
    lines.push(Line::from(Span::styled(dots, Style::default().fg(ACCENT))));

    // Button rows never wrap at these widths; only the dots do.
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// ── Achievements ───────────────────────────────────────────────

fn render_achievements(
    state: &LifeState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = panel(" ACHIEVEMENTS · m next module ".to_string());
    let width = bar_width(block.inner(area).width);
    let global = state.ledger.global_progress();

    let mut cl = ClickableList::new();
    cl.push(Line::from(vec![
        muted("GLOBAL SYNC "),
        Span::styled(bar(global.percentage(), width), Style::default().fg(ACCENT)),
        Span::styled(
            format!(" {}/{} {:.0}%", global.unlocked, global.total, global.percentage()),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ),
    ]));
    cl.push(Line::from(""));

    for (mi, module) in MODULES.iter().enumerate() {
        let progress = state.ledger.module_progress(module.id).unwrap_or_default();
        let expanded = state.expanded_module == Some(mi);
        let title_style = if progress.is_complete() {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
        };
        cl.push_clickable(
            Line::from(vec![
                muted(if expanded { "▾ " } else { "▸ " }),
                Span::styled(module.title, title_style),
                muted(format!(
                    "  {}/{}  {:.0}%",
                    progress.unlocked,
                    progress.total,
                    progress.percentage()
                )),
            ]),
            EXPAND_MODULE_BASE + mi as u16,
        );
        if !expanded {
            continue;
        }
        cl.push(Line::from(muted(format!("  {}", module.description))));
        for (ii, item) in module.items.iter().enumerate() {
            let done = state.ledger.is_unlocked(item.id);
            let key = (b'a' + ii as u8) as char;
            let item_style = if done {
                Style::default().fg(TEXT)
            } else {
                Style::default().fg(MUTED)
            };
            cl.push_clickable(
                Line::from(vec![
                    Span::raw("  "),
                    key_span(key),
                    Span::styled(if done { " ■ " } else { " □ " }, item_style),
                    Span::styled(item.label, item_style),
                ]),
                TOGGLE_ITEM_BASE + mi as u16 * ITEM_STRIDE + ii as u16,
            );
        }
    }

    cl.register_targets(area, &mut click_state.borrow_mut(), 1, 1, 0, 0);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

// ── System ─────────────────────────────────────────────────────

const KEY_HELP: &[(&str, &str)] = &[
    ("1-6", "switch panel"),
    ("o", "edit origin date (Enter/Esc to finish)"),
    ("[ ]", "life expectancy -/+"),
    ("v", "temporal / experiential stats"),
    ("l", "quote language"),
    ("j k", "scroll the grid"),
];

fn render_system(state: &LifeState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let block = panel(" SYSTEM ".to_string());

    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(vec![
            key_span('e'),
            Span::styled(" EXPORT SYSTEM LOG", Style::default().fg(TEXT)),
            muted(format!(" → {EXPORT_FILE_NAME}")),
        ]),
        EXPORT_LOG,
    );
    if state.confirm_reset {
        cl.push(Line::from(""));
        cl.push(Line::from(Span::styled(
            "PURGE ALL DATA? This cannot be undone.",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        cl.push_clickable(
            Line::from(vec![key_span('y'), Span::styled(" CONFIRM PURGE", Style::default().fg(ACCENT))]),
            CONFIRM_RESET,
        );
        cl.push_clickable(
            Line::from(vec![key_span('n'), Span::styled(" CANCEL", Style::default().fg(TEXT))]),
            CANCEL_RESET,
        );
    } else {
        cl.push_clickable(
            Line::from(vec![key_span('r'), Span::styled(" PURGE ALL DATA", Style::default().fg(TEXT))]),
            REQUEST_RESET,
        );
    }

    cl.push(Line::from(""));
    cl.push(Line::from(muted("STORED KEYS")));
    for key in [KEY_BIRTH_DATE, KEY_LIFE_EXPECTANCY, KEY_ACHIEVEMENTS, KEY_LANGUAGE] {
        cl.push(Line::from(muted(format!("  {key}"))));
    }

    cl.push(Line::from(""));
    cl.push(Line::from(muted("KEYS")));
    for (keys, what) in KEY_HELP {
        cl.push(Line::from(vec![
            Span::styled(format!("  {keys:<5}"), Style::default().fg(TEXT)),
            muted(*what),
        ]));
    }

    cl.register_targets(area, &mut click_state.borrow_mut(), 1, 1, 0, 0);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

// ── Footer ─────────────────────────────────────────────────────

fn render_footer(state: &LifeState, f: &mut Frame, area: Rect) {
    let text = match (&state.editing, &state.status) {
        (Some(Field::BirthDate), _) => "EDITING ORIGIN · digits fill YYYY-MM-DD · Backspace · Enter/Esc done".to_string(),
        (Some(Field::SocialName), _) => "EDITING NAME · Enter/Esc done".to_string(),
        (None, Some(status)) => format!("> {status}"),
        (None, None) => "1-6 panels · o origin · [ ] cycle · v view · l lang".to_string(),
    };
    f.render_widget(Paragraph::new(Line::from(muted(text))), area);
}
