// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tui::app::App;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap};
use tab_admin::ViewState;
use tab_admin_client::NoticeLevel;
use tab_admin_domain::{
    Column, EntityRecord, HighlightRole, RoleTone, ScreenConfig, SortDirection, SortSpec,
};

const OLD_RED: Color = Color::Rgb(0xff, 0xcd, 0xd2);
const NEW_GREEN: Color = Color::Rgb(0xc8, 0xe6, 0xc9);

/// Draws the whole UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let titles: Vec<String> = app
        .views()
        .iter()
        .map(|view| format!(" {} ", view.screen.title))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().title("tab-admin").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(
            app.views()
                .iter()
                .position(|view| view.screen.kind == app.active_kind())
                .unwrap_or(0),
        );
    frame.render_widget(tabs, layout[0]);

    render_grid(frame, app, layout[1]);

    let status = Paragraph::new(status_text(app))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if let Some(notice) = &app.notice {
        let area: Rect = centered_rect(60, 30, frame.area());
        let (title, colour) = match notice.level {
            NoticeLevel::Warning => ("Notice", Color::Yellow),
            NoticeLevel::Error => ("Error", Color::Red),
        };
        frame.render_widget(Clear, area);
        let popup = Paragraph::new(vec![
            Line::from(notice.message.as_str()),
            Line::from(""),
            Line::from("Press enter to dismiss"),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {title} {} UTC ", notice.raised_clock()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colour)),
        );
        frame.render_widget(popup, area);
    }
}

fn render_grid(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let view: &ViewState = app.active_view();
    let screen: &ScreenConfig = &view.screen;

    let mut header_cells: Vec<Cell<'_>> = vec![Cell::from(""), Cell::from("Role")];
    header_cells.extend(
        screen
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| Cell::from(header_label(index, column, view.sort.as_ref()))),
    );
    let header = Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row<'_>> = view
        .rows()
        .into_iter()
        .map(|record| grid_row(view, record))
        .collect();

    let mut widths: Vec<Constraint> = vec![Constraint::Length(3), Constraint::Length(9)];
    widths.extend(
        screen
            .columns
            .iter()
            .map(|column| Constraint::Fill(column.weight)),
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(grid_title(view)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state: TableState = TableState::default();
    if !view.records.is_empty() {
        state.select(Some(app.cursor()));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn grid_row<'a>(view: &ViewState, record: &'a EntityRecord) -> Row<'a> {
    let role: HighlightRole = view.classify(record.id);
    let marker: &str = if view.selection.contains(record.id) {
        "[x]"
    } else {
        "[ ]"
    };

    let mut cells: Vec<Cell<'a>> = vec![Cell::from(marker)];
    let style = view.screen.role_style(role);
    cells.push(Cell::from(style.map_or("", |style| style.label)));
    cells.extend(
        view.screen
            .columns
            .iter()
            .map(|column| Cell::from(record.cell(column.key).display())),
    );

    let row: Row<'a> = Row::new(cells);
    match style.map(|style| style.tone) {
        Some(RoleTone::Warning) => row.style(Style::default().bg(OLD_RED).fg(Color::Black)),
        Some(RoleTone::Positive) => row.style(Style::default().bg(NEW_GREEN).fg(Color::Black)),
        None => row,
    }
}

fn header_label(index: usize, column: &Column, sort: Option<&SortSpec>) -> String {
    let arrow: &str = match sort {
        Some(spec) if spec.column.key == column.key => match spec.direction {
            SortDirection::Ascending => " ^",
            SortDirection::Descending => " v",
        },
        _ => "",
    };
    if column.sortable {
        format!("{} {}{arrow}", index + 1, column.header)
    } else {
        column.header.to_string()
    }
}

fn grid_title(view: &ViewState) -> String {
    let mut title: String = format!(" {} ({}) ", view.screen.title, view.records.len());
    if view.is_loading() {
        title.push_str("loading... ");
    }
    title
}

/// The status bar: selection size, the action trigger, and key help.
pub fn status_text(app: &App) -> String {
    let view: &ViewState = app.active_view();
    let label: &str = view.screen.action.label();
    let trigger: String = if view.is_sending() {
        format!("{label} (sending...)")
    } else if view.can_trigger_action() {
        format!("[{label}]")
    } else {
        format!("{label} (unavailable)")
    };

    let help = "space toggle | enter action | 1-9 sort | r reload | c clear | tab switch | q quit";
    let mut parts: Vec<String> = vec![format!("{} selected", view.selection.len()), trigger];
    if let Some(status) = &app.status {
        parts.push(status.clone());
    }
    parts.push(help.to_string());
    parts.join(" | ")
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
