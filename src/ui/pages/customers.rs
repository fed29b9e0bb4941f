use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::customer::{CustomerBook, CustomerStatus};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_WARN,
};

/// Border plus header row plus the gap under it.
const ROWS_TOP: u16 = 3;

const WIDTHS: [Constraint; 5] = [
    Constraint::Length(9),
    Constraint::Min(16),
    Constraint::Min(24),
    Constraint::Length(9),
    Constraint::Length(15),
];

fn status_style(status: CustomerStatus) -> Style {
    let color = match status {
        CustomerStatus::Active => STATUS_OK,
        CustomerStatus::Overdue => STATUS_ERROR,
        CustomerStatus::Closed => STATUS_WARN,
    };
    Style::default().fg(color)
}

fn visible_rows(area: Rect) -> usize {
    area.height.saturating_sub(ROWS_TOP + 1) as usize
}

/// First row shown so that `selected` stays on screen.
fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    selected.saturating_sub(visible - 1)
}

pub fn render_customers(frame: &mut Frame, area: Rect, book: &CustomerBook, selected: usize) {
    let header = Row::new(["ID", "Name", "Property", "Status", "Balance"])
        .style(
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows = book.customers().iter().map(|customer| {
        Row::new(vec![
            Cell::from(Span::styled(customer.id.clone(), Style::default().fg(MUTED_TEXT))),
            Cell::from(customer.name.clone()),
            Cell::from(customer.property.clone()),
            Cell::from(Span::styled(
                customer.status.label(),
                status_style(customer.status),
            )),
            Cell::from(customer.balance.clone()),
        ])
        .style(Style::default().fg(HEADER_TEXT))
    });

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ")
        .block(
            Block::default()
                .title(Span::styled(" Customers ", Style::default().fg(BRAND_BLUE)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );

    let mut state = TableState::default()
        .with_offset(scroll_offset(selected, visible_rows(area)))
        .with_selected(if book.is_empty() { None } else { Some(selected) });
    frame.render_stateful_widget(table, area, &mut state);
}

/// Customer index under a click at (`column`, `row`) on the customers page.
/// Clicks on the table border never hit a row.
pub fn customer_row_at(
    area: Rect,
    selected: usize,
    row_count: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    let inside_borders = column > area.x && column < (area.x + area.width).saturating_sub(1);
    if !inside_borders {
        return None;
    }
    let first = area.y + ROWS_TOP;
    let visible = visible_rows(area);
    if row < first || (row - first) as usize >= visible {
        return None;
    }
    let index = scroll_offset(selected, visible) + (row - first) as usize;
    (index < row_count).then_some(index)
}
