use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::customer::CustomerBook;
use crate::ui::theme::{BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn render_statement(frame: &mut Frame, area: Rect, book: &CustomerBook, customer_id: &str) {
    let customer = book.get(customer_id);
    let title = match customer {
        Some(customer) => format!(" Statement: {} ({}) ", customer.name, customer.id),
        None => format!(" Statement: {} ", customer_id),
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(BRAND_BLUE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    let lines = book.statement(customer_id);
    if lines.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  No statement entries.",
                Style::default().fg(MUTED_TEXT),
            ))),
            chunks[0],
        );
    } else {
        let header = Row::new(["Date", "Description", "Amount"])
            .style(
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1);
        let rows = lines.iter().map(|line| {
            Row::new([
                line.date.clone(),
                line.description.clone(),
                line.amount.clone(),
            ])
            .style(Style::default().fg(HEADER_TEXT))
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Min(24),
                Constraint::Length(16),
            ],
        )
        .header(header)
        .column_spacing(2);
        frame.render_widget(table, chunks[0]);
    }

    let balance = customer.map(|c| c.balance.as_str()).unwrap_or("-");
    let footer = Line::from(vec![
        Span::styled("  Balance due: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            balance.to_string(),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("    Esc: Back", Style::default().fg(MUTED_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}
