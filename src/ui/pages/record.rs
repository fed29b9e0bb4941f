use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::customer::Customer;
use crate::ui::theme::{BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", label), Style::default().fg(MUTED_TEXT)),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}

pub fn render_record(frame: &mut Frame, area: Rect, customer_id: &str, customer: Option<&Customer>) {
    let lines = match customer {
        Some(customer) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", customer.name),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            field("ID", customer.id.clone()),
            field("Property", customer.property.clone()),
            field("Phone", customer.phone.clone()),
            field("Email", customer.email.clone()),
            field("Status", customer.status.label().to_string()),
            field("Balance", customer.balance.clone()),
            Line::from(""),
            Line::from(Span::styled(
                "  Esc: Back to customers",
                Style::default().fg(MUTED_TEXT),
            )),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  No customer with id {}", customer_id),
                Style::default().fg(STATUS_ERROR),
            )),
        ],
    };

    let block = Block::default()
        .title(Span::styled(" Customer Record ", Style::default().fg(BRAND_BLUE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
