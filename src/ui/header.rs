use crate::ui::nav::Page;
use crate::ui::theme::{BRAND_BLUE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    page: &'a Page,
    customer_count: usize,
}

impl<'a> Header<'a> {
    pub fn new(page: &'a Page, customer_count: usize) -> Self {
        Self {
            page,
            customer_count,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let brand_style = Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("CustDesk", brand_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.page.title(), text_style),
        ];
        match self.page {
            Page::Record { customer_id } | Page::Statement { customer_id } => {
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(customer_id.clone(), text_style));
            }
            Page::Customers => {
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(
                    format!("{} customers", self.customer_count),
                    text_style,
                ));
            }
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
