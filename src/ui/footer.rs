use crate::ui::nav::Page;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    page: &'a Page,
    dialog_open: bool,
}

impl<'a> Footer<'a> {
    pub fn new(page: &'a Page, dialog_open: bool) -> Self {
        Self { page, dialog_open }
    }

    fn hints(&self) -> &'static str {
        if self.dialog_open {
            return " Tab: Switch │ Enter: Select │ R: Record │ S: Statement │ Esc: Close";
        }
        match self.page {
            Page::Customers => " ↑/↓: Move │ Enter: Actions │ Ctrl+Q: Quit",
            Page::Record { .. } | Page::Statement { .. } => " Esc: Back │ Ctrl+Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_dialog_and_page() {
        let customers = Page::Customers;
        assert!(Footer::new(&customers, false).hints().contains("Enter: Actions"));
        assert!(Footer::new(&customers, true).hints().contains("Esc: Close"));
        let record = Page::Record {
            customer_id: "CUST001".into(),
        };
        assert!(Footer::new(&record, false).hints().contains("Esc: Back"));
    }
}
