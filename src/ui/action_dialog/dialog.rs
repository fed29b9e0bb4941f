use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::customer::ActionRequest;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    BRAND_BLUE, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, SECONDARY_BUTTON_BG,
};

use super::state::{ActionDialogState, DialogButton};

const DIALOG_WIDTH: u16 = 50;
const BUTTON_GAP: u16 = 2;
const CLOSE_CONTROL: &str = "[x]";

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl DialogButton {
    pub fn variant(self) -> ButtonVariant {
        match self {
            DialogButton::OpenRecord => ButtonVariant::Primary,
            DialogButton::OpenStatement => ButtonVariant::Secondary,
        }
    }

    fn padded_label(self) -> String {
        format!(" {} ", self.label())
    }

    fn width(self) -> u16 {
        self.padded_label().chars().count() as u16
    }
}

pub fn button_style(variant: ButtonVariant, focused: bool) -> Style {
    let base = match variant {
        ButtonVariant::Primary => Style::default().fg(HEADER_TEXT).bg(BRAND_BLUE),
        ButtonVariant::Secondary => Style::default().fg(HEADER_TEXT).bg(SECONDARY_BUTTON_BG),
    };
    if focused {
        base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        base
    }
}

/// Text of the dialog body and the row (inside the border) holding the buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogContent {
    pub lines: Vec<Line<'static>>,
    pub button_row: u16,
}

pub fn dialog_content(request: &ActionRequest, focused: DialogButton) -> DialogContent {
    let muted = Style::default().fg(MUTED_TEXT);
    let mut lines = vec![Line::from("")];

    if let Some(summary) = request.identity_summary() {
        lines.push(Line::from(Span::styled(
            format!("  {}", summary),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Choose what to open for this customer.",
        muted,
    )));
    lines.push(Line::from(""));

    let button_row = lines.len() as u16;
    let mut spans = vec![Span::raw(" ".repeat(button_padding() as usize))];
    for (idx, button) in DialogButton::ALL.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" ".repeat(BUTTON_GAP as usize)));
        }
        spans.push(Span::styled(
            button.padded_label(),
            button_style(button.variant(), button == focused),
        ));
    }
    lines.push(Line::from(spans));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Tab: Switch  Enter: Select  Esc: Close",
        muted,
    )));

    DialogContent { lines, button_row }
}

fn button_padding() -> u16 {
    let inner_width = DIALOG_WIDTH.saturating_sub(2);
    let buttons_width: u16 =
        DialogButton::ALL.iter().map(|b| b.width()).sum::<u16>() + BUTTON_GAP;
    inner_width.saturating_sub(buttons_width) / 2
}

/// What a click at a given cell landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogHit {
    Button(DialogButton),
    Close,
    /// On the dialog but not on a control.
    Surface,
    Outside,
}

/// Screen geometry of an open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    pub surface: Rect,
    pub close: Rect,
    pub buttons: [(DialogButton, Rect); 2],
}

impl DialogLayout {
    pub fn compute(area: Rect, request: &ActionRequest) -> Self {
        let content = dialog_content(request, DialogButton::default());
        let height = content.lines.len() as u16 + 2;
        let surface = centered_rect_by_size(area, DIALOG_WIDTH, height);

        let close_width = CLOSE_CONTROL.len() as u16;
        let close = Rect {
            x: (surface.x + surface.width).saturating_sub(close_width + 1),
            y: surface.y,
            width: close_width,
            height: 1,
        }
        .intersection(surface);

        let row_y = surface.y + 1 + content.button_row;
        let mut x = surface.x + 1 + button_padding();
        let buttons = DialogButton::ALL.map(|button| {
            let rect = Rect {
                x,
                y: row_y,
                width: button.width(),
                height: 1,
            }
            .intersection(surface);
            x += button.width() + BUTTON_GAP;
            (button, rect)
        });

        Self {
            surface,
            close,
            buttons,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> DialogHit {
        let position = Position::new(column, row);
        if self.close.contains(position) {
            return DialogHit::Close;
        }
        if let Some((button, _)) = self
            .buttons
            .iter()
            .find(|(_, rect)| rect.contains(position))
        {
            return DialogHit::Button(*button);
        }
        if self.surface.contains(position) {
            DialogHit::Surface
        } else {
            DialogHit::Outside
        }
    }
}

pub fn render_action_dialog(frame: &mut Frame, state: &ActionDialogState) {
    let ActionDialogState::Open { request, focused } = state else {
        return;
    };

    let layout = DialogLayout::compute(frame.area(), request);
    let content = dialog_content(request, *focused);

    frame.render_widget(Clear, layout.surface);

    let block = Block::default()
        .title_top(Line::from(" Customer Actions ").centered())
        .title_top(Line::from(CLOSE_CONTROL).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    frame.render_widget(Paragraph::new(content.lines).block(block), layout.surface);
}
