use crate::ui::action_dialog::render_action_dialog;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::nav::Page;
use crate::ui::pages::{render_customers, render_record, render_statement};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let nav = app.nav();

    frame.render_widget(Header::new(&nav.page, app.book().len()).widget(), header);
    frame.render_widget(Clear, body);

    match &nav.page {
        Page::Customers => render_customers(frame, body, app.book(), nav.selected),
        Page::Record { customer_id } => {
            render_record(frame, body, customer_id, app.book().get(customer_id))
        }
        Page::Statement { customer_id } => render_statement(frame, body, app.book(), customer_id),
    }

    let footer_widget = Footer::new(&nav.page, app.action_dialog().is_open());
    frame.render_widget(footer_widget.widget(footer), footer);

    // Overlay last so it sits above every page.
    render_action_dialog(frame, app.action_dialog());
}
