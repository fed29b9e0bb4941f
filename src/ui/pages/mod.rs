//! Static dashboard pages. They only lay sample data out; nothing here
//! computes over it.

mod customers;
mod record;
mod statement;

pub use customers::{customer_row_at, render_customers};
pub use record::render_record;
pub use statement::render_statement;

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
