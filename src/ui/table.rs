/// Catalog table view
///
/// A heading row plus one button per record. Pressing a row selects it.
use iced::widget::{button, column, container, scrollable, text, Row};
use iced::{Element, Length, Theme};

use crate::state::data::{RecordRow, COLUMNS};
use crate::Message;

const COLUMN_WIDTH: f32 = 120.0;

pub fn view(rows: &[RecordRow], selected: Option<usize>) -> Element<'_, Message> {
    let heading = Row::with_children(COLUMNS.iter().map(|name| {
        text(capitalize(name))
            .size(14)
            .width(Length::Fixed(COLUMN_WIDTH))
            .into()
    }))
    .padding([0, 5]);

    let body = rows.iter().enumerate().fold(column![], |body, (index, row)| {
        let cells = Row::with_children(row.cells.iter().map(|cell| {
            text(first_line(cell))
                .size(14)
                .width(Length::Fixed(COLUMN_WIDTH))
                .into()
        }));

        let style: fn(&Theme, button::Status) -> button::Style = if selected == Some(index) {
            button::primary
        } else {
            button::text
        };

        body.push(
            button(cells)
                .on_press(Message::RowSelected(index))
                .style(style)
                .width(Length::Fill),
        )
    });

    container(column![heading, scrollable(body).height(Length::Fill)].spacing(5))
        .height(Length::Fill)
        .into()
}

/// Multi-line descriptions only show their first line in the table
fn first_line(cell: &str) -> &str {
    cell.lines().next().unwrap_or_default()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
