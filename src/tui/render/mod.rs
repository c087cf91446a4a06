pub mod filter_dropdown;
pub mod header;
pub mod helpers;
pub mod list_view;
pub mod modal_popup;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Width of the filter button, wide enough for "INCOMPLETE ▾"
pub const FILTER_BUTTON_W: u16 = 16;
/// Width of the theme button
pub const THEME_BUTTON_W: u16 = 5;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy)]
pub struct Regions {
    pub title: Rect,
    pub search: Rect,
    pub filter: Rect,
    pub theme: Rect,
    pub list: Rect,
    pub status: Rect,
}

/// Split the screen: title | controls (3 rows) | gap | list | status row
pub fn regions(area: Rect) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // search box, filter button, theme button
            Constraint::Length(1), // gap
            Constraint::Min(1),    // list
            Constraint::Length(1), // status row
        ])
        .split(area);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(FILTER_BUTTON_W),
            Constraint::Length(THEME_BUTTON_W),
        ])
        .split(rows[1]);

    Regions {
        title: rows[0],
        search: controls[0],
        filter: controls[1],
        theme: controls[2],
        list: rows[3],
        status: rows[4],
    }
}

/// Draw one frame: header, list, status row, then any open popup
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let regions = regions(area);

    header::render_header(frame, app, &regions);
    list_view::render_list_view(frame, app, regions.list);
    status_row::render_status_row(frame, app, regions.status);

    // Popups are drawn last so they sit on top of the list
    if app.filter_menu.is_open() {
        filter_dropdown::render_filter_dropdown(frame, app, regions.filter, area);
    }
    if app.modal.is_open() {
        modal_popup::render_modal_popup(frame, app, area);
    }
}
