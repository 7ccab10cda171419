use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::content;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ModuleView, Sidebar, TitleBar};

const SIDEBAR_WIDTH: u16 = 30;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());
    let [sidebar_area, view_area] =
        Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(body_area);

    let labels = app.labels();

    TitleBar {
        labels,
        status_message: &app.status_message,
        language: app.language,
    }
    .render(frame, title_area);

    Sidebar::new(
        &mut tui.sidebar_list,
        content::modules(app.language),
        app.active_index(),
        labels,
        app.language,
    )
    .render(frame, sidebar_area);

    ModuleView::new(&mut tui.module_view, app.active_record(), labels).render(frame, view_area);
}
