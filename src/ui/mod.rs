pub mod process_table;
pub mod statusbar;
pub mod system_panel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::error::AppError;
use crate::system::snapshot::Snapshot;
use crate::system::stats::SystemStats;
use crate::view::ViewState;

pub const MIN_COLUMNS: u16 = 40;
pub const MIN_LINES: u16 = 10;
pub const TOO_SMALL_MESSAGE: &str = "Please use a larger terminal window...";

const STATUS_HEIGHT: u16 = 3;
const HEADER_HEIGHT: u16 = 3;

/// Settings that shape the panels but are not session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub gauge_divisor: u16,
    pub min_name_len: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            gauge_divisor: crate::gauge::DEFAULT_DIVISOR,
            min_name_len: process_table::DEFAULT_MIN_NAME_LEN,
        }
    }
}

/// Regions of the fixed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub header: Rect,
    pub table: Rect,
    pub system: Rect,
    pub status: Rect,
}

impl PanelLayout {
    pub fn compute(area: Rect) -> Result<Self, AppError> {
        if area.width < MIN_COLUMNS || area.height < MIN_LINES {
            return Err(AppError::TerminalTooSmall {
                width: area.width,
                height: area.height,
            });
        }

        let [body, status] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
            .areas(area);
        let [left, system] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(body);
        let [header, table] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)])
            .areas(left);

        Ok(PanelLayout {
            header,
            table,
            system,
            status,
        })
    }
}

/// Paints one frame. A terminal below the minimum layout gets a single
/// centered instruction instead, and the condition is returned to the caller.
pub fn draw(
    frame: &mut Frame,
    snapshot: &Snapshot,
    stats: &SystemStats,
    view: &ViewState,
    options: &DisplayOptions,
) -> Result<(), AppError> {
    let area = frame.area();
    let layout = match PanelLayout::compute(area) {
        Ok(layout) => layout,
        Err(err) => {
            render_too_small(frame, area);
            return Err(err);
        }
    };

    process_table::render(
        frame,
        layout.header,
        layout.table,
        snapshot,
        view.scroll_offset,
        options.min_name_len,
    );
    system_panel::render(
        frame,
        layout.system,
        stats,
        area.width,
        options.gauge_divisor,
    );
    statusbar::render(frame, layout.status, view, stats, snapshot.len());
    Ok(())
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let message = Paragraph::new(Line::from(TOO_SMALL_MESSAGE))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .centered();
    frame.render_widget(message, line);
}
