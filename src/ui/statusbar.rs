use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::sort::sort_label;
use crate::system::stats::SystemStats;
use crate::view::ViewState;

pub fn status_text(view: &ViewState, stats: &SystemStats, total: usize) -> String {
    format!(
        "SORT_{:<15}reverse sort: {}     Battery: {:<10}|{:<15}Scroll: {}|{}",
        sort_label(view.sort_strategy),
        view.sort_reversed,
        stats.battery_percent_label(),
        stats.battery_state_label(),
        view.scroll_offset,
        total
    )
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    stats: &SystemStats,
    total: usize,
) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Line::from(status_text(view, stats, total))),
        inner,
    );
}
