use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::gauge::{gauge_width, render_bar};
use crate::system::stats::SystemStats;

/// Label column plus brackets and the widest percentage label.
const GAUGE_OVERHEAD: usize = 23;

/// Gauge lines for the system panel, `inner_width` columns wide.
pub fn gauge_lines(
    stats: &SystemStats,
    inner_width: u16,
    terminal_columns: u16,
    divisor: u16,
) -> Vec<String> {
    let width = gauge_width(terminal_columns, divisor)
        .min(usize::from(inner_width).saturating_sub(GAUGE_OVERHEAD));
    let bar = |pct: f32| render_bar(f64::from(pct), 100.0, width);

    let mut lines = Vec::with_capacity(stats.per_core_cpu_percent.len() + 3);
    lines.push(format!("Total CPU: {}", bar(stats.total_cpu_percent)));
    for (idx, usage) in stats.per_core_cpu_percent.iter().enumerate() {
        lines.push(format!("{:<10} {}", format!("CPU_{idx}:"), bar(*usage)));
    }
    lines.push("-".repeat(usize::from(inner_width)));
    lines.push(format!("MEM_USAGE: {}", bar(stats.mem_percent)));
    lines
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    stats: &SystemStats,
    terminal_columns: u16,
    divisor: u16,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::raw(" System "));
    let inner = block.inner(area);

    let lines: Vec<Line> = gauge_lines(stats, inner.width, terminal_columns, divisor)
        .into_iter()
        .map(Line::from)
        .collect();

    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}
