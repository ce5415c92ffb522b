use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::format::{pad_to_width, truncate_name};
use crate::system::snapshot::{ProcessRecord, Snapshot};

pub const DEFAULT_MIN_NAME_LEN: usize = 10;

/// Columns a row uses besides the name: `[pid] [] mem% cpu%`.
pub const ROW_OVERHEAD: usize = 31;

/// Width of the name column for a table `inner_width` columns wide.
pub fn name_column_width(inner_width: u16, min_name_len: usize) -> usize {
    usize::from(inner_width)
        .saturating_sub(ROW_OVERHEAD)
        .max(min_name_len)
}

pub fn header_line(name_len: usize) -> String {
    format!(
        "{:<8}| {:<w$}| {:>9}| {:>7}",
        "PID",
        "Name",
        "MEM%",
        "CPU%",
        w = name_len + 1
    )
}

pub fn row_line(record: &ProcessRecord, name_len: usize) -> String {
    let name = pad_to_width(&truncate_name(&record.name, name_len), name_len);
    format!(
        "[{:>6}] [{}] {:>9.5}% {:>7.2}%",
        record.pid, name, record.mem_percent, record.cpu_percent
    )
}

/// Column header box plus the scrolled table starting at `scroll_offset`.
pub fn render(
    frame: &mut Frame,
    header_area: Rect,
    table_area: Rect,
    snapshot: &Snapshot,
    scroll_offset: usize,
    min_name_len: usize,
) {
    let header_block = Block::default().borders(Borders::ALL);
    let header_inner = header_block.inner(header_area);
    let table_block = Block::default().borders(Borders::ALL);
    let table_inner = table_block.inner(table_area);

    let name_len = name_column_width(table_inner.width, min_name_len);

    frame.render_widget(header_block, header_area);
    frame.render_widget(
        Paragraph::new(Line::from(header_line(name_len)))
            .style(Style::default().add_modifier(Modifier::BOLD)),
        header_inner,
    );

    let rows: Vec<Line> = snapshot
        .window(scroll_offset, usize::from(table_inner.height))
        .iter()
        .map(|record| Line::from(row_line(record, name_len)))
        .collect();

    frame.render_widget(table_block, table_area);
    frame.render_widget(Paragraph::new(rows), table_inner);
}
