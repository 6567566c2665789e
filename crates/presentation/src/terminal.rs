use std::io::{self, Write};

use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::surface::{ChartKind, ChartPoint, Surface};

/// How many characters the longest chart bar occupies.
const BAR_WIDTH: u32 = 40;
/// The glyph ramp used for line charts, lowest to highest.
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Renders a report as plain text: framed tables via comfy-table and
/// block-glyph charts, written to any `io::Write` destination.
pub struct TerminalSurface<W: Write> {
    out: W,
    max_table_rows: usize,
}

impl TerminalSurface<io::Stdout> {
    /// A surface writing to standard output.
    pub fn stdout(max_table_rows: usize) -> Self {
        Self::new(io::stdout(), max_table_rows)
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, max_table_rows: usize) -> Self {
        Self { out, max_table_rows }
    }

    /// Consumes the surface and hands back its writer, so tests can
    /// inspect what was rendered.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_bars(&mut self, points: &[ChartPoint]) {
        let longest = points.iter().map(|p| p.y).max().unwrap_or(Decimal::ZERO);
        let label_width = points.iter().map(|p| p.x.chars().count()).max().unwrap_or(0);
        for point in points {
            let width = if longest > Decimal::ZERO {
                (point.y / longest * Decimal::from(BAR_WIDTH))
                    .to_u32()
                    .unwrap_or(0)
            } else {
                0
            };
            let bar = "█".repeat(width as usize);
            let _ = writeln!(
                self.out,
                "  {:<label_width$}  {} {}",
                point.x,
                bar,
                point.y.round_dp(2)
            );
        }
    }

    fn draw_sparkline(&mut self, points: &[ChartPoint]) {
        let lowest = points.iter().map(|p| p.y).min().unwrap_or(Decimal::ZERO);
        let highest = points.iter().map(|p| p.y).max().unwrap_or(Decimal::ZERO);
        let span = highest - lowest;
        let line: String = points
            .iter()
            .map(|point| {
                let level = if span > Decimal::ZERO {
                    ((point.y - lowest) / span * Decimal::from(SPARK_LEVELS.len() as u32 - 1))
                        .to_usize()
                        .unwrap_or(0)
                        .min(SPARK_LEVELS.len() - 1)
                } else {
                    // A flat series still deserves a visible line.
                    SPARK_LEVELS.len() / 2
                };
                SPARK_LEVELS[level]
            })
            .collect();
        let _ = writeln!(self.out, "  {line}");
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            let _ = writeln!(
                self.out,
                "  {} .. {}  (low {}, high {})",
                first.x,
                last.x,
                lowest.round_dp(2),
                highest.round_dp(2)
            );
        }
    }

    fn draw_shares(&mut self, points: &[ChartPoint]) {
        let total: Decimal = points.iter().map(|p| p.y).sum();
        if total <= Decimal::ZERO {
            let _ = writeln!(self.out, "  (no share to draw, the total is zero)");
            return;
        }
        let label_width = points.iter().map(|p| p.x.chars().count()).max().unwrap_or(0);
        for point in points {
            let share = point.y / total * Decimal::from(100);
            // Half a character per percent keeps the longest bar at 50 cells.
            let width = (share / Decimal::from(2)).to_u32().unwrap_or(0);
            let _ = writeln!(
                self.out,
                "  {:<label_width$}  {:>6}%  {}",
                point.x,
                share.round_dp(2),
                "▆".repeat(width as usize)
            );
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn section(&mut self, title: &str) {
        let _ = writeln!(self.out, "\n{:=^72}", format!(" {title} "));
    }

    fn metric(&mut self, label: &str, value: &str) {
        let _ = writeln!(self.out, "  {label:<32} {value}");
    }

    fn table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(headers.to_vec());
        for row in rows.iter().take(self.max_table_rows) {
            table.add_row(row.clone());
        }
        // The first column holds labels; everything after it is numeric.
        for (index, column) in table.column_iter_mut().enumerate() {
            if index > 0 {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
        let _ = writeln!(self.out, "\n{title}");
        let _ = writeln!(self.out, "{table}");
        if rows.len() > self.max_table_rows {
            let _ = writeln!(
                self.out,
                "  (showing first {} of {} rows)",
                self.max_table_rows,
                rows.len()
            );
        }
    }

    fn chart(&mut self, title: &str, kind: ChartKind, points: &[ChartPoint]) {
        let _ = writeln!(self.out, "\n{title}");
        if points.is_empty() {
            let _ = writeln!(self.out, "  (no data)");
            return;
        }
        match kind {
            ChartKind::Bar => self.draw_bars(points),
            ChartKind::Line => self.draw_sparkline(points),
            ChartKind::Pie => self.draw_shares(points),
        }
    }
}
