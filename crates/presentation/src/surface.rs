use rust_decimal::Decimal;

/// The kind of visual a chart request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// One point of a chart series: a categorical or temporal label on the
/// X axis and its numeric measure on the Y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: String,
    pub y: Decimal,
}

/// An output device a report can be rendered onto.
///
/// The report layout speaks entirely in terms of this trait: scalar
/// metrics with a label, tables of preformatted rows, charts described by
/// an X dimension, a Y measure, and a kind, and named sections grouping
/// them. What any of that looks like is the implementation's business.
pub trait Surface {
    /// Opens a named section. Everything emitted afterwards belongs to it
    /// until the next call.
    fn section(&mut self, title: &str);

    /// Shows one labeled scalar value.
    fn metric(&mut self, label: &str, value: &str);

    /// Shows a table. Every row carries exactly `headers.len()` cells.
    fn table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]);

    /// Draws a chart from pre-aggregated points.
    fn chart(&mut self, title: &str, kind: ChartKind, points: &[ChartPoint]);
}
