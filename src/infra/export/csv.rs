//! Plain comma separated text for the list exports.
//!
//! Fields are written verbatim: no quoting and no escaping, so a value
//! holding a comma shifts the columns after it. A line whose only field is
//! empty stays empty. Lines are joined with `\n` and the last one has no
//! terminator.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::usecase::ports::export::ExportError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub summary: Option<Vec<String>>,
}

impl CsvTable {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|header| header.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn with_summary(mut self, summary: SummaryRow) -> Self {
        self.summary = Some(summary.cells);
        self
    }

    /// Pads or truncates `row` to the header width.
    fn fit<'a>(&self, row: &'a [String]) -> Vec<&'a str> {
        (0..self.width())
            .map(|idx| row.get(idx).map(String::as_str).unwrap_or(""))
            .collect()
    }
}

/// Synthetic closing row: a label in the first column, aggregates in chosen
/// columns, blanks everywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    cells: Vec<String>,
}

impl SummaryRow {
    pub fn new(width: usize) -> Self {
        Self {
            cells: vec![String::new(); width],
        }
    }

    pub fn label(self, text: &str) -> Self {
        self.set(0, text)
    }

    /// Out of range columns are ignored.
    pub fn set(mut self, idx: usize, value: impl Into<String>) -> Self {
        if let Some(cell) = self.cells.get_mut(idx) {
            *cell = value.into();
        }
        self
    }
}

pub fn render_csv(table: &CsvTable) -> Result<String, ExportError> {
    let headers: Vec<&str> = table.headers.iter().map(String::as_str).collect();
    let mut lines = vec![render_line(&headers)?];
    for row in &table.rows {
        lines.push(render_line(&table.fit(row))?);
    }
    if let Some(summary) = &table.summary {
        lines.push(render_line(&table.fit(summary))?);
    }
    Ok(lines.join("\n"))
}

/// One record without its terminator.
fn render_line(fields: &[&str]) -> Result<String, ExportError> {
    // csv-core writes `""` for a record with no bytes, whatever the quote style.
    if matches!(fields, [] | [""]) {
        return Ok(String::new());
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(fields)?;

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Render(err.to_string()))?;
    let mut line = String::from_utf8(bytes).map_err(|err| ExportError::Render(err.to_string()))?;
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}

/// `<report-name>_<YYYY-MM-DD>.csv`
pub fn export_file_name(report_name: &str, date: NaiveDate) -> String {
    format!("{report_name}_{}.csv", date.format("%Y-%m-%d"))
}

/// Shortest decimal form: `1200`, `480.5`.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

pub fn format_euros(value: f64) -> String {
    format!("{}€", format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CsvTable {
        let mut table = CsvTable::new(&["ID", "Nom", "Montant"]);
        table.push_row(vec!["1".into(), "Dr. Sarah Chen".into(), "1200".into()]);
        table.push_row(vec!["2".into(), "Dr. Thomas Martin".into(), "800".into()]);
        table
    }

    #[test]
    fn renders_header_rows_and_summary() {
        let table = table().with_summary(SummaryRow::new(3).label("TOTAL").set(2, "2000"));

        let text = render_csv(&table).expect("render should succeed");

        assert_eq!(
            text,
            "ID,Nom,Montant\n1,Dr. Sarah Chen,1200\n2,Dr. Thomas Martin,800\nTOTAL,,2000"
        );
    }

    #[test]
    fn every_line_has_the_header_width() {
        let mut table = table();
        table.push_row(vec!["3".into()]);
        table.push_row(vec!["4".into(), "a".into(), "b".into(), "extra".into()]);

        let text = render_csv(&table).expect("render should succeed");

        for line in text.lines() {
            assert_eq!(line.split(',').count(), 3, "line `{line}`");
        }
    }

    #[test]
    fn commas_inside_values_are_not_quoted() {
        let mut table = CsvTable::new(&["Lieu"]);
        table.push_row(vec!["Centre Médical Saint-Michel, Paris".into()]);

        let text = render_csv(&table).expect("render should succeed");

        assert_eq!(text, "Lieu\nCentre Médical Saint-Michel, Paris");
    }

    #[test]
    fn lone_empty_field_gives_an_empty_line() {
        let mut table = CsvTable::new(&["Note"]);
        table.push_row(Vec::new());
        table.push_row(vec!["rappel".into()]);

        let text = render_csv(&table).expect("render should succeed");

        assert_eq!(text, "Note\n\nrappel");
    }

    #[test]
    fn empty_table_renders_the_header_only() {
        let text = render_csv(&CsvTable::new(&["A", "B"])).expect("render should succeed");
        assert_eq!(text, "A,B");
    }

    #[test]
    fn summary_ignores_out_of_range_columns() {
        let summary = SummaryRow::new(2).label("TOTAL").set(5, "lost");
        let table = CsvTable::new(&["A", "B"]).with_summary(summary);
        assert_eq!(render_csv(&table).expect("render should succeed"), "A,B\nTOTAL,");
    }

    #[test]
    fn file_name_carries_the_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 25).expect("valid date");
        assert_eq!(
            export_file_name("rendez-vous", date),
            "rendez-vous_2024-02-25.csv"
        );
    }

    #[test]
    fn numbers_use_their_shortest_form() {
        assert_eq!(format_number(1200.0), "1200");
        assert_eq!(format_number(480.5), "480.5");
        assert_eq!(format_euros(25.0), "25€");
    }
}
