//! PDF report export
//!
//! The report is first laid out as a flat list of [`ReportOp`]s in
//! millimetres from the top-left corner, then handed to a [`ReportWriter`].
//! Only the writer touches `printpdf` or the filesystem.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Rgb};
use thiserror::Error;
use tracing::{error, info};

use ad_core::{AlumniRecord, Dashboard};

use crate::stats::SummaryCounters;

pub const REPORT_TITLE: &str = "Alumni Dashboard Report";

/// Rows of the filtered view written to the report
pub const SAMPLE_ROWS: usize = 20;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const TITLE_COLOR: [u8; 3] = [33, 128, 141];
const ROW_START_Y: f32 = 140.0;
const ROW_STEP: f32 = 8.0;
const PAGE_BREAK_Y: f32 = 280.0;
const NEW_PAGE_Y: f32 = 20.0;

/// Errors produced while writing a report
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<printpdf::Error> for ExportError {
    fn from(err: printpdf::Error) -> Self {
        ExportError::Pdf(err.to_string())
    }
}

/// One drawing step of the report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOp {
    FontSize(f32),
    TextColor([u8; 3]),
    /// Text with its baseline at (`x`, `y`) mm from the top-left corner
    Text { text: String, x: f32, y: f32 },
    AddPage,
}

/// Ordered drawing steps of a whole report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportLayout {
    pub ops: Vec<ReportOp>,
}

impl ReportLayout {
    fn push(&mut self, op: ReportOp) {
        self.ops.push(op);
    }

    fn text(&mut self, text: impl Into<String>, x: f32, y: f32) {
        self.push(ReportOp::Text { text: text.into(), x, y });
    }

    /// Number of pages the layout spans
    pub fn page_count(&self) -> usize {
        1 + self.ops.iter().filter(|op| **op == ReportOp::AddPage).count()
    }

    /// All text placements, in order
    pub fn texts(&self) -> impl Iterator<Item = (&str, f32, f32)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            ReportOp::Text { text, x, y } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }
}

/// `name - batch - state - support`
pub fn report_row(record: &AlumniRecord) -> String {
    format!(
        "{} - {} - {} - {}",
        record.name, record.batch, record.state, record.support_status
    )
}

/// Lay out the report for `counters` and the first rows of `records`
pub fn build_report<'a>(
    counters: &SummaryCounters,
    records: impl IntoIterator<Item = &'a AlumniRecord>,
    generated_on: &str,
) -> ReportLayout {
    let mut layout = ReportLayout::default();

    layout.push(ReportOp::FontSize(20.0));
    layout.push(ReportOp::TextColor(TITLE_COLOR));
    layout.text(REPORT_TITLE, 20.0, 20.0);

    layout.push(ReportOp::FontSize(12.0));
    layout.push(ReportOp::TextColor([0, 0, 0]));
    layout.text(format!("Generated on: {generated_on}"), 20.0, 35.0);
    layout.text(format!("Total Alumni: {}", counters.total_alumni), 20.0, 45.0);

    layout.text("Summary Statistics:", 20.0, 65.0);
    layout.text(format!("Total Alumni: {}", counters.total_alumni), 30.0, 75.0);
    layout.text(format!("Total Batches: {}", counters.total_batches), 30.0, 85.0);
    layout.text(format!("Supporting Mentoring: {}", counters.supporting), 30.0, 95.0);
    layout.text(format!("States Represented: {}", counters.states), 30.0, 105.0);

    layout.text("Sample Alumni (First 20 records):", 20.0, 125.0);

    let mut y = ROW_START_Y;
    for record in records.into_iter().take(SAMPLE_ROWS) {
        layout.text(report_row(record), 20.0, y);
        y += ROW_STEP;

        if y > PAGE_BREAK_Y {
            layout.push(ReportOp::AddPage);
            y = NEW_PAGE_Y;
        }
    }

    layout
}

/// Renders a laid-out report to a file
pub trait ReportWriter {
    fn write(&self, layout: &ReportLayout, path: &Path) -> Result<(), ExportError>;
}

/// A4 portrait PDF writer in Helvetica
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfReportWriter;

impl PdfReportWriter {
    fn new_page(doc: &PdfDocumentReference) -> PdfLayerReference {
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        doc.get_page(page).get_layer(layer)
    }
}

impl ReportWriter for PdfReportWriter {
    fn write(&self, layout: &ReportLayout, path: &Path) -> Result<(), ExportError> {
        let (doc, page, layer) = PdfDocument::new(REPORT_TITLE, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        let font: IndirectFontRef = doc.add_builtin_font(BuiltinFont::Helvetica)?;

        let mut current = doc.get_page(page).get_layer(layer);
        let mut font_size = 12.0;
        let mut color = [0u8; 3];

        for op in &layout.ops {
            match op {
                ReportOp::FontSize(size) => font_size = *size,
                ReportOp::TextColor(rgb) => color = *rgb,
                ReportOp::AddPage => current = Self::new_page(&doc),
                ReportOp::Text { text, x, y } => {
                    // Fill colour is per layer, so set it before every run
                    current.set_fill_color(Color::Rgb(Rgb::new(
                        color[0] as f32 / 255.0,
                        color[1] as f32 / 255.0,
                        color[2] as f32 / 255.0,
                        None,
                    )));
                    // PDF origin is bottom-left
                    current.use_text(text.as_str(), font_size, Mm(*x), Mm(PAGE_HEIGHT_MM - *y), &font);
                }
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        doc.save(&mut writer)?;
        Ok(())
    }
}

/// Write the report for the dashboard's current filtered view to `path`
pub fn export_report(dashboard: &Dashboard, writer: &dyn ReportWriter, path: &Path) -> Result<(), ExportError> {
    let counters = SummaryCounters::from_store(dashboard.store());
    let generated_on = chrono::Local::now().format("%Y-%m-%d").to_string();
    let layout = build_report(&counters, dashboard.filtered_records(), &generated_on);

    match writer.write(&layout, path) {
        Ok(()) => {
            info!("Exported report with {} pages to {}", layout.page_count(), path.display());
            Ok(())
        }
        Err(e) => {
            error!("Report export to {} failed: {}", path.display(), e);
            Err(e)
        }
    }
}

/// [`export_report`] with the PDF writer
pub fn export_pdf(dashboard: &Dashboard, path: &Path) -> Result<(), ExportError> {
    export_report(dashboard, &PdfReportWriter, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use ad_core::{DataStore, SummaryStats, SupportStatus};

    fn records(n: usize) -> Vec<AlumniRecord> {
        (0..n)
            .map(|i| AlumniRecord {
                name: format!("Alum {i:02}"),
                batch: format!("B-{}", i % 3 + 1),
                state: if i % 2 == 0 { "TX".into() } else { "CA".into() },
                support_status: SupportStatus::Yes,
                ..Default::default()
            })
            .collect()
    }

    fn counters() -> SummaryCounters {
        SummaryCounters { total_alumni: 42, total_batches: 16, supporting: 7, states: 3 }
    }

    #[test]
    fn test_header_layout() {
        let layout = build_report(&counters(), &records(0), "2024-01-02");
        let texts: Vec<_> = layout.texts().collect();

        assert_eq!(texts[0], (REPORT_TITLE, 20.0, 20.0));
        assert_eq!(texts[1], ("Generated on: 2024-01-02", 20.0, 35.0));
        assert_eq!(texts[2], ("Total Alumni: 42", 20.0, 45.0));
        assert_eq!(texts[5], ("Total Batches: 16", 30.0, 85.0));
        assert_eq!(texts[8], ("Sample Alumni (First 20 records):", 20.0, 125.0));
        assert_eq!(layout.ops[1], ReportOp::TextColor([33, 128, 141]));
        assert_eq!(layout.page_count(), 1);
    }

    #[test]
    fn test_rows_capped_and_paged() {
        let records = records(25);
        let layout = build_report(&counters(), &records, "today");

        let rows: Vec<_> = layout.texts().skip(9).collect();
        assert_eq!(rows.len(), SAMPLE_ROWS);
        assert_eq!(rows[0], ("Alum 00 - B-1 - TX - Yes", 20.0, 140.0));
        // y = 140 + 17 * 8 = 276 is the last row on page one
        assert_eq!(rows[17].2, 276.0);
        assert_eq!(rows[18].2, 20.0);
        assert_eq!(rows[19].2, 28.0);
        assert_eq!(layout.page_count(), 2);
    }

    #[test]
    fn test_report_follows_filtered_view() {
        let store = DataStore::new(records(10), Vec::new(), Vec::new(), SummaryStats::default());
        let mut dashboard = Dashboard::new(store);
        dashboard.set_state_filter(Some("CA".into()));

        let layout = build_report(&counters(), dashboard.filtered_records(), "today");
        let rows: Vec<_> = layout.texts().skip(9).map(|(t, _, _)| t.to_string()).collect();

        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.contains(" - CA - ")));
    }

    struct FailingWriter;

    impl ReportWriter for FailingWriter {
        fn write(&self, _layout: &ReportLayout, _path: &Path) -> Result<(), ExportError> {
            Err(ExportError::Pdf("writer unavailable".into()))
        }
    }

    struct RecordingWriter(RefCell<Option<ReportLayout>>);

    impl ReportWriter for RecordingWriter {
        fn write(&self, layout: &ReportLayout, _path: &Path) -> Result<(), ExportError> {
            *self.0.borrow_mut() = Some(layout.clone());
            Ok(())
        }
    }

    #[test]
    fn test_export_failure_leaves_dashboard_untouched() {
        let store = DataStore::new(records(3), Vec::new(), Vec::new(), SummaryStats::default());
        let dashboard = Dashboard::new(store);
        let before = dashboard.view().clone();

        let result = export_report(&dashboard, &FailingWriter, Path::new("report.pdf"));

        assert!(matches!(result, Err(ExportError::Pdf(_))));
        assert_eq!(dashboard.view(), &before);
        assert_eq!(dashboard.filtered_len(), 3);
    }

    #[test]
    fn test_export_hands_layout_to_writer() {
        let store = DataStore::new(records(3), Vec::new(), Vec::new(), SummaryStats::default());
        let dashboard = Dashboard::new(store);
        let writer = RecordingWriter(RefCell::new(None));

        export_report(&dashboard, &writer, Path::new("report.pdf")).unwrap();

        let layout = writer.0.into_inner().unwrap();
        assert_eq!(layout.texts().count(), 9 + 3);
    }
}
