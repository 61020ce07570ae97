//! Minimal PDF writer for the period report: a summary block followed by
//! the entry table, paginated A4 portrait.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

use crate::core::aggregate::PeriodReport;
use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, rows_to_table, rows_from_report};
use crate::export::notify_export_success;
use crate::models::UserSettings;
use crate::utils::format_amount;

const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 50.0;
const ROW_H: f32 = 18.0;

const FONT_SIZE: f32 = 9.0;
const HEADER_FONT_SIZE: f32 = 10.0;
const TITLE_FONT_SIZE: f32 = 14.0;

struct ReportPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,
    next_id: i32,
}

impl ReportPdf {
    fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            current_content_id: None,
            next_id: 4,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.7, 0.7, 0.7);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
    ) {
        let mut x = MARGIN;
        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            self.draw_text(content, x + 4.0, y + 5.0, font_size, text);
            self.draw_cell_borders(content, x, y, w, ROW_H);
            x += w;
        }
    }

    /// Width per column from header + content length, scaled to fit.
    fn compute_col_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len() as f32 * 6.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = PAGE_W - 2.0 * MARGIN;
        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

pub(crate) fn write_pdf(
    report: &PeriodReport,
    settings: &UserSettings,
    path: &Path,
) -> AppResult<()> {
    let title = format!("Work report — {}", report.label);
    let summary = summary_lines(report, settings);
    let headers = get_headers();
    let rows = rows_to_table(&rows_from_report(report));

    let col_widths = ReportPdf::compute_col_widths(&headers, &rows);
    let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

    let mut doc = ReportPdf::new();
    let mut remaining: &[Vec<String>] = &rows;
    let mut page_idx = 1;

    loop {
        let mut content = doc.new_page();

        doc.draw_text(
            &mut content,
            MARGIN,
            PAGE_H - MARGIN + 10.0,
            TITLE_FONT_SIZE,
            &title,
        );
        doc.draw_text(
            &mut content,
            PAGE_W - MARGIN - 60.0,
            MARGIN - 30.0,
            FONT_SIZE,
            &format!("Page {}", page_idx),
        );

        let mut y = PAGE_H - MARGIN - 20.0;

        // summary block on the first page only
        if page_idx == 1 {
            for line in &summary {
                doc.draw_text(&mut content, MARGIN, y, FONT_SIZE + 1.0, line);
                y -= 14.0;
            }
            y -= 10.0;
        }

        // table header
        content.save_state();
        content.set_fill_rgb(0.85, 0.87, 0.90);
        content.rect(MARGIN, y, col_widths.iter().sum(), ROW_H);
        content.fill_nonzero();
        content.restore_state();

        doc.draw_row(&mut content, y, &col_widths, &header_row, HEADER_FONT_SIZE);
        y -= ROW_H;

        let mut consumed = 0;
        for (i, row) in remaining.iter().enumerate() {
            if y - ROW_H < MARGIN {
                break;
            }

            if i % 2 == 0 {
                content.save_state();
                content.set_fill_rgb(0.96, 0.96, 0.96);
                content.rect(MARGIN, y, col_widths.iter().sum(), ROW_H);
                content.fill_nonzero();
                content.restore_state();
            }

            doc.draw_row(&mut content, y, &col_widths, row, FONT_SIZE);
            y -= ROW_H;
            consumed += 1;
        }

        doc.finalize_page(content);
        remaining = &remaining[consumed..];
        page_idx += 1;

        if remaining.is_empty() {
            break;
        }
    }

    doc.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

fn summary_lines(report: &PeriodReport, settings: &UserSettings) -> Vec<String> {
    let c = &settings.currency;
    let mut lines = Vec::new();

    if !settings.worker_name.is_empty() {
        lines.push(format!("Worker: {}", settings.worker_name));
    }
    if !settings.employer_name.is_empty() {
        lines.push(format!("Employer: {}", settings.employer_name));
    }
    lines.push(format!(
        "Days worked: {}   Days missed: {}",
        report.stats.days_worked, report.stats.days_missed
    ));
    lines.push(format!(
        "Days: {}   Overtime: {}   Extras: {}",
        format_amount(report.stats.total_from_days, c),
        format_amount(report.stats.total_from_overtime, c),
        format_amount(report.stats.total_from_extras, c),
    ));
    lines.push(format!(
        "Gross: {}   Advances: {}   Final: {}",
        format_amount(report.stats.gross_total, c),
        format_amount(report.stats.total_advances, c),
        format_amount(report.stats.final_total, c),
    ));

    lines
}
