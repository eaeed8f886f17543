//! # Summary Report Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               FAMILY BASKET                  │  title
//! │              Purchase Summary                │  subtitle
//! │ ──────────────────────────────────────────── │
//! │                 Generated on: 18 Oct 2026 .. │
//! │ ┌──────────┐ ┌──────────┐ ┌──────────┐       │
//! │ │  TOTAL   │ │ AVERAGE  │ │  ITEMS   │       │  statistics panel
//! │ │ $13,000  │ │  $4,000  │ │    2     │       │
//! │ └──────────┘ └──────────┘ └──────────┘       │
//! │ ITEM DETAILS                                 │
//! │ # | Item | Price | Qty | Subtotal            │  flows across pages
//! │ ...                                          │
//! │                             TOTAL | $13,000  │
//! │ TOP 3 MOST EXPENSIVE ITEMS                   │  omitted when empty
//! │   1. Coffee - $9,000.00                      │
//! │ note                                         │
//! │        footer text                    Page 1 │  every page
//! └──────────────────────────────────────────────┘
//! ```

use basket_core::{BasketSummary, LineItem, DEFAULT_TOP_N};
use chrono::NaiveDateTime;
use lopdf::content::Operation;
use tracing::debug;

use crate::error::ReportResult;
use crate::pdf::{
    write_document, Canvas, Font, Style, CONTENT_WIDTH, MARGIN_X, PAGE_WIDTH,
};
use crate::text::{fit_text, wrap_text};

const TITLE: Style = Style::new(Font::Bold, 24.0, 0.1);
const SUBTITLE: Style = Style::new(Font::Regular, 16.0, 0.3);
const TIMESTAMP: Style = Style::new(Font::Regular, 10.0, 0.5);
const SECTION: Style = Style::new(Font::Bold, 14.0, 0.2);
const PANEL_LABEL: Style = Style::new(Font::Bold, 10.0, 0.3);
const PANEL_VALUE: Style = Style::new(Font::Bold, 16.0, 0.0);
const TABLE_HEADER: Style = Style::new(Font::Bold, 11.0, 1.0);
const TABLE_CELL: Style = Style::new(Font::Regular, 10.0, 0.0);
const TABLE_EMPTY: Style = Style::new(Font::Oblique, 10.0, 0.4);
const TABLE_TOTAL: Style = Style::new(Font::Bold, 12.0, 1.0);
const RANKING: Style = Style::new(Font::Regular, 11.0, 0.0);
const NOTE: Style = Style::new(Font::Oblique, 9.0, 0.5);
const FOOTER: Style = Style::new(Font::Regular, 8.0, 0.5);

const HEADER_GRAY: f32 = 0.2;
const ZEBRA_GRAY: f32 = 0.93;
const TOTAL_VALUE_GRAY: f32 = 0.35;

const ROW_HEIGHT: f32 = 20.0;
const HEADER_HEIGHT: f32 = 22.0;
const CELL_PADDING: f32 = 6.0;
/// Relative column widths: position, name, unit price, quantity, subtotal.
const COLUMN_WEIGHTS: [f32; 5] = [1.0, 4.0, 2.0, 2.0, 2.0];
const COLUMN_TITLES: [&str; 5] = ["#", "Item", "Price", "Qty", "Subtotal"];

const CLOSING_NOTE: &str = "This document was generated automatically by the basket tracker. \
    Prices and quantities reflect the information entered by the user.";

/// File name suggested to browsers downloading the report.
pub const REPORT_FILE_NAME: &str = "basket-summary.pdf";

/// Fixed texts printed on the report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    pub subtitle: String,
    /// Printed at the bottom of every page next to the page number.
    pub footer: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            title: "Family Basket".to_string(),
            subtitle: "Purchase Summary".to_string(),
            footer: "Family Basket Tracker".to_string(),
        }
    }
}

/// Renders basket summaries as PDF documents.
#[derive(Debug, Clone, Default)]
pub struct PdfReport {
    options: ReportOptions,
}

impl PdfReport {
    pub fn new(options: ReportOptions) -> Self {
        PdfReport { options }
    }

    /// Renders `summary` into PDF bytes.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{BasketItem, BasketStore, BasketSummary, Money};
    /// use basket_report::PdfReport;
    ///
    /// let mut store = BasketStore::new();
    /// store.add(BasketItem::new("Rice", Money::from_major(5000), 2)).unwrap();
    ///
    /// let generated_at = chrono::NaiveDate::from_ymd_opt(2026, 10, 18)
    ///     .unwrap()
    ///     .and_hms_opt(9, 30, 0)
    ///     .unwrap();
    /// let bytes = PdfReport::default()
    ///     .render(&BasketSummary::from(&store), generated_at)
    ///     .unwrap();
    /// assert!(bytes.starts_with(b"%PDF"));
    /// ```
    pub fn render(
        &self,
        summary: &BasketSummary,
        generated_at: NaiveDateTime,
    ) -> ReportResult<Vec<u8>> {
        let pages = self.layout(summary, generated_at);
        let page_count = pages.len();
        let bytes = write_document(pages)?;

        debug!(
            items = summary.item_count,
            pages = page_count,
            bytes = bytes.len(),
            "Summary report rendered"
        );
        Ok(bytes)
    }

    /// Lays out every section and returns the operations of each page.
    pub(crate) fn layout(
        &self,
        summary: &BasketSummary,
        generated_at: NaiveDateTime,
    ) -> Vec<Vec<Operation>> {
        let mut canvas = Canvas::new();

        self.draw_header(&mut canvas, generated_at);
        draw_statistics(&mut canvas, summary);
        draw_item_table(&mut canvas, summary);
        draw_ranking(&mut canvas, &summary.top_expensive);
        draw_note(&mut canvas);

        let mut pages = canvas.finish();
        self.draw_footers(&mut pages);
        pages
    }

    fn draw_header(&self, canvas: &mut Canvas, generated_at: NaiveDateTime) {
        let center = PAGE_WIDTH / 2.0;

        canvas.advance(TITLE.size);
        canvas.text_centered(center, canvas.cursor(), TITLE, &self.options.title.to_uppercase());
        canvas.advance(10.0 + SUBTITLE.size);
        canvas.text_centered(center, canvas.cursor(), SUBTITLE, &self.options.subtitle);

        canvas.advance(14.0);
        let y = canvas.cursor();
        canvas.line((MARGIN_X, y), (MARGIN_X + CONTENT_WIDTH, y), 1.5, HEADER_GRAY);

        canvas.advance(24.0);
        let stamp = format!("Generated on: {}", generated_at.format("%d %B %Y - %H:%M"));
        canvas.text_right(MARGIN_X + CONTENT_WIDTH, canvas.cursor(), TIMESTAMP, &stamp);
        canvas.advance(20.0);
    }

    /// Footer text and "Page N" under every page, drawn once the total page
    /// count is known.
    fn draw_footers(&self, pages: &mut [Vec<Operation>]) {
        for (index, page) in pages.iter_mut().enumerate() {
            let mut footer = Canvas::new();
            footer.text_centered(PAGE_WIDTH / 2.0, 30.0, FOOTER, &self.options.footer);
            footer.text_right(
                MARGIN_X + CONTENT_WIDTH,
                30.0,
                FOOTER,
                &format!("Page {}", index + 1),
            );
            for ops in footer.finish() {
                page.extend(ops);
            }
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

fn draw_statistics(canvas: &mut Canvas, summary: &BasketSummary) {
    const GAP: f32 = 12.0;
    const HEIGHT: f32 = 60.0;

    let cells = [
        ("TOTAL", summary.total.to_string()),
        ("AVERAGE", summary.average.to_string()),
        ("ITEMS", summary.item_count.to_string()),
    ];
    let width = (CONTENT_WIDTH - GAP * (cells.len() as f32 - 1.0)) / cells.len() as f32;

    canvas.ensure_space(HEIGHT);
    let top = canvas.cursor();
    let bottom = top - HEIGHT;

    for (i, (label, value)) in cells.iter().enumerate() {
        let x = MARGIN_X + i as f32 * (width + GAP);
        let center = x + width / 2.0;
        canvas.stroke_rect(x, bottom, width, HEIGHT, 2.0, HEADER_GRAY);
        canvas.text_centered(center, top - 18.0, PANEL_LABEL, label);
        canvas.text_centered(center, top - 45.0, PANEL_VALUE, value);
    }

    canvas.advance(HEIGHT + 30.0);
}

/// Left edge and width of every table column.
fn columns() -> [(f32, f32); 5] {
    let unit = CONTENT_WIDTH / COLUMN_WEIGHTS.iter().sum::<f32>();
    let mut out = [(0.0, 0.0); 5];
    let mut x = MARGIN_X;
    for (slot, weight) in out.iter_mut().zip(COLUMN_WEIGHTS) {
        *slot = (x, weight * unit);
        x += weight * unit;
    }
    out
}

fn draw_table_header(canvas: &mut Canvas) {
    let top = canvas.cursor();
    canvas.fill_rect(MARGIN_X, top - HEADER_HEIGHT, CONTENT_WIDTH, HEADER_HEIGHT, HEADER_GRAY);

    let baseline = top - HEADER_HEIGHT + 7.0;
    for ((x, w), title) in columns().into_iter().zip(COLUMN_TITLES) {
        canvas.text_centered(x + w / 2.0, baseline, TABLE_HEADER, title);
    }
    canvas.advance(HEADER_HEIGHT);
}

fn draw_item_table(canvas: &mut Canvas, summary: &BasketSummary) {
    canvas.ensure_space(SECTION.size + 10.0 + HEADER_HEIGHT + ROW_HEIGHT);
    canvas.advance(SECTION.size);
    canvas.text(MARGIN_X, canvas.cursor(), SECTION, "ITEM DETAILS");
    canvas.advance(10.0);
    draw_table_header(canvas);

    let cols = columns();

    if summary.items.is_empty() {
        canvas.advance(ROW_HEIGHT);
        canvas.text_centered(
            PAGE_WIDTH / 2.0,
            canvas.cursor() + 6.0,
            TABLE_EMPTY,
            "The basket is empty",
        );
    }

    for (i, line) in summary.items.iter().enumerate() {
        if canvas.ensure_space(ROW_HEIGHT) {
            draw_table_header(canvas);
        }
        let top = canvas.cursor();
        if i % 2 == 1 {
            canvas.fill_rect(MARGIN_X, top - ROW_HEIGHT, CONTENT_WIDTH, ROW_HEIGHT, ZEBRA_GRAY);
        }
        draw_row(canvas, &cols, top - ROW_HEIGHT + 6.0, line);
        canvas.advance(ROW_HEIGHT);
    }

    // Closing TOTAL row
    canvas.ensure_space(ROW_HEIGHT + 4.0);
    let top = canvas.cursor();
    let bottom = top - ROW_HEIGHT - 4.0;
    let (value_x, value_w) = cols[4];
    canvas.fill_rect(MARGIN_X, bottom, value_x - MARGIN_X, ROW_HEIGHT + 4.0, HEADER_GRAY);
    canvas.fill_rect(value_x, bottom, value_w, ROW_HEIGHT + 4.0, TOTAL_VALUE_GRAY);
    canvas.text_right(value_x - CELL_PADDING, bottom + 8.0, TABLE_TOTAL, "TOTAL");
    canvas.text_right(
        value_x + value_w - CELL_PADDING,
        bottom + 8.0,
        TABLE_TOTAL,
        &summary.total.to_string(),
    );
    canvas.advance(ROW_HEIGHT + 4.0 + 30.0);
}

fn draw_row(canvas: &mut Canvas, cols: &[(f32, f32); 5], baseline: f32, line: &LineItem) {
    let (pos_x, pos_w) = cols[0];
    let (name_x, name_w) = cols[1];
    let (price_x, price_w) = cols[2];
    let (qty_x, qty_w) = cols[3];
    let (sub_x, sub_w) = cols[4];

    canvas.text_centered(pos_x + pos_w / 2.0, baseline, TABLE_CELL, &line.position.to_string());
    let name = fit_text(
        &line.name,
        name_w - 2.0 * CELL_PADDING,
        TABLE_CELL.size,
        TABLE_CELL.font.is_bold(),
    );
    canvas.text(name_x + CELL_PADDING, baseline, TABLE_CELL, &name);
    canvas.text_right(
        price_x + price_w - CELL_PADDING,
        baseline,
        TABLE_CELL,
        &line.unit_price.to_string(),
    );
    canvas.text_centered(qty_x + qty_w / 2.0, baseline, TABLE_CELL, &line.quantity.to_string());
    canvas.text_right(
        sub_x + sub_w - CELL_PADDING,
        baseline,
        TABLE_CELL,
        &line.subtotal.to_string(),
    );
}

fn draw_ranking(canvas: &mut Canvas, ranked: &[LineItem]) {
    if ranked.is_empty() {
        return;
    }

    const LINE_GAP: f32 = 18.0;
    canvas.ensure_space(SECTION.size + 10.0 + LINE_GAP);
    canvas.advance(SECTION.size);
    canvas.text(
        MARGIN_X,
        canvas.cursor(),
        SECTION,
        &format!("TOP {} MOST EXPENSIVE ITEMS", DEFAULT_TOP_N),
    );
    canvas.advance(10.0);

    for line in ranked {
        canvas.ensure_space(LINE_GAP);
        canvas.advance(LINE_GAP);
        let text = format!("{}. {} - {}", line.position, line.name, line.unit_price);
        let text = fit_text(&text, CONTENT_WIDTH - 20.0, RANKING.size, false);
        canvas.text(MARGIN_X + 20.0, canvas.cursor(), RANKING, &text);
    }
    canvas.advance(20.0);
}

fn draw_note(canvas: &mut Canvas) {
    let line_gap = NOTE.size + 3.0;
    let lines = wrap_text(CLOSING_NOTE, CONTENT_WIDTH, NOTE.size, false);

    canvas.ensure_space(20.0 + line_gap * lines.len() as f32);
    canvas.advance(20.0);
    for line in lines {
        canvas.advance(line_gap);
        canvas.text(MARGIN_X, canvas.cursor(), NOTE, &line);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
