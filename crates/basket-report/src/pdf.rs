//! # PDF Canvas
//!
//! A tiny drawing surface over lopdf content operations, plus the code that
//! wraps finished pages into a PDF document.
//!
//! ```text
//! Canvas ── text / line / rect ops ──► Vec<Operation> per page
//!    │
//!    └── ensure_space() starts a new A4 page when the cursor hits the
//!        bottom margin
//!
//! write_document(pages) ── fonts + page tree + catalog ──► bytes
//! ```
//!
//! Coordinates are PDF points with the origin at the bottom-left corner.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::error::ReportResult;
use crate::text::{encode_win_ansi, text_width};

/// A4 width in points.
pub(crate) const PAGE_WIDTH: f32 = 595.0;
/// A4 height in points.
pub(crate) const PAGE_HEIGHT: f32 = 842.0;
/// Left/right margin.
pub(crate) const MARGIN_X: f32 = 50.0;
/// Top margin; the cursor starts this far below the page edge.
pub(crate) const MARGIN_TOP: f32 = 50.0;
/// Content never goes below this line; the footer lives underneath.
pub(crate) const MARGIN_BOTTOM: f32 = 60.0;
/// Usable width between the side margins.
pub(crate) const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN_X;

/// The three base fonts registered in every document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Font {
    Regular,
    Bold,
    Oblique,
}

impl Font {
    fn resource_name(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
            Font::Oblique => "F3",
        }
    }

    fn base_font(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
            Font::Oblique => "Helvetica-Oblique",
        }
    }

    pub(crate) fn is_bold(self) -> bool {
        self == Font::Bold
    }
}

/// Text style: font, size and gray level (0.0 black, 1.0 white).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Style {
    pub font: Font,
    pub size: f32,
    pub gray: f32,
}

impl Style {
    pub(crate) const fn new(font: Font, size: f32, gray: f32) -> Self {
        Style { font, size, gray }
    }
}

fn real(v: f32) -> Object {
    Object::Real(v)
}

/// Page-flowing drawing surface.
#[derive(Debug)]
pub(crate) struct Canvas {
    finished: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    /// Baseline of the next block, measured from the page bottom.
    cursor: f32,
}

impl Canvas {
    pub(crate) fn new() -> Self {
        Canvas {
            finished: Vec::new(),
            current: Vec::new(),
            cursor: PAGE_HEIGHT - MARGIN_TOP,
        }
    }

    pub(crate) fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Moves the cursor down by `dy` points.
    pub(crate) fn advance(&mut self, dy: f32) {
        self.cursor -= dy;
    }

    /// Starts a new page if fewer than `height` points remain. Returns true
    /// when a page break happened.
    pub(crate) fn ensure_space(&mut self, height: f32) -> bool {
        if self.cursor - height >= MARGIN_BOTTOM {
            return false;
        }
        self.new_page();
        true
    }

    pub(crate) fn new_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.finished.push(page);
        self.cursor = PAGE_HEIGHT - MARGIN_TOP;
    }

    /// Draws `s` with its left edge at `x` and baseline at `y`.
    pub(crate) fn text(&mut self, x: f32, y: f32, style: Style, s: &str) {
        self.current.extend([
            Operation::new("q", vec![]),
            Operation::new("g", vec![real(style.gray)]),
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![Object::Name(style.font.resource_name().into()), real(style.size)],
            ),
            Operation::new("Td", vec![real(x), real(y)]),
            Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(s))]),
            Operation::new("ET", vec![]),
            Operation::new("Q", vec![]),
        ]);
    }

    /// Draws `s` ending at `right`.
    pub(crate) fn text_right(&mut self, right: f32, y: f32, style: Style, s: &str) {
        let width = text_width(s, style.size, style.font.is_bold());
        self.text(right - width, y, style, s);
    }

    /// Draws `s` centered on `center`.
    pub(crate) fn text_centered(&mut self, center: f32, y: f32, style: Style, s: &str) {
        let width = text_width(s, style.size, style.font.is_bold());
        self.text(center - width / 2.0, y, style, s);
    }

    /// Straight line in the given gray.
    pub(crate) fn line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, gray: f32) {
        self.current.extend([
            Operation::new("q", vec![]),
            Operation::new("G", vec![real(gray)]),
            Operation::new("w", vec![real(width)]),
            Operation::new("m", vec![real(from.0), real(from.1)]),
            Operation::new("l", vec![real(to.0), real(to.1)]),
            Operation::new("S", vec![]),
            Operation::new("Q", vec![]),
        ]);
    }

    /// Filled rectangle; `(x, y)` is the bottom-left corner.
    pub(crate) fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, gray: f32) {
        self.current.extend([
            Operation::new("q", vec![]),
            Operation::new("g", vec![real(gray)]),
            Operation::new("re", vec![real(x), real(y), real(w), real(h)]),
            Operation::new("f", vec![]),
            Operation::new("Q", vec![]),
        ]);
    }

    /// Outlined rectangle; `(x, y)` is the bottom-left corner.
    pub(crate) fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, width: f32, gray: f32) {
        self.current.extend([
            Operation::new("q", vec![]),
            Operation::new("G", vec![real(gray)]),
            Operation::new("w", vec![real(width)]),
            Operation::new("re", vec![real(x), real(y), real(w), real(h)]),
            Operation::new("S", vec![]),
            Operation::new("Q", vec![]),
        ]);
    }

    /// Closes the last page and returns every page's operations.
    pub(crate) fn finish(mut self) -> Vec<Vec<Operation>> {
        if !self.current.is_empty() || self.finished.is_empty() {
            self.new_page();
        }
        self.finished
    }
}

/// Wraps finished pages into a complete, compressed PDF.
pub(crate) fn write_document(pages: Vec<Vec<Operation>>) -> ReportResult<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = lopdf::Dictionary::new();
    for font in [Font::Regular, Font::Bold, Font::Oblique] {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            real(PAGE_WIDTH),
            real(PAGE_HEIGHT),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}
