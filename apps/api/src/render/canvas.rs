//! Page canvas — cursor bookkeeping and PDF content emission.
//!
//! Coordinates are millimetres measured from the top-left corner of the page,
//! like a word processor. Text `y` is the baseline. The canvas converts to PDF
//! user space (points, origin bottom-left) only when emitting operators.
//!
//! The output is deterministic: no creation date, no document id, objects
//! written in id order. Rendering the same input twice yields identical bytes.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, StringFormat};

use crate::render::font_metrics::{get_metrics, FontFace};
use crate::render::RenderError;

const MM_TO_PT: f32 = 72.0 / 25.4;

/// Page dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

pub const A4: PageSize = PageSize {
    width: 210.0,
    height: 297.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    fn components(&self) -> Vec<Object> {
        [self.0, self.1, self.2]
            .iter()
            .map(|c| Object::Real(round2(*c as f32 / 255.0)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Font, size, color and the fixed advance of one wrapped line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f32,
    pub color: Rgb,
    pub line_height: f32,
}

impl TextStyle {
    pub const fn new(face: FontFace, size: f32, line_height: f32) -> Self {
        Self {
            face,
            size,
            color: Rgb::BLACK,
            line_height,
        }
    }

    pub const fn with_color(self, color: Rgb) -> Self {
        Self { color, ..self }
    }
}

/// Vertical margins that drive page breaking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Cursor start on the first page.
    pub first_page_top: f32,
    /// Cursor start on every continuation page.
    pub top: f32,
    pub bottom: f32,
}

/// A growing sequence of pages plus the vertical cursor of the current one.
pub struct PageCanvas {
    size: PageSize,
    margins: Margins,
    pages: Vec<Vec<Operation>>,
    cursor: f32,
}

impl PageCanvas {
    pub fn new(size: PageSize, margins: Margins) -> Self {
        Self {
            size,
            margins,
            pages: vec![Vec::new()],
            cursor: margins.first_page_top,
        }
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    pub fn set_cursor(&mut self, y: f32) {
        self.cursor = y;
    }

    pub fn advance(&mut self, dy: f32) {
        self.cursor += dy;
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Starts a new page when a block of `height` would cross the bottom margin.
    ///
    /// Never breaks at the very top of a page, so an oversized block renders
    /// (and overflows) on its own page instead of looping.
    pub fn ensure_room(&mut self, height: f32) -> bool {
        let limit = self.size.height - self.margins.bottom;
        let at_top = self.cursor <= self.top_of_current_page();
        if self.cursor + height > limit && !at_top {
            self.new_page();
            return true;
        }
        false
    }

    fn top_of_current_page(&self) -> f32 {
        if self.pages.len() == 1 {
            self.margins.first_page_top
        } else {
            self.margins.top
        }
    }

    pub fn new_page(&mut self) {
        self.pages.push(Vec::new());
        self.cursor = self.margins.top;
    }

    /// Draws one line of text anchored at `x` (left edge, center or right edge per `align`).
    pub fn text_at(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: &TextStyle,
        align: Align,
    ) -> Result<(), RenderError> {
        let encoded = encode_win_ansi(text)?;
        if encoded.iter().all(|b| *b == b' ') {
            return Ok(());
        }

        let width = get_metrics(style.face).width_mm(text, style.size);
        let left = match align {
            Align::Left => x,
            Align::Center => x - width / 2.0,
            Align::Right => x - width,
        };

        let mut ops = vec![Operation::new("BT", vec![])];
        ops.push(Operation::new(
            "Tf",
            vec![
                Object::Name(style.face.resource_name().as_bytes().to_vec()),
                Object::Real(round2(style.size)),
            ],
        ));
        ops.push(Operation::new("rg", style.color.components()));
        ops.push(Operation::new(
            "Td",
            vec![
                Object::Real(round2(left * MM_TO_PT)),
                Object::Real(round2(self.pdf_y(y))),
            ],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(encoded, StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));

        self.current_page().extend(ops);
        Ok(())
    }

    /// Wraps `text` into the box `[x, x + width]` and draws it line by line from
    /// the cursor, advancing `line_height` per line and breaking pages as needed.
    ///
    /// Returns the number of wrapped lines; the cursor moved by exactly
    /// `lines × line_height` plus any page-break reset.
    pub fn paragraph(
        &mut self,
        text: &str,
        x: f32,
        width: f32,
        style: &TextStyle,
        align: Align,
    ) -> Result<usize, RenderError> {
        let lines = get_metrics(style.face).wrap(text, style.size, width);
        let anchor = match align {
            Align::Left => x,
            Align::Center => x + width / 2.0,
            Align::Right => x + width,
        };

        for line in &lines {
            self.ensure_room(style.line_height);
            let y = self.cursor;
            self.text_at(line, anchor, y, style, align)?;
            self.cursor += style.line_height;
        }
        Ok(lines.len())
    }

    /// Filled rectangle; `y` is the top edge.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        let bottom = self.pdf_y(y + height);
        let ops = vec![
            Operation::new("rg", color.components()),
            Operation::new(
                "re",
                vec![
                    Object::Real(round2(x * MM_TO_PT)),
                    Object::Real(round2(bottom)),
                    Object::Real(round2(width * MM_TO_PT)),
                    Object::Real(round2(height * MM_TO_PT)),
                ],
            ),
            Operation::new("f", vec![]),
        ];
        self.current_page().extend(ops);
    }

    /// Horizontal rule from `x1` to `x2` at `y`.
    pub fn rule(&mut self, x1: f32, x2: f32, y: f32, line_width: f32, color: Rgb) {
        let y = round2(self.pdf_y(y));
        let ops = vec![
            Operation::new("w", vec![Object::Real(round2(line_width * MM_TO_PT))]),
            Operation::new("RG", color.components()),
            Operation::new(
                "m",
                vec![Object::Real(round2(x1 * MM_TO_PT)), Object::Real(y)],
            ),
            Operation::new(
                "l",
                vec![Object::Real(round2(x2 * MM_TO_PT)), Object::Real(y)],
            ),
            Operation::new("S", vec![]),
        ];
        self.current_page().extend(ops);
    }

    fn current_page(&mut self) -> &mut Vec<Operation> {
        // `pages` is created with one page and only ever grows.
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn pdf_y(&self, y_mm: f32) -> f32 {
        (self.size.height - y_mm) * MM_TO_PT
    }

    /// Serializes all pages into a complete PDF document.
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let mut fonts = lopdf::Dictionary::new();
        for face in FontFace::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(face.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! { "Font" => fonts });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations }
                .encode()
                .map_err(|e| RenderError::Pdf(e.to_string()))?;
            let content_id = doc.add_object(lopdf::Stream::new(dictionary! {}, content));
            let page_id: ObjectId = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(round2(self.size.width * MM_TO_PT)),
                Object::Real(round2(self.size.height * MM_TO_PT)),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        Ok(bytes)
    }
}

fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

/// Encodes text for a WinAnsiEncoding Type1 font.
///
/// Line-break and tab characters become spaces. Anything outside the encoding
/// (emoji, CJK, most symbols) fails with `UnsupportedCharacter`.
pub fn encode_win_ansi(text: &str) -> Result<Vec<u8>, RenderError> {
    text.chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => Ok(b' '),
            ' '..='~' => Ok(c as u8),
            '\u{A0}'..='\u{FF}' => Ok(c as u32 as u8),
            other => win_ansi_special(other).ok_or(RenderError::UnsupportedCharacter(other)),
        })
        .collect()
}

/// The 0x80..=0x9F block of WinAnsiEncoding.
fn win_ansi_special(c: char) -> Option<u8> {
    let byte = match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}
