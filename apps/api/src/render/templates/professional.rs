use crate::models::resume::PersonalInfo;
use crate::render::canvas::{Align, Margins, PageCanvas, Rgb, TextStyle};
use crate::render::font_metrics::FontFace;
use crate::render::layout::{LayoutStrategy, Section, Typography};
use crate::render::RenderError;

const DARK: Rgb = Rgb(31, 41, 55);
const ORANGE: Rgb = Rgb(249, 115, 22);

const MASTHEAD_HEIGHT: f32 = 50.0;
const NAME: TextStyle = TextStyle::new(FontFace::Bold, 20.0, 10.0).with_color(Rgb::WHITE);
const CONTACT: TextStyle = TextStyle::new(FontFace::Regular, 9.0, 7.0).with_color(Rgb::WHITE);
const HEADING: TextStyle = TextStyle::new(FontFace::Bold, 11.0, 12.0).with_color(Rgb::WHITE);
/// Band drawn behind a heading: starts this far above the baseline, this tall.
const BAND_RISE: f32 = 5.0;
const BAND_HEIGHT: f32 = 8.0;

/// Dark masthead with white name and contacts; headings on alternating color bands.
pub struct ProfessionalTemplate {
    typography: Typography,
}

impl ProfessionalTemplate {
    pub fn new() -> Self {
        Self {
            typography: Typography {
                margins: Margins {
                    first_page_top: 65.0,
                    top: 25.0,
                    bottom: 20.0,
                },
                side_margin: 20.0,
                title: TextStyle::new(FontFace::Bold, 10.0, 4.5),
                body: TextStyle::new(FontFace::Regular, 9.0, 4.5),
                emphasis: TextStyle::new(FontFace::Oblique, 9.0, 4.5),
                label: TextStyle::new(FontFace::Bold, 9.0, 4.5),
                skills_indent: 5.0,
                item_gap: 6.0,
                section_gap: 5.0,
            },
        }
    }
}

impl Default for ProfessionalTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStrategy for ProfessionalTemplate {
    fn id(&self) -> &'static str {
        "professional"
    }

    fn name(&self) -> &'static str {
        "Profissional"
    }

    fn description(&self) -> &'static str {
        "Formato tradicional com toques modernos, versátil para qualquer setor"
    }

    fn typography(&self) -> &Typography {
        &self.typography
    }

    fn section_title(&self, section: Section) -> &'static str {
        match section {
            Section::Education => "FORMAÇÃO",
            other => other.default_title(),
        }
    }

    /// The masthead occupies a fixed band; the cursor is left at the first-page top margin.
    fn header(&self, info: &PersonalInfo, canvas: &mut PageCanvas) -> Result<(), RenderError> {
        let margin = self.typography.side_margin;
        let page_width = canvas.size().width;

        canvas.fill_rect(0.0, 0.0, page_width, MASTHEAD_HEIGHT, DARK);
        canvas.text_at(&info.name, margin, 25.0, &NAME, Align::Left)?;
        canvas.text_at(&info.email, margin, 35.0, &CONTACT, Align::Left)?;
        if let Some(phone) = info.phone.as_deref() {
            canvas.text_at(phone, margin, 42.0, &CONTACT, Align::Left)?;
        }

        let extras = [
            info.location.as_deref(),
            info.linked_in.as_deref(),
            info.github.as_deref(),
        ];
        let mut y = 28.0;
        for extra in extras.into_iter().flatten().filter(|s| !s.trim().is_empty()) {
            canvas.text_at(extra, page_width - margin, y, &CONTACT, Align::Right)?;
            y += CONTACT.line_height;
        }

        canvas.set_cursor(self.typography.margins.first_page_top);
        Ok(())
    }

    fn section_heading(
        &self,
        title: &str,
        ordinal: usize,
        canvas: &mut PageCanvas,
    ) -> Result<(), RenderError> {
        let margin = self.typography.side_margin;
        let width = self.typography.content_width(canvas.size().width);
        let band = if ordinal % 2 == 0 { ORANGE } else { DARK };

        canvas.ensure_room(HEADING.line_height + self.typography.body.line_height);
        let y = canvas.cursor();
        canvas.fill_rect(margin, y - BAND_RISE, width, BAND_HEIGHT, band);
        canvas.text_at(title, margin + 5.0, y, &HEADING, Align::Left)?;
        canvas.advance(HEADING.line_height);
        Ok(())
    }
}
