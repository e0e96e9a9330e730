use crate::models::resume::PersonalInfo;
use crate::render::canvas::{Align, Margins, PageCanvas, TextStyle};
use crate::render::font_metrics::FontFace;
use crate::render::layout::{LayoutStrategy, Typography};
use crate::render::RenderError;

const NAME: TextStyle = TextStyle::new(FontFace::Bold, 24.0, 10.0);
const CONTACT: TextStyle = TextStyle::new(FontFace::Regular, 10.0, 5.0);
const HEADING: TextStyle = TextStyle::new(FontFace::Bold, 14.0, 8.0);

/// Centered masthead, plain bold headings.
pub struct ModernTemplate {
    typography: Typography,
}

impl ModernTemplate {
    pub fn new() -> Self {
        Self {
            typography: Typography {
                margins: Margins {
                    first_page_top: 30.0,
                    top: 20.0,
                    bottom: 20.0,
                },
                side_margin: 20.0,
                title: TextStyle::new(FontFace::Bold, 11.0, 5.0),
                body: TextStyle::new(FontFace::Regular, 10.0, 5.0),
                emphasis: TextStyle::new(FontFace::Oblique, 10.0, 5.0),
                label: TextStyle::new(FontFace::Bold, 10.0, 5.0),
                skills_indent: 5.0,
                item_gap: 6.0,
                section_gap: 5.0,
            },
        }
    }
}

impl Default for ModernTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStrategy for ModernTemplate {
    fn id(&self) -> &'static str {
        "modern"
    }

    fn name(&self) -> &'static str {
        "Moderno"
    }

    fn description(&self) -> &'static str {
        "Design limpo e contemporâneo, ideal para startups e empresas de tecnologia"
    }

    fn typography(&self) -> &Typography {
        &self.typography
    }

    fn header(&self, info: &PersonalInfo, canvas: &mut PageCanvas) -> Result<(), RenderError> {
        let margin = self.typography.side_margin;
        let width = self.typography.content_width(canvas.size().width);

        canvas.paragraph(&info.name, margin, width, &NAME, Align::Center)?;
        let contact = info.contact_fields().join(" | ");
        canvas.paragraph(&contact, margin, width, &CONTACT, Align::Center)?;
        canvas.advance(15.0);
        Ok(())
    }

    fn section_heading(
        &self,
        title: &str,
        _ordinal: usize,
        canvas: &mut PageCanvas,
    ) -> Result<(), RenderError> {
        canvas.ensure_room(HEADING.line_height + self.typography.body.line_height);
        let y = canvas.cursor();
        canvas.text_at(title, self.typography.side_margin, y, &HEADING, Align::Left)?;
        canvas.advance(HEADING.line_height);
        Ok(())
    }
}
