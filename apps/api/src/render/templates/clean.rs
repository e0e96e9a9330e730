use crate::models::resume::{Education, PersonalInfo};
use crate::render::canvas::{Align, Margins, PageCanvas, Rgb, TextStyle};
use crate::render::font_metrics::{get_metrics, FontFace};
use crate::render::layout::{
    body_paragraph, graduation_label, LayoutStrategy, Section, Typography,
};
use crate::render::RenderError;

const NAME: TextStyle = TextStyle::new(FontFace::Bold, 22.0, 8.0);
const CONTACT: TextStyle = TextStyle::new(FontFace::Regular, 9.0, 4.5);
const HEADING: TextStyle = TextStyle::new(FontFace::Bold, 12.0, 8.0);
const RULE_COLOR: Rgb = Rgb(0, 0, 0);
/// Horizontal gap kept between a degree and its right-aligned year.
const YEAR_GUTTER: f32 = 5.0;

/// Upper-case name, rule under the header, minimal headings.
pub struct CleanTemplate {
    typography: Typography,
}

impl CleanTemplate {
    pub fn new() -> Self {
        Self {
            typography: Typography {
                margins: Margins {
                    first_page_top: 40.0,
                    top: 25.0,
                    bottom: 20.0,
                },
                side_margin: 25.0,
                title: TextStyle::new(FontFace::Bold, 10.0, 5.0),
                body: TextStyle::new(FontFace::Regular, 9.0, 4.5),
                emphasis: TextStyle::new(FontFace::Oblique, 9.0, 4.5),
                label: TextStyle::new(FontFace::Bold, 9.0, 4.5),
                skills_indent: 5.0,
                item_gap: 6.0,
                section_gap: 7.0,
            },
        }
    }
}

impl Default for CleanTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStrategy for CleanTemplate {
    fn id(&self) -> &'static str {
        "clean"
    }

    fn name(&self) -> &'static str {
        "Minimalista"
    }

    fn description(&self) -> &'static str {
        "Layout simples e elegante, foco no conteúdo"
    }

    fn typography(&self) -> &Typography {
        &self.typography
    }

    fn section_title(&self, section: Section) -> &'static str {
        match section {
            Section::Summary => "RESUMO",
            Section::Education => "EDUCAÇÃO",
            other => other.default_title(),
        }
    }

    fn header(&self, info: &PersonalInfo, canvas: &mut PageCanvas) -> Result<(), RenderError> {
        let typo = &self.typography;
        let page_width = canvas.size().width;
        let right = page_width - typo.side_margin;

        body_paragraph(typo, &info.name.to_uppercase(), &NAME, canvas)?;

        let y = canvas.cursor();
        canvas.text_at(&info.email, typo.side_margin, y, &CONTACT, Align::Left)?;
        if let Some(phone) = info.phone.as_deref() {
            canvas.text_at(phone, right, y, &CONTACT, Align::Right)?;
        }
        canvas.advance(CONTACT.line_height);

        let extra: Vec<&str> = [
            info.location.as_deref(),
            info.linked_in.as_deref(),
            info.github.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect();
        body_paragraph(typo, &extra.join(" | "), &CONTACT, canvas)?;

        canvas.advance(5.5);
        let y = canvas.cursor();
        canvas.rule(typo.side_margin, right, y, 0.3, RULE_COLOR);
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

    /// Degree on the left with the year right-aligned on the same line,
    /// then `"{field} - {institution}"`.
    fn education_item(&self, edu: &Education, canvas: &mut PageCanvas) -> Result<(), RenderError> {
        let typo = &self.typography;
        let page_width = canvas.size().width;
        let right = page_width - typo.side_margin;
        let year = graduation_label(edu);
        let year_style = TextStyle {
            face: FontFace::Regular,
            ..typo.title
        };

        canvas.ensure_room(typo.title.line_height + typo.body.line_height);
        let y = canvas.cursor();
        canvas.text_at(year, right, y, &year_style, Align::Right)?;

        let year_width = get_metrics(FontFace::Regular).width_mm(year, year_style.size);
        let degree_width = typo.content_width(page_width) - year_width - YEAR_GUTTER;
        let lines = canvas.paragraph(
            edu.degree.trim(),
            typo.side_margin,
            degree_width,
            &typo.title,
            Align::Left,
        )?;
        if lines == 0 {
            canvas.advance(typo.title.line_height);
        }

        let detail = match (edu.field.trim(), edu.institution.trim()) {
            ("", institution) => institution.to_string(),
            (field, "") => field.to_string(),
            (field, institution) => format!("{field} - {institution}"),
        };
        body_paragraph(typo, &detail, &typo.body, canvas)?;

        canvas.advance(typo.item_gap);
        Ok(())
    }
}
