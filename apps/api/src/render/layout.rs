//! Shared section walk used by every template.
//!
//! Order: header → summary → education → projects → experience → skills.
//! A section whose source is empty is skipped entirely: no heading, no cursor
//! movement. Within a section, items render in input order; every body text
//! goes through `PageCanvas::paragraph`, so its height is always
//! `wrapped_lines × line_height` and long résumés flow onto new pages.

use crate::models::resume::{Education, Experience, PersonalInfo, Project, Skills};
use crate::models::ResumeData;
use crate::render::canvas::{Align, Margins, PageCanvas, TextStyle};
use crate::render::RenderError;

/// Shown when an education entry has no graduation year.
pub const IN_PROGRESS: &str = "Em andamento";

/// Separator for list-valued fields rendered on one line.
pub const LIST_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Education,
    Projects,
    Experience,
    Skills,
}

impl Section {
    pub const ORDER: [Section; 5] = [
        Section::Summary,
        Section::Education,
        Section::Projects,
        Section::Experience,
        Section::Skills,
    ];

    pub fn default_title(&self) -> &'static str {
        match self {
            Section::Summary => "RESUMO PROFISSIONAL",
            Section::Education => "FORMAÇÃO ACADÊMICA",
            Section::Projects => "PROJETOS",
            Section::Experience => "EXPERIÊNCIA",
            Section::Skills => "HABILIDADES",
        }
    }

    fn is_empty_in(&self, data: &ResumeData) -> bool {
        match self {
            Section::Summary => data.summary.trim().is_empty(),
            Section::Education => data.education.is_empty(),
            Section::Projects => data.projects.is_empty(),
            Section::Experience => data.experience.is_empty(),
            Section::Skills => data.skills.is_empty(),
        }
    }
}

/// Presentational constants of a template. All lengths in millimetres.
#[derive(Debug, Clone, Copy)]
pub struct Typography {
    pub margins: Margins,
    /// Left and right page margin.
    pub side_margin: f32,
    /// Item titles: degree, project name, job title.
    pub title: TextStyle,
    pub body: TextStyle,
    /// Technologies, durations.
    pub emphasis: TextStyle,
    /// Labels inside the skills section.
    pub label: TextStyle,
    /// Indent of skill values under their label.
    pub skills_indent: f32,
    /// Space after every item.
    pub item_gap: f32,
    /// Space after every rendered section.
    pub section_gap: f32,
}

impl Typography {
    pub fn content_width(&self, page_width: f32) -> f32 {
        page_width - 2.0 * self.side_margin
    }
}

/// A template: identity plus the skin hooks the shared walk calls into.
pub trait LayoutStrategy: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn typography(&self) -> &Typography;

    /// Draws name and contact details and leaves the cursor where the first section starts.
    fn header(&self, info: &PersonalInfo, canvas: &mut PageCanvas) -> Result<(), RenderError>;

    /// Draws a section heading at the cursor and advances past it.
    /// `ordinal` counts rendered sections, starting at 0.
    fn section_heading(
        &self,
        title: &str,
        ordinal: usize,
        canvas: &mut PageCanvas,
    ) -> Result<(), RenderError>;

    fn section_title(&self, section: Section) -> &'static str {
        section.default_title()
    }

    fn education_item(&self, edu: &Education, canvas: &mut PageCanvas) -> Result<(), RenderError> {
        education_item(self.typography(), edu, canvas)
    }
}

/// Walks every section of `data` and draws it with `strategy`'s skin.
pub fn layout_document(
    strategy: &dyn LayoutStrategy,
    data: &ResumeData,
    canvas: &mut PageCanvas,
) -> Result<(), RenderError> {
    let typo = *strategy.typography();
    strategy.header(&data.personal_info, canvas)?;

    let mut ordinal = 0;
    for section in Section::ORDER {
        if section.is_empty_in(data) {
            continue;
        }

        strategy.section_heading(strategy.section_title(section), ordinal, canvas)?;
        ordinal += 1;

        match section {
            Section::Summary => {
                body_paragraph(&typo, &data.summary, &typo.body, canvas)?;
            }
            Section::Education => {
                for edu in &data.education {
                    strategy.education_item(edu, canvas)?;
                }
            }
            Section::Projects => {
                for project in &data.projects {
                    project_item(&typo, project, canvas)?;
                }
            }
            Section::Experience => {
                for experience in &data.experience {
                    experience_item(&typo, experience, canvas)?;
                }
            }
            Section::Skills => skills_block(&typo, &data.skills, canvas)?,
        }

        canvas.advance(typo.section_gap);
    }

    Ok(())
}

/// Left-aligned paragraph spanning the content width.
pub fn body_paragraph(
    typo: &Typography,
    text: &str,
    style: &TextStyle,
    canvas: &mut PageCanvas,
) -> Result<usize, RenderError> {
    let width = typo.content_width(canvas.size().width);
    canvas.paragraph(text, typo.side_margin, width, style, Align::Left)
}

/// `"{degree} em {field}"`, or whichever half is present.
pub fn degree_line(edu: &Education) -> String {
    match (edu.degree.trim(), edu.field.trim()) {
        ("", field) => field.to_string(),
        (degree, "") => degree.to_string(),
        (degree, field) => format!("{degree} em {field}"),
    }
}

pub fn graduation_label(edu: &Education) -> &str {
    edu.graduation_year.as_deref().unwrap_or(IN_PROGRESS)
}

/// Default education item: bold degree line, then institution, year and GPA.
pub fn education_item(
    typo: &Typography,
    edu: &Education,
    canvas: &mut PageCanvas,
) -> Result<(), RenderError> {
    canvas.ensure_room(typo.title.line_height + typo.body.line_height);
    body_paragraph(typo, &degree_line(edu), &typo.title, canvas)?;

    let mut detail = format!("{} | {}", edu.institution.trim(), graduation_label(edu));
    if let Some(gpa) = edu.gpa.as_deref() {
        detail.push_str(&format!(" | CR: {gpa}"));
    }
    body_paragraph(typo, &detail, &typo.body, canvas)?;

    canvas.advance(typo.item_gap);
    Ok(())
}

pub fn project_item(
    typo: &Typography,
    project: &Project,
    canvas: &mut PageCanvas,
) -> Result<(), RenderError> {
    canvas.ensure_room(typo.title.line_height + typo.body.line_height);
    body_paragraph(typo, &project.name, &typo.title, canvas)?;
    body_paragraph(typo, &project.description, &typo.body, canvas)?;

    if !project.technologies.is_empty() {
        let technologies = format!(
            "Tecnologias: {}",
            project.technologies.join(LIST_SEPARATOR)
        );
        body_paragraph(typo, &technologies, &typo.emphasis, canvas)?;
    }
    if let Some(link) = project.link.as_deref() {
        body_paragraph(typo, link, &typo.emphasis, canvas)?;
    }

    canvas.advance(typo.item_gap);
    Ok(())
}

pub fn experience_item(
    typo: &Typography,
    experience: &Experience,
    canvas: &mut PageCanvas,
) -> Result<(), RenderError> {
    let heading = match (experience.title.trim(), experience.company.trim()) {
        (title, "") => title.to_string(),
        ("", company) => company.to_string(),
        (title, company) => format!("{title} - {company}"),
    };

    canvas.ensure_room(typo.title.line_height + typo.emphasis.line_height);
    body_paragraph(typo, &heading, &typo.title, canvas)?;
    body_paragraph(typo, &experience.duration, &typo.emphasis, canvas)?;

    for bullet in &experience.description {
        body_paragraph(typo, &format!("• {bullet}"), &typo.body, canvas)?;
    }

    canvas.advance(typo.item_gap);
    Ok(())
}

/// Labelled skill categories. A category with no entries is omitted, label included.
pub fn skills_block(
    typo: &Typography,
    skills: &Skills,
    canvas: &mut PageCanvas,
) -> Result<(), RenderError> {
    let categories = [
        ("Técnicas:", &skills.technical),
        ("Ferramentas:", &skills.tools),
        ("Idiomas:", &skills.languages),
    ];
    let width = typo.content_width(canvas.size().width) - typo.skills_indent;

    for (label, values) in categories {
        if values.is_empty() {
            continue;
        }
        canvas.ensure_room(typo.label.line_height + typo.body.line_height);
        body_paragraph(typo, label, &typo.label, canvas)?;
        canvas.paragraph(
            &values.join(LIST_SEPARATOR),
            typo.side_margin + typo.skills_indent,
            width,
            &typo.body,
            Align::Left,
        )?;
        canvas.advance(typo.item_gap / 2.0);
    }
    Ok(())
}
