use crate::models::resume::{ResumeData, TemplateKind};
use crate::render::document::render_document;
use crate::render::style::{LayoutStyle, CLASSIC, CREATIVE, MODERN, TECHNICAL};

pub fn style_for(kind: TemplateKind) -> &'static LayoutStyle {
    match kind {
        TemplateKind::Classic => &CLASSIC,
        TemplateKind::Modern => &MODERN,
        TemplateKind::Creative => &CREATIVE,
        TemplateKind::Technical => &TECHNICAL,
    }
}

/// Renders the aggregate with its selected template.
pub fn preview(data: &ResumeData) -> String {
    render_document(data, style_for(data.selected_template))
}
