//! Layout style table. Each template is one `LayoutStyle` value; the
//! document renderer reads everything template-specific from here.

use crate::models::resume::TemplateKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
}

#[derive(Debug, Clone, Copy)]
pub struct Headings {
    pub summary: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub projects: &'static str,
    pub skills: &'static str,
}

impl Headings {
    pub fn for_block(&self, block: Block) -> &'static str {
        match block {
            Block::Summary => self.summary,
            Block::Experience => self.experience,
            Block::Education => self.education,
            Block::Projects => self.projects,
            Block::Skills => self.skills,
        }
    }
}

/// CSS colour tokens.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub rule: &'static str,
    pub header_text: &'static str,
    /// Any CSS background value, gradients included.
    pub header_background: &'static str,
    pub page_background: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// Name and contact lines centred over a plain page.
    Centered,
    /// Full-width coloured band.
    Banner,
    /// Rounded gradient band with centred contents.
    Gradient,
    /// Dark band with the career objective under the name.
    Terminal,
}

#[derive(Debug, Clone, Copy)]
pub struct Icons {
    /// When `None`, email and phone share one `email | phone` line.
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub location: &'static str,
    pub linkedin: &'static str,
    pub website: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum ContactStyle {
    /// `city, state zip` / `phone | email` / `LinkedIn: … | Website: …`
    Lines,
    Icons(Icons),
    /// `Email:`, `Phone:` … label/value pairs.
    Labelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillDisplay {
    CommaList,
    Pills,
    /// Pill background strength follows the skill level.
    IntensityPills,
    /// ★ per level, ☆ for the remainder up to five.
    Stars,
}

/// How the first line of an experience entry reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTitle {
    /// Company bold, position beneath in italics.
    CompanyFirst,
    PositionFirst,
    /// `Company - Position` on one line.
    Combined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryLabel {
    /// `Languages:`
    Colon,
    Plain,
    /// `/* Languages */`
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpaStyle {
    /// `GPA: 3.8` on its own line.
    Line,
    /// `(GPA: 3.8)` after the degree.
    Inline,
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutStyle {
    pub kind: TemplateKind,
    pub order: [Block; 5],
    pub headings: Headings,
    pub font_stack: &'static str,
    pub palette: Palette,
    pub header: HeaderLayout,
    pub contact: ContactStyle,
    pub skills: SkillDisplay,
    pub role_title: RoleTitle,
    pub category_label: CategoryLabel,
    pub gpa: GpaStyle,
    /// Marker before each experience bullet; `None` uses list discs.
    pub experience_marker: Option<&'static str>,
    pub project_marker: Option<&'static str>,
    pub numbered_experience: bool,
    /// Include the zip code in the location line.
    pub location_with_zip: bool,
}

pub const CLASSIC: LayoutStyle = LayoutStyle {
    kind: TemplateKind::Classic,
    order: [
        Block::Summary,
        Block::Experience,
        Block::Education,
        Block::Projects,
        Block::Skills,
    ],
    headings: Headings {
        summary: "Summary",
        experience: "Professional Experience",
        education: "Education",
        projects: "Projects",
        skills: "Skills",
    },
    font_stack: "Georgia, 'Times New Roman', Times, serif",
    palette: Palette {
        text: "#1f2937",
        muted: "#4b5563",
        accent: "#1f2937",
        rule: "#d1d5db",
        header_text: "#1f2937",
        header_background: "transparent",
        page_background: "#ffffff",
    },
    header: HeaderLayout::Centered,
    contact: ContactStyle::Lines,
    skills: SkillDisplay::CommaList,
    role_title: RoleTitle::CompanyFirst,
    category_label: CategoryLabel::Colon,
    gpa: GpaStyle::Line,
    experience_marker: None,
    project_marker: None,
    numbered_experience: false,
    location_with_zip: true,
};

pub const MODERN: LayoutStyle = LayoutStyle {
    kind: TemplateKind::Modern,
    order: [
        Block::Summary,
        Block::Experience,
        Block::Education,
        Block::Skills,
        Block::Projects,
    ],
    headings: Headings {
        summary: "Professional Summary",
        experience: "Experience",
        education: "Education",
        projects: "Projects",
        skills: "Skills",
    },
    font_stack: "'Inter', 'Helvetica Neue', Arial, sans-serif",
    palette: Palette {
        text: "#1f2937",
        muted: "#4b5563",
        accent: "#2563eb",
        rule: "#bfdbfe",
        header_text: "#ffffff",
        header_background: "#2563eb",
        page_background: "#ffffff",
    },
    header: HeaderLayout::Banner,
    contact: ContactStyle::Icons(Icons {
        email: None,
        phone: None,
        location: "📍",
        linkedin: "🔗",
        website: "🌐",
    }),
    skills: SkillDisplay::Pills,
    role_title: RoleTitle::PositionFirst,
    category_label: CategoryLabel::Plain,
    gpa: GpaStyle::Line,
    experience_marker: None,
    project_marker: None,
    numbered_experience: false,
    location_with_zip: false,
};

pub const CREATIVE: LayoutStyle = LayoutStyle {
    kind: TemplateKind::Creative,
    order: [
        Block::Summary,
        Block::Experience,
        Block::Education,
        Block::Skills,
        Block::Projects,
    ],
    headings: Headings {
        summary: "About Me",
        experience: "Experience",
        education: "Education",
        projects: "Projects",
        skills: "Skills",
    },
    font_stack: "'Poppins', 'Helvetica Neue', Arial, sans-serif",
    palette: Palette {
        text: "#1f2937",
        muted: "#6b7280",
        accent: "#7c3aed",
        rule: "#ede9fe",
        header_text: "#ffffff",
        header_background: "linear-gradient(135deg, #7c3aed 0%, #db2777 100%)",
        page_background: "linear-gradient(135deg, #faf5ff 0%, #ffffff 100%)",
    },
    header: HeaderLayout::Gradient,
    contact: ContactStyle::Icons(Icons {
        email: Some("✉"),
        phone: Some("📱"),
        location: "📍",
        linkedin: "in",
        website: "🌐",
    }),
    skills: SkillDisplay::IntensityPills,
    role_title: RoleTitle::PositionFirst,
    category_label: CategoryLabel::Plain,
    gpa: GpaStyle::Line,
    experience_marker: Some("✓"),
    project_marker: Some("•"),
    numbered_experience: true,
    location_with_zip: false,
};

pub const TECHNICAL: LayoutStyle = LayoutStyle {
    kind: TemplateKind::Technical,
    order: [
        Block::Skills,
        Block::Summary,
        Block::Experience,
        Block::Projects,
        Block::Education,
    ],
    headings: Headings {
        summary: "// Professional Summary",
        experience: "// Professional Experience",
        education: "// Education",
        projects: "// Projects",
        skills: "// Technical Skills",
    },
    font_stack: "'JetBrains Mono', 'Fira Code', Menlo, Consolas, monospace",
    palette: Palette {
        text: "#1f2937",
        muted: "#6b7280",
        accent: "#374151",
        rule: "#e5e7eb",
        header_text: "#ffffff",
        header_background: "#1f2937",
        page_background: "#ffffff",
    },
    header: HeaderLayout::Terminal,
    contact: ContactStyle::Labelled,
    skills: SkillDisplay::Stars,
    role_title: RoleTitle::Combined,
    category_label: CategoryLabel::Comment,
    gpa: GpaStyle::Inline,
    experience_marker: None,
    project_marker: None,
    numbered_experience: false,
    location_with_zip: false,
};

pub const ALL_STYLES: [&LayoutStyle; 4] = [&CLASSIC, &MODERN, &CREATIVE, &TECHNICAL];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_orders_each_block_once() {
        for style in ALL_STYLES {
            for block in [
                Block::Summary,
                Block::Experience,
                Block::Education,
                Block::Projects,
                Block::Skills,
            ] {
                let count = style.order.iter().filter(|b| **b == block).count();
                assert_eq!(count, 1, "{:?} must place {block:?} once", style.kind);
            }
        }
    }

    #[test]
    fn test_style_table_covers_every_template() {
        let kinds: Vec<_> = ALL_STYLES.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, TemplateKind::ALL.to_vec());
    }
}
