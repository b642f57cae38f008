//! Projects a `ResumeData` into a self-contained HTML document.
//!
//! One renderer serves every template: all layout differences come from the
//! `LayoutStyle` passed in. Rendering is pure: same input, same bytes.

use crate::models::resume::{
    Education, Experience, PersonalInfo, Project, ResumeData, Skill, SkillCategory,
    MAX_SKILL_LEVEL,
};
use crate::render::dates::date_range;
use crate::render::html::{escape, is_web_link, join_present};
use crate::render::style::{
    Block, CategoryLabel, ContactStyle, GpaStyle, HeaderLayout, Icons, LayoutStyle, RoleTitle,
    SkillDisplay,
};

const BASE_CSS: &str = r#"
@page { size: A4; margin: 0; }
* { box-sizing: border-box; }
body { margin: 0; background: #f3f4f6; font-family: var(--font); color: var(--text); }
.page { width: 210mm; min-height: 297mm; margin: 0 auto; background: var(--page-bg); }
.resume-header { background: var(--header-bg); color: var(--header-text); padding: 28px 36px; }
.header-centered, .header-gradient { text-align: center; }
.header-gradient { border-radius: 0 0 24px 24px; }
.resume-header h1 { margin: 0 0 6px; font-size: 26px; }
.objective { margin: 0 0 10px; font-size: 13px; opacity: 0.8; }
.contact-line { margin: 2px 0; font-size: 13px; }
.contact-row { display: flex; flex-wrap: wrap; gap: 6px 20px; margin-top: 6px; font-size: 13px; }
.header-centered .contact-row, .header-gradient .contact-row { justify-content: center; }
.contact-icon, .contact-label { margin-right: 6px; opacity: 0.75; }
.content { padding: 24px 36px; }
section { margin-bottom: 20px; }
h2 { margin: 0 0 8px; padding-bottom: 2px; font-size: 17px; color: var(--accent); border-bottom: 1px solid var(--rule); }
h3 { margin: 0; font-size: 15px; }
h4 { margin: 0 0 4px; font-size: 13px; }
p { margin: 4px 0; font-size: 13px; }
.entry, .category { margin-bottom: 12px; }
.entry-head, .entry-sub { display: flex; justify-content: space-between; align-items: baseline; gap: 12px; }
.dates, .location { color: var(--muted); font-size: 13px; white-space: nowrap; }
.position { font-style: italic; font-size: 13px; }
.company { color: var(--accent); font-weight: 600; font-size: 13px; }
.entry-number { display: inline-block; width: 22px; height: 22px; margin-right: 8px; border-radius: 50%; background: var(--accent); color: #fff; text-align: center; line-height: 22px; font-size: 12px; }
.summary-text { white-space: pre-line; }
ul { margin: 4px 0; padding-left: 18px; font-size: 13px; }
ul.marked { list-style: none; padding-left: 0; }
.marker { margin-right: 6px; color: var(--accent); }
.pills { display: flex; flex-wrap: wrap; gap: 6px; }
.pill { padding: 2px 10px; border-radius: 999px; font-size: 12px; color: var(--accent); background: color-mix(in srgb, var(--accent) 12%, transparent); }
.pill-intensity { color: #fff; }
.stars { margin-left: 6px; font-size: 10px; color: var(--muted); }
a { color: var(--accent); }
@media print { body { background: none; } .page { margin: 0; } }
"#;

pub fn render_document(data: &ResumeData, style: &LayoutStyle) -> String {
    let mut html = String::with_capacity(16 * 1024);
    let name = data.personal_info.full_name();
    let title = if name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{name} - Resume")
    };

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&title)));
    html.push_str("<style>\n");
    html.push_str(&css_tokens(style));
    html.push_str(BASE_CSS);
    html.push_str("</style>\n</head>\n");
    html.push_str(&format!(
        "<body data-template=\"{}\">\n<main class=\"page\">\n",
        style.kind.as_str()
    ));

    render_header(&mut html, data, style);

    html.push_str("<div class=\"content\">\n");
    for block in style.order {
        let section = match block {
            Block::Summary => summary_block(data, style),
            Block::Experience => experience_block(&data.experience, style),
            Block::Education => education_block(&data.education, style),
            Block::Projects => projects_block(&data.projects, style),
            Block::Skills => skills_block(&data.skills, style),
        };
        if let Some(body) = section {
            html.push_str(&format!(
                "<section class=\"section-{}\">\n<h2>{}</h2>\n",
                block_class(block),
                escape(style.headings.for_block(block))
            ));
            html.push_str(&body);
            html.push_str("</section>\n");
        }
    }
    html.push_str("</div>\n</main>\n</body>\n</html>\n");
    html
}

fn css_tokens(style: &LayoutStyle) -> String {
    let p = &style.palette;
    format!(
        ":root {{ --font: {}; --text: {}; --muted: {}; --accent: {}; --rule: {}; \
         --header-text: {}; --header-bg: {}; --page-bg: {}; }}\n",
        style.font_stack,
        p.text,
        p.muted,
        p.accent,
        p.rule,
        p.header_text,
        p.header_background,
        p.page_background
    )
}

fn block_class(block: Block) -> &'static str {
    match block {
        Block::Summary => "summary",
        Block::Experience => "experience",
        Block::Education => "education",
        Block::Projects => "projects",
        Block::Skills => "skills",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

fn render_header(html: &mut String, data: &ResumeData, style: &LayoutStyle) {
    let layout = match style.header {
        HeaderLayout::Centered => "centered",
        HeaderLayout::Banner => "banner",
        HeaderLayout::Gradient => "gradient",
        HeaderLayout::Terminal => "terminal",
    };
    let info = &data.personal_info;

    html.push_str(&format!("<header class=\"resume-header header-{layout}\">\n"));
    html.push_str(&format!("<h1>{}</h1>\n", escape(&info.full_name())));

    let objective = data.summary.career_objective.trim();
    if style.header == HeaderLayout::Terminal && !objective.is_empty() {
        html.push_str(&format!("<p class=\"objective\">{}</p>\n", escape(objective)));
    }

    let location = location_line(info, style.location_with_zip);
    match style.contact {
        ContactStyle::Lines => contact_lines(html, info, &location),
        ContactStyle::Icons(icons) => contact_icons(html, info, &location, &icons),
        ContactStyle::Labelled => contact_labelled(html, info, &location),
    }
    html.push_str("</header>\n");
}

fn location_line(info: &PersonalInfo, with_zip: bool) -> String {
    let city_state = join_present(&[&info.city, &info.state], ", ");
    if with_zip {
        join_present(&[&city_state, &info.zip_code], " ")
    } else {
        city_state
    }
}

fn contact_lines(html: &mut String, info: &PersonalInfo, location: &str) {
    let linkedin = labelled("LinkedIn", &info.linkedin);
    let website = labelled("Website", &info.website);
    for line in [
        location.to_string(),
        join_present(&[&info.phone, &info.email], " | "),
        join_present(&[&linkedin, &website], " | "),
    ] {
        if !line.is_empty() {
            html.push_str(&format!("<p class=\"contact-line\">{}</p>\n", escape(&line)));
        }
    }
}

fn labelled(label: &str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        String::new()
    } else {
        format!("{label}: {value}")
    }
}

fn contact_icons(html: &mut String, info: &PersonalInfo, location: &str, icons: &Icons) {
    let mut items: Vec<(&str, &str)> = Vec::new();
    match (icons.email, icons.phone) {
        (Some(email_icon), Some(phone_icon)) => {
            items.push((email_icon, info.email.as_str()));
            items.push((phone_icon, info.phone.as_str()));
        }
        _ => {
            let line = join_present(&[&info.email, &info.phone], " | ");
            if !line.is_empty() {
                html.push_str(&format!("<p class=\"contact-line\">{}</p>\n", escape(&line)));
            }
        }
    }
    items.push((icons.location, location));
    items.push((icons.linkedin, info.linkedin.as_str()));
    items.push((icons.website, info.website.as_str()));

    contact_row(html, &items, "contact-icon");
}

fn contact_labelled(html: &mut String, info: &PersonalInfo, location: &str) {
    let items = [
        ("Email:", info.email.as_str()),
        ("Phone:", info.phone.as_str()),
        ("Location:", location),
        ("LinkedIn:", info.linkedin.as_str()),
        ("Website:", info.website.as_str()),
    ];
    contact_row(html, &items, "contact-label");
}

fn contact_row(html: &mut String, items: &[(&str, &str)], prefix_class: &str) {
    let present: Vec<_> = items.iter().filter(|(_, v)| !v.trim().is_empty()).collect();
    if present.is_empty() {
        return;
    }
    html.push_str("<div class=\"contact-row\">\n");
    for (prefix, value) in present {
        html.push_str(&format!(
            "<span><span class=\"{prefix_class}\">{}</span>{}</span>\n",
            escape(prefix),
            escape(value.trim())
        ));
    }
    html.push_str("</div>\n");
}

// ────────────────────────────────────────────────────────────────────────────
// Sections. Each returns None when the section has nothing to show.
// ────────────────────────────────────────────────────────────────────────────

fn summary_block(data: &ResumeData, _style: &LayoutStyle) -> Option<String> {
    let text = data.summary.professional_summary.trim();
    if text.is_empty() {
        return None;
    }
    Some(format!("<p class=\"summary-text\">{}</p>\n", escape(text)))
}

fn experience_block(entries: &[Experience], style: &LayoutStyle) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let mut out = String::new();
    for (index, exp) in entries.iter().enumerate() {
        let range = date_range(&exp.start_date, &exp.end_date, exp.current);
        out.push_str("<div class=\"entry\">\n<div class=\"entry-head\">\n");
        out.push_str("<h3>");
        if style.numbered_experience {
            out.push_str(&format!("<span class=\"entry-number\">{}</span>", index + 1));
        }
        let (title, dates) = match style.role_title {
            RoleTitle::CompanyFirst => (exp.company.trim().to_string(), range),
            RoleTitle::PositionFirst => (exp.position.trim().to_string(), range),
            RoleTitle::Combined => (
                join_present(&[&exp.company, &exp.position], " - "),
                join_present(&[&range, &exp.location], " | "),
            ),
        };
        out.push_str(&format!(
            "{}</h3>\n<span class=\"dates\">{}</span>\n</div>\n",
            escape(&title),
            escape(&dates)
        ));

        match style.role_title {
            RoleTitle::CompanyFirst => entry_sub(&mut out, "position", &exp.position, &exp.location),
            RoleTitle::PositionFirst => entry_sub(&mut out, "company", &exp.company, &exp.location),
            RoleTitle::Combined => {}
        }

        paragraph(&mut out, &exp.description);
        bullet_list(&mut out, &exp.bullets, style.experience_marker);
        out.push_str("</div>\n");
    }
    Some(out)
}

fn education_block(entries: &[Education], style: &LayoutStyle) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let mut out = String::new();
    for edu in entries {
        out.push_str("<div class=\"entry\">\n<div class=\"entry-head\">\n");
        out.push_str(&format!(
            "<h3>{}</h3>\n<span class=\"dates\">{}</span>\n</div>\n",
            escape(edu.institution.trim()),
            escape(&date_range(&edu.start_date, &edu.end_date, false))
        ));

        let mut degree = join_present(&[&edu.degree, &edu.field], ", ");
        let gpa = edu.gpa.trim();
        if style.gpa == GpaStyle::Inline && !gpa.is_empty() {
            degree = join_present(&[&degree, &format!("(GPA: {gpa})")], " ");
        }
        entry_sub(&mut out, "position", &degree, &edu.location);

        if style.gpa == GpaStyle::Line && !gpa.is_empty() {
            out.push_str(&format!("<p class=\"gpa\">GPA: {}</p>\n", escape(gpa)));
        }
        paragraph(&mut out, &edu.description);
        out.push_str("</div>\n");
    }
    Some(out)
}

fn projects_block(entries: &[Project], style: &LayoutStyle) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let mut out = String::new();
    for project in entries {
        out.push_str("<div class=\"entry\">\n<div class=\"entry-head\">\n");
        out.push_str(&format!(
            "<h3>{}</h3>\n<span class=\"dates\">{}</span>\n</div>\n",
            escape(project.title.trim()),
            escape(&date_range(&project.start_date, &project.end_date, false))
        ));

        let link = project.link.trim();
        if !link.is_empty() {
            let shown = if is_web_link(link) {
                format!("<a href=\"{0}\">{0}</a>", escape(link))
            } else {
                escape(link)
            };
            out.push_str(&format!("<p class=\"project-link\">Link: {shown}</p>\n"));
        }
        paragraph(&mut out, &project.description);
        bullet_list(&mut out, &project.bullets, style.project_marker);
        out.push_str("</div>\n");
    }
    Some(out)
}

fn skills_block(categories: &[SkillCategory], style: &LayoutStyle) -> Option<String> {
    if categories.is_empty() {
        return None;
    }
    let mut out = String::new();
    for category in categories {
        let name = category.name.trim();
        let label = match style.category_label {
            CategoryLabel::Colon => format!("{name}:"),
            CategoryLabel::Plain => name.to_string(),
            CategoryLabel::Comment => format!("/* {name} */"),
        };
        out.push_str(&format!(
            "<div class=\"category\">\n<h4>{}</h4>\n",
            escape(&label)
        ));
        match style.skills {
            SkillDisplay::CommaList => {
                let names: Vec<&str> = category.skills.iter().map(|s| s.name.trim()).collect();
                out.push_str(&format!(
                    "<p class=\"skill-list\">{}</p>\n",
                    escape(&names.join(", "))
                ));
            }
            SkillDisplay::Pills | SkillDisplay::IntensityPills | SkillDisplay::Stars => {
                out.push_str("<div class=\"pills\">\n");
                for skill in &category.skills {
                    out.push_str(&skill_pill(skill, style.skills));
                }
                out.push_str("</div>\n");
            }
        }
        out.push_str("</div>\n");
    }
    Some(out)
}

fn skill_pill(skill: &Skill, display: SkillDisplay) -> String {
    let name = escape(skill.name.trim());
    let label = skill.level_label();
    match display {
        SkillDisplay::IntensityPills => format!(
            "<span class=\"pill pill-intensity\" title=\"{label}\" style=\"background-color: \
             color-mix(in srgb, var(--accent) {}%, transparent)\">{name}</span>\n",
            intensity_percent(skill.level)
        ),
        SkillDisplay::Stars => format!(
            "<span class=\"pill\" title=\"{label}\">{name}<span class=\"stars\">{}</span></span>\n",
            star_rating(skill.level)
        ),
        _ => format!("<span class=\"pill\" title=\"{label}\">{name}</span>\n"),
    }
}

/// Level 1 → 20%, level 5 → 100%.
pub fn intensity_percent(level: u8) -> u32 {
    u32::from(crate::models::resume::clamp_level(level)) * 20
}

/// `★★★★☆` for level 4.
pub fn star_rating(level: u8) -> String {
    let filled = crate::models::resume::clamp_level(level);
    let mut stars = "★".repeat(filled as usize);
    stars.push_str(&"☆".repeat((MAX_SKILL_LEVEL - filled) as usize));
    stars
}

// ────────────────────────────────────────────────────────────────────────────
// Shared fragments
// ────────────────────────────────────────────────────────────────────────────

fn entry_sub(out: &mut String, class: &str, left: &str, location: &str) {
    let left = left.trim();
    let location = location.trim();
    if left.is_empty() && location.is_empty() {
        return;
    }
    out.push_str(&format!(
        "<div class=\"entry-sub\">\n<span class=\"{class}\">{}</span>\n<span class=\"location\">{}</span>\n</div>\n",
        escape(left),
        escape(location)
    ));
}

fn paragraph(out: &mut String, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", escape(text)));
    }
}

fn bullet_list(out: &mut String, bullets: &[String], marker: Option<&str>) {
    let bullets: Vec<&str> = bullets
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .collect();
    if bullets.is_empty() {
        return;
    }
    match marker {
        None => {
            out.push_str("<ul>\n");
            for bullet in bullets {
                out.push_str(&format!("<li>{}</li>\n", escape(bullet)));
            }
        }
        Some(marker) => {
            out.push_str("<ul class=\"marked\">\n");
            for bullet in bullets {
                out.push_str(&format!(
                    "<li><span class=\"marker\">{}</span>{}</li>\n",
                    escape(marker),
                    escape(bullet)
                ));
            }
        }
    }
    out.push_str("</ul>\n");
}
