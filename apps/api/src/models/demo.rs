//! Canned sample resume used by the "try the demo" flow.

use super::resume::{
    Education, Experience, PersonalInfo, Project, ResumeData, Skill, SkillCategory, Summary,
    TemplateKind,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(id: &str, name: &str, level: u8) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        level,
    }
}

pub fn demo_resume() -> ResumeData {
    ResumeData {
        personal_info: PersonalInfo {
            first_name: "Alex".to_string(),
            last_name: "Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            address: "123 Main Street".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip_code: "94102".to_string(),
            linkedin: "linkedin.com/in/alexjohnson".to_string(),
            website: "alexjohnson.dev".to_string(),
        },
        education: vec![Education {
            id: "edu-1".to_string(),
            institution: "University of California, Berkeley".to_string(),
            degree: "Bachelor of Science".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2018-09".to_string(),
            end_date: "2022-05".to_string(),
            location: "Berkeley, CA".to_string(),
            gpa: "3.8/4.0".to_string(),
            description: "Focus on Machine Learning and Data Structures".to_string(),
        }],
        experience: vec![
            Experience {
                id: "exp-1".to_string(),
                company: "Tech Innovations Inc.".to_string(),
                position: "Software Engineer".to_string(),
                start_date: "2022-06".to_string(),
                end_date: String::new(),
                location: "San Francisco, CA".to_string(),
                current: true,
                description: "Full-stack development of client-facing applications".to_string(),
                bullets: strings(&[
                    "Developed and maintained RESTful APIs for customer portal serving 50,000+ users",
                    "Improved application loading time by 40% through code optimization",
                    "Collaborated with UX team to redesign interface resulting in 25% increase in user satisfaction",
                ]),
            },
            Experience {
                id: "exp-2".to_string(),
                company: "Digital Solutions LLC".to_string(),
                position: "Software Developer Intern".to_string(),
                start_date: "2021-05".to_string(),
                end_date: "2021-08".to_string(),
                location: "San Jose, CA".to_string(),
                current: false,
                description: "Summer internship focused on front-end development".to_string(),
                bullets: strings(&[
                    "Built responsive UI components using React and TypeScript",
                    "Participated in daily stand-ups and bi-weekly sprint planning",
                    "Implemented automated testing improving code coverage by 15%",
                ]),
            },
        ],
        projects: vec![Project {
            id: "proj-1".to_string(),
            title: "Personal Portfolio Website".to_string(),
            link: "github.com/alexj/portfolio".to_string(),
            start_date: "2022-01".to_string(),
            end_date: "2022-02".to_string(),
            description: "Responsive portfolio website built with React and Tailwind CSS"
                .to_string(),
            bullets: strings(&[
                "Implemented light/dark mode with context API",
                "Integrated contact form with email service",
                "Optimized for all device sizes with responsive design",
            ]),
        }],
        skills: vec![
            SkillCategory {
                id: "cat-1".to_string(),
                name: "Programming Languages".to_string(),
                skills: vec![
                    skill("skill-1", "JavaScript", 5),
                    skill("skill-2", "TypeScript", 4),
                    skill("skill-3", "Python", 4),
                    skill("skill-4", "Java", 3),
                ],
            },
            SkillCategory {
                id: "cat-2".to_string(),
                name: "Frameworks & Libraries".to_string(),
                skills: vec![
                    skill("skill-5", "React", 5),
                    skill("skill-6", "Node.js", 4),
                    skill("skill-7", "Express", 4),
                    skill("skill-8", "TailwindCSS", 5),
                ],
            },
        ],
        summary: Summary {
            professional_summary: "Results-driven Software Engineer with a strong foundation in \
                full-stack development. Passionate about creating efficient, user-friendly \
                applications with clean, maintainable code. Experienced in agile environments \
                and collaborative teamwork."
                .to_string(),
            career_objective: "Seeking a challenging position in a forward-thinking technology \
                company where I can leverage my skills in software development to create \
                innovative solutions and grow as a professional."
                .to_string(),
        },
        selected_template: TemplateKind::Modern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_satisfies_aggregate_invariants() {
        let demo = demo_resume();
        assert_eq!(demo.clone().normalized(), demo, "demo must already be normalized");
        assert!(demo.experience.iter().any(|e| e.current && e.end_date.is_empty()));
    }

    #[test]
    fn test_demo_ids_unique_per_list() {
        let demo = demo_resume();
        let mut skill_ids: Vec<_> = demo
            .skills
            .iter()
            .flat_map(|c| c.skills.iter().map(|s| s.id.as_str()))
            .collect();
        let total = skill_ids.len();
        skill_ids.sort();
        skill_ids.dedup();
        assert_eq!(skill_ids.len(), total);
    }

    #[test]
    fn test_demo_uses_modern_template() {
        assert_eq!(demo_resume().selected_template, TemplateKind::Modern);
    }
}
