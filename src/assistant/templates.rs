//! Answer generators that interpolate the knowledge record. Each function
//! renders one intent; lists always follow the stored order.

use foliobot_model::{Experience, ExperienceKind, KnowledgeBase, Project};

use crate::utils::join;

pub fn about_subject(kb: &KnowledgeBase) -> String {
    let p = &kb.personal;
    format!(
        "**{}** is a passionate {}\n\n{}\n\n\
         • **Mission**: {}\n\
         • **Passion**: {}\n\
         • **Location**: {}\n\n\
         She's currently mastering the intersection of AI, machine learning, and real-world \
         problem solving!",
        p.name, p.profession, p.description, p.goal, p.passion, p.location
    )
}

pub fn project_tour(kb: &KnowledgeBase) -> String {
    let lines = kb.projects.iter().map(|p| {
        let hook = p.highlights.first().unwrap_or(&p.description);
        format!("• **{}** - {}", p.name, hook)
    });
    format!(
        "Zabiha has built some incredible projects! Here are her standout creations:\n\n{}\n\n\
         Each project showcases a different side of her expertise - from machine learning and \
         data science to AI integration and web development. Would you like detailed \
         information about any specific project?",
        join(lines, "\n")
    )
}

pub fn project_list(kb: &KnowledgeBase) -> String {
    let lines = kb
        .projects
        .iter()
        .map(|p| format!("• **{}**: {}", p.name, p.description));
    format!(
        "Zabiha has built some incredible projects!\n\n{}\n\n\
         Each project demonstrates different aspects of her expertise. Try asking about \
         'fraud detection', 'JARVIS', 'Gemini chatbot', or 'finance tracker'!",
        join(lines, "\n\n")
    )
}

pub fn experience_list(kb: &KnowledgeBase) -> String {
    let lines = kb
        .experience
        .iter()
        .map(|e| format!("• **{}** at {} ({})", e.role, e.company, e.duration));
    format!(
        "Zabiha has gained incredible experience through {} diverse internships!\n\n{}\n\n\
         Each role taught her different aspects of technology - from AI development to web \
         creation. Want to know more about any specific internship? Just ask!",
        kb.experience.len(),
        join(lines, "\n")
    )
}

pub fn tech_stack(kb: &KnowledgeBase) -> String {
    let s = &kb.skills;
    format!(
        "Zabiha's technical arsenal is impressive!\n\n\
         **Programming Languages**: {}\n\
         **AI/ML Stack**: {}\n\
         **Development Tools**: {}\n\
         **Web Technologies**: {}\n\n\
         She's constantly learning and expanding her technical expertise!",
        join(s.languages.all(), ", "),
        join(s.ai_ml.top(), ", "),
        join(s.tools_deployment.top(), ", "),
        join(s.frontend_backend.all(), ", ")
    )
}

pub fn skills_overview(kb: &KnowledgeBase) -> String {
    let s = &kb.skills;
    format!(
        "Zabiha has expertise across multiple domains:\n\n\
         • **Programming Languages**: {}\n\n\
         • **AI/ML Technologies**: {}\n\n\
         • **Tools & Deployment**: {}\n\n\
         • **Frontend/Backend**: {}",
        join(s.languages.top(), ", "),
        join(s.ai_ml.top(), ", "),
        join(s.tools_deployment.top(), ", "),
        join(s.frontend_backend.all(), ", ")
    )
}

pub fn career_goals(kb: &KnowledgeBase) -> String {
    format!(
        "Zabiha's future is incredibly exciting!\n\n\
         **Primary goal**: {}\n\n\
         • **Vision**: creating intelligent AI systems that solve complex real-world problems\n\
         • **Career path**: becoming a leading AI/ML engineer in the tech industry\n\
         • **Impact**: building technology that makes a positive difference in people's lives\n\n\
         She's well-positioned for success with her strong foundation and continuous learning \
         mindset!",
        kb.personal.goal
    )
}

pub fn future_focus(kb: &KnowledgeBase) -> String {
    format!(
        "Zabiha is focused on {}. She's passionate about pushing the boundaries of what's \
         possible with artificial intelligence and aims to create intelligent systems that \
         solve real-world problems. Her diverse experience across AI, ML, and web development \
         positions her well for a successful tech career.",
        kb.personal.goal
    )
}

pub fn ai_internship(kb: &KnowledgeBase) -> String {
    internship(kb, ExperienceKind::Ai)
}

pub fn ml_internship(kb: &KnowledgeBase) -> String {
    match kb.experience_of(ExperienceKind::Ml) {
        Some(e) => format!(
            "At {} ({}), she worked as an {}:\n\n{}\n\n\
             Key achievement: 95% accuracy fraud detection model!\nTechnologies: {}",
            e.company,
            e.duration,
            e.role,
            achievement_bullets(e),
            join(&e.technologies, ", ")
        ),
        None => no_internship_on_record(),
    }
}

pub fn web_internship(kb: &KnowledgeBase) -> String {
    internship(kb, ExperienceKind::Web)
}

fn internship(kb: &KnowledgeBase, kind: ExperienceKind) -> String {
    match kb.experience_of(kind) {
        Some(e) => format!(
            "At {} ({}), Zabiha worked as a {} where she:\n\n{}\n\nTechnologies used: {}",
            e.company,
            e.duration,
            e.role,
            achievement_bullets(e),
            join(&e.technologies, ", ")
        ),
        None => no_internship_on_record(),
    }
}

fn achievement_bullets(e: &Experience) -> String {
    join(e.achievements.iter().map(|a| format!("• {a}")), "\n")
}

fn no_internship_on_record() -> String {
    String::from(
        "I don't have that internship on record, but I can tell you about her other \
         experience - just ask!",
    )
}

pub fn fraud_detection(kb: &KnowledgeBase) -> String {
    match kb.project_named("Fraud Detection") {
        Some(p) => format!(
            "**{}** is one of her standout projects! {}\n\nKey highlights:\n{}\n\n{}",
            p.name,
            p.description,
            highlight_bullets(p),
            project_links(p)
        ),
        None => project_list(kb),
    }
}

pub fn jarvis(kb: &KnowledgeBase) -> String {
    match kb.project_named("JARVIS") {
        Some(p) => format!(
            "**{}** is her most advanced project! {}\n\nFeatures:\n{}\n\n{}\n\
             This showcases her expertise in AI system development!",
            p.name,
            p.description,
            highlight_bullets(p),
            project_links(p)
        ),
        None => project_list(kb),
    }
}

pub fn gemini_chatbot(kb: &KnowledgeBase) -> String {
    match kb.project_named("Gemini") {
        Some(p) => format!(
            "**{}** demonstrates her API integration skills! {}\n\nFeatures:\n{}\n\n{}",
            p.name,
            p.description,
            highlight_bullets(p),
            project_links(p)
        ),
        None => project_list(kb),
    }
}

fn highlight_bullets(p: &Project) -> String {
    join(p.highlights.iter().map(|h| format!("• {h}")), "\n")
}

fn project_links(p: &Project) -> String {
    let mut lines = vec![format!("Technologies: {}", join(&p.technologies, ", "))];
    if let Some(demo) = &p.demo {
        lines.push(format!("Live demo: {demo}"));
    }
    if let Some(github) = &p.github {
        lines.push(format!("Source: {github}"));
    }
    join(lines, "\n")
}

pub fn certifications(kb: &KnowledgeBase) -> String {
    let lines = kb
        .certifications
        .iter()
        .map(|c| format!("• **{}** ({})\n  {}", c.title, c.issuer, c.description));
    format!(
        "Zabiha has earned several industry certifications:\n\n{}",
        join(lines, "\n\n")
    )
}

pub fn contact(kb: &KnowledgeBase) -> String {
    let c = &kb.contact;
    format!(
        "You can connect with Zabiha through:\n\n\
         • Email: {}\n\
         • LinkedIn: {}\n\
         • GitHub: {}\n\n\
         She's always open to discussing AI/ML projects, collaboration opportunities, or \
         tech conversations!",
        c.email, c.linkedin, c.github
    )
}

pub fn contact_details(kb: &KnowledgeBase) -> String {
    let c = &kb.contact;
    format!(
        "Ready to connect with Zabiha? Here's how!\n\n\
         • **Email**: {}\n\
         • **LinkedIn**: {}\n\
         • **GitHub**: {}\n\n\
         Best for: project collaborations, job opportunities, tech discussions, mentorship.\n\
         Tip: mention specific projects or technologies you're interested in!",
        c.email, c.linkedin, c.github
    )
}

pub fn stats(kb: &KnowledgeBase) -> String {
    let s = &kb.stats;
    format!(
        "Here are some impressive numbers about Zabiha:\n\n\
         • **{}** projects completed\n\
         • **{}** technologies mastered\n\
         • **{}** problems solved\n\
         • **{}** hours of coding daily\n\n\
         Her dedication to continuous learning is evident in these numbers!",
        s.projects, s.technologies, s.problems_solved, s.coding_hours_daily
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certifications_lists_every_issuer() {
        let kb = KnowledgeBase::example();
        let answer = certifications(&kb);
        for cert in &kb.certifications {
            assert!(answer.contains(&cert.issuer));
            assert!(answer.contains(&cert.title));
        }
    }

    #[test]
    fn stats_interpolates_every_counter() {
        let kb = KnowledgeBase::example();
        let answer = stats(&kb);
        assert!(answer.contains("**10** projects"));
        assert!(answer.contains("**15** technologies"));
        assert!(answer.contains("**50** problems"));
        assert!(answer.contains("**4** hours"));
    }

    #[test]
    fn project_links_skip_missing_urls() {
        let kb = KnowledgeBase::example();
        let tracker = kb.project_named("Finance Tracker").expect("tracker");
        let links = project_links(tracker);
        assert!(links.contains("Source: "));
        assert!(!links.contains("Live demo"));
    }

    #[test]
    fn internship_answer_survives_missing_entry() {
        let mut kb = KnowledgeBase::example();
        kb.experience.clear();
        assert!(!ai_internship(&kb).is_empty());
        assert!(!ml_internship(&kb).is_empty());
    }
}
