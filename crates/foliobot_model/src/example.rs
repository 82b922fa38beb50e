//! Built-in knowledge record. Written out as the default `knowledge.yaml`
//! when none exists yet, so a fresh install answers questions immediately.

use crate::{
    Certification, Contact, Experience, ExperienceKind, KnowledgeBase, Personal, Project,
    ProjectKind, SkillTier, Skills, Stats,
};

impl KnowledgeBase {
    pub fn example() -> Self {
        KnowledgeBase {
            personal: Personal {
                name: "Zabiha Muskan K".into(),
                profession: "AI/ML Engineer & Final-year CSE Student".into(),
                location: "India".into(),
                passion: "Artificial Intelligence, Machine Learning, and problem-solving".into(),
                goal: "Building intelligent AI systems, AI agents, and mastering ML & DSA \
                       for real-world tech challenges"
                    .into(),
                description: "Final-year CSE student with a passion for Artificial \
                              Intelligence and problem-solving. Focused on building \
                              intelligent AI systems, AI agents, and practicing ML & DSA to \
                              prepare for real-world tech challenges."
                    .into(),
            },
            experience: vec![
                Experience {
                    role: "AI Intern".into(),
                    company: "SIIT Technologies".into(),
                    duration: "July 2025 - August 2025".into(),
                    kind: ExperienceKind::Ai,
                    achievements: strings(&[
                        "Built 5+ AI-powered applications using cutting-edge APIs and modern development frameworks",
                        "Mastered advanced prompt engineering techniques for optimal AI model performance",
                        "Designed and implemented intelligent AI agents for automated decision-making systems",
                    ]),
                    technologies: strings(&[
                        "AI Development",
                        "API Integration",
                        "Prompt Engineering",
                        "Agent Design",
                    ]),
                },
                Experience {
                    role: "ML & Data Science Intern".into(),
                    company: "Zaalima Development".into(),
                    duration: "June 2025 - August 2025".into(),
                    kind: ExperienceKind::Ml,
                    achievements: strings(&[
                        "Mastered advanced data manipulation techniques using Pandas and NumPy for large-scale datasets",
                        "Created comprehensive visualizations using Matplotlib and Seaborn for actionable insights",
                        "Developed and deployed a fraud detection model achieving 95% accuracy",
                    ]),
                    technologies: strings(&[
                        "Machine Learning",
                        "Data Science",
                        "Python",
                        "Model Deployment",
                    ]),
                },
                Experience {
                    role: "Web Developer Intern".into(),
                    company: "Oasis InfoByte".into(),
                    duration: "May 2024 - June 2024".into(),
                    kind: ExperienceKind::Web,
                    achievements: strings(&[
                        "Built fully responsive web applications optimized for all device types",
                        "Crafted intuitive user interfaces with focus on user experience and accessibility",
                        "Developed interactive web tools including portfolio websites and utility applications",
                    ]),
                    technologies: strings(&[
                        "Frontend Development",
                        "Responsive Design",
                        "UI/UX Design",
                    ]),
                },
                Experience {
                    role: "Content Writer Intern".into(),
                    company: "InAmigos Foundation".into(),
                    duration: "October 2024 - November 2024".into(),
                    kind: ExperienceKind::Content,
                    achievements: strings(&[
                        "Created 50+ compelling articles on environmental awareness and sustainability",
                        "Boosted social media engagement through strategic content planning and execution",
                        "Promoted sustainability campaigns that reached diverse audiences",
                    ]),
                    technologies: strings(&["Content Writing", "Social Media", "Campaign Strategy"]),
                },
            ],
            projects: vec![
                Project {
                    name: "Fraud Detection in Financial Transactions".into(),
                    description: "ML-based web app to detect fraudulent transactions based on \
                                  transaction type, amount, and balance"
                        .into(),
                    technologies: strings(&["Python", "Jupyter Notebook", "Streamlit"]),
                    github: Some(
                        "https://github.com/Zabiha11/Fraud-Detection-in-Financial-Transactions.git"
                            .into(),
                    ),
                    demo: Some(
                        "https://fraud-detection-in-financial-transactions-zabi.streamlit.app/"
                            .into(),
                    ),
                    kind: ProjectKind::MachineLearning,
                    highlights: strings(&[
                        "95% accuracy in fraud detection",
                        "Real-time transaction analysis",
                        "Interactive Streamlit interface",
                    ]),
                },
                Project {
                    name: "Finance Tracker".into(),
                    description: "CLI-based Python tool to track income/expenses and visualize \
                                  spending trends via CSV"
                        .into(),
                    technologies: strings(&["Python", "Pandas", "Matplotlib"]),
                    github: Some("https://github.com/Zabiha11/Finance_Tracker.git".into()),
                    demo: None,
                    kind: ProjectKind::DataAnalysis,
                    highlights: strings(&[
                        "CSV-based data management",
                        "Visual spending trend analysis",
                        "Command-line interface",
                    ]),
                },
                Project {
                    name: "Gemini Chatbot".into(),
                    description: "Real-time AI chatbot using Google's Gemini API with Streamlit \
                                  frontend"
                        .into(),
                    technologies: strings(&["Python", "Streamlit", "Gemini API"]),
                    github: Some("https://github.com/Zabiha11/Gemini-Chatbot.git".into()),
                    demo: Some("https://gemini-chatbot-zabi.streamlit.app/".into()),
                    kind: ProjectKind::AiApplication,
                    highlights: strings(&[
                        "Google Gemini API integration",
                        "Real-time conversations",
                        "Streamlit web interface",
                    ]),
                },
                Project {
                    name: "JARVIS - AI Assistant".into(),
                    description: "Advanced desktop AI assistant with voice response, automation, \
                                  and command execution"
                        .into(),
                    technologies: strings(&["Python 3.13.3", "Voice Recognition", "Automation"]),
                    github: Some("https://github.com/Zabiha11/Jarvis.git".into()),
                    demo: None,
                    kind: ProjectKind::AiAssistant,
                    highlights: strings(&[
                        "Voice command recognition",
                        "Desktop automation",
                        "Advanced AI capabilities",
                    ]),
                },
            ],
            skills: Skills {
                languages: SkillTier {
                    expert: strings(&["Python", "HTML5"]),
                    advanced: strings(&["Java", "JavaScript", "CSS3"]),
                    intermediate: strings(&["SQL"]),
                },
                ai_ml: SkillTier {
                    expert: strings(&[
                        "Scikit-learn",
                        "Pandas",
                        "NumPy",
                        "Streamlit",
                        "Google Colab",
                        "Jupyter",
                    ]),
                    advanced: strings(&["XGBoost", "Matplotlib", "AI Agents"]),
                    intermediate: vec![],
                },
                tools_deployment: SkillTier {
                    expert: strings(&["Streamlit", "Google Colab", "Jupyter"]),
                    advanced: strings(&["Git", "GitHub"]),
                    intermediate: strings(&["MongoDB"]),
                },
                frontend_backend: SkillTier {
                    expert: vec![],
                    advanced: strings(&["React.js", "Tailwind CSS"]),
                    intermediate: strings(&["Node.js", "MySQL", "MongoDB", "Authentication"]),
                },
            },
            certifications: vec![
                Certification {
                    title: "Fundamentals of Machine Learning and AI".into(),
                    issuer: "Amazon Web Services (AWS)".into(),
                    description: "Credential earned for understanding core ML and AI concepts \
                                  using AWS tools and services"
                        .into(),
                },
                Certification {
                    title: "Generative AI for Educators".into(),
                    issuer: "Google for Education".into(),
                    description: "Completed foundational training on generative AI tools and \
                                  techniques for education and productivity"
                        .into(),
                },
                Certification {
                    title: "A Quick Introduction to Machine Learning".into(),
                    issuer: "IBM Cognitive Class".into(),
                    description: "Certificate for learning the basics of ML models, supervised \
                                  vs unsupervised learning, and model evaluation"
                        .into(),
                },
                Certification {
                    title: "Python (Basic) Certification".into(),
                    issuer: "HackerRank".into(),
                    description: "Verified Python proficiency through coding assessments focused \
                                  on logic, syntax, and programming fundamentals"
                        .into(),
                },
                Certification {
                    title: "Introduction to Artificial Intelligence".into(),
                    issuer: "Infosys Springboard".into(),
                    description: "Completed training on AI foundations, including intelligent \
                                  systems, real-world applications, and ethical aspects"
                        .into(),
                },
            ],
            stats: Stats {
                projects: 10,
                technologies: 15,
                problems_solved: 50,
                coding_hours_daily: 4,
            },
            contact: Contact {
                github: "https://github.com/Zabiha11".into(),
                linkedin: "https://www.linkedin.com/in/zabiha-muskan".into(),
                email: "zabiha@example.com".into(),
            },
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| String::from(*s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_has_all_sections() {
        let kb = KnowledgeBase::example();
        assert_eq!(kb.experience.len(), 4);
        assert_eq!(kb.projects.len(), 4);
        assert_eq!(kb.certifications.len(), 5);
        assert!(kb.experience_of(ExperienceKind::Ml).is_some());
        assert_eq!(
            kb.project_named("Fraud Detection").map(|p| p.name.as_str()),
            Some("Fraud Detection in Financial Transactions")
        );
    }
}
