//! The ordered rule table behind [`IntentResponder`](super::IntentResponder).
//!
//! Order is behavior: several predicates overlap (the contact, education and
//! goals keyword sets each appear twice) and the earlier rule always takes
//! the shared phrases. Later duplicates stay reachable only through their
//! unshared phrases. Do not reorder or merge without re-checking the tests
//! in `assistant.rs`.

use foliobot_model::KnowledgeBase;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{pick, templates};

/// Recognized question categories. One variant per rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    Greeting,
    Identity,
    WebsiteTour,
    ProjectTour,
    AboutSubject,
    GeneralOverview,
    SiteExplainer,
    Strengths,
    ExperienceList,
    TechStack,
    Education,
    CareerGoals,
    Achievements,
    AiInternship,
    MlInternship,
    WebInternship,
    ProjectList,
    Acknowledgment,
    Farewell,
    BotInternals,
    Recommendation,
    FraudDetection,
    Jarvis,
    GeminiChatbot,
    SkillsOverview,
    Python,
    Certifications,
    Contact,
    Stats,
    EducationStatus,
    FutureFocus,
    HelpMenu,
    Thanks,
    WhyHire,
    ContactDetails,
    LanguageQuery,
    Comparison,
    Availability,
}

pub struct IntentRule {
    pub intent: Intent,
    pattern: Regex,
    /// Only match inputs shorter than this many chars. Keeps bare
    /// acknowledgments like "yes" from firing inside longer sentences.
    max_len: Option<usize>,
    response: Response,
}

enum Response {
    Canned(&'static [&'static str]),
    Template(fn(&KnowledgeBase) -> String),
}

impl IntentRule {
    fn canned(intent: Intent, pattern: &str, responses: &'static [&'static str]) -> Self {
        Self {
            intent,
            pattern: compile(pattern),
            max_len: None,
            response: Response::Canned(responses),
        }
    }

    fn template(intent: Intent, pattern: &str, template: fn(&KnowledgeBase) -> String) -> Self {
        Self {
            intent,
            pattern: compile(pattern),
            max_len: None,
            response: Response::Template(template),
        }
    }

    fn short(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// `normalized` must already be trimmed and lower-cased.
    pub fn matches(&self, normalized: &str) -> bool {
        if let Some(max_len) = self.max_len {
            if normalized.chars().count() >= max_len {
                return false;
            }
        }
        self.pattern.is_match(normalized)
    }

    pub fn render(&self, knowledge: &KnowledgeBase, rng: &mut impl Rng) -> String {
        match &self.response {
            Response::Canned(responses) => pick(responses, rng),
            Response::Template(template) => template(knowledge),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    // Patterns are literals; a bad one fails the table test.
    Regex::new(pattern).expect("rule pattern")
}

const SHORT_INPUT: usize = 15;

/// Builds the full table. Called once per responder.
pub fn rule_table() -> Vec<IntentRule> {
    use Intent::*;
    vec![
        IntentRule::canned(
            Greeting,
            r"\b(hello|hi|hey|greetings|good\s+(morning|afternoon|evening)|start|begin)\b",
            GREETINGS,
        ),
        IntentRule::canned(
            Identity,
            r"\b(who are you|what are you|introduce yourself|your name|about you)\b",
            IDENTITY,
        ),
        IntentRule::canned(
            WebsiteTour,
            r"\b(website|portfolio|this site|explain.*website|about.*website|tell me about.*site)\b",
            WEBSITE_TOUR,
        ),
        IntentRule::template(
            ProjectTour,
            r"\b(explain.*project|tell.*project|what.*project|describe.*project|show.*project)\b|\b(her projects|the projects|projects she)\b",
            templates::project_tour,
        ),
        IntentRule::template(
            AboutSubject,
            r"\b(who|about|background|introduction|tell me about)\b.*\b(zabiha|her)\b|\b(who is|about) zabiha\b|\b(explain.*zabiha|describe.*zabiha|zabiha.*person)\b",
            templates::about_subject,
        ),
        IntentRule::canned(
            GeneralOverview,
            r"\b(what can you tell|tell me everything|give me info|information about|details about)\b|\b(summary|overview|brief|rundown)\b",
            GENERAL_OVERVIEW,
        ),
        IntentRule::canned(
            SiteExplainer,
            r"\b(explain this|what is this|what am i looking at|describe this)\b",
            SITE_EXPLAINER,
        ),
        IntentRule::canned(
            Strengths,
            r"\b(what.*she.*do|what.*zabiha.*do|her abilities|capabilities|what.*good at)\b|\b(expertise|specialization|domain|field)\b",
            STRENGTHS,
        ),
        IntentRule::template(
            ExperienceList,
            r"\b(experience|internship|work|job|career|employment|worked|intern)\b|\b(where.*worked|companies|employers|professional)\b",
            templates::experience_list,
        ),
        IntentRule::template(
            TechStack,
            r"\b(technical|programming|coding|development|tech stack|technologies)\b|\b(tools|frameworks|libraries|languages|software)\b",
            templates::tech_stack,
        ),
        IntentRule::canned(
            Education,
            r"\b(education|study|student|learning|university|college|cse|computer science)\b",
            EDUCATION,
        ),
        IntentRule::template(
            CareerGoals,
            r"\b(future|goals|plans|aspirations|next|career.*goals|ambition)\b",
            templates::career_goals,
        ),
        IntentRule::canned(
            Achievements,
            r"\b(achievement|accomplishment|success|award|recognition|proud)\b",
            ACHIEVEMENTS,
        ),
        IntentRule::template(
            AiInternship,
            r"\b(ai|artificial intelligence)\b.*\b(internship|experience|work|siit)\b|\bsiit\b",
            templates::ai_internship,
        ),
        IntentRule::template(
            MlInternship,
            r"\b(ml|machine learning|data science)\b.*\b(internship|experience|work|zaalima)\b|\bzaalima\b",
            templates::ml_internship,
        ),
        IntentRule::template(
            WebInternship,
            r"\b(web|frontend|development)\b.*\b(internship|experience|work|oasis)\b|\boasis\b",
            templates::web_internship,
        ),
        IntentRule::template(
            ProjectList,
            r"\b(project|portfolio|work|built|created|developed|made|app|application)\b|\b(show me|tell me about|explain|describe).*\b(project|work)\b",
            templates::project_list,
        ),
        IntentRule::canned(
            Acknowledgment,
            r"\b(yes|yeah|ok|okay|sure|tell me more|continue|go on)\b",
            ACKNOWLEDGMENT,
        )
        .short(SHORT_INPUT),
        IntentRule::canned(
            Farewell,
            r"\b(no|nope|nothing|stop|quit|exit|bye|goodbye)\b",
            FAREWELL,
        )
        .short(SHORT_INPUT),
        IntentRule::canned(
            BotInternals,
            r"\b(how.*work|how.*made|how.*built|chatbot.*work|ai.*work)\b",
            BOT_INTERNALS,
        ),
        IntentRule::canned(
            Recommendation,
            r"\b(recommend|suggest|should i|advice|opinion)\b",
            RECOMMENDATION,
        ),
        IntentRule::template(
            FraudDetection,
            r"\b(fraud|detection|financial|transaction)\b",
            templates::fraud_detection,
        ),
        IntentRule::template(
            Jarvis,
            r"\b(jarvis|ai assistant|voice|automation)\b",
            templates::jarvis,
        ),
        IntentRule::template(
            GeminiChatbot,
            r"\b(gemini|chatbot|google)\b",
            templates::gemini_chatbot,
        ),
        IntentRule::template(
            SkillsOverview,
            r"\b(skill|technology|programming|language|expertise|know|proficient)\b",
            templates::skills_overview,
        ),
        IntentRule::canned(Python, r"\bpython\b", PYTHON),
        IntentRule::template(
            Certifications,
            r"\b(certification|certificate|credential|qualification|course)\b",
            templates::certifications,
        ),
        IntentRule::template(
            Contact,
            r"\b(contact|reach|email|linkedin|github|connect|hire)\b",
            templates::contact,
        ),
        IntentRule::template(
            Stats,
            r"\b(stat|number|achievement|accomplish|count)\b",
            templates::stats,
        ),
        IntentRule::canned(
            EducationStatus,
            r"\b(education|student|study|university|college|degree|cse)\b",
            EDUCATION_STATUS,
        ),
        IntentRule::template(
            FutureFocus,
            r"\b(future|goal|plan|aspiration|career|next)\b",
            templates::future_focus,
        ),
        IntentRule::canned(HelpMenu, r"\b(help|assist|what can you)\b", HELP_MENU),
        IntentRule::canned(Thanks, r"\b(thank|thanks|appreciate)\b", THANKS),
        IntentRule::canned(
            WhyHire,
            r"\b(why.*hire|why.*work|why.*choose|what makes.*special|standout|unique)\b",
            WHY_HIRE,
        ),
        IntentRule::template(
            ContactDetails,
            r"\b(contact|reach|email|linkedin|github|connect|hire|get in touch|talk to)\b",
            templates::contact_details,
        ),
        IntentRule::canned(
            LanguageQuery,
            r"\b(python|java|javascript|html|css|sql|react|node)\b",
            LANGUAGE_QUERY,
        ),
        IntentRule::canned(
            Comparison,
            r"\b(compare|better|best|versus|vs|different|special|advantage)\b",
            COMPARISON,
        ),
        IntentRule::canned(
            Availability,
            r"\b(available|time|when|schedule|free|busy)\b",
            AVAILABILITY,
        ),
    ]
}

pub const GREETINGS: &[&str] = &[
    "Hello! I'm here to help you learn about Zabiha Muskan K, an AI/ML engineer. What would you like to know?",
    "Hi there! I can tell you about Zabiha's projects, skills, experience, or anything else you'd like to know about her work.",
    "Welcome! I'm Zabiha's assistant. Feel free to ask about her AI/ML projects, internships, skills, or career journey.",
    "Hey! I'm Zabiha's portfolio assistant. I can explain her projects, experience, skills, or answer any questions about her background!",
];

const IDENTITY: &[&str] = &[
    "I'm Zabiha's portfolio assistant! I'm here to help you explore her work, projects, \
     skills, and professional journey. I can answer detailed questions about her AI/ML \
     expertise, internship experiences, technical skills, and much more. Think of me as your \
     personal guide to understanding Zabiha's capabilities and achievements. What would you \
     like to discover?",
];

const WEBSITE_TOUR: &[&str] = &["\
This is Zabiha Muskan K's professional portfolio! It showcases her journey as an AI/ML engineer with:

• **AI/ML Projects** - from fraud detection systems to AI assistants
• **Professional Experience** - 4 diverse internships across tech domains
• **Technical Skills** - expert in Python, ML, AI, and web technologies
• **Certifications** - AWS, Google, IBM, and HackerRank credentials

It demonstrates her full-stack capabilities and passion for cutting-edge technology!"];

const GENERAL_OVERVIEW: &[&str] = &["\
I can tell you a lot about Zabiha! Here's what I know:

• **Professional Identity**: AI/ML Engineer & Final-year CSE student
• **Experience**: 4 internships across AI, ML, web dev, and content creation
• **Projects**: 10+ including fraud detection, AI assistants, and web apps
• **Skills**: expert in Python, ML libraries, AI development, and more
• **Certifications**: AWS, Google, IBM, HackerRank credentials

Want to dive deeper into any of these areas? Just ask!"];

const SITE_EXPLAINER: &[&str] = &["\
You're exploring Zabiha's interactive AI/ML portfolio!

It pairs her project and internship history with an assistant (that's me) that answers
questions about her background. Ask about a specific project, her skills, or how to get
in touch, and I'll pull the details from her portfolio record."];

const STRENGTHS: &[&str] = &["\
Zabiha is incredibly versatile! Here's what she excels at:

• **AI Development**: building intelligent systems, AI agents, and automation tools
• **Machine Learning**: models with 95% accuracy, data analysis, predictive systems
• **Python Mastery**: expert-level programming for AI/ML applications
• **Web Development**: full-stack development with modern frameworks
• **Deployment**: Streamlit, cloud platforms, and production-ready applications
• **Communication**: technical writing and content creation

She's essentially a one-person tech powerhouse!"];

const EDUCATION: &[&str] = &["\
Zabiha is a dedicated learner!

• **Current status**: final-year Computer Science Engineering (CSE) student
• **Learning focus**: AI, Machine Learning, Data Structures & Algorithms
• **Certifications**: AWS ML, Google AI, IBM ML, HackerRank Python
• **Daily practice**: 4+ hours of coding and skill development

She's preparing for real-world tech challenges through continuous learning!"];

const ACHIEVEMENTS: &[&str] = &["\
Zabiha has some amazing achievements!

**Project highlights**:
• 95% accuracy fraud detection system
• Advanced JARVIS AI assistant with voice recognition
• Real-time Gemini chatbot integration

**Professional milestones**:
• 4 successful internship completions
• 5+ AI applications built at SIIT Technologies
• 50+ technical articles written

She's building an impressive track record of technical excellence!"];

const ACKNOWLEDGMENT: &[&str] = &["\
Great! What would you like to know more about?

• Her AI/ML projects and technical achievements
• Specific internship experiences and learning
• Technical skills and programming expertise
• Career goals and future aspirations
• How to connect with her for opportunities

Just ask me anything specific you're curious about!"];

const FAREWELL: &[&str] = &[
    "No problem at all! If you change your mind and want to learn more about Zabiha's work \
     in AI/ML, just let me know. I'm always here to help explore her projects, skills, and \
     experience. Have a great day!",
];

const BOT_INTERNALS: &[&str] = &["\
Great question! I'm a rule-based assistant built for Zabiha's portfolio.

**How I work**:
• keyword patterns matched against your question, first match wins
• a fixed knowledge record about Zabiha's work and background
• templated answers filled in from that record

My purpose: help visitors discover Zabiha's work, skills, and achievements!"];

const RECOMMENDATION: &[&str] = &["\
I'd definitely recommend exploring Zabiha's work! Here's why:

**For recruiters**: a proven track record with 95% accuracy ML models and diverse internships
**For collaborators**: a rare blend of AI/ML expertise and practical web development skills
**For students**: a learning journey that combines academics with real-world projects

**Start with**: her fraud detection project - a perfect example of her ML expertise in action!"];

const PYTHON: &[&str] = &["\
Python is Zabiha's strongest programming language! She has **expert-level** proficiency and uses it extensively for:

• AI/ML development with Scikit-learn, Pandas, NumPy
• Web applications with Streamlit
• Data analysis and visualization
• Automation and AI assistants like JARVIS

She even has a HackerRank Python certification!"];

const EDUCATION_STATUS: &[&str] = &[
    "Zabiha is currently a final-year Computer Science Engineering (CSE) student. Her \
     academic journey has been complemented by practical experience through multiple \
     internships and hands-on projects. She's focused on preparing for real-world tech \
     challenges through ML & DSA practice.",
];

const HELP_MENU: &[&str] = &["\
I can help you learn about:

• Zabiha's AI/ML projects and experience
• Her internships and work experience
• Technical skills and technologies
• Certifications and achievements
• How to contact her
• Statistics and accomplishments

Just ask me anything you'd like to know!"];

const THANKS: &[&str] = &[
    "You're welcome! I'm happy to help you learn about Zabiha's work. Feel free to ask if \
     you have any other questions about her projects, skills, or experience!",
];

const WHY_HIRE: &[&str] = &["\
Great question! Here's why Zabiha stands out:

• **Proven results**: systems with 95% accuracy and 5+ production AI apps
• **Diverse expertise**: AI/ML, web dev, and communication skills in one person
• **Fast learner**: mastered multiple technologies across 4 different internships
• **Self-motivated**: 4+ hours daily coding practice and continuous skill development

She brings both technical excellence and a passion for innovation!"];

const LANGUAGE_QUERY: &[&str] = &[
    "Zabiha is proficient in multiple programming languages! Let me know which specific \
     language or technology you'd like to know about, and I'll give you detailed \
     information about her expertise level and projects using that technology.",
];

const COMPARISON: &[&str] = &["\
What makes Zabiha unique in the AI/ML space?

**Unique combination**: she bridges AI/ML with practical web development
**Real-world focus**: her projects solve actual problems (fraud detection, personal finance, automation)
**Rapid learning**: 4 internships in different domains show incredible adaptability
**Technical depth**: expert-level Python with 95% model accuracy achievements

She's not just technically skilled - she's a well-rounded technologist!"];

const AVAILABILITY: &[&str] = &["\
Zabiha maintains an active development schedule!

• **Daily coding**: 4+ hours of programming and skill development
• **Current status**: final-year CSE student with a flexible schedule
• **Availability**: open to internships, projects, and collaboration opportunities
• **Response time**: typically responds to inquiries within 24 hours

She's always excited to discuss new opportunities and technical challenges!"];

pub const FALLBACKS: &[&str] = &[
    "That's an interesting question! I can help you learn about Zabiha's AI/ML projects, \
     her professional experience and internships, technical skills, certifications, and \
     how to connect with her. Try asking something like 'Tell me about her projects' or \
     'What are her skills?'",
    "I'd love to help you discover more about Zabiha! You might ask: 'What projects has \
     she built?', 'Tell me about her experience', 'What technologies does she use?', or \
     'How can I contact her?'",
    "I'm here to help you explore Zabiha's work! You could ask me about her fraud \
     detection system with 95% accuracy, her JARVIS AI assistant, her internships at SIIT \
     Technologies and Zaalima Development, or her certifications from AWS, Google, IBM, \
     and HackerRank. What interests you most?",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_builds_and_keeps_declaration_order() {
        let table = rule_table();
        assert_eq!(table.first().map(|r| r.intent), Some(Intent::Greeting));
        assert_eq!(table.last().map(|r| r.intent), Some(Intent::Availability));

        let position = |intent: Intent| {
            table
                .iter()
                .position(|r| r.intent == intent)
                .expect("intent present")
        };
        // Duplicated keyword blocks keep their source order.
        assert!(position(Intent::Contact) < position(Intent::ContactDetails));
        assert!(position(Intent::Education) < position(Intent::EducationStatus));
        assert!(position(Intent::CareerGoals) < position(Intent::FutureFocus));
        // The deep-dive python rule shadows the generic language rule.
        assert!(position(Intent::Python) < position(Intent::LanguageQuery));
    }

    #[test]
    fn length_guard_is_per_rule() {
        let table = rule_table();
        let guarded: Vec<Intent> = table
            .iter()
            .filter(|r| r.max_len.is_some())
            .map(|r| r.intent)
            .collect();
        assert_eq!(guarded, vec![Intent::Acknowledgment, Intent::Farewell]);
    }

    #[test]
    fn greeting_pattern_hits_whole_words_only() {
        let table = rule_table();
        let greeting = &table[0];
        assert!(greeting.matches("hi"));
        assert!(greeting.matches("good   morning"));
        assert!(!greeting.matches("history of this thing"));
    }
}
