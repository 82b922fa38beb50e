use foliobot_model::KnowledgeBase;
use rand::seq::SliceRandom;
use rand::Rng;

pub mod config;
pub mod rules;
pub mod session;
pub mod store;
pub mod templates;

pub use rules::{Intent, IntentRule};

/// Answers free-text questions about the portfolio subject from a fixed,
/// ordered rule table. Rules are evaluated in declaration order and the
/// first match wins, so overlapping keyword sets are resolved by position
/// alone.
pub struct IntentResponder {
    knowledge: KnowledgeBase,
    rules: Vec<IntentRule>,
}

impl IntentResponder {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            knowledge,
            rules: rules::rule_table(),
        }
    }

    /// Produces a response for a single utterance. Never fails: input that
    /// matches no rule draws from the generic fallback pool.
    pub fn respond(&self, message: &str) -> String {
        self.respond_with(message, &mut rand::thread_rng())
    }

    /// Same as [`respond`](Self::respond) with an explicit random source,
    /// so callers can pin the canned-response pick.
    pub fn respond_with(&self, message: &str, rng: &mut impl Rng) -> String {
        let normalized = normalize(message);
        match self.first_match(&normalized) {
            Some(rule) => rule.render(&self.knowledge, rng),
            None => pick(rules::FALLBACKS, rng),
        }
    }

    /// Intent of the rule that would answer `message`. `None` means the
    /// fallback pool. Response selection stays untouched, so this is safe
    /// for analytics bookkeeping by the caller.
    pub fn classify(&self, message: &str) -> Option<Intent> {
        let normalized = normalize(message);
        self.first_match(&normalized).map(|r| r.intent)
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    fn first_match(&self, normalized: &str) -> Option<&IntentRule> {
        self.rules.iter().find(|r| r.matches(normalized))
    }
}

fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

pub(crate) fn pick(responses: &[&str], rng: &mut impl Rng) -> String {
    String::from(*responses.choose(rng).expect("non-empty response set"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn responder() -> IntentResponder {
        IntentResponder::new(KnowledgeBase::example())
    }

    #[test]
    fn always_answers() {
        let responder = responder();
        let long = "blah ".repeat(5_000);
        let inputs: [&str; 5] = ["", "   \t  ", "a", "こんにちは 🦀", &long];
        for input in inputs {
            assert!(!responder.respond(input).is_empty());
        }
    }

    #[test]
    fn empty_input_falls_through_to_fallback_pool() {
        let responder = responder();
        assert_eq!(responder.classify(""), None);
        assert!(rules::FALLBACKS.contains(&responder.respond("").as_str()));
    }

    #[test]
    fn unrelated_input_uses_fallback_pool_only() {
        let responder = responder();
        assert_eq!(responder.classify("purple elephants juggle quietly"), None);
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let answer = responder.respond_with("purple elephants juggle quietly", &mut rng);
            assert!(rules::FALLBACKS.contains(&answer.as_str()));
        }
    }

    #[test]
    fn greeting_draws_from_greeting_set_only() {
        let responder = responder();
        assert_eq!(responder.classify("hello"), Some(Intent::Greeting));
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let answer = responder.respond_with("hello", &mut rng);
            assert!(rules::GREETINGS.contains(&answer.as_str()));
            assert!(!rules::FALLBACKS.contains(&answer.as_str()));
        }
    }

    #[test]
    fn fixed_seed_pins_the_phrasing() {
        let responder = responder();
        let a = responder.respond_with("hello", &mut StdRng::seed_from_u64(7));
        let b = responder.respond_with("hello", &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn single_candidate_rule_is_fully_deterministic() {
        let responder = responder();
        let first = responder.respond("thank you so much");
        for _ in 0..16 {
            assert_eq!(responder.respond("thank you so much"), first);
        }
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        let responder = responder();
        // Matches the project-tour rule, the about-subject rule and the
        // broad project rule at once; only the earliest may answer.
        assert_eq!(
            responder.classify("tell me about her projects"),
            Some(Intent::ProjectTour)
        );
    }

    #[test]
    fn acknowledgment_only_matches_short_inputs() {
        let responder = responder();
        assert_eq!(responder.classify("yes"), Some(Intent::Acknowledgment));
        assert_eq!(responder.classify("ok"), Some(Intent::Acknowledgment));

        let long = "yes, i would like to know everything about her extensive background";
        assert_ne!(responder.classify(long), Some(Intent::Acknowledgment));
        // The long sentence still matches on its other keywords.
        assert_eq!(responder.classify(long), Some(Intent::AboutSubject));
    }

    #[test]
    fn farewell_only_matches_short_inputs() {
        let responder = responder();
        assert_eq!(responder.classify("bye"), Some(Intent::Farewell));
        assert_ne!(
            responder.classify("there is no way i will stop asking about all these projects"),
            Some(Intent::Farewell)
        );
    }

    #[test]
    fn experience_answer_lists_every_entry_in_order() {
        let responder = responder();
        let answer = responder.respond("what is her experience?");
        let kb = KnowledgeBase::example();
        let mut last_pos = 0;
        for exp in &kb.experience {
            let pos = answer.find(&exp.company).expect("company listed");
            assert!(answer.contains(&exp.duration));
            assert!(pos >= last_pos, "experience entries out of stored order");
            last_pos = pos;
        }
    }

    #[test]
    fn project_answer_lists_every_project_in_order() {
        let responder = responder();
        let answer = responder.respond("Tell me about her projects");
        assert!(answer.contains("Fraud Detection in Financial Transactions"));
        let kb = KnowledgeBase::example();
        let mut last_pos = 0;
        for project in &kb.projects {
            let pos = answer.find(&project.name).expect("project listed");
            assert!(pos >= last_pos, "projects out of stored order");
            last_pos = pos;
        }
        assert!(answer.matches("• ").count() >= kb.projects.len());
    }

    #[test]
    fn duplicated_contact_keywords_resolve_to_the_earlier_rule() {
        let responder = responder();
        // "contact" appears in two rule blocks; position decides.
        assert_eq!(responder.classify("contact"), Some(Intent::Contact));
        // The later block stays reachable through its unshared phrases.
        assert_eq!(
            responder.classify("get in touch"),
            Some(Intent::ContactDetails)
        );
    }

    #[test]
    fn classification_ignores_case_and_whitespace() {
        let responder = responder();
        assert_eq!(responder.classify("  HELLO  "), Some(Intent::Greeting));
        assert_eq!(responder.classify("PyThOn"), Some(Intent::Python));
    }
}
