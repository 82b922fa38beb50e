use std::io::{self, BufRead, Write as _};
use std::thread;

use anyhow::{Context, Result};
use foliobot::assistant::session::SessionState;
use foliobot::assistant::store;
use foliobot::utils::ResultExt;
use foliobot::{Intent, IntentResponder};
use foliobot_model::KnowledgeBase;
use log::info;

fn main() -> Result<()> {
    let _logger = foliobot::logging::init();
    let config = store::load_config().context("Cannot load config")?;
    let knowledge = store::load_knowledge(&config).context("Cannot load knowledge base")?;
    let responder = IntentResponder::new(knowledge);
    let mut session = SessionState::new();
    info!("Session {} started", session.session_id);

    println!("{}\n", welcome(responder.knowledge()));
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Cannot read from stdin")?;
        let intent = responder.classify(&line);
        session.record(intent);

        // Cosmetic typing pause; wraps the respond call, the responder
        // itself knows nothing about it.
        thread::sleep(config.response_delay(&mut rand::thread_rng()));
        println!("{}\n", responder.respond(&line));

        if intent == Some(Intent::Farewell) {
            break;
        }
        prompt()?;
    }

    info!(
        "Session {} ended after {} messages ({} unmatched)",
        session.session_id, session.messages, session.fallbacks
    );
    if !config.test_mode {
        store::store_session_summary(&session.summary()).print_err();
    }
    Ok(())
}

fn welcome(knowledge: &KnowledgeBase) -> String {
    format!(
        "Hi! I'm {}'s assistant. I can answer any questions about her projects, skills, \
         experience, or background. What would you like to know?",
        knowledge.personal.name
    )
}

fn prompt() -> Result<()> {
    print!("you> ");
    io::stdout().flush().context("Cannot flush stdout")
}
