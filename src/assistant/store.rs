use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use foliobot_model::KnowledgeBase;
use itertools::Itertools;
use log::{info, warn};

use super::config::Config;
use super::session::SessionSummary;

const SESSION_SUFFIX: &str = ".session.json";

fn config_file_path() -> PathBuf {
    data_dir().join("config.yaml")
}

fn knowledge_file_path() -> PathBuf {
    data_dir().join("knowledge.yaml")
}

pub fn sessions_dir() -> PathBuf {
    data_dir().join("sessions")
}

pub fn data_dir() -> PathBuf {
    let project_dirs = directories::ProjectDirs::from("com", "foliobot", "foliobot")
        .expect("Cannot retrieve project dirs");
    project_dirs.data_dir().to_owned()
}

pub fn load_config() -> Result<Config> {
    info!("Config file: {}", config_file_path().to_string_lossy());
    if !config_file_path().exists() {
        info!("Config file does not exist, creating.");
        store_default_config()?;
    }
    load_config_file(&config_file_path())
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let config_file = File::open(path)?;
    Ok(serde_yaml::from_reader(config_file)?)
}

pub fn store_default_config() -> Result<()> {
    ensure_dir_created(&config_file_path())?;
    let config_file = File::create(config_file_path())?;
    Ok(serde_yaml::to_writer(config_file, &Config::default())?)
}

/// Loads the knowledge record the responder answers from. A missing file is
/// seeded with the built-in example; a malformed one is a startup error.
pub fn load_knowledge(config: &Config) -> Result<KnowledgeBase> {
    let path = config
        .knowledge_file
        .clone()
        .unwrap_or_else(knowledge_file_path);
    info!("Knowledge file: {}", path.to_string_lossy());
    if !path.exists() {
        info!("Knowledge file does not exist, creating.");
        store_default_knowledge(&path)?;
    }
    load_knowledge_file(&path)
}

pub fn load_knowledge_file(path: &Path) -> Result<KnowledgeBase> {
    let knowledge_file = File::open(path)
        .with_context(|| format!("Cannot open {}", path.to_string_lossy()))?;
    let knowledge: KnowledgeBase = serde_yaml::from_reader(knowledge_file)
        .with_context(|| format!("Cannot parse knowledge base {}", path.to_string_lossy()))?;

    let project_names: String = knowledge.projects.iter().map(|p| &p.name).join(", ");
    let n = knowledge.projects.len();
    if n == 0 {
        warn!("Loaded knowledge base with no projects");
    } else {
        info!(
            "Loaded knowledge base for {} with {n} projects: {project_names}",
            knowledge.personal.name
        );
    }
    Ok(knowledge)
}

pub fn store_default_knowledge(path: &Path) -> Result<()> {
    ensure_dir_created(path)?;
    let knowledge_file = File::create(path)?;
    Ok(serde_yaml::to_writer(
        knowledge_file,
        &KnowledgeBase::example(),
    )?)
}

pub fn store_session_summary(summary: &SessionSummary) -> Result<()> {
    store_session_summary_in(&sessions_dir(), summary)
}

pub fn store_session_summary_in(dir: &Path, summary: &SessionSummary) -> Result<()> {
    let path = dir.join(format!("{}{}", summary.session_id, SESSION_SUFFIX));
    ensure_dir_created(&path)?;
    let out_file = File::create(&path)?;
    serde_json::to_writer_pretty(out_file, summary)?;
    info!("Session summary: {}", path.to_string_lossy());
    Ok(())
}

fn ensure_dir_created(path: &Path) -> Result<()> {
    let dir = path.parent().expect("Parent directory");
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create {}", &dir.to_string_lossy()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::session::SessionState;
    use crate::assistant::Intent;
    use std::io::Write;
    use tempdir::TempDir;

    #[test]
    fn default_knowledge_round_trips() {
        let dir = TempDir::new("foliobot_store").unwrap();
        let path = dir.path().join("knowledge.yaml");
        store_default_knowledge(&path).unwrap();
        let loaded = load_knowledge_file(&path).unwrap();
        assert_eq!(loaded, KnowledgeBase::example());
    }

    #[test]
    fn malformed_knowledge_is_a_startup_error() {
        let dir = TempDir::new("foliobot_store").unwrap();
        let path = dir.path().join("knowledge.yaml");
        let mut f = File::create(&path).unwrap();
        writeln!(f, "personal: [this, is, not, a, record]").unwrap();
        let err = load_knowledge_file(&path).unwrap_err();
        assert!(err.to_string().contains("Cannot parse knowledge base"));
    }

    #[test]
    fn missing_knowledge_file_is_seeded_with_the_example() {
        let dir = TempDir::new("foliobot_store").unwrap();
        let path = dir.path().join("fresh").join("knowledge.yaml");
        let config = Config {
            knowledge_file: Some(path.clone()),
            ..Config::default()
        };
        let loaded = load_knowledge(&config).unwrap();
        assert!(path.exists());
        assert_eq!(loaded, KnowledgeBase::example());
    }

    #[test]
    fn session_summary_lands_in_the_sessions_dir() {
        let dir = TempDir::new("foliobot_store").unwrap();
        let mut session = SessionState::new();
        session.record(Some(Intent::Greeting));
        let summary = session.summary();
        store_session_summary_in(dir.path(), &summary).unwrap();

        let path = dir
            .path()
            .join(format!("{}{}", summary.session_id, SESSION_SUFFIX));
        let written: SessionSummary =
            serde_json::from_reader(File::open(path).unwrap()).unwrap();
        assert_eq!(written, summary);
    }

    #[test]
    fn config_round_trips_through_yaml() {
        let dir = TempDir::new("foliobot_store").unwrap();
        let path = dir.path().join("config.yaml");
        let config = Config {
            typing_delay_ms: 5,
            typing_jitter_ms: 0,
            test_mode: true,
            knowledge_file: None,
        };
        serde_yaml::to_writer(File::create(&path).unwrap(), &config).unwrap();
        assert_eq!(load_config_file(&path).unwrap(), config);
    }
}
