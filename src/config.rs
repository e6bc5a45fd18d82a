use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::dataset::parser::SchemaVariant;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_questions_file")]
    pub questions_file: String,
    #[serde(default = "default_schema")]
    pub schema: SchemaVariant,
    #[serde(default = "default_countdown_secs")]
    pub countdown_secs: u32,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_difficulty_ladder")]
    pub difficulty_ladder: Vec<u32>,
}

fn default_questions_file() -> String {
    "fragen.csv".to_string()
}
fn default_schema() -> SchemaVariant {
    SchemaVariant::Wide
}
fn default_countdown_secs() -> u32 {
    10
}
fn default_theme() -> String {
    "quiz-night".to_string()
}
fn default_difficulty_ladder() -> Vec<u32> {
    vec![100, 200, 300, 400]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_file: default_questions_file(),
            schema: default_schema(),
            countdown_secs: default_countdown_secs(),
            theme: default_theme(),
            difficulty_ladder: default_difficulty_ladder(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            // First run: write the defaults so the file is there to edit.
            let config = Config::default();
            let _ = config.save();
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tafel")
            .join("config.toml")
    }

    /// Repairs values a hand-edited config file can break. Call after
    /// deserialization and after CLI overrides are applied.
    pub fn validate(&mut self) {
        self.countdown_secs = self.countdown_secs.clamp(1, 600);
        if self.questions_file.trim().is_empty() {
            self.questions_file = default_questions_file();
        }

        let mut seen = Vec::new();
        for value in self.difficulty_ladder.drain(..) {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        self.difficulty_ladder = seen;
        if self.difficulty_ladder.is_empty() {
            self.difficulty_ladder = default_difficulty_ladder();
        }
    }
}
