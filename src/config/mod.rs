use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub model: String,
    pub temperature: f32,
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub artifacts_dir: String,
    pub share_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            temperature: 0.7,
            api_base_url: "https://generativelanguage.googleapis.com".into(),
            timeout_secs: 120,
            artifacts_dir: ".sermon".into(),
            share_base_url: "https://sermon-planner.app/".into(),
        }
    }
}
