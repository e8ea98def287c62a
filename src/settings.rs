const API_URL_VAR: &str = "HUDDLE_API_URL";
const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Clone, Debug, PartialEq)]
pub struct HuddleSettings {
    pub api_url: String,
}

impl HuddleSettings {
    pub fn new_from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let api_url = lookup(API_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}

impl Default for HuddleSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
