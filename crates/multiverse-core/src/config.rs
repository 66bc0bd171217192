//! Runtime configuration resolved from command-line arguments.

use std::path::PathBuf;

use crate::fetch::DEFAULT_ENDPOINT;

/// File name of the session database inside the data directory.
pub const SESSION_DB_FILE: &str = "session.redb";

/// Everything the application needs to start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the persisted session flag
    pub data_dir: PathBuf,
    /// Character endpoint
    pub endpoint: String,
    /// Shown in the window title when running several instances
    pub instance_name: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(None),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            instance_name: None,
        }
    }
}

impl AppConfig {
    /// Build from optional overrides.
    ///
    /// An explicit `data_dir` wins over `name`; `name` selects
    /// `<data>/multiverse-<name>`.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        name: Option<String>,
        endpoint: Option<String>,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(|| default_data_dir(name.as_deref()));
        let instance_name = name.or_else(|| {
            data_dir
                .file_name()
                .and_then(|n| n.to_str())
                .filter(|n| *n != "multiverse")
                .map(str::to_string)
        });

        Self {
            data_dir,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            instance_name,
        }
    }

    pub fn session_db_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_DB_FILE)
    }

    pub fn window_title(&self) -> String {
        match &self.instance_name {
            Some(name) => format!("Multiverse Explorer - {}", name),
            None => "Multiverse Explorer".to_string(),
        }
    }
}

fn default_data_dir(name: Option<&str>) -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    match name {
        Some(name) => base.join(format!("multiverse-{}", name)),
        None => base.join("multiverse"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_public_endpoint() {
        let config = AppConfig::resolve(None, None, None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.data_dir.ends_with("multiverse"));
        assert_eq!(config.instance_name, None);
        assert_eq!(config.window_title(), "Multiverse Explorer");
    }

    #[test]
    fn name_selects_instance_dir() {
        let config = AppConfig::resolve(None, Some("morty".to_string()), None);
        assert!(config.data_dir.ends_with("multiverse-morty"));
        assert_eq!(config.window_title(), "Multiverse Explorer - morty");
    }

    #[test]
    fn explicit_dir_wins() {
        let config = AppConfig::resolve(
            Some(PathBuf::from("/tmp/citadel")),
            Some("ignored-for-path".to_string()),
            Some("http://127.0.0.1:9/api/character".to_string()),
        );
        assert_eq!(config.data_dir, PathBuf::from("/tmp/citadel"));
        assert_eq!(config.session_db_path(), PathBuf::from("/tmp/citadel/session.redb"));
        assert_eq!(config.endpoint, "http://127.0.0.1:9/api/character");
        assert_eq!(config.instance_name.as_deref(), Some("ignored-for-path"));
    }

    #[test]
    fn custom_dir_names_the_instance() {
        let config = AppConfig::resolve(Some(PathBuf::from("/tmp/citadel")), None, None);
        assert_eq!(config.instance_name.as_deref(), Some("citadel"));
    }
}
