use crate::error::{CropGuardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `classifier.model_path`.
pub const MODEL_PATH_ENV: &str = "CROPGUARD_MODEL_PATH";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub model_path: Option<PathBuf>,
}

fn default_enabled() -> bool {
    true
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model_path: None,
        }
    }
}

impl ClassifierConfig {
    pub fn with_model_path(path: impl Into<PathBuf>) -> Self {
        Self {
            enabled: true,
            model_path: Some(path.into()),
        }
    }

    /// Path of the model artifact to load, or `None` when the classifier is
    /// disabled or no usable path is configured.
    pub fn effective_model_path(&self) -> Option<&Path> {
        if !self.enabled {
            return None;
        }
        self.model_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `config_override` must exist. Without one, the standard
    /// locations are searched and built-in defaults are used when nothing is
    /// found: the classifier is optional, so the tool runs on rules alone.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(CropGuardError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                Some(p.to_path_buf())
            }
            None => Self::find_config_path(),
        };

        let mut config = match config_path {
            Some(path) => {
                tracing::debug!("Loading config from {:?}", path);
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| CropGuardError::Config(format!("Failed to read config: {}", e)))?;
                Self::from_yaml_str(&content)?
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        };

        if let Ok(path) = std::env::var(MODEL_PATH_ENV) {
            if !path.is_empty() {
                config.classifier.model_path = Some(PathBuf::from(path));
            }
        }

        Ok(config)
    }

    /// Parse YAML after substituting `${VAR}` references from the environment.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);
        serde_yaml::from_str(&content)
            .map_err(|e| CropGuardError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in the working directory, then the XDG config dir.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("cropguard").join("config.yaml"))
            .filter(|p| p.exists())
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let Ok(re) = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") else {
            return result;
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            match std::env::var(var_name) {
                Ok(value) => result = result.replace(placeholder, &value),
                // Unset references become empty so optional paths read as absent
                Err(_) => result = result.replace(placeholder, ""),
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_enable_classifier_without_model() {
        let config = Config::default();
        assert!(config.classifier.enabled);
        assert!(config.classifier.effective_model_path().is_none());
    }

    #[test]
    fn parses_classifier_section() {
        let config = Config::from_yaml_str(
            "classifier:\n  enabled: true\n  model_path: /var/lib/cropguard/model.json\n",
        )
        .unwrap();
        assert_eq!(
            config.classifier.effective_model_path(),
            Some(Path::new("/var/lib/cropguard/model.json"))
        );
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert!(config.classifier.enabled);
        assert!(config.classifier.model_path.is_none());
    }

    #[test]
    fn disabled_classifier_has_no_model_path() {
        let config =
            Config::from_yaml_str("classifier:\n  enabled: false\n  model_path: model.json\n")
                .unwrap();
        assert!(config.classifier.effective_model_path().is_none());
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("CROPGUARD_TEST_MODEL_DIR", "/opt/models");
        let config = Config::from_yaml_str(
            "classifier:\n  model_path: ${CROPGUARD_TEST_MODEL_DIR}/forest.json\n",
        )
        .unwrap();
        assert_eq!(
            config.classifier.model_path,
            Some(PathBuf::from("/opt/models/forest.json"))
        );
    }

    #[test]
    fn unset_variable_reads_as_absent_path() {
        let config = Config::from_yaml_str(
            "classifier:\n  model_path: \"${CROPGUARD_TEST_UNSET_VARIABLE}\"\n",
        )
        .unwrap();
        assert!(config.classifier.effective_model_path().is_none());
    }

    #[test]
    fn invalid_yaml_is_config_error() {
        let err = Config::from_yaml_str("classifier: [not, a, map").unwrap_err();
        assert!(matches!(err, CropGuardError::Config(_)));
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let err = Config::load(Some(Path::new("/nonexistent/cropguard.yaml"))).unwrap_err();
        assert!(matches!(err, CropGuardError::Config(_)));
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "classifier:\n  enabled: false").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert!(!config.classifier.enabled);
    }
}
