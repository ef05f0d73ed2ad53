use crate::core::geometry::{DEFAULT_EXTRA_REVOLUTIONS, DEFAULT_MIN_REVOLUTIONS};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SpinnerError};
use crate::utils::validation::{validate_file_name, validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DATA_DIR: &str = "./.lunch-spinner";
pub const DEFAULT_FILE_NAME: &str = "restaurant-spinner-data.json";
pub const DEFAULT_SPIN_DURATION_MS: u64 = 4000;
pub const MAX_MIN_REVOLUTIONS: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinnerConfig {
    pub wheel: WheelConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub spin_duration_ms: u64,
    pub min_revolutions: u32,
    pub extra_revolutions: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            min_revolutions: DEFAULT_MIN_REVOLUTIONS,
            extra_revolutions: DEFAULT_EXTRA_REVOLUTIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl SpinnerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SpinnerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SpinnerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LUNCH_DATA_DIR})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SpinnerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("storage.data_dir", &self.storage.data_dir)?;
        validate_file_name("storage.file_name", &self.storage.file_name)?;
        validate_range(
            "wheel.min_revolutions",
            self.wheel.min_revolutions,
            1,
            MAX_MIN_REVOLUTIONS,
        )?;
        validate_range("wheel.extra_revolutions", self.wheel.extra_revolutions, 0, 10)?;
        validate_range("wheel.spin_duration_ms", self.wheel.spin_duration_ms, 0, 60_000)?;
        Ok(())
    }
}

impl ConfigProvider for SpinnerConfig {
    fn data_path(&self) -> PathBuf {
        Path::new(&self.storage.data_dir).join(&self.storage.file_name)
    }

    fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.wheel.spin_duration_ms)
    }

    fn min_revolutions(&self) -> u32 {
        self.wheel.min_revolutions
    }

    fn extra_revolutions(&self) -> u32 {
        self.wheel.extra_revolutions
    }
}

impl Validate for SpinnerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[wheel]
spin_duration_ms = 2500
min_revolutions = 3
extra_revolutions = 1

[storage]
data_dir = "/tmp/lunch"
file_name = "team.json"
"#;

        let config = SpinnerConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.spin_duration(), Duration::from_millis(2500));
        assert_eq!(config.min_revolutions(), 3);
        assert_eq!(config.extra_revolutions(), 1);
        assert_eq!(config.data_path(), PathBuf::from("/tmp/lunch/team.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = SpinnerConfig::from_toml_str("[wheel]\nmin_revolutions = 6\n").unwrap();

        assert_eq!(config.wheel.min_revolutions, 6);
        assert_eq!(config.wheel.extra_revolutions, DEFAULT_EXTRA_REVOLUTIONS);
        assert_eq!(config.wheel.spin_duration_ms, 4000);
        assert_eq!(config.storage, StorageConfig::default());
        assert_eq!(SpinnerConfig::from_toml_str("").unwrap(), SpinnerConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LUNCH_SPINNER_TEST_DIR", "/srv/lunch");

        let config =
            SpinnerConfig::from_toml_str("[storage]\ndata_dir = \"${LUNCH_SPINNER_TEST_DIR}\"\n")
                .unwrap();
        assert_eq!(config.storage.data_dir, "/srv/lunch");

        std::env::remove_var("LUNCH_SPINNER_TEST_DIR");
    }

    #[test]
    fn test_config_validation() {
        let config = SpinnerConfig::from_toml_str("[wheel]\nmin_revolutions = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config =
            SpinnerConfig::from_toml_str("[storage]\nfile_name = \"a/b.json\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_min_revolutions_is_rejected() {
        let config = SpinnerConfig::from_toml_str(
            "[wheel]\nmin_revolutions = 4294967295\nextra_revolutions = 2\n",
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            SpinnerError::InvalidConfigValueError { ref field, .. } if field == "wheel.min_revolutions"
        ));

        let config = SpinnerConfig::from_toml_str("[wheel]\nmin_revolutions = 100\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = SpinnerConfig::from_toml_str("[wheel\n").unwrap_err();
        assert!(matches!(err, SpinnerError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[wheel]\nspin_duration_ms = 100\n")
            .unwrap();

        let config = SpinnerConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.wheel.spin_duration_ms, 100);
    }
}
