use crate::analyzer::kakasi::KAKASI_ARGS;
use crate::analyzer::mecab::MECAB_FORMAT_ARGS;
use crate::error::{FuriError, Result};
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

/// How to launch one external line-oriented tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolConfig {
    pub program: String,
    pub args: Vec<String>,
    /// Encoding label understood by `encoding_rs` (e.g. "EUC-JP").
    pub encoding: String,
}

impl ToolConfig {
    pub fn mecab() -> Self {
        Self {
            program: "mecab".to_string(),
            args: MECAB_FORMAT_ARGS.iter().map(|s| s.to_string()).collect(),
            encoding: "EUC-JP".to_string(),
        }
    }

    pub fn kakasi() -> Self {
        Self {
            program: "kakasi".to_string(),
            args: KAKASI_ARGS.iter().map(|s| s.to_string()).collect(),
            encoding: "Shift_JIS".to_string(),
        }
    }

    fn get(&self, field: &str) -> Option<String> {
        match field {
            "program" => Some(self.program.clone()),
            "args" => serde_json::to_string(&self.args).ok(),
            "encoding" => Some(self.encoding.clone()),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: &str) -> std::result::Result<(), String> {
        match field {
            "program" => {
                if value.trim().is_empty() {
                    return Err("program cannot be empty".to_string());
                }
                self.program = value.to_string();
            }
            "args" => {
                self.args = if value.trim_start().starts_with('[') {
                    serde_json::from_str(value).map_err(|e| format!("invalid args: {}", e))?
                } else {
                    value.split_whitespace().map(|s| s.to_string()).collect()
                };
            }
            "encoding" => match Encoding::for_label(value.as_bytes()) {
                Some(encoding) => self.encoding = encoding.name().to_string(),
                None => return Err(format!("unknown encoding: {}", value)),
            },
            _ => return Err(format!("Unknown config key field: {}", field)),
        }
        Ok(())
    }
}

/// Configuration for furiyomi, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FuriConfig {
    /// Morphological analyzer
    #[serde(default = "ToolConfig::mecab")]
    pub mecab: ToolConfig,

    /// Phonetic converter
    #[serde(default = "ToolConfig::kakasi")]
    pub kakasi: ToolConfig,
}

impl Default for FuriConfig {
    fn default() -> Self {
        Self {
            mecab: ToolConfig::mecab(),
            kakasi: ToolConfig::kakasi(),
        }
    }
}

impl FuriConfig {
    pub const KEYS: [&'static str; 6] = [
        "mecab.program",
        "mecab.args",
        "mecab.encoding",
        "kakasi.program",
        "kakasi.args",
        "kakasi.encoding",
    ];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FuriError::Io)?;
        let config: FuriConfig =
            serde_json::from_str(&content).map_err(FuriError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FuriError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FuriError::Serialization)?;
        fs::write(config_path, content).map_err(FuriError::Io)?;
        Ok(())
    }

    fn tool(&self, name: &str) -> Option<&ToolConfig> {
        match name {
            "mecab" => Some(&self.mecab),
            "kakasi" => Some(&self.kakasi),
            _ => None,
        }
    }

    /// Value of a dotted key such as `mecab.program`.
    pub fn get(&self, key: &str) -> Option<String> {
        let (tool, field) = key.split_once('.')?;
        self.tool(tool)?.get(field)
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let tool = match key.split_once('.') {
            Some(("mecab", field)) => (&mut self.mecab, field),
            Some(("kakasi", field)) => (&mut self.kakasi, field),
            _ => return Err(format!("Unknown config key: {}", key)),
        };
        tool.0.set(tool.1, value)
    }

    /// Every key with its current value, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|&key| self.get(key).map(|value| (key, value)))
            .collect()
    }
}
