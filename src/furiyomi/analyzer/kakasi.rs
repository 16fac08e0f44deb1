use super::process::LineProcess;
use super::PhoneticConverter;
use crate::config::ToolConfig;
use crate::error::Result;

/// Shift_JIS in and out, kanji and katakana converted to hiragana.
pub const KAKASI_ARGS: [&str; 5] = ["-isjis", "-osjis", "-u", "-JH", "-KH"];

/// Phonetic converter backed by a long-lived KAKASI process.
pub struct KakasiConverter {
    process: LineProcess,
}

impl KakasiConverter {
    pub fn new(process: LineProcess) -> Self {
        Self { process }
    }

    pub fn from_config(tool: &ToolConfig) -> Result<Self> {
        Ok(Self::new(LineProcess::from_config(tool)?))
    }
}

impl PhoneticConverter for KakasiConverter {
    fn to_reading_script(&mut self, text: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }
        self.process.request(text)
    }
}
