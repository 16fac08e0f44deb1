use crate::commands::{CmdMessage, CmdResult, FuriPaths};
use crate::config::FuriConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &FuriPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data;
    match action {
        ConfigAction::ShowAll => {
            let config = FuriConfig::load(dir)?;
            let output = config
                .entries()
                .into_iter()
                .map(|(key, value)| format!("{} = {}", key, value))
                .collect();
            Ok(CmdResult::default().with_output(output).with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = FuriConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.output.push(val),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = FuriConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::tempdir;

    #[test]
    fn set_then_show() {
        let dir = tempdir().unwrap();
        let paths = FuriPaths {
            data: dir.path().to_path_buf(),
        };
        let set = run(
            &paths,
            ConfigAction::Set("mecab.program".into(), "/opt/mecab".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].content, "mecab.program set to /opt/mecab");

        let shown = run(&paths, ConfigAction::ShowKey("mecab.program".into())).unwrap();
        assert_eq!(shown.output, ["/opt/mecab"]);

        let all = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(all.output[0], "mecab.program = /opt/mecab");
    }

    #[test]
    fn bad_key_is_reported_not_saved() {
        let dir = tempdir().unwrap();
        let paths = FuriPaths {
            data: dir.path().to_path_buf(),
        };
        let result = run(&paths, ConfigAction::Set("editor".into(), "vi".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }
}
