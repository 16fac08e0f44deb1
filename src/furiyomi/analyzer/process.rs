use super::placeholder::{decode_line, encode_line, ensure_drained, restore};
use crate::config::ToolConfig;
use crate::error::{FuriError, Result};
use encoding_rs::Encoding;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

/// Decoded response to one request line, placeholders still in place.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub output: String,
    pub extracted: VecDeque<char>,
}

struct Running {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

/// A long-lived line-oriented child process.
///
/// The process is spawned on the first request and kept for the life of the
/// value. Requests are strictly sequential: one line is written and one line
/// is read back before the next request can start, since the pipe carries no
/// request ids. A process that dies is not respawned.
pub struct LineProcess {
    program: String,
    args: Vec<String>,
    encoding: &'static Encoding,
    running: Option<Running>,
}

impl LineProcess {
    pub fn new(program: impl Into<String>, args: Vec<String>, encoding: &'static Encoding) -> Self {
        Self {
            program: program.into(),
            args,
            encoding,
            running: None,
        }
    }

    pub fn from_config(tool: &ToolConfig) -> Result<Self> {
        let encoding = Encoding::for_label(tool.encoding.as_bytes()).ok_or_else(|| {
            FuriError::Config(format!(
                "unknown encoding '{}' for {}",
                tool.encoding, tool.program
            ))
        })?;
        Ok(Self::new(tool.program.clone(), tool.args.clone(), encoding))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    fn ensure_open(&mut self) -> Result<&mut Running> {
        if self.running.is_none() {
            tracing::debug!(program = %self.program, args = ?self.args, "spawning tool");
            let mut child = Command::new(&self.program)
                .args(&self.args)
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::null())
                .spawn()
                .map_err(|source| FuriError::ProcessSpawn {
                    program: self.program.clone(),
                    source,
                })?;
            let stdin = child.stdin.take().ok_or_else(|| {
                FuriError::ProtocolViolation(format!("{} has no stdin pipe", self.program))
            })?;
            let stdout = child.stdout.take().ok_or_else(|| {
                FuriError::ProtocolViolation(format!("{} has no stdout pipe", self.program))
            })?;
            self.running = Some(Running {
                child,
                stdin,
                stdout: BufReader::new(stdout),
            });
        }
        match self.running.as_mut() {
            Some(running) => Ok(running),
            None => Err(FuriError::ProtocolViolation(format!(
                "{} is not running",
                self.program
            ))),
        }
    }

    /// Sends one line and reads one line back, leaving placeholders for the
    /// caller to restore.
    pub fn exchange(&mut self, line: &str) -> Result<Exchange> {
        let encoding = self.encoding;
        let program = self.program.clone();
        let encoded = encode_line(line, encoding);
        let running = self.ensure_open()?;

        running.stdin.write_all(&encoded.bytes)?;
        running.stdin.write_all(b"\n")?;
        running.stdin.flush()?;

        let mut buf = Vec::new();
        let read = running.stdout.read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Err(FuriError::ProtocolViolation(format!(
                "{} closed its output",
                program
            )));
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }

        let output = decode_line(&buf, encoding)?;
        tracing::trace!(program = %program, input = line, output = %output, "round trip");
        Ok(Exchange {
            output,
            extracted: encoded.extracted,
        })
    }

    /// Round trip with every placeholder restored in order.
    pub fn request(&mut self, line: &str) -> Result<String> {
        let Exchange {
            output,
            mut extracted,
        } = self.exchange(line)?;
        let (restored, _) = restore(&output, &mut extracted)?;
        ensure_drained(&extracted)?;
        Ok(restored)
    }
}

impl Drop for LineProcess {
    fn drop(&mut self) {
        if let Some(mut running) = self.running.take() {
            let _ = running.child.kill();
            let _ = running.child.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::EUC_JP;

    #[test]
    fn missing_binary_reports_spawn_failure() {
        let mut process = LineProcess::new("/nonexistent/furiyomi-mecab", vec![], EUC_JP);
        let err = process.request("漢字").unwrap_err();
        assert!(matches!(err, FuriError::ProcessSpawn { .. }));
        assert!(err.to_string().contains("64-bit binary support"));
        assert!(!process.is_running());
    }

    #[test]
    fn process_is_spawned_lazily() {
        let process = LineProcess::new("cat", vec![], EUC_JP);
        assert!(!process.is_running());
    }

    #[cfg(unix)]
    #[test]
    fn echo_round_trip_restores_unencodable_characters() {
        let mut process = LineProcess::new("cat", vec![], EUC_JP);
        assert_eq!(process.request("漢字😀かな").unwrap(), "漢字😀かな");
        assert_eq!(process.request("\u{1}ok").unwrap(), "\u{1}ok");
        assert_eq!(process.request("¥100−3").unwrap(), "¥100−3");
        assert!(process.is_running());
    }

    #[test]
    fn unknown_encoding_label_is_a_config_error() {
        let tool = ToolConfig {
            program: "mecab".to_string(),
            args: vec![],
            encoding: "klingon".to_string(),
        };
        assert!(matches!(
            LineProcess::from_config(&tool),
            Err(FuriError::Config(_))
        ));
    }
}
