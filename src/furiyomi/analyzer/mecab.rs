use super::placeholder::{ensure_drained, restore};
use super::process::{Exchange, LineProcess};
use super::Segmenter;
use crate::config::ToolConfig;
use crate::error::{FuriError, Result};
use crate::model::Segment;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::VecDeque;

/// Output format arguments: one `surface[reading][base] ` node per token and
/// a bare newline per line. Unknown words echo their surface as base form.
pub const MECAB_FORMAT_ARGS: [&str; 3] = [
    "--node-format=%m[%f[7]][%f[6]] ",
    "--unk-format=%m[][%m] ",
    r"--eos-format=\n",
];

static NODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\[([^\[\]]*)\]\[(.*)\]$").expect("node pattern is valid")
});

/// One node of analyzer output, before it is matched against the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub surface: String,
    pub reading: String,
    pub base: String,
}

/// Parses a single `surface[reading][base]` node.
pub fn parse_node(node: &str) -> Result<Node> {
    let caps = NODE_RE.captures(node).ok_or_else(|| {
        FuriError::ProtocolViolation(format!("malformed analyzer node {:?}", node))
    })?;
    let surface = caps[1].to_string();
    let reading = match &caps[2] {
        "*" => String::new(),
        other => other.to_string(),
    };
    let base = match &caps[3] {
        "" | "*" => surface.clone(),
        other => other.to_string(),
    };
    Ok(Node {
        surface,
        reading,
        base,
    })
}

/// Parses a full output line into nodes.
pub fn parse_output(output: &str) -> Result<Vec<Node>> {
    output
        .split(' ')
        .filter(|node| !node.is_empty())
        .map(parse_node)
        .collect()
}

/// Restores placeholders token by token. The characters a surface consumes
/// are reused for the same token's reading and base, which may echo them.
pub fn restore_nodes(nodes: Vec<Node>, mut extracted: VecDeque<char>) -> Result<Vec<Node>> {
    let mut restored = Vec::with_capacity(nodes.len());
    for node in nodes {
        let (surface, used) = restore(&node.surface, &mut extracted)?;
        let (reading, _) = restore(&node.reading, &mut VecDeque::from(used.clone()))?;
        let (base, _) = restore(&node.base, &mut VecDeque::from(used))?;
        restored.push(Node {
            surface,
            reading,
            base,
        });
    }
    ensure_drained(&extracted)?;
    Ok(restored)
}

/// Lines the nodes up against `line`, turning skipped whitespace into gap
/// segments. Anything else that does not line up is a protocol violation.
pub fn reconcile(line: &str, nodes: Vec<Node>) -> Result<Vec<Segment>> {
    let mut segments = Vec::with_capacity(nodes.len());
    let mut pos = 0;
    for node in nodes {
        if node.surface.is_empty() {
            return Err(FuriError::ProtocolViolation(format!(
                "empty token in analysis of {:?}",
                line
            )));
        }
        let rest = &line[pos..];
        let offset = rest.find(&node.surface).ok_or_else(|| {
            FuriError::ProtocolViolation(format!(
                "token {:?} not found in {:?} at byte {}",
                node.surface, line, pos
            ))
        })?;
        if offset > 0 {
            let gap = &rest[..offset];
            if !gap.chars().all(char::is_whitespace) {
                return Err(FuriError::ProtocolViolation(format!(
                    "analyzer skipped {:?} in {:?}",
                    gap, line
                )));
            }
            segments.push(Segment::gap(gap));
        }
        pos += offset + node.surface.len();
        segments.push(Segment {
            surface: node.surface,
            base: node.base,
            reading: node.reading,
        });
    }
    let tail = &line[pos..];
    if !tail.is_empty() {
        if !tail.chars().all(char::is_whitespace) {
            return Err(FuriError::ProtocolViolation(format!(
                "analyzer dropped {:?} from {:?}",
                tail, line
            )));
        }
        segments.push(Segment::gap(tail));
    }
    Ok(segments)
}

/// Segmenter backed by a long-lived MeCab process.
pub struct MecabSegmenter {
    process: LineProcess,
}

impl MecabSegmenter {
    pub fn new(process: LineProcess) -> Self {
        Self { process }
    }

    pub fn from_config(tool: &ToolConfig) -> Result<Self> {
        Ok(Self::new(LineProcess::from_config(tool)?))
    }

    fn analyze_physical_line(&mut self, line: &str) -> Result<Vec<Segment>> {
        if line.is_empty() {
            return Ok(Vec::new());
        }
        let Exchange { output, extracted } = self.process.exchange(line)?;
        let nodes = restore_nodes(parse_output(&output)?, extracted)?;
        reconcile(line, nodes)
    }
}

impl Segmenter for MecabSegmenter {
    fn analyze(&mut self, text: &str) -> Result<Vec<Segment>> {
        let mut segments = Vec::new();
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                segments.push(Segment::gap("\n"));
            }
            segments.extend(self.analyze_physical_line(line)?);
        }
        Ok(segments)
    }
}
