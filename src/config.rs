//! Session option store and the render settings derived from it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const IMM_HASH: &str = "imm.hash";
pub const IMM_SIGN: &str = "imm.sign";
pub const SDK: &str = "sdk";
pub const REG_ALIAS: &str = "reg.alias";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("option node missing")]
    MissingNode,
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("option `{0}` registered twice")]
    Duplicate(String),
    #[error("invalid value `{value}` for option `{name}`")]
    InvalidValue { name: String, value: String },
}

/// Formatting switches read by the renderer; a snapshot of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    #[serde(rename = "imm.hash")]
    pub imm_hash: bool,
    #[serde(rename = "imm.sign")]
    pub imm_sign: bool,
    pub sdk: bool,
    #[serde(rename = "reg.alias")]
    pub reg_alias: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { imm_hash: true, imm_sign: true, sdk: false, reg_alias: true }
    }
}

/// One named boolean option, shareable between the session and outside callers.
#[derive(Debug)]
pub struct OptionNode {
    name: String,
    desc: String,
    value: AtomicBool,
}

impl OptionNode {
    pub fn new(name: impl Into<String>, desc: impl Into<String>, value: bool) -> Arc<Self> {
        Arc::new(Self { name: name.into(), desc: desc.into(), value: AtomicBool::new(value) })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn get(&self) -> bool {
        self.value.load(Ordering::Relaxed)
    }

    pub fn set(&self, value: bool) {
        self.value.store(value, Ordering::Relaxed);
    }
}

pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" => Some(true),
        "false" | "0" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct ConfigStore {
    nodes: Vec<Arc<OptionNode>>,
}

impl ConfigStore {
    /// Store holding the four rendering options at their defaults.
    pub fn new() -> Result<Self, ConfigError> {
        let d = RenderConfig::default();
        let mut store = Self::default();
        store.register(IMM_HASH, "Prefix 32-bit immediates with ##", d.imm_hash)?;
        store.register(IMM_SIGN, "Show negative immediates with a minus sign", d.imm_sign)?;
        store.register(SDK, "Use SDK-style { } packet syntax", d.sdk)?;
        store.register(REG_ALIAS, "Use register aliases (SP, LR, USR, ...)", d.reg_alias)?;
        Ok(store)
    }

    pub fn register(&mut self, name: &str, desc: &str, value: bool) -> Result<Arc<OptionNode>, ConfigError> {
        if self.node(name).is_some() {
            return Err(ConfigError::Duplicate(name.to_string()));
        }
        let node = OptionNode::new(name, desc, value);
        self.nodes.push(Arc::clone(&node));
        Ok(node)
    }

    /// The session's own node for `name`.
    pub fn node(&self, name: &str) -> Option<Arc<OptionNode>> {
        self.nodes.iter().find(|n| n.name == name).cloned()
    }

    fn lookup(&self, name: &str) -> Result<&Arc<OptionNode>, ConfigError> {
        self.nodes
            .iter()
            .find(|n| n.name == name)
            .ok_or_else(|| ConfigError::UnknownOption(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Result<bool, ConfigError> {
        Ok(self.lookup(name)?.get())
    }

    pub fn set(&self, name: &str, value: bool) -> Result<(), ConfigError> {
        let node = self.lookup(name)?;
        if node.get() != value {
            tracing::debug!("option {name} = {value}");
        }
        node.set(value);
        Ok(())
    }

    pub fn set_str(&self, name: &str, value: &str) -> Result<(), ConfigError> {
        let v = parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        })?;
        self.set(name, v)
    }

    /// `name=value`, as given on a command line.
    pub fn set_assignment(&self, assignment: &str) -> Result<(), ConfigError> {
        match assignment.split_once('=') {
            Some((name, value)) => self.set_str(name.trim(), value),
            None => Err(ConfigError::InvalidValue {
                name: assignment.to_string(),
                value: String::new(),
            }),
        }
    }

    /// Bring the session's node in line with a node handed in from outside.
    ///
    /// The session's own node is a no-op; a distinct node with the same name
    /// has its value copied in. Nothing changes on error.
    pub fn update(&self, node: Option<&Arc<OptionNode>>) -> Result<(), ConfigError> {
        let node = node.ok_or(ConfigError::MissingNode)?;
        let own = self.lookup(node.name())?;
        if Arc::ptr_eq(own, node) {
            return Ok(());
        }
        self.set(node.name(), node.get())
    }

    pub fn snapshot(&self) -> RenderConfig {
        let get = |name| self.lookup(name).map(|n| n.get());
        let d = RenderConfig::default();
        RenderConfig {
            imm_hash: get(IMM_HASH).unwrap_or(d.imm_hash),
            imm_sign: get(IMM_SIGN).unwrap_or(d.imm_sign),
            sdk: get(SDK).unwrap_or(d.sdk),
            reg_alias: get(REG_ALIAS).unwrap_or(d.reg_alias),
        }
    }

    pub fn apply(&self, cfg: &RenderConfig) -> Result<(), ConfigError> {
        self.set(IMM_HASH, cfg.imm_hash)?;
        self.set(IMM_SIGN, cfg.imm_sign)?;
        self.set(SDK, cfg.sdk)?;
        self.set(REG_ALIAS, cfg.reg_alias)
    }

    pub fn list(&self) -> impl Iterator<Item = &OptionNode> {
        self.nodes.iter().map(|n| n.as_ref())
    }
}
