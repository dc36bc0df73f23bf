use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Snapshot of configuration variables, taken once at startup.
///
/// Values from the process environment win over entries read from a dotenv
/// file. Loading never writes back into the process environment, so tests can
/// build a source from plain pairs.
#[derive(Clone, Debug, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
    dotenv_path: Option<PathBuf>,
    skipped: Vec<String>,
}

impl EnvSource {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Process environment layered over `dotenv_path` (if the file exists).
    pub fn load(dotenv_path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let (process, skipped) = unicode_pairs(std::env::vars_os());
        let mut source = Self::layered(process, dotenv_path)?;
        source.skipped = skipped;
        Ok(source)
    }

    pub fn layered<I>(process: I, dotenv_path: impl AsRef<Path>) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut source = Self::from_pairs(process);
        let path = dotenv_path.as_ref();
        let entries = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => return Ok(source),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to open {}", path.display()));
            }
        };
        for entry in entries {
            let (key, value) =
                entry.with_context(|| format!("failed to parse {}", path.display()))?;
            source.vars.entry(key).or_insert(value);
        }
        source.dotenv_path = Some(path.to_path_buf());
        Ok(source)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// The dotenv file that was read, if one existed.
    pub fn dotenv_path(&self) -> Option<&Path> {
        self.dotenv_path.as_deref()
    }

    /// Process variables left out because their name or value is not UTF-8.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Like [`get`](Self::get) but treats blank values as unset.
    pub fn get_trimmed(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }
}

/// Splits process variables into UTF-8 pairs and the (lossy) names of the rest.
fn unicode_pairs<I>(vars: I) -> (Vec<(String, String)>, Vec<String>)
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut pairs = Vec::new();
    let mut skipped = Vec::new();
    for (key, value) in vars {
        match (key.into_string(), value.into_string()) {
            (Ok(k), Ok(v)) => pairs.push((k, v)),
            (Ok(k), Err(_)) => skipped.push(k),
            (Err(k), _) => skipped.push(k.to_string_lossy().into_owned()),
        }
    }
    (pairs, skipped)
}
