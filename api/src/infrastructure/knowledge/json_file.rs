use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::application::ports::knowledge_source::KnowledgeSource;
use crate::domain::plants::plant::{Plant, PlantKnowledge};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlantRecord {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    guide: String,
}

impl From<PlantRecord> for Plant {
    fn from(r: PlantRecord) -> Self {
        Plant {
            name: r.name,
            aliases: r.aliases,
            guide: r.guide,
        }
    }
}

/// Catalogue read from a JSON array of `{name, aliases, guide}` objects.
#[derive(Debug, Clone)]
pub struct JsonFileKnowledge {
    path: PathBuf,
}

impl JsonFileKnowledge {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl KnowledgeSource for JsonFileKnowledge {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> anyhow::Result<PlantKnowledge> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read plant knowledge {}", self.path.display()))?;
        let records: Vec<PlantRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse plant knowledge {}", self.path.display()))?;
        let plants = records.into_iter().map(Plant::from).collect();
        PlantKnowledge::new(plants)
            .with_context(|| format!("invalid plant knowledge {}", self.path.display()))
    }
}
