use crate::domain::plants::plant::PlantKnowledge;

pub trait KnowledgeSource: Send + Sync {
    fn describe(&self) -> String;
    fn load(&self) -> anyhow::Result<PlantKnowledge>;
}
