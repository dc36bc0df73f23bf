pub mod builtin;
pub mod json_file;

use std::path::Path;
use std::sync::Arc;

use crate::application::ports::knowledge_source::KnowledgeSource;

/// JSON file when a path is configured, otherwise the bundled catalogue.
pub fn source_for(path: Option<&Path>) -> Arc<dyn KnowledgeSource> {
    match path {
        Some(p) => Arc::new(json_file::JsonFileKnowledge::new(p)),
        None => Arc::new(builtin::BuiltinKnowledge),
    }
}
