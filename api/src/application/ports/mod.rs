pub mod chat_responder;
pub mod knowledge_source;
