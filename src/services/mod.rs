// Service exports
pub mod facade;
pub mod generator;
pub mod mapper;
pub mod openai;

pub use facade::AiService;
pub use generator::ExplanationGenerator;
pub use mapper::CategoryMapper;
pub use openai::{GenerationParams, OpenAiClient, OpenAiError};
