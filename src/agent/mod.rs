pub mod output_types;
pub mod stateless_llm;
pub mod tutor_prompt;

pub use output_types::*;
pub use stateless_llm::*;
pub use tutor_prompt::TUTOR_SYSTEM_PROMPT;
