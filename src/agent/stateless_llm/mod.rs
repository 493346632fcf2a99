pub mod stateless_llm_interface;
pub mod openai_compatible_llm;

pub use stateless_llm_interface::*;
