pub mod stateless_llm;
pub mod utils;

pub use stateless_llm::*;
