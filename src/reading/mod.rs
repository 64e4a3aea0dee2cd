//! Reading generation: ordering, prompt assembly, and the external
//! interpretation collaborator boundary.

mod interpreter;
mod orchestrator;
mod placeholder;

pub use interpreter::{GenerativeClient, Interpreter};
pub use orchestrator::{build_prompt, can_generate, reading_order, Reading, ReadingOrchestrator};
pub use placeholder::{hash_code, svg_placeholder};
