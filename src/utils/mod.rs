pub mod logging;
pub mod prompt;

pub use logging::{build_dispatch, log_startup, truncate_text};
pub use prompt::{ConsolePrompter, Prompter, ScriptedPrompter};
