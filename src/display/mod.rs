//! On-device display seam
//!
//! The control path only clears the response area and sets the one-line
//! prompt; rendering itself belongs to the device firmware.

pub mod prompt;

use tracing::info;

pub use prompt::{prompt_for_elapsed, ERROR_PROMPT, LISTENING_PROMPT};

/// Graphics/prompt collaborator on the device
pub trait Display: Send + Sync {
    /// Clear the response area
    fn clear_response(&self);

    /// Set the one-line prompt
    fn set_prompt(&self, label: &str);

    /// Set the prompt with a trailing detail, used for error descriptions
    fn set_prompt_with_detail(&self, label: &str, detail: &str);
}

/// Logs prompts instead of driving a real display
pub struct ConsoleDisplay;

impl Display for ConsoleDisplay {
    fn clear_response(&self) {
        info!("Display cleared");
    }

    fn set_prompt(&self, label: &str) {
        info!("Prompt: {}", label);
    }

    fn set_prompt_with_detail(&self, label: &str, detail: &str) {
        info!("Prompt: {}: {}", label, detail);
    }
}
