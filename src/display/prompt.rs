/// Progress labels shown while streaming, highest threshold first
const PROMPTS: [&str; 6] = [
    "Waiting for OpenAI",
    "Listening [=====]",
    "Listening [==== ]",
    "Listening [===  ]",
    "Listening [==   ]",
    "Listening [=    ]",
];

/// Initial label shown when a cycle starts listening
pub const LISTENING_PROMPT: &str = "Listening [     ]";

/// Label prefix for the error display
pub const ERROR_PROMPT: &str = "Error";

/// Map elapsed streaming time to a progress label
///
/// Thresholds descend from 5000 ms in 1000 ms steps; the first one exceeded
/// wins, and anything at or below 1000 ms gets the lowest-progress label.
pub fn prompt_for_elapsed(elapsed_ms: u64) -> &'static str {
    for (i, threshold) in (1000u64..=5000).rev().step_by(1000).enumerate() {
        if elapsed_ms > threshold {
            return PROMPTS[i];
        }
    }
    PROMPTS[5]
}
