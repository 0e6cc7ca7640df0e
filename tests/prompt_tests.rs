// Tests for the elapsed-time prompt selection used while streaming audio.

use wearlink::display::{prompt_for_elapsed, LISTENING_PROMPT};

#[test]
fn past_all_thresholds_shows_waiting_label() {
    assert_eq!(prompt_for_elapsed(5500), "Waiting for OpenAI");
    assert_eq!(prompt_for_elapsed(60_000), "Waiting for OpenAI");
}

#[test]
fn largest_exceeded_threshold_wins() {
    assert_eq!(prompt_for_elapsed(4500), "Listening [=====]");
    assert_eq!(prompt_for_elapsed(3500), "Listening [==== ]");
    assert_eq!(prompt_for_elapsed(2500), "Listening [===  ]");
    assert_eq!(prompt_for_elapsed(1500), "Listening [==   ]");
}

#[test]
fn below_lowest_threshold_falls_through_to_default() {
    assert_eq!(prompt_for_elapsed(500), "Listening [=    ]");
    assert_eq!(prompt_for_elapsed(0), "Listening [=    ]");
    // thresholds are strict: exactly 1000 has not exceeded the lowest one
    assert_eq!(prompt_for_elapsed(1000), "Listening [=    ]");
}

#[test]
fn label_progress_is_monotonic_in_elapsed_time() {
    let labels: Vec<&str> = (0u64..7000).step_by(250).map(prompt_for_elapsed).collect();
    let mut fill_levels: Vec<usize> = labels
        .iter()
        .map(|l| l.chars().filter(|&c| c == '=').count())
        .collect();
    // "Waiting for OpenAI" has no bar; treat it as fuller than full
    for (level, label) in fill_levels.iter_mut().zip(&labels) {
        if *label == "Waiting for OpenAI" {
            *level = 6;
        }
    }
    assert!(fill_levels.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn initial_listening_label_is_empty_bar() {
    assert_eq!(LISTENING_PROMPT, "Listening [     ]");
}
