//! Delivery text formatting.
//!
//! Pure helpers deciding what the bot says on each path. The scheduled
//! broadcast always emits exactly one message: the fact when generation
//! produced one, a fixed notice otherwise. The on-demand paths get their
//! own fallback so a failed run never surfaces as a blank reply.

use crate::generator::GenerationOutcome;

/// Header line for the scheduled broadcast.
const BROADCAST_HEADER: &str = "\u{1F916} Daily Fun Fact:";

/// Sent on the broadcast path when no new fact was produced.
pub const BROADCAST_FALLBACK: &str = "Couldn't fetch a new fun fact today.";

/// Sent on the on-demand path when no new fact was produced.
pub const REPLY_FALLBACK: &str = "No fresh fact right now, try again in a bit.";

/// Title shown on the inline result card.
pub const INLINE_RESULT_TITLE: &str = "Fun Fact";

/// Message text for the scheduled broadcast.
pub fn broadcast_text(outcome: &GenerationOutcome) -> String {
    match outcome.fact() {
        Some(fact) => format!("{BROADCAST_HEADER}\n{fact}"),
        None => BROADCAST_FALLBACK.to_string(),
    }
}

/// Message text for an on-demand command reply.
pub fn reply_text(outcome: &GenerationOutcome) -> String {
    match outcome.fact() {
        Some(fact) => fact.to_string(),
        None => REPLY_FALLBACK.to_string(),
    }
}

/// Whether an inline query is asking for a fact.
///
/// Case-insensitive substring match, not an exact command.
pub fn is_fact_query(text: &str) -> bool {
    text.to_lowercase().contains("fact")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_text_with_fact() {
        let outcome = GenerationOutcome::Fresh("Honey never spoils.".to_string());
        let text = broadcast_text(&outcome);
        assert!(text.starts_with("\u{1F916} Daily Fun Fact:\n"));
        assert!(text.ends_with("Honey never spoils."));
    }

    #[test]
    fn test_broadcast_fallback_for_soft_failures() {
        assert_eq!(broadcast_text(&GenerationOutcome::Failed), BROADCAST_FALLBACK);
        assert_eq!(
            broadcast_text(&GenerationOutcome::Duplicate),
            BROADCAST_FALLBACK
        );
    }

    #[test]
    fn test_reply_text() {
        let outcome = GenerationOutcome::Fresh("Honey never spoils.".to_string());
        assert_eq!(reply_text(&outcome), "Honey never spoils.");
        assert_eq!(reply_text(&GenerationOutcome::Failed), REPLY_FALLBACK);
    }

    #[test]
    fn test_is_fact_query_matches_substrings() {
        assert!(is_fact_query("fact"));
        assert!(is_fact_query("give me a FACT"));
        assert!(is_fact_query("factual statements please"));
    }

    #[test]
    fn test_is_fact_query_rejects_other_text() {
        assert!(!is_fact_query(""));
        assert!(!is_fact_query("weather tomorrow"));
        assert!(!is_fact_query("fun"));
    }
}
