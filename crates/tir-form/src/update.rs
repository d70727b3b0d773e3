//! # Update-Detection Rules
//!
//! Pure functions deciding whether a field counts as "updated". The system
//! distinguishes "did the reviewer touch this" (for fields with no
//! prefill) from "did the reviewer change this from the boilerplate" (for
//! prefilled fields): an unedited boilerplate answer must not be reported
//! as addressed.
//!
//! Both rules compare trimmed text, are idempotent, and are fully
//! reversible — reverting a value to its baseline un-marks it.

/// Whether a primary value counts as updated against its baseline.
///
/// With a non-blank baseline, the value is updated iff its trimmed text
/// differs from the trimmed baseline. With a blank baseline, the value is
/// updated iff it is non-blank after trimming.
pub fn value_updated(baseline: &str, value: &str) -> bool {
    let baseline = baseline.trim();
    let value = value.trim();
    if baseline.is_empty() {
        !value.is_empty()
    } else {
        value != baseline
    }
}

/// Whether a dedicated reply field counts as updated: any non-blank text
/// marks it, clearing the text un-marks it. No baseline comparison applies.
pub fn reply_updated(reply: &str) -> bool {
    !reply.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── blank baseline ───────────────────────────────────────────────

    #[test]
    fn test_blank_baseline_blank_value_not_updated() {
        assert!(!value_updated("", ""));
        assert!(!value_updated("", "   "));
        assert!(!value_updated("  ", "\n\t"));
    }

    #[test]
    fn test_blank_baseline_any_text_updated() {
        assert!(value_updated("", "x"));
        assert!(value_updated("", "  some reply  "));
    }

    // ── prefilled baseline ───────────────────────────────────────────

    #[test]
    fn test_prefill_unchanged_not_updated() {
        assert!(!value_updated("Not applied.", "Not applied."));
    }

    #[test]
    fn test_prefill_whitespace_variations_not_updated() {
        assert!(!value_updated("Not applied.", "  Not applied.  "));
        assert!(!value_updated("  Not applied.", "Not applied.\n"));
    }

    #[test]
    fn test_prefill_changed_updated() {
        assert!(value_updated("Not applied.", "Applied since 2024."));
    }

    #[test]
    fn test_prefill_cleared_counts_as_updated() {
        // Deleting the boilerplate is a change from the baseline.
        assert!(value_updated("Not applied.", ""));
    }

    #[test]
    fn test_reverting_to_prefill_unmarks() {
        let baseline = "No temporary exceptions.";
        assert!(value_updated(baseline, "One exception."));
        assert!(!value_updated(baseline, baseline));
    }

    #[test]
    fn test_interior_whitespace_is_significant() {
        assert!(value_updated("Not applied.", "Not  applied."));
    }

    // ── reply rule ───────────────────────────────────────────────────

    #[test]
    fn test_reply_blank_not_updated() {
        assert!(!reply_updated(""));
        assert!(!reply_updated("   \n"));
    }

    #[test]
    fn test_reply_text_updated_and_reversible() {
        assert!(reply_updated("ok"));
        assert!(!reply_updated(""));
    }
}
