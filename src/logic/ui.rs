//! UI state transition logic
//!
//! Pure functions for toast timing, focus cycling, and the topK input.

use crate::model::Focus;

/// Bounds the backend clamps topK to
pub const TOP_K_MIN: u32 = 1;
pub const TOP_K_MAX: u32 = 20;

/// Whether a toast shown `elapsed_ms` ago has outlived `duration_ms`
pub fn should_dismiss_toast(elapsed_ms: u128, duration_ms: u128) -> bool {
    elapsed_ms >= duration_ms
}

/// Tab order: drop zone → question → topK → answer → drop zone
pub fn next_focus(current: Focus) -> Focus {
    match current {
        Focus::DropZone => Focus::Question,
        Focus::Question => Focus::TopK,
        Focus::TopK => Focus::Answer,
        Focus::Answer => Focus::DropZone,
    }
}

/// Parse the topK input, falling back to `default` when it isn't a number
///
/// # Examples
/// ```
/// use docqa::logic::ui::parse_top_k;
///
/// assert_eq!(parse_top_k("7", 5), 7);
/// assert_eq!(parse_top_k("", 5), 5);
/// assert_eq!(parse_top_k("abc", 5), 5);
/// assert_eq!(parse_top_k("99", 5), 20);
/// ```
pub fn parse_top_k(input: &str, default: u32) -> u32 {
    let value = input
        .trim()
        .parse::<i64>()
        .unwrap_or(default as i64);
    value.clamp(TOP_K_MIN as i64, TOP_K_MAX as i64) as u32
}

/// Step the topK input up or down, staying within bounds
pub fn step_top_k(input: &str, default: u32, delta: i32) -> String {
    let current = parse_top_k(input, default) as i64;
    (current + delta as i64)
        .clamp(TOP_K_MIN as i64, TOP_K_MAX as i64)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_dismissal() {
        assert!(!should_dismiss_toast(0, 2200));
        assert!(!should_dismiss_toast(2199, 2200));
        assert!(should_dismiss_toast(2200, 2200));
    }

    #[test]
    fn test_focus_cycle_returns_to_start() {
        let mut focus = Focus::DropZone;
        for _ in 0..4 {
            focus = next_focus(focus);
        }
        assert_eq!(focus, Focus::DropZone);
    }

    #[test]
    fn test_parse_top_k_bounds() {
        assert_eq!(parse_top_k("0", 5), 1);
        assert_eq!(parse_top_k("-3", 5), 1);
        assert_eq!(parse_top_k(" 12 ", 5), 12);
        assert_eq!(parse_top_k("2.5", 5), 5);
    }

    #[test]
    fn test_step_top_k() {
        assert_eq!(step_top_k("5", 5, 1), "6");
        assert_eq!(step_top_k("20", 5, 1), "20");
        assert_eq!(step_top_k("1", 5, -1), "1");
        assert_eq!(step_top_k("", 5, -1), "4");
    }
}
