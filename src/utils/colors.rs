//! ANSI color helper utilities for terminal output.
use crate::models::WorkoutKind;

pub const RESET: &str = "\x1b[0m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Running entries are green, cycling entries yellow (the two popup styles).
pub fn color_for_kind(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => GREEN,
        WorkoutKind::Cycling => YELLOW,
    }
}

pub fn paint(s: &str, color: &str) -> String {
    format!("{color}{s}{RESET}")
}
