use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Parse user input: full name or one-letter code, any case.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "running" | "run" | "r" => Some(Self::Running),
            "cycling" | "bike" | "c" => Some(Self::Cycling),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃",
            WorkoutKind::Cycling => "🚴",
        }
    }

    /// Style class of the map popup.
    pub fn popup_class(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running-popup",
            WorkoutKind::Cycling => "cycling-popup",
        }
    }

    /// Style class of the sidebar entry.
    pub fn entry_class(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "workout--running",
            WorkoutKind::Cycling => "workout--cycling",
        }
    }

    pub fn metric_unit(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "min/km",
            WorkoutKind::Cycling => "km/h",
        }
    }

    pub fn field_icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🦶",
            WorkoutKind::Cycling => "⛰",
        }
    }

    pub fn field_unit(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "spm",
            WorkoutKind::Cycling => "m",
        }
    }
}
