use serde::Serialize;

/// A yes/no answer to one of the survey questions.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Parse user input: yes/no, y/n, true/false, 1/0 (case-insensitive).
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Some(Self::Yes),
            "no" | "n" | "false" | "0" => Some(Self::No),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }

    /// Convert DB integer → enum. Only 0 and 1 are answers.
    pub fn from_db_int(v: i64) -> Option<Self> {
        match v {
            0 => Some(Answer::No),
            1 => Some(Answer::Yes),
            _ => None,
        }
    }
}
