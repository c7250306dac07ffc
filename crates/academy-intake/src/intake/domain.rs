use std::fmt;

use serde::{Deserialize, Serialize};

/// Offering the applicant is enrolling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Program {
    #[default]
    Course,
    Tutoring,
    Membership,
}

impl Program {
    /// Anything other than the exact `Tutoring` or `Membership` tokens is a course application.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("Tutoring") => Self::Tutoring,
            Some("Membership") => Self::Membership,
            _ => Self::Course,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Program::Course => "Course",
            Program::Tutoring => "Tutoring",
            Program::Membership => "Membership",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pricing mode attached to a course application.
///
/// Resolution is default-deny: the mode is [`CohortMode::Paid`] unless the literal
/// token `demo` was observed. There is no other way to obtain [`CohortMode::Demo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CohortMode {
    Demo,
    #[default]
    Paid,
}

impl CohortMode {
    pub const DEMO_TOKEN: &'static str = "demo";

    pub fn paid_unless_demo(value: Option<&str>) -> Self {
        match value {
            Some(Self::DEMO_TOKEN) => Self::Demo,
            _ => Self::Paid,
        }
    }

    pub const fn is_demo(self) -> bool {
        matches!(self, CohortMode::Demo)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CohortMode::Demo => "demo",
            CohortMode::Paid => "paid",
        }
    }
}

/// The two fixed live-class slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClassTime {
    #[default]
    #[serde(rename = "12PM")]
    Noon,
    #[serde(rename = "6PM")]
    Evening,
}

impl ClassTime {
    pub fn from_query(value: Option<&str>) -> Option<Self> {
        match value {
            Some("12PM") => Some(Self::Noon),
            Some("6PM") => Some(Self::Evening),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ClassTime::Noon => "12PM",
            ClassTime::Evening => "6PM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutoringPackage {
    #[default]
    Block4,
    Single,
}

impl TutoringPackage {
    pub const fn as_str(self) -> &'static str {
        match self {
            TutoringPackage::Block4 => "block4",
            TutoringPackage::Single => "single",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_defaults_to_course_for_unknown_tokens() {
        for raw in [None, Some(""), Some("tutoring"), Some("Course"), Some("Bootcamp")] {
            assert_eq!(Program::from_query(raw), Program::Course, "input {raw:?}");
        }
        assert_eq!(Program::from_query(Some("Tutoring")), Program::Tutoring);
        assert_eq!(Program::from_query(Some("Membership")), Program::Membership);
    }

    #[test]
    fn cohort_is_paid_unless_literal_demo() {
        for raw in [None, Some(""), Some("true"), Some("Demo"), Some("DEMO"), Some(" demo")] {
            assert_eq!(CohortMode::paid_unless_demo(raw), CohortMode::Paid, "input {raw:?}");
        }
        assert_eq!(CohortMode::paid_unless_demo(Some("demo")), CohortMode::Demo);
    }

    #[test]
    fn class_time_only_accepts_fixed_slots() {
        assert_eq!(ClassTime::from_query(Some("6PM")), Some(ClassTime::Evening));
        assert_eq!(ClassTime::from_query(Some("12PM")), Some(ClassTime::Noon));
        assert_eq!(ClassTime::from_query(Some("6pm")), None);
        assert_eq!(ClassTime::from_query(None), None);
    }

    #[test]
    fn wire_tokens_match_serde_names() {
        assert_eq!(
            serde_json::to_value(ClassTime::Evening).expect("serializes"),
            serde_json::json!("6PM")
        );
        assert_eq!(
            serde_json::to_value(TutoringPackage::Block4).expect("serializes"),
            serde_json::json!("block4")
        );
        assert_eq!(
            serde_json::to_value(CohortMode::Demo).expect("serializes"),
            serde_json::json!("demo")
        );
    }
}
