use serde::Serialize;

use super::domain::{ClassTime, CohortMode, Program};
use super::navigation::NavigationContext;

/// Initial configuration derived from the page URL when a session mounts.
///
/// Computed once and kept for the lifetime of the session; later steps read it from
/// here instead of going back to the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfiguration {
    pub program: Program,
    pub course: Option<String>,
    pub class_time: Option<ClassTime>,
    pub cohort: CohortMode,
}

impl Default for ResolvedConfiguration {
    fn default() -> Self {
        Self {
            program: Program::Course,
            course: None,
            class_time: None,
            cohort: CohortMode::Paid,
        }
    }
}

/// Reads `program`, `course`, `classTime` and `cohort` from the navigation context.
///
/// Unknown or malformed values never fail; they fall back to defaults.
pub fn resolve(context: &NavigationContext) -> ResolvedConfiguration {
    let program = Program::from_query(context.param("program").as_deref());
    let course = context.param("course").filter(|value| !value.is_empty());
    let class_time = ClassTime::from_query(context.param("classTime").as_deref());
    let cohort = CohortMode::paid_unless_demo(context.param("cohort").as_deref());

    ResolvedConfiguration {
        program,
        course,
        class_time,
        cohort,
    }
}
