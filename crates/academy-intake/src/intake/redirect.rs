use std::fmt;

use url::form_urlencoded;

use super::domain::{CohortMode, Program};
use super::draft::ApplicationDraft;
use super::resolver::ResolvedConfiguration;

pub const SCHEDULE_PATH: &str = "/apply/schedule";

/// Next-step destination produced after a successful submission.
///
/// Query keys behave like `URLSearchParams.set`: each key appears once and keeps the
/// position of its first insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    path: String,
    query: Vec<(&'static str, String)>,
}

impl RedirectTarget {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.query.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.query.push((key, value)),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn location(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish();
        format!("{}?{}", self.path, query)
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location())
    }
}

/// Builds the scheduling redirect from the submitted draft and the configuration the
/// session resolved at mount.
///
/// A demo cohort observed at mount is carried regardless of program, in addition to
/// the course-only check against the draft's own cohort mode.
pub fn compose(
    draft: &ApplicationDraft,
    resolved: &ResolvedConfiguration,
    schedule_path: &str,
) -> RedirectTarget {
    let mut target = RedirectTarget::new(schedule_path);
    target.set("program", draft.program().as_str());

    match draft.program() {
        Program::Course => {
            target.set("course", draft.course.clone());
            target.set("classTime", draft.class_time.as_str());
            if draft.cohort().is_demo() {
                target.set("cohort", CohortMode::DEMO_TOKEN);
            }
        }
        Program::Tutoring => {
            target.set("tutoringPackage", draft.tutoring_package.as_str());
        }
        Program::Membership => {}
    }

    if resolved.cohort.is_demo() {
        target.set("cohort", CohortMode::DEMO_TOKEN);
    }

    target
}
