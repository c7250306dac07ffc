//! Application intake for the enrollment flow.
//!
//! A session mounts on a page URL, resolves the program/cohort configuration from its
//! query string, collects the applicant's edits into a draft, validates and submits it to
//! the intake endpoint, and composes the redirect into the scheduling step.

pub mod client;
pub mod domain;
pub mod draft;
pub mod navigation;
pub mod payload;
pub mod redirect;
pub mod resolver;
pub mod router;
pub mod service;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use client::{interpret_response, HttpIntakeClient, IntakeClient, SubmissionError};
pub use domain::{ClassTime, CohortMode, Program, TutoringPackage};
pub use draft::{Address, ApplicationDraft, DraftUpdate, SocialHandles};
pub use navigation::NavigationContext;
pub use payload::{build_payload, AddressPayload, SubmissionPayload};
pub use redirect::{compose, RedirectTarget, SCHEDULE_PATH};
pub use resolver::{resolve, ResolvedConfiguration};
pub use router::{intake_router, IntakeView};
pub use service::IntakeService;
pub use session::{IntakeSession, SubmitError, SubmitState};
pub use validation::{validate, ValidationError};
