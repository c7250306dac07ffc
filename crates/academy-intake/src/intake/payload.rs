use serde::{Deserialize, Serialize};

use super::domain::{ClassTime, Program};
use super::draft::{Address, ApplicationDraft};

/// Address block sent to the intake endpoint. Blank fields are omitted from the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl AddressPayload {
    fn from_address(address: &Address) -> Self {
        Self {
            street: provided(&address.street),
            city: provided(&address.city),
            state: provided(&address.state),
            postal_code: provided(&address.postal_code),
            country: provided(&address.country),
        }
    }
}

fn provided(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Body of `POST /api/apply`.
///
/// Program-gated fields (`course`, `tutoringSubject`, `classTime`) serialize as `null`
/// when they do not apply, while address fields are omitted when left blank. The
/// endpoint relies on telling those two cases apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub program: Program,
    pub course: Option<String>,
    pub tutoring_subject: Option<String>,
    pub class_time: Option<ClassTime>,
    pub address: AddressPayload,
    pub instagram: String,
    pub tiktok: String,
    pub youtube: String,
    pub soundcloud: String,
    pub spotify: String,
    pub email_consent: bool,
    pub sms_consent: bool,
    pub daw: String,
    pub experience: String,
    pub goals: String,
}

pub fn build_payload(draft: &ApplicationDraft) -> SubmissionPayload {
    let program = draft.program();
    let is_course = program == Program::Course;

    SubmissionPayload {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        program,
        course: is_course.then(|| draft.course.clone()),
        tutoring_subject: (program == Program::Tutoring).then(|| draft.tutoring_subject.clone()),
        class_time: is_course.then_some(draft.class_time),
        address: AddressPayload::from_address(&draft.address),
        instagram: draft.socials.instagram.clone(),
        tiktok: draft.socials.tiktok.clone(),
        youtube: draft.socials.youtube.clone(),
        soundcloud: draft.socials.soundcloud.clone(),
        spotify: draft.socials.spotify.clone(),
        email_consent: draft.email_consent,
        sms_consent: draft.sms_consent,
        daw: draft.daw.clone(),
        experience: draft.experience.clone(),
        goals: draft.goals.clone(),
    }
}
