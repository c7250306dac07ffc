use serde::{Deserialize, Serialize};

use super::domain::{ClassTime, CohortMode, Program, TutoringPackage};
use super::resolver::ResolvedConfiguration;

pub const DEFAULT_COUNTRY: &str = "United States";

/// Mailing address collected on the form. Every field is optional free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            street: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialHandles {
    pub instagram: String,
    pub tiktok: String,
    pub youtube: String,
    pub soundcloud: String,
    pub spotify: String,
}

/// Unsaved state of the application form for one mounted intake page.
///
/// `program` and `cohort` are private: switching program carries a side effect on the
/// tutoring package, and the cohort mode is only ever set from the resolved URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    program: Program,
    pub course: String,
    pub class_time: ClassTime,
    pub tutoring_package: TutoringPackage,
    pub tutoring_subject: String,
    pub daw: String,
    pub experience: String,
    pub goals: String,
    pub socials: SocialHandles,
    pub email_consent: bool,
    pub sms_consent: bool,
    cohort: CohortMode,
}

impl Default for ApplicationDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: Address::default(),
            program: Program::Course,
            course: String::new(),
            class_time: ClassTime::Noon,
            tutoring_package: TutoringPackage::Block4,
            tutoring_subject: String::new(),
            daw: String::new(),
            experience: String::new(),
            goals: String::new(),
            socials: SocialHandles::default(),
            email_consent: false,
            sms_consent: false,
            cohort: CohortMode::Paid,
        }
    }
}

impl ApplicationDraft {
    /// Fresh draft with the resolved URL configuration applied on top of the defaults.
    pub fn from_resolved(resolved: &ResolvedConfiguration) -> Self {
        let mut draft = Self::default();
        draft.apply_resolved(resolved);
        draft
    }

    pub fn apply_resolved(&mut self, resolved: &ResolvedConfiguration) {
        self.program = resolved.program;
        if let Some(course) = &resolved.course {
            self.course = course.clone();
        }
        if let Some(class_time) = resolved.class_time {
            self.class_time = class_time;
        }
        self.cohort = resolved.cohort;
        if self.program == Program::Tutoring {
            self.tutoring_package = TutoringPackage::default();
        }
    }

    pub fn program(&self) -> Program {
        self.program
    }

    pub fn cohort(&self) -> CohortMode {
        self.cohort
    }

    /// Whether the page should show the free demo banner.
    pub fn shows_demo_banner(&self) -> bool {
        self.cohort.is_demo()
    }

    /// Switching into `Tutoring` resets the package to `block4`.
    pub fn set_program(&mut self, program: Program) {
        if self.program == program {
            return;
        }
        self.program = program;
        if program == Program::Tutoring {
            self.tutoring_package = TutoringPackage::default();
        }
    }

    pub fn apply(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::FirstName(value) => self.first_name = value,
            DraftUpdate::LastName(value) => self.last_name = value,
            DraftUpdate::Email(value) => self.email = value,
            DraftUpdate::Phone(value) => self.phone = value,
            DraftUpdate::Street(value) => self.address.street = value,
            DraftUpdate::City(value) => self.address.city = value,
            DraftUpdate::State(value) => self.address.state = value,
            DraftUpdate::PostalCode(value) => self.address.postal_code = value,
            DraftUpdate::Country(value) => self.address.country = value,
            DraftUpdate::Program(program) => self.set_program(program),
            DraftUpdate::Course(value) => self.course = value,
            DraftUpdate::ClassTime(value) => self.class_time = value,
            DraftUpdate::TutoringPackage(value) => self.tutoring_package = value,
            DraftUpdate::TutoringSubject(value) => self.tutoring_subject = value,
            DraftUpdate::Daw(value) => self.daw = value,
            DraftUpdate::Experience(value) => self.experience = value,
            DraftUpdate::Goals(value) => self.goals = value,
            DraftUpdate::Instagram(value) => self.socials.instagram = value,
            DraftUpdate::Tiktok(value) => self.socials.tiktok = value,
            DraftUpdate::Youtube(value) => self.socials.youtube = value,
            DraftUpdate::Soundcloud(value) => self.socials.soundcloud = value,
            DraftUpdate::Spotify(value) => self.socials.spotify = value,
            DraftUpdate::EmailConsent(value) => self.email_consent = value,
            DraftUpdate::SmsConsent(value) => self.sms_consent = value,
        }
    }

    pub fn apply_all<I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = DraftUpdate>,
    {
        for update in updates {
            self.apply(update);
        }
    }
}

/// One user edit to a single draft field.
///
/// On the wire: `{"field": "firstName", "value": "Ada"}`. There is no
/// variant for the cohort mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum DraftUpdate {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    Street(String),
    City(String),
    State(String),
    PostalCode(String),
    Country(String),
    Program(Program),
    Course(String),
    ClassTime(ClassTime),
    TutoringPackage(TutoringPackage),
    TutoringSubject(String),
    Daw(String),
    Experience(String),
    Goals(String),
    Instagram(String),
    Tiktok(String),
    Youtube(String),
    Soundcloud(String),
    Spotify(String),
    EmailConsent(bool),
    SmsConsent(bool),
}
