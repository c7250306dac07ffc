use super::domain::Program;
use super::draft::ApplicationDraft;

/// First failing submit-time rule. The display text is shown to the applicant as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your first name.")]
    MissingFirstName,
    #[error("Please enter your last name.")]
    MissingLastName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter your phone number.")]
    MissingPhone,
    #[error("Please select a course.")]
    MissingCourse,
    #[error("Please tell us what you'd like tutoring in.")]
    MissingTutoringSubject,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks the draft in a fixed order and stops at the first failure.
///
/// Only presence is checked; email and phone have no format rules.
pub fn validate(draft: &ApplicationDraft) -> Result<(), ValidationError> {
    if is_blank(&draft.first_name) {
        return Err(ValidationError::MissingFirstName);
    }
    if is_blank(&draft.last_name) {
        return Err(ValidationError::MissingLastName);
    }
    if is_blank(&draft.email) {
        return Err(ValidationError::MissingEmail);
    }
    if is_blank(&draft.phone) {
        return Err(ValidationError::MissingPhone);
    }

    match draft.program() {
        Program::Course if draft.course.is_empty() => Err(ValidationError::MissingCourse),
        Program::Tutoring if is_blank(&draft.tutoring_subject) => {
            Err(ValidationError::MissingTutoringSubject)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::draft::DraftUpdate;

    fn contact_complete() -> ApplicationDraft {
        let mut draft = ApplicationDraft::default();
        draft.first_name = "Ada".to_string();
        draft.last_name = "Lovelace".to_string();
        draft.email = "ada@example.com".to_string();
        draft.phone = "555-0100".to_string();
        draft
    }

    #[test]
    fn reports_first_failure_only() {
        let mut draft = contact_complete();
        draft.first_name.clear();
        draft.email = "   ".to_string();
        assert_eq!(validate(&draft), Err(ValidationError::MissingFirstName));
    }

    #[test]
    fn contact_rules_run_in_order() {
        let mut draft = contact_complete();
        draft.last_name = "\t".to_string();
        draft.phone.clear();
        assert_eq!(validate(&draft), Err(ValidationError::MissingLastName));

        let mut draft = contact_complete();
        draft.email.clear();
        draft.phone.clear();
        assert_eq!(validate(&draft), Err(ValidationError::MissingEmail));

        let mut draft = contact_complete();
        draft.phone = " ".to_string();
        assert_eq!(validate(&draft), Err(ValidationError::MissingPhone));
    }

    #[test]
    fn email_and_phone_have_no_format_rules() {
        let mut draft = contact_complete();
        draft.email = "definitely not an email".to_string();
        draft.phone = "call me".to_string();
        draft.course = "Mixing".to_string();
        assert_eq!(validate(&draft), Ok(()));
    }

    #[test]
    fn course_program_requires_course() {
        let draft = contact_complete();
        assert_eq!(validate(&draft), Err(ValidationError::MissingCourse));
    }

    #[test]
    fn tutoring_program_requires_subject() {
        let mut draft = contact_complete();
        draft.apply(DraftUpdate::Program(Program::Tutoring));
        draft.tutoring_subject = "  ".to_string();
        assert_eq!(validate(&draft), Err(ValidationError::MissingTutoringSubject));

        draft.tutoring_subject = "Sound design".to_string();
        assert_eq!(validate(&draft), Ok(()));
    }

    #[test]
    fn membership_only_needs_contact() {
        let mut draft = contact_complete();
        draft.apply(DraftUpdate::Program(Program::Membership));
        assert_eq!(validate(&draft), Ok(()));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingFirstName.to_string(),
            "Please enter your first name."
        );
    }
}
