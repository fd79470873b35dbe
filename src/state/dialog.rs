//! Contact dialog state, independent of any live document so it can be
//! exercised directly in tests. The Yew component in
//! `components::email_modal` owns the DOM wiring.

/// Every page trigger that opens the contact dialog pre-filled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Inquiry {
    StartProject,
    ScheduleConsultation,
    GetStarted,
    StartProjectCta,
    ContactQuestion,
    FreeConsultation,
    FooterContact,
}

impl Inquiry {
    pub const ALL: [Inquiry; 7] = [
        Inquiry::StartProject,
        Inquiry::ScheduleConsultation,
        Inquiry::GetStarted,
        Inquiry::StartProjectCta,
        Inquiry::ContactQuestion,
        Inquiry::FreeConsultation,
        Inquiry::FooterContact,
    ];

    /// The literal `(subject, body, submit label)` for this trigger.
    pub fn template(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Inquiry::StartProject => (
                "Project Inquiry - NextVolve",
                "Hi NextVolve team,\n\nI'm interested in starting a software development project. I'd like to discuss my requirements and get a quote.\n\nProject details:\n- \n\nPlease contact me to schedule a consultation.\n\nBest regards,",
                "Send Project Inquiry",
            ),
            Inquiry::ScheduleConsultation => (
                "Schedule a Consultation - NextVolve",
                "Hi NextVolve team,\n\nI'm interested in scheduling a consultation to discuss my software development project.\n\nProject details:\n- Type of software: \n- Timeline: \n- Budget range: \n- Specific requirements: \n\nPreferred consultation time:\n- \n\nPlease let me know your availability.\n\nBest regards,",
                "Schedule Consultation",
            ),
            // Blank subject and body on purpose, the visitor writes their own.
            Inquiry::GetStarted => ("", "", "Start My Project"),
            Inquiry::StartProjectCta => (
                "Project Inquiry - NextVolve",
                "Hi NextVolve team,\n\nI'm ready to start my software development project! I'd like to discuss my requirements and get a detailed quote.\n\nProject details:\n- \n\nPlease contact me to schedule a consultation.\n\nBest regards,",
                "Send Project Inquiry",
            ),
            Inquiry::ContactQuestion => (
                "General Inquiry - NextVolve",
                "Hi NextVolve team,\n\nI have some questions about your software development services.\n\nQuestions:\n- \n\nPlease get back to me at your earliest convenience.\n\nBest regards,",
                "Send Message",
            ),
            Inquiry::FreeConsultation => (
                "Free Consultation Request - NextVolve",
                "Hi NextVolve team,\n\nI have some questions about your software development services and would like to schedule a free consultation.\n\nQuestions:\n- \n\nProject details:\n- \n\nPlease get back to me at your earliest convenience.\n\nBest regards,",
                "Send Inquiry",
            ),
            Inquiry::FooterContact => (
                "General Inquiry - NextVolve",
                "Hi NextVolve team,\n\nI have some questions about your software development services.\n\nQuestions:\n- \n\nPlease get back to me at your earliest convenience.\n\nBest regards,",
                "Send Message",
            ),
        }
    }
}

/// Runtime state of the contact dialog. Lives in a `use_state` handle on the
/// landing page, so every mutation produces the next value.
#[derive(Clone, PartialEq, Debug)]
pub struct DialogState {
    pub is_open: bool,
    pub subject_text: String,
    pub body_text: String,
    pub submit_label: String,
}

impl DialogState {
    pub fn closed() -> Self {
        Self {
            is_open: false,
            subject_text: String::new(),
            body_text: String::new(),
            submit_label: "Send Message".to_string(),
        }
    }

    /// Open with the given content. Calling while already open just replaces
    /// the content fields.
    pub fn open(&self, subject: &str, body: &str, submit_label: &str) -> Self {
        Self {
            is_open: true,
            subject_text: subject.to_string(),
            body_text: body.to_string(),
            submit_label: submit_label.to_string(),
        }
    }

    pub fn open_inquiry(&self, inquiry: Inquiry) -> Self {
        let (subject, body, label) = inquiry.template();
        self.open(subject, body, label)
    }

    /// Close, keeping the content fields. Idempotent.
    pub fn close(&self) -> Self {
        Self {
            is_open: false,
            ..self.clone()
        }
    }
}

/// What the submit handler captured from the form.
#[derive(Clone, PartialEq, Debug)]
pub struct Submission {
    pub subject: String,
    pub body: String,
    pub email: String,
    pub name: String,
}

/// Resolve the four submitted fields. Empty named-form subject/body fall back
/// to the dialog's pre-filled content.
pub fn resolve_submission(
    form_subject: &str,
    form_body: &str,
    email: &str,
    name: &str,
    state: &DialogState,
) -> Submission {
    let subject = if form_subject.is_empty() {
        state.subject_text.clone()
    } else {
        form_subject.to_string()
    };
    let body = if form_body.is_empty() {
        state.body_text.clone()
    } else {
        form_body.to_string()
    };
    Submission {
        subject,
        body,
        email: email.to_string(),
        name: name.to_string(),
    }
}

/// Focus-trap wrap computation for a Tab key press inside the open dialog.
///
/// `active` is the position of the currently focused control within the
/// dialog's focusable descendants (`None` when focus sits elsewhere), `len`
/// the number of focusables. Returns the index to move focus to when the
/// press must be intercepted; `None` lets the browser's default motion stand.
pub fn trap_target(active: Option<usize>, len: usize, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match active {
        Some(0) if backwards => Some(len - 1),
        Some(i) if !backwards && i == len - 1 => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_inquiry_fills_fields_from_template() {
        let closed = DialogState::closed();
        for inquiry in Inquiry::ALL {
            let (subject, body, label) = inquiry.template();
            let opened = closed.open_inquiry(inquiry);
            assert!(opened.is_open);
            assert_eq!(opened.subject_text, subject);
            assert_eq!(opened.body_text, body);
            assert_eq!(opened.submit_label, label);
        }
    }

    #[test]
    fn start_project_template_literal() {
        let state = DialogState::closed().open_inquiry(Inquiry::StartProject);
        assert_eq!(state.subject_text, "Project Inquiry - NextVolve");
        assert!(state.body_text.starts_with("Hi NextVolve team,\n\n"));
        assert!(state.body_text.ends_with("Best regards,"));
        assert_eq!(state.submit_label, "Send Project Inquiry");
    }

    #[test]
    fn get_started_template_is_blank() {
        let state = DialogState::closed().open_inquiry(Inquiry::GetStarted);
        assert!(state.is_open);
        assert_eq!(state.subject_text, "");
        assert_eq!(state.body_text, "");
        assert_eq!(state.submit_label, "Start My Project");
    }

    #[test]
    fn reopening_replaces_content() {
        let state = DialogState::closed()
            .open_inquiry(Inquiry::StartProject)
            .open_inquiry(Inquiry::ContactQuestion);
        assert!(state.is_open);
        assert_eq!(state.subject_text, "General Inquiry - NextVolve");
        assert_eq!(state.submit_label, "Send Message");
    }

    #[test]
    fn close_is_idempotent() {
        let once = DialogState::closed().open_inquiry(Inquiry::StartProject).close();
        let twice = once.close();
        assert!(!once.is_open);
        assert_eq!(once, twice);
    }

    #[test]
    fn submission_uses_named_fields_when_present() {
        let state = DialogState::closed().open_inquiry(Inquiry::StartProject);
        let sub = resolve_submission(
            "My own subject",
            "My own message",
            "ada@example.com",
            "Ada",
            &state,
        );
        assert_eq!(sub.subject, "My own subject");
        assert_eq!(sub.body, "My own message");
        assert_eq!(sub.email, "ada@example.com");
        assert_eq!(sub.name, "Ada");
    }

    #[test]
    fn submission_falls_back_to_dialog_content() {
        let state = DialogState::closed().open_inquiry(Inquiry::FreeConsultation);
        let sub = resolve_submission("", "", "ada@example.com", "Ada", &state);
        assert_eq!(sub.subject, state.subject_text);
        assert_eq!(sub.body, state.body_text);
    }

    #[test]
    fn trap_wraps_at_both_ends() {
        // two focusables A=0, B=1
        assert_eq!(trap_target(Some(1), 2, false), Some(0)); // Tab on last -> first
        assert_eq!(trap_target(Some(0), 2, true), Some(1)); // Shift+Tab on first -> last
    }

    #[test]
    fn trap_passes_through_in_the_middle() {
        assert_eq!(trap_target(Some(1), 3, false), None);
        assert_eq!(trap_target(Some(1), 3, true), None);
        assert_eq!(trap_target(None, 3, false), None);
    }

    #[test]
    fn trap_with_single_focusable_stays_put() {
        assert_eq!(trap_target(Some(0), 1, false), Some(0));
        assert_eq!(trap_target(Some(0), 1, true), Some(0));
    }

    #[test]
    fn trap_with_no_focusables_is_a_noop() {
        assert_eq!(trap_target(None, 0, false), None);
        assert_eq!(trap_target(Some(3), 0, true), None);
    }
}
