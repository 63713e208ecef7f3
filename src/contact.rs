//! Contact form submission: field state, the outbound Formspree POST, and
//! the mapping from submission outcome back onto the form.

use thiserror::Error;

/// Third-party endpoint that receives and relays contact messages.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xovazlwk";

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const REJECTED_MESSAGE: &str = "Oops! Something went wrong.";
pub const TRANSPORT_MESSAGE: &str = "Error submitting the form. Please try again.";

/// The three user-editable fields. `Default` is the cleared form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status.
    #[error("form endpoint rejected the submission")]
    Rejected,
    /// The request never completed (network down, DNS, CORS, ...).
    #[error("form submission request could not be completed")]
    Transport,
}

/// Maps the terminal state of a submission attempt onto the form.
///
/// Returns the replacement field state (`Some` only on success, where the
/// form is cleared for the next message - failures leave whatever the user
/// has typed untouched so they can retry) and the status line to show.
pub fn resolve_submission(
    outcome: &Result<(), SubmitError>,
) -> (Option<ContactForm>, &'static str) {
    match outcome {
        Ok(()) => (Some(ContactForm::default()), SUCCESS_MESSAGE),
        Err(SubmitError::Rejected) => (None, REJECTED_MESSAGE),
        Err(SubmitError::Transport) => (None, TRANSPORT_MESSAGE),
    }
}

/// POSTs the form to [`FORM_ENDPOINT`] as URL-encoded fields, asking for a
/// JSON response. Only the HTTP status is interpreted; the body is never
/// read. No timeout is applied, so a stalled request stays in flight until
/// the browser gives up on it.
pub async fn send_message(form: &ContactForm) -> Result<(), SubmitError> {
    let fields = web_sys::UrlSearchParams::new().map_err(|_| SubmitError::Transport)?;
    fields.append("name", &form.name);
    fields.append("email", &form.email);
    fields.append("message", &form.message);

    let response = gloo_net::http::Request::post(FORM_ENDPOINT)
        .header("Accept", "application/json")
        .body(fields)
        .map_err(|_| SubmitError::Transport)?
        .send()
        .await
        .map_err(|_| SubmitError::Transport)?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[test]
    fn success_clears_the_fields_and_reports_success() {
        let form = filled_form();
        let (reset, status) = resolve_submission(&Ok(()));
        let after = reset.unwrap_or(form);
        assert_eq!(after, ContactForm::default());
        assert_eq!(status, "Message sent successfully!");
    }

    #[test]
    fn rejection_keeps_the_fields_for_retry() {
        let form = filled_form();
        let (reset, status) = resolve_submission(&Err(SubmitError::Rejected));
        assert!(reset.is_none());
        let after = reset.unwrap_or(form.clone());
        assert_eq!(after, form);
        assert_eq!(status, REJECTED_MESSAGE);
    }

    #[test]
    fn transport_failure_keeps_the_fields_and_asks_for_retry() {
        let (reset, status) = resolve_submission(&Err(SubmitError::Transport));
        assert!(reset.is_none());
        assert_eq!(status, TRANSPORT_MESSAGE);
        assert!(status.contains("try again"));
    }

    #[test]
    fn failure_messages_are_distinct() {
        assert_ne!(REJECTED_MESSAGE, TRANSPORT_MESSAGE);
        assert_ne!(SUCCESS_MESSAGE, REJECTED_MESSAGE);
    }

    #[test]
    fn default_form_is_empty() {
        let form = ContactForm::default();
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }
}
