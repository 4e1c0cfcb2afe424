//! Contact inquiries composed by the Contact page form.

use chrono::{DateTime, Local};

/// A contact form submission
///
/// Held in session memory only; the fields are recorded verbatim with no
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub message: String,
    pub received_at: DateTime<Local>,
}

impl Inquiry {
    /// Compose an inquiry from the form fields, stamped with the current time
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            received_at: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_kept_verbatim() {
        let inquiry = Inquiry::new("Ada", "ada@example.com", "  spaced  message  ");
        assert_eq!(inquiry.name, "Ada");
        assert_eq!(inquiry.email, "ada@example.com");
        assert_eq!(inquiry.message, "  spaced  message  ");
    }
}
