//! Contact State
//!
//! Session-scoped record of contact form submissions. Nothing is written to
//! disk; the record lives for the window session.

use crate::domain::inquiry::Inquiry;

/// Inquiries submitted during this session, oldest first
#[derive(Debug, Default)]
pub struct ContactState {
    inquiries: Vec<Inquiry>,
}

impl ContactState {
    /// Append a submitted inquiry
    pub fn record(&mut self, inquiry: Inquiry) {
        self.inquiries.push(inquiry);
    }

    /// All inquiries submitted this session
    pub fn inquiries(&self) -> &[Inquiry] {
        &self.inquiries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_inquiries_accumulate_in_order() {
        let mut state = ContactState::default();
        state.record(Inquiry::new("First", "first@example.com", "hello"));
        state.record(Inquiry::new("Second", "second@example.com", "again"));

        let names: Vec<&str> = state.inquiries().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
    }
}
