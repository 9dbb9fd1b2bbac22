use html_escape::encode_safe;

use crate::request::ContactRequest;

/// Fixed prefix of the notification subject; the sender's name follows it.
pub const SUBJECT_PREFIX: &str = "New contact request from ";

/// Stand-in for any field the sender left out.
pub const MISSING_FIELD_PLACEHOLDER: &str = "(not provided)";

/// HTML and plain-text renderings of a [`ContactRequest`].
///
/// Fields appear in the fixed order Name, Email, Message. Values are escaped
/// for the HTML rendering and copied verbatim into the text rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

impl NotificationMessage {
    /// Render the notification for a decoded contact request.
    ///
    /// # Examples
    ///
    /// ```
    /// use notifier_core::{ContactRequest, NotificationMessage};
    ///
    /// let request = ContactRequest {
    ///     name: Some("Ada".into()),
    ///     email_address: None,
    ///     message: Some("Hello".into()),
    /// };
    /// let message = NotificationMessage::compose(&request);
    /// assert_eq!(message.subject, "New contact request from Ada");
    /// assert!(message.text_body.contains("Email: (not provided)"));
    /// ```
    pub fn compose(request: &ContactRequest) -> Self {
        let name = field(request.name.as_deref());
        let email = field(request.email_address.as_deref());
        let message = field(request.message.as_deref());

        let subject = format!("{SUBJECT_PREFIX}{name}");

        let html_body = format!(
            "<h1>New contact request</h1>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Message:</strong> {}</p>",
            encode_safe(name),
            encode_safe(email),
            encode_safe(message),
        );

        let text_body = format!("Name: {name}\nEmail: {email}\nMessage: {message}\n");

        Self {
            subject,
            html_body,
            text_body,
        }
    }
}

fn field(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING_FIELD_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> ContactRequest {
        ContactRequest {
            name: name.map(str::to_owned),
            email_address: email.map(str::to_owned),
            message: message.map(str::to_owned),
        }
    }

    fn assert_in_order(haystack: &str, needles: &[&str]) {
        let mut from = 0;
        for needle in needles {
            let pos = haystack[from..]
                .find(needle)
                .unwrap_or_else(|| panic!("{needle:?} missing or out of order in {haystack:?}"));
            from += pos + needle.len();
        }
    }

    #[test]
    fn bodies_contain_fields_in_order() {
        let msg = NotificationMessage::compose(&request(
            Some("Grace Hopper"),
            Some("grace@example.com"),
            Some("Found a moth in relay 70"),
        ));

        for body in [&msg.html_body, &msg.text_body] {
            assert_in_order(
                body,
                &[
                    "Name:",
                    "Grace Hopper",
                    "Email:",
                    "grace@example.com",
                    "Message:",
                    "Found a moth in relay 70",
                ],
            );
        }
    }

    #[test]
    fn subject_uses_name() {
        let msg = NotificationMessage::compose(&request(Some("Ada"), None, None));
        assert_eq!(msg.subject, "New contact request from Ada");
    }

    #[test]
    fn absent_name_uses_placeholder() {
        let msg = NotificationMessage::compose(&request(None, Some("a@b.c"), Some("hi")));
        assert_eq!(msg.subject, "New contact request from (not provided)");
        assert!(msg.text_body.starts_with("Name: (not provided)\n"));
        assert!(msg.html_body.contains("(not provided)"));
    }

    #[test]
    fn empty_request_renders_placeholders() {
        let msg = NotificationMessage::compose(&ContactRequest::default());
        assert_eq!(msg.text_body.matches(MISSING_FIELD_PLACEHOLDER).count(), 3);
        assert_eq!(msg.html_body.matches(MISSING_FIELD_PLACEHOLDER).count(), 3);
    }

    #[test]
    fn empty_string_is_kept_not_replaced() {
        let msg = NotificationMessage::compose(&request(Some(""), None, None));
        assert_eq!(msg.subject, SUBJECT_PREFIX);
    }

    #[test]
    fn html_body_escapes_markup() {
        let msg = NotificationMessage::compose(&request(
            Some("<script>alert(1)</script>"),
            Some("x@example.com"),
            Some("Tom & \"Jerry\""),
        ));

        assert!(!msg.html_body.contains("<script>"));
        assert!(msg.html_body.contains("&lt;script&gt;"));
        assert!(msg.html_body.contains("Tom &amp; "));

        assert!(msg.text_body.contains("<script>alert(1)</script>"));
        assert!(msg.text_body.contains("Tom & \"Jerry\""));
    }
}
