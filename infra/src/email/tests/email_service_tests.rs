//! Unit tests for the verification email content

use crate::email::verification_message;

#[test]
fn test_verification_message_content() {
    let message = verification_message("student@konkuk.ac.kr", "Konkuk University", "482913", 5);

    assert_eq!(message.to, "student@konkuk.ac.kr");
    assert!(message.subject.contains("Konkuk University"));
    assert!(message.text.contains("482913"));
    assert!(message.text.contains("5 minutes"));
    assert!(message.text.contains("5분"));
    assert!(message.html.as_deref().unwrap().contains("482913"));
}

#[test]
fn test_verification_message_escapes_school_name_in_html() {
    let message = verification_message("a@b.ac.kr", "<script>", "123456", 5);

    let html = message.html.unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}
