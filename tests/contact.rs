use folio3d::contact::{is_valid_email, validate, FormError};

#[test]
fn email_shapes() {
    for ok in ["a@b.co", "first.last@example.com", "x+tag@sub.domain.org"] {
        assert!(is_valid_email(ok), "{ok} should be accepted");
    }
    for bad in ["a@b", "a b@c.d", "@b.co", "a@.co", "a@b.", "a@@b.co", "a@b@c.co", ""] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}

#[test]
fn every_field_is_required() {
    assert_eq!(validate("", "a@b.co", "hi"), Err(FormError::MissingFields));
    assert_eq!(validate("Ada", "   ", "hi"), Err(FormError::MissingFields));
    assert_eq!(validate("Ada", "a@b.co", "\n\t"), Err(FormError::MissingFields));
}

#[test]
fn missing_fields_reported_before_bad_email() {
    assert_eq!(validate("", "not-an-email", ""), Err(FormError::MissingFields));
    assert_eq!(validate("Ada", "not-an-email", "hi"), Err(FormError::InvalidEmail));
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(validate(" Ada ", " a@b.co ", " hello "), Ok(()));
}
