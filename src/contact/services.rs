use lazy_static::lazy_static;
use regex::Regex;

use crate::contact::dto::ContactForm;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Name, email, beer type, and quantity are required; phone, occasion,
/// and message are free extras.
pub fn validate(form: &ContactForm) -> Result<(), &'static str> {
    if form.name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.beer_type.trim().is_empty()
        || form.quantity.trim().is_empty()
    {
        return Err("Missing required fields");
    }
    if !is_valid_email(form.email.trim()) {
        return Err("Invalid email");
    }
    Ok(())
}
