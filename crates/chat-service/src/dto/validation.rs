//! Entity validation
//!
//! Payload rules live on the request DTOs as `validator` attributes. This
//! module flattens a `ValidationErrors` map into an ordered list of
//! messages, so every failure is reported at once and in a stable order.

use validator::{Validate, ValidationErrors};

/// A payload with declared validation rules and a field reporting order
pub trait ValidatedPayload: Validate {
    /// Fields in the order their failures are reported
    const FIELDS: &'static [&'static str];

    /// Validate the payload without touching any state
    ///
    /// Returns every failure, ordered by [`Self::FIELDS`].
    fn check(&self) -> Result<(), Vec<String>> {
        self.validate()
            .map_err(|errors| ordered_messages(&errors, Self::FIELDS))
    }
}

/// Collect the messages of `errors`, field by field in `order`
pub fn ordered_messages(errors: &ValidationErrors, order: &[&str]) -> Vec<String> {
    let by_field = errors.field_errors();
    let mut messages = Vec::new();

    for field in order {
        let Some(field_errors) = by_field.get(*field) else {
            continue;
        };
        for error in field_errors.iter() {
            let message = match &error.message {
                Some(message) => message.to_string(),
                None => format!("\"{field}\" is invalid"),
            };
            messages.push(message);
        }
    }

    messages
}

/// Parse the optional `limit` query value
///
/// Absent means unlimited. Anything that is not a positive integer is a
/// validation failure.
pub fn parse_limit(raw: Option<&str>) -> Result<Option<usize>, Vec<String>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| vec!["\"limit\" must be a number".to_string()])?;

    if value <= 0 {
        return Err(vec!["\"limit\" must be a positive number".to_string()]);
    }

    Ok(Some(usize::try_from(value).unwrap_or(usize::MAX)))
}
