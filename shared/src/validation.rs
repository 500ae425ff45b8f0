use validator::ValidationErrors;

/// Parses an integer query value the way the API treats them: no trimming,
/// anything that is not a plain integer is `None`.
pub fn parse_integer(value: &str) -> Option<i64> {
    value.parse::<i64>().ok()
}

/// First value given for `key` in a decoded query string. Later repeats of
/// the same key are ignored.
pub fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// Flattens validator output into a single client-facing line, fields in
/// alphabetical order so the message is stable.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    let parts: Vec<String> = fields
        .into_iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            format!("{}: {}", field, reasons.join(", "))
        })
        .collect();

    if parts.is_empty() {
        "Invalid request".to_string()
    } else {
        parts.join("; ")
    }
}
