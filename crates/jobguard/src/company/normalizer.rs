const COMPANY_PATH_MARKER: &str = "company/";

/// Turns a company name or company-page URL into a display name.
///
/// `linkedin.com/company/acme-corp?trk=x` becomes `Acme Corp`; plain names are only trimmed.
pub fn normalize_company_identifier(input: &str) -> String {
    let trimmed = input.trim();
    match trimmed.find(COMPANY_PATH_MARKER) {
        Some(index) => {
            let rest = &trimmed[index + COMPANY_PATH_MARKER.len()..];
            let slug = rest.split(['/', '?', '#']).next().unwrap_or_default();
            if slug.is_empty() {
                trimmed.to_string()
            } else {
                title_case(&slug.replace('-', " "))
            }
        }
        None => trimmed.to_string(),
    }
}

/// Uppercases the first character of every word, leaving the rest untouched.
fn title_case(value: &str) -> String {
    let mut previous_is_word = false;
    value
        .chars()
        .flat_map(|ch| {
            let is_word = ch.is_alphanumeric() || ch == '_';
            let starts_word = is_word && !previous_is_word;
            previous_is_word = is_word;
            let mapped: Vec<char> = if starts_word {
                ch.to_uppercase().collect()
            } else {
                vec![ch]
            };
            mapped
        })
        .collect()
}

pub(crate) fn lookup_key(value: &str) -> String {
    value.trim().to_lowercase()
}
