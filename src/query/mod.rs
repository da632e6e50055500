//! Template resolution module
//!
//! Turns preset templates into finished search queries:
//! - Named placeholders: `{org}`, `{domain}`
//! - Escaped braces: `{{` and `}}` produce literal `{` and `}`
//! - Date qualifiers appended as ` after:<date>` / ` before:<date>`

use crate::error::TemplateError;

/// Placeholder names a template may reference
pub const PLACEHOLDERS: [&str; 2] = ["org", "domain"];

/// Optional date bounds appended to every resolved template.
///
/// Values are inserted verbatim; no date validation is performed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub after: Option<String>,
    pub before: Option<String>,
}

impl DateRange {
    pub fn new(after: Option<String>, before: Option<String>) -> Self {
        Self { after, before }
    }

    /// Append the qualifiers to a query, `after:` first
    pub fn apply(&self, query: &mut String) {
        if let Some(after) = self.after.as_deref().filter(|s| !s.is_empty()) {
            query.push_str(" after:");
            query.push_str(after);
        }
        if let Some(before) = self.before.as_deref().filter(|s| !s.is_empty()) {
            query.push_str(" before:");
            query.push_str(before);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.after.as_deref().map_or(true, str::is_empty)
            && self.before.as_deref().map_or(true, str::is_empty)
    }
}

/// Resolves templates against a fixed organization and domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateResolver {
    org: String,
    domain: String,
    dates: DateRange,
}

impl TemplateResolver {
    pub fn new(org: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            domain: domain.into(),
            dates: DateRange::default(),
        }
    }

    pub fn with_date_range(mut self, dates: DateRange) -> Self {
        self.dates = dates;
        self
    }

    /// Resolve one template into a query
    pub fn resolve(&self, template: &str) -> Result<String, TemplateError> {
        let mut query = expand(template, |name| match name {
            "org" => Some(self.org.clone()),
            "domain" => Some(self.domain.clone()),
            _ => None,
        })?;
        self.dates.apply(&mut query);
        Ok(query)
    }
}

/// Resolve `template` with the given values and optional date bounds
pub fn resolve(
    template: &str,
    org: &str,
    domain: &str,
    after: Option<&str>,
    before: Option<&str>,
) -> Result<String, TemplateError> {
    TemplateResolver::new(org, domain)
        .with_date_range(DateRange::new(
            after.map(str::to_string),
            before.map(str::to_string),
        ))
        .resolve(template)
}

/// List the placeholder names referenced by a template, in order of appearance
pub fn placeholders(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut names = Vec::new();
    expand(template, |name| {
        names.push(name.to_string());
        Some(String::new())
    })?;
    Ok(names)
}

/// Walk `template`, replacing each `{name}` with `fill(name)`.
///
/// Substituted values are not rescanned.
fn expand(
    template: &str,
    mut fill: impl FnMut(&str) -> Option<String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let end = loop {
                    match chars.next() {
                        Some((i, '}')) => break i,
                        Some((_, '{')) | None => {
                            return Err(malformed(template, pos, "unterminated placeholder"));
                        }
                        Some(_) => {}
                    }
                };

                let name = &template[pos + 1..end];
                if name.is_empty() {
                    return Err(malformed(template, pos, "empty placeholder"));
                }

                match fill(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        return Err(TemplateError::MissingValue {
                            template: template.to_string(),
                            name: name.to_string(),
                        });
                    }
                }
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(malformed(template, pos, "single `}` outside a placeholder"));
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

fn malformed(template: &str, position: usize, message: &str) -> TemplateError {
    TemplateError::Malformed {
        template: template.to_string(),
        position,
        message: message.to_string(),
    }
}
