//! Display name split into first and last name

/// A person's name as stored on a user row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    /// Split a display name on single spaces: first token, then second token (or empty).
    ///
    /// Returns `None` for a blank name.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut parts = trimmed.split(' ');
        let first = parts.next().unwrap_or_default().to_string();
        let last = parts.next().unwrap_or_default().to_string();
        Some(Self { first, last })
    }

    /// `{first}.{last or "doe"}@reqres.in`, lower-cased
    pub fn email(&self) -> String {
        let last = if self.last.is_empty() { "doe" } else { &self.last };
        format!("{}.{}@reqres.in", self.first, last).to_lowercase()
    }
}
