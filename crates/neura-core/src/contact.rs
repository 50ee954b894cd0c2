//! Contact form model.
//!
//! Mirrors what a browser form enforces natively: required fields must be
//! non-blank and the email field must look like an address. Delivery is
//! somebody else's problem.

use serde::Serialize;

/// Whether a field must be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    Required,
    Optional,
}

/// Project budget ranges offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Budget {
    #[serde(rename = "<1k")]
    UnderOneK,
    #[serde(rename = "1k-5k")]
    OneToFiveK,
    #[serde(rename = "5k-10k")]
    FiveToTenK,
    #[serde(rename = "10k+")]
    TenKPlus,
}

impl Budget {
    pub const ALL: [Budget; 4] = [
        Budget::UnderOneK,
        Budget::OneToFiveK,
        Budget::FiveToTenK,
        Budget::TenKPlus,
    ];

    /// Submitted value.
    pub fn value(self) -> &'static str {
        match self {
            Budget::UnderOneK => "<1k",
            Budget::OneToFiveK => "1k-5k",
            Budget::FiveToTenK => "5k-10k",
            Budget::TenKPlus => "10k+",
        }
    }

    /// Human readable option label.
    pub fn label(self) -> &'static str {
        match self {
            Budget::UnderOneK => "Less than $1,000",
            Budget::OneToFiveK => "$1,000 - $5,000",
            Budget::FiveToTenK => "$5,000 - $10,000",
            Budget::TenKPlus => "$10,000+",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.value() == value)
    }

    /// Step through `None -> <1k -> ... -> 10k+ -> None`.
    pub fn cycle(current: Option<Self>, forward: bool) -> Option<Self> {
        let mut options: Vec<Option<Budget>> = vec![None];
        options.extend(Self::ALL.into_iter().map(Some));
        let index = options.iter().position(|o| *o == current).unwrap_or(0);
        let len = options.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        options[next]
    }
}

/// Form fields in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Budget,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Company,
        Field::Budget,
        Field::Message,
    ];

    pub fn policy(self) -> FieldPolicy {
        match self {
            Field::Name | Field::Email | Field::Message => FieldPolicy::Required,
            Field::Company | Field::Budget => FieldPolicy::Optional,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Email Address",
            Field::Company => "Company Name",
            Field::Budget => "Project Budget",
            Field::Message => "Project Details",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Company => "Your Company",
            Field::Budget => "Select a range",
            Field::Message => "Tell us about your project...",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    Missing(Field),
    InvalidEmail,
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldIssue::Missing(field) => write!(f, "{} is required", field.label()),
            FieldIssue::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

/// Values collected by the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub budget: Option<Budget>,
    pub message: String,
}

impl ContactForm {
    /// Text value of a free-text field. The budget select has no text.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Company => Some(&self.company),
            Field::Message => Some(&self.message),
            Field::Budget => None,
        }
    }

    /// Mutable text value of a free-text field.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Company => Some(&mut self.company),
            Field::Message => Some(&mut self.message),
            Field::Budget => None,
        }
    }

    /// Check the form, reporting every failing field in display order.
    pub fn validate(&self) -> Result<(), Vec<FieldIssue>> {
        let mut issues = Vec::new();
        for field in Field::ALL {
            if field.policy() != FieldPolicy::Required {
                continue;
            }
            let blank = self.text(field).is_none_or(|v| v.trim().is_empty());
            if blank {
                issues.push(FieldIssue::Missing(field));
            } else if field == Field::Email && !is_email(&self.email) {
                issues.push(FieldIssue::InvalidEmail);
            }
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    /// Empty every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Loose `local@domain` check in the spirit of `<input type="email">`.
fn is_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
