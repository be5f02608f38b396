use serde::{Deserialize, Serialize};

/// Teacher identifier as assigned by the classes API
pub type TeacherId = i64;

/// Teacher model - a tutoring provider offering a class
///
/// Only `id` is required when decoding. Display attributes default to empty
/// so partially populated records (older persisted favorites, trimmed API
/// payloads) still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier
    pub id: TeacherId,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Subject taught in the class
    #[serde(default)]
    pub subject: String,
    /// Short biography
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// WhatsApp contact number
    #[serde(default)]
    pub whatsapp: Option<String>,
    /// Hourly cost of the class
    #[serde(default)]
    pub cost: f64,
}

impl Teacher {
    /// Create a teacher with only an identifier and a name
    pub fn new(id: TeacherId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            subject: String::new(),
            bio: None,
            avatar: None,
            whatsapp: None,
            cost: 0.0,
        }
    }

    /// Set the subject taught
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Set the hourly cost
    #[must_use]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }
}

/// Filter form state used to parameterize a class search
///
/// An empty field means "unconstrained". The client never interprets
/// emptiness itself: every field is always sent, empty or not, and the
/// server decides what an empty value means.
///
/// Field order matters: it is the order of the query parameters on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Subject name, e.g. `Matemática`
    pub subject: String,
    /// Week day, free text as typed in the form
    pub week_day: String,
    /// Hour of the day, free-form (e.g. `8:00`)
    pub time: String,
}

impl FilterCriteria {
    /// Build criteria from the three form fields
    pub fn new(
        subject: impl Into<String>,
        week_day: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            week_day: week_day.into(),
            time: time.into(),
        }
    }

    /// True when no field constrains the search
    pub fn is_unconstrained(&self) -> bool {
        self.subject.is_empty() && self.week_day.is_empty() && self.time.is_empty()
    }
}

/// Decode a JSON array of teacher records, as returned by `GET /classes`.
pub fn decode_teachers(raw: &str) -> Result<Vec<Teacher>, serde_json::Error> {
    serde_json::from_str(raw)
}
