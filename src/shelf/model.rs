use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// Normalizes user input for enum parsing: `Science Fiction`, `science-fiction`
/// and `SCIENCE_FICTION` all compare equal.
fn normalize_choice(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Genre {
    #[default]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Mystery,
    Fantasy,
    Biography,
    History,
    Other,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::ScienceFiction,
        Genre::Mystery,
        Genre::Fantasy,
        Genre::Biography,
        Genre::History,
        Genre::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Mystery => "Mystery",
            Genre::Fantasy => "Fantasy",
            Genre::Biography => "Biography",
            Genre::History => "History",
            Genre::Other => "Other",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_choice(s);
        Genre::ALL
            .into_iter()
            .find(|g| normalize_choice(g.label()) == wanted)
            .ok_or_else(|| {
                let choices: Vec<_> = Genre::ALL.iter().map(|g| g.label()).collect();
                format!("unknown genre '{}' (expected one of: {})", s, choices.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Unread,
    Reading,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Unread,
        Status::Reading,
        Status::Completed,
        Status::OnHold,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Unread => "Unread",
            Status::Reading => "Reading",
            Status::Completed => "Completed",
            Status::OnHold => "On Hold",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_choice(s);
        Status::ALL
            .into_iter()
            .find(|st| normalize_choice(st.label()) == wanted)
            .ok_or_else(|| {
                let choices: Vec<_> = Status::ALL.iter().map(|st| st.label()).collect();
                format!(
                    "unknown status '{}' (expected one of: {})",
                    s,
                    choices.join(", ")
                )
            })
    }
}

/// A star rating between 0 and 5 inclusive.
///
/// Out-of-range values are rejected both when parsing user input and when
/// deserializing a catalog file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, String> {
        if value > Self::MAX {
            return Err(format!(
                "rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("rating must be a whole number from 0 to 5, got '{}'", s))?;
        Rating::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Notes,
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Title => f.write_str("title"),
            SearchField::Author => f.write_str("author"),
            SearchField::Notes => f.write_str("notes"),
        }
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "notes" => Ok(SearchField::Notes),
            _ => Err(format!(
                "unknown search field '{}' (expected title, author or notes)",
                s
            )),
        }
    }
}

/// A single catalog record. Field names and order match the on-disk layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub status: Status,
    pub rating: Rating,
    pub date_added: NaiveDate,
    #[serde(default)]
    pub notes: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: Genre::default(),
            status: Status::default(),
            rating: Rating::default(),
            date_added: Local::now().date_naive(),
            notes: String::new(),
        }
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = genre;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_date_added(mut self, date: NaiveDate) -> Self {
        self.date_added = date;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}
