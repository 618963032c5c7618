use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ID: &str = "_id";
const ID_ALIAS: &str = "id";
const USERNAME: &str = "Username";
const EMAIL: &str = "Email";
const BIRTHDAY: &str = "Birthday";
const FAVORITE_MOVIES: &str = "FavoriteMovies";

/// A user account as the backend returns it.
///
/// The record is stored verbatim, so a cached copy serializes back to
/// exactly what the server sent. Only `FavoriteMovies` (optimistic
/// favorites) and `Birthday` (display formatting) are ever rewritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User {
    fields: Map<String, Value>,
}

impl User {
    /// `_id`, falling back to `id`.
    pub fn id(&self) -> Option<&str> {
        self.str_field(ID).or_else(|| self.str_field(ID_ALIAS))
    }

    pub fn username(&self) -> Option<&str> {
        self.str_field(USERNAME)
    }

    pub fn email(&self) -> Option<&str> {
        self.str_field(EMAIL)
    }

    pub fn birthday(&self) -> Option<&str> {
        self.str_field(BIRTHDAY)
    }

    pub fn set_birthday(&mut self, birthday: impl Into<String>) {
        self.fields
            .insert(BIRTHDAY.to_string(), Value::String(birthday.into()));
    }

    /// Raw value of any field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// True when nothing has been cached for this record.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Favorite movie ids. Non-string entries are skipped.
    pub fn favorite_movies(&self) -> Vec<&str> {
        match self.fields.get(FAVORITE_MOVIES) {
            Some(Value::Array(list)) => list.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.favorite_movies().contains(&movie_id)
    }

    /// Append without checking for an existing entry. A missing or
    /// non-list `FavoriteMovies` becomes a one-element list.
    pub fn push_favorite(&mut self, movie_id: &str) {
        let entry = Value::String(movie_id.to_string());
        match self.fields.get_mut(FAVORITE_MOVIES) {
            Some(Value::Array(list)) => list.push(entry),
            _ => {
                self.fields
                    .insert(FAVORITE_MOVIES.to_string(), Value::Array(vec![entry]));
            }
        }
    }

    /// Remove the first occurrence of `movie_id`. Returns whether one was found.
    pub fn remove_favorite(&mut self, movie_id: &str) -> bool {
        let Some(Value::Array(list)) = self.fields.get_mut(FAVORITE_MOVIES) else {
            return false;
        };

        match list.iter().position(|id| id.as_str() == Some(movie_id)) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    /// Birthday as a calendar date in UTC.
    ///
    /// Accepts a full RFC 3339 timestamp (what the backend stores) or a bare
    /// `YYYY-MM-DD` date (what users type). Absent or `null` is `None`.
    #[track_caller]
    pub fn birthday_date(&self) -> CoreResult<Option<NaiveDate>> {
        let raw = match self.fields.get(BIRTHDAY) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::String(raw)) => raw,
            Some(other) => {
                return Err(CoreError::InvalidBirthday {
                    value: other.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Some(timestamp.with_timezone(&Utc).date_naive()));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| CoreError::InvalidBirthday {
                value: raw.clone(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for User {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
