use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::{likes, matches, users};

// --- User ---

#[derive(Debug, Queryable, Identifiable, Serialize, Clone)]
#[diesel(table_name = users)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub gender: String,
    pub birthdate: Option<NaiveDate>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub preferences: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The slice of the free-form `users.preferences` document this service
/// reads. Unknown keys are ignored; a malformed document counts as empty.
#[derive(Debug, Default, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub gender_preference: Vec<String>,
}

impl Preferences {
    pub fn parse(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Empty preference list means no filtering.
    pub fn allows_gender(&self, gender: &str) -> bool {
        self.gender_preference.is_empty() || self.gender_preference.iter().any(|g| g == gender)
    }
}

// --- Like ---

#[derive(Debug, Queryable, Identifiable, Serialize)]
#[diesel(table_name = likes)]
pub struct Like {
    pub id: Uuid,
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = likes)]
pub struct NewLike {
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
}

// --- Match ---

#[derive(Debug, Queryable, Identifiable, Serialize, Clone)]
#[diesel(table_name = matches)]
pub struct Match {
    pub id: Uuid,
    pub user1_id: Uuid,
    pub user2_id: Uuid,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// The other side of the pair, from `user_id`'s point of view.
    pub fn counterpart(&self, user_id: Uuid) -> Uuid {
        if self.user1_id == user_id {
            self.user2_id
        } else {
            self.user1_id
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = matches)]
pub struct NewMatch {
    pub user1_id: Uuid,
    pub user2_id: Uuid,
    pub is_active: bool,
}

impl NewMatch {
    /// Matches are undirected; rows are stored with the smaller id first so
    /// the unique index on (user1_id, user2_id) covers both orderings.
    pub fn for_pair(a: Uuid, b: Uuid) -> Self {
        let (user1_id, user2_id) = normalize_pair(a, b);
        Self {
            user1_id,
            user2_id,
            is_active: true,
        }
    }
}

pub fn normalize_pair(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// --- ProfileView ---

/// Wire projection of a user row.
///
/// Location columns are never exposed, and the presence flags are
/// synthesized client-facing defaults, not read from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub id: Uuid,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub gender: String,
    pub birthdate: Option<NaiveDate>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub preferences: serde_json::Value,
    pub last_active: DateTime<Utc>,
    pub is_verified: bool,
    pub is_online: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileView {
    /// Discovery candidate: email withheld, timestamps are the projection
    /// time rather than the stored row times.
    pub fn candidate(user: &User) -> Self {
        Self::project(user, String::new(), Utc::now())
    }

    /// Matched profile returned from the like flow: email kept.
    pub fn matched(user: &User) -> Self {
        Self::project(user, user.email.clone(), Utc::now())
    }

    /// Match-list entry: email kept, timestamps pinned to the match
    /// record's creation time.
    pub fn match_entry(user: &User, matched_at: DateTime<Utc>) -> Self {
        Self::project(user, user.email.clone(), matched_at)
    }

    fn project(user: &User, email: String, stamp: DateTime<Utc>) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            username: user.username.clone(),
            email,
            gender: user.gender.clone(),
            birthdate: user.birthdate,
            bio: user.bio.clone(),
            avatar_url: user.avatar_url.clone(),
            preferences: user.preferences.clone(),
            last_active: Utc::now(),
            is_verified: true,
            is_online: false,
            created_at: stamp,
            updated_at: stamp,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_user(username: &str, gender: &str, preferences: serde_json::Value) -> User {
    User {
        id: Uuid::new_v4(),
        full_name: format!("{username} Example"),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        gender: gender.to_string(),
        birthdate: NaiveDate::from_ymd_opt(1995, 6, 15),
        bio: Some("hello".to_string()),
        avatar_url: None,
        preferences,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
