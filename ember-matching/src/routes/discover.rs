use axum::extract::State;
use axum::Json;
use diesel::prelude::*;
use std::sync::Arc;

use ember_shared::errors::{AppError, AppResult, ErrorCode};
use ember_shared::types::auth::AuthUser;
use ember_shared::types::ApiResponse;

use crate::models::{Preferences, ProfileView, User};
use crate::schema::users;
use crate::AppState;

const DISCOVER_PAGE_SIZE: i64 = 50;

/// GET /discover - candidate profiles for the swipe deck
pub async fn get_potential_matches(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<Vec<ProfileView>>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    // Up to 50 other users; the preference filter applies to this page,
    // not before the limit.
    let candidates = users::table
        .filter(users::id.ne(user.id))
        .limit(DISCOVER_PAGE_SIZE)
        .load::<User>(&mut conn)
        .map_err(|_| AppError::query("fetch potential matches"))?;

    let caller = users::table
        .find(user.id)
        .first::<User>(&mut conn)
        .optional()
        .map_err(|_| AppError::query("get user preferences"))?
        .ok_or_else(|| AppError::new(ErrorCode::ProfileNotFound, "profile not found"))?;

    let prefs = Preferences::parse(&caller.preferences);
    let views = filter_candidates(candidates, &prefs)
        .iter()
        .map(ProfileView::candidate)
        .collect();

    Ok(Json(ApiResponse::ok(views)))
}

pub(crate) fn filter_candidates(candidates: Vec<User>, prefs: &Preferences) -> Vec<User> {
    candidates
        .into_iter()
        .filter(|c| prefs.allows_gender(&c.gender))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_user;
    use serde_json::json;

    #[test]
    fn filter_respects_gender_preference() {
        let candidates = vec![
            sample_user("bianca", "female", json!({})),
            sample_user("carl", "male", json!({})),
            sample_user("dana", "nonbinary", json!({})),
        ];
        let prefs = Preferences::parse(&json!({ "gender_preference": ["female"] }));

        let kept = filter_candidates(candidates, &prefs);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].username, "bianca");
    }

    #[test]
    fn empty_preference_keeps_all_genders() {
        let candidates = vec![
            sample_user("bianca", "female", json!({})),
            sample_user("carl", "male", json!({})),
        ];
        let prefs = Preferences::default();

        let kept = filter_candidates(candidates, &prefs);
        assert_eq!(kept.len(), 2);
    }
}
