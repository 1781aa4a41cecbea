use axum::extract::State;
use axum::Json;
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;

use ember_shared::errors::{AppError, AppResult};
use ember_shared::types::auth::AuthUser;
use ember_shared::types::ApiResponse;

use crate::models::{Match, ProfileView, User};
use crate::schema::{matches, users};
use crate::AppState;

/// Resolved matches plus the number of rows whose counterpart profile
/// could not be loaded. Resolution is best-effort.
#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<ProfileView>,
    pub skipped: usize,
}

/// GET /matches - active matches resolved to the counterpart profile
pub async fn get_user_matches(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<MatchListResponse>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let rows = matches::table
        .filter(matches::is_active.eq(true))
        .filter(
            matches::user1_id
                .eq(user.id)
                .or(matches::user2_id.eq(user.id)),
        )
        .order(matches::created_at.desc())
        .load::<Match>(&mut conn)
        .map_err(|_| AppError::query("fetch matches"))?;

    let mut resolved = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for m in &rows {
        let counterpart_id = m.counterpart(user.id);
        match users::table
            .find(counterpart_id)
            .first::<User>(&mut conn)
            .optional()
        {
            Ok(Some(counterpart)) => {
                resolved.push(ProfileView::match_entry(&counterpart, m.created_at));
            }
            Ok(None) => {
                skipped += 1;
                tracing::debug!(match_id = %m.id, counterpart = %counterpart_id, "counterpart profile missing, skipping");
            }
            Err(e) => {
                skipped += 1;
                tracing::warn!(match_id = %m.id, error = %e, "failed to resolve counterpart, skipping");
            }
        }
    }

    Ok(Json(ApiResponse::ok(MatchListResponse {
        matches: resolved,
        skipped,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_user;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn response_reports_skips_explicitly() {
        let counterpart = sample_user("dana", "female", json!({}));
        let matched_at = Utc::now() - chrono::Duration::hours(6);
        let resp = MatchListResponse {
            matches: vec![ProfileView::match_entry(&counterpart, matched_at)],
            skipped: 2,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["skipped"], 2);
        assert_eq!(json["matches"][0]["username"], "dana");
        assert_eq!(
            json["matches"][0]["created_at"],
            serde_json::to_value(matched_at).unwrap()
        );
    }
}
