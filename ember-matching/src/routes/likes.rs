use axum::extract::State;
use axum::Json;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use ember_shared::errors::{AppError, AppResult, ErrorCode};
use ember_shared::types::auth::AuthUser;
use ember_shared::types::ApiResponse;

use crate::events::publisher;
use crate::models::{Match, NewLike, NewMatch, ProfileView, User};
use crate::schema::{likes, matches, users};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    pub to_user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub is_match: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_user: Option<ProfileView>,
}

enum LikeOutcome {
    AlreadyLiked,
    Liked,
    /// Reciprocal edge found. `created` holds the match row when this call
    /// inserted it; a concurrent reciprocal like may have won the insert.
    Matched { created: Option<Match> },
}

/// POST /likes - record a like, detect a mutual match
pub async fn like_user(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<LikeRequest>,
) -> AppResult<Json<ApiResponse<LikeResponse>>> {
    if req.to_user_id == user.id {
        return Err(AppError::new(ErrorCode::CannotLikeSelf, "cannot like yourself"));
    }

    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    // Target must exist before any edge is written
    let target = users::table
        .find(req.to_user_id)
        .first::<User>(&mut conn)
        .optional()
        .map_err(|_| AppError::query("fetch liked profile"))?
        .ok_or_else(|| AppError::new(ErrorCode::ProfileNotFound, "liked profile not found"))?;

    // Edge insert, reciprocity check and match insert run in one
    // transaction; the unique indexes on likes(from,to) and
    // matches(user1,user2) make concurrent mutual likes converge on a
    // single match row.
    let outcome = conn.transaction::<LikeOutcome, AppError, _>(|conn| {
        let inserted = diesel::insert_into(likes::table)
            .values(&NewLike {
                from_user_id: user.id,
                to_user_id: req.to_user_id,
            })
            .on_conflict((likes::from_user_id, likes::to_user_id))
            .do_nothing()
            .execute(conn)?;

        if inserted == 0 {
            // Edge already present: idempotent, no match re-evaluation
            return Ok(LikeOutcome::AlreadyLiked);
        }

        let reciprocal = diesel::select(diesel::dsl::exists(
            likes::table
                .filter(likes::from_user_id.eq(req.to_user_id))
                .filter(likes::to_user_id.eq(user.id)),
        ))
        .get_result::<bool>(conn)?;

        if !reciprocal {
            return Ok(LikeOutcome::Liked);
        }

        let created = diesel::insert_into(matches::table)
            .values(&NewMatch::for_pair(user.id, req.to_user_id))
            .on_conflict((matches::user1_id, matches::user2_id))
            .do_nothing()
            .get_results::<Match>(conn)?
            .pop();

        Ok(LikeOutcome::Matched { created })
    })?;

    match outcome {
        LikeOutcome::AlreadyLiked => Ok(Json(ApiResponse::ok(LikeResponse {
            liked: true,
            is_match: false,
            matched_user: None,
        }))),
        LikeOutcome::Liked => {
            publisher::publish_like_sent(&state.rabbitmq, user.id, req.to_user_id).await;
            Ok(Json(ApiResponse::ok(LikeResponse {
                liked: true,
                is_match: false,
                matched_user: None,
            })))
        }
        LikeOutcome::Matched { created } => {
            publisher::publish_like_sent(&state.rabbitmq, user.id, req.to_user_id).await;
            if let Some(m) = &created {
                tracing::info!(match_id = %m.id, user1 = %m.user1_id, user2 = %m.user2_id, "match created");
                publisher::publish_match_created(&state.rabbitmq, m.id, m.user1_id, m.user2_id)
                    .await;
            }
            Ok(Json(ApiResponse::ok(LikeResponse {
                liked: true,
                is_match: true,
                matched_user: Some(ProfileView::matched(&target)),
            })))
        }
    }
}
