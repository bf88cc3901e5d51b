use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        monster::{MonsterDto, MonsterUpsertDto, MonstersDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::monster::MonsterService,
        state::AppState,
    },
};

/// Tag for grouping monster endpoints in OpenAPI documentation
pub static MONSTER_TAG: &str = "monster";

#[derive(Deserialize)]
pub struct ListMineParams {
    /// Optional comma-separated monster ids to narrow the listing.
    pub ids: Option<String>,
}

/// List all public monsters.
///
/// No authentication required; private monsters never appear here.
#[utoipa::path(
    get,
    path = "/api/monsters",
    tag = MONSTER_TAG,
    responses(
        (status = 200, description = "Public monsters", body = MonstersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_public_monsters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MonsterService::new(state.monsters.clone(), state.families.clone());

    let monsters = service.list_public().await?;

    Ok((
        StatusCode::OK,
        Json(MonstersDto {
            monsters: monsters.into_iter().map(MonsterDto::from_monster).collect(),
        }),
    ))
}

/// List the authenticated user's monsters.
///
/// Returns every monster the requester created regardless of visibility,
/// optionally narrowed to a comma-separated id set.
#[utoipa::path(
    get,
    path = "/api/users/me/monsters",
    tag = MONSTER_TAG,
    params(
        ("ids" = Option<String>, Query, description = "Comma-separated monster ids to filter by")
    ),
    responses(
        (status = 200, description = "The requester's monsters", body = MonstersDto),
        (status = 400, description = "Malformed id filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_monsters(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListMineParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    let ids = params.ids.as_deref().map(parse_id_list).transpose()?;

    let service = MonsterService::new(state.monsters.clone(), state.families.clone());
    let monsters = service.list_mine(&user, ids).await?;

    Ok((
        StatusCode::OK,
        Json(MonstersDto {
            monsters: monsters.into_iter().map(MonsterDto::from_monster).collect(),
        }),
    ))
}

/// Get a monster by id.
///
/// Public monsters are readable by anyone; private monsters only by their
/// creator.
#[utoipa::path(
    get,
    path = "/api/monsters/{id}",
    tag = MONSTER_TAG,
    params(
        ("id" = Uuid, Path, description = "Monster id")
    ),
    responses(
        (status = 200, description = "The monster", body = MonsterDto),
        (status = 403, description = "Not readable by the requester", body = ErrorDto),
        (status = 404, description = "Unknown monster id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monster(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .current_user()
        .await?;

    let service = MonsterService::new(state.monsters.clone(), state.families.clone());
    let monster = service.get(id, user.as_ref()).await?;

    Ok((StatusCode::OK, Json(MonsterDto::from_monster(monster))))
}

/// Create a monster owned by the authenticated user.
#[utoipa::path(
    post,
    path = "/api/monsters",
    tag = MONSTER_TAG,
    request_body = MonsterUpsertDto,
    responses(
        (status = 201, description = "Successfully created monster", body = MonsterDto),
        (status = 400, description = "Invalid monster data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Referenced family does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_monster(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MonsterUpsertDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    let params = payload.into_create_params(user.id)?;

    let service = MonsterService::new(state.monsters.clone(), state.families.clone());
    let monster = service.create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(MonsterDto::from_monster(monster))))
}

/// Replace a monster's fields.
///
/// Only the creator may update; non-owners receive 403 once the monster is
/// confirmed to exist.
#[utoipa::path(
    put,
    path = "/api/monsters/{id}",
    tag = MONSTER_TAG,
    params(
        ("id" = Uuid, Path, description = "Monster id")
    ),
    request_body = MonsterUpsertDto,
    responses(
        (status = 200, description = "Successfully updated monster", body = MonsterDto),
        (status = 400, description = "Invalid monster data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requester is not the creator", body = ErrorDto),
        (status = 404, description = "Unknown monster id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_monster(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<MonsterUpsertDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    let params = payload.into_update_params(id)?;

    let service = MonsterService::new(state.monsters.clone(), state.families.clone());
    let monster = service.update(&user, params).await?;

    Ok((StatusCode::OK, Json(MonsterDto::from_monster(monster))))
}

/// Delete a monster.
#[utoipa::path(
    delete,
    path = "/api/monsters/{id}",
    tag = MONSTER_TAG,
    params(
        ("id" = Uuid, Path, description = "Monster id")
    ),
    responses(
        (status = 204, description = "Successfully deleted monster"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requester is not the creator", body = ErrorDto),
        (status = 404, description = "Unknown monster id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_monster(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    let service = MonsterService::new(state.monsters.clone(), state.families.clone());
    service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id_list(raw: &str) -> Result<Vec<Uuid>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            Uuid::parse_str(s).map_err(|_| AppError::BadRequest(format!("Invalid monster id '{s}'")))
        })
        .collect()
}
