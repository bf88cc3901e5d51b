use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        family::{FamiliesDto, FamilyDto, FamilyUpsertDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::family::FamilyService,
        state::AppState,
    },
};

/// Tag for grouping family endpoints in OpenAPI documentation
pub static FAMILY_TAG: &str = "family";

/// List all public families.
///
/// Secret families never appear here, even though they are fetchable by
/// direct id.
#[utoipa::path(
    get,
    path = "/api/families",
    tag = FAMILY_TAG,
    responses(
        (status = 200, description = "Public families", body = FamiliesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_public_families(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = FamilyService::new(state.families.clone());

    let families = service.list_public().await?;

    Ok((
        StatusCode::OK,
        Json(FamiliesDto {
            families: families.into_iter().map(FamilyDto::from_family).collect(),
        }),
    ))
}

/// List the authenticated user's families regardless of visibility.
#[utoipa::path(
    get,
    path = "/api/users/me/families",
    tag = FAMILY_TAG,
    responses(
        (status = 200, description = "The requester's families", body = FamiliesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_families(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    let service = FamilyService::new(state.families.clone());
    let families = service.list_mine(&user).await?;

    Ok((
        StatusCode::OK,
        Json(FamiliesDto {
            families: families.into_iter().map(FamilyDto::from_family).collect(),
        }),
    ))
}

/// Get a family by id.
///
/// Secret families resolve for anyone holding the direct link; private
/// families only for their creator.
#[utoipa::path(
    get,
    path = "/api/families/{id}",
    tag = FAMILY_TAG,
    params(
        ("id" = Uuid, Path, description = "Family id")
    ),
    responses(
        (status = 200, description = "The family", body = FamilyDto),
        (status = 403, description = "Not readable by the requester", body = ErrorDto),
        (status = 404, description = "Unknown family id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_family(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .current_user()
        .await?;

    let service = FamilyService::new(state.families.clone());
    let family = service.get(id, user.as_ref()).await?;

    Ok((StatusCode::OK, Json(FamilyDto::from_family(family))))
}

/// Create a family owned by the authenticated user.
#[utoipa::path(
    post,
    path = "/api/families",
    tag = FAMILY_TAG,
    request_body = FamilyUpsertDto,
    responses(
        (status = 201, description = "Successfully created family", body = FamilyDto),
        (status = 400, description = "Invalid family data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_family(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<FamilyUpsertDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    let params = payload.into_create_params(user.id)?;

    let service = FamilyService::new(state.families.clone());
    let family = service.create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(FamilyDto::from_family(family))))
}

/// Replace a family's fields.
#[utoipa::path(
    put,
    path = "/api/families/{id}",
    tag = FAMILY_TAG,
    params(
        ("id" = Uuid, Path, description = "Family id")
    ),
    request_body = FamilyUpsertDto,
    responses(
        (status = 200, description = "Successfully updated family", body = FamilyDto),
        (status = 400, description = "Invalid family data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requester is not the creator", body = ErrorDto),
        (status = 404, description = "Unknown family id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_family(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<FamilyUpsertDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    let params = payload.into_update_params(id)?;

    let service = FamilyService::new(state.families.clone());
    let family = service.update(&user, params).await?;

    Ok((StatusCode::OK, Json(FamilyDto::from_family(family))))
}

/// Delete a family.
///
/// Fails with 400 while any monster still references the family.
#[utoipa::path(
    delete,
    path = "/api/families/{id}",
    tag = FAMILY_TAG,
    params(
        ("id" = Uuid, Path, description = "Family id")
    ),
    responses(
        (status = 204, description = "Successfully deleted family"),
        (status = 400, description = "Family still has monsters", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requester is not the creator", body = ErrorDto),
        (status = 404, description = "Unknown family id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_family(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    let service = FamilyService::new(state.families.clone());
    service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
