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
        collection::{CollectionDto, CollectionOverviewDto, CollectionUpsertDto, CollectionsDto},
        download::CompendiumPackDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::collection::CollectionService,
        state::AppState,
    },
};

/// Tag for grouping collection endpoints in OpenAPI documentation
pub static COLLECTION_TAG: &str = "collection";

/// List all public collections.
///
/// Secret collections never appear here, even though they are fetchable by
/// direct id.
#[utoipa::path(
    get,
    path = "/api/collections",
    tag = COLLECTION_TAG,
    responses(
        (status = 200, description = "Public collections", body = CollectionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_public_collections(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = CollectionService::new(state.collections.clone(), state.monsters.clone());

    let collections = service.list_public().await?;

    Ok((
        StatusCode::OK,
        Json(CollectionsDto {
            collections: collections
                .into_iter()
                .map(CollectionOverviewDto::from_overview)
                .collect(),
        }),
    ))
}

/// List the authenticated user's collections regardless of visibility.
#[utoipa::path(
    get,
    path = "/api/users/me/collections",
    tag = COLLECTION_TAG,
    responses(
        (status = 200, description = "The requester's collections", body = CollectionsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_collections(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    let service = CollectionService::new(state.collections.clone(), state.monsters.clone());
    let collections = service.list_mine(&user).await?;

    Ok((
        StatusCode::OK,
        Json(CollectionsDto {
            collections: collections
                .into_iter()
                .map(CollectionOverviewDto::from_overview)
                .collect(),
        }),
    ))
}

/// Get a collection with its member list.
///
/// The collection row and its members are fetched in parallel. Secret
/// collections resolve for anyone holding the direct link; private
/// collections only for their creator.
#[utoipa::path(
    get,
    path = "/api/collections/{id}",
    tag = COLLECTION_TAG,
    params(
        ("id" = Uuid, Path, description = "Collection id")
    ),
    responses(
        (status = 200, description = "The collection with members", body = CollectionDto),
        (status = 403, description = "Not readable by the requester", body = ErrorDto),
        (status = 404, description = "Unknown collection id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_collection(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .current_user()
        .await?;

    let service = CollectionService::new(state.collections.clone(), state.monsters.clone());
    let collection = service.get(id, user.as_ref()).await?;

    Ok((
        StatusCode::OK,
        Json(CollectionDto::from_collection(collection)),
    ))
}

/// Create a collection owned by the authenticated user.
#[utoipa::path(
    post,
    path = "/api/collections",
    tag = COLLECTION_TAG,
    request_body = CollectionUpsertDto,
    responses(
        (status = 201, description = "Successfully created collection", body = CollectionOverviewDto),
        (status = 400, description = "Invalid collection data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_collection(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CollectionUpsertDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    let params = payload.into_create_params(user.id)?;

    let service = CollectionService::new(state.collections.clone(), state.monsters.clone());
    let overview = service.create(&user, params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CollectionOverviewDto::from_overview(overview)),
    ))
}

/// Update a collection's name, description, and visibility.
#[utoipa::path(
    put,
    path = "/api/collections/{id}",
    tag = COLLECTION_TAG,
    params(
        ("id" = Uuid, Path, description = "Collection id")
    ),
    request_body = CollectionUpsertDto,
    responses(
        (status = 200, description = "Successfully updated collection", body = CollectionOverviewDto),
        (status = 400, description = "Invalid collection data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requester is not the creator", body = ErrorDto),
        (status = 404, description = "Unknown collection id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_collection(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<CollectionUpsertDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    let params = payload.into_update_params(id)?;

    let service = CollectionService::new(state.collections.clone(), state.monsters.clone());
    let overview = service.update(&user, params).await?;

    Ok((
        StatusCode::OK,
        Json(CollectionOverviewDto::from_overview(overview)),
    ))
}

/// Delete a collection.
#[utoipa::path(
    delete,
    path = "/api/collections/{id}",
    tag = COLLECTION_TAG,
    params(
        ("id" = Uuid, Path, description = "Collection id")
    ),
    responses(
        (status = 204, description = "Successfully deleted collection"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requester is not the creator", body = ErrorDto),
        (status = 404, description = "Unknown collection id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    let service = CollectionService::new(state.collections.clone(), state.monsters.clone());
    service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Replace a collection's membership with the desired id set.
///
/// The body is the full desired membership; the server computes add/remove
/// deltas against current membership and applies them. A nonexistent monster
/// id aborts the whole batch with 404.
#[utoipa::path(
    put,
    path = "/api/collections/{id}/monsters",
    tag = COLLECTION_TAG,
    params(
        ("id" = Uuid, Path, description = "Collection id")
    ),
    request_body = Vec<Uuid>,
    responses(
        (status = 200, description = "The collection in its final state", body = CollectionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requester is not the creator", body = ErrorDto),
        (status = 404, description = "Unknown collection or monster id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_collection_monsters(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(desired): Json<Vec<Uuid>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    let service = CollectionService::new(state.collections.clone(), state.monsters.clone());
    let collection = service.set_monsters(&user, id, desired).await?;

    Ok((
        StatusCode::OK,
        Json(CollectionDto::from_collection(collection)),
    ))
}

/// Export a collection as a compendium pack.
///
/// Secret and public collections download for anyone with the link; private
/// collections only for their creator.
#[utoipa::path(
    get,
    path = "/api/collections/{id}/download",
    tag = COLLECTION_TAG,
    params(
        ("id" = Uuid, Path, description = "Collection id")
    ),
    responses(
        (status = 200, description = "Compendium pack export", body = CompendiumPackDto),
        (status = 403, description = "Not readable by the requester", body = ErrorDto),
        (status = 404, description = "Unknown collection id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_collection(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .current_user()
        .await?;

    let service = CollectionService::new(state.collections.clone(), state.monsters.clone());
    let collection = service.get(id, user.as_ref()).await?;

    Ok((
        StatusCode::OK,
        Json(CompendiumPackDto::from_collection(collection)),
    ))
}
