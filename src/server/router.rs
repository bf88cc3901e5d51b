use axum::{
    routing::{get, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{callback, get_user, login, logout},
        collection::{
            create_collection, delete_collection, download_collection, get_collection,
            list_my_collections, list_public_collections, set_collection_monsters,
            update_collection,
        },
        family::{
            create_family, delete_family, get_family, list_my_families, list_public_families,
            update_family,
        },
        monster::{
            create_monster, delete_monster, get_monster, list_my_monsters, list_public_monsters,
            update_monster,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::auth::login,
        crate::server::controller::auth::callback,
        crate::server::controller::auth::logout,
        crate::server::controller::auth::get_user,
        crate::server::controller::monster::list_public_monsters,
        crate::server::controller::monster::list_my_monsters,
        crate::server::controller::monster::get_monster,
        crate::server::controller::monster::create_monster,
        crate::server::controller::monster::update_monster,
        crate::server::controller::monster::delete_monster,
        crate::server::controller::family::list_public_families,
        crate::server::controller::family::list_my_families,
        crate::server::controller::family::get_family,
        crate::server::controller::family::create_family,
        crate::server::controller::family::update_family,
        crate::server::controller::family::delete_family,
        crate::server::controller::collection::list_public_collections,
        crate::server::controller::collection::list_my_collections,
        crate::server::controller::collection::get_collection,
        crate::server::controller::collection::create_collection,
        crate::server::controller::collection::update_collection,
        crate::server::controller::collection::delete_collection,
        crate::server::controller::collection::set_collection_monsters,
        crate::server::controller::collection::download_collection,
    ),
    components(schemas(
        crate::model::api::ErrorDto,
        crate::model::user::UserDto,
        crate::model::monster::ActionDto,
        crate::model::monster::AbilityDto,
        crate::model::monster::MonsterFamilyDto,
        crate::model::monster::MonsterDto,
        crate::model::monster::MonstersDto,
        crate::model::monster::MonsterUpsertDto,
        crate::model::family::FamilyDto,
        crate::model::family::FamiliesDto,
        crate::model::family::FamilyUpsertDto,
        crate::model::collection::CollectionOverviewDto,
        crate::model::collection::CollectionDto,
        crate::model::collection::CollectionsDto,
        crate::model::collection::CollectionUpsertDto,
        crate::model::download::CompendiumFeatureDto,
        crate::model::download::CompendiumMonsterDto,
        crate::model::download::CompendiumPackDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/users/me", get(get_user))
        .route(
            "/api/monsters",
            get(list_public_monsters).post(create_monster),
        )
        .route(
            "/api/monsters/{id}",
            get(get_monster).put(update_monster).delete(delete_monster),
        )
        .route("/api/users/me/monsters", get(list_my_monsters))
        .route(
            "/api/families",
            get(list_public_families).post(create_family),
        )
        .route(
            "/api/families/{id}",
            get(get_family).put(update_family).delete(delete_family),
        )
        .route("/api/users/me/families", get(list_my_families))
        .route(
            "/api/collections",
            get(list_public_collections).post(create_collection),
        )
        .route(
            "/api/collections/{id}",
            get(get_collection)
                .put(update_collection)
                .delete(delete_collection),
        )
        .route(
            "/api/collections/{id}/monsters",
            put(set_collection_monsters),
        )
        .route("/api/collections/{id}/download", get(download_collection))
        .route("/api/users/me/collections", get(list_my_collections))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
