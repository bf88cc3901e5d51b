use crate::server::{
    data::{collection::CollectionRepository, CollectionStore},
    error::AppError,
    model::{
        collection::{CreateCollectionParams, UpdateCollectionParams},
        family::ShareVisibility,
    },
};
use test_utils::builder::TestBuilder;

mod create;
mod get_by_id;
mod membership;
