use crate::server::{
    data::{family::FamilyRepository, FamilyStore},
    error::AppError,
    model::{
        family::{CreateFamilyParams, ShareVisibility, UpdateFamilyParams},
        monster::Ability,
    },
};
use test_utils::builder::TestBuilder;

mod create;
mod get_by_id;
mod list;
