use crate::server::{
    data::{user::UserRepository, UserStore},
    error::AppError,
    model::user::UpsertUserParams,
};
use test_utils::builder::TestBuilder;

mod find;
