use crate::{
    model::auth::Role,
    server::{data::user::UserRepository, model::user::NewUser},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_credentials;
mod set_active;
