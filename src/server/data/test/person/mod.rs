use crate::{
    model::person::PersonKind,
    server::{
        data::person::PersonRepository,
        model::person::{CreatePersonParams, UpdatePersonParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod deactivate;
mod document_taken;
mod get_active;
mod update;
