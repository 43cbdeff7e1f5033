use crate::{
    model::audit::AuditAction,
    server::{data::audit::AuditRepository, model::audit::NewAuditEntry},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
