use crate::{
    model::vehicle::VehicleKind,
    server::{data::vehicle::VehicleRepository, model::vehicle::VehicleParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_with_active_owner;
mod plate_taken;
mod set_inside_if;
