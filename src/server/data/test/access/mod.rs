use crate::{
    model::{
        access::{AccessResult, Direction},
        vehicle::VehicleKind,
    },
    server::{
        data::access::AccessRepository,
        model::access::{AccessFilter, NewAccess},
    },
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_filtered;
mod latest_entries;

fn filter() -> AccessFilter {
    AccessFilter {
        plate: None,
        vehicle_kind: None,
        from: None,
        to: None,
        page: 0,
        per_page: 25,
    }
}
