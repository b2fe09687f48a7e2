use crate::{
    data::cc_status::CcStatusRepository,
    model::{cc_status::UpsertCcStatusParam, stage::Stage},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod upsert_many;
