use crate::data::cc_timestamp::CcTimestampRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod last_check;
