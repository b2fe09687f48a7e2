use crate::{data::cc_cooldown::CcCooldownRepository, error::AppError};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod upsert;
