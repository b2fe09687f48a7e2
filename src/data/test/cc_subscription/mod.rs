use crate::{data::cc_subscription::CcSubscriptionRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory, factory::cc_subscription::SubscriptionFactory};

mod delete;
mod get_all;
