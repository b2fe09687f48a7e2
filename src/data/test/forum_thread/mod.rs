use crate::data::forum_thread::ForumThreadRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::forum_thread::ForumThreadFactory};

mod poll;
