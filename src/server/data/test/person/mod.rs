use crate::server::data::person::PersonRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists;
