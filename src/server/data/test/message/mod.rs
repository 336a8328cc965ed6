use crate::server::{data::message::MessageRepository, model::message::CreateMessageParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_author;
mod get_by_id;
mod get_paginated;
