use super::*;

mod create;
mod delete;
mod exists;
mod find_one;
mod find_page;
mod related;
mod update;
