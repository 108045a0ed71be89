//! API service modules for Teamwork endpoints.
//!
//! Each service is a thin caller into the request pipeline: it picks a
//! route, a verb, and forwards parameters. All response decoding and
//! status classification happens in the client module.

mod account;
mod calendar;
mod companies;
mod messages;
mod people;
mod projects;
mod tasks;
mod time_entries;
mod trashcan;

pub use account::AccountService;
pub use calendar::CalendarService;
pub use companies::CompaniesService;
pub use messages::MessagesService;
pub use people::PeopleService;
pub use projects::ProjectsService;
pub use tasks::TasksService;
pub use time_entries::TimeEntriesService;
pub use trashcan::TrashcanService;
