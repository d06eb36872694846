mod schedule_open_repository;

#[cfg(test)]
pub use schedule_open_repository::mock;
pub use schedule_open_repository::{
    upsert_schedule, PgScheduleOpenRepository, ScheduleOpenRepository,
};
