pub mod schedule_open_dto;

pub use schedule_open_dto::{CreateScheduleOpenDto, ScheduleOpenResponseDto, UpdateScheduleOpenDto};
