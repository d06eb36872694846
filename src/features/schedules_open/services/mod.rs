mod schedule_open_service;

pub use schedule_open_service::SchedulesOpenService;
