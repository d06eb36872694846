mod schedule_open;

pub use schedule_open::{ScheduleOpen, ScheduleStatus};
