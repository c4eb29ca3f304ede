mod summary;
pub mod views;

pub use summary::{
    conversion_rates, count_by_application_month, count_by_current_stage, recent_applications,
    upcoming_interviews, RECENT_APPLICATION_LIMIT,
};
