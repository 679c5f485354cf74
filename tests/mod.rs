mod common;
mod survey_notification_tests;
