mod dashboard_tests;
mod events_tests;
mod export_tests;
