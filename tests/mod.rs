mod common;
mod json_report_tests;
mod property_tests;
mod scenario_tests;
