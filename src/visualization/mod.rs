mod tables;
mod charts;
mod sections;

pub use tables::{
    format_nutrient_status, print_nutrient_status,
    format_fertilizer_table, print_fertilizer_table,
    format_yield_summary, print_yield_summary,
    format_crop_table, print_crop_table,
    format_district_table, print_district_table,
    format_report,
};
pub use charts::{format_scenario_chart, print_scenario_chart};
pub use sections::{format_advisory_sections, print_advisory_sections};
