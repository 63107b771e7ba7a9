use std::path::PathBuf;

use comfy_table::{Table, presets::UTF8_FULL};
use jiff::{Timestamp, tz::TimeZone};
use waybill_core::report::Report;

/// Writes `content` to `out`, creating parent folders, or to stdout.
pub fn write_output(out: Option<&PathBuf>, content: &str) -> Result<(), anyhow::Error> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
        }
        None => println!("{content}"),
    }

    Ok(())
}

pub fn write_report(out: Option<&PathBuf>, report: &Report) -> Result<(), anyhow::Error> {
    if out.is_none() {
        return Ok(());
    }

    write_output(out, &serde_json::to_string_pretty(report)?)
}

pub fn print_report(report: &Report, time_zone: &TimeZone) {
    for table in report_tables(report, time_zone) {
        println!("{table}");
    }
}

fn report_tables(report: &Report, time_zone: &TimeZone) -> Vec<Table> {
    let mut dropped = new_table(vec!["Dropped location"]);
    for location in &report.dropped_locations {
        dropped.add_row(vec![location.location_name.clone()]);
    }

    let mut itineraries = new_table(vec!["Vehicle", "Load", "Distance", "From", "To"]);
    for itinerary in &report.itineraries {
        itineraries.add_row(vec![
            itinerary.vehicle_name.clone(),
            itinerary.load.to_string(),
            itinerary.distance.to_string(),
            format_time(itinerary.from, time_zone),
            format_time(itinerary.to, time_zone),
        ]);
    }

    let mut summaries = new_table(vec!["Vehicle", "Load", "Distance", "Time (min)", "Visits"]);
    for summary in &report.summaries {
        summaries.add_row(vec![
            summary.vehicle_name.clone(),
            summary.load.to_string(),
            summary.distance.to_string(),
            summary.time.to_string(),
            summary.number_of_visits.to_string(),
        ]);
    }

    let mut totals = new_table(vec!["Total load", "Total distance", "Total time (min)"]);
    totals.add_row(vec![
        report.totals.load.to_string(),
        report.totals.distance.to_string(),
        report.totals.time.to_string(),
    ]);

    vec![dropped, itineraries, summaries, totals]
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

fn format_time(timestamp: Timestamp, time_zone: &TimeZone) -> String {
    timestamp
        .to_zoned(time_zone.clone())
        .strftime("%Y-%m-%d %H:%M %:z")
        .to_string()
}
