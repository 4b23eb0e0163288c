//! Date stamps and download names for the printable schedule.

use chrono::NaiveDate;

/// Format a date the way it is printed on the schedule, e.g. `03/15/2024`.
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// File name offered for download, e.g. `station_rotation_03-15-2024.html`.
pub fn download_file_name(stamp: &str) -> String {
    format!("station_rotation_{}.html", stamp.replace('/', "-"))
}

/// `Content-Disposition` value that makes browsers save the page.
pub fn content_disposition(stamp: &str) -> String {
    format!("attachment; filename=\"{}\"", download_file_name(stamp))
}
