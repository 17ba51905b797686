use chrono::Local;

/// Format of the capture timestamp attached to every record
pub const CAPTURE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current wall-clock time in the record capture format
pub fn capture_timestamp() -> String {
    Local::now().format(CAPTURE_FORMAT).to_string()
}

/// Output filename embedding the capture timestamp
pub fn timestamped_filename(prefix: &str) -> String {
    format!("{}_{}.json", prefix, Local::now().format("%Y%m%d_%H%M%S"))
}
