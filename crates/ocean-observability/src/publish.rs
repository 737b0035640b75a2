use std::time::Duration;

use metrics::{counter, histogram};

pub fn record_publish(status: &str, compressed: bool, encrypted: bool, duration: Duration) {
    counter!(
        "ocean_publish_total",
        "status" => status.to_string(),
        "compressed" => compressed.to_string(),
        "encrypted" => encrypted.to_string()
    )
    .increment(1);
    histogram!(
        "ocean_publish_duration_seconds",
        "status" => status.to_string()
    )
    .record(duration.as_secs_f64());
}
