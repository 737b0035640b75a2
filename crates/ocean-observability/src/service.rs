use std::time::Duration;

use metrics::{counter, histogram};

/// Records one HTTP call to an off-chain service (provider, metadata cache).
pub fn record_service_call(service: &str, endpoint: &str, status: &str, duration: Duration) {
    counter!(
        "ocean_service_call_total",
        "service" => service.to_string(),
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "ocean_service_call_duration_seconds",
        "service" => service.to_string(),
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .record(duration.as_secs_f64());
}
