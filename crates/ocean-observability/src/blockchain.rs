use std::time::Duration;

use metrics::{counter, histogram};

pub fn record_rpc_call(network: &str, operation: &str, status: &str, duration: Duration) {
    counter!(
        "ocean_rpc_total",
        "network" => network.to_string(),
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "ocean_rpc_duration_seconds",
        "network" => network.to_string(),
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .record(duration.as_secs_f64());
}

pub fn record_contract_call(contract: &str, function: &str, status: &str, duration: Duration) {
    counter!(
        "ocean_contract_call_total",
        "contract" => contract.to_string(),
        "function" => function.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "ocean_contract_call_duration_seconds",
        "contract" => contract.to_string(),
        "function" => function.to_string(),
        "status" => status.to_string()
    )
    .record(duration.as_secs_f64());
}

pub fn record_tx_stage(
    contract: &str,
    function: &str,
    stage: &str,
    status: &str,
    duration: Duration,
) {
    counter!(
        "ocean_tx_stage_total",
        "contract" => contract.to_string(),
        "function" => function.to_string(),
        "stage" => stage.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "ocean_tx_stage_duration_seconds",
        "contract" => contract.to_string(),
        "function" => function.to_string(),
        "stage" => stage.to_string(),
        "status" => status.to_string()
    )
    .record(duration.as_secs_f64());
}
