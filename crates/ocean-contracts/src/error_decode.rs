use alloy::{
    contract::Error as ContractError,
    hex,
    primitives::Bytes,
    sol_types::{Panic, Revert, SolError},
};

fn spelunk_hex_revert(value: &serde_json::Value) -> Option<Bytes> {
    match value {
        serde_json::Value::String(s) => s.parse().ok(),
        serde_json::Value::Object(o) => o.values().find_map(spelunk_hex_revert),
        _ => None,
    }
}

fn extract_revert_data(err: &ContractError) -> Option<Bytes> {
    if let Some(data) = err.as_revert_data() {
        return Some(data);
    }

    // Some nodes (ganache, older geth) nest the revert payload inside the
    // error `data` object instead of returning it as a plain hex string.
    let ContractError::TransportError(transport) = err else {
        return None;
    };

    let payload = transport.as_error_resp()?;
    let raw = payload.data.as_ref()?;
    let s = raw.get().trim();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(s)
        && let Some(bytes) = spelunk_hex_revert(&value)
    {
        return Some(bytes);
    }

    s.trim_matches('"').parse().ok()
}

/// Human-readable description of revert data returned by an Ocean contract.
///
/// Only `Error(string)` and `Panic(uint256)` payloads are decoded; anything
/// else is reported by selector, even when its bytes happen to be UTF-8.
pub fn decode_revert_data(data: &[u8]) -> String {
    if data.starts_with(&Revert::SELECTOR)
        && let Ok(revert) = Revert::abi_decode(data)
    {
        return revert.reason;
    }

    if data.starts_with(&Panic::SELECTOR)
        && let Ok(panic) = Panic::abi_decode(data)
    {
        return match panic.kind() {
            Some(kind) => format!("Panic: {}", kind.as_str()),
            None => format!("Panic code {}", panic.code),
        };
    }

    if data.len() >= 4 {
        return format!(
            "Unknown custom error selector 0x{}",
            hex::encode(&data[..4])
        );
    }

    format!("Unknown revert data 0x{}", hex::encode(data))
}

pub(crate) fn decode_contract_error(err: &ContractError) -> Option<String> {
    let revert_data = extract_revert_data(err)?;
    Some(decode_revert_data(&revert_data))
}

/// Reason string used in error values: the decoded revert when present,
/// otherwise the transport error text.
pub(crate) fn describe_contract_error(err: &ContractError) -> String {
    decode_contract_error(err).unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use alloy::{primitives::U256, rpc::json_rpc::ErrorPayload, transports::RpcError};
    use serde_json::value::RawValue;

    use super::*;

    fn transport_error_with_data(data: &str) -> ContractError {
        ContractError::TransportError(RpcError::ErrorResp(ErrorPayload {
            code: 3,
            message: "execution reverted".into(),
            data: Some(RawValue::from_string(data.to_string()).unwrap()),
        }))
    }

    #[test]
    fn decodes_revert_string() {
        let data = Revert::from("ERC20Template: NOT MINTER").abi_encode();
        let decoded = decode_revert_data(&data);
        assert!(decoded.contains("ERC20Template: NOT MINTER"), "{decoded}");
    }

    #[test]
    fn reports_unknown_selector() {
        let decoded = decode_revert_data(&[0xde, 0xad, 0xbe, 0xef, 0x01]);
        assert_eq!(decoded, "Unknown custom error selector 0xdeadbeef");
    }

    #[test]
    fn utf8_custom_error_is_reported_by_selector() {
        // "Nope" as a selector plus printable arguments
        let data = b"NopeNOT ALLOWED".to_vec();
        assert_eq!(decode_revert_data(&data), "Unknown custom error selector 0x4e6f7065");
    }

    #[test]
    fn decodes_panic_code() {
        let data = Panic { code: U256::from(0x11) }.abi_encode();
        let decoded = decode_revert_data(&data);
        assert!(decoded.starts_with("Panic"), "{decoded}");
        assert!(decoded.contains("overflow"), "{decoded}");
    }

    #[test]
    fn reports_short_revert_data() {
        assert_eq!(decode_revert_data(&[0x01, 0x02]), "Unknown revert data 0x0102");
    }

    #[test]
    fn extracts_revert_from_nested_payload() {
        let encoded = hex::encode_prefixed(Revert::from("ERC721Template: NOT ERC20DEPLOYER_ROLE").abi_encode());
        let err = transport_error_with_data(&format!(r#"{{"message":"revert","data":"{encoded}"}}"#));

        let decoded = decode_contract_error(&err).unwrap();
        assert!(decoded.contains("NOT ERC20DEPLOYER_ROLE"), "{decoded}");
    }

    #[test]
    fn describes_transport_error_without_revert_data() {
        let err = ContractError::TransportError(RpcError::ErrorResp(ErrorPayload {
            code: -32000,
            message: "insufficient funds for gas * price + value".into(),
            data: None,
        }));

        assert!(decode_contract_error(&err).is_none());
        assert!(describe_contract_error(&err).contains("insufficient funds"));
    }
}
