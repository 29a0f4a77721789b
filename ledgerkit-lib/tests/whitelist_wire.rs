//! Wire-format tests for the whitelist submission payload.
//!
//! The two-key JSON shape and the canonical byte layout inside it are a
//! service contract; these tests pin both against golden vectors captured
//! from an independent encoder.

use ledgerkit_lib::{
    from_xdr, to_xdr, DecoratedSignature, Error, NetworkId, TransactionEnvelope, WhitelistEnvelope,
};

const PASSPHRASE: &str = "Private Test Network ; 2026";

/// Unsigned three-byte transaction wrapped with the SHA-256 of [`PASSPHRASE`].
const GOLDEN_PAYLOAD: &str = r#"{"envelope":[0,0,0,3,1,2,3,0,0,0,0,0],"network_id":[198,94,109,103,68,184,211,86,2,190,32,172,159,111,131,195,100,187,238,200,24,111,113,70,102,44,78,229,178,29,88,31]}"#;

fn network_id() -> NetworkId {
    NetworkId::from_passphrase(PASSPHRASE)
}

fn unsigned_envelope() -> TransactionEnvelope {
    TransactionEnvelope::new(vec![1, 2, 3], vec![])
}

fn signed_envelope() -> TransactionEnvelope {
    TransactionEnvelope::new(
        vec![1, 2, 3],
        vec![DecoratedSignature {
            hint: [0xDE, 0xAD, 0xBE, 0xEF],
            signature: vec![9; 5],
        }],
    )
}

fn payload_from_parts(envelope: &[u8], network_id: &[u8]) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "envelope": envelope,
        "network_id": network_id,
    }))
    .unwrap()
}

#[test]
fn payload_structure_matches_the_service_contract() {
    let payload = WhitelistEnvelope::new(signed_envelope(), network_id())
        .encode()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&payload).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2, "exactly the two contract keys");

    let envelope_bytes: Vec<u8> = value["envelope"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n.as_u64().unwrap() as u8)
        .collect();
    assert_eq!(envelope_bytes, to_xdr(&signed_envelope()));

    let id_bytes: Vec<u8> = value["network_id"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n.as_u64().unwrap() as u8)
        .collect();
    assert_eq!(id_bytes, network_id().as_bytes());
}

#[test]
fn encoding_reproduces_the_golden_payload() {
    let payload = WhitelistEnvelope::new(unsigned_envelope(), network_id())
        .encode()
        .unwrap();
    assert_eq!(payload, GOLDEN_PAYLOAD.as_bytes());
}

#[test]
fn golden_payload_decodes() {
    let decoded = WhitelistEnvelope::decode(GOLDEN_PAYLOAD.as_bytes()).unwrap();
    assert_eq!(decoded.transaction_envelope(), &unsigned_envelope());
    assert_eq!(decoded.network_id(), network_id());
}

#[test]
fn round_trip_preserves_signatures() {
    let envelope = WhitelistEnvelope::new(signed_envelope(), network_id());
    let decoded = WhitelistEnvelope::decode(&envelope.encode().unwrap()).unwrap();

    assert_eq!(decoded, envelope);
    assert_eq!(decoded.transaction_envelope().signatures().len(), 1);
    assert_eq!(
        decoded.transaction_envelope().signatures()[0].hint,
        [0xDE, 0xAD, 0xBE, 0xEF]
    );
}

#[test]
fn key_order_does_not_matter() {
    let digest_list = network_id()
        .as_bytes()
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let reversed = format!(
        r#"{{"network_id":[{digest_list}],"envelope":[0,0,0,3,1,2,3,0,0,0,0,0]}}"#
    );

    let decoded = WhitelistEnvelope::decode(reversed.as_bytes()).unwrap();
    assert_eq!(decoded.transaction_envelope(), &unsigned_envelope());
}

#[test]
fn decode_rejects_non_json_input() {
    for payload in [&b"whitelist?"[..], &[0x00, 0x00, 0x00, 0x03][..], b""] {
        let err = WhitelistEnvelope::decode(payload).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}

#[test]
fn decode_rejects_missing_keys() {
    let missing_network = br#"{"envelope":[0,0,0,0,0,0,0,0]}"#;
    assert!(matches!(
        WhitelistEnvelope::decode(missing_network).unwrap_err(),
        Error::Decode(_)
    ));

    let missing_envelope = format!(
        r#"{{"network_id":[{}]}}"#,
        vec!["0"; 32].join(",")
    );
    assert!(matches!(
        WhitelistEnvelope::decode(missing_envelope.as_bytes()).unwrap_err(),
        Error::Decode(_)
    ));
}

#[test]
fn decode_rejects_truncated_envelope_bytes() {
    let mut envelope_bytes = to_xdr(&signed_envelope());
    envelope_bytes.truncate(envelope_bytes.len() - 1);

    let payload = payload_from_parts(&envelope_bytes, network_id().as_bytes());
    let err = WhitelistEnvelope::decode(&payload).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn decode_rejects_trailing_envelope_bytes() {
    let mut envelope_bytes = to_xdr(&signed_envelope());
    envelope_bytes.push(0);

    let payload = payload_from_parts(&envelope_bytes, network_id().as_bytes());
    let err = WhitelistEnvelope::decode(&payload).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn decode_rejects_nonzero_envelope_padding() {
    let envelope_bytes = hex::decode("00000003010203aa00000000").unwrap();

    let payload = payload_from_parts(&envelope_bytes, network_id().as_bytes());
    let err = WhitelistEnvelope::decode(&payload).unwrap_err();
    assert!(err.to_string().contains("padding"));
}

#[test]
fn decode_rejects_oversized_signature_count() {
    // Declares 21 signatures behind a three-byte transaction.
    let envelope_bytes = hex::decode("000000030102030000000015").unwrap();

    let payload = payload_from_parts(&envelope_bytes, network_id().as_bytes());
    let err = WhitelistEnvelope::decode(&payload).unwrap_err();
    assert!(err.to_string().contains("signature count"));
}

#[test]
fn decode_rejects_wrong_length_network_id() {
    for len in [0usize, 31, 33] {
        let payload = payload_from_parts(&to_xdr(&unsigned_envelope()), &vec![0u8; len]);
        let err = WhitelistEnvelope::decode(&payload).unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "length {len}");
    }
}

#[test]
fn signed_envelope_bytes_match_golden_layout() {
    assert_eq!(
        hex::encode(to_xdr(&signed_envelope())),
        "000000030102030000000001deadbeef000000050909090909000000"
    );
    assert_eq!(
        from_xdr::<TransactionEnvelope>(
            &hex::decode("000000030102030000000001deadbeef000000050909090909000000").unwrap()
        )
        .unwrap(),
        signed_envelope()
    );
}
