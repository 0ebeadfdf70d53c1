//! End-to-end tests through the facade crate
//!
//! Settings come from TOML the way an embedding node would load them, then a
//! signed multi-signature transaction is encoded, decoded and classified.

use ela_rs::prelude::*;

const SETTINGS: &str = r#"
max_attributes = 4
max_programs = 2
reject_trailing_bytes = true
"#;

fn two_of_three_script() -> Vec<u8> {
    let mut code = vec![0x52];
    for seed in 1..=3u8 {
        code.push(0x21);
        code.push(0x02);
        code.extend_from_slice(&[seed; 32]);
    }
    code.push(0x53);
    code.push(0xae);
    code
}

fn signed_transfer() -> Transaction {
    TransactionBuilder::new(Payload::TransferAsset)
        .nonce(1)
        .input(UtxoInput::new(UInt256::new([0x5a; 32]), 0))
        .output(TxOutput::new(
            UInt256::new([0xa3; 32]),
            Fixed64::from_coins(10),
            UInt168::new([0x12; 21]),
        ))
        .program(Program::new(two_of_three_script(), vec![0x40; 130]))
        .build()
}

#[test]
fn test_decode_with_loaded_settings() {
    let settings = CodecSettings::from_toml_str(SETTINGS).unwrap();
    assert_eq!(settings.max_attributes, 4);
    assert_eq!(settings.max_inputs, CodecSettings::default().max_inputs);

    let tx = signed_transfer();
    let bytes = tx.to_bytes().unwrap();
    let decoded = Transaction::from_bytes_with(&bytes, &settings).unwrap();
    assert_eq!(decoded, tx);

    let mut padded = bytes.clone();
    padded.push(0);
    assert_eq!(
        Transaction::from_bytes_with(&padded, &settings),
        Err(CoreError::TrailingBytes(1))
    );
}

#[test]
fn test_signed_transfer_is_multi_sign() {
    let tx = Transaction::from_hex(&signed_transfer().to_hex().unwrap()).unwrap();

    let opcode = tx.get_transaction_type().unwrap();
    assert_eq!(SignatureType::try_from(opcode), Ok(SignatureType::MultiSig));

    let keys = tx.get_multi_sign_public_keys().unwrap();
    assert_eq!(keys.len(), 3);
    assert_eq!(hex::encode(&keys[2][..2]), "2102");
}

#[test]
fn test_display_renders_hash() {
    let tx = signed_transfer();
    let text = tx.to_string();
    assert!(text.contains(&format!("Hash: {}", tx.hash().unwrap())));
    assert!(text.contains("TxType: TransferAsset"));
}
