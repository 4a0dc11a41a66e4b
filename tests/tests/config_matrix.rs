//! Every configuration produces the standard digest for well-formed input

use tinyblake::api::error::ErrorKind;
use tinyblake_algorithms::{blake2s_with_config, Blake2s, Blake2sConfig, HashFunction};

const ABC: &str = "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982";

fn matrix() -> Vec<Blake2sConfig> {
    let mut configs = Vec::new();
    for streaming in [true, false] {
        for strict in [true, false] {
            for large_input in [true, false] {
                configs.push(
                    Blake2sConfig::new()
                        .streaming(streaming)
                        .strict(strict)
                        .large_input(large_input),
                );
            }
        }
    }
    configs
}

#[test]
fn aligned_input_is_configuration_independent() {
    let data: Vec<u8> = (0..256).map(|i| (i % 251) as u8).collect();
    let expected = "6b58271b163ae846666204a78e4dc65ab390d510ab1091422cca43577252b016";
    for config in matrix() {
        let mut out = [0u8; 32];
        blake2s_with_config(config, &mut out, &data).unwrap();
        assert_eq!(hex::encode(out), expected, "{:?}", config);
    }
}

#[test]
fn misaligned_input_is_rejected_only_by_strict_block_mode() {
    for config in matrix() {
        let mut out = [0u8; 32];
        let result = blake2s_with_config(config, &mut out, b"abc");
        if config.is_strict() && !config.is_streaming() {
            let err: tinyblake::api::Error = result.unwrap_err().into();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        } else {
            result.unwrap();
            assert_eq!(hex::encode(out), ABC, "{:?}", config);
        }
    }
}

#[test]
fn misuse_maps_to_misused_state() {
    let mut hasher = Blake2s::new();
    hasher.update(b"abc").unwrap();
    hasher.finalize().unwrap();
    let err: tinyblake::api::Error = hasher.finalize().unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::MisusedState);

    let err: tinyblake::api::Error = hasher.update(b"x").unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::MisusedState);
}

#[test]
fn last_node_changes_only_the_final_compression() {
    let cfg = Blake2sConfig::new().last_node(true);
    let mut plain = Blake2s::new();
    let mut last = Blake2s::with_config(cfg);
    let data = [7u8; 130];
    plain.update(&data).unwrap();
    last.update(&data).unwrap();
    assert_eq!(plain.chaining_value(), last.chaining_value());
    assert_ne!(plain.finalize().unwrap(), last.finalize().unwrap());
}
