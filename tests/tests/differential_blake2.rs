//! Differential tests against RustCrypto's `blake2` crate

use blake2::Blake2s256;
use proptest::prelude::*;
use tinyblake_algorithms::{Blake2s, HashFunction};

fn reference(data: &[u8]) -> [u8; 32] {
    let out = <Blake2s256 as blake2::Digest>::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&out);
    bytes
}

#[test]
fn differential_all_lengths_up_to_four_blocks() {
    let data: Vec<u8> = (0..=256u32).map(|i| (i.wrapping_mul(31) ^ 0x5A) as u8).collect();
    for len in 0..=data.len() {
        let ours = Blake2s::digest(&data[..len]).unwrap();
        assert_eq!(ours, reference(&data[..len]), "length {}", len);
    }
}

#[test]
fn differential_incremental_against_reference() {
    let data = vec![0xC3u8; 1000];
    let mut ours = Blake2s::new();
    let mut theirs = <Blake2s256 as blake2::Digest>::new();
    for piece in data.chunks(37) {
        ours.update(piece).unwrap();
        blake2::Digest::update(&mut theirs, piece);
    }
    let expected = blake2::Digest::finalize(theirs);
    assert_eq!(ours.finalize().unwrap().as_ref(), &expected[..]);
}

proptest! {
    #[test]
    fn differential_random_messages(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let ours = Blake2s::digest(&data).unwrap();
        prop_assert_eq!(ours.into_bytes(), reference(&data));
    }
}
