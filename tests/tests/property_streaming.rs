//! Property-based tests for the streaming state machine

use proptest::prelude::*;
use tinyblake_algorithms::{Blake2s, Blake2sConfig, HashFunction};

/// Split `data` at the given cut points (taken modulo the length)
fn split_at_cuts(data: &[u8], cuts: &[usize]) -> Vec<Vec<u8>> {
    let mut points: Vec<usize> = cuts
        .iter()
        .map(|c| if data.is_empty() { 0 } else { c % (data.len() + 1) })
        .collect();
    points.sort_unstable();
    let mut pieces = Vec::new();
    let mut start = 0;
    for p in points {
        pieces.push(data[start..p].to_vec());
        start = p;
    }
    pieces.push(data[start..].to_vec());
    pieces
}

/// Generate data that's a multiple of 64 bytes (BLAKE2s block size)
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    (0usize..=6).prop_flat_map(|blocks| prop::collection::vec(any::<u8>(), blocks * 64))
}

proptest! {
    #[test]
    fn any_chunking_matches_one_shot(
        data in prop::collection::vec(any::<u8>(), 0..600),
        cuts in prop::collection::vec(any::<usize>(), 0..12)
    ) {
        let one_shot = tinyblake::hash(&data).unwrap();

        let mut hasher = Blake2s::new();
        // Cut points may repeat, producing empty updates
        for piece in split_at_cuts(&data, &cuts) {
            hasher.update(&piece).unwrap();
        }
        prop_assert_eq!(hasher.finalize().unwrap(), one_shot);
    }

    #[test]
    fn hashing_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..300)) {
        prop_assert_eq!(tinyblake::hash(&data).unwrap(), tinyblake::hash(&data).unwrap());
    }

    #[test]
    fn single_bit_flip_changes_digest(
        data in prop::collection::vec(any::<u8>(), 1..300),
        index in any::<usize>(),
        bit in 0u8..8
    ) {
        let mut flipped = data.clone();
        let i = index % data.len();
        flipped[i] ^= 1 << bit;
        prop_assert_ne!(tinyblake::hash(&data).unwrap(), tinyblake::hash(&flipped).unwrap());
    }

    #[test]
    fn appending_a_byte_changes_digest(
        data in prop::collection::vec(any::<u8>(), 0..300),
        extra in any::<u8>()
    ) {
        let mut longer = data.clone();
        longer.push(extra);
        prop_assert_ne!(tinyblake::hash(&data).unwrap(), tinyblake::hash(&longer).unwrap());
    }

    #[test]
    fn interleaved_states_are_isolated(
        a in prop::collection::vec(any::<u8>(), 0..400),
        b in prop::collection::vec(any::<u8>(), 0..400),
        chunk in 1usize..80
    ) {
        let mut ha = Blake2s::new();
        let mut hb = Blake2s::new();
        let mut ca = a.chunks(chunk);
        let mut cb = b.chunks(chunk);
        loop {
            let pa = ca.next();
            let pb = cb.next();
            if pa.is_none() && pb.is_none() {
                break;
            }
            if let Some(p) = pa {
                ha.update(p).unwrap();
            }
            if let Some(p) = pb {
                hb.update(p).unwrap();
            }
        }
        prop_assert_eq!(ha.finalize().unwrap(), tinyblake::hash(&a).unwrap());
        prop_assert_eq!(hb.finalize().unwrap(), tinyblake::hash(&b).unwrap());
    }

    #[test]
    fn block_mode_matches_streaming(data in block_aligned_data(), blocks_per_update in 1usize..4) {
        let mut hasher = Blake2s::with_config(Blake2sConfig::new().streaming(false));
        for piece in data.chunks(blocks_per_update * 64) {
            hasher.update(piece).unwrap();
        }
        prop_assert_eq!(hasher.finalize().unwrap(), tinyblake::hash(&data).unwrap());

        let blocks = data.len() / 64;
        prop_assert_eq!(
            tinyblake::hash_blocks(&data, blocks).unwrap(),
            tinyblake::hash(&data).unwrap()
        );
    }

    #[test]
    fn hash_blocks_ignores_trailing_bytes(
        data in prop::collection::vec(any::<u8>(), 0..400),
        blocks in 0usize..7
    ) {
        let result = tinyblake::hash_blocks(&data, blocks);
        if blocks * 64 <= data.len() {
            prop_assert_eq!(result.unwrap(), tinyblake::hash(&data[..blocks * 64]).unwrap());
        } else {
            prop_assert!(result.is_err());
        }
    }
}
