//! Property-based tests for the chaining layer and round transforms.

use aes_chain::{decrypt, encrypt, ChainSession, Error, DEFAULT_IV};
use aes_core::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use aes_core::{expand_key, Aes128Key, State};
use proptest::prelude::*;

fn blocks(min: usize, max: usize) -> impl Strategy<Value = Vec<[u8; 16]>> {
    prop::collection::vec(any::<[u8; 16]>(), min..=max)
}

proptest! {
    #[test]
    fn single_block_round_trip(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        block in any::<[u8; 16]>()
    ) {
        let ct = encrypt(&key, &iv, [block]).unwrap();
        let pt = decrypt(&key, &iv, &ct).unwrap();
        prop_assert_eq!(pt, vec![block]);
    }

    #[test]
    fn chained_round_trip(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in blocks(3, 16)
    ) {
        let ct = encrypt(&key, &iv, &data).unwrap();
        prop_assert_eq!(ct.len(), data.len());
        let pt = decrypt(&key, &iv, &ct).unwrap();
        prop_assert_eq!(pt, data);
    }

    #[test]
    fn decryption_of_a_suffix_only_needs_the_previous_ciphertext(
        key in any::<[u8; 16]>(),
        data in blocks(2, 8),
        split in 1usize..8
    ) {
        let split = split.min(data.len() - 1);
        let ct = encrypt(&key, &DEFAULT_IV, &data).unwrap();
        let tail = decrypt(&key, &ct[split - 1], &ct[split..]).unwrap();
        prop_assert_eq!(&tail[..], &data[split..]);
    }

    #[test]
    fn round_transforms_invert(state in any::<[u8; 16]>(), key in any::<[u8; 16]>()) {
        let original = State::from_block(state);
        let round_key = State::from_block(key);

        let mut s = original;
        add_round_key(&mut s, &round_key);
        add_round_key(&mut s, &round_key);
        prop_assert_eq!(s, original);

        sub_bytes(&mut s);
        inv_sub_bytes(&mut s);
        prop_assert_eq!(s, original);

        shift_rows(&mut s);
        inv_shift_rows(&mut s);
        prop_assert_eq!(s, original);

        mix_columns(&mut s);
        inv_mix_columns(&mut s);
        prop_assert_eq!(s, original);
    }

    #[test]
    fn key_schedule_is_deterministic(key in any::<[u8; 16]>()) {
        let key = Aes128Key::from(key);
        let first = expand_key(&key);
        prop_assert_eq!(first, expand_key(&key));
        prop_assert_eq!(first.get(0).to_block(), key.0);
    }

    #[test]
    fn invalid_block_lengths_are_rejected(
        key in any::<[u8; 16]>(),
        len in (0usize..48).prop_filter("not a full block", |l| *l != 16)
    ) {
        let mut session = ChainSession::encryptor(&key, &DEFAULT_IV).unwrap();
        let before = session.chain_value();
        let result = session.process_block(&vec![0u8; len]);
        prop_assert_eq!(result, Err(Error::InvalidBlockLength { index: 0, got: len }));
        prop_assert_eq!(session.chain_value(), before);
    }
}
