//! Benchmarks for PVSS rounds.

#[macro_use]
extern crate criterion;

use criterion::Criterion;

use rand::rngs::OsRng;

use scrape_vss::keys::{KeyPair, PublicKey};
use scrape_vss::vss::{
    decrypt_shares, encrypted_shares_of, generate_shared_secret, recover_secret,
    verify_decrypted_share, verify_encrypted_shares, verify_secret, ReportedShares, Roster,
};
use scrape_vss::testing::Secp256k1Sha256;

type Keys = KeyPair<Secp256k1Sha256>;

const NUMBER_OF_PARTICIPANTS: usize = 10;
const THRESHOLD_OF_PARTICIPANTS: u32 = 5;

fn criterion_benchmark(c: &mut Criterion) {
    let rng = OsRng;

    let participants: Vec<Keys> = (0..NUMBER_OF_PARTICIPANTS)
        .map(|_| Keys::new(rng))
        .collect();
    let public_keys: Vec<PublicKey<Secp256k1Sha256>> =
        participants.iter().map(|p| *p.public_key()).collect();

    c.bench_function("Shared secret generation", move |b| {
        b.iter(|| generate_shared_secret(THRESHOLD_OF_PARTICIPANTS, &public_keys, rng))
    });

    let public_keys: Vec<PublicKey<Secp256k1Sha256>> =
        participants.iter().map(|p| *p.public_key()).collect();
    let (secret, proof, shares) =
        generate_shared_secret(THRESHOLD_OF_PARTICIPANTS, &public_keys, rng).unwrap();

    {
        let proof = proof.clone();
        let shares = shares.clone();
        c.bench_function("Encrypted shares verification", move |b| {
            b.iter(|| verify_encrypted_shares(&proof, THRESHOLD_OF_PARTICIPANTS, &shares, rng))
        });
    }

    let alice = &participants[0];
    let alice_encrypted = encrypted_shares_of(alice.public_key(), &shares);

    c.bench_function("Share decryption", |b| {
        b.iter(|| decrypt_shares(alice, &alice_encrypted, rng))
    });

    let alice_decrypted = decrypt_shares(alice, &alice_encrypted, rng).unwrap();

    c.bench_function("Decrypted share verification", |b| {
        b.iter(|| {
            verify_decrypted_share(
                alice.public_key(),
                &alice_encrypted[0],
                &alice_decrypted[0],
            )
        })
    });

    let roster = Roster::from_public_keys(&public_keys).unwrap();
    let mut reported = ReportedShares::new();
    for participant in participants
        .iter()
        .take(THRESHOLD_OF_PARTICIPANTS as usize)
    {
        let encrypted = encrypted_shares_of(participant.public_key(), &shares);
        let decrypted = decrypt_shares(participant, &encrypted, rng).unwrap();
        reported.insert(*participant.public_key(), decrypted);
    }

    c.bench_function("Secret recovery", |b| {
        b.iter(|| recover_secret(THRESHOLD_OF_PARTICIPANTS, &roster, &reported))
    });

    c.bench_function("Secret verification", |b| {
        b.iter(|| verify_secret(THRESHOLD_OF_PARTICIPANTS, &proof, &secret))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = criterion_benchmark);
criterion_main!(benches);
