//! Random ACGT sequences and mutated copies, used to stress the aligners.
//! Not intended for real applications.
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const BASES: &[u8] = b"ACGT";

/// Per-base mutation rates for [`introduce_randomness`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Profile {
    pub sub: f64,
    pub del: f64,
    pub ins: f64,
}

pub const PROFILE: Profile = Profile {
    sub: 0.03,
    del: 0.03,
    ins: 0.03,
};

pub fn generate_seq<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len).filter_map(|_| BASES.choose(rng)).copied().collect()
}

/// A noisy copy of `seq`: each base may be substituted or dropped, and
/// random bases may be inserted in front of it.
pub fn introduce_randomness<R: Rng>(seq: &[u8], rng: &mut R, profile: &Profile) -> Vec<u8> {
    let mut res = Vec::with_capacity(seq.len() + seq.len() / 8);
    for &base in seq {
        while rng.gen_bool(profile.ins) {
            res.push(random_base(rng));
        }
        if rng.gen_bool(profile.del) {
            continue;
        }
        if rng.gen_bool(profile.sub) {
            res.push(mutate_base(rng, base));
        } else {
            res.push(base);
        }
    }
    res
}

fn random_base<R: Rng>(rng: &mut R) -> u8 {
    *BASES.choose(rng).unwrap()
}

fn mutate_base<R: Rng>(rng: &mut R, base: u8) -> u8 {
    loop {
        let picked = random_base(rng);
        if picked != base {
            return picked;
        }
    }
}
