use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(debug_assertions)]
pub fn make_rng() -> StdRng {
    const SEED: u64 = 63;
    StdRng::seed_from_u64(SEED)
}

#[cfg(not(debug_assertions))]
pub fn make_rng() -> StdRng {
    use rand::rngs::OsRng;
    use rand::TryRngCore;

    let seed = OsRng.try_next_u64().unwrap_or(63);
    StdRng::seed_from_u64(seed)
}
