use hex::encode as hex_encode;
use rand::seq::SliceRandom;
use rand::RngCore;

const ADJECTIVES: [&str; 16] = [
    "agile", "bold", "brisk", "calm", "clever", "eager", "gentle", "keen", "lively", "mellow",
    "nimble", "quiet", "rapid", "steady", "sturdy", "vivid",
];

const NOUNS: [&str; 16] = [
    "anchor", "beacon", "compass", "falcon", "glacier", "harbor", "heron", "lantern", "meadow",
    "orbit", "osprey", "pine", "quarry", "ridge", "summit", "tundra",
];

/// Produces candidate cluster names on demand. Stateless from the
/// caller's perspective; two calls are independent draws.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterNameGenerator;

impl ClusterNameGenerator {
    pub fn new() -> Self {
        ClusterNameGenerator
    }

    pub fn generate_name(&self) -> String {
        let mut rng = rand::thread_rng();
        let adjective = ADJECTIVES.choose(&mut rng).unwrap_or(&ADJECTIVES[0]);
        let noun = NOUNS.choose(&mut rng).unwrap_or(&NOUNS[0]);
        let mut suffix = [0u8; 2];
        rng.fill_bytes(&mut suffix);
        format!("{}-{}-{}", adjective, noun, hex_encode(suffix))
    }
}
