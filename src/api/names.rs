//! Diagnostic name generation.
//!
//! Purely cosmetic: the name shows up in logs and nowhere else, so any
//! unique-enough scheme works.

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "amber", "brisk", "calm", "dusty", "eager", "faint", "grand", "hazy", "keen", "lucid",
    "mellow", "noble", "quiet", "rapid", "sturdy", "vivid",
];

const NOUNS: &[&str] = &[
    "badger", "cedar", "dune", "ember", "fjord", "grove", "harbor", "isle", "juniper", "knoll",
    "lagoon", "meadow", "otter", "prairie", "reef", "summit",
];

/// A random `adjective-noun-xxxx` name.
pub fn random_name() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    format!("{}-{}-{:04x}", adjective, noun, rng.gen::<u16>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_shape() {
        let name = random_name();
        let parts: Vec<_> = name.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(ADJECTIVES.contains(&parts[0]));
        assert!(NOUNS.contains(&parts[1]));
        assert_eq!(parts[2].len(), 4);
    }
}
