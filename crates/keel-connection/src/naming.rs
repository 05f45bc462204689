//! Connection name generation and display labels
//!
//! Suggested names are two random words (`amber-elephant`). Uniqueness is
//! relative to a seen-set the caller passes in, typically
//! [`ConnectionStore::names`](crate::ConnectionStore::names); the generator
//! itself keeps no state, so two stores never contend over what counts as
//! taken.

use std::collections::HashSet;

use keel_core::ConnectionDescriptor;
use rand::seq::SliceRandom;
use rand::Rng;


const FALLBACK_USER: &str = "user";
const FALLBACK_HOST: &str = "localhost";

/// Random draws before switching to numbered fallback names.
const MAX_RANDOM_ATTEMPTS: usize = 32;

const ADJECTIVES: &[&str] = &[
    "amber", "bold", "brave", "bright", "calm", "clever", "crimson", "daring", "eager", "gentle",
    "golden", "happy", "jolly", "keen", "lively", "mellow", "noble", "proud", "quiet", "rapid",
    "silver", "sunny", "swift", "violet",
];

const ANIMALS: &[&str] = &[
    "badger", "beaver", "bison", "crane", "dolphin", "eagle", "elephant", "falcon", "ferret",
    "fox", "gecko", "heron", "ibis", "jaguar", "lemur", "lynx", "marmot", "otter", "panda",
    "penguin", "raven", "salmon", "turtle", "walrus",
];

/// Human-readable label for a connection, e.g. `ana@db.example.com/orders`.
///
/// Empty username and host fall back to `user` and `localhost`; an empty
/// database drops the trailing `/database` segment.
pub fn display_name(descriptor: &ConnectionDescriptor) -> String {
    let username = if descriptor.username.is_empty() {
        FALLBACK_USER
    } else {
        &descriptor.username
    };
    let host = if descriptor.host.is_empty() {
        FALLBACK_HOST
    } else {
        &descriptor.host
    };

    let mut name = format!("{username}@{host}");
    if !descriptor.database.is_empty() {
        name.push('/');
        name.push_str(&descriptor.database);
    }
    name
}

/// Suggest a name not present in `seen`.
pub fn suggest_name(seen: &HashSet<String>) -> String {
    suggest_name_with(&mut rand::thread_rng(), seen)
}

/// [`suggest_name`] with an explicit RNG, for deterministic callers.
///
/// Draws random two-word names until one is free; once the list space looks
/// exhausted, falls back to numbering (`amber-elephant-2`, `-3`, …), which
/// always terminates because `seen` is finite.
pub fn suggest_name_with<R: Rng + ?Sized>(rng: &mut R, seen: &HashSet<String>) -> String {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let candidate = two_word_name(rng);
        if !seen.contains(&candidate) {
            return candidate;
        }
    }

    let base = two_word_name(rng);
    let mut n = 2u64;
    loop {
        let candidate = format!("{base}-{n}");
        if !seen.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

fn two_word_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES.choose(rng).expect("non-empty word list");
    let animal = ANIMALS.choose(rng).expect("non-empty word list");
    format!("{adjective}-{animal}")
}
