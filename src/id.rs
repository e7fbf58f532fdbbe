// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Opaque identifier generation for pins and trips.

use ring::rand::{SecureRandom, SystemRandom};

const ID_BYTES: usize = 12;

/// Generate a fresh id of the form `<prefix>-<24 hex chars>`.
///
/// `taken` is consulted so the id is unique within the current collection.
pub fn new_id(
    rng: &SystemRandom,
    prefix: &str,
    taken: impl Fn(&str) -> bool,
) -> anyhow::Result<String> {
    loop {
        let mut bytes = [0u8; ID_BYTES];
        rng.fill(&mut bytes)
            .map_err(|_| anyhow::anyhow!("System random source unavailable"))?;
        let id = format!("{}-{}", prefix, hex::encode(bytes));
        if !taken(&id) {
            return Ok(id);
        }
        tracing::debug!(id = %id, "Generated id already taken, retrying");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_shape() {
        let rng = SystemRandom::new();
        let id = new_id(&rng, "pin", |_| false).unwrap();
        assert!(id.starts_with("pin-"));
        assert_eq!(id.len(), "pin-".len() + ID_BYTES * 2);
    }

    #[test]
    fn test_id_retries_when_taken() {
        let rng = SystemRandom::new();
        let calls = std::cell::Cell::new(0);
        let id = new_id(&rng, "trip", |_| {
            calls.set(calls.get() + 1);
            calls.get() < 3
        })
        .unwrap();
        assert!(id.starts_with("trip-"));
        assert_eq!(calls.get(), 3);
    }
}
