/// Stable identity of a node in the hit-test tree.
///
/// Built by FNV-1a hashing a namespace plus numeric parts instead of a `std`
/// hasher, whose output is not guaranteed stable across Rust versions; node
/// ids must compare equal across frames for hover/capture tracking to work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub u64);

const FNV_OFFSET_BASIS_64: u64 = 0xcbf29ce484222325;
const FNV_PRIME_64: u64 = 0x100000001b3;

fn fnv1a64(mut h: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(FNV_PRIME_64);
    }
    h
}

impl Id {
    pub const fn raw(v: u64) -> Self {
        Self(v)
    }

    /// Hash a namespace string and a sequence of numeric parts into an id.
    /// A separator byte goes between components so adjacent parts cannot
    /// collide by concatenation.
    pub fn of(ns: &'static str, parts: &[u64]) -> Self {
        let mut h = fnv1a64(FNV_OFFSET_BASIS_64, ns.as_bytes());
        h = fnv1a64(h, &[0xff]);
        for part in parts {
            h = fnv1a64(h, &part.to_le_bytes());
            h = fnv1a64(h, &[0xff]);
        }
        Self(h)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/id.rs"]
mod tests;
