// src/core/scanner/seed.rs

use std::fmt;

/// The integer every synthetic draw in a report is derived from.
///
/// Always in `0..=2^31`: it is the absolute value of a 32-bit signed hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(u32);

impl Seed {
    pub fn from_domain(domain: &str) -> Self {
        Seed(hash_domain(domain))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Number of vulnerabilities to report, `1..=7`.
    pub fn vulnerability_count(self) -> usize {
        (self.0 % 7) as usize + 1
    }

    /// Number of technologies to report, `3..=7`.
    pub fn technology_count(self) -> usize {
        3 + (self.0 % 5) as usize
    }

    /// Number of open ports to report, `2..=5`.
    pub fn port_count(self) -> usize {
        2 + (self.0 % 4) as usize
    }

    /// The constant the catalog comparator returns, `-6..=6`.
    pub fn ordering_bias(self) -> i32 {
        (self.0 % 13) as i32 - 6
    }

    /// `seed * factor mod modulus`, computed without 32-bit overflow.
    pub fn scaled(self, factor: u64, modulus: u64) -> usize {
        ((self.0 as u64 * factor) % modulus) as usize
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hashes a hostname to a stable non-negative 32-bit integer.
///
/// `acc = acc * 31 + c` over UTF-16 code units with 32-bit signed wraparound,
/// then the absolute value. `i32::MIN` maps to `2^31`, which is why the result is `u32`.
pub fn hash_domain(domain: &str) -> u32 {
    let acc = domain
        .encode_utf16()
        .fold(0i32, |acc, unit| {
            acc.wrapping_shl(5).wrapping_sub(acc).wrapping_add(unit as i32)
        });
    acc.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(hash_domain(""), 0);
        let seed = Seed::from_domain("");
        assert_eq!(seed.vulnerability_count(), 1);
        assert_eq!(seed.port_count(), 2);
        assert_eq!(seed.technology_count(), 3);
        assert_eq!(seed.ordering_bias(), -6);
    }

    #[test]
    fn golden_hashes() {
        assert_eq!(hash_domain("a"), 97);
        assert_eq!(hash_domain("example.com"), 1_944_013_059);
        assert_eq!(hash_domain("www.example.com"), 1_878_290_138);
        assert_eq!(hash_domain("google.com"), 1_536_293_812);
        assert_eq!(hash_domain("localhost"), 1_204_607_085);
    }

    #[test]
    fn derived_draws_for_example_com() {
        let seed = Seed::from_domain("example.com");
        assert_eq!(seed.vulnerability_count(), 3);
        assert_eq!(seed.technology_count(), 7);
        assert_eq!(seed.port_count(), 5);
        assert_eq!(seed.ordering_bias(), -5);
    }

    #[test]
    fn largest_seed_stays_in_range() {
        let seed = Seed(1 << 31);
        assert!(seed.vulnerability_count() <= 7);
        assert_eq!(seed.scaled(7, 28), ((1u64 << 31) * 7 % 28) as usize);
    }

    #[test]
    fn non_ascii_hosts_hash_by_utf16_units() {
        // 'é' is a single UTF-16 unit (0xE9), so it hashes like a one-char string.
        assert_eq!(hash_domain("é"), 0xE9);
        // Astral characters contribute two surrogate units.
        let expected = (0xD83Di32 * 31 + 0xDE00) as u32;
        assert_eq!(hash_domain("\u{1F600}"), expected);
    }
}
