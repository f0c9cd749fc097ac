//! Hash functions and table sizes.

/// Table sizes, each roughly double the previous one.
pub const PRIME_LADDER: [usize; 12] = [
    11, 23, 53, 107, 211, 421, 853, 1699, 3209, 6553, 12409, 25229,
];

/// DJB2: `hash * 33 + byte`, seeded with 5381.
pub(crate) fn djb2(name: &str) -> u64 {
    name.bytes().fold(5381u64, |hash, b| {
        hash.wrapping_mul(33).wrapping_add(u64::from(b))
    })
}

/// SDBM: `hash * 65599 + byte`.
pub(crate) fn sdbm(name: &str) -> u64 {
    name.bytes().fold(0u64, |hash, b| {
        hash.wrapping_mul(65599).wrapping_add(u64::from(b))
    })
}

/// Home slot of `name` in a table of `size` slots.
pub(crate) fn primary_index(name: &str, size: usize) -> usize {
    reduce(djb2(name), size)
}

/// Probe step for `name`, in `1..size`.
///
/// Every nonzero step is coprime with a prime `size`, so the probe
/// sequence visits every slot.
pub(crate) fn probe_step(name: &str, size: usize) -> usize {
    if size <= 1 {
        return 1;
    }
    1 + reduce(sdbm(name), size - 1)
}

fn reduce(hash: u64, size: usize) -> usize {
    let size = size as u64;
    usize::try_from(hash % size).unwrap_or(0)
}

/// Smallest ladder prime `>= hint`, or the next prime past the ladder.
pub(crate) fn capacity_for(hint: usize) -> usize {
    PRIME_LADDER
        .into_iter()
        .find(|&p| p >= hint)
        .unwrap_or_else(|| next_prime_from(hint))
}

/// Size to grow to from `size`: the next ladder prime strictly greater,
/// then primes near double the size once the ladder runs out.
pub fn next_capacity(size: usize) -> usize {
    PRIME_LADDER
        .into_iter()
        .find(|&p| p > size)
        .unwrap_or_else(|| next_prime_from(size.saturating_mul(2)))
}

fn next_prime_from(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
