//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

// IPv6 prefix arithmetic and pseudo-random sub-prefix derivation used by
// the prefix-assignment algorithm (draft-arkko-homenet-prefix-assignment).

use std::net::{Ipv4Addr, Ipv6Addr};

use ipnetwork::Ipv6Network;

// ===== global functions =====

// Returns true when `q` is contained in (or equal to) `p`.
pub(crate) fn contains(p: Ipv6Network, q: Ipv6Network) -> bool {
    if q.prefix() < p.prefix() {
        return false;
    }
    mask_top(addr_u128(q.ip()), p.prefix())
        == mask_top(addr_u128(p.network()), p.prefix())
}

// Returns true when `p` and `q` overlap, i.e. one contains the other.
pub(crate) fn overlaps(p: Ipv6Network, q: Ipv6Network) -> bool {
    contains(p, q) || contains(q, p)
}

// Given a prefix `p` that overlaps a blocking prefix `r`, returns the
// numerically next prefix of length `p.prefix()` that does not overlap `r`,
// or `None` if the address space is exhausted.
pub(crate) fn next_non_overlap(
    p: Ipv6Network,
    r: Ipv6Network,
) -> Option<Ipv6Network> {
    let len = p.prefix();
    let addr = addr_u128(p.ip());

    let new_addr = if p.prefix() >= r.prefix() {
        // `r` covers (or equals) `p`: skip past r's entire span.
        let rlen = r.prefix();
        if rlen == 0 {
            // `r` spans the whole address space; nothing is left.
            return None;
        }
        let step = 1u128 << (128 - u32::from(rlen));
        let bumped = addr.checked_add(step)?;
        bumped & top_mask(rlen)
    } else {
        // `p` covers `r`: advance by one unit of p's own length.
        if len == 0 {
            return None;
        }
        let step = 1u128 << (128 - u32::from(len));
        addr.checked_add(step)?
    };

    Ipv6Network::new(Ipv6Addr::from(new_addr), len).ok()
}

// Deterministic hash-based sub-prefix derivation (draft §5.2). Independent
// per router: the byte layout only needs to be stable within one router.
pub(crate) fn pseudo_random_sub(
    usp: Ipv6Network,
    len: u8,
    rid: Ipv4Addr,
    iface_name: &str,
    iteration: u32,
) -> Ipv6Network {
    let mut ctx = md5::Context::new();
    ctx.consume(iface_name.as_bytes());
    ctx.consume(u32::from(rid).to_ne_bytes());
    ctx.consume(iteration.to_ne_bytes());
    let digest: [u8; 16] = *ctx.compute();

    let raw = u128::from_be_bytes(digest);
    let value = (raw & top_mask(len) & !top_mask(usp.prefix()))
        | mask_top(addr_u128(usp.network()), usp.prefix());
    Ipv6Network::new(Ipv6Addr::from(value), len).unwrap()
}

// Finds a prefix of length `len` inside `usp` not overlapping any member of
// `used` (draft §5.2, "choose_prefix").
pub(crate) fn choose(
    usp: Ipv6Network,
    len: u8,
    used: &[Ipv6Network],
    our_rid: Ipv4Addr,
    iface_name: &str,
) -> Option<Ipv6Network> {
    let mut cand = Ipv6Network::new(usp.network(), len).unwrap();
    for i in 0..10u32 {
        cand = pseudo_random_sub(usp, len, our_rid, iface_name, i);
        if !in_use(cand, used) {
            return Some(cand);
        }
    }

    let start = cand;
    let mut looped = false;
    loop {
        if looped && addr_u128(cand.ip()) >= addr_u128(start.ip()) {
            return None;
        }

        if !contains(usp, cand) {
            cand = Ipv6Network::new(usp.network(), len).unwrap();
            looped = true;
        }

        if !in_use(cand, used) {
            return Some(cand);
        }

        let blocker = *used.iter().find(|u| overlaps(cand, **u))?;
        cand = next_non_overlap(cand, blocker)?;
    }
}

fn in_use(cand: Ipv6Network, used: &[Ipv6Network]) -> bool {
    used.iter().any(|u| overlaps(cand, *u))
}

// Derives the interface address to configure for an assigned prefix (spec
// §6's kernel configurator contract): the prefix's network bits, with the
// low 32 bits replaced by `my_rid` (the draft's "(my_rid >> 16):(my_rid &
// 0xFFFF)" host suffix, which is just `my_rid`'s value written as two
// 16-bit hex groups).
pub(crate) fn host_address(asp: Ipv6Network, my_rid: Ipv4Addr) -> Ipv6Network {
    let base = mask_top(addr_u128(asp.network()), asp.prefix());
    let host = u128::from(u32::from(my_rid));
    Ipv6Network::new(Ipv6Addr::from(base | host), asp.prefix()).unwrap()
}

fn addr_u128(addr: Ipv6Addr) -> u128 {
    u128::from(addr)
}

// Returns `addr` with its low `(128 - len)` bits zeroed.
fn mask_top(addr: u128, len: u8) -> u128 {
    addr & top_mask(len)
}

// Returns a mask with the top `len` bits set.
fn top_mask(len: u8) -> u128 {
    if len == 0 {
        0
    } else if len >= 128 {
        u128::MAX
    } else {
        !(u128::MAX >> u32::from(len))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn px(s: &str) -> Ipv6Network {
        Ipv6Network::from_str(s).unwrap()
    }

    #[test]
    fn contains_basic() {
        assert!(contains(px("2001:db8::/32"), px("2001:db8::/64")));
        assert!(contains(px("2001:db8::/32"), px("2001:db8::/32")));
        assert!(!contains(px("2001:db8::/64"), px("2001:db8::/32")));
        assert!(!contains(px("2001:db8::/32"), px("2001:db9::/64")));
    }

    #[test]
    fn overlaps_basic() {
        assert!(overlaps(px("2001:db8::/32"), px("2001:db8::/64")));
        assert!(overlaps(px("2001:db8::/64"), px("2001:db8::/32")));
        assert!(!overlaps(px("2001:db8::/64"), px("2001:db9::/64")));
    }

    #[test]
    fn next_non_overlap_blocker_covers_candidate() {
        // candidate /64 overlapped by a /60 blocker: skip past the /60.
        let cand = px("2001:db8:0:1::/64");
        let blocker = px("2001:db8::/60");
        let next = next_non_overlap(cand, blocker).unwrap();
        assert_eq!(next, px("2001:db8:0:10::/64"));
        assert!(!overlaps(next, blocker));
    }

    #[test]
    fn next_non_overlap_candidate_covers_blocker() {
        // candidate /60 overlapping (covering) a more specific /64 blocker.
        let cand = px("2001:db8::/60");
        let blocker = px("2001:db8:0:2::/64");
        let next = next_non_overlap(cand, blocker).unwrap();
        assert_eq!(next, px("2001:db8:0:10::/60"));
    }

    #[test]
    fn next_non_overlap_exhaustion() {
        let cand = px("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ff00::/120");
        let blocker = px("::/0");
        assert_eq!(next_non_overlap(cand, blocker), None);
    }

    #[test]
    fn pseudo_random_sub_is_pure() {
        let usp = px("2001:db8::/60");
        let rid = Ipv4Addr::new(10, 0, 0, 1);
        let a = pseudo_random_sub(usp, 64, rid, "eth0", 0);
        let b = pseudo_random_sub(usp, 64, rid, "eth0", 0);
        assert_eq!(a, b);
        assert!(contains(usp, a));
        assert_eq!(a.prefix(), 64);
    }

    #[test]
    fn host_address_embeds_my_rid() {
        let asp = px("2001:db8:0:1::/64");
        let rid = Ipv4Addr::new(10, 0, 0, 1);
        let addr = host_address(asp, rid);
        assert_eq!(addr.prefix(), 64);
        assert_eq!(addr_u128(addr.ip()) & 0xffff_ffff, u128::from(u32::from(rid)));
        assert!(contains(asp, Ipv6Network::new(addr.ip(), 64).unwrap()));
    }

    #[test]
    fn choose_avoids_used_prefixes() {
        let usp = px("2001:db8::/62");
        let rid = Ipv4Addr::new(10, 0, 0, 1);
        let mut used = Vec::new();
        // Exhaust three of the four /64s, forcing the linear-scan fallback
        // to eventually find the remaining free one.
        for i in 0..4u8 {
            let cand =
                pseudo_random_sub(usp, 64, rid, "eth0", u32::from(i));
            if used.len() < 3 && !used.contains(&cand) {
                used.push(cand);
            }
        }
        if let Some(chosen) = choose(usp, 64, &used, rid, "eth0") {
            assert!(contains(usp, chosen));
            assert!(!used.iter().any(|u| overlaps(chosen, *u)));
        }
    }
}
