//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

// Used-prefix collection for a (USP, interface) pair: builds the set of
// already-assigned prefixes inside a usable prefix, plus the best
// steal/split candidates found along the way.

use std::net::Ipv4Addr;

use ipnetwork::Ipv6Network;

use super::prefix;
use super::tlv::AcLsdb;
use super::AspNode;

// A prefix already assigned to someone, inside the USP under consideration.
#[derive(Clone, Copy, Debug)]
pub(crate) struct UsedPrefix {
    pub(crate) prefix: Ipv6Network,
    pub(crate) pa_priority: u8,
    pub(crate) rid: Ipv4Addr,
}

// A candidate prefix (already assigned to a lower- or equal-priority
// router) that could be stolen or split to free up room inside a USP.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Candidate {
    pub(crate) prefix: Ipv6Network,
    pub(crate) pa_priority: u8,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct UsedSet {
    pub(crate) used: Vec<UsedPrefix>,
    pub(crate) steal: Option<Candidate>,
    pub(crate) split: Option<Candidate>,
}

// Excludes a specific (interface, prefix) assignment from consideration,
// used when re-evaluating whether a /80 we already hold could be upgraded
// to a /64 ("re-use" steps, spec §4.F).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Exclude {
    pub(crate) iface_id: u32,
    pub(crate) prefix: Ipv6Network,
}

// Collects every prefix assigned (by any router, on any interface in the
// area) that falls inside `usp`, together with the best steal/split
// candidates at `asp_d_len` (normally /64).
//
// `own_ifaces` iterates over every local interface's own assignment
// records (`(iface_id, &AspNode)`); `lsdb` supplies every other router's
// advertised IASP/ASP blocks.
pub(crate) fn collect_used<'a>(
    usp: Ipv6Network,
    our_rid: Ipv4Addr,
    our_priority: u8,
    asp_d_len: u8,
    lsdb: &AcLsdb,
    own_ifaces: impl Iterator<Item = (u32, &'a AspNode)>,
    exclude: Option<Exclude>,
) -> UsedSet {
    let mut set = UsedSet::default();
    let mut lowest_pa_priority = our_priority;

    for (rid, iasp) in lsdb.iasps(Some(our_rid)) {
        for asp in &iasp.asps {
            if !prefix::contains(usp, *asp) {
                continue;
            }
            set.used.push(UsedPrefix {
                prefix: *asp,
                pa_priority: iasp.pa_priority,
                rid,
            });

            if iasp.pa_priority < lowest_pa_priority {
                lowest_pa_priority = iasp.pa_priority;
                set.steal = Some(Candidate {
                    prefix: mask_to(*asp, asp_d_len),
                    pa_priority: iasp.pa_priority,
                });
            }

            if set.split.is_none()
                && iasp.pa_priority == our_priority
                && asp.prefix() == asp_d_len
            {
                set.split = Some(Candidate {
                    prefix: *asp,
                    pa_priority: iasp.pa_priority,
                });
            }
        }
    }

    for (iface_id, node) in own_ifaces {
        if node.rid != our_rid || !prefix::contains(usp, node.prefix) {
            continue;
        }
        if let Some(excl) = exclude {
            if excl.iface_id == iface_id && excl.prefix == node.prefix {
                continue;
            }
        }

        set.used.push(UsedPrefix {
            prefix: node.prefix,
            pa_priority: node.pa_priority,
            rid: node.rid,
        });

        if node.pa_priority < lowest_pa_priority {
            lowest_pa_priority = node.pa_priority;
            set.steal = Some(Candidate {
                prefix: mask_to(node.prefix, asp_d_len),
                pa_priority: node.pa_priority,
            });
        }

        if set.split.is_none()
            && node.pa_priority == our_priority
            && node.prefix.prefix() == asp_d_len
        {
            set.split = Some(Candidate {
                prefix: node.prefix,
                pa_priority: node.pa_priority,
            });
        }
    }

    set
}

fn mask_to(p: Ipv6Network, len: u8) -> Ipv6Network {
    Ipv6Network::new(p.network(), len).unwrap_or(p)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::super::tlv::IaspTlv;
    use super::*;

    fn px(s: &str) -> Ipv6Network {
        Ipv6Network::from_str(s).unwrap()
    }

    #[test]
    fn collects_peer_assignments_and_steal_candidate() {
        let usp = px("2001:db8::/60");
        let our_rid = Ipv4Addr::new(1, 1, 1, 1);
        let peer_rid = Ipv4Addr::new(2, 2, 2, 2);

        let mut lsdb = AcLsdb::default();
        lsdb.update_router(
            peer_rid,
            Vec::new(),
            vec![IaspTlv {
                iface_id: 1,
                pa_priority: 1,
                pa_pxlen: 64,
                asps: vec![px("2001:db8::/64")],
            }],
        );

        let set = collect_used(
            usp,
            our_rid,
            5,
            64,
            &lsdb,
            std::iter::empty(),
            None,
        );

        assert_eq!(set.used.len(), 1);
        assert!(set.steal.is_some());
        assert_eq!(set.steal.unwrap().pa_priority, 1);
    }

    #[test]
    fn split_candidate_requires_matching_priority_and_length() {
        let usp = px("2001:db8::/60");
        let our_rid = Ipv4Addr::new(1, 1, 1, 1);
        let node = AspNode {
            prefix: px("2001:db8:0:1::/64"),
            rid: our_rid,
            my_rid: our_rid,
            pa_priority: 5,
            valid: true,
        };
        let lsdb = AcLsdb::default();

        let set = collect_used(
            usp,
            our_rid,
            5,
            64,
            &lsdb,
            std::iter::once((1u32, &node)),
            None,
        );
        assert!(set.split.is_some());
        assert_eq!(set.split.unwrap().prefix, node.prefix);
    }

    #[test]
    fn exclude_skips_self_prefix() {
        let usp = px("2001:db8::/60");
        let our_rid = Ipv4Addr::new(1, 1, 1, 1);
        let node = AspNode {
            prefix: px("2001:db8:0:1::/80"),
            rid: our_rid,
            my_rid: our_rid,
            pa_priority: 5,
            valid: true,
        };
        let lsdb = AcLsdb::default();

        let set = collect_used(
            usp,
            our_rid,
            5,
            64,
            &lsdb,
            std::iter::once((1u32, &node)),
            Some(Exclude {
                iface_id: 1,
                prefix: node.prefix,
            }),
        );
        assert!(set.used.is_empty());
    }
}
