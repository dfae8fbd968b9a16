//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

// Responsibility resolution for a (USP, interface) pair: who, if anyone,
// is already responsible for assigning a prefix out of this USP on this
// link, and are we the one who should act.

use std::net::Ipv4Addr;

use ipnetwork::Ipv6Network;

use super::prefix;
use super::tlv::AcLsdb;

// A neighbor's prefix-assignment-relevant state, as cached on the
// `Neighbor<V>` by the responsibility resolver (`.ac`, spec §3).
#[derive(Clone, Copy, Debug)]
pub(crate) struct NeighborAcView {
    pub(crate) rid: Ipv4Addr,
    pub(crate) iface_id: u32,
    pub(crate) active: bool,
    pub(crate) pa_priority: Option<u8>,
}

// A peer's assignment discovered to apply to this link's USP.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PeerAssignment {
    pub(crate) rid: Ipv4Addr,
    pub(crate) prefix: Ipv6Network,
    pub(crate) priority: u8,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Resolution {
    pub(crate) highest_priority: u8,
    pub(crate) have_highest_priority: bool,
    pub(crate) have_highest_rid: bool,
    pub(crate) peer_assignment: Option<PeerAssignment>,
    pub(crate) have_own_response: bool,
}

impl Resolution {
    // Corresponds to the C reference's step 5.3.3 early exit: nothing on
    // this (usp, interface) pair concerns us.
    pub(crate) fn nothing_to_do(&self) -> bool {
        (!self.have_highest_priority
            || (!self.have_own_response && !self.have_highest_rid))
            && self.peer_assignment.is_none()
    }

    pub(crate) fn keep_own(&self) -> bool {
        self.have_highest_priority && self.have_own_response
    }

    pub(crate) fn accept_peer(&self) -> bool {
        (!self.have_own_response || !self.have_highest_priority)
            && self.peer_assignment.is_some()
    }

    pub(crate) fn must_allocate(&self, deassigned: bool) -> bool {
        deassigned
            || (self.have_highest_priority
                && self.have_highest_rid
                && !self.have_own_response
                && self.peer_assignment.is_none())
    }
}

// Computes responsibility for `usp` on this interface (spec §4.E, steps
// 5.3.0-5.3.2 in the reference).
pub(crate) fn resolve(
    usp: Ipv6Network,
    iface_id: u32,
    our_rid: Ipv4Addr,
    our_priority: u8,
    neighbors: &[NeighborAcView],
    lsdb: &AcLsdb,
    have_own_assignment: bool,
) -> Resolution {
    // 5.3.1/5.3.2a: highest pa_priority seen active on this link.
    let mut highest_priority = 0u8;
    for nbr in neighbors.iter().filter(|n| n.active) {
        if let Some(p) = nbr.pa_priority {
            if p > highest_priority {
                highest_priority = p;
            }
        }
    }
    let have_highest_priority = highest_priority <= our_priority;
    let highest_priority = if have_highest_priority {
        our_priority
    } else {
        highest_priority
    };

    // 5.3.2b: is any active neighbor with the same priority numerically
    // ranked above us?
    let have_highest_rid = !neighbors
        .iter()
        .any(|n| n.active && n.pa_priority == Some(our_priority) && n.rid > our_rid);

    // 5.3.2c: among active neighbors at the highest priority, the one
    // with the highest router ID whose advertised IASP contains a prefix
    // inside `usp` is the peer assignment we must react to.
    let mut peer_assignment = None;
    let mut best_rid = 0u32;
    for nbr in neighbors
        .iter()
        .filter(|n| n.active && n.pa_priority == Some(highest_priority))
    {
        if u32::from(nbr.rid) <= best_rid {
            continue;
        }
        let Some(iasp) = lsdb.iasp_for(nbr.rid, nbr.iface_id) else {
            continue;
        };
        if let Some(asp) = iasp.asps.iter().find(|a| prefix::contains(usp, **a)) {
            best_rid = u32::from(nbr.rid);
            peer_assignment = Some(PeerAssignment {
                rid: nbr.rid,
                prefix: *asp,
                priority: highest_priority,
            });
        }
    }

    // 5.3.2d: do we already hold the responsibility response for this usp?
    let have_own_response = our_priority == highest_priority
        && peer_assignment
            .map(|p| u32::from(our_rid) > u32::from(p.rid))
            .unwrap_or(true)
        && have_own_assignment;

    Resolution {
        highest_priority,
        have_highest_priority,
        have_highest_rid,
        peer_assignment,
        have_own_response,
    }
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
    fn alone_on_link_we_are_responsible() {
        let usp = px("2001:db8::/60");
        let our_rid = Ipv4Addr::new(3, 3, 3, 3);
        let lsdb = AcLsdb::default();
        let res = resolve(usp, 1, our_rid, 5, &[], &lsdb, false);
        assert!(res.have_highest_priority);
        assert!(res.have_highest_rid);
        assert!(res.peer_assignment.is_none());
        assert!(res.must_allocate(false));
    }

    #[test]
    fn higher_priority_neighbor_defers_to_peer() {
        let usp = px("2001:db8::/60");
        let our_rid = Ipv4Addr::new(3, 3, 3, 3);
        let peer_rid = Ipv4Addr::new(9, 9, 9, 9);

        let mut lsdb = AcLsdb::default();
        lsdb.update_router(
            peer_rid,
            Vec::new(),
            vec![IaspTlv {
                iface_id: 2,
                pa_priority: 9,
                pa_pxlen: 64,
                asps: vec![px("2001:db8::/64")],
            }],
        );

        let neighbors = [NeighborAcView {
            rid: peer_rid,
            iface_id: 2,
            active: true,
            pa_priority: Some(9),
        }];

        let res = resolve(usp, 1, our_rid, 5, &neighbors, &lsdb, false);
        assert!(!res.have_highest_priority);
        assert!(res.accept_peer());
        assert_eq!(res.peer_assignment.unwrap().rid, peer_rid);
    }
}
