//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

// Distributed prefix-assignment core
// (draft-arkko-homenet-prefix-assignment, "AC" = Auto-Configuration).
//
// This module owns the shared data model (the ASP-node, USP, and the
// per-{interface,neighbor,area} caches the rest of the submodules read and
// write) and the mark-and-sweep control flow around `run_assignment`,
// which is the single entry point the surrounding daemon invokes whenever
// the AC-LSDB, the local interface set, or the neighbor states change.
//
// Sibling modules implement one component each: `prefix` (A, D),
// `tlv` (B), `collect` (C), `resolve` (E), `execute` (F), `dhcp` (H).

pub mod collect;
pub mod dhcp;
pub mod error;
pub mod execute;
pub mod prefix;
pub mod resolve;
pub mod tlv;

use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use ipnetwork::Ipv6Network;

use self::execute::{AreaAsps, ExecCtx, KernelSink};
use self::resolve::{resolve, NeighborAcView};
use self::tlv::AcLsdb;
use crate::debug::Debug;

// ===== data model (spec §3) =====

// An assignment record (ASP-node), held per interface. `rid` is the
// router that owns the assignment for tie-breaking purposes (ours or a
// peer's); `my_rid` is always our own router-id, used to derive the host
// bits of the address we configure locally for this prefix (spec §6).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspNode {
    pub prefix: Ipv6Network,
    pub rid: Ipv4Addr,
    pub my_rid: Ipv4Addr,
    pub pa_priority: u8,
    pub valid: bool,
}

// Where a Usable Prefix came from (spec §3; `update_dhcpv6_usable_prefix`'s
// `OSPF_USP_T_AC` / `OSPF_USP_T_DHCPV6` origin tag).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UspOrigin {
    Ac { router_id: Ipv4Addr },
    Dhcpv6Pd,
}

// A Usable Prefix known in an area.
#[derive(Clone, Copy, Debug)]
pub struct Usp {
    pub prefix: Ipv6Network,
    pub origin: UspOrigin,
}

// Per-interface prefix-assignment state (`Interface::state.ac`).
#[derive(Clone, Debug, Default)]
pub struct AcIfaceState {
    pub asp_list: Vec<AspNode>,
}

// Per-neighbor cached prefix-assignment fields (`Neighbor::ac`), read from
// the neighbor's advertised IASP (spec §3's "Neighbor snapshot").
#[derive(Clone, Copy, Debug, Default)]
pub struct AcNeighborState {
    pub pa_priority: Option<u8>,
    pub pa_pxlen: Option<u8>,
}

// Per-area prefix-assignment state: the Usable Prefix set and the parsed,
// read-only AC-LSDB view (`ospfv3::area::AreaState::ac`).
#[derive(Clone, Debug, Default)]
pub struct AcAreaState {
    pub usps: Vec<Usp>,
    pub lsdb: AcLsdb,
}

// One local interface's inputs to a `run_assignment` pass: its identity,
// configured priority, and the neighbor snapshots the resolver consults.
// Built by the caller from the live `Interface<V>`/`Neighbor<V>`
// collections; this module only consumes the narrow read-only view.
pub struct IfaceInput<'a> {
    pub iface_id: u32,
    pub iface_name: &'a str,
    pub pa_priority: u8,
    pub neighbors: &'a [NeighborAcView],
}

// ===== control flow (component G) =====

// Runs the prefix-assignment algorithm for one area: marks every local
// assignment tentative, processes every (USP, interface) pair, sweeps
// stale assignments, and reports whether anything we own changed (the
// caller should `schedule_reorigination` when this returns `true`, per
// spec §2 step 4).
pub fn run_assignment(
    our_rid: Ipv4Addr,
    asp_d_len: u8,
    asp_s_len: u8,
    usps: &[Usp],
    lsdb: &AcLsdb,
    ifaces: &[IfaceInput],
    asps: &mut AreaAsps,
    sink: &mut impl KernelSink,
) -> bool {
    mark_tentative(asps);

    let iface_names: BTreeMap<u32, String> = ifaces
        .iter()
        .map(|i| (i.iface_id, i.iface_name.to_string()))
        .collect();

    let mut changed = false;

    for usp in usps {
        // Step E.1: a more specific USP nested inside this one shadows
        // it; that USP is handled on its own when it is processed.
        if shadowed_by_more_specific_usp(usp, usps) {
            continue;
        }

        for iface in ifaces {
            let have_own_assignment = asps
                .get(&iface.iface_id)
                .map(|list| {
                    list.iter().any(|n| {
                        n.rid == our_rid && prefix::contains(usp.prefix, n.prefix)
                    })
                })
                .unwrap_or(false);

            let resolution = resolve(
                usp.prefix,
                iface.iface_id,
                our_rid,
                iface.pa_priority,
                iface.neighbors,
                lsdb,
                have_own_assignment,
            );

            let ctx = ExecCtx {
                usp: usp.prefix,
                iface_id: iface.iface_id,
                iface_name: iface.iface_name,
                our_rid,
                our_priority: iface.pa_priority,
                asp_d_len,
                asp_s_len,
                iface_names: &iface_names,
            };

            if execute::execute(&ctx, lsdb, &resolution, asps, sink) {
                changed = true;
            }

            revalidate(asps, iface.iface_id, usp.prefix);
        }
    }

    if sweep(asps, &iface_names, our_rid, sink) {
        changed = true;
    }

    changed
}

fn mark_tentative(asps: &mut AreaAsps) {
    for list in asps.values_mut() {
        for node in list.iter_mut() {
            node.valid = false;
        }
    }
}

// Any record still in place for `usp` on `iface_id` after processing that
// pair survives this run (spec §4.G: "mark self_r.valid <- true if still
// present", generalized to every record this run touched).
fn revalidate(asps: &mut AreaAsps, iface_id: u32, usp: Ipv6Network) {
    if let Some(list) = asps.get_mut(&iface_id) {
        for node in list.iter_mut() {
            if prefix::contains(usp, node.prefix) {
                node.valid = true;
            }
        }
    }
}

// True when some other known USP is strictly nested inside `usp` (spec
// §4.E.1, worked through in spec §8 scenario 6: processing the /48
// aborts because a /64 carved from it is also advertised).
fn shadowed_by_more_specific_usp(usp: &Usp, usps: &[Usp]) -> bool {
    usps.iter().any(|other| {
        other.prefix != usp.prefix && prefix::contains(usp.prefix, other.prefix)
    })
}

// Mark-and-sweep: removes every record not revalidated this run, deleting
// its kernel address first (spec §4.G).
fn sweep(
    asps: &mut AreaAsps,
    iface_names: &BTreeMap<u32, String>,
    our_rid: Ipv4Addr,
    sink: &mut impl KernelSink,
) -> bool {
    let mut changed = false;
    for (iface_id, list) in asps.iter_mut() {
        let name = iface_names
            .get(iface_id)
            .map(String::as_str)
            .unwrap_or("");
        list.retain(|node| {
            if node.valid {
                return true;
            }
            let addr = prefix::host_address(node.prefix, node.my_rid);
            Debug::<crate::version::Ospfv3>::AcAssignRemove(name, &addr).log();
            sink.remove(name, addr);
            if node.rid == our_rid {
                changed = true;
            }
            false
        });
    }
    changed
}

// ===== supplemented feature: live priority reconfiguration =====

// When an interface's configured `pa_priority` changes, updates every
// local record's cached priority in place rather than waiting for the
// next run to delete and recreate it (SPEC_FULL.md §5,
// `ospf_pxassign_reconfigure_iface`).
pub fn reconfigure_interface(
    iface: &mut AcIfaceState,
    our_rid: Ipv4Addr,
    new_priority: u8,
) {
    for node in iface.asp_list.iter_mut().filter(|n| n.rid == our_rid) {
        node.pa_priority = new_priority;
    }
}

// ===== AC-LSA scheduler (§6 external interface) =====

// Requests re-origination of the local router's AC-LSA for an area, the
// way `sr.rs`/`gr.rs` request LSA refresh through the existing
// originate-event queue. This core does not hook directly into that
// queue (the AC-LSA body is not yet registered with the flooding engine,
// see `ac::tlv`'s module note); a daemon wiring this module in calls
// `schedule` once `run_assignment` reports a change.
pub trait AcLsaScheduler {
    fn schedule(&mut self, area_id: Ipv4Addr);
}

pub fn schedule_reorigination(
    area_id: Ipv4Addr,
    scheduler: &mut impl AcLsaScheduler,
) {
    scheduler.schedule(area_id);
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[derive(Default)]
    struct FakeSink {
        installed: Vec<(String, Ipv6Network)>,
        removed: Vec<(String, Ipv6Network)>,
    }

    impl KernelSink for FakeSink {
        fn install(&mut self, iface_name: &str, prefix: Ipv6Network) {
            self.installed.push((iface_name.to_string(), prefix));
        }
        fn remove(&mut self, iface_name: &str, prefix: Ipv6Network) {
            self.removed.push((iface_name.to_string(), prefix));
        }
    }

    fn px(s: &str) -> Ipv6Network {
        Ipv6Network::from_str(s).unwrap()
    }

    // Scenario 1 (spec §8): solo router, one interface. A single run
    // installs one /64; a second run with unchanged inputs is a no-op.
    #[test]
    fn solo_router_converges_and_is_idempotent() {
        let our_rid = Ipv4Addr::new(1, 1, 1, 1);
        let usps = vec![Usp {
            prefix: px("2001:db8::/60"),
            origin: UspOrigin::Ac { router_id: our_rid },
        }];
        let lsdb = AcLsdb::default();
        let ifaces = vec![IfaceInput {
            iface_id: 1,
            iface_name: "eth0",
            pa_priority: 1,
            neighbors: &[],
        }];
        let mut asps = AreaAsps::new();
        let mut sink = FakeSink::default();

        let changed =
            run_assignment(our_rid, 64, 80, &usps, &lsdb, &ifaces, &mut asps, &mut sink);
        assert!(changed);
        assert_eq!(sink.installed.len(), 1);
        assert_eq!(asps.get(&1).unwrap().len(), 1);
        assert_eq!(asps[&1][0].rid, our_rid);

        // Second run, same inputs: no kernel I/O, no reported change.
        sink.installed.clear();
        sink.removed.clear();
        let changed =
            run_assignment(our_rid, 64, 80, &usps, &lsdb, &ifaces, &mut asps, &mut sink);
        assert!(!changed);
        assert!(sink.installed.is_empty());
        assert!(sink.removed.is_empty());
    }

    // Scenario 6 (spec §8): a more specific USP shadows a covering one.
    #[test]
    fn nested_usp_is_skipped_in_favor_of_the_specific_one() {
        let our_rid = Ipv4Addr::new(1, 1, 1, 1);
        let usps = vec![
            Usp {
                prefix: px("2001:db8::/48"),
                origin: UspOrigin::Ac { router_id: our_rid },
            },
            Usp {
                prefix: px("2001:db8:0:1::/64"),
                origin: UspOrigin::Ac { router_id: our_rid },
            },
        ];
        let lsdb = AcLsdb::default();
        let ifaces = vec![IfaceInput {
            iface_id: 1,
            iface_name: "eth0",
            pa_priority: 1,
            neighbors: &[],
        }];
        let mut asps = AreaAsps::new();
        let mut sink = FakeSink::default();

        run_assignment(our_rid, 64, 80, &usps, &lsdb, &ifaces, &mut asps, &mut sink);
        // Exactly one assignment results, carved from the /64 USP.
        assert_eq!(asps.get(&1).unwrap().len(), 1);
        assert!(prefix::contains(
            px("2001:db8:0:1::/64"),
            asps[&1][0].prefix
        ));
    }

    // Sweep: once a USP disappears, its assignment is garbage-collected
    // on the next run even with no other input change.
    #[test]
    fn sweep_removes_assignment_for_vanished_usp() {
        let our_rid = Ipv4Addr::new(1, 1, 1, 1);
        let usps = vec![Usp {
            prefix: px("2001:db8::/60"),
            origin: UspOrigin::Ac { router_id: our_rid },
        }];
        let lsdb = AcLsdb::default();
        let ifaces = vec![IfaceInput {
            iface_id: 1,
            iface_name: "eth0",
            pa_priority: 1,
            neighbors: &[],
        }];
        let mut asps = AreaAsps::new();
        let mut sink = FakeSink::default();
        run_assignment(our_rid, 64, 80, &usps, &lsdb, &ifaces, &mut asps, &mut sink);
        assert_eq!(asps.get(&1).unwrap().len(), 1);

        let changed = run_assignment(
            our_rid,
            64,
            80,
            &[],
            &lsdb,
            &ifaces,
            &mut asps,
            &mut sink,
        );
        assert!(changed);
        assert!(asps.get(&1).unwrap().is_empty());
        assert_eq!(sink.removed.len(), 1);
    }

    #[test]
    fn reconfigure_updates_own_records_priority() {
        let our_rid = Ipv4Addr::new(1, 1, 1, 1);
        let mut iface = AcIfaceState {
            asp_list: vec![AspNode {
                prefix: px("2001:db8::/64"),
                rid: our_rid,
                my_rid: our_rid,
                pa_priority: 1,
                valid: true,
            }],
        };
        reconfigure_interface(&mut iface, our_rid, 5);
        assert_eq!(iface.asp_list[0].pa_priority, 5);
    }
}
