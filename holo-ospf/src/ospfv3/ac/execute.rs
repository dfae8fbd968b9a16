//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

// Assignment executor: the three branches described by spec §4.F
// (keep-own, accept-peer, allocate), and steps a-h of the allocate
// branch. Grounded on the reference's steps 5.3.4-5.3.6
// (`ospf_pxassign_usp_ifa`, `try_steal`, `try_split`,
// `try_assign_unused`).

use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use ipnetwork::Ipv6Network;

use super::collect::{collect_used, Exclude, UsedSet};
use super::prefix;
use super::resolve::{PeerAssignment, Resolution};
use super::tlv::AcLsdb;
use super::AspNode;
use crate::debug::Debug;

// Sink for the kernel-facing side effects of an assignment decision.
// A real instance forwards to `IbusChannelsTx::interface_ip_add/del`
// (already implemented end-to-end by `holo-interface`); tests use a
// fake that just records calls.
pub(crate) trait KernelSink {
    fn install(&mut self, iface_name: &str, prefix: Ipv6Network);
    fn remove(&mut self, iface_name: &str, prefix: Ipv6Network);
}

pub(crate) struct ExecCtx<'a> {
    pub(crate) usp: Ipv6Network,
    pub(crate) iface_id: u32,
    pub(crate) iface_name: &'a str,
    pub(crate) our_rid: Ipv4Addr,
    pub(crate) our_priority: u8,
    pub(crate) asp_d_len: u8,
    pub(crate) asp_s_len: u8,
    // Names of every interface in the area, keyed by interface ID, so
    // that stealing/accepting can remove a colliding assignment from an
    // interface other than the one currently being evaluated.
    pub(crate) iface_names: &'a BTreeMap<u32, String>,
}

impl ExecCtx<'_> {
    fn name_of(&self, iface_id: u32) -> &str {
        if iface_id == self.iface_id {
            self.iface_name
        } else {
            self.iface_names
                .get(&iface_id)
                .map(String::as_str)
                .unwrap_or(self.iface_name)
        }
    }
}

// Per-area assignment records, keyed by interface ID, shared across the
// whole allocate/steal/split decision (stealing and splitting can evict
// assignments that live on a different interface than the one being
// evaluated).
pub(crate) type AreaAsps = BTreeMap<u32, Vec<AspNode>>;

// Runs the executor for one (usp, interface) pair and reports whether
// anything we own changed (the return value the reference calls
// `change`, consumed by the scheduler to decide whether to re-originate
// our AC-LSA).
pub(crate) fn execute(
    ctx: &ExecCtx,
    lsdb: &AcLsdb,
    resolution: &Resolution,
    asps: &mut AreaAsps,
    sink: &mut impl KernelSink,
) -> bool {
    let mut change = false;

    if resolution.nothing_to_do() {
        return false;
    }

    let own_idx = asps
        .get(&ctx.iface_id)
        .and_then(|list| {
            list.iter().position(|n| {
                n.rid == ctx.our_rid && prefix::contains(ctx.usp, n.prefix)
            })
        });

    let mut deassigned = false;

    // ===== branch: keep-own (5.3.4) =====
    if resolution.keep_own() {
        if let Some(idx) = own_idx {
            let own = asps[&ctx.iface_id][idx];
            let collides = collides_with_own(lsdb, asps, ctx, own);
            if collides {
                remove_own(ctx, asps, sink, own);
                deassigned = true;
                change = true;
            } else if own.prefix.prefix() == ctx.asp_s_len {
                // We hold a /80 but could upgrade to a /64; re-run the
                // later allocate steps with our own /80 excluded from
                // consideration (reference's "re-use 5.3.6a-d").
                try_upgrade_to_d(ctx, lsdb, asps, sink, own, &mut change);
            }
        }
    }

    // ===== branch: accept-peer (5.3.5) =====
    if resolution.accept_peer() {
        if let Some(peer) = resolution.peer_assignment {
            accept_peer(ctx, asps, sink, peer, &mut change);
        }
    }

    // ===== branch: allocate (5.3.6) =====
    if resolution.must_allocate(deassigned) {
        allocate(ctx, lsdb, asps, sink, &mut change);
    }

    change
}

// Whether our own assignment `own` is invalidated by some other router's
// (or our own other interfaces') conflicting assignment.
fn collides_with_own(
    lsdb: &AcLsdb,
    asps: &AreaAsps,
    ctx: &ExecCtx,
    own: AspNode,
) -> bool {
    for (rid, iasp) in lsdb.iasps(Some(ctx.our_rid)) {
        if iasp.pa_priority < ctx.our_priority {
            continue;
        }
        for asp in &iasp.asps {
            let overlap = prefix::overlaps(*asp, own.prefix);
            if !overlap {
                continue;
            }
            let same = *asp == own.prefix;
            if iasp.pa_priority == ctx.our_priority
                && !same
                && prefix::contains(own.prefix, *asp)
            {
                return true;
            }
            if iasp.pa_priority == ctx.our_priority
                && same
                && u32::from(rid) > u32::from(ctx.our_rid)
            {
                return true;
            }
            if iasp.pa_priority > ctx.our_priority {
                return true;
            }
        }
    }

    // Our own other interfaces should never collide with this one; if
    // they do, the algorithm has a bug upstream that should be fixed
    // rather than silently patched over here.
    for (iface_id, list) in asps {
        if *iface_id == ctx.iface_id {
            continue;
        }
        for node in list {
            if node.rid == ctx.our_rid
                && node.pa_priority >= ctx.our_priority
                && prefix::overlaps(node.prefix, own.prefix)
            {
                panic!(
                    "prefix assignment invariant violated: {} on {} collides with own {} on interface {}",
                    node.prefix, iface_id, own.prefix, ctx.iface_id
                );
            }
        }
    }

    false
}

fn remove_own(
    ctx: &ExecCtx,
    asps: &mut AreaAsps,
    sink: &mut impl KernelSink,
    own: AspNode,
) {
    let addr = prefix::host_address(own.prefix, own.my_rid);
    Debug::<crate::version::Ospfv3>::AcAssignRemove(ctx.iface_name, &addr).log();
    sink.remove(ctx.iface_name, addr);
    if let Some(list) = asps.get_mut(&ctx.iface_id) {
        list.retain(|n| !(n.rid == own.rid && n.prefix == own.prefix));
    }
}

fn install_own(
    ctx: &ExecCtx,
    asps: &mut AreaAsps,
    sink: &mut impl KernelSink,
    node: AspNode,
) {
    let addr = prefix::host_address(node.prefix, node.my_rid);
    Debug::<crate::version::Ospfv3>::AcAssignInstall(ctx.iface_name, &addr).log();
    sink.install(ctx.iface_name, addr);
    asps.entry(ctx.iface_id).or_default().push(node);
}

fn accept_peer(
    ctx: &ExecCtx,
    asps: &mut AreaAsps,
    sink: &mut impl KernelSink,
    peer: PeerAssignment,
    change: &mut bool,
) {
    let already = asps
        .get(&ctx.iface_id)
        .map(|list| {
            list.iter().any(|n| {
                n.rid == peer.rid
                    && n.prefix == peer.prefix
                    && n.pa_priority == peer.priority
            })
        })
        .unwrap_or(false);
    if already {
        return;
    }

    // Determine whether any existing assignment (ours or a neighbor's
    // that we've already recorded) outranks the peer's.
    let mut refused = false;
    let mut colliding = Vec::new();
    for (iface_id, list) in asps.iter() {
        for node in list {
            if !prefix::overlaps(node.prefix, peer.prefix) {
                continue;
            }
            colliding.push((*iface_id, *node));
            let outranks = node.pa_priority > peer.priority
                || (node.pa_priority == peer.priority
                    && prefix::contains(peer.prefix, node.prefix)
                    && node.prefix != peer.prefix)
                || (node.pa_priority == peer.priority
                    && node.prefix == peer.prefix
                    && u32::from(ctx.our_rid) > u32::from(peer.rid));
            if outranks {
                refused = true;
            }
        }
    }
    if refused {
        return;
    }

    for (iface_id, node) in colliding {
        if node.rid == ctx.our_rid {
            *change = true;
        }
        let colliding_addr = prefix::host_address(node.prefix, node.my_rid);
        let colliding_name = ctx.name_of(iface_id);
        Debug::<crate::version::Ospfv3>::AcAssignRemove(
            colliding_name,
            &colliding_addr,
        )
        .log();
        sink.remove(colliding_name, colliding_addr);
        if let Some(list) = asps.get_mut(&iface_id) {
            list.retain(|n| !(n.rid == node.rid && n.prefix == node.prefix));
        }
    }

    let addr = prefix::host_address(peer.prefix, ctx.our_rid);
    Debug::<crate::version::Ospfv3>::AcAssignDeferToPeer(
        ctx.iface_name,
        &addr,
        peer.rid,
    )
    .log();
    sink.install(ctx.iface_name, addr);
    asps.entry(ctx.iface_id).or_default().push(AspNode {
        prefix: peer.prefix,
        rid: peer.rid,
        my_rid: ctx.our_rid,
        pa_priority: peer.priority,
        valid: true,
    });
}

fn allocate(
    ctx: &ExecCtx,
    lsdb: &AcLsdb,
    asps: &mut AreaAsps,
    sink: &mut impl KernelSink,
    change: &mut bool,
) {
    const PA_PRIORITY_MAX: u8 = u8::MAX;

    let own_ifaces: Vec<(u32, AspNode)> = asps
        .iter()
        .flat_map(|(id, list)| list.iter().map(move |n| (*id, *n)))
        .collect();
    let used = collect_used(
        ctx.usp,
        ctx.our_rid,
        ctx.our_priority,
        ctx.asp_d_len,
        lsdb,
        own_ifaces.iter().map(|(id, n)| (*id, n)),
        None,
    );

    let mut success = false;

    // a: reuse a /64 held in memory — open question, treated as a no-op
    // (see DESIGN.md).

    // c (b is the reuse no-op above): assign an unused /64.
    if !success {
        if let Some(chosen) = prefix::choose(
            ctx.usp,
            ctx.asp_d_len,
            &used.used.iter().map(|u| u.prefix).collect::<Vec<_>>(),
            ctx.our_rid,
            ctx.iface_name,
        ) {
            install_own(
                ctx,
                asps,
                sink,
                AspNode {
                    prefix: chosen,
                    rid: ctx.our_rid,
                    my_rid: ctx.our_rid,
                    pa_priority: ctx.our_priority,
                    valid: true,
                },
            );
            *change = true;
            success = true;
        }
    }

    // d: steal a /64.
    if !success {
        if let Some(stolen) = try_steal(ctx, lsdb, asps, sink, &used, change) {
            install_own(
                ctx,
                asps,
                sink,
                AspNode {
                    prefix: stolen,
                    rid: ctx.our_rid,
                    my_rid: ctx.our_rid,
                    pa_priority: ctx.our_priority,
                    valid: true,
                },
            );
            success = true;
        }
    }

    // e: reuse a /80 — no-op, same open question as (a).

    // f: assign an unused /80.
    if !success && ctx.our_priority < PA_PRIORITY_MAX {
        if let Some(chosen) = prefix::choose(
            ctx.usp,
            ctx.asp_s_len,
            &used.used.iter().map(|u| u.prefix).collect::<Vec<_>>(),
            ctx.our_rid,
            ctx.iface_name,
        ) {
            install_own(
                ctx,
                asps,
                sink,
                AspNode {
                    prefix: chosen,
                    rid: ctx.our_rid,
                    my_rid: ctx.our_rid,
                    pa_priority: ctx.our_priority,
                    valid: true,
                },
            );
            *change = true;
            success = true;
        }
    }

    // g: split a /64 into a /80.
    if !success && ctx.our_priority < PA_PRIORITY_MAX {
        if let Some(split) = try_split(ctx, lsdb, asps, sink, &used, change) {
            install_own(
                ctx,
                asps,
                sink,
                AspNode {
                    prefix: split,
                    rid: ctx.our_rid,
                    my_rid: ctx.our_rid,
                    pa_priority: ctx.our_priority,
                    valid: true,
                },
            );
            success = true;
        }
    }

    // h: nothing left to assign, logged by the caller via debug.rs.
    let _ = success;
}

// Attempts to evaluate whether our held /80 (`own`) could be upgraded to
// a /64, following the reference's "re-use 5.3.6a-d" variant that
// excludes the /80 itself from the used-set.
fn try_upgrade_to_d(
    ctx: &ExecCtx,
    lsdb: &AcLsdb,
    asps: &mut AreaAsps,
    sink: &mut impl KernelSink,
    own: AspNode,
    change: &mut bool,
) {
    let own_ifaces: Vec<(u32, AspNode)> = asps
        .iter()
        .flat_map(|(id, list)| list.iter().map(move |n| (*id, *n)))
        .collect();
    let used = collect_used(
        ctx.usp,
        ctx.our_rid,
        ctx.our_priority,
        ctx.asp_d_len,
        lsdb,
        own_ifaces.iter().map(|(id, n)| (*id, n)),
        Some(Exclude {
            iface_id: ctx.iface_id,
            prefix: own.prefix,
        }),
    );

    if let Some(chosen) = prefix::choose(
        ctx.usp,
        ctx.asp_d_len,
        &used.used.iter().map(|u| u.prefix).collect::<Vec<_>>(),
        ctx.our_rid,
        ctx.iface_name,
    ) {
        remove_own(ctx, asps, sink, own);
        install_own(
            ctx,
            asps,
            sink,
            AspNode {
                prefix: chosen,
                rid: ctx.our_rid,
                my_rid: ctx.our_rid,
                pa_priority: ctx.our_priority,
                valid: true,
            },
        );
        *change = true;
        return;
    }

    if let Some(stolen) = try_steal(ctx, lsdb, asps, sink, &used, change) {
        remove_own(ctx, asps, sink, own);
        install_own(
            ctx,
            asps,
            sink,
            AspNode {
                prefix: stolen,
                rid: ctx.our_rid,
                my_rid: ctx.our_rid,
                pa_priority: ctx.our_priority,
                valid: true,
            },
        );
    }
}

// Conservative steal policy (spec §4.F.d): only steal if no router with
// strictly higher priority than the lowest one we found already holds or
// collides with the candidate, and we have not already stolen/split it
// ourselves on another interface.
fn try_steal(
    ctx: &ExecCtx,
    lsdb: &AcLsdb,
    asps: &mut AreaAsps,
    sink: &mut impl KernelSink,
    used: &UsedSet,
    change: &mut bool,
) -> Option<Ipv6Network> {
    let candidate = used.steal?;

    for (rid, iasp) in lsdb.iasps(Some(ctx.our_rid)) {
        if iasp.pa_priority <= candidate.pa_priority {
            continue;
        }
        for asp in &iasp.asps {
            if prefix::overlaps(*asp, candidate.prefix) {
                let _ = rid;
                return None;
            }
        }
    }
    for (_, list) in asps.iter() {
        for node in list {
            if node.rid != ctx.our_rid {
                continue;
            }
            if node.pa_priority > candidate.pa_priority
                && prefix::overlaps(node.prefix, candidate.prefix)
            {
                return None;
            }
        }
    }

    let colliding: Vec<(u32, AspNode)> = asps
        .iter()
        .flat_map(|(id, list)| {
            list.iter()
                .filter(|n| prefix::overlaps(n.prefix, candidate.prefix))
                .map(move |n| (*id, *n))
        })
        .collect();
    for (iface_id, node) in colliding {
        if node.rid == ctx.our_rid {
            *change = true;
        }
        let addr = prefix::host_address(node.prefix, node.my_rid);
        let name = ctx.name_of(iface_id);
        Debug::<crate::version::Ospfv3>::AcAssignRemove(name, &addr).log();
        sink.remove(name, addr);
        if let Some(list) = asps.get_mut(&iface_id) {
            list.retain(|n| !(n.rid == node.rid && n.prefix == node.prefix));
        }
    }

    *change = true;
    Some(candidate.prefix)
}

// Split policy (spec §4.F.g). Per DESIGN.md, the reference's
// `found_split` reassignment bug inside the loop body is not reproduced;
// the predicate is evaluated once up front from the collected candidate.
fn try_split(
    ctx: &ExecCtx,
    lsdb: &AcLsdb,
    asps: &mut AreaAsps,
    sink: &mut impl KernelSink,
    used: &UsedSet,
    change: &mut bool,
) -> Option<Ipv6Network> {
    let candidate = used.split?;

    for (_, iasp) in lsdb.iasps(Some(ctx.our_rid)) {
        if iasp.pa_priority < ctx.our_priority {
            continue;
        }
        for asp in &iasp.asps {
            let overlap = prefix::overlaps(*asp, candidate.prefix);
            if !overlap {
                continue;
            }
            if iasp.pa_priority > ctx.our_priority {
                return None;
            }
            if iasp.pa_priority == ctx.our_priority && *asp != candidate.prefix {
                return None;
            }
        }
    }

    // Carve out the first sub-prefix of the split prefix at the /80
    // length; the remainder stays implicitly available for the next
    // router that needs to split the same /64.
    let split = Ipv6Network::new(candidate.prefix.network(), ctx.asp_s_len).ok()?;

    // Evict every local record overlapping the /64 being split (it is
    // ours or a lower/equal-priority peer's we already cleared above to
    // reach here) before installing the carved-out /80 (spec §4.F.g).
    let colliding: Vec<(u32, AspNode)> = asps
        .iter()
        .flat_map(|(id, list)| {
            list.iter()
                .filter(|n| prefix::overlaps(n.prefix, candidate.prefix))
                .map(move |n| (*id, *n))
        })
        .collect();
    for (iface_id, node) in colliding {
        if node.rid == ctx.our_rid {
            *change = true;
        }
        let addr = prefix::host_address(node.prefix, node.my_rid);
        let name = ctx.name_of(iface_id);
        Debug::<crate::version::Ospfv3>::AcAssignRemove(name, &addr).log();
        sink.remove(name, addr);
        if let Some(list) = asps.get_mut(&iface_id) {
            list.retain(|n| !(n.rid == node.rid && n.prefix == node.prefix));
        }
    }

    Some(split)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use super::super::resolve::Resolution;

    #[derive(Default)]
    struct FakeSink {
        installed: Vec<Ipv6Network>,
        removed: Vec<Ipv6Network>,
    }

    impl KernelSink for FakeSink {
        fn install(&mut self, _iface_name: &str, prefix: Ipv6Network) {
            self.installed.push(prefix);
        }
        fn remove(&mut self, _iface_name: &str, prefix: Ipv6Network) {
            self.removed.push(prefix);
        }
    }

    fn px(s: &str) -> Ipv6Network {
        Ipv6Network::from_str(s).unwrap()
    }

    #[test]
    fn allocate_assigns_unused_prefix() {
        let iface_names = BTreeMap::new();
        let ctx = ExecCtx {
            usp: px("2001:db8::/62"),
            iface_id: 1,
            iface_name: "eth0",
            our_rid: Ipv4Addr::new(1, 1, 1, 1),
            our_priority: 5,
            asp_d_len: 64,
            asp_s_len: 80,
            iface_names: &iface_names,
        };
        let lsdb = AcLsdb::default();
        let resolution = Resolution {
            highest_priority: 5,
            have_highest_priority: true,
            have_highest_rid: true,
            peer_assignment: None,
            have_own_response: false,
        };
        let mut asps = AreaAsps::new();
        let mut sink = FakeSink::default();

        let changed =
            execute(&ctx, &lsdb, &resolution, &mut asps, &mut sink);
        assert!(changed);
        assert_eq!(sink.installed.len(), 1);
        assert!(prefix::contains(ctx.usp, sink.installed[0]));
        assert_eq!(asps.get(&1).unwrap().len(), 1);
    }

    #[test]
    fn nothing_to_do_short_circuits() {
        let iface_names = BTreeMap::new();
        let ctx = ExecCtx {
            usp: px("2001:db8::/62"),
            iface_id: 1,
            iface_name: "eth0",
            our_rid: Ipv4Addr::new(1, 1, 1, 1),
            our_priority: 5,
            asp_d_len: 64,
            asp_s_len: 80,
            iface_names: &iface_names,
        };
        let lsdb = AcLsdb::default();
        let resolution = Resolution {
            highest_priority: 9,
            have_highest_priority: false,
            have_highest_rid: false,
            peer_assignment: None,
            have_own_response: false,
        };
        let mut asps = AreaAsps::new();
        let mut sink = FakeSink::default();

        let changed =
            execute(&ctx, &lsdb, &resolution, &mut asps, &mut sink);
        assert!(!changed);
        assert!(sink.installed.is_empty());
    }
}
