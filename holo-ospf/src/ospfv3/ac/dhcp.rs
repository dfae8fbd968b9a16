//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

// DHCPv6 prefix-delegation ingestion (component H): polls a system-provided
// delegated-prefix string and folds it into the area's Usable Prefix set,
// exactly as the reference's `update_dhcpv6_usable_prefix` does (spec §4.H,
// SPEC_FULL.md §5).

use std::str::FromStr;

use ipnetwork::Ipv6Network;

use super::error::AcError;
use super::{Usp, UspOrigin};
use crate::debug::Debug;

// External collaborator: the actual PD client lives in a sibling daemon
// (spec §1 names "DHCPv6 prefix-delegation ingestion" as out of scope for
// this core). This trait is the narrow interface the ingestor polls.
pub trait DhcpPdSource {
    // Returns the currently delegated prefix as a raw "<ipv6>/<len>"
    // string, or `None` if nothing is currently delegated.
    fn delegated_prefix_str(&self) -> Option<String>;

    // Parses `delegated_prefix_str()`. A malformed string is treated as
    // absent (spec §7 "input malformed"): logged, no state mutation.
    fn get_delegated_prefix(&self) -> Option<Ipv6Network> {
        let raw = self.delegated_prefix_str()?;
        match Ipv6Network::from_str(&raw) {
            Ok(prefix) => Some(prefix),
            Err(_) => {
                AcError::MalformedDelegatedPrefix(raw).log();
                None
            }
        }
    }
}

// Synchronizes `usps` against the current delegated prefix, preserving
// every USP not of DHCPv6-PD origin untouched. Returns whether the USP set
// changed (the caller should then `schedule_reorigination` for every area,
// per spec §4.H).
pub fn sync_dhcpv6_pd(usps: &mut Vec<Usp>, source: &impl DhcpPdSource) -> bool {
    let current = source.get_delegated_prefix();
    let existing_idx = usps
        .iter()
        .position(|u| matches!(u.origin, UspOrigin::Dhcpv6Pd));

    match (existing_idx, current) {
        (Some(idx), Some(prefix)) if usps[idx].prefix == prefix => false,
        (Some(idx), Some(prefix)) => {
            usps[idx].prefix = prefix;
            Debug::<crate::version::Ospfv3>::AcDhcpPdUpdate(Some(&prefix))
                .log();
            true
        }
        (Some(idx), None) => {
            usps.remove(idx);
            Debug::<crate::version::Ospfv3>::AcDhcpPdUpdate(None).log();
            true
        }
        (None, Some(prefix)) => {
            usps.push(Usp {
                prefix,
                origin: UspOrigin::Dhcpv6Pd,
            });
            Debug::<crate::version::Ospfv3>::AcDhcpPdUpdate(Some(&prefix))
                .log();
            true
        }
        (None, None) => false,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    struct FakeSource(Option<&'static str>);

    impl DhcpPdSource for FakeSource {
        fn delegated_prefix_str(&self) -> Option<String> {
            self.0.map(str::to_owned)
        }
    }

    #[test]
    fn adds_new_delegated_prefix() {
        let mut usps = Vec::new();
        let source = FakeSource(Some("2001:db8:1::/56"));
        assert!(sync_dhcpv6_pd(&mut usps, &source));
        assert_eq!(usps.len(), 1);
        assert_eq!(
            usps[0].prefix,
            Ipv6Network::from_str("2001:db8:1::/56").unwrap()
        );
        assert!(matches!(usps[0].origin, UspOrigin::Dhcpv6Pd));
    }

    #[test]
    fn no_change_is_not_reported() {
        let mut usps = vec![Usp {
            prefix: Ipv6Network::from_str("2001:db8:1::/56").unwrap(),
            origin: UspOrigin::Dhcpv6Pd,
        }];
        let source = FakeSource(Some("2001:db8:1::/56"));
        assert!(!sync_dhcpv6_pd(&mut usps, &source));
        assert_eq!(usps.len(), 1);
    }

    #[test]
    fn removes_when_prefix_withdrawn() {
        let mut usps = vec![Usp {
            prefix: Ipv6Network::from_str("2001:db8:1::/56").unwrap(),
            origin: UspOrigin::Dhcpv6Pd,
        }];
        let source = FakeSource(None);
        assert!(sync_dhcpv6_pd(&mut usps, &source));
        assert!(usps.is_empty());
    }

    #[test]
    fn malformed_string_treated_as_absent() {
        let mut usps = Vec::new();
        let source = FakeSource(Some("not-a-prefix"));
        assert!(!sync_dhcpv6_pd(&mut usps, &source));
        assert!(usps.is_empty());
    }

    #[test]
    fn preserves_ac_origin_usps() {
        use std::net::Ipv4Addr;

        let mut usps = vec![Usp {
            prefix: Ipv6Network::from_str("2001:db8::/60").unwrap(),
            origin: UspOrigin::Ac {
                router_id: Ipv4Addr::new(1, 1, 1, 1),
            },
        }];
        let source = FakeSource(Some("2001:db8:1::/56"));
        assert!(sync_dhcpv6_pd(&mut usps, &source));
        assert_eq!(usps.len(), 2);
    }
}
