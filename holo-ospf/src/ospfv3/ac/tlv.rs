//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

// Wire format and read-only LSDB query surface for the prefix-assignment
// algorithm's inputs (draft-arkko-homenet-prefix-assignment AC-LSA TLVs).
//
// NOTE: these TLVs are not yet registered in `ospfv3::packet::lsa`'s
// `LsaBody`/flooding pipeline. `AcLsdb` is the parsed, read-only view the
// OSPFv3 flooding engine would hand to the assignment algorithm once AC-LSA
// support is wired into that pipeline; see DESIGN.md.

use std::collections::BTreeMap;
use std::net::{Ipv4Addr, Ipv6Addr};

use bytes::{Buf, BufMut, Bytes, BytesMut};
use ipnetwork::Ipv6Network;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

use crate::packet::error::{DecodeError, DecodeResult};
use crate::packet::tlv::{TLV_HDR_SIZE, tlv_encode_end, tlv_encode_start};

// AC-LSA TLV types (draft-private allocation, not yet IANA-registered).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(FromPrimitive, ToPrimitive)]
pub(crate) enum AcTlvType {
    Usp = 1,
    Iasp = 2,
    Asp = 3,
}

// A Usable Prefix advertised by a router in an AC-LSA.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UspTlv {
    pub prefix: Ipv6Network,
}

// An Interface-scoped ASP block: the assignments a router has made on one
// of its interfaces.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IaspTlv {
    pub iface_id: u32,
    pub pa_priority: u8,
    pub pa_pxlen: u8,
    pub asps: Vec<Ipv6Network>,
}

// ===== impl UspTlv =====

impl UspTlv {
    pub(crate) fn decode(tlv_len: u16, buf: &mut Bytes) -> DecodeResult<Self> {
        if tlv_len < 1 {
            return Err(DecodeError::InvalidTlvLength(tlv_len));
        }
        let prefix = decode_prefix(buf)?;
        Ok(UspTlv { prefix })
    }

    pub(crate) fn encode(&self, buf: &mut BytesMut) {
        let start_pos = tlv_encode_start(buf, AcTlvType::Usp);
        encode_prefix(&self.prefix, buf);
        tlv_encode_end(buf, start_pos);
    }
}

// ===== impl IaspTlv =====

impl IaspTlv {
    pub(crate) fn decode(tlv_len: u16, buf: &mut Bytes) -> DecodeResult<Self> {
        if tlv_len < 6 {
            return Err(DecodeError::InvalidTlvLength(tlv_len));
        }
        let iface_id = buf.get_u32();
        let pa_priority = buf.get_u8();
        let pa_pxlen = buf.get_u8();

        let mut asps = Vec::new();
        let mut remaining = tlv_len as usize - 6;
        while remaining >= TLV_HDR_SIZE as usize {
            let sub_type = buf.get_u16();
            let sub_len = buf.get_u16();
            remaining -= TLV_HDR_SIZE as usize;
            if sub_len as usize > remaining {
                return Err(DecodeError::InvalidTlvLength(sub_len));
            }
            if AcTlvType::from_u16(sub_type) == Some(AcTlvType::Asp) {
                let asp = decode_prefix(buf)?;
                asps.push(asp);
            } else {
                buf.advance(sub_len as usize);
            }
            remaining -= sub_len as usize;
        }

        Ok(IaspTlv {
            iface_id,
            pa_priority,
            pa_pxlen,
            asps,
        })
    }

    pub(crate) fn encode(&self, buf: &mut BytesMut) {
        let start_pos = tlv_encode_start(buf, AcTlvType::Iasp);
        buf.put_u32(self.iface_id);
        buf.put_u8(self.pa_priority);
        buf.put_u8(self.pa_pxlen);
        for asp in &self.asps {
            let sub_start = tlv_encode_start(buf, AcTlvType::Asp);
            encode_prefix(asp, buf);
            tlv_encode_end(buf, sub_start);
        }
        tlv_encode_end(buf, start_pos);
    }
}

// Prefixes are encoded as a one-byte length followed by the minimum number
// of whole bytes needed to hold that many bits.
fn decode_prefix(buf: &mut Bytes) -> DecodeResult<Ipv6Network> {
    let len = buf.get_u8();
    if len > 128 {
        return Err(DecodeError::InvalidIpPrefix);
    }
    let wire_len = (usize::from(len) + 7) / 8;
    let mut octets = [0u8; 16];
    buf.copy_to_slice(&mut octets[..wire_len]);
    Ipv6Network::new(Ipv6Addr::from(octets), len)
        .map_err(|_| DecodeError::InvalidIpPrefix)
}

fn encode_prefix(prefix: &Ipv6Network, buf: &mut BytesMut) {
    let len = prefix.prefix();
    buf.put_u8(len);
    let wire_len = (usize::from(len) + 7) / 8;
    let octets = prefix.ip().octets();
    buf.put_slice(&octets[..wire_len]);
}

// ===== AcLsdb: read-only query surface (spec §4.B / §6) =====

// Parsed, read-only view of the AC-LSAs flooded in an area, keyed by
// advertising router ID. In a complete deployment this is populated by the
// OSPFv3 flooding engine each time a router's AC-LSA is (re)installed or
// flushed from the LSDB; see the module-level note above.
#[derive(Clone, Debug, Default)]
pub struct AcLsdb {
    // USPs advertised by each router.
    usps: BTreeMap<Ipv4Addr, Vec<UspTlv>>,
    // Interface-scoped ASP blocks advertised by each router.
    iasps: BTreeMap<Ipv4Addr, Vec<IaspTlv>>,
}

impl AcLsdb {
    // Replaces (or removes, when empty) the AC-LSA contents advertised by
    // `router_id`. Mirrors what installing/flushing that router's AC-LSA in
    // the real LSDB would do.
    pub fn update_router(
        &mut self,
        router_id: Ipv4Addr,
        usps: Vec<UspTlv>,
        iasps: Vec<IaspTlv>,
    ) {
        if usps.is_empty() {
            self.usps.remove(&router_id);
        } else {
            self.usps.insert(router_id, usps);
        }
        if iasps.is_empty() {
            self.iasps.remove(&router_id);
        } else {
            self.iasps.insert(router_id, iasps);
        }
    }

    pub fn remove_router(&mut self, router_id: Ipv4Addr) {
        self.usps.remove(&router_id);
        self.iasps.remove(&router_id);
    }

    // Iterates over every USP advertised by any router, together with its
    // advertising router ID.
    pub(crate) fn usps(
        &self,
    ) -> impl Iterator<Item = (Ipv4Addr, Ipv6Network)> + '_ {
        self.usps.iter().flat_map(|(rid, usps)| {
            usps.iter().map(move |u| (*rid, u.prefix))
        })
    }

    // Iterates over every (router, IASP) pair in the area, excluding the
    // ones advertised by `exclude_rid` when set.
    pub(crate) fn iasps(
        &self,
        exclude_rid: Option<Ipv4Addr>,
    ) -> impl Iterator<Item = (Ipv4Addr, &IaspTlv)> {
        self.iasps
            .iter()
            .filter(move |(rid, _)| Some(**rid) != exclude_rid)
            .flat_map(|(rid, list)| list.iter().map(move |i| (*rid, i)))
    }

    // Iterates over the IASP block a specific router advertised for a
    // specific interface ID on this link, if any.
    pub(crate) fn iasp_for<'a>(
        &'a self,
        router_id: Ipv4Addr,
        iface_id: u32,
    ) -> Option<&'a IaspTlv> {
        self.iasps
            .get(&router_id)?
            .iter()
            .find(|i| i.iface_id == iface_id)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn usp_tlv_roundtrip() {
        let tlv = UspTlv {
            prefix: Ipv6Network::from_str("2001:db8::/60").unwrap(),
        };
        let mut buf = BytesMut::new();
        tlv.encode(&mut buf);

        let mut buf = buf.freeze();
        let tlv_type = buf.get_u16();
        let tlv_len = buf.get_u16();
        assert_eq!(tlv_type, AcTlvType::Usp as u16);
        let decoded = UspTlv::decode(tlv_len, &mut buf).unwrap();
        assert_eq!(decoded.prefix, tlv.prefix);
    }

    #[test]
    fn iasp_tlv_roundtrip() {
        let tlv = IaspTlv {
            iface_id: 7,
            pa_priority: 3,
            pa_pxlen: 64,
            asps: vec![
                Ipv6Network::from_str("2001:db8:0:1::/64").unwrap(),
                Ipv6Network::from_str("2001:db8:0:2::/64").unwrap(),
            ],
        };
        let mut buf = BytesMut::new();
        tlv.encode(&mut buf);

        let mut buf = buf.freeze();
        let tlv_type = buf.get_u16();
        let tlv_len = buf.get_u16();
        assert_eq!(tlv_type, AcTlvType::Iasp as u16);
        let decoded = IaspTlv::decode(tlv_len, &mut buf).unwrap();
        assert_eq!(decoded.iface_id, 7);
        assert_eq!(decoded.pa_priority, 3);
        assert_eq!(decoded.asps, tlv.asps);
    }

    #[test]
    fn ac_lsdb_update_and_iterate() {
        let mut lsdb = AcLsdb::default();
        let rid = Ipv4Addr::new(1, 1, 1, 1);
        let usp = UspTlv {
            prefix: Ipv6Network::from_str("2001:db8::/60").unwrap(),
        };
        let iasp = IaspTlv {
            iface_id: 1,
            pa_priority: 1,
            pa_pxlen: 64,
            asps: vec![Ipv6Network::from_str("2001:db8::/64").unwrap()],
        };
        lsdb.update_router(rid, vec![usp], vec![iasp]);
        assert_eq!(lsdb.usps().count(), 1);
        assert_eq!(lsdb.iasps(None).count(), 1);
        assert!(lsdb.iasp_for(rid, 1).is_some());
        assert!(lsdb.iasp_for(rid, 2).is_none());

        lsdb.remove_router(rid);
        assert_eq!(lsdb.usps().count(), 0);
    }
}
