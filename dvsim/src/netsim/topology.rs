// DVSim: Distance Vector Routing Simulator
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Topology Store
//!
//! This module keeps track of all known routers (the [`RouterRegistry`]), and of the undirected,
//! weighted links between them (the [`Topology`]).

use crate::netsim::types::{Cost, LinkRecord, LinkWeight};

use itertools::Itertools;
use log::*;
use std::collections::{BTreeMap, HashSet};
use std::iter::FromIterator;

/// # Router Registry
///
/// Set of all known routers, in order of their first appearance. Routers are only added by calling
/// [`RouterRegistry::ensure`], which is idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterRegistry {
    names: Vec<String>,
    known: HashSet<String>,
}

impl RouterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure that the router is known. Returns `true` if the router was added, and `false` if
    /// it was already present.
    pub fn ensure(&mut self, name: &str) -> bool {
        if self.known.contains(name) {
            false
        } else {
            self.known.insert(name.to_string());
            self.names.push(name.to_string());
            true
        }
    }

    /// Admit all endpoints of the given links, which are not yet known. Withdrawals never introduce
    /// new routers. Returns the newly admitted routers, in order of their first appearance.
    pub fn admit_links<'a>(
        &mut self,
        links: impl IntoIterator<Item = &'a LinkRecord>,
    ) -> Vec<String> {
        let mut admitted = Vec::new();
        for link in links.into_iter().filter(|l| !l.weight.is_withdraw()) {
            for name in [&link.source, &link.target].iter() {
                if self.ensure(name) {
                    admitted.push(name.to_string());
                }
            }
        }
        if !admitted.is_empty() {
            debug!("Admitted new routers: {}", admitted.iter().join(", "));
        }
        admitted
    }

    /// Returns true if the router is known.
    pub fn contains(&self, name: &str) -> bool {
        self.known.contains(name)
    }

    /// Number of known routers
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no router is known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all routers in order of their first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|x| x.as_str())
    }

    /// Get all routers in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        self.iter().sorted().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for RouterRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        for name in iter {
            registry.ensure(name.as_ref());
        }
        registry
    }
}

/// # Topology
///
/// Adjacency map of the network. Every router maps to its neighbors and the cost of the link
/// to them. Links are undirected, so both directions are always kept identical. The neighbors
/// are ordered lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    adj: BTreeMap<String, BTreeMap<String, Cost>>,
}

impl Topology {
    /// Create an empty topology
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the topology by replaying all link records in order. Every router of the registry
    /// starts without any neighbor.
    pub fn from_links<'a>(
        routers: &RouterRegistry,
        links: impl IntoIterator<Item = &'a LinkRecord>,
    ) -> Self {
        let mut topo = Self::new();
        for router in routers.iter() {
            topo.ensure_router(router);
        }
        for link in links {
            topo.apply_link(link);
        }
        topo
    }

    /// Make sure that the router is present in the adjacency map (possibly without any
    /// neighbor). Returns `true` if the router was added.
    pub fn ensure_router(&mut self, router: &str) -> bool {
        if self.adj.contains_key(router) {
            false
        } else {
            self.adj.insert(router.to_string(), BTreeMap::new());
            true
        }
    }

    /// Apply a single link record. A cost sets (or overwrites) the link in both directions, and a
    /// withdrawal removes both directions if present.
    pub fn apply_link(&mut self, link: &LinkRecord) {
        self.ensure_router(&link.source);
        self.ensure_router(&link.target);
        match link.weight {
            LinkWeight::Cost(cost) => {
                trace!("Set link {} -- {} to {}", link.source, link.target, cost);
                self.set_half_link(&link.source, &link.target, Some(cost));
                self.set_half_link(&link.target, &link.source, Some(cost));
            }
            LinkWeight::Withdraw => {
                trace!("Withdraw link {} -- {}", link.source, link.target);
                self.set_half_link(&link.source, &link.target, None);
                self.set_half_link(&link.target, &link.source, None);
            }
        }
    }

    fn set_half_link(&mut self, from: &str, to: &str, cost: Option<Cost>) {
        if let Some(neighbors) = self.adj.get_mut(from) {
            match cost {
                Some(cost) => {
                    neighbors.insert(to.to_string(), cost);
                }
                None => {
                    neighbors.remove(to);
                }
            }
        }
    }

    /// Iterate over all neighbors of the router and the cost of the link to them, in lexicographic
    /// order. An unknown router has no neighbors.
    pub fn neighbors<'a>(&'a self, router: &str) -> impl Iterator<Item = (&'a str, Cost)> + 'a {
        self.adj.get(router).into_iter().flat_map(|n| n.iter().map(|(r, c)| (r.as_str(), *c)))
    }

    /// Get the cost of the link between `a` and `b`, or `None` if the two are not connected.
    pub fn link_cost(&self, a: &str, b: &str) -> Option<Cost> {
        self.adj.get(a).and_then(|n| n.get(b)).copied()
    }

    /// Iterate over all routers present in the adjacency map, in lexicographic order.
    pub fn routers(&self) -> impl Iterator<Item = &str> {
        self.adj.keys().map(|x| x.as_str())
    }

    /// Number of (undirected) links
    pub fn num_links(&self) -> usize {
        self.adj.values().map(|n| n.len()).sum::<usize>() / 2
    }
}
