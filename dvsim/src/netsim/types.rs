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

//! Module containing all type definitions

use std::collections::BTreeMap;
use std::fmt;

/// Cost of a single link, or of an entire path.
pub type Cost = u64;

/// Cost that represents "no known path". Every cost at or above this value is treated as
/// unreachable, and is displayed as `INF`.
pub const INF: Cost = 1_000_000_000;

/// Raw cost used in link records to withdraw a link.
pub const WITHDRAW_SENTINEL: i64 = -1;

/// Returns the cost as a string, or `INF` if the cost is not finite.
pub fn fmt_cost(cost: Cost) -> String {
    if cost >= INF {
        String::from("INF")
    } else {
        cost.to_string()
    }
}

/// Weight of a link record
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum LinkWeight {
    /// Set the cost of the link (in both directions)
    Cost(Cost),
    /// Remove the link (in both directions), if it exists.
    Withdraw,
}

impl LinkWeight {
    /// Interpret a raw cost. The raw value `-1` is the withdrawal sentinel. All other negative
    /// values are invalid, and `None` is returned.
    pub fn from_raw(raw: i64) -> Option<Self> {
        if raw == WITHDRAW_SENTINEL {
            Some(Self::Withdraw)
        } else if raw >= 0 {
            Some(Self::Cost(raw as Cost))
        } else {
            None
        }
    }

    /// Returns true if and only if self is `LinkWeight::Withdraw`.
    pub fn is_withdraw(&self) -> bool {
        matches!(self, Self::Withdraw)
    }
}

impl fmt::Display for LinkWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cost(c) => write!(f, "{}", c),
            Self::Withdraw => write!(f, "{}", WITHDRAW_SENTINEL),
        }
    }
}

/// # Link Record
/// An undirected link between `source` and `target`. The order of the two endpoints carries no
/// meaning.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct LinkRecord {
    /// First endpoint
    pub source: String,
    /// Second endpoint
    pub target: String,
    /// Either the new cost of the link, or the withdrawal.
    pub weight: LinkWeight,
}

impl LinkRecord {
    /// Create a record setting the cost between `source` and `target`.
    pub fn new(source: impl Into<String>, target: impl Into<String>, cost: Cost) -> Self {
        Self { source: source.into(), target: target.into(), weight: LinkWeight::Cost(cost) }
    }

    /// Create a record withdrawing the link between `source` and `target`.
    pub fn withdraw(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self { source: source.into(), target: target.into(), weight: LinkWeight::Withdraw }
    }
}

impl fmt::Display for LinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.source, self.target, self.weight)
    }
}

/// # Distance Vector State
///
/// Maps every router to its currently believed cost to every destination. Missing entries are
/// read as `INF`, except the distance of a router to itself, which is always `0`.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct DistanceVectors {
    table: BTreeMap<String, BTreeMap<String, Cost>>,
}

impl DistanceVectors {
    /// Create the cold-start state: every router knows itself at cost 0, and nothing else.
    pub fn fresh(routers: &[&str]) -> Self {
        let mut state = Self::default();
        state.extend_to(routers);
        state
    }

    /// Add fresh entries for all routers (as sources and as destinations) which are not yet part
    /// of the state. Existing entries remain untouched. Returns the number of routers added.
    pub fn extend_to(&mut self, routers: &[&str]) -> usize {
        let mut added = 0;
        for x in routers {
            if !self.table.contains_key(*x) {
                self.table.insert(x.to_string(), BTreeMap::new());
                added += 1;
            }
        }
        for (x, row) in self.table.iter_mut() {
            for y in routers {
                row.entry(y.to_string()).or_insert(if x.as_str() == *y { 0 } else { INF });
            }
        }
        added
    }

    /// Get the distance from `router` to `destination`.
    pub fn get(&self, router: &str, destination: &str) -> Cost {
        if router == destination {
            return 0;
        }
        self.table.get(router).and_then(|row| row.get(destination)).copied().unwrap_or(INF)
    }

    /// Set the distance from `router` to `destination`. The distance of a router to itself cannot
    /// be changed.
    pub(crate) fn set(&mut self, router: &str, destination: &str, cost: Cost) {
        let cost = if router == destination { 0 } else { cost.min(INF) };
        self.table
            .entry(router.to_string())
            .or_default()
            .insert(destination.to_string(), cost);
    }

    /// Returns true if the state contains a vector for the router.
    pub fn contains(&self, router: &str) -> bool {
        self.table.contains_key(router)
    }

    /// Get the vector of a single router, ordered by destination.
    pub fn vector(&self, router: &str) -> Option<&BTreeMap<String, Cost>> {
        self.table.get(router)
    }

    /// Iterate over all routers of the state, in lexicographic order.
    pub fn routers(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(|x| x.as_str())
    }

    /// Returns the number of (router, destination) pairs whose cost differs between `self` and
    /// `other`, considering only the given routers.
    pub fn count_changes(&self, other: &Self, routers: &[&str]) -> usize {
        let mut changes = 0;
        for x in routers {
            for y in routers {
                if x != y && self.get(x, y) != other.get(x, y) {
                    changes += 1;
                }
            }
        }
        changes
    }
}

/// Distance table of a single router at a single round. It lists, for every destination (row) and
/// every candidate next hop (column), the cost of reaching the destination through that next hop,
/// using the distance vectors of the previous round.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DistanceTable {
    /// Router owning the table
    pub router: String,
    /// Logical time (round index)
    pub time: usize,
    /// All other routers, in lexicographic order. They are both the candidate next hops
    /// (columns) and the destinations (rows).
    pub others: Vec<String>,
    /// `cells[i][j]` is the cost to reach `others[i]` through `others[j]`, capped at `INF`.
    pub cells: Vec<Vec<Cost>>,
}

impl DistanceTable {
    /// Get the cost to reach `destination` through `next_hop`.
    pub fn cost_through(&self, destination: &str, next_hop: &str) -> Option<Cost> {
        let row = self.others.iter().position(|r| r == destination)?;
        let col = self.others.iter().position(|r| r == next_hop)?;
        Some(self.cells[row][col])
    }
}

/// Entry of a routing table
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct RouteEntry {
    /// Destination router
    pub destination: String,
    /// Next hop towards the destination, or `None` if the destination is unreachable.
    pub next_hop: Option<String>,
    /// Total cost to the destination, or `None` if the destination is unreachable.
    pub cost: Option<Cost>,
}

impl RouteEntry {
    /// Returns true if the destination can be reached
    pub fn is_reachable(&self) -> bool {
        self.next_hop.is_some()
    }
}

impl fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.next_hop.as_ref(), self.cost) {
            (Some(nh), Some(cost)) => write!(f, "{},{},{}", self.destination, nh, cost),
            _ => write!(f, "{},INF,INF", self.destination),
        }
    }
}

/// Final routing table of a single router, ordered by destination.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct RoutingTable {
    /// Router owning the table
    pub router: String,
    /// One entry per destination (every other router)
    pub entries: Vec<RouteEntry>,
}

impl RoutingTable {
    /// Get the entry for a destination
    pub fn get(&self, destination: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.destination == destination)
    }
}
