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

//! # Convergence Engine
//!
//! Synchronous Bellman-Ford over the distance vectors of all routers. In every round, each router
//! recomputes its distance to every destination from the distance vectors of its neighbors of the
//! *previous* round. Values computed in the current round are never read in the same round. The
//! engine stops as soon as a round does not change any distance.
//!
//! There is no split-horizon or poison-reverse. After a link failure, the routers may count to
//! infinity, which takes many rounds before all distances saturate at [`INF`].

use crate::netsim::printer::Reporter;
use crate::netsim::topology::{RouterRegistry, Topology};
use crate::netsim::types::{Cost, DistanceTable, DistanceVectors, RouteEntry, RoutingTable, INF};
use crate::Error;

use log::*;

/// Configuration of the convergence engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of rounds in a single call to [`converge`]. If `None`, the engine runs until
    /// the network has converged, no matter how many rounds this takes.
    pub stop_after: Option<usize>,
}

/// Result of a single call to [`converge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Convergence {
    /// Converged distance vectors of all routers
    pub state: DistanceVectors,
    /// Logical time at which a subsequent call should continue.
    pub next_time: usize,
    /// Number of rounds performed, including the last one which did not change anything.
    pub rounds: usize,
    /// Final routing table of every router, in lexicographic order of the routers.
    pub routing_tables: Vec<RoutingTable>,
}

impl Convergence {
    /// Get the routing table of a specific router.
    pub fn routing_table(&self, router: &str) -> Option<&RoutingTable> {
        self.routing_tables.iter().find(|t| t.router == router)
    }
}

/// Run the distance vector protocol until convergence, and report all tables to the `reporter`.
///
/// - If `prior` is `None`, every router starts only knowing itself (cold start).
/// - Otherwise, the prior state is used as the starting point of round `start_time`. Routers
///   which are not yet part of the prior state are added with fresh entries. This is used to
///   resume after the topology has changed.
///
/// In every round, the distance table of every router is reported first (computed from the
/// state of the previous round), then the new state is computed with [`relax`]. After
/// convergence, the routing table of every router is reported. On ties, the lexicographically
/// smallest next hop is chosen.
///
/// The returned [`Convergence`] contains the converged state and the time index at which a
/// subsequent call should continue.
pub fn converge<R: Reporter + ?Sized>(
    routers: &RouterRegistry,
    topology: &Topology,
    prior: Option<DistanceVectors>,
    start_time: usize,
    config: &EngineConfig,
    reporter: &mut R,
) -> Result<Convergence, Error> {
    let routers = routers.sorted();

    let mut prev = match prior {
        None => {
            info!("Cold start with {} routers at t={}", routers.len(), start_time);
            DistanceVectors::fresh(&routers)
        }
        Some(mut state) => {
            let added = state.extend_to(&routers);
            info!("Resume at t={} ({} routers, {} new)", start_time, routers.len(), added);
            state
        }
    };

    let mut t = start_time;
    let mut rounds: usize = 0;

    let converged = loop {
        if let Some(limit) = config.stop_after {
            if rounds >= limit {
                warn!("No convergence after {} rounds (t={})", rounds, t);
                return Err(Error::NoConvergence(rounds));
            }
        }

        for router in routers.iter() {
            reporter.distance_table(&distance_table(&routers, topology, &prev, router, t))?;
        }

        let next = relax(&routers, topology, &prev);
        rounds += 1;

        let changes = next.count_changes(&prev, &routers);
        debug!("Round t={}: {} entries changed", t, changes);
        if changes == 0 {
            break next;
        }

        prev = next;
        t += 1;
    };

    info!("Converged at t={} after {} rounds", t, rounds);

    let routing_tables: Vec<RoutingTable> =
        routers.iter().map(|r| routing_table(&routers, topology, &converged, r)).collect();
    for table in routing_tables.iter() {
        reporter.routing_table(table)?;
    }

    Ok(Convergence { state: converged, next_time: t + 1, rounds, routing_tables })
}

/// Perform a single synchronous round. The new distance of every router `x` to every destination
/// `y` is the minimum over all neighbors `n` of `link(x, n) + prior(n, y)`, or [`INF`] if no
/// neighbor offers a finite path. The distance to itself is always `0`.
pub fn relax(routers: &[&str], topology: &Topology, prior: &DistanceVectors) -> DistanceVectors {
    let mut next = DistanceVectors::fresh(routers);
    for x in routers {
        for y in routers {
            if x == y {
                continue;
            }
            let best = topology
                .neighbors(x)
                .map(|(n, cost)| cost.saturating_add(prior.get(n, y)))
                .fold(INF, Cost::min);
            next.set(x, y, best);
        }
    }
    next
}

/// Build the distance table of `router`, listing the cost to every destination through every
/// other router, based on the `prior` state.
fn distance_table(
    routers: &[&str],
    topology: &Topology,
    prior: &DistanceVectors,
    router: &str,
    time: usize,
) -> DistanceTable {
    let others: Vec<&str> = routers.iter().copied().filter(|r| *r != router).collect();
    let cells = others
        .iter()
        .map(|dest| {
            others
                .iter()
                .map(|hop| {
                    topology
                        .link_cost(router, hop)
                        .unwrap_or(INF)
                        .saturating_add(prior.get(hop, dest))
                        .min(INF)
                })
                .collect()
        })
        .collect();
    DistanceTable {
        router: router.to_string(),
        time,
        others: others.iter().map(|r| r.to_string()).collect(),
        cells,
    }
}

/// Build the final routing table of `router`. The neighbors are scanned in lexicographic order,
/// and only a strictly better candidate replaces the current one.
fn routing_table(
    routers: &[&str],
    topology: &Topology,
    state: &DistanceVectors,
    router: &str,
) -> RoutingTable {
    let entries = routers
        .iter()
        .filter(|dest| **dest != router)
        .map(|dest| {
            let unreachable =
                RouteEntry { destination: dest.to_string(), next_hop: None, cost: None };
            if state.get(router, dest) >= INF {
                return unreachable;
            }
            let mut best: Option<(&str, Cost)> = None;
            for (neighbor, link) in topology.neighbors(router) {
                let cost = link.saturating_add(state.get(neighbor, dest));
                if cost < best.map(|(_, c)| c).unwrap_or(INF) {
                    best = Some((neighbor, cost));
                }
            }
            match best {
                Some((next_hop, cost)) => RouteEntry {
                    destination: dest.to_string(),
                    next_hop: Some(next_hop.to_string()),
                    cost: Some(cost),
                },
                None => unreachable,
            }
        })
        .collect();
    RoutingTable { router: router.to_string(), entries }
}
