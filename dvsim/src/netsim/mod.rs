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

#![deny(missing_docs, missing_debug_implementations)]

//! # NetSim
//!
//! This is a library for simulating the distance vector routing protocol on a network of routers
//! connected by weighted, undirected links.
//!
//! ## Example usage
//!
//! The following example builds the triangle `X -- Y -- Z -- X`, where the direct link between
//! `X` and `Z` is more expensive than the detour over `Y`.
//!
//! ```rust
//! use dvsim::netsim::{converge, EngineConfig, LinkRecord, RecordingReporter, RouterRegistry, Topology};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let routers: RouterRegistry = vec!["X", "Y", "Z"].into_iter().collect();
//!     let links = vec![
//!         LinkRecord::new("X", "Y", 3),
//!         LinkRecord::new("Y", "Z", 4),
//!         LinkRecord::new("X", "Z", 9),
//!     ];
//!     let topo = Topology::from_links(&routers, links.iter());
//!
//!     let mut reporter = RecordingReporter::new();
//!     let result = converge(&routers, &topo, None, 0, &EngineConfig::default(), &mut reporter)?;
//!
//!     // X reaches Z over Y
//!     let entry = result.routing_table("X").unwrap().get("Z").unwrap();
//!     assert_eq!(entry.to_string(), "Z,Y,7");
//!     assert_eq!(result.next_time, 3);
//!
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod printer;
pub mod topology;
pub(crate) mod types;

pub use engine::{converge, relax, Convergence, EngineConfig};
pub use printer::{RecordingReporter, ReportError, Reporter, TextReporter};
pub use topology::{RouterRegistry, Topology};
pub use types::{
    fmt_cost, Cost, DistanceTable, DistanceVectors, LinkRecord, LinkWeight, RouteEntry,
    RoutingTable, INF, WITHDRAW_SENTINEL,
};
