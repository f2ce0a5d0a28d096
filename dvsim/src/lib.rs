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

#![deny(missing_docs)]

//! # DVSim: Distance Vector Routing Simulator
//! This is a library for simulating the distance vector routing protocol on a network of routers
//! connected by weighted, undirected links. All routers exchange their distance vectors in
//! synchronous rounds, until no router changes its distance to any destination. After the network
//! has converged, a batch of link changes can be applied, and the network re-converges starting
//! from the previously converged state.
//!
//! ## Structure
//!
//! This library is structured in the following way:
//!
//! - **[`NetSim`](netsim)**: The [topology store](netsim::Topology) together with the
//!   [router registry](netsim::RouterRegistry), and the [convergence engine](netsim::converge).
//!   All tables produced by the engine are handed to a [`Reporter`](netsim::Reporter), which
//!   either prints them as text, or keeps them in memory.
//!
//! - **[`Scenario`](scenario)**: Parser for the textual description of a scenario (the routers,
//!   the initial links, and the link changes).
//!
//! - **[`ExampleNetworks`](example_networks)**: Collection of prepared scenarios.
//!
//! ## Usage
//!
//! ```
//! use dvsim::netsim::{EngineConfig, TextReporter};
//! use dvsim::scenario::parse_scenario;
//! use dvsim::{simulate, Error};
//!
//! fn main() -> Result<(), Error> {
//!     let scenario = parse_scenario("X\nY\nZ\nSTART\nX Y 3\nY Z 4\nX Z 9\nUPDATE\nX Z 1\nEND\n")?;
//!
//!     let mut reporter = TextReporter::new(Vec::new());
//!     let result = simulate(&scenario, &EngineConfig::default(), &mut reporter)?;
//!
//!     let entry = result.last().routing_table("X").unwrap().get("Z").unwrap();
//!     assert_eq!(entry.to_string(), "Z,Z,1");
//!
//!     let text = String::from_utf8(reporter.into_inner()?).unwrap();
//!     assert!(text.starts_with("Distance Table of router X at t=0:"));
//!
//!     Ok(())
//! }
//! ```
// test modules
pub mod example_networks;
mod test;

mod error;
pub mod netsim;
pub mod scenario;

mod simulate;
pub use simulate::{simulate, Simulation};

pub use error::Error;
