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

//! # DVSim
//! Wrapper function to simulate an entire scenario: the initial convergence, and the
//! re-convergence after the link changes.

use crate::netsim::{converge, Convergence, EngineConfig, Reporter, RouterRegistry, Topology};
use crate::scenario::Scenario;
use crate::Error;

use log::*;

/// Result of simulating a scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    /// Convergence on the initial topology
    pub initial: Convergence,
    /// Re-convergence after the link changes, if the scenario contains any.
    pub update: Option<Convergence>,
}

impl Simulation {
    /// Get the last convergence result (after the update if present, or the initial one).
    pub fn last(&self) -> &Convergence {
        self.update.as_ref().unwrap_or(&self.initial)
    }
}

/// # Simulate a Scenario
///
/// This is the main function to interact with the system.
///
/// 1. The initial topology is built from the initial links, and the network converges from
///    scratch.
/// 2. If the scenario contains link changes, all new routers of the changes are admitted, the
///    topology is rebuilt from the initial links followed by the changes, and the network
///    re-converges starting from the previously converged state. The round numbering continues
///    where the initial convergence stopped.
///
/// All tables are reported to the `reporter`.
///
/// ## Usage
///
/// ```
/// use dvsim::netsim::{EngineConfig, RecordingReporter};
/// use dvsim::example_networks::*;
/// use dvsim::{simulate, Error};
///
/// fn main() -> Result<(), Error> {
///     let scenario = Triangle::scenario();
///     let mut reporter = RecordingReporter::new();
///
///     let result = simulate(&scenario, &EngineConfig::default(), &mut reporter)?;
///     assert!(result.update.is_some());
///
///     Ok(())
/// }
/// ```
pub fn simulate<R: Reporter + ?Sized>(
    scenario: &Scenario,
    config: &EngineConfig,
    reporter: &mut R,
) -> Result<Simulation, Error> {
    let mut routers: RouterRegistry = scenario.routers.iter().collect();
    routers.admit_links(scenario.links_initial.iter());

    info!("Initial convergence");
    let topo = Topology::from_links(&routers, scenario.links_initial.iter());
    let initial = converge(&routers, &topo, None, 0, config, reporter)?;

    let update = if scenario.has_update() {
        info!("Applying {} link changes", scenario.links_update.len());
        routers.admit_links(scenario.links_update.iter());
        let topo = Topology::from_links(
            &routers,
            scenario.links_initial.iter().chain(scenario.links_update.iter()),
        );
        Some(converge(
            &routers,
            &topo,
            Some(initial.state.clone()),
            initial.next_time,
            config,
            reporter,
        )?)
    } else {
        None
    };

    Ok(Simulation { initial, update })
}
