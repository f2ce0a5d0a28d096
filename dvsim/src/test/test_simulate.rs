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

//! Test the simulation of entire scenarios

use crate::example_networks::*;
use crate::netsim::{EngineConfig, LinkRecord, RecordingReporter, INF};
use crate::scenario::Scenario;
use crate::{simulate, Error};

fn run(scenario: &Scenario) -> (crate::Simulation, RecordingReporter) {
    let _ = pretty_env_logger::try_init();
    let mut reporter = RecordingReporter::new();
    let result = simulate(scenario, &EngineConfig::default(), &mut reporter).unwrap();
    (result, reporter)
}

fn routes(result: &crate::netsim::Convergence, router: &str) -> Vec<String> {
    result.routing_table(router).unwrap().entries.iter().map(|e| e.to_string()).collect()
}

#[test]
fn test_triangle() {
    let (result, reporter) = run(&Triangle::scenario());

    assert_eq!(result.initial.next_time, 3);
    assert_eq!(routes(&result.initial, "X"), vec!["Y,Y,3", "Z,Y,7"]);

    let update = result.update.as_ref().unwrap();
    assert_eq!(update.next_time, 5);
    assert_eq!(routes(update, "X"), vec!["Y,Y,3", "Z,Z,1"]);
    assert_eq!(routes(update, "Y"), vec!["X,X,3", "Z,X,4"]);
    assert_eq!(routes(update, "Z"), vec!["X,X,1", "Y,X,4"]);
    assert_eq!(result.last(), update);

    // round numbering continues after the update
    assert_eq!(reporter.rounds(), vec![0, 1, 2, 3, 4]);
    assert_eq!(reporter.routing_tables.len(), 6);

    // the first round after the update uses the old state on the new topology
    let x3 = reporter.round(3)[0];
    assert_eq!(x3.cost_through("Z", "Z"), Some(1));
    assert_eq!(x3.cost_through("Y", "Z"), Some(5));
}

#[test]
fn test_without_update() {
    let mut scenario = Triangle::scenario();
    scenario.links_update.clear();
    let (result, reporter) = run(&scenario);
    assert!(result.update.is_none());
    assert_eq!(result.last(), &result.initial);
    assert_eq!(reporter.rounds(), vec![0, 1, 2]);
}

#[test]
fn test_withdrawal() {
    let (result, _) = run(&Withdrawal::scenario());
    assert_eq!(result.initial.state.get("A", "B"), 5);
    let update = result.update.as_ref().unwrap();
    assert_eq!(update.state.get("A", "B"), INF);
    assert_eq!(update.state.get("B", "A"), INF);
    assert_eq!(routes(update, "A"), vec!["B,INF,INF", "C,INF,INF", "D,INF,INF"]);
    assert_eq!(routes(update, "C"), vec!["A,INF,INF", "B,INF,INF", "D,D,1"]);
    assert_eq!(update.next_time, 4);
}

#[test]
fn test_growing() {
    let (result, reporter) = run(&Growing::scenario());
    assert_eq!(result.initial.routing_tables.len(), 2);

    let update = result.update.as_ref().unwrap();
    assert_eq!(update.routing_tables.len(), 3);
    assert_eq!(routes(update, "A"), vec!["B,B,2", "C,C,1"]);
    assert_eq!(routes(update, "B"), vec!["A,A,2", "C,A,3"]);
    assert_eq!(routes(update, "C"), vec!["A,A,1", "B,A,3"]);

    // the new router shows up in the tables of the resumed rounds
    let first_update_round = result.initial.next_time;
    assert_eq!(reporter.round(first_update_round).len(), 3);
}

#[test]
fn test_initial_link_to_unknown_router() {
    let scenario = Scenario::new(
        vec!["A"],
        vec![LinkRecord::new("A", "B", 4)],
        vec![LinkRecord::withdraw("A", "Ghost")],
    );
    let (result, _) = run(&scenario);
    assert_eq!(routes(&result.initial, "A"), vec!["B,B,4"]);
    assert_eq!(routes(&result.initial, "B"), vec!["A,A,4"]);

    // withdrawals never introduce new routers
    let update = result.update.as_ref().unwrap();
    assert!(update.routing_table("Ghost").is_none());
    assert_eq!(routes(update, "A"), vec!["B,B,4"]);
}

#[test]
fn test_stop_after_propagates() {
    let mut reporter = RecordingReporter::new();
    let config = EngineConfig { stop_after: Some(1) };
    match simulate(&Square::scenario(), &config, &mut reporter) {
        Err(Error::NoConvergence(1)) => {}
        r => panic!("unexpected result: {:?}", r),
    }
}
