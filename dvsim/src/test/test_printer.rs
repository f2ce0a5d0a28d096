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

//! Test the formatting of distance and routing tables

use crate::netsim::printer::{distance_table, routing_table};
use crate::netsim::{
    fmt_cost, DistanceTable, RecordingReporter, Reporter, RouteEntry, RoutingTable, TextReporter,
    INF,
};

fn example_distance_table() -> DistanceTable {
    DistanceTable {
        router: String::from("A"),
        time: 4,
        others: vec![String::from("B"), String::from("C")],
        cells: vec![vec![1, INF], vec![12, 3]],
    }
}

fn example_routing_table() -> RoutingTable {
    RoutingTable {
        router: String::from("A"),
        entries: vec![
            RouteEntry {
                destination: String::from("B"),
                next_hop: Some(String::from("B")),
                cost: Some(1),
            },
            RouteEntry { destination: String::from("C"), next_hop: None, cost: None },
        ],
    }
}

#[test]
fn test_fmt_cost() {
    assert_eq!(fmt_cost(0), "0");
    assert_eq!(fmt_cost(42), "42");
    assert_eq!(fmt_cost(INF - 1), "999999999");
    assert_eq!(fmt_cost(INF), "INF");
    assert_eq!(fmt_cost(INF + 5), "INF");
}

#[test]
fn test_distance_table_lines() {
    assert_eq!(
        distance_table(&example_distance_table()),
        vec!["Distance Table of router A at t=4:", "     B   C", "B   1   INF", "C   12   3"]
    );
}

#[test]
fn test_routing_table_lines() {
    assert_eq!(
        routing_table(&example_routing_table()),
        vec!["Routing Table of router A:", "B,B,1", "C,INF,INF"]
    );
}

#[test]
fn test_text_reporter() {
    let mut reporter = TextReporter::new(Vec::new());
    reporter.distance_table(&example_distance_table()).unwrap();
    reporter.routing_table(&example_routing_table()).unwrap();
    let out = String::from_utf8(reporter.into_inner().unwrap()).unwrap();
    assert_eq!(
        out,
        "Distance Table of router A at t=4:\n     B   C\nB   1   INF\nC   12   3\n\n\
         Routing Table of router A:\nB,B,1\nC,INF,INF\n\n"
    );
}

#[test]
fn test_recording_reporter() {
    let mut reporter = RecordingReporter::new();
    let mut table = example_distance_table();
    reporter.distance_table(&table).unwrap();
    reporter.distance_table(&table).unwrap();
    table.time = 5;
    reporter.distance_table(&table).unwrap();
    reporter.routing_table(&example_routing_table()).unwrap();

    assert_eq!(reporter.rounds(), vec![4, 5]);
    assert_eq!(reporter.round(4).len(), 2);
    assert_eq!(reporter.round(5).len(), 1);
    assert!(reporter.round(6).is_empty());
    assert_eq!(reporter.routing_tables, vec![example_routing_table()]);
}
