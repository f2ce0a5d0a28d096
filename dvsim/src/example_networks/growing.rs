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

//! # Growing Network

use super::ExampleNetwork;
use crate::netsim::LinkRecord;
use crate::scenario::Scenario;

/// # Growing
///
/// Initially, only `A` and `B` are connected by a link of cost `2`. The update adds the router
/// `C`, connected to `B` with cost `3` and to `A` with cost `1`.
///
/// ```text
///      2
/// A ------ B
///  \       |
///   \ 1    | 3
///    \     |
///     `--- C
/// ```
pub struct Growing {}

impl ExampleNetwork for Growing {
    fn scenario() -> Scenario {
        Scenario::new(
            vec!["A", "B"],
            vec![LinkRecord::new("A", "B", 2)],
            vec![LinkRecord::new("B", "C", 3), LinkRecord::new("C", "A", 1)],
        )
    }
}
