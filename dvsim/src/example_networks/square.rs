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

//! # Square Network

use super::ExampleNetwork;
use crate::netsim::LinkRecord;
use crate::scenario::Scenario;

/// # Square
///
/// ```text
///      1
/// A ------ B
/// |        |
/// | 10     | 1
/// |        |
/// D ------ C
///      1
/// ```
///
/// The update reduces the cost of the link `A -- D` from `10` to `1`.
pub struct Square {}

impl ExampleNetwork for Square {
    fn scenario() -> Scenario {
        Scenario::new(
            vec!["A", "B", "C", "D"],
            vec![
                LinkRecord::new("A", "B", 1),
                LinkRecord::new("B", "C", 1),
                LinkRecord::new("C", "D", 1),
                LinkRecord::new("D", "A", 10),
            ],
            vec![LinkRecord::new("A", "D", 1)],
        )
    }
}
