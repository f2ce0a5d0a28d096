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

//! # Withdrawal Network

use super::ExampleNetwork;
use crate::netsim::LinkRecord;
use crate::scenario::Scenario;

/// # Withdrawal
///
/// ```text
///      5            1
/// A ------ B   C ------ D
/// ```
///
/// The update withdraws the link `A -- B`. Since there is no alternative path, `A` and `B`
/// lose each other.
pub struct Withdrawal {}

impl ExampleNetwork for Withdrawal {
    fn scenario() -> Scenario {
        Scenario::new(
            vec!["A", "B", "C", "D"],
            vec![LinkRecord::new("A", "B", 5), LinkRecord::new("C", "D", 1)],
            vec![LinkRecord::withdraw("A", "B")],
        )
    }
}
