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

//! # Triangle Network

use super::ExampleNetwork;
use crate::netsim::LinkRecord;
use crate::scenario::Scenario;

/// # Triangle
///
/// ```text
///      3       4
/// X ------ Y ------ Z
///  \_______________/
///          9
/// ```
///
/// The direct link between `X` and `Z` is more expensive than the path over `Y`. The update
/// reduces its cost to `1`, after which `Y` reaches `Z` at equal cost directly or over `X`.
pub struct Triangle {}

impl ExampleNetwork for Triangle {
    fn scenario() -> Scenario {
        Scenario::new(
            vec!["X", "Y", "Z"],
            vec![
                LinkRecord::new("X", "Y", 3),
                LinkRecord::new("Y", "Z", 4),
                LinkRecord::new("X", "Z", 9),
            ],
            vec![LinkRecord::new("X", "Z", 1)],
        )
    }
}
