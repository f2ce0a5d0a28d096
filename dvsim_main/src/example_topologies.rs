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

use dvsim::example_networks::*;
use dvsim::scenario::Scenario;
use std::fmt;

use clap::ValueEnum;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Topology {
    Triangle,
    Square,
    Withdrawal,
    Growing,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Topology::Triangle => write!(f, "Triangle"),
            Topology::Square => write!(f, "Square"),
            Topology::Withdrawal => write!(f, "Withdrawal"),
            Topology::Growing => write!(f, "Growing"),
        }
    }
}

pub fn get_scenario(topo: Topology) -> Scenario {
    match topo {
        Topology::Triangle => Triangle::scenario(),
        Topology::Square => Square::scenario(),
        Topology::Withdrawal => Withdrawal::scenario(),
        Topology::Growing => Growing::scenario(),
    }
}
