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

//! Module containing all error types

use crate::netsim::ReportError;
use crate::scenario::InputError;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// The scenario could not be read
    #[error("Input Error: {0}")]
    InputError(#[from] InputError),
    /// A table could not be reported
    #[error("Report Error: {0}")]
    ReportError(#[from] ReportError),
    /// The configured maximum number of rounds was reached before the network converged.
    #[error("The network did not converge within {0} rounds")]
    NoConvergence(usize),
}
