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

//! # Reporters and printer functions
//! Module containing the [`Reporter`] trait, through which the convergence engine hands out all
//! distance and routing tables, together with a plain-text reporter and an in-memory one.

use crate::netsim::types::{fmt_cost, DistanceTable, RoutingTable};

use itertools::Itertools;
use std::io::Write;
use thiserror::Error;

/// Error while reporting a table
#[derive(Debug, Error)]
pub enum ReportError {
    /// Io Error
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sink for all tables produced during convergence.
pub trait Reporter {
    /// Report the distance table of a single router at a single round.
    fn distance_table(&mut self, table: &DistanceTable) -> Result<(), ReportError>;

    /// Report the final routing table of a single router.
    fn routing_table(&mut self, table: &RoutingTable) -> Result<(), ReportError>;
}

/// Get a vector of strings, which represent the distance table. The first string is the title,
/// followed by the header with all next hops, and one line for every destination. Unreachable
/// cells are printed as `INF`.
pub fn distance_table(table: &DistanceTable) -> Vec<String> {
    let mut result = Vec::with_capacity(table.others.len() + 2);
    result.push(format!("Distance Table of router {} at t={}:", table.router, table.time));
    result.push(format!("     {}", table.others.iter().join("   ")));
    for (dest, row) in table.others.iter().zip(table.cells.iter()) {
        result.push(format!("{}   {}", dest, row.iter().map(|c| fmt_cost(*c)).join("   ")));
    }
    result
}

/// Get a vector of strings, which represent the routing table. Every line has the form
/// `destination,next_hop,cost`, or `destination,INF,INF` for unreachable destinations.
pub fn routing_table(table: &RoutingTable) -> Vec<String> {
    let mut result = Vec::with_capacity(table.entries.len() + 1);
    result.push(format!("Routing Table of router {}:", table.router));
    result.extend(table.entries.iter().map(|e| e.to_string()));
    result
}

/// Reporter writing all tables as plain text. Every table is followed by an empty line.
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    /// Create a new reporter writing into `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W, ReportError> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_lines(&mut self, lines: Vec<String>) -> Result<(), ReportError> {
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn distance_table(&mut self, table: &DistanceTable) -> Result<(), ReportError> {
        self.write_lines(distance_table(table))
    }

    fn routing_table(&mut self, table: &RoutingTable) -> Result<(), ReportError> {
        self.write_lines(routing_table(table))
    }
}

/// Reporter keeping all tables in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    /// All distance tables, in the order in which they were reported
    pub distance_tables: Vec<DistanceTable>,
    /// All routing tables, in the order in which they were reported
    pub routing_tables: Vec<RoutingTable>,
}

impl RecordingReporter {
    /// Create an empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all distance tables reported at the given round.
    pub fn round(&self, time: usize) -> Vec<&DistanceTable> {
        self.distance_tables.iter().filter(|t| t.time == time).collect()
    }

    /// Get all distinct rounds, in the order in which they were reported.
    pub fn rounds(&self) -> Vec<usize> {
        self.distance_tables.iter().map(|t| t.time).dedup().collect()
    }
}

impl Reporter for RecordingReporter {
    fn distance_table(&mut self, table: &DistanceTable) -> Result<(), ReportError> {
        self.distance_tables.push(table.clone());
        Ok(())
    }

    fn routing_table(&mut self, table: &RoutingTable) -> Result<(), ReportError> {
        self.routing_tables.push(table.clone());
        Ok(())
    }
}
