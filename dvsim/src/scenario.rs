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

//! # Scenario Input
//!
//! Parses the textual description of a scenario. The input consists of three sections:
//!
//! 1. The names of all routers, one per line, terminated by `START`.
//! 2. The initial links `A B cost`, one per line, terminated by `UPDATE`.
//! 3. The link changes `A B cost`, one per line, terminated by `END`. A cost of `-1` withdraws the
//!    link.
//!
//! Leading and trailing whitespace is ignored, as are empty lines. The end of the input terminates
//! every section.
//!
//! ```text
//! X
//! Y
//! Z
//! START
//! X Y 3
//! Y Z 4
//! X Z 9
//! UPDATE
//! X Z 1
//! END
//! ```

use crate::netsim::{LinkRecord, LinkWeight};

use std::io::Read;
use thiserror::Error;

/// Scenario, consisting of the initial routers, the initial links and the link changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scenario {
    /// Routers in order of their appearance
    pub routers: Vec<String>,
    /// Links of the initial topology
    pub links_initial: Vec<LinkRecord>,
    /// Changes applied after the initial topology has converged
    pub links_update: Vec<LinkRecord>,
}

impl Scenario {
    /// Create a new scenario
    pub fn new(
        routers: impl IntoIterator<Item = impl Into<String>>,
        links_initial: Vec<LinkRecord>,
        links_update: Vec<LinkRecord>,
    ) -> Self {
        Self { routers: routers.into_iter().map(|r| r.into()).collect(), links_initial, links_update }
    }

    /// Returns true if the scenario contains any link change.
    pub fn has_update(&self) -> bool {
        !self.links_update.is_empty()
    }
}

/// Read the entire reader and parse the scenario.
pub fn read_scenario(mut reader: impl Read) -> Result<Scenario, InputError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_scenario(&input)
}

/// Parse the scenario from a string.
pub fn parse_scenario(input: &str) -> Result<Scenario, InputError> {
    let mut scenario = Scenario::default();
    let mut section = Section::Routers;

    for (i, line) in input.lines().enumerate() {
        let line_nr = i + 1;
        let line = line.trim();
        section = match section {
            Section::Routers => match line {
                "START" => Section::Initial,
                "" => Section::Routers,
                name => {
                    scenario.routers.push(name.to_string());
                    Section::Routers
                }
            },
            Section::Initial => match line {
                "UPDATE" => Section::Update,
                "" => Section::Initial,
                record => {
                    scenario.links_initial.push(parse_link(record, line_nr)?);
                    Section::Initial
                }
            },
            Section::Update => match line {
                "END" => Section::Done,
                "" => Section::Update,
                record => {
                    scenario.links_update.push(parse_link(record, line_nr)?);
                    Section::Update
                }
            },
            Section::Done => break,
        };
    }

    Ok(scenario)
}

/// Parse a single link record of the form `A B cost`.
fn parse_link(line: &str, line_nr: usize) -> Result<LinkRecord, InputError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(InputError::UnexpectedToken { line: line_nr, content: String::from(line) });
    }
    let raw: i64 =
        fields[2].parse().map_err(|source| InputError::ParseIntError { line: line_nr, source })?;
    let weight =
        LinkWeight::from_raw(raw).ok_or(InputError::NegativeCost { line: line_nr, cost: raw })?;
    Ok(LinkRecord { source: fields[0].to_string(), target: fields[1].to_string(), weight })
}

enum Section {
    Routers,
    Initial,
    Update,
    Done,
}

/// Error while reading a scenario
#[derive(Debug, Error)]
pub enum InputError {
    /// Io Error
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// Unexpected Token
    #[error("Unexpected Token on line {line}: {content}")]
    UnexpectedToken {
        /// Line number (starting at 1)
        line: usize,
        /// Content of the line
        content: String,
    },
    /// ParseIntError
    #[error("Cannot parse the cost on line {line}: {source}")]
    ParseIntError {
        /// Line number (starting at 1)
        line: usize,
        /// Cause
        source: std::num::ParseIntError,
    },
    /// Negative cost which is not the withdrawal sentinel
    #[error("Invalid cost {cost} on line {line}! Only -1 is allowed as negative cost")]
    NegativeCost {
        /// Line number (starting at 1)
        line: usize,
        /// The cost
        cost: i64,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_sections() {
        let input = "X\nY\n\nZ\nSTART\nX Y 3\n  Y Z 4  \n\nX Z 9\nUPDATE\nX Z -1\nW X 2\nEND\n";
        let s = parse_scenario(input).unwrap();
        assert_eq!(s.routers, vec!["X", "Y", "Z"]);
        assert_eq!(
            s.links_initial,
            vec![LinkRecord::new("X", "Y", 3), LinkRecord::new("Y", "Z", 4), LinkRecord::new("X", "Z", 9)]
        );
        assert_eq!(s.links_update, vec![LinkRecord::withdraw("X", "Z"), LinkRecord::new("W", "X", 2)]);
        assert!(s.has_update());
    }

    #[test]
    fn test_parse_without_update() {
        let s = parse_scenario("A\nB\nSTART\nA B 1\nUPDATE\nEND\n").unwrap();
        assert_eq!(s.routers, vec!["A", "B"]);
        assert_eq!(s.links_initial.len(), 1);
        assert!(!s.has_update());
    }

    #[test]
    fn test_parse_truncated_input() {
        let s = parse_scenario("A\nB\nSTART\nA B 1").unwrap();
        assert_eq!(s.links_initial, vec![LinkRecord::new("A", "B", 1)]);
        assert!(!s.has_update());

        let s = parse_scenario("A\nB").unwrap();
        assert_eq!(s.routers, vec!["A", "B"]);
        assert!(s.links_initial.is_empty());
    }

    #[test]
    fn test_ignore_after_end() {
        let s = parse_scenario("A\nSTART\nUPDATE\nA B 1\nEND\nthis is ignored\n").unwrap();
        assert_eq!(s.links_update, vec![LinkRecord::new("A", "B", 1)]);
    }

    #[test]
    fn test_parse_errors() {
        match parse_scenario("A\nB\nSTART\nA B\n") {
            Err(InputError::UnexpectedToken { line: 4, content }) => assert_eq!(content, "A B"),
            r => panic!("unexpected result: {:?}", r),
        }
        match parse_scenario("A\nB\nSTART\nA B x\n") {
            Err(InputError::ParseIntError { line: 4, .. }) => {}
            r => panic!("unexpected result: {:?}", r),
        }
        match parse_scenario("A\nB\nSTART\nUPDATE\nA B -2\n") {
            Err(InputError::NegativeCost { line: 5, cost: -2 }) => {}
            r => panic!("unexpected result: {:?}", r),
        }
    }
}
