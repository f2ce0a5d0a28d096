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

use dvsim::netsim::{EngineConfig, TextReporter};
use dvsim::scenario::{read_scenario, Scenario};
use dvsim::simulate;

use clap::{Args, Parser, Subcommand};
use log::*;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

mod example_topologies;
use example_topologies::*;

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the env logger
    pretty_env_logger::init();

    // run clap
    let args = CommandLineArguments::parse();

    let (scenario, output) = match args.cmd {
        MainCommand::Run { input, output } => {
            let scenario: Scenario = match input {
                Some(path) => {
                    info!("Reading scenario from {}", path.display());
                    read_scenario(File::open(path)?)?
                }
                None => read_scenario(io::stdin().lock())?,
            };
            (scenario, output)
        }
        MainCommand::Example { topology, output } => {
            info!("Using the example network {}", topology);
            (get_scenario(topology), output)
        }
    };

    info!(
        "Scenario has {} routers, {} links and {} link changes",
        scenario.routers.len(),
        scenario.links_initial.len(),
        scenario.links_update.len()
    );

    let out: Box<dyn Write> = match output.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    let mut reporter = TextReporter::new(out);

    let config = EngineConfig { stop_after: output.stop_after };
    let result = simulate(&scenario, &config, &mut reporter)?;
    reporter.into_inner()?;

    info!(
        "Done: {} rounds initially, {} rounds after the update",
        result.initial.rounds,
        result.update.as_ref().map(|u| u.rounds).unwrap_or(0)
    );

    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "dvsim", author = "Tibor Schneider", about = "Distance Vector Routing Simulator")]
struct CommandLineArguments {
    /// Action to perform
    #[command(subcommand)]
    cmd: MainCommand,
}

#[derive(Subcommand, Debug)]
enum MainCommand {
    /// Simulate the scenario read from a file (or from stdin)
    #[command(name = "run")]
    Run {
        /// Scenario file. If omitted, the scenario is read from stdin.
        input: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArguments,
    },
    /// Simulate one of the prepared example networks
    #[command(name = "example")]
    Example {
        /// Example network to simulate
        #[arg(value_enum)]
        topology: Topology,
        #[command(flatten)]
        output: OutputArguments,
    },
}

#[derive(Args, Debug)]
struct OutputArguments {
    /// Write all tables into this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
    /// Abort if the network has not converged after this many rounds
    #[arg(short = 's', long)]
    stop_after: Option<usize>,
}
