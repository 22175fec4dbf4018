use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fieldmap_cli::script::{load_script, replay};
use fieldmap_map::MappingSession;
use fieldmap_model::MappingFixture;
use tracing::{debug, info_span};

use crate::cli::{FixtureArgs, ReplayArgs};
use crate::summary::{edges_table, fields_table, print_replay};

pub fn run_fields(args: &FixtureArgs) -> Result<()> {
    let session = open_session(args)?;
    println!("{}", fields_table(session.registry()));
    Ok(())
}

pub fn run_edges(args: &FixtureArgs) -> Result<()> {
    let session = open_session(args)?;
    println!("{}", edges_table(session.registry(), session.edges()));
    Ok(())
}

pub fn run_replay(args: &ReplayArgs) -> Result<()> {
    let _span = info_span!("replay", script = %args.script.display()).entered();
    let mut session = open_session(&args.fixture)?;
    let gestures = load_script(&args.script)?;
    let report = replay(&mut session, &gestures);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize replay report")?;
        println!("{json}");
    } else {
        print_replay(session.registry(), &report);
    }
    Ok(())
}

fn open_session(args: &FixtureArgs) -> Result<MappingSession> {
    let fixture = match &args.fixture {
        Some(path) => load_fixture(path)?,
        None => {
            debug!("using built-in demo fixture");
            MappingFixture::demo()
        }
    };
    MappingSession::from_fixture(&fixture).context("invalid mapping fixture")
}

/// Read a mapping fixture from a JSON file.
pub fn load_fixture(path: &Path) -> Result<MappingFixture> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse fixture {}", path.display()))
}
