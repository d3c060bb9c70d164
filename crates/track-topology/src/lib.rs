//! Track Topology - command line host around `track-topology-lib`
//!
//! Loads a map snapshot, filters and projects it, builds and classifies the
//! track graph and writes a JSON report.

pub mod input;
pub mod logging;
pub mod output;
pub mod settings;

pub use input::{Filter, MapData, Snapshot};
pub use output::Report;
pub use settings::Settings;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use track_topology_lib::{Projector, TopologyError, TrackGraph};

/// Error types for the command line tool
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Build a graph from a parsed snapshot
pub fn build_graph(snapshot: Snapshot, settings: &Settings) -> Result<TrackGraph, InputError> {
    let config = settings.config()?;
    let projector = Projector::from_config(&config);
    let map = snapshot.into_map(settings.filter, &projector, settings.keep_isolated);

    let mut graph = TrackGraph::build(&map.points, &map.ways, config);
    if settings.keep_isolated {
        for point in map.points.values() {
            graph.admit(point);
        }
        if graph.needs_classification() {
            graph.classify();
        }
    }

    Ok(graph)
}

/// Run the whole pipeline for `settings`
pub fn run(settings: &Settings) -> Result<(), InputError> {
    profiling::scope!("run");
    logging::log_version_info();

    let start = std::time::Instant::now();
    let snapshot = Snapshot::load(&settings.input)?;
    tracing::info!(
        "Loaded {} elements from {}",
        snapshot.len(),
        settings.input.display()
    );

    let graph = build_graph(snapshot, settings)?;

    let info = graph.info();
    tracing::info!(
        "Ways: {} | Skipped ways: {} ({} short) | Nodes: {} | Edges: {} | Built in {:.3}s",
        info.way_count,
        info.skipped_ways,
        info.short_ways,
        info.node_count,
        info.edge_count,
        start.elapsed().as_secs_f64()
    );
    tracing::info!(
        "Ends: {} | Connected: {} | Switches: {} ({}L/{}R) | Crosses: {} | Over 4: {} | Empty: {}",
        info.end_count,
        info.connected_count,
        info.switch_count,
        info.left_switches,
        info.right_switches,
        info.cross_count,
        info.over4_count,
        info.empty_count
    );
    for anomaly in graph.diagnostics().anomalies() {
        tracing::warn!("{anomaly}");
    }

    let report = Report::new(&graph);
    match &settings.output {
        Some(path) => {
            let io_error = |source| InputError::Io {
                path: path.clone(),
                source,
            };
            let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
            report.write(&mut writer, settings.pretty)?;
            writer.flush().map_err(io_error)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            report.write(&mut stdout, settings.pretty)?;
            writeln!(stdout).map_err(|source| InputError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        }
    }

    Ok(())
}
