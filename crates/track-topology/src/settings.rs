use crate::InputError;
use crate::input::Filter;
use clap::Parser;
use glam::Vec3;
use std::path::PathBuf;
use track_topology_lib::{Config, TopologyError};

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Track Topology - Build a rail track graph with spline handles from a map snapshot
pub struct Settings {
    /// Map snapshot to read (Overpass JSON with node and way elements)
    #[clap(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Where to write the JSON report (stdout when absent)
    #[clap(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Latitude of the projection origin in degrees
    #[clap(long, default_value = "51.115833", allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the projection origin in degrees
    #[clap(long, default_value = "6.218056", allow_negative_numbers = true)]
    pub lon: f64,

    /// Offset added to projected positions (east)
    #[clap(long, default_value = "0.0", allow_negative_numbers = true)]
    pub offset_x: f32,

    /// Offset added to projected positions (up)
    #[clap(long, default_value = "0.0", allow_negative_numbers = true)]
    pub offset_y: f32,

    /// Offset added to projected positions (north)
    #[clap(long, default_value = "0.0", allow_negative_numbers = true)]
    pub offset_z: f32,

    /// Which ways take part in the graph
    #[clap(short, long, value_enum, default_value = "all")]
    pub filter: Filter,

    /// Keep points that are not on any way, as empty nodes
    #[clap(long, default_value = "false")]
    pub keep_isolated: bool,

    /// Pretty-print the report
    #[clap(long, default_value = "false")]
    pub pretty: bool,

    /// Log at debug level when RUST_LOG is not set
    #[clap(short, long, default_value = "false")]
    pub verbose: bool,
}

impl Settings {
    /// Parse the process arguments, exiting with usage on failure
    pub fn from_cli() -> Self {
        match Settings::try_parse() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    /// Graph configuration for these settings
    pub fn config(&self) -> Result<Config, InputError> {
        if !self.lat.is_finite() || self.lat.abs() >= 90.0 {
            return Err(TopologyError::InvalidLatitude { lat: self.lat }.into());
        }
        if !self.lon.is_finite() {
            return Err(TopologyError::InvalidLongitude { lon: self.lon }.into());
        }

        Ok(Config {
            origin_lat: self.lat,
            origin_lon: self.lon,
            origin_offset: Vec3::new(self.offset_x, self.offset_y, self.offset_z),
            ..Config::default()
        })
    }
}
