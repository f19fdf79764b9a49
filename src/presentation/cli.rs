// Command line arguments
use crate::domain::person::PersonId;
use crate::infrastructure::chart_renderer::OutputFormat;
use crate::infrastructure::config::DEFAULT_CONFIG_PATH;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "hockeystats")]
#[command(about = "Chart cumulative NHL player stats across a season", long_about = None)]
pub struct Cli {
    /// The stat to measure (i.e. points, goals, PPG, plusminus)
    #[arg(long, default_value = "points")]
    pub stat: String,

    /// Output file name without extension, i.e. 'top10_points'
    #[arg(short = 'o', long, default_value = "leaders")]
    pub output: String,

    /// The file format, svg or png
    #[arg(long, default_value = "svg")]
    pub format: String,

    /// Add a team's roster to the chart
    #[arg(long, value_name = "ID")]
    pub team: Option<u32>,

    /// Settings file (optional)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Print all franchises instead of drawing a chart
    #[arg(long)]
    pub franchises: bool,

    /// Print one franchise instead of drawing a chart
    #[arg(long, value_name = "ID", conflicts_with = "franchises")]
    pub franchise: Option<u32>,

    /// Player ids to chart
    pub players: Vec<PersonId>,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_name(&self.format)
    }

    pub fn wants_franchises(&self) -> bool {
        self.franchises || self.franchise.is_some()
    }
}
