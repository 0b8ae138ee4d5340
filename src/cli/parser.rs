use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkoutLog
#[derive(Parser)]
#[command(
    name = "rworkoutlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log running and cycling workouts on a map and keep them across sessions",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration, optionally saving the home location
    Init {
        #[arg(long, requires = "lng", allow_negative_numbers = true, help = "Home latitude")]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_negative_numbers = true, help = "Home longitude")]
        lng: Option<f64>,
    },

    /// Print the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Pin a new workout on the map
    Add {
        /// Workout type: running (r) or cycling (c)
        kind: String,

        #[arg(long, allow_negative_numbers = true, help = "Latitude of the map click")]
        lat: f64,

        #[arg(long, allow_negative_numbers = true, help = "Longitude of the map click")]
        lng: f64,

        #[arg(long, allow_hyphen_values = true, help = "Distance in km")]
        distance: String,

        #[arg(long, allow_hyphen_values = true, help = "Duration in minutes")]
        duration: String,

        #[arg(long, allow_hyphen_values = true, help = "Cadence in steps/min (running)")]
        cadence: Option<String>,

        #[arg(long, allow_hyphen_values = true, help = "Elevation gain in m (cycling)")]
        elevation: Option<String>,
    },

    /// List workouts in creation order
    List {
        #[arg(long = "markers", help = "Also print the map markers")]
        markers: bool,
    },

    /// Center the map on a workout
    Show {
        /// Workout id as shown by `list`
        id: String,
    },

    /// Remove every workout
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
