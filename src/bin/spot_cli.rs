use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use spot_engine::atmosphere::terminal_velocity;
use spot_engine::constants::DRAG_REFERENCE_ALTITUDE;
use spot_engine::units::{bearing_deg, UnitSystem};
use spot_engine::{Circle, Spot, SpotCalculator, SpotConfig, SpotInput, Wind};

#[derive(Parser)]
#[command(name = "spot-cli")]
#[command(author = "Spot Engine Team")]
#[command(version = "0.1.0")]
#[command(about = "Jump-run spot calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the spot for a wind profile
    Calculate {
        /// JSON file with a full spot input (SI units, radians)
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Wind sample as ALTITUDE:SPEED:DIRECTION (direction in degrees, blowing from)
        #[arg(short = 'w', long = "wind", value_parser = parse_wind_arg)]
        winds: Vec<(f64, f64, f64)>,

        /// Units for flag values and table output
        #[arg(short = 'u', long, default_value = "si")]
        units: Units,

        /// Fixed line of flight (degrees)
        #[arg(long)]
        track: Option<f64>,

        /// Fixed offset right of track (m, or NM in aviation units)
        #[arg(long)]
        offset: Option<f64>,

        /// Allowed landing direction (degrees), may be repeated
        #[arg(long = "landing-direction")]
        landing_directions: Vec<f64>,

        /// Exit altitude (m, or ft in aviation units)
        #[arg(long)]
        exit_altitude: Option<f64>,

        /// Altitude where the canopy is open (m, or ft in aviation units)
        #[arg(long)]
        deployment_altitude: Option<f64>,

        /// Pattern entry altitude (m, or ft in aviation units)
        #[arg(long)]
        final_altitude: Option<f64>,

        /// Jump-run true airspeed (m/s, or kt in aviation units)
        #[arg(long)]
        airspeed: Option<f64>,

        /// Canopy horizontal speed (m/s)
        #[arg(long)]
        canopy_speed: Option<f64>,

        /// Canopy descent rate (m/s)
        #[arg(long)]
        descent_rate: Option<f64>,

        /// Seconds from green light to first exit
        #[arg(long)]
        green_light_time: Option<f64>,

        /// Seconds of red light before the green light
        #[arg(long)]
        red_light_time: Option<f64>,

        /// Separation between groups (m)
        #[arg(long)]
        group_separation: Option<f64>,

        /// Minimum seconds between groups
        #[arg(long)]
        min_group_interval: Option<f64>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Print the default configuration as JSON
    Defaults,

    /// Display engine information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Units {
    Si,
    Aviation,
}

impl From<Units> for UnitSystem {
    fn from(units: Units) -> Self {
        match units {
            Units::Si => UnitSystem::Si,
            Units::Aviation => UnitSystem::Aviation,
        }
    }
}

/// JSON view of a spot with non-finite spacing spelled out
#[derive(Debug, Serialize)]
struct SpotReport<'a> {
    #[serde(flatten)]
    spot: &'a Spot,
    groups_can_separate: bool,
}

fn parse_wind_arg(s: &str) -> Result<(f64, f64, f64), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(format!("expected ALTITUDE:SPEED:DIRECTION, got '{s}'"));
    }
    let mut values = [0.0; 3];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid number '{part}': {e}"))?;
    }
    Ok((values[0], values[1], values[2]))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate {
            input,
            winds,
            units,
            track,
            offset,
            landing_directions,
            exit_altitude,
            deployment_altitude,
            final_altitude,
            airspeed,
            canopy_speed,
            descent_rate,
            green_light_time,
            red_light_time,
            group_separation,
            min_group_interval,
            output,
        } => {
            let units = UnitSystem::from(units);

            let mut spot_input = match input {
                Some(path) => {
                    info!(path = %path.display(), "reading spot input");
                    serde_json::from_str::<SpotInput>(&fs::read_to_string(&path)?)?
                }
                None => SpotInput::default(),
            };

            // Flag values are converted to SI here; the engine only sees SI
            spot_input.winds.extend(winds.into_iter().map(|(altitude, speed, direction)| {
                Wind::new(
                    units.altitude_to_m(altitude),
                    units.speed_to_mps(speed),
                    direction.to_radians(),
                )
            }));
            if let Some(track) = track {
                spot_input.fixed_track = Some(track.to_radians());
            }
            if let Some(offset) = offset {
                spot_input.fixed_transverse_offset = Some(units.distance_to_m(offset));
            }
            if !landing_directions.is_empty() {
                spot_input.allowed_landing_directions =
                    Some(landing_directions.iter().map(|d| d.to_radians()).collect());
            }

            let config = &mut spot_input.config;
            if let Some(v) = exit_altitude {
                config.exit_altitude = units.altitude_to_m(v);
            }
            if let Some(v) = deployment_altitude {
                config.deployment_altitude = units.altitude_to_m(v);
            }
            if let Some(v) = final_altitude {
                config.final_altitude = units.altitude_to_m(v);
            }
            if let Some(v) = airspeed {
                config.jump_run_airspeed = units.speed_to_mps(v);
            }
            if let Some(v) = canopy_speed {
                config.horizontal_canopy_speed = v;
            }
            if let Some(v) = descent_rate {
                config.vertical_canopy_speed = v;
            }
            if let Some(v) = green_light_time {
                config.green_light_time = v;
            }
            if let Some(v) = red_light_time {
                config.red_light_time = v;
            }
            if let Some(v) = group_separation {
                config.meters_between_groups = v;
            }
            if let Some(v) = min_group_interval {
                config.min_time_between_groups = v;
            }

            let spot = SpotCalculator::new(spot_input)?.calculate()?;
            display_spot(&spot, output, units)?;
        },

        Commands::Defaults => {
            println!("{}", serde_json::to_string_pretty(&SpotConfig::default())?);
        },

        Commands::Info => {
            let vt = terminal_velocity(DRAG_REFERENCE_ALTITUDE);
            println!("╔════════════════════════════════════════╗");
            println!("║         SPOT ENGINE v0.1.0             ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Jump-run spot calculation from a       ║");
            println!("║ wind profile.                          ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Polar wind interpolation             ║");
            println!("║ • Freefall drift and forward throw     ║");
            println!("║ • Canopy reachability circles          ║");
            println!("║ • Red light and group spacing          ║");
            println!("╠════════════════════════════════════════╣");
            println!(
                "║ Terminal velocity @ {:>4.0} m: {:>5.1} km/h ║",
                DRAG_REFERENCE_ALTITUDE,
                vt * 3.6
            );
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn circle_row(label: &str, circle: &Circle, units: UnitSystem) -> String {
    format!(
        "║ {:<10} x {:>8.2} y {:>8.2} r {:>8.2} {:<2} ║",
        label,
        units.distance_from_m(circle.x),
        units.distance_from_m(circle.y),
        units.distance_from_m(circle.radius),
        units.distance_label(),
    )
}

fn display_spot(
    spot: &Spot,
    format: OutputFormat,
    units: UnitSystem,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            let report = SpotReport {
                spot,
                groups_can_separate: spot.time_between_groups.is_finite(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        },

        OutputFormat::Table => {
            let dist = units.distance_label();
            println!("╔════════════════════════════════════════════════╗");
            println!("║                  SPOT RESULTS                  ║");
            println!("╠════════════════════════════════════════════════╣");
            println!("║ Line of Flight:     {:>10.0} °               ║", bearing_deg(spot.track));
            println!(
                "║ Distance:           {:>10.2} {:<3}             ║",
                units.distance_from_m(spot.longitudinal_offset),
                dist
            );
            println!(
                "║ Off Track:          {:>10.2} {:<3}             ║",
                units.distance_from_m(spot.transverse_offset),
                dist
            );
            println!(
                "║ Landing Direction:  {:>10.0} °               ║",
                bearing_deg(spot.landing_direction)
            );
            println!("╠════════════════════════════════════════════════╣");
            println!(
                "║ Red Light Bearing:  {:>10.0} °               ║",
                bearing_deg(spot.red_light.bearing)
            );
            println!(
                "║ Red Light Distance: {:>10.2} {:<3}             ║",
                units.distance_from_m(spot.red_light.distance),
                dist
            );
            if spot.time_between_groups.is_finite() {
                println!(
                    "║ Between Groups:     {:>10.0} s               ║",
                    spot.time_between_groups
                );
            } else {
                println!("║ Between Groups:            n/a                 ║");
            }
            println!("║ Jump Run Duration:  {:>10.1} s               ║", spot.jump_run_duration);
            println!("╠════════════════════════════════════════════════╣");
            println!("{}", circle_row("Deployment", &spot.deployment_circle, units));
            println!("{}", circle_row("Exit", &spot.exit_circle, units));
            println!("╚════════════════════════════════════════════════╝");
        },
    }

    Ok(())
}
