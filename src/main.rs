use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};

use takeoff_sim::config::{load_scenario, Scenario};
use takeoff_sim::io::{csv, json};
use takeoff_sim::performance::required_thrust;
use takeoff_sim::physics::aerodynamics::force_profile;
use takeoff_sim::sweep::{linspace, sweep, SweepParameter};
use takeoff_sim::takeoff::DEFAULT_CROSS_CHECK_TOLERANCE;
use takeoff_sim::{
    analyze, presets, GroundRollMethod, LiftoffSpeed, ResultStatus, TakeoffAnalysis, TakeoffResult,
};

#[derive(Parser)]
#[command(author, version, about = "Takeoff field length: ground roll, obstacle clearance, total")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze one configuration
    Run {
        #[command(flatten)]
        case: CaseArgs,
        /// Write the integrated roll and its force breakdown as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Write a JSON summary
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Vary one parameter and tabulate field lengths
    Sweep {
        #[command(flatten)]
        case: CaseArgs,
        #[arg(long, value_enum)]
        parameter: ParameterArg,
        #[arg(long)]
        start: f64,
        #[arg(long)]
        end: f64,
        #[arg(long, default_value_t = 11)]
        count: usize,
    },
    /// Thrust needed to lift off within a given runway length
    Size {
        #[command(flatten)]
        case: CaseArgs,
        /// Available runway, m
        #[arg(long)]
        runway: f64,
    },
}

#[derive(Args)]
struct CaseArgs {
    /// TOML scenario file
    #[arg(long, conflicts_with = "preset")]
    scenario: Option<PathBuf>,
    /// Built-in aircraft (c17_mtow, c17_stol, c17_stol_scaled)
    #[arg(long)]
    preset: Option<String>,
    /// Ground-roll method, overrides the scenario
    #[arg(long, value_enum)]
    method: Option<MethodArg>,
    /// Allowed relative gap for cross-validation
    #[arg(long)]
    tolerance: Option<f64>,
    /// Liftoff speed as a multiple of stall speed
    #[arg(long, conflicts_with = "liftoff_speed")]
    liftoff_ratio: Option<f64>,
    /// Absolute liftoff speed, m/s
    #[arg(long)]
    liftoff_speed: Option<f64>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum MethodArg {
    ClosedForm,
    Simplified,
    Integrated,
    CrossValidated,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum ParameterArg {
    Thrust,
    WingArea,
    Weight,
    ClMax,
    ObstacleHeight,
}

impl From<ParameterArg> for SweepParameter {
    fn from(arg: ParameterArg) -> Self {
        match arg {
            ParameterArg::Thrust => SweepParameter::Thrust,
            ParameterArg::WingArea => SweepParameter::WingArea,
            ParameterArg::Weight => SweepParameter::Weight,
            ParameterArg::ClMax => SweepParameter::ClMax,
            ParameterArg::ObstacleHeight => SweepParameter::ObstacleHeight,
        }
    }
}

impl CaseArgs {
    fn resolve(&self) -> anyhow::Result<Scenario> {
        let mut scenario = match (&self.scenario, &self.preset) {
            (Some(path), _) => load_scenario(path)
                .with_context(|| format!("loading scenario {}", path.display()))?,
            (None, preset) => {
                let name = preset.as_deref().unwrap_or("c17_stol_scaled");
                let aircraft = presets::by_name(name).ok_or_else(|| {
                    anyhow!("unknown preset '{name}', expected one of {:?}", presets::NAMES)
                })?;
                Scenario { name: name.to_string(), aircraft, analysis: TakeoffAnalysis::default() }
            }
        };

        let tolerance = self.tolerance.unwrap_or(match scenario.analysis.method {
            GroundRollMethod::CrossValidated { tolerance } => tolerance,
            _ => DEFAULT_CROSS_CHECK_TOLERANCE,
        });
        if let Some(method) = self.method {
            scenario.analysis.method = match method {
                MethodArg::ClosedForm => GroundRollMethod::ClosedForm,
                MethodArg::Simplified => GroundRollMethod::SimplifiedClosedForm,
                MethodArg::Integrated => GroundRollMethod::Integrated,
                MethodArg::CrossValidated => GroundRollMethod::CrossValidated { tolerance },
            };
        } else if let GroundRollMethod::CrossValidated { .. } = scenario.analysis.method {
            scenario.analysis.method = GroundRollMethod::CrossValidated { tolerance };
        }

        if let Some(k) = self.liftoff_ratio {
            scenario.analysis.liftoff_speed = LiftoffSpeed::StallMultiple(k);
        }
        if let Some(v) = self.liftoff_speed {
            scenario.analysis.liftoff_speed = LiftoffSpeed::Fixed(v);
        }
        Ok(scenario)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run { case, csv, json } => run(&case.resolve()?, csv, json),
        Command::Sweep { case, parameter, start, end, count } => {
            run_sweep(&case.resolve()?, parameter.into(), start, end, count)
        }
        Command::Size { case, runway } => size(&case.resolve()?, runway),
    }
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

fn run(scenario: &Scenario, csv_path: Option<PathBuf>, json_path: Option<PathBuf>) -> anyhow::Result<()> {
    let ac = &scenario.aircraft;
    let result = analyze(ac, &scenario.analysis)?;

    println!();
    println!("====================================================================");
    println!("  TAKEOFF PERFORMANCE: {}", scenario.name);
    println!("====================================================================");
    println!();
    println!("  Aircraft");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>8.0} kg    T/W:          {:>8.3}",
        ac.mass(),
        ac.thrust_to_weight()
    );
    println!(
        "  Thrust:        {:>8.0} N     Wing area:    {:>8.1} m^2",
        ac.thrust, ac.wing_area
    );
    println!(
        "  CL_max:        {:>8.3}       CD (roll):    {:>8.5}",
        ac.cl_max,
        ac.drag_coefficient()
    );
    println!(
        "  Density:       {:>8.4} kg/m^3 Wing loading: {:>8.0} N/m^2",
        ac.air_density,
        ac.wing_loading()
    );
    println!();

    print_result(&result);

    if let Some(trajectory) = &result.trajectory {
        println!("  Ground roll");
        println!("  ──────────────────────────────────────────────────────────────────");
        println!("  {:>7}  {:>9}  {:>9}", "t (s)", "V (m/s)", "s (m)");
        println!("  {}", "─".repeat(30));
        let stride = (trajectory.len() / 20).max(1);
        let last = trajectory.len().saturating_sub(1);
        for (i, p) in trajectory.iter().enumerate() {
            if i % stride == 0 || i == last {
                println!(
                    "  {:>7.2}  {:>9.2}  {:>9.1}",
                    p.time, p.state.velocity, p.state.distance
                );
            }
        }
        println!();
        println!("  Integration: {} samples kept", trajectory.len());
    }
    println!("====================================================================");
    println!();

    warn_on_status(&result);

    if let Some(path) = csv_path {
        match &result.trajectory {
            Some(trajectory) => {
                csv::write_force_profile_file(&path, &force_profile(trajectory, ac))
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("wrote {}", path.display());
            }
            None => eprintln!("[warn] no integrated roll to write; use --method integrated or cross-validated"),
        }
    }
    if let Some(path) = json_path {
        json::write_summary_file(&path, &json::TakeoffSummary::new(&scenario.name, ac, &result))
            .with_context(|| format!("writing {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

fn print_result(r: &TakeoffResult) {
    println!("  Field length");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  V_stall:       {:>8.2} m/s   V_LO:         {:>8.2} m/s",
        r.stall_velocity, r.liftoff_velocity
    );
    println!("  Ground roll:   {:>8.1} m     ({:?})", r.ground_roll_distance, r.source);
    println!("  Obstacle:      {:>8.1} m", r.obstacle_clearance_distance);
    println!("  Total:         {:>8.1} m", r.total_distance);
    if let Some(t) = r.liftoff_time {
        println!("  Liftoff at:    {:>8.2} s", t);
    }
    if let (Some(closed), Some(integrated)) = (r.closed_form_distance, r.integrated_distance) {
        println!(
            "  Cross-check:   closed {:.1} m, integrated {:.1} m ({:.1}%)",
            closed,
            integrated,
            100.0 * r.relative_discrepancy.unwrap_or(f64::NAN)
        );
    }
    println!("  Status:        {:?}", r.status);
    println!();
}

fn warn_on_status(r: &TakeoffResult) {
    match r.status {
        ResultStatus::Validated => {}
        ResultStatus::LowerBound => {
            eprintln!("[warn] simplified closed form ignores drag and friction; roll is a lower bound")
        }
        ResultStatus::LiftoffNotReached => eprintln!(
            "[warn] liftoff speed not reached within the integration horizon; ground roll is partial"
        ),
        ResultStatus::Discrepant => eprintln!(
            "[warn] integrated and closed-form rolls differ by {:.1}%",
            100.0 * r.relative_discrepancy.unwrap_or(f64::NAN)
        ),
    }
}

// ---------------------------------------------------------------------------
// sweep
// ---------------------------------------------------------------------------

fn run_sweep(
    scenario: &Scenario,
    parameter: SweepParameter,
    start: f64,
    end: f64,
    count: usize,
) -> anyhow::Result<()> {
    let values = linspace(start, end, count);
    let points = sweep(&scenario.aircraft, &scenario.analysis, parameter, &values);

    println!("  {}: sweep of {}", scenario.name, parameter.label());
    println!(
        "  {:>14}  {:>10}  {:>10}  {:>10}  {:>8}",
        parameter.label(),
        "roll (m)",
        "obst (m)",
        "total (m)",
        "V_LO"
    );
    println!("  {}", "─".repeat(60));
    for p in &points {
        match &p.result {
            Ok(r) => println!(
                "  {:>14.3}  {:>10.1}  {:>10.1}  {:>10.1}  {:>8.2}{}",
                p.value,
                r.ground_roll_distance,
                r.obstacle_clearance_distance,
                r.total_distance,
                r.liftoff_velocity,
                if r.is_validated() { "" } else { "  *" }
            ),
            Err(e) => println!("  {:>14.3}  {}", p.value, e),
        }
    }

    let failed = points.iter().filter(|p| p.result.is_err()).count();
    if failed > 0 {
        eprintln!("[warn] {failed} of {} points failed", points.len());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// size
// ---------------------------------------------------------------------------

fn size(scenario: &Scenario, runway: f64) -> anyhow::Result<()> {
    let ac = &scenario.aircraft;
    let v_lo = scenario.analysis.liftoff_speed.resolve(ac)?;
    let thrust = required_thrust(ac, runway, v_lo)?;

    println!("  {}: {:.0} m runway, V_LO {:.2} m/s", scenario.name, runway, v_lo);
    println!("  Required thrust: {:>10.0} N   (T/W {:.3})", thrust, thrust / ac.weight);
    println!("  Installed:       {:>10.0} N", ac.thrust);
    if thrust > ac.thrust {
        eprintln!("[warn] installed thrust is {:.0} N short", thrust - ac.thrust);
    }
    Ok(())
}
