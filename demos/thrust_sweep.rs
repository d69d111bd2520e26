use takeoff_sim::performance::required_thrust;
use takeoff_sim::sweep::{linspace, sweep, SweepParameter};
use takeoff_sim::{presets, TakeoffAnalysis};

fn main() -> Result<(), takeoff_sim::TakeoffError> {
    let ac = presets::c17_stol();
    let analysis = TakeoffAnalysis::cross_validated();

    println!("=== C-17 STOL: field length vs installed thrust ===\n");
    println!("{:>12}  {:>6}  {:>9}  {:>9}", "thrust (kN)", "T/W", "roll (m)", "total (m)");

    let values = linspace(400e3, 1_400e3, 11);
    for p in sweep(&ac, &analysis, SweepParameter::Thrust, &values) {
        match p.result {
            Ok(r) => println!(
                "{:>12.0}  {:>6.3}  {:>9.1}  {:>9.1}",
                p.value / 1e3,
                p.value / ac.weight,
                r.ground_roll_distance,
                r.total_distance
            ),
            Err(e) => println!("{:>12.0}  {e}", p.value / 1e3),
        }
    }

    println!("\nThrust to lift off within a given runway:");
    let v_lo = 1.2 * ac.stall_speed();
    for runway in [300.0, 450.0, 600.0, 900.0] {
        let t = required_thrust(&ac, runway, v_lo)?;
        println!("  {runway:>5.0} m  ->  {:>7.0} kN", t / 1e3);
    }

    Ok(())
}
