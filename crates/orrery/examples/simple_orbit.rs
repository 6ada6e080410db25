//! Earth and Mars around the default Sun, with a late-arriving impactor
//!
//! Prints orbital radii and conserved quantities every few hundred ticks and
//! reports mergers as they happen. Engine logs go to stdout.
//!
//! Run with: cargo run --package orrery --example simple_orbit

use nalgebra::Point2;
use orrery::config::SimulationConfig;
use orrery::factory::EditablePlanetParams;
use orrery::invariants::{validate_conservation, DEFAULT_CONSERVATION_TOLERANCE};
use orrery::state::SystemState;
use orrery::BodyKind;

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        println!("{} {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: Logger = Logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    log::set_logger(&LOGGER).map_err(|e| e.to_string())?;
    log::set_max_level(log::LevelFilter::Debug);

    println!("Orrery: two planets and an impactor\n");
    println!("{}", "=".repeat(60));

    let config = SimulationConfig {
        seed: Some(2024),
        ..Default::default()
    };
    let mut system = SystemState::with_planets(
        Point2::new(400.0, 300.0),
        config,
        &[
            EditablePlanetParams::new("Earth", 9.0, 1.0, 150.0).with_color("blue"),
            EditablePlanetParams::new("Mars", 5.0, 0.5, 230.0)
                .with_color("red")
                .with_rotation_speed(0.02),
        ],
    )?;

    let initial = system.physics_quantities();
    println!("\nInitial conditions:");
    for planet in system.planets() {
        println!(
            "  {:<8} r = {:>7.2}  v = {:.4}",
            planet.name(),
            planet.orbital_radius(&system.sun().body.position),
            planet.body.velocity.magnitude()
        );
    }
    println!("  Total energy: {:.6}", initial.total_energy);
    println!("  Angular momentum: {:.6}", initial.total_angular_momentum);

    let earth = system.planets()[0].id();
    let path = system.predict(earth);
    if let Some(last) = path.last() {
        println!("\nPredicted Earth position after {} ticks: ({:.1}, {:.1})", path.len(), last.x, last.y);
    }

    println!("\nIntegrating...");
    for tick in 1..=2000 {
        if tick == 500 {
            // A small asteroid dropped onto Earth's orbit
            let id = system.add_planet(
                &EditablePlanetParams::new("Impactor", 3.0, 0.05, 150.0).with_kind(BodyKind::Asteroid),
            )?;
            println!("Tick {tick}: added {}", system.planet(id).map(|p| p.name()).unwrap_or("?"));
        }

        let outcome = system.tick();
        for collision in &outcome.collisions {
            println!(
                "Tick {tick}: {} + {} merged at ({:.1}, {:.1})",
                collision.bodies[0].name, collision.bodies[1].name, collision.position.x, collision.position.y
            );
        }

        if tick % 400 == 0 {
            let q = system.physics_quantities();
            println!(
                "Tick {tick}: {} planet(s), E = {:.6}, L = {:.6}",
                system.planet_count(),
                q.total_energy,
                q.total_angular_momentum
            );
        }
    }

    let report = validate_conservation(&initial, &system.physics_quantities(), DEFAULT_CONSERVATION_TOLERANCE);
    println!("\n{}", "=".repeat(60));
    println!("Final diagnostics after t = {:.0}:", system.time);
    println!("  Momentum conserved: {}", report.momentum_conserved);
    println!("  Angular momentum conserved: {}", report.angular_momentum_conserved);
    println!("  Energy conserved: {}", report.energy_conserved);

    Ok(())
}
