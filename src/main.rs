//! Planar - collision filter inspector
//!
//! Loads a table of shape filters and transform probes from configuration,
//! prints which filters collide and where each probe maps its points.

use planar::config::AppConfig;
use planar::matrix::CollisionMatrix;
use planar_physics::DefaultRule;

fn main() {
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|config| config.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting Planar");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let table = match config.filter_table() {
        Ok(table) => table,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    log::info!("Loaded {} filters and {} transform probes", table.len(), config.transforms.len());

    let matrix = CollisionMatrix::evaluate(&table, &DefaultRule);
    if !matrix.is_symmetric() {
        log::warn!("Collision matrix is not symmetric");
    }
    println!("{}", matrix);

    for probe in &config.transforms {
        println!("{}: {:?}", probe.name, probe.transform.to_array());
        for (point, image) in probe.images() {
            println!("  ({}, {}) -> ({}, {})", point.x, point.y, image.x, image.y);
        }
    }
}
