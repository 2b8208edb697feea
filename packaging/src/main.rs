//! `packaging`
//!
//! Packages the Chrome extension for distribution.

use chrono::Local;
use packaging::PackageConfig;

fn main() {
    env_logger::init();

    let config = PackageConfig::default();
    let built = packaging::build_package(&config, Local::now())
        .expect("Failed to package extension");

    println!("\nExtension packaged successfully!");
    println!("Ready for distribution: {}", built.archive_path.display());
}
