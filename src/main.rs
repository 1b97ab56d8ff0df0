mod config;
mod domain;
mod fonts;
mod render;
mod scenes;
mod sources;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::Config::from_env()?;
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating output directory {}", config.output_dir.display()))?;

    let typography = fonts::load()?;
    let sources = sources::SourceSet::discover(&config.source_dir)?;

    for scene in scenes::all() {
        scene.run(&sources, &typography, &config.output_dir)?;
    }

    println!("\nAll screenshots saved to: {}", config.output_dir.display());
    Ok(())
}
