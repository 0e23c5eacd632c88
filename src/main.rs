use anyhow::Context;
use clap::Parser;

use petreels::cli::Cli;
use petreels::config::{Config, ConfigStore};
use petreels::deck::{builtin, Deck};
use petreels::logging::init_tracing;
use petreels::motion::MotionSignal;
use petreels::ui;
use petreels::ui::media::MediaLibrary;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    cli.apply(&mut config);
    config.validate()?;

    let deck = match &config.deck.path {
        Some(path) => Deck::load_from(path)?,
        None => builtin(),
    };

    MotionSignal::global().publish(config.prefers_reduced_motion());

    if cli.check {
        print_summary(&config, &deck);
        return Ok(());
    }

    let overrides = cli.clone();
    let store = ConfigStore::new(config, config_path)
        .with_overrides(move |config| overrides.apply(config));
    ui::run(store, deck).context("terminal UI failed")?;
    Ok(())
}

fn print_summary(config: &Config, deck: &Deck) {
    let media = MediaLibrary::scan(deck, &config.display.assets_dir);
    println!(
        "autoplay every {} ms, visibility threshold {}, swipe threshold {} columns",
        config.carousel.autoplay_interval_ms,
        config.carousel.visibility_threshold,
        config.carousel.swipe_threshold
    );
    println!(
        "reduced motion: {}",
        if config.prefers_reduced_motion() { "on" } else { "off" }
    );
    for reel in &deck.reels {
        println!("{} ({:?}): {} slides", reel.name, reel.style, reel.len());
    }
    println!(
        "media: {} missing under {}",
        media.missing_count(),
        media.assets_dir().display()
    );
}
