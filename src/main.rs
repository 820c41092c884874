use serenata::{
    Catalog, PlaybackController, Settings,
    app_core::Serenata,
    logging,
    player::{NowPlaying, RodioEngine},
};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    let _guard = logging::init_logging()?;

    let settings = Settings::load()?;
    let catalog = Catalog::load(settings.catalog_path()?)?;
    let engine = RodioEngine::new()?;

    let player = PlaybackController::new(Arc::new(catalog), engine, &settings)
        .with_now_playing(now_playing());

    Serenata::new(player, &settings).run()?;
    Ok(())
}

#[cfg(feature = "media-controls")]
fn now_playing() -> Box<dyn NowPlaying> {
    use serenata::player::{LogNowPlaying, MediaControlsNowPlaying};

    match MediaControlsNowPlaying::new() {
        Ok(controls) => Box::new(controls),
        Err(e) => {
            tracing::warn!(error = %e, "Media controls unavailable, falling back to logging");
            Box::new(LogNowPlaying)
        }
    }
}

#[cfg(not(feature = "media-controls"))]
fn now_playing() -> Box<dyn NowPlaying> {
    Box::new(serenata::player::LogNowPlaying)
}
