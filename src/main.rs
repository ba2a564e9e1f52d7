//! Sorta demo
//!
//! Walks the landing-page components end to end: particle animation,
//! the signup form flow, and the admin panel.

use std::sync::Arc;
use std::time::Duration;

use sorta::admin::AdminPanel;
use sorta::config::Config;
use sorta::form::{FormConfig, NullDelivery, WaitlistForm};
use sorta::particles::{Animator, NullSurface, ParticleField};
use sorta::store::SignupStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "sorta=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Sorta Waitlist Landing v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load_default();
    tracing::info!("Data directory: {:?}", config.store.data_dir);

    // Demo: run the background animation briefly
    demo_animation(&config).await?;

    // Demo: drive a signup through the form
    let store = Arc::new(SignupStore::in_memory());
    demo_form(&store).await?;

    // Demo: admin panel stats and export
    demo_admin(&store, &config)?;

    tracing::info!("Sorta demo complete");
    Ok(())
}

async fn demo_animation(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let field = ParticleField::new(config.animation.width, config.animation.height);
    tracing::info!(
        "Particle field: {} particles for {}x{}",
        field.len(),
        config.animation.width,
        config.animation.height
    );

    let animator = Arc::new(Animator::with_interval(
        field,
        Box::new(NullSurface),
        Duration::from_millis(config.animation.frame_interval_ms),
    ));

    let handle = animator.start();
    tokio::time::sleep(Duration::from_millis(200)).await;
    animator.stop().await;
    handle.await?;

    tracing::info!("Animation ran for {} frames", animator.frames().await);
    Ok(())
}

async fn demo_form(store: &Arc<SignupStore>) -> Result<(), Box<dyn std::error::Error>> {
    // Short dwell so the demo does not sit on the success overlay
    let form_config = FormConfig {
        success_dwell: Duration::from_millis(300),
        ..FormConfig::default()
    };
    let form = Arc::new(WaitlistForm::with_config(
        Arc::clone(store),
        Arc::new(NullDelivery),
        form_config,
    ));

    form.set_input("demo@example.com").await;
    let reset = form.submit().await;

    let view = form.view().await;
    tracing::info!(
        "Form after submit: label={:?} overlay={}",
        view.label,
        view.overlay_visible
    );

    if let Some(handle) = reset {
        handle.await?;
    }
    tracing::info!("Form reset, {} signups stored", store.count()?);

    // A duplicate submit succeeds without recording a second entry
    form.set_input("demo@example.com").await;
    if let Some(handle) = form.submit().await {
        handle.await?;
    }
    tracing::info!("After duplicate submit: {} signups", store.count()?);

    Ok(())
}

fn demo_admin(store: &Arc<SignupStore>, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let panel = AdminPanel::new(Arc::clone(store), &config.store.export_dir);

    let view = panel.view()?;
    tracing::info!("Admin view: {} total, {} today", view.total, view.today);
    for entry in &view.entries {
        tracing::info!("  {} ({})", entry.email, entry.date_label);
    }

    match panel.export_csv()? {
        Some(path) => tracing::info!("Exported CSV to {:?}", path),
        None => tracing::info!("Nothing to export"),
    }

    Ok(())
}
