//! Subcommand implementations.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use asterism_anim::{AnimationDriver, FrameClock, PlaybackReport, Scene, Srgb, decode_hex};
use asterism_graph::{RevealPlan, project};
use asterism_types::{Constellation, ConstellationData};
use tokio::time::MissedTickBehavior;

use crate::config::{AppConfig, RendererKind};
use crate::log_scene::LogScene;
use crate::terminal::{SharedCanvas, TerminalScene, TerminalSurface};
use crate::{PlayArgs, Target};

/// Print index, name, and counts for every constellation.
pub fn list(path: &Path) -> Result<()> {
    let data = ConstellationData::load(path).with_context(|| format!("listing {}", path.display()))?;
    for (i, c) in data.items.iter().enumerate() {
        println!("{i:>3}  {:<24} {:>4} stars {:>4} pairs", c.name, c.stars.len(), c.pairs.len());
    }
    Ok(())
}

fn plan_target(target: &Target, config: &AppConfig) -> Result<(Constellation, RevealPlan)> {
    let data = ConstellationData::load(&target.data)
        .with_context(|| format!("loading {}", target.data.display()))?;
    let selector = target.constellation.clone().unwrap_or_default();
    let constellation = data.select(&selector)?.clone();
    let plan = RevealPlan::build(&constellation, target.reveal.unwrap_or(config.reveal))?;
    Ok((constellation, plan))
}

/// Print the plan as JSON without animating.
pub fn schedule(target: &Target, config: &AppConfig) -> Result<()> {
    let (constellation, plan) = plan_target(target, config)?;
    let out = serde_json::json!({
        "constellation": constellation.name,
        "mode": plan.mode.to_string(),
        "root": plan.root,
        "schedule": plan.schedule,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// A seconds setting, accepted only when finite and not negative.
fn seconds(name: &str, value: f32) -> Result<f32> {
    if !value.is_finite() || value < 0.0 {
        bail!("{name} must be a finite, non-negative number of seconds, got {value}");
    }
    Ok(value)
}

/// Pacing for one playback run.
struct Pacing {
    duration: f32,
    frame: Duration,
    fallback: Srgb<u8>,
}

/// Animate a reveal with the chosen renderer.
pub async fn play(args: &PlayArgs, config: &AppConfig) -> Result<()> {
    let (constellation, plan) = plan_target(&args.target, config)?;
    let fps = args.fps.unwrap_or(config.frame_rate).max(1);
    let pacing = Pacing {
        duration: seconds("duration", args.duration.unwrap_or(config.duration_secs))?,
        frame: Duration::from_secs_f64(1.0 / f64::from(fps)),
        fallback: decode_hex(&config.fallback_color).context("fallback_color")?,
    };
    let hold = seconds("hold", args.hold.unwrap_or(config.hold_secs))?;
    let hold = Duration::try_from_secs_f32(hold).context("hold")?;

    let outcome = match args.renderer.unwrap_or(config.renderer) {
        RendererKind::Log => {
            let mut scene = LogScene::default();
            animate(&mut scene, &constellation, &plan, &pacing, |_| Ok(())).await?
        }
        RendererKind::Terminal => {
            let canvas = SharedCanvas::default();
            let mut scene = TerminalScene::new(canvas.clone());
            let center = project(constellation.ra, constellation.dec);
            let mut surface = TerminalSurface::enter(
                &constellation.name,
                center,
                plan.positions.iter().map(|(_, p)| p),
            )
            .context("entering terminal")?;

            let outcome = animate(&mut scene, &constellation, &plan, &pacing, |now| {
                surface.draw(&canvas.lock(), now)?;
                Ok(())
            })
            .await?;
            if outcome.is_some() && hold_frame(hold, interrupted()).await {
                tracing::info!("hold cut short");
            }
            outcome
        }
    };

    match outcome {
        Some(report) => println!(
            "{}: {} levels, {} lines, {} skipped",
            constellation.name, report.levels, report.animated, report.skipped
        ),
        None => println!("{}: cancelled", constellation.name),
    }
    Ok(())
}

/// Drive the clock from real time until the reveal finishes or Ctrl-C.
///
/// `on_frame` runs after every clock tick and once more at the end.
/// Returns `None` when cancelled.
async fn animate<S: Scene>(
    scene: &mut S,
    constellation: &Constellation,
    plan: &RevealPlan,
    pacing: &Pacing,
    mut on_frame: impl FnMut(f64) -> Result<()>,
) -> Result<Option<PlaybackReport>> {
    let clock = FrameClock::new();
    let mut driver =
        AnimationDriver::new(scene, clock.handle(), pacing.duration).with_fallback_color(pacing.fallback);
    let reveal = driver.reveal(constellation, plan);
    tokio::pin!(reveal);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut interval = tokio::time::interval(pacing.frame);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let started = Instant::now();

    loop {
        tokio::select! {
            biased;
            _ = &mut ctrl_c => {
                tracing::info!(at = clock.now(), "reveal cancelled");
                return Ok(None);
            }
            result = &mut reveal => {
                on_frame(clock.now())?;
                return Ok(Some(result?));
            }
            _ = interval.tick() => {
                clock.set(started.elapsed().as_secs_f64());
                on_frame(clock.now())?;
            }
        }
    }
}

/// Resolves on Ctrl-C.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Keep the final frame up for `hold`, or until `interrupt` resolves.
///
/// Returns true when interrupted.
async fn hold_frame(hold: Duration, interrupt: impl Future<Output = ()>) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(hold) => false,
        _ = interrupt => true,
    }
}
