use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use balm_breath::{BreathingSession, CountdownTimer};
use balm_config::BalmConfig;
use balm_core::BalmError;

pub(crate) async fn handle_breathe(cycles: Option<u32>) -> Result<()> {
    let config = BalmConfig::load()?;
    config.validate()?;

    let cycles = match cycles {
        Some(0) => return Err(BalmError::InvalidBreathingConfig.into()),
        Some(n) => n,
        None => config.breathing.cycles,
    };
    let phase_duration = Duration::from_secs(config.breathing.phase_secs);

    let mut session = BreathingSession::new(cycles);
    eprintln!("{}", session.instruction());
    eprintln!();

    let mut interval = tokio::time::interval(phase_duration);
    interval.tick().await; // first tick completes immediately

    session.advance();
    while !session.is_complete() {
        eprintln!(
            "Cycle {} of {}: {} - {}",
            session.current_cycle(),
            session.total_cycles(),
            session.label(),
            session.instruction()
        );
        interval.tick().await;
        session.advance();
    }

    eprintln!();
    eprintln!("{}", session.instruction());
    eprintln!("🧘‍♀️ Breathing exercise completed! You should feel more relaxed now.");

    Ok(())
}

pub(crate) async fn handle_walk(minutes: u64) -> Result<()> {
    let mut timer = CountdownTimer::new(Duration::from_secs(minutes * 60));
    eprintln!("🚶‍♀️ Mindful walk: notice your surroundings, your breath, each step.");

    let tick = Duration::from_secs(1);
    let mut interval = tokio::time::interval(tick);
    interval.tick().await;

    while !timer.is_done() {
        eprint!("\r{} remaining ", timer.mm_ss());
        std::io::stderr().flush().ok();
        interval.tick().await;
        timer.tick(tick);
    }

    eprintln!("\r00:00 remaining ");
    eprintln!("Walk complete. Welcome back. 🌿");

    Ok(())
}
