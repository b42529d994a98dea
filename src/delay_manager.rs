use std::time::Duration;
use std::thread;
use rand::Rng;
use log::info;

/// Pause between per-year listing requests to stay polite with the host.
pub fn polite_delay() {
    let mut rng = rand::thread_rng();
    let delay_secs = rng.gen_range(2..=5);
    info!("Waiting for {} seconds before next request...", delay_secs);
    thread::sleep(Duration::from_secs(delay_secs));
}

/// Short randomized backoff before a fetch retry.
pub fn retry_backoff(attempt: u32) {
    let mut rng = rand::thread_rng();
    let delay_ms = rng.gen_range(500..=1500);
    info!("Retry {} in {} ms...", attempt, delay_ms);
    thread::sleep(Duration::from_millis(delay_ms));
}
