use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Repeating background task: runs `tick` every `interval` on its own
/// thread until stopped. Replacing the ticker (new interval) or dropping
/// it cancels the old thread at its next wake-up.
pub struct Ticker {
    running: Arc<AtomicBool>,
}

impl Ticker {
    pub fn spawn<F>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        thread::spawn(move || {
            while flag.load(Ordering::Relaxed) {
                thread::sleep(interval);
                // Re-check after the sleep so a stop never starts a tick.
                if !flag.load(Ordering::Relaxed) {
                    break;
                }
                tick();
            }
        });

        Ticker { running }
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn ticks_until_stopped() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let ticker = Ticker::spawn(Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        thread::sleep(Duration::from_millis(100));
        assert!(count.load(Ordering::Relaxed) >= 2, "ticker never fired");

        ticker.stop();
        // Let any in-flight tick and the final wake-up drain.
        thread::sleep(Duration::from_millis(50));
        let after_stop = count.load(Ordering::Relaxed);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::Relaxed), after_stop);
    }
}
