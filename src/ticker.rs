//! Repeating timers owned by a view.
//!
//! [`periodic`] returns a guard plus the future that drives the ticks. The
//! caller spawns the future on whatever executor it has (Dioxus `spawn`,
//! `tokio::spawn`); dropping the guard stops further ticks, so a view that
//! keeps the guard in a hook stops its timers when it unmounts.

use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};

/// Platform sleep: browser timers in WASM, tokio natively
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Cancels its ticker on drop
#[derive(Debug)]
pub struct TickerGuard {
    handle: AbortHandle,
}

impl TickerGuard {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Call `on_tick` every `period` until the guard is dropped
pub fn periodic<F>(period: Duration, mut on_tick: F) -> (TickerGuard, impl Future<Output = ()>)
where
    F: FnMut() + 'static,
{
    let (handle, registration) = AbortHandle::new_pair();
    let ticks = Abortable::new(
        async move {
            loop {
                sleep(period).await;
                on_tick();
            }
        },
        registration,
    );

    let driver = async move {
        if ticks.await.is_err() {
            tracing::trace!("Ticker ({:?}) stopped", period);
        }
    };

    (TickerGuard { handle }, driver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn ticks_until_guard_dropped() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let (guard, driver) = periodic(Duration::from_secs(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let task = tokio::spawn(driver);

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        drop(guard);
        task.await.unwrap();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_first_tick() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let (guard, driver) = periodic(Duration::from_secs(30), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let task = tokio::spawn(driver);

        guard.cancel();
        assert!(guard.is_cancelled());
        task.await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
