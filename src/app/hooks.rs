//! Component hooks shared by pages.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use crate::ticker::{periodic, TickerGuard};

/// Run `on_tick` every `period` while the calling component is mounted.
///
/// Client-side only (effects do not run during SSR). The guard lives in a
/// hook slot, so unmounting the component stops the timer.
pub fn use_ticker(period: Duration, on_tick: impl FnMut() + 'static) {
    let slot: Rc<RefCell<Option<TickerGuard>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let mut on_tick = Some(on_tick);
    use_effect(move || {
        if slot.borrow().is_some() {
            return;
        }
        if let Some(on_tick) = on_tick.take() {
            let (guard, driver) = periodic(period, on_tick);
            spawn(driver);
            *slot.borrow_mut() = Some(guard);
        }
    });
}
