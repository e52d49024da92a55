// ============================================================================
// POLLING SYNCHRONIZER
// ============================================================================
// One reusable fetch-and-reconcile loop shared by every live view:
// - one immediate fetch on mount, then a fixed interval
// - a successful fetch replaces the snapshot wholesale
// - a failed fetch leaves the previous snapshot on screen and surfaces at
//   most ONE transient error per failure streak
// - ticks that would overlap an in-flight request are skipped
// - unmount cancels the interval; a request resolving afterwards is dropped
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::error::ApiError;

struct PollFlags {
    in_flight: bool,
    error_latched: bool,
    alive: bool,
}

pub struct UsePollingHandle<T> {
    /// Most recently *successfully* fetched snapshot.
    pub snapshot: Option<Rc<T>>,
    /// Transient error to surface; already de-duplicated per failure streak.
    pub error: Option<String>,
    /// True until the first fetch settles.
    pub loading: bool,
    pub last_updated: Option<DateTime<Utc>>,
    /// Manual out-of-band fetch (refresh button, after a mutation).
    pub refresh: Callback<()>,
    pub dismiss_error: Callback<()>,
}

impl<T> Clone for UsePollingHandle<T> {
    fn clone(&self) -> Self {
        Self {
            snapshot: self.snapshot.clone(),
            error: self.error.clone(),
            loading: self.loading,
            last_updated: self.last_updated,
            refresh: self.refresh.clone(),
            dismiss_error: self.dismiss_error.clone(),
        }
    }
}

#[hook]
pub fn use_polling<T, F, Fut>(interval_ms: u32, fetch: F) -> UsePollingHandle<T>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let snapshot = use_state(|| None::<Rc<T>>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let last_updated = use_state(|| None::<DateTime<Utc>>);
    let flags = use_mut_ref(|| PollFlags {
        in_flight: false,
        error_latched: false,
        alive: true,
    });
    let fetch = Rc::new(fetch);

    let attempt: Rc<dyn Fn()> = {
        let snapshot = snapshot.clone();
        let error = error.clone();
        let loading = loading.clone();
        let last_updated = last_updated.clone();
        let flags = flags.clone();

        Rc::new(move || {
            // A tick that would overlap a pending request is skipped, so at
            // most one request per instance is ever outstanding.
            if flags.borrow().in_flight {
                log::debug!("⏭️ Poll tick skipped, request still in flight");
                return;
            }
            flags.borrow_mut().in_flight = true;

            let future = fetch();
            let snapshot = snapshot.clone();
            let error = error.clone();
            let loading = loading.clone();
            let last_updated = last_updated.clone();
            let flags = flags.clone();

            spawn_local(async move {
                let result = future.await;

                {
                    let mut f = flags.borrow_mut();
                    f.in_flight = false;
                    // The consumer unmounted while we were waiting: discard.
                    if !f.alive {
                        return;
                    }
                }

                match result {
                    Ok(data) => {
                        flags.borrow_mut().error_latched = false;
                        snapshot.set(Some(Rc::new(data)));
                        error.set(None);
                        last_updated.set(Some(Utc::now()));
                        loading.set(false);
                    }
                    Err(err) => {
                        log::warn!("⚠️ Poll failed: {}", err);
                        let mut f = flags.borrow_mut();
                        if !f.error_latched {
                            f.error_latched = true;
                            drop(f);
                            error.set(Some(err.to_string()));
                        }
                        loading.set(false);
                    }
                }
            });
        })
    };

    {
        let attempt = attempt.clone();
        let flags = flags.clone();
        use_effect_with((), move |_| {
            // Immediate first fetch, then the fixed cadence.
            attempt();
            let interval = Interval::new(interval_ms, {
                let attempt = attempt.clone();
                move || attempt()
            });

            move || {
                flags.borrow_mut().alive = false;
                drop(interval);
            }
        });
    }

    let refresh = {
        let attempt = attempt.clone();
        Callback::from(move |_| attempt())
    };
    let dismiss_error = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    UsePollingHandle {
        snapshot: (*snapshot).clone(),
        error: (*error).clone(),
        loading: *loading,
        last_updated: *last_updated,
        refresh,
        dismiss_error,
    }
}
