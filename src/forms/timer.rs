//! Delayed callbacks for notice auto-dismissal.

use std::time::Duration;

pub trait Timer {
    /// Run `callback` once after `delay`.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}

/// Sleeps on the Dioxus runtime outside any component scope.
#[derive(Debug, Default, Clone, Copy)]
pub struct DioxusTimer;

impl Timer for DioxusTimer {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let _ = dioxus::core::spawn_forever(async move {
            sleep(delay).await;
            callback();
        });
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "native")))]
async fn sleep(_duration: Duration) {
    // No timer available; the notice stays until dismissed.
    std::future::pending::<()>().await;
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use dioxus::prelude::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    static FIRED: AtomicBool = AtomicBool::new(false);

    fn scheduling_app() -> Element {
        use_hook(|| {
            DioxusTimer.schedule(
                Duration::from_millis(10),
                Box::new(|| FIRED.store(true, Ordering::SeqCst)),
            );
        });
        rsx! {}
    }

    #[tokio::test]
    async fn test_dioxus_timer_fires_callback() {
        let mut dom = dioxus::core::VirtualDom::new(scheduling_app);
        dom.rebuild_in_place();
        assert!(!FIRED.load(Ordering::SeqCst));

        let _ = tokio::time::timeout(Duration::from_millis(300), dom.wait_for_work()).await;
        assert!(FIRED.load(Ordering::SeqCst));
    }
}
