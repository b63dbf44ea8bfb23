//! Fire-and-forget task runners.
//!
//! Best-effort work (the admin notification) is handed to a [`Detach`]
//! implementation and never awaited by the workflow that started it.

use std::future::Future;

/// A boxed unit future; `Send` on native targets.
#[cfg(not(target_arch = "wasm32"))]
pub type DetachedTask = futures::future::BoxFuture<'static, ()>;
#[cfg(target_arch = "wasm32")]
pub type DetachedTask = futures::future::LocalBoxFuture<'static, ()>;

pub trait Detach {
    fn detach(&self, task: DetachedTask);
}

/// Box `future` as a [`DetachedTask`] for the current target.
#[cfg(not(target_arch = "wasm32"))]
pub fn boxed(future: impl Future<Output = ()> + Send + 'static) -> DetachedTask {
    Box::pin(future)
}

#[cfg(target_arch = "wasm32")]
pub fn boxed(future: impl Future<Output = ()> + 'static) -> DetachedTask {
    Box::pin(future)
}

/// Runs tasks on the ambient tokio runtime.
#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDetach;

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
impl Detach for TokioDetach {
    fn detach(&self, task: DetachedTask) {
        tokio::spawn(task);
    }
}

/// Runs tasks on the Dioxus runtime, outside any component scope so that
/// unmounting the form does not cancel them.
#[derive(Debug, Default, Clone, Copy)]
pub struct DioxusDetach;

impl Detach for DioxusDetach {
    fn detach(&self, task: DetachedTask) {
        let _ = dioxus::core::spawn_forever(task);
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use dioxus::prelude::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_tokio_detach_runs_task() {
        let ran = Arc::new(AtomicBool::new(false));
        let (tx, rx) = futures::channel::oneshot::channel();

        let flag = ran.clone();
        TokioDetach.detach(boxed(async move {
            flag.store(true, Ordering::SeqCst);
            let _ = tx.send(());
        }));

        rx.await.unwrap();
        assert!(ran.load(Ordering::SeqCst));
    }

    static DIOXUS_RAN: AtomicBool = AtomicBool::new(false);

    fn detaching_app() -> Element {
        use_hook(|| {
            DioxusDetach.detach(boxed(async {
                DIOXUS_RAN.store(true, Ordering::SeqCst);
            }));
        });
        rsx! {}
    }

    #[tokio::test]
    async fn test_dioxus_detach_runs_task() {
        let mut dom = dioxus::core::VirtualDom::new(detaching_app);
        dom.rebuild_in_place();

        // A finished task marks nothing dirty, so this only returns on timeout.
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(200),
            dom.wait_for_work(),
        )
        .await;
        assert!(DIOXUS_RAN.load(Ordering::SeqCst));
    }
}
