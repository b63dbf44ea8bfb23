//! Route transition wrapper: fade in and slide up on mount.

use dioxus::prelude::*;

/// Keyframes for [`PageTransition`]. Included once by the layout.
pub const TRANSITION_STYLES: &str = r#"
@keyframes page-enter {
    from { opacity: 0; transform: translateY(24px); }
    to { opacity: 1; transform: translateY(0); }
}
.page-transition { animation: page-enter 0.55s cubic-bezier(0.45, 0, 0.15, 1) both; }
@media (prefers-reduced-motion: reduce) {
    .page-transition { animation: none; }
}
"#;

#[derive(Props, Clone, PartialEq)]
pub struct PageTransitionProps {
    pub children: Element,
}

/// Wraps a routed page; every mount replays the animation and scrolls to the top.
#[component]
pub fn PageTransition(props: PageTransitionProps) -> Element {
    use_effect(|| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    });

    rsx! {
        div { class: "page-transition",
            {props.children}
        }
    }
}
