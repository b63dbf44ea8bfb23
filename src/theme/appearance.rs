//! Root appearance surface: the `light`/`dark` class on `<html>`.

use super::Theme;

/// Where a resolved theme is made visible.
pub trait RootAppearance {
    fn apply(&self, theme: Theme);
}

/// No document to style (headless rendering, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedRoot;

impl RootAppearance for DetachedRoot {
    fn apply(&self, _theme: Theme) {}
}

/// `document.documentElement.classList`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentRoot;

#[cfg(target_arch = "wasm32")]
impl RootAppearance for DocumentRoot {
    fn apply(&self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        // Mutually exclusive: remove both, then add the active one.
        let classes = root.class_list();
        let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
        let _ = classes.add_1(theme.as_str());
    }
}

/// Inline head script that applies the theme class before the app hydrates.
/// Mirrors [`resolve`](super::resolve) so the first paint matches.
pub const THEME_SCRIPT: &str = r#"
(function(){
    var t = null, stored = true;
    try { t = localStorage.getItem('intovah-theme'); } catch (e) { stored = false; }
    if (t !== 'light' && t !== 'dark') {
        var mq = window.matchMedia ? window.matchMedia('(prefers-color-scheme: dark)') : null;
        if (mq) { t = mq.matches ? 'dark' : 'light'; }
        else { t = stored ? 'dark' : 'light'; }
    }
    document.documentElement.classList.remove('light', 'dark');
    document.documentElement.classList.add(t);
})();
"#;
