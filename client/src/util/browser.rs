//! Thin wrappers over browser-only facilities.
//!
//! Each helper is a no-op (or a neutral answer) during SSR so pages can call
//! them unconditionally from event handlers.

use std::future::Future;

/// Run `task` on the browser event loop. Dropped unpolled during SSR.
pub fn spawn<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}

/// Native confirmation dialog; always `false` outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Today's date as `yyyy-mm-dd` in the browser; empty during SSR.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.get(..10).unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Wait `millis` before continuing; resolves immediately during SSR.
pub async fn sleep_ms(millis: u32) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(millis).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = millis;
}
