use leptos::*;

/// Fraction of the page scrolled, clamped to [0, 1]. A page shorter than the
/// viewport reports 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(target_arch = "wasm32")]
fn current_scroll_progress() -> f64 {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return 0.0,
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|doc| doc.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_progress(scroll_y, scroll_height, viewport)
}

#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let (progress, set_progress) = create_signal(0.0f64);

    #[cfg(target_arch = "wasm32")]
    {
        set_progress.set(current_scroll_progress());
        let handle = window_event_listener(ev::scroll, move |_| {
            set_progress.set(current_scroll_progress());
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_progress;

    view! {
        <div class="fixed top-0 left-0 w-full h-1 bg-transparent z-50" aria-hidden="true">
            <div
                class="h-full bg-blue-600 transition-[width] duration-75"
                style=move || format!("width: {:.2}%", progress.get() * 100.0)
            ></div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn bar_renders_with_zero_width_initially() {
        let html = render_to_string(move || view! { <ScrollProgressBar /> });
        assert!(html.contains("width: 0.00%"));
    }
}
