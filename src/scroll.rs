use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::config;

/// Header style derived from how far the page has scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    #[default]
    AtTop,
    Scrolled,
}

impl ScrollState {
    /// `Scrolled` only once the offset is strictly past the threshold.
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            ScrollState::Scrolled
        } else {
            ScrollState::AtTop
        }
    }

    pub fn is_scrolled(self) -> bool {
        self == ScrollState::Scrolled
    }
}

/// One reading of the window scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    /// Vertical offset in CSS pixels.
    pub offset: f64,
    /// 0.0 at the top of the document, 1.0 at the bottom.
    pub progress: f64,
}

impl ScrollSample {
    pub fn new(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        let scrollable = scroll_height - viewport_height;
        let progress = if scrollable > 0.0 {
            (offset / scrollable).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { offset, progress }
    }

    /// Reads the current position from the browser, `None` outside a document.
    pub fn read(window: &Window) -> Option<Self> {
        let offset = window.scroll_y().ok()?;
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        let scroll_height = window.document()?.document_element()?.scroll_height() as f64;
        Some(Self::new(offset, scroll_height, viewport_height))
    }

    pub fn state(&self) -> ScrollState {
        ScrollState::from_offset(self.offset, config::SCROLL_THRESHOLD)
    }

    pub fn fade_opacity(&self) -> f64 {
        let (start, end) = config::FADE_RANGE;
        map_range(self.progress, (start, end), (1.0, 0.0))
    }
}

/// Linear map from `input` to `output`, clamped to the output's end points.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return if value < in_start { out_start } else { out_end };
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// A registered window `scroll` listener. Dropping it removes the listener.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn new<F>(window: Window, mut on_scroll: F) -> Option<Self>
    where
        F: FnMut(ScrollSample) + 'static,
    {
        let reader = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            if let Some(sample) = ScrollSample::read(&reader) {
                on_scroll(sample);
            }
        }) as Box<dyn FnMut()>);

        if let Err(err) =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            log::error!("Failed to register scroll listener: {:?}", err);
            return None;
        }

        Some(Self { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove scroll listener: {:?}", err);
        }
    }
}

/// Tracks the window scroll position for the lifetime of the calling component.
#[hook]
pub fn use_scroll_sample() -> ScrollSample {
    let sample = use_state_eq(ScrollSample::default);

    {
        let sample = sample.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = web_sys::window().and_then(|window| {
                    // Pick up the position the page was restored at
                    if let Some(initial) = ScrollSample::read(&window) {
                        sample.set(initial);
                    }
                    ScrollSubscription::new(window, move |next| sample.set(next))
                });
                move || drop(subscription)
            },
            (),
        );
    }

    *sample
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        let states: Vec<_> = [0.0, 49.0, 50.0, 51.0, 10.0]
            .into_iter()
            .map(|offset| ScrollState::from_offset(offset, config::SCROLL_THRESHOLD))
            .collect();

        assert_eq!(
            states,
            vec![
                ScrollState::AtTop,
                ScrollState::AtTop,
                ScrollState::AtTop,
                ScrollState::Scrolled,
                ScrollState::AtTop,
            ]
        );
    }

    #[test]
    fn fade_is_linear_over_first_fifth() {
        let fade = |progress: f64| ScrollSample { offset: 0.0, progress }.fade_opacity();

        assert_eq!(fade(0.0), 1.0);
        assert!((fade(0.1) - 0.5).abs() < 1e-9);
        assert_eq!(fade(0.2), 0.0);
        assert_eq!(fade(0.75), 0.0);
    }

    #[test]
    fn map_range_clamps_outside_input() {
        assert_eq!(map_range(-0.5, (0.0, 0.2), (1.0, 0.0)), 1.0);
        assert_eq!(map_range(3.0, (0.0, 0.2), (1.0, 0.0)), 0.0);
        assert!((map_range(0.05, (0.0, 0.2), (1.0, 0.0)) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn progress_normalizes_against_scrollable_height() {
        let sample = ScrollSample::new(500.0, 3000.0, 1000.0);
        assert!((sample.progress - 0.25).abs() < 1e-9);
        assert_eq!(ScrollSample::new(4000.0, 3000.0, 1000.0).progress, 1.0);
        assert_eq!(ScrollSample::new(0.0, 800.0, 1000.0).progress, 0.0);
        assert_eq!(sample.state(), ScrollState::Scrolled);
    }
}
