//! Thin wrappers over the browser APIs the pages need.

use anyhow::{Context, anyhow};
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlVideoElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

use juststream_catalog::player::PlaybackSurface;

fn js_error(e: JsValue) -> anyhow::Error {
    anyhow!("{e:?}")
}

pub fn document() -> anyhow::Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .context("No document available")
}

/// Reports whether an element is within `root_margin` of the viewport.
/// Observation stops when this value is dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe(
        element: &Element,
        root_margin: &str,
        on_change: impl Fn(bool) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                // Entries are queued oldest first
                if let Some(entry) = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .last()
                {
                    on_change(entry.is_intersecting());
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_error)
                .context("Failed to create intersection observer")?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// An event listener that is removed when dropped.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn new(
        target: EventTarget,
        event: &'static str,
        on_event: impl FnMut(Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(on_event);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_error)
            .with_context(|| format!("Failed to listen for {event}"))?;

        Ok(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {e:?}", self.event);
        }
    }
}

pub fn is_fullscreen() -> bool {
    document().is_ok_and(|document| document.fullscreen_element().is_some())
}

/// Asks the platform to enter or leave fullscreen. Completion is reported through the
/// document's `fullscreenchange` event.
pub fn toggle_fullscreen(container: &Element) -> anyhow::Result<()> {
    let document = document()?;
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
    } else {
        container
            .request_fullscreen()
            .map_err(js_error)
            .context("Fullscreen request was rejected")?;
    }
    Ok(())
}

/// The page's `<video>` element seen as a playback widget.
pub struct VideoSurface(pub HtmlVideoElement);

impl PlaybackSurface for VideoSurface {
    fn play(&self) {
        match self.0.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Playback did not start: {e:?}");
                }
            }),
            Err(e) => log::warn!("Failed to start playback: {e:?}"),
        }
    }

    fn pause(&self) {
        if let Err(e) = self.0.pause() {
            log::warn!("Failed to pause playback: {e:?}");
        }
    }

    fn seek(&self, seconds: f64) {
        self.0.set_current_time(seconds);
    }

    fn set_volume(&self, volume: f64) {
        self.0.set_volume(volume);
    }

    fn set_playback_rate(&self, rate: f64) {
        self.0.set_playback_rate(rate);
    }
}
