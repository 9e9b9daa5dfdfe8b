use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Sections start their entrance a little after their edge crosses into view.
pub const REVEAL_MARGIN: &str = "-100px";

/// Flips to revealed on the first intersecting observation and stays there.
#[derive(Debug, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Returns true only for the observation that flips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Watches one element and calls back once, the first time it enters view.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe(
        element: &Element,
        root_margin: &str,
        on_reveal: impl FnOnce() + 'static,
    ) -> Result<Self, JsValue> {
        let mut latch = RevealLatch::default();
        let mut on_reveal = Some(on_reveal);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if latch.observe(intersecting) {
                    observer.disconnect();
                    if let Some(on_reveal) = on_reveal.take() {
                        on_reveal();
                    }
                }
            },
        );

        let mut init = IntersectionObserverInit::new();
        #[allow(deprecated)]
        let _ = init.root_margin(root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// True once the referenced element has been in view, false before.
#[hook]
pub fn use_reveal_once(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let on_reveal = revealed.clone();
                    match RevealObserver::observe(&element, REVEAL_MARGIN, move || on_reveal.set(true)) {
                        Ok(observer) => Some(observer),
                        Err(err) => {
                            warn!("viewport observer unavailable, revealing immediately: {:?}", err);
                            revealed.set(true);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            node,
        );
    }

    *revealed
}
