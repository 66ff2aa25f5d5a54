use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::context::{use_clock, use_ready};
use crate::effects::stagger_delay;

fn elements(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Fade-in elements outside the hero, each tagged with its stagger delay
/// within its section.
fn staggered_fade_ins(document: &Document) -> Vec<Element> {
    let mut tagged = Vec::new();
    for section in elements(document, "section") {
        if section.class_list().contains("hero") {
            continue;
        }
        let Ok(nodes) = section.query_selector_all(".fade-in") else {
            continue;
        };
        for ordinal in 0..nodes.length() {
            let Some(element) = nodes.get(ordinal).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let _ = element
                .dataset()
                .set("delay", &stagger_delay(ordinal as usize).to_string());
            tagged.push(element.unchecked_into::<Element>());
        }
    }
    tagged
}

/// Reveals `.fade-in` elements as they scroll into view. Nothing is hidden
/// again once shown.
#[hook]
pub fn use_fade_in_reveal() {
    let ready = use_ready();
    let scheduler = use_clock();

    use_effect_with_deps(
        move |ready| {
            let mut observer: Option<IntersectionObserver> = None;
            let mut callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>> = None;

            if let Some(document) = web_sys::window().and_then(|w| w.document()).filter(|_| ready.is_ready()) {
                let targets = staggered_fade_ins(&document);

                if !intersection_observer_supported() {
                    warn!("IntersectionObserver is not supported, showing all content");
                    for element in elements(&document, ".fade-in") {
                        let _ = element.class_list().add_1("visible");
                    }
                } else {
                    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, _observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                    continue;
                                };
                                if !entry.is_intersecting() {
                                    continue;
                                }
                                let target = entry.target();
                                let delay = target
                                    .get_attribute("data-delay")
                                    .and_then(|d| d.parse().ok())
                                    .unwrap_or(0);
                                scheduler.schedule(
                                    delay,
                                    Box::new(move || {
                                        let _ = target.class_list().add_1("visible");
                                    }),
                                );
                            }
                        },
                    );

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(0.1));
                    options.set_root_margin("0px 0px -50px 0px");
                    if let Ok(created) =
                        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
                    {
                        for target in &targets {
                            created.observe(target);
                        }
                        debug!("Observing {} fade-in elements", targets.len());
                        observer = Some(created);
                    }
                    callback = Some(on_intersect);
                }
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        },
        ready,
    );
}
