use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::context::{use_clock, use_ready};
use crate::counter::{animate_count, parse_stat, CountUp};

const STATS: &[(&str, &str)] = &[
    ("2024+", "Projects delivered"),
    ("98%", "Client retention"),
    ("150", "Specialists on staff"),
    ("24h", "Average response time"),
];

#[function_component(Stats)]
pub fn stats() -> Html {
    let ready = use_ready();
    let scheduler = use_clock();
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |ready| {
                let mut observer: Option<IntersectionObserver> = None;
                let mut callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>> = None;

                if let Some(section) = section_ref.cast::<Element>().filter(|_| ready.is_ready()) {
                    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                    continue;
                                };
                                if !entry.is_intersecting() {
                                    continue;
                                }
                                let target = entry.target();
                                observer.unobserve(&target);

                                let text = target.text_content().unwrap_or_default();
                                let Some(value) = parse_stat(&text) else {
                                    continue;
                                };
                                debug!("Counting up to {}", value.target);
                                animate_count(scheduler.clone(), CountUp::new(value), move |frame| {
                                    target.set_text_content(Some(frame));
                                });
                            }
                        },
                    );

                    if let Ok(created) = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
                        if let Ok(numbers) = section.query_selector_all(".stat-number") {
                            for number in (0..numbers.length()).filter_map(|i| numbers.get(i)) {
                                if let Ok(number) = number.dyn_into::<Element>() {
                                    created.observe(&number);
                                }
                            }
                        }
                        observer = Some(created);
                    }
                    callback = Some(on_intersect);
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

    html! {
        <section id="results" class="stats" ref={section_ref}>
            <style>
                {r#"
                    .stats {
                        padding: 80px 24px;
                        background: #0b1320;
                        color: #fff;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 32px;
                        max-width: 1000px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .stat-number {
                        font-size: 2.75rem;
                        font-weight: 700;
                        font-variant-numeric: tabular-nums;
                    }
                    .stat-label {
                        opacity: 0.7;
                    }
                "#}
            </style>
            <div class="stats-grid">
                { for STATS.iter().map(|(number, label)| html! {
                    <div class="stat fade-in">
                        <div class="stat-number">{ *number }</div>
                        <div class="stat-label">{ *label }</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
