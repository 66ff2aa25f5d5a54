use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor::scroll_to_anchor;
use crate::config;
use crate::context::{use_clock, use_ready};
use crate::debounce::Debouncer;
use crate::effects::{current_section, header_style, is_desktop_width, nav_href_matches, HeaderStyle, SectionSpan};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#pricing", "Pricing"),
    ("#contact", "Contact"),
];

fn section_spans() -> Vec<SectionSpan> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionSpan {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        })
        .collect()
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[function_component(Header)]
pub fn header() -> Html {
    let ready = use_ready();
    let scheduler = use_clock();
    let menu_open = use_state(|| false);
    let style = use_state(|| HeaderStyle::Solid);
    let active_section = use_state(|| None::<String>);
    let hamburger_ref = use_node_ref();
    let links_ref = use_node_ref();

    let header_update = {
        let style = style.setter();
        let scheduler = scheduler.clone();
        use_memo(
            move |_| {
                Debouncer::new(scheduler, config::HEADER_DEBOUNCE_MS, move |()| {
                    style.set(header_style(scroll_y()));
                })
            },
            (),
        )
    };

    let nav_update = {
        let active_section = active_section.setter();
        let scheduler = scheduler.clone();
        use_memo(
            move |_| {
                Debouncer::new(scheduler, config::ACTIVE_NAV_DEBOUNCE_MS, move |()| {
                    let spans = section_spans();
                    let current = current_section(&spans, scroll_y()).map(str::to_string);
                    active_section.set(current);
                })
            },
            (),
        )
    };

    let resize_close = {
        let menu_open = menu_open.setter();
        use_memo(
            move |_| {
                Debouncer::new(scheduler, config::RESIZE_DEBOUNCE_MS, move |()| {
                    let width = web_sys::window()
                        .and_then(|w| w.inner_width().ok())
                        .and_then(|w| w.as_f64())
                        .unwrap_or(0.0);
                    if is_desktop_width(width) {
                        menu_open.set(false);
                    }
                })
            },
            (),
        )
    };

    {
        let header_update = header_update.clone();
        let nav_update = nav_update.clone();
        use_event_with_window("scroll", move |_: Event| {
            if ready.is_ready() {
                header_update.call(());
                nav_update.call(());
            }
        });
    }

    {
        let resize_close = resize_close.clone();
        use_event_with_window("resize", move |_: Event| {
            if ready.is_ready() {
                resize_close.call(());
            }
        });
    }

    // Any click outside the hamburger and the link list closes the menu.
    {
        let menu_open = menu_open.setter();
        let hamburger_ref = hamburger_ref.clone();
        let links_ref = links_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let listener = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                    let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                        return;
                    };
                    let inside = |node_ref: &NodeRef| node_ref.get().map_or(false, |n| n.contains(Some(&target)));
                    if !inside(&hamburger_ref) && !inside(&links_ref) {
                        menu_open.set(false);
                    }
                });
                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            if ready.is_ready() {
                debug!("Menu toggled");
                menu_open.set(!*menu_open);
            }
        })
    };

    let link_click = |href: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_anchor(href);
        })
    };

    let open_class = (*menu_open).then_some("active");

    html! {
        <header style={style.css()}>
            <style>
                {r#"
                    header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        transition: background-color 0.3s ease;
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 16px 24px;
                    }
                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.25rem;
                        color: #0b1320;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 28px;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-links a {
                        color: #0b1320;
                        text-decoration: none;
                    }
                    .nav-links a.active {
                        color: #1e6fff;
                        font-weight: 600;
                    }
                    .hamburger {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .hamburger span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #0b1320;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .hamburger.active span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }
                    .hamburger.active span:nth-child(2) {
                        opacity: 0;
                    }
                    .hamburger.active span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }
                    @media (max-width: 768px) {
                        .hamburger {
                            display: block;
                        }
                        .nav-links {
                            position: fixed;
                            top: 64px;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 24px;
                            background: #fff;
                            transform: translateY(-150%);
                            transition: transform 0.3s ease;
                        }
                        .nav-links.active {
                            transform: translateY(0);
                        }
                    }
                "#}
            </style>
            <nav class="nav-content">
                <a href="#home" class="nav-logo" onclick={link_click("#home")}>{"Northwind Studio"}</a>
                <button class={classes!("hamburger", open_class)} ref={hamburger_ref} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={classes!("nav-links", open_class)} ref={links_ref}>
                    { for NAV_LINKS.iter().map(|(href, label)| {
                        let active = nav_href_matches(href, active_section.as_deref());
                        html! {
                            <li>
                                <a href={*href} class={classes!(active.then_some("active"))} onclick={link_click(*href)}>
                                    { *label }
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        </header>
    }
}
