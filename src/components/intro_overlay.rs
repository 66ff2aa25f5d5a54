use yew::prelude::*;

use crate::context::use_clock;
use crate::intro::{IntroPhase, IntroSequencer};

#[derive(Properties, PartialEq)]
pub struct IntroOverlayProps {
    pub on_revealed: Callback<()>,
    #[prop_or(true)]
    pub with_door: bool,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    let scheduler = use_clock();
    let phase = use_state(|| IntroPhase::Counting(0));

    {
        let phase = phase.setter();
        let on_revealed = props.on_revealed.clone();
        let with_door = props.with_door;
        use_effect_with_deps(
            move |_| {
                let on_phase = Callback::from(move |next: IntroPhase| {
                    phase.set(next);
                    if next.is_revealed() {
                        on_revealed.emit(());
                    }
                });
                IntroSequencer::new(scheduler, with_door, on_phase).start();
                || ()
            },
            (),
        );
    }

    let current = *phase;
    let count = current.count();

    html! {
        <>
            <style>
                {r#"
                    .loading-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 1001;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #0b1320;
                        color: #fff;
                        transition: opacity 0.5s ease;
                    }
                    .loading-overlay.hidden {
                        opacity: 0;
                        pointer-events: none;
                    }
                    .loading-counter {
                        font-size: 4rem;
                        font-variant-numeric: tabular-nums;
                    }
                    .loading-bar {
                        width: 240px;
                        height: 2px;
                        margin-top: 1rem;
                        background: rgba(255, 255, 255, 0.2);
                    }
                    .loading-bar-fill {
                        height: 100%;
                        background: #fff;
                    }
                    .door-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 1000;
                        display: flex;
                        pointer-events: none;
                    }
                    .door-overlay.hidden {
                        display: none;
                    }
                    .door {
                        flex: 1;
                        background: #0b1320;
                        transition: transform 1.5s cubic-bezier(0.7, 0, 0.3, 1);
                    }
                    .door-overlay.opening .door-left {
                        transform: translateX(-100%);
                    }
                    .door-overlay.opening .door-right {
                        transform: translateX(100%);
                    }
                "#}
            </style>
            <div class={classes!("loading-overlay", current.overlay_hidden().then_some("hidden"))}>
                <div class="loading-counter" id="loading-counter">{ format!("{}%", count) }</div>
                <div class="loading-bar">
                    <div class="loading-bar-fill" style={format!("width: {}%;", count)}></div>
                </div>
            </div>
            if props.with_door {
                <div class={classes!(
                    "door-overlay",
                    current.door_opening().then_some("opening"),
                    current.is_revealed().then_some("hidden")
                )}>
                    <div class="door door-left"></div>
                    <div class="door door-right"></div>
                </div>
            }
        </>
    }
}
