use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlVideoElement};
use yew::prelude::*;

use juststream_catalog::{
    format::format_time,
    player::{SurfaceEvent, Transport},
    store::PlayerAction,
};

use crate::browser::{EventSubscription, VideoSurface, document, is_fullscreen, toggle_fullscreen};
use crate::context::use_store;

const PLAYBACK_RATES: [f64; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// Plays the store's current content and keeps the `<video>` element in step with the player slice.
#[function_component(VideoPlayer)]
pub fn video_player() -> Html {
    let store = use_store();
    let video_ref = use_node_ref();
    let container_ref = use_node_ref();
    let transport = use_mut_ref(Transport::new);
    let ready = use_state_eq(|| false);
    let player = &store.player;
    let content_id = player.current_content.as_ref().map(|c| c.id.clone());

    // New media, new widget state
    {
        let transport = transport.clone();
        let ready = ready.clone();
        use_effect_with(content_id.clone(), move |_| {
            *transport.borrow_mut() = Transport::new();
            ready.set(false);
            || ()
        });
    }

    {
        let transport = transport.clone();
        let video_ref = video_ref.clone();
        let state = player.clone();
        use_effect_with(
            (*ready, player.is_playing, player.volume, player.playback_rate),
            move |(ready, ..)| {
                if *ready && let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    transport.borrow_mut().sync(&state, &VideoSurface(video));
                }
                || ()
            },
        );
    }

    {
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            let subscription = document()
                .and_then(|document| {
                    EventSubscription::new(document.into(), "fullscreenchange", move |_| {
                        dispatcher.dispatch(PlayerAction::FullscreenChanged(is_fullscreen()).into());
                    })
                })
                .inspect_err(|e| log::error!("Fullscreen changes will not be tracked: {e:#}"))
                .ok();
            move || drop(subscription)
        });
    }

    let Some(content) = &player.current_content else {
        return html! {};
    };

    let surface_event = |event: fn(&HtmlVideoElement) -> SurfaceEvent| {
        let dispatcher = store.dispatcher();
        Callback::from(move |e: Event| {
            let video = e.target_unchecked_into::<HtmlVideoElement>();
            dispatcher.dispatch(Transport::action_for(event(&video)).into());
        })
    };

    let oncanplay = {
        let transport = transport.clone();
        let state = player.clone();
        let ready = ready.clone();
        Callback::from(move |e: Event| {
            let video = e.target_unchecked_into::<HtmlVideoElement>();
            transport.borrow_mut().on_ready(&state, &VideoSurface(video));
            ready.set(true);
        })
    };

    let toggle_playback = {
        let store = store.clone();
        let action = if player.is_playing {
            PlayerAction::Pause
        } else {
            PlayerAction::Resume
        };
        Callback::from(move |_: MouseEvent| store.dispatch(action.clone().into()))
    };

    let onseek = {
        let store = store.clone();
        let transport = transport.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                let action = transport
                    .borrow()
                    .seek(input.value_as_number(), &VideoSurface(video));
                store.dispatch(action.into());
            }
        })
    };

    let onvolume = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            store.dispatch(PlayerAction::SetVolume(input.value_as_number()).into());
        })
    };

    let onrate = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let select = e.target_unchecked_into::<HtmlSelectElement>();
            match select.value().parse::<f64>() {
                Ok(rate) => store.dispatch(PlayerAction::SetPlaybackRate(rate).into()),
                Err(e) => log::warn!("Ignoring playback rate {:?}: {e}", select.value()),
            }
        })
    };

    let onfullscreen = {
        let container_ref = container_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(container) = container_ref.cast::<Element>()
                && let Err(e) = toggle_fullscreen(&container)
            {
                log::warn!("{e:#}");
            }
        })
    };

    let onclose = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.dispatch(PlayerAction::Stop.into()))
    };

    html! {
        <div
            ref={container_ref}
            class={classes!("video-player", player.is_fullscreen.then_some("fullscreen"))}
        >
            <video
                ref={video_ref}
                src={content.video_url.clone()}
                playsinline=true
                {oncanplay}
                onplay={surface_event(|_| SurfaceEvent::Played)}
                onpause={surface_event(|_| SurfaceEvent::Paused)}
                ontimeupdate={surface_event(|v| SurfaceEvent::Progress(v.current_time()))}
                ondurationchange={surface_event(|v| SurfaceEvent::DurationKnown(v.duration()))}
            />
            if *ready {
                <div class="controls">
                    <button class="icon-button" onclick={toggle_playback}>
                        { if player.is_playing { "\u{23F8}" } else { "\u{25B6}" } }
                    </button>
                    <input
                        class="seek"
                        type="range"
                        min="0"
                        max={player.duration.to_string()}
                        step="0.1"
                        value={player.current_time.to_string()}
                        oninput={onseek}
                    />
                    <span class="time">
                        { format!("{} / {}", format_time(player.current_time), format_time(player.duration)) }
                    </span>
                    <input
                        class="volume"
                        type="range"
                        min="0"
                        max="1"
                        step="0.05"
                        value={player.volume.to_string()}
                        oninput={onvolume}
                    />
                    <select class="rate" onchange={onrate}>
                        {
                            PLAYBACK_RATES.iter().map(|rate| html! {
                                <option value={rate.to_string()} selected={*rate == player.playback_rate}>
                                    { format!("{rate}x") }
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                    <button class="icon-button" aria-label="Fullscreen" onclick={onfullscreen}>
                        { "\u{26F6}" }
                    </button>
                    <button class="icon-button" aria-label="Close" onclick={onclose}>
                        { "\u{2715}" }
                    </button>
                </div>
            }
        </div>
    }
}
