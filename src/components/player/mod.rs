//! Video player component.
//!
//! Wraps a video.js player. The player handle is held in a [`PlayerLease`]
//! for as long as the component is mounted and released on unmount.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;
use torrentplay_core::{PlayerLease, Selection};

use crate::components::icons as ic;
use crate::config::{COMPACT_MEDIA_QUERY, compact_player_config, player_config};
use crate::core::VideoJs;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/player/player.module.css");

/// Video surface plus the "now playing" info region.
///
/// # Props
/// - `selection`: Item to describe under the video; the info region is empty
///   while it is `None`
#[component]
pub fn VideoPlayer(#[prop(into)] selection: Signal<Option<Selection>>) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let lease = StoredValue::new_local(None::<PlayerLease<VideoJs>>);
    let (engine_error, set_engine_error) = signal::<Option<String>>(None);
    let compact = use_media_query(COMPACT_MEDIA_QUERY.to_string());

    // Attach video.js once the <video> element is in the DOM
    Effect::new(move || {
        let Some(video) = video_ref.get() else {
            return;
        };
        if lease.with_value(|l| l.is_some()) {
            return;
        }

        let config = if compact.get_untracked() {
            compact_player_config()
        } else {
            player_config()
        };

        match PlayerLease::acquire(VideoJs, &video, &config) {
            Ok(acquired) => lease.set_value(Some(acquired)),
            Err(err) => {
                dom::error(&format!("Failed to start player: {}", err));
                set_engine_error.set(Some(err.to_string()));
            }
        }
    });

    // Dropping the lease disposes the player; nothing happens if none was acquired
    on_cleanup(move || {
        lease.update_value(|l| {
            if l.take().is_some() {
                dom::log("Player released");
            }
        });
    });

    view! {
        <div class=css::player>
            <div class=css::surface data-vjs-player="">
                <video node_ref=video_ref class="video-js" controls=true preload="auto">
                    <p class="vjs-no-js">
                        "To view this video please enable JavaScript, and consider upgrading to a web browser that "
                        <a href="https://videojs.com/html5-video-support/" target="_blank">
                            "supports HTML5 video"
                        </a>
                    </p>
                </video>
            </div>

            {move || engine_error.get().map(|msg| view! {
                <p class=css::notice role="alert">{msg}</p>
            })}

            <div class=css::info aria-live="polite">
                {move || selection.get().map(|s| view! {
                    <div class=css::currentTorrent>{s.torrent_name().to_string()}</div>
                    <div class=css::currentFile>
                        <span class=css::videoIcon aria-hidden="true"><Icon icon=ic::VIDEO /></span>
                        <span class=css::fileName>{s.file_name().to_string()}</span>
                    </div>
                })}
            </div>
            <div class=css::underline></div>
        </div>
    }
}
