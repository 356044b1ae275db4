//! Torrent menu component.
//!
//! Lists torrents with their files. Clicking a file row reports
//! `(torrent, file index)` through the `on_select` callback; the menu never
//! writes the selection itself.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use torrentplay_core::format::{format_added, format_size, format_speed};
use torrentplay_core::{ToggleIntent, Torrent, TorrentFile};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/menu/menu.module.css");

/// Log what switching a torrent on or off would request.
///
/// Placeholder: nothing is sent and no torrent state changes.
fn request_toggle(torrent: &Torrent, on: bool) {
    let intent = ToggleIntent::for_torrent(torrent, on);
    match intent.to_json() {
        Ok(json) => dom::log(&format!("Toggle requested (not sent): {}", json)),
        Err(err) => dom::warn(&format!("Failed to encode toggle intent: {}", err)),
    }
}

/// List of torrents in source order.
///
/// # Props
/// - `torrents`: Torrents to display
/// - `on_select`: Invoked with the torrent and file index of a clicked row
#[component]
pub fn TorrentMenu(torrents: Vec<Torrent>, on_select: Callback<(Torrent, usize)>) -> impl IntoView {
    let is_empty = torrents.is_empty();

    view! {
        <section class=css::menu aria-label="Torrents">
            {is_empty.then(|| view! { <p class=css::empty>"No torrents"</p> })}
            {torrents
                .into_iter()
                .map(|torrent| view! { <TorrentCard torrent=torrent on_select=on_select /> })
                .collect::<Vec<_>>()}
        </section>
    }
}

#[component]
fn TorrentCard(torrent: Torrent, on_select: Callback<(Torrent, usize)>) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    let toggle_details = move |_: ev::MouseEvent| set_expanded.update(|e| *e = !*e);

    // The checkbox snaps back: only the source can change a torrent's state
    let torrent_for_toggle = torrent.clone();
    let on_toggle = move |ev: ev::Event| {
        request_toggle(&torrent_for_toggle, event_target_checked(&ev));
        event_target::<web_sys::HtmlInputElement>(&ev).set_checked(torrent_for_toggle.state.active);
    };

    let chevron = Signal::derive(move || {
        if expanded.get() {
            ic::CHEVRON_DOWN
        } else {
            ic::CHEVRON_RIGHT
        }
    });

    let state_icon = if torrent.state.seeding {
        ic::SEED
    } else {
        ic::DOWNLOAD
    };

    let details = TorrentDetails::from(&torrent);
    let toggle_label = format!("Toggle {}", torrent.name);

    let rows = torrent
        .files
        .iter()
        .enumerate()
        .map(|(index, file)| {
            view! { <FileRow torrent=torrent.clone() index=index file=file.clone() on_select=on_select /> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=css::torrent>
            <div class=css::header>
                <button
                    class=css::title
                    on:click=toggle_details
                    aria-expanded=move || expanded.get().to_string()
                >
                    <span class=css::chevron aria-hidden="true"><Icon icon=chevron /></span>
                    <span class=css::torrentIcon aria-hidden="true"><Icon icon=ic::TORRENT /></span>
                    <span class=css::torrentName>{torrent.name.clone()}</span>
                </button>
                <span class=css::stateIcon aria-hidden="true"><Icon icon=state_icon /></span>
                <label class=css::switch>
                    <input
                        type="checkbox"
                        prop:checked=torrent.state.active
                        on:change=on_toggle
                        aria-label=toggle_label
                    />
                </label>
            </div>

            <Show when=move || expanded.get()>
                <TorrentInfo details=details.clone() />
            </Show>

            <div class=css::files role="list">{rows}</div>
        </div>
    }
}

/// Pre-formatted values shown in the expanded details panel.
#[derive(Clone, Debug, PartialEq)]
struct TorrentDetails {
    info_hash: String,
    state: &'static str,
    speed: String,
    added: String,
    file_count: usize,
    total_size: String,
}

impl From<&Torrent> for TorrentDetails {
    fn from(torrent: &Torrent) -> Self {
        Self {
            info_hash: torrent.info_hash.clone(),
            state: torrent.state.label().as_str(),
            speed: format_speed(torrent.speed),
            added: format_added(torrent.added),
            file_count: torrent.file_count(),
            total_size: format_size(torrent.total_size()),
        }
    }
}

#[component]
fn TorrentInfo(details: TorrentDetails) -> impl IntoView {
    view! {
        <dl class=css::details>
            <dt>"Hash"</dt>
            <dd class=css::hash>{details.info_hash}</dd>
            <dt>"State"</dt>
            <dd>{details.state}</dd>
            <dt>"Speed"</dt>
            <dd>{details.speed}</dd>
            <dt>"Added"</dt>
            <dd>{details.added}</dd>
            <dt>"Files"</dt>
            <dd>{details.file_count}</dd>
            <dt>"Size"</dt>
            <dd>{details.total_size}</dd>
        </dl>
    }
}

#[component]
fn FileRow(
    torrent: Torrent,
    index: usize,
    file: TorrentFile,
    on_select: Callback<(Torrent, usize)>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>();

    let info_hash = torrent.info_hash.clone();
    let is_playing = Signal::derive(move || {
        ctx.map(|ctx| ctx.is_selected(&info_hash, index))
            .unwrap_or(false)
    });

    let torrent_for_key = torrent.clone();
    let handle_click = move |_: ev::MouseEvent| {
        on_select.run((torrent.clone(), index));
    };

    // Enter/Space activate a focused row like a click
    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" | " " => {
            ev.prevent_default();
            on_select.run((torrent_for_key.clone(), index));
        }
        _ => {}
    };

    let row_class = move || {
        if is_playing.get() {
            format!("{} {}", css::file, css::playing)
        } else {
            css::file.to_string()
        }
    };

    let icon = Signal::derive(move || if is_playing.get() { ic::PLAYING } else { ic::FILE });
    let size = file.size.map(format_size);

    view! {
        <div
            class=row_class
            on:click=handle_click
            on:keydown=handle_keydown
            role="listitem"
            tabindex="0"
            data-file-index=index.to_string()
        >
            <span class=css::fileIcon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::fileName>{file.name}</span>
            <span class=css::fileSize>{size}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use torrentplay_core::TransferState;

    use super::*;

    #[test]
    fn test_details_formatting() {
        let mut torrent = Torrent::new(
            "X",
            "58",
            vec![
                TorrentFile::with_size("a.mp4", 1_000_000),
                TorrentFile::with_size("b.mp4", 500_000),
            ],
        );
        torrent.state = TransferState {
            active: true,
            seeding: true,
        };
        torrent.speed = 2_000;
        torrent.added = Some(1704067200);

        let details = TorrentDetails::from(&torrent);
        assert_eq!(
            details,
            TorrentDetails {
                info_hash: "58".to_string(),
                state: "Seeding",
                speed: "2.0K/s".to_string(),
                added: "2024-01-01".to_string(),
                file_count: 2,
                total_size: "1.5M".to_string(),
            }
        );
    }

    #[test]
    fn test_details_unknown_values() {
        let torrent = Torrent::new("empty", "00", Vec::new());
        let details = TorrentDetails::from(&torrent);
        assert_eq!(details.state, "Stopped");
        assert_eq!(details.added, "-");
        assert_eq!(details.file_count, 0);
        assert_eq!(details.total_size, "0B");
    }

    #[test]
    fn test_request_toggle_leaves_torrent_unchanged() {
        let torrent = Torrent::new("X", "58", vec![TorrentFile::new("a.mp4")]);
        let before = torrent.clone();
        request_toggle(&torrent, true);
        request_toggle(&torrent, false);
        assert_eq!(torrent, before);
    }
}
