//! Root application module.
//!
//! Contains the main App component and the AppContext it provides to the
//! component tree.

use leptos::prelude::*;
use torrentplay_core::{Selection, Torrent};

use crate::components::{NavBar, TorrentMenu, VideoPlayer};
use crate::config;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`. Children only get the read
/// half of the selection; the write half stays inside [`App`].
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Item currently chosen for playback, `None` when nothing is playing.
    pub selection: ReadSignal<Option<Selection>>,
}

impl AppContext {
    pub fn new(selection: ReadSignal<Option<Selection>>) -> Self {
        Self { selection }
    }

    /// Whether the given file of the given torrent is the one playing.
    pub fn is_selected(&self, info_hash: &str, file_index: usize) -> bool {
        self.selection
            .with(|s| s.as_ref().is_some_and(|s| s.is(info_hash, file_index)))
    }
}

/// Build the callback through which the menu replaces the selection.
///
/// An out-of-range index is logged and leaves the current selection as is.
pub fn selection_setter(set_selection: WriteSignal<Option<Selection>>) -> Callback<(Torrent, usize)> {
    Callback::new(move |(torrent, index): (Torrent, usize)| {
        match Selection::new(torrent, index) {
            Ok(next) => set_selection.set(Some(next)),
            Err(err) => dom::warn(&format!("Selection rejected: {}", err)),
        }
    })
}

/// Root application component with error boundary.
///
/// This component:
/// - Owns the selection signal and provides the read half via AppContext
/// - Loads the torrent list from the configured source
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the NavBar, VideoPlayer and TorrentMenu
#[component]
pub fn App() -> impl IntoView {
    let (selection, set_selection) = signal(None::<Selection>);
    provide_context(AppContext::new(selection));

    let on_select = selection_setter(set_selection);
    let torrents = config::torrent_source().torrents();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::failure>
                    <h1 class=css::failureTitle>"Something went wrong"</h1>
                    <p class=css::failureText>
                        "The torrent list could not be loaded. Please try reloading the page."
                    </p>
                    <ul class=css::failureList>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button class=css::reload on:click=move |_| dom::reload()>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <NavBar />
            <main class=css::main>
                <VideoPlayer selection=selection />
                {torrents.map(|list| view! { <TorrentMenu torrents=list on_select=on_select /> })}
            </main>
        </ErrorBoundary>
    }
}
