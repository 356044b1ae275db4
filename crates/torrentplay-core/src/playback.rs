//! Scoped ownership of a third-party playback engine handle.
//!
//! A [`PlayerLease`] owns at most one engine handle. The handle is disposed
//! exactly once: by an explicit [`PlayerLease::release`] or when the lease
//! is dropped, whichever comes first.

use serde::Serialize;

/// How much of the media the engine should fetch before playback starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preload {
    #[default]
    Auto,
    Metadata,
    None,
}

/// Options handed to the engine when a player is created.
///
/// Serializes to the option object shape video.js expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerConfig {
    pub controls: bool,
    pub autoplay: bool,
    pub preload: Preload,
    /// Width in CSS pixels.
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Scale to the container width instead of a fixed size.
    pub fluid: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            controls: true,
            autoplay: false,
            preload: Preload::Auto,
            width: 1800,
            height: None,
            fluid: false,
        }
    }
}

/// A playback backend able to attach a player to a surface.
pub trait PlaybackEngine {
    /// Element the player renders into.
    type Surface;
    /// Live player instance.
    type Handle;
    type Error: std::error::Error;

    fn create(
        &self,
        surface: &Self::Surface,
        config: &PlayerConfig,
    ) -> Result<Self::Handle, Self::Error>;

    fn dispose(&self, handle: Self::Handle);
}

/// Owns one engine handle for the lifetime of a mounted player.
pub struct PlayerLease<E: PlaybackEngine> {
    engine: E,
    handle: Option<E::Handle>,
}

impl<E: PlaybackEngine> PlayerLease<E> {
    /// Creates a player on `surface`.
    ///
    /// On failure no handle exists, so there is nothing to release later.
    pub fn acquire(
        engine: E,
        surface: &E::Surface,
        config: &PlayerConfig,
    ) -> Result<Self, E::Error> {
        let handle = engine.create(surface, config)?;
        Ok(Self {
            engine,
            handle: Some(handle),
        })
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&E::Handle> {
        self.handle.as_ref()
    }

    /// Disposes the handle. Returns `false` if it was already released.
    pub fn release(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                self.engine.dispose(handle);
                true
            }
            None => false,
        }
    }
}

impl<E: PlaybackEngine> Drop for PlayerLease<E> {
    fn drop(&mut self) {
        self.release();
    }
}
