//! Overlay controller.
//!
//! Every user action goes through here. Settings are never edited in place:
//! each action builds a complete new snapshot, and only once the frame for
//! it has been produced does the controller swap it in. A failed action
//! leaves the previous settings and frame untouched and publishes a
//! notification instead.

use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::events::{AppEvent, EventPublisher, Notification};
use crate::model::{ReticleSettings, ResolutionMode};
use crate::placement::{overlay_origin, parse_custom_resolution, ScreenRect};
use crate::render::{DrawList, Reticle};
use crate::storage::{Preferences, PresetStore};

/// The last successfully produced overlay frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Top-left of the overlay window in virtual-desktop pixels.
    pub origin: (i32, i32),
    /// Overlay window edge length.
    pub size: u32,
    pub draw: DrawList,
}

pub struct OverlayController {
    settings: ReticleSettings,
    reticle: Reticle,
    frame: Option<Frame>,
    preferences: Preferences,
    presets: PresetStore,
    events: EventPublisher,
}

impl OverlayController {
    /// Starts from the last-used settings in `preferences`. No frame exists
    /// until the first [`apply`](Self::apply).
    pub fn new(mut preferences: Preferences, presets: PresetStore, events: EventPublisher) -> Self {
        let settings = preferences.get();
        let reticle = Reticle::from_settings(&settings);
        debug!(shape = %settings.shape, size = settings.size, "controller initialised");
        Self {
            settings,
            reticle,
            frame: None,
            preferences,
            presets,
            events,
        }
    }

    pub fn with_default_locations(events: EventPublisher) -> Self {
        Self::new(
            Preferences::default_location(),
            PresetStore::default_location(),
            events,
        )
    }

    pub fn settings(&self) -> &ReticleSettings {
        &self.settings
    }

    pub fn reticle(&self) -> &Reticle {
        &self.reticle
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn presets(&self) -> &PresetStore {
        &self.presets
    }

    /// Validate `settings`, render them and swap them in.
    pub fn apply(&mut self, settings: ReticleSettings, screens: &[ScreenRect]) -> Result<()> {
        let result = self.try_apply(settings, screens);
        self.report("Failed to update crosshair", result)
    }

    /// Apply a copy of the current settings changed by `edit`.
    pub fn update<F>(&mut self, screens: &[ScreenRect], edit: F) -> Result<()>
    where
        F: FnOnce(&mut ReticleSettings),
    {
        let mut next = self.settings.clone();
        edit(&mut next);
        self.apply(next, screens)
    }

    /// Parse the custom-resolution fields and switch to them. Invalid text
    /// changes nothing.
    pub fn set_custom_resolution(
        &mut self,
        width: &str,
        height: &str,
        screens: &[ScreenRect],
    ) -> Result<()> {
        let parsed = parse_custom_resolution(width, height);
        let custom = self.report("Invalid resolution", parsed)?;
        self.update(screens, |s| {
            s.resolution = ResolutionMode::Custom;
            s.custom_resolution = Some(custom);
        })
    }

    /// Save the current settings as preset `name`.
    pub fn save_preset(&mut self, name: &str) -> Result<PathBuf> {
        let saved = self.presets.save(name, &self.settings);
        let path = self.report("Failed to save preset", saved)?;
        let name = name.trim().to_string();
        self.notify(Notification::info(
            "Preset Saved",
            format!("Preset '{name}' saved successfully!"),
        ));
        self.events.publish(AppEvent::PresetSaved(name));
        Ok(path)
    }

    /// Load preset `name` and apply it.
    pub fn load_preset(&mut self, name: &str, screens: &[ScreenRect]) -> Result<()> {
        let loaded = self.ensure_presets().and_then(|_| self.presets.load(name));
        let settings = self.report("Failed to load preset", loaded)?;
        self.apply(settings, screens)?;

        let name = name.trim().to_string();
        self.notify(Notification::info(
            "Preset Loaded",
            format!("Preset '{name}' loaded successfully!"),
        ));
        self.events.publish(AppEvent::PresetLoaded(name));
        Ok(())
    }

    /// Delete preset `name`.
    pub fn clear_preset(&mut self, name: &str) -> Result<()> {
        let deleted = self.ensure_presets().and_then(|_| self.presets.delete(name));
        self.report("Failed to delete preset", deleted)?;

        let name = name.trim().to_string();
        self.notify(Notification::info(
            "Preset Deleted",
            format!("Preset '{name}' has been deleted successfully."),
        ));
        self.events.publish(AppEvent::PresetDeleted(name));
        Ok(())
    }

    pub fn preset_names(&self) -> Result<Vec<String>> {
        self.presets.list()
    }

    /// Persist last-used settings.
    pub fn shutdown(&mut self) -> Result<()> {
        let flushed = self.preferences.flush();
        self.report("Failed to save preferences", flushed)
    }

    fn try_apply(&mut self, settings: ReticleSettings, screens: &[ScreenRect]) -> Result<()> {
        let settings = settings.validated();
        let reticle = Reticle::from_settings(&settings);
        let origin = overlay_origin(&settings, reticle.size(), screens)?;
        let frame = Frame {
            origin,
            size: reticle.size(),
            draw: reticle.frame(),
        };

        info!(
            shape = %settings.shape,
            size = frame.size,
            x = origin.0,
            y = origin.1,
            "overlay updated"
        );
        self.preferences.set(settings.clone());
        self.settings = settings;
        self.reticle = reticle;
        self.frame = Some(frame);
        self.events.publish(AppEvent::FrameUpdated);
        Ok(())
    }

    fn ensure_presets(&self) -> Result<()> {
        if self.presets.list()?.is_empty() {
            return Err(Error::NoPresets);
        }
        Ok(())
    }

    fn notify(&self, notification: Notification) {
        self.events.publish(AppEvent::Notify(notification));
    }

    /// Publish a notification for a failed step and pass the result through.
    fn report<T>(&self, title: &str, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            let notification = match e {
                Error::InvalidResolution { .. } | Error::NoPresets => {
                    warn!(error = %e, "{title}");
                    Notification::warning(title, e.to_string())
                }
                _ => {
                    error!(error = %e, "{title}");
                    Notification::error(title, e.to_string())
                }
            };
            self.notify(notification);
        }
        result
    }
}
