//! Playback of pre-rendered animation files

use std::{
    fs::File,
    io::{BufReader, Read, Seek},
    path::{Component, Path},
};

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind};
use crate::{animation::FrameReader, document::Document, geometry::Geometry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationParams {
    /// File name inside the animation directory
    #[serde(rename = "animName")]
    pub name: String,
}

/// Default frame source, a buffered file from the animation directory
pub type AnimationFile = BufReader<File>;

/// Animation effect - plays one frame line per tick, looping forever
///
/// The source is opened on construction and closed when the effect is
/// dropped. If it cannot be opened the effect stays inert and never repaints.
/// Any `Read + Seek` source can back playback through [`Self::from_source`];
/// the slot stores the file-backed form.
#[derive(Debug)]
pub struct AnimationEffect<S = AnimationFile> {
    params: AnimationParams,
    frames: Option<FrameReader<S>>,
}

/// Only plain file names are accepted, nothing that walks the directory tree
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn open_frames(name: &str, dir: &Path) -> Option<FrameReader<AnimationFile>> {
    if !is_plain_name(name) {
        return None;
    }
    let file = File::open(dir.join(name)).ok()?;
    if !file.metadata().ok()?.is_file() {
        return None;
    }
    Some(FrameReader::new(BufReader::new(file)))
}

impl AnimationEffect {
    /// Open `name` inside `dir`
    pub fn open(name: &str, dir: &Path) -> Self {
        Self::from_params(AnimationParams { name: name.into() }, dir)
    }

    pub fn from_params(params: AnimationParams, dir: &Path) -> Self {
        let frames = open_frames(&params.name, dir);
        if frames.is_some() {
            log::info!("Start to play animation: {}", params.name);
        } else {
            log::warn!("Failed to open animation: {}", params.name);
        }
        Self { params, frames }
    }
}

impl<S: Read + Seek> AnimationEffect<S> {
    /// Play frames from an already opened source
    pub fn from_source(name: &str, source: S) -> Self {
        log::info!("Start to play animation: {name}");
        Self {
            params: AnimationParams { name: name.into() },
            frames: Some(FrameReader::new(source)),
        }
    }

    pub const fn params(&self) -> &AnimationParams {
        &self.params
    }

    /// Whether a file is open and playing
    pub const fn is_playing(&self) -> bool {
        self.frames.is_some()
    }

    /// Frames played since the last loop restart
    pub fn frame(&self) -> Option<u32> {
        self.frames.as_ref().map(FrameReader::frame)
    }
}

impl<S: Read + Seek> Effect for AnimationEffect<S> {
    const KIND: EffectKind = EffectKind::Animation;

    fn update<G: Geometry>(&mut self, light: &mut G, _delta_ms: u32) -> bool {
        let Some(frames) = self.frames.as_mut() else {
            return false;
        };
        match frames.read_frame(light.data()) {
            Ok(changed) => changed,
            Err(err) => {
                log::warn!("Animation {} stopped: {err}", self.params.name);
                self.frames = None;
                false
            }
        }
    }

    fn write_fields(&self, doc: &mut Document) {
        doc.write_fields(&self.params);
    }
}

impl<S> Drop for AnimationEffect<S> {
    fn drop(&mut self) {
        if self.frames.is_some() {
            log::info!("Stop playing animation: {}", self.params.name);
        }
    }
}
