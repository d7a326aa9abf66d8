//! Structured frame names.
//!
//! Rig captures are named `<sequence>_<frame>_<camera>.<ext>`, e.g.
//! `frame_000042_03.jpg`. The frame field is the capture index (6 digits) and
//! the camera field is the position on the rig ring (2 digits).

use std::fmt;

use crate::error::{PairError, PairResult};

/// Zero-padded width of the frame-index field.
pub const FRAME_INDEX_WIDTH: usize = 6;
/// Zero-padded width of the camera-index field.
pub const CAMERA_INDEX_WIDTH: usize = 2;

/// The textual fields of a frame name, before integer decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub sequence_prefix: &'a str,
    /// Everything after the first underscore of the stem prefix.
    pub frame_index: &'a str,
    pub camera_index: &'a str,
    pub extension: &'a str,
}

/// Splits a frame name right-to-left: extension at the last `.`, camera
/// field at the last `_`, then sequence prefix at the first `_`.
pub fn split_frame_name(name: &str) -> PairResult<RawFields<'_>> {
    let (stem, extension) = name
        .rsplit_once('.')
        .ok_or_else(|| PairError::malformed(name, "missing '.' before extension"))?;
    let (prefix, camera_index) = stem
        .rsplit_once('_')
        .ok_or_else(|| PairError::malformed(name, "missing camera index separator"))?;
    let (sequence_prefix, frame_index) = prefix
        .split_once('_')
        .ok_or_else(|| PairError::malformed(name, "missing frame index separator"))?;
    Ok(RawFields {
        sequence_prefix,
        frame_index,
        camera_index,
        extension,
    })
}

/// A decoded frame name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameName {
    pub sequence_prefix: String,
    pub frame_index: u64,
    pub camera_index: u32,
    pub extension: String,
}

impl FrameName {
    pub fn parse(name: &str) -> PairResult<Self> {
        let fields = split_frame_name(name)?;
        let frame_index = parse_index(name, "frame", fields.frame_index)?;
        let camera_index = parse_index(name, "camera", fields.camera_index)?;
        Ok(Self {
            sequence_prefix: fields.sequence_prefix.to_string(),
            frame_index,
            camera_index,
            extension: fields.extension.to_string(),
        })
    }

    /// Name of the frame with the same prefix and extension at another
    /// capture index and camera position.
    pub fn with_indices(&self, frame_index: u64, camera_index: u32) -> String {
        format!(
            "{}_{:0fw$}_{:0cw$}.{}",
            self.sequence_prefix,
            frame_index,
            camera_index,
            self.extension,
            fw = FRAME_INDEX_WIDTH,
            cw = CAMERA_INDEX_WIDTH,
        )
    }
}

impl fmt::Display for FrameName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.with_indices(self.frame_index, self.camera_index))
    }
}

fn parse_index<T: std::str::FromStr>(name: &str, field: &str, raw: &str) -> PairResult<T> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PairError::malformed(
            name,
            format!("{} index '{}' is not a decimal number", field, raw),
        ));
    }
    raw.parse()
        .map_err(|_| PairError::malformed(name, format!("{} index '{}' out of range", field, raw)))
}
