//! Rig sequential pair generator
//!
//! Proposes candidate image pairs for feature matching on captures from a
//! multi-camera ring rig. Frames are named `<sequence>_<frame>_<camera>.<ext>`;
//! each frame is paired with the frames of the next few capture indices whose
//! camera sits within a small radius on the ring.
//!
//! # Pipeline
//!
//! 1. **Names**: an ordered list of known frames (`sources`).
//! 2. **Decode**: each anchor name becomes a typed `FrameName` (`naming`).
//! 3. **Neighborhood**: camera indices around the anchor's camera (`ring`).
//! 4. **Synthesize**: candidate names checked against the known set (`pairs`).
//! 5. **Deduplicate**: unordered duplicates removed, first occurrence kept.
//! 6. **Write**: one `"<a> <b>"` line per pair (`output`).
//!
//! # Module Structure
//!
//! - `config`: `PairingConfig` with defaults, JSON file and env overrides
//! - `error`: `PairError`, the fatal error taxonomy
//! - `storage`: SQLite feature store as an alternative name source

pub mod config;
pub mod error;
pub mod naming;
pub mod output;
pub mod pairs;
pub mod ring;
pub mod sources;
pub mod storage;

pub use config::{PairingConfig, PairingOverrides};
pub use error::{PairError, PairResult};
pub use naming::{split_frame_name, FrameName, RawFields};
pub use output::{format_pairs, write_pairs};
pub use pairs::{dedup_unordered, generate_pairs, known_names, synthesize, CandidatePair};
pub use ring::{neighborhood, BoundaryPolicy, Neighborhood};
pub use sources::{parse_image_list, NameSource};
pub use storage::{FeatureStore, SqliteFeatureStore};
