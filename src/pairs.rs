//! Candidate pair synthesis and unordered deduplication.

use std::collections::HashSet;
use std::fmt;

use crate::config::PairingConfig;
use crate::error::PairResult;
use crate::naming::FrameName;
use crate::ring::neighborhood;

/// An ordered pair of known frame names. `anchor` is the frame that
/// generated the pair; the two names are never equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CandidatePair<'a> {
    pub anchor: &'a str,
    pub partner: &'a str,
}

impl<'a> CandidatePair<'a> {
    pub fn new(anchor: &'a str, partner: &'a str) -> Self {
        Self { anchor, partner }
    }

    /// Order-independent key: the two names sorted lexicographically.
    pub fn canonical_key(&self) -> (&'a str, &'a str) {
        if self.anchor <= self.partner {
            (self.anchor, self.partner)
        } else {
            (self.partner, self.anchor)
        }
    }
}

impl fmt::Display for CandidatePair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.anchor, self.partner)
    }
}

/// Hash-backed set of the frame names that exist.
pub fn known_names<S: AsRef<str>>(names: &[S]) -> HashSet<&str> {
    names.iter().map(|n| n.as_ref()).collect()
}

/// Emits raw candidate pairs in generation order.
///
/// Every frame but the last anchors a window of `step_size` frame indices
/// starting at its own, crossed with the ring neighborhood of its camera.
/// Candidates absent from `known` are dropped. A malformed anchor name
/// aborts the run.
pub fn synthesize<'a, S: AsRef<str>>(
    names: &'a [S],
    known: &HashSet<&'a str>,
    config: &PairingConfig,
) -> PairResult<Vec<CandidatePair<'a>>> {
    let policy = config.boundary_policy();
    let anchors = names.len().saturating_sub(1);
    let mut pairs = Vec::new();

    for frame1 in names[..anchors].iter().map(|n| n.as_ref()) {
        let decoded = FrameName::parse(frame1)?;
        let neighbors = neighborhood(decoded.camera_index, config.radius, config.ring_size, policy);
        let window_end = decoded.frame_index.saturating_add(config.step_size);

        for frame_index in decoded.frame_index..window_end {
            for camera_index in neighbors.iter() {
                let candidate = decoded.with_indices(frame_index, camera_index);
                let Some(&frame2) = known.get(candidate.as_str()) else {
                    continue;
                };
                if frame2 == frame1 {
                    continue;
                }
                pairs.push(CandidatePair::new(frame1, frame2));
            }
        }
    }
    Ok(pairs)
}

/// Removes pairs whose unordered key was already seen, keeping the first
/// occurrence with its original ordering.
pub fn dedup_unordered<'a, I>(pairs: I) -> Vec<CandidatePair<'a>>
where
    I: IntoIterator<Item = CandidatePair<'a>>,
{
    let mut seen = HashSet::new();
    pairs
        .into_iter()
        .filter(|pair| seen.insert(pair.canonical_key()))
        .collect()
}

/// Full pipeline over an ordered list of known frame names.
pub fn generate_pairs<'a, S: AsRef<str>>(
    names: &'a [S],
    config: &PairingConfig,
) -> PairResult<Vec<CandidatePair<'a>>> {
    config.validate()?;
    let known = known_names(names);
    log::debug!(
        "generating pairs for {} frames ({} distinct), config={:?}",
        names.len(),
        known.len(),
        config
    );
    let raw = synthesize(names, &known, config)?;
    let raw_count = raw.len();
    let pairs = dedup_unordered(raw);
    log::debug!("{} raw candidates, {} after dedup", raw_count, pairs.len());
    log::info!("found {} pairs", pairs.len());
    Ok(pairs)
}
