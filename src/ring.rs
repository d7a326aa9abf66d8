//! Rotational neighborhoods on the rig's camera ring.

use std::collections::HashSet;

/// How offsets past either end of `[0, ring_size)` are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Indices wrap modulo the ring size (`ring_size - 1` neighbors `0`).
    Wrap,
    /// The ring is treated as a bounded range and out-of-range offsets drop.
    Clip,
}

impl BoundaryPolicy {
    pub fn from_wraparound(wraparound: bool) -> Self {
        if wraparound {
            Self::Wrap
        } else {
            Self::Clip
        }
    }
}

/// Camera indices within `radius` of a center camera.
///
/// Behaves as a set; iteration follows offset order `-radius..=radius`
/// with collapsed duplicates removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighborhood {
    indices: Vec<u32>,
    members: HashSet<u32>,
}

impl Neighborhood {
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: u32) -> bool {
        self.members.contains(&index)
    }

    fn insert(&mut self, index: u32) {
        if self.members.insert(index) {
            self.indices.push(index);
        }
    }
}

/// Computes the neighborhood of `center` on a ring of `ring_size` cameras.
///
/// The center is always part of its own neighborhood when it lies on the
/// ring. A zero-sized ring has no neighbors under either policy.
pub fn neighborhood(
    center: u32,
    radius: u32,
    ring_size: u32,
    policy: BoundaryPolicy,
) -> Neighborhood {
    let mut out = Neighborhood::default();
    if ring_size == 0 {
        return out;
    }
    let size = i64::from(ring_size);
    let center = i64::from(center);
    let radius = i64::from(radius);
    match policy {
        BoundaryPolicy::Wrap => {
            // Every index is present once the span has covered the whole ring.
            for n in (center - radius)..=(center + radius) {
                out.insert(n.rem_euclid(size) as u32);
                if out.len() == ring_size as usize {
                    break;
                }
            }
        }
        BoundaryPolicy::Clip => {
            let low = (center - radius).max(0);
            let high = (center + radius).min(size - 1);
            for n in low..=high {
                out.insert(n as u32);
            }
        }
    }
    out
}
