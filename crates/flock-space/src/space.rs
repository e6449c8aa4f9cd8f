//! Continuous 2-D space with optional toroidal wrapping.
//!
//! # Data layout
//!
//! Agent positions live in a plain `Vec<Vec2>` indexed by `AgentId` — the
//! authoritative store, read on every steering pass.  Alongside it an R-tree
//! (via `rstar`) indexes the same points for radius queries.
//!
//! # Query semantics
//!
//! `neighbors_within` must behave exactly like a brute-force scan with
//! wrap-aware distances.  The R-tree is therefore only a pre-filter: it
//! selects candidates by bounding box, and the exact (wrapped) distance
//! predicate is applied afterwards.  On a torus the query circle may cross a
//! seam, so the query point is mirrored by ±width/±height where needed and
//! the per-mirror results are merged.
//!
//! Results are sorted by id and deduplicated, which both removes mirror
//! duplicates and fixes the iteration order — downstream steering sums are
//! floating-point, so a stable order is part of run reproducibility.

use rstar::{AABB, RTree, RTreeObject};

use flock_core::{AgentId, Vec2};

use crate::{SpaceError, SpaceResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the spatial index: a 2-D point with the owning `AgentId`.
#[derive(Clone, PartialEq)]
struct AgentEntry {
    point: [f64; 2],
    id: AgentId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── ContinuousSpace ───────────────────────────────────────────────────────────

/// A continuous `[0, width) × [0, height)` space holding one position per
/// registered agent.
///
/// Toroidal spaces wrap every stored coordinate into bounds; non-toroidal
/// spaces reject out-of-bounds positions with [`SpaceError::OutOfBounds`]
/// (the boundary policy here is *error*, never clamp — a failed `move_agent`
/// leaves the stored position untouched).
pub struct ContinuousSpace {
    width: f64,
    height: f64,
    toroidal: bool,
    /// Position per agent, indexed by `AgentId`.
    positions: Vec<Vec2>,
    index: RTree<AgentEntry>,
}

impl ContinuousSpace {
    /// Create an empty space.  Dimensions must be positive and finite; the
    /// model configuration validates this before construction.
    pub fn new(width: f64, height: f64, toroidal: bool) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self {
            width,
            height,
            toroidal,
            positions: Vec::new(),
            index: RTree::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_toroidal(&self) -> bool {
        self.toroidal
    }

    /// Number of registered agents.
    pub fn agent_count(&self) -> usize {
        self.positions.len()
    }

    /// `true` if `pos` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }

    /// Wrap each coordinate into `[0, dimension)`.
    #[inline]
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }

    // ── Registration and movement ─────────────────────────────────────────

    /// Register `agent` at `pos`.
    ///
    /// Agents must be placed in ascending id order (the id doubles as the
    /// position-table index).  Toroidal spaces wrap `pos` before storing;
    /// non-toroidal spaces reject out-of-bounds positions.
    pub fn place(&mut self, agent: AgentId, pos: Vec2) -> SpaceResult<()> {
        let next = self.positions.len();
        if agent.index() < next {
            return Err(SpaceError::AlreadyPlaced(agent));
        }
        if agent.index() > next {
            return Err(SpaceError::NonContiguousId { expected: next as u32, got: agent });
        }
        let stored = self.check_or_wrap(pos)?;
        self.positions.push(stored);
        self.index.insert(AgentEntry { point: [stored.x, stored.y], id: agent });
        Ok(())
    }

    /// Update `agent`'s position, wrapping on a torus and erroring on a
    /// bounded space when `new_pos` lies outside it.
    pub fn move_agent(&mut self, agent: AgentId, new_pos: Vec2) -> SpaceResult<()> {
        let i = agent.index();
        if i >= self.positions.len() {
            return Err(SpaceError::Unplaced(agent));
        }
        let stored = self.check_or_wrap(new_pos)?;

        let old = self.positions[i];
        let removed = self.index.remove(&AgentEntry { point: [old.x, old.y], id: agent });
        debug_assert!(removed.is_some(), "spatial index out of sync for {agent}");
        self.index.insert(AgentEntry { point: [stored.x, stored.y], id: agent });
        self.positions[i] = stored;
        Ok(())
    }

    /// Current position of `agent`.
    ///
    /// # Panics
    /// Panics if `agent` was never placed (SoA indexing contract).
    #[inline]
    pub fn position(&self, agent: AgentId) -> Vec2 {
        self.positions[agent.index()]
    }

    /// All positions, indexed by `AgentId`.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// Signed vector from `from` to `to`, using the minimal wrap-around
    /// delta per axis on a torus.
    pub fn displacement(&self, from: Vec2, to: Vec2) -> Vec2 {
        let mut dx = to.x - from.x;
        let mut dy = to.y - from.y;
        if self.toroidal {
            dx -= self.width * (dx / self.width).round();
            dy -= self.height * (dy / self.height).round();
        }
        Vec2::new(dx, dy)
    }

    /// Wrap-aware Euclidean distance between two positions.
    #[inline]
    pub fn distance(&self, a: Vec2, b: Vec2) -> f64 {
        self.displacement(a, b).length()
    }

    // ── Neighbor queries ──────────────────────────────────────────────────

    /// Every agent whose (wrap-aware) distance to `center` is ≤ `radius`,
    /// sorted by ascending id.
    ///
    /// The result excludes no one: an agent stored exactly at `center` —
    /// typically the querying agent itself — is included.  Self-exclusion is
    /// the caller's concern.
    pub fn neighbors_within(&self, center: Vec2, radius: f64) -> Vec<AgentId> {
        if !(radius >= 0.0) || !radius.is_finite() {
            return Vec::new();
        }
        let center = if self.toroidal { self.wrap(center) } else { center };
        let r2 = radius * radius;

        let mut found = Vec::new();
        for ox in self.axis_offsets(center.x, self.width, radius) {
            for oy in self.axis_offsets(center.y, self.height, radius) {
                let q = [center.x + ox, center.y + oy];
                let envelope =
                    AABB::from_corners([q[0] - radius, q[1] - radius], [q[0] + radius, q[1] + radius]);
                for entry in self.index.locate_in_envelope_intersecting(&envelope) {
                    let dx = entry.point[0] - q[0];
                    let dy = entry.point[1] - q[1];
                    if dx * dx + dy * dy <= r2 {
                        found.push(entry.id);
                    }
                }
            }
        }

        // Mirror queries may see the same agent more than once when the
        // radius approaches half a dimension.
        found.sort_unstable();
        found.dedup();
        found
    }

    /// Query-point offsets along one axis: the identity, plus a ±dimension
    /// mirror for each seam the query circle crosses.  Bounded spaces never
    /// mirror.
    fn axis_offsets(&self, coord: f64, dimension: f64, radius: f64) -> Vec<f64> {
        let mut offsets = vec![0.0];
        if self.toroidal {
            if coord <= radius {
                offsets.push(dimension);
            }
            if coord + radius >= dimension {
                offsets.push(-dimension);
            }
        }
        offsets
    }

    // ── Internal ──────────────────────────────────────────────────────────

    fn check_or_wrap(&self, pos: Vec2) -> SpaceResult<Vec2> {
        if self.toroidal {
            Ok(self.wrap(pos))
        } else if self.contains(pos) {
            Ok(pos)
        } else {
            Err(SpaceError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            })
        }
    }
}
