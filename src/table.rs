//! The capacity state table: a dense N-dimensional array indexed by capacity
//! vectors.
//!
//! The table's domain is the full Cartesian product
//! `[0..=Cap[0]] × [0..=Cap[1]] × ...`, stored row-major in a flat `Vec`.
//! Axes may carry a coordinate offset so that domains containing negative
//! indices (partial sums over `[-ΣW, +ΣW]`, for instance) map onto physical
//! storage.
//!
//! Every caller is internal, so out-of-range access is a programming error
//! and panics rather than returning a `Result`.

/// Axis extents and row-major strides, separable from the cell storage so the
/// parallel fold can resolve source indices while the cells are mutably
/// borrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Geometry {
    extents: Vec<usize>,
    strides: Vec<usize>,
}

impl Geometry {
    fn new(extents: Vec<usize>) -> Self {
        assert!(!extents.is_empty(), "table needs at least one axis");
        let mut strides = vec![1usize; extents.len()];
        for axis in (0..extents.len().saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1]
                .checked_mul(extents[axis + 1])
                .expect("capacity domain too large to address");
        }
        // Force the total size computation so an oversized axis 0 also traps.
        let _ = strides[0]
            .checked_mul(extents[0])
            .expect("capacity domain too large to address");
        Self { extents, strides }
    }

    pub(crate) fn len(&self) -> usize {
        self.strides[0] * self.extents[0]
    }

    pub(crate) fn arity(&self) -> usize {
        self.extents.len()
    }

    /// The coordinate of `linear` along `axis`.
    #[inline]
    pub(crate) fn axis_coord(&self, linear: usize, axis: usize) -> usize {
        (linear / self.strides[axis]) % self.extents[axis]
    }

    /// The linear index reached by subtracting `costs` component-wise from
    /// `dest`, or `None` if any axis would underflow.
    #[inline]
    pub(crate) fn source_of(&self, dest: usize, costs: &[usize]) -> Option<usize> {
        debug_assert_eq!(costs.len(), self.arity());
        let mut src = dest;
        for (axis, &c) in costs.iter().enumerate() {
            if c == 0 {
                continue;
            }
            if self.axis_coord(dest, axis) < c {
                return None;
            }
            src -= c * self.strides[axis];
        }
        Some(src)
    }

    fn linear(&self, physical: &[usize]) -> usize {
        debug_assert_eq!(physical.len(), self.arity());
        physical
            .iter()
            .zip(&self.strides)
            .map(|(&p, &s)| p * s)
            .sum()
    }
}

/// Dense state table over capacity vectors, allocated fresh per solve.
#[derive(Debug, Clone)]
pub(crate) struct Table<C> {
    cells: Vec<C>,
    geo: Geometry,
    /// Per-axis offset: physical index = logical coordinate + offset.
    offsets: Vec<i64>,
}

impl<C: Clone> Table<C> {
    /// Table over `[0..=cap]` per axis, every cell set to `fill`.
    ///
    /// # Panics
    /// Panics on a negative capacity; callers validate before allocating.
    pub(crate) fn new(capacities: &[i64], fill: C) -> Self {
        let extents = capacities
            .iter()
            .map(|&cap| {
                assert!(cap >= 0, "capacity must be non-negative");
                cap as usize + 1
            })
            .collect::<Vec<_>>();
        let offsets = vec![0; capacities.len()];
        Self::with_geometry(Geometry::new(extents), offsets, fill)
    }

    /// Table over the logical domain `[lo[k]..=hi[k]]` per axis. Axes with a
    /// negative `lo` are offset onto physical indices.
    pub(crate) fn with_bounds(lo: &[i64], hi: &[i64], fill: C) -> Self {
        assert_eq!(lo.len(), hi.len(), "bound arity mismatch");
        let extents = lo
            .iter()
            .zip(hi)
            .map(|(&l, &h)| {
                assert!(l <= h, "axis lower bound exceeds upper bound");
                (h - l + 1) as usize
            })
            .collect::<Vec<_>>();
        let offsets = lo.iter().map(|&l| -l).collect();
        Self::with_geometry(Geometry::new(extents), offsets, fill)
    }

    fn with_geometry(geo: Geometry, offsets: Vec<i64>, fill: C) -> Self {
        let cells = vec![fill; geo.len()];
        Self { cells, geo, offsets }
    }
}

impl<C> Table<C> {
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn arity(&self) -> usize {
        self.geo.arity()
    }

    pub(crate) fn geometry(&self) -> &Geometry {
        &self.geo
    }

    /// Inclusive logical index range of `axis`.
    pub(crate) fn bounds(&self, axis: usize) -> (i64, i64) {
        let lo = -self.offsets[axis];
        (lo, lo + self.geo.extents[axis] as i64 - 1)
    }

    /// Read a cell by capacity vector.
    ///
    /// # Panics
    /// Panics if the vector is out of the declared domain.
    pub(crate) fn get(&self, coords: &[i64]) -> &C {
        let idx = self.physical_linear(coords);
        &self.cells[idx]
    }

    /// Write a cell by capacity vector.
    ///
    /// # Panics
    /// Panics if the vector is out of the declared domain.
    pub(crate) fn set(&mut self, coords: &[i64], value: C) {
        let idx = self.physical_linear(coords);
        self.cells[idx] = value;
    }

    #[inline]
    pub(crate) fn cell(&self, linear: usize) -> &C {
        &self.cells[linear]
    }

    #[inline]
    pub(crate) fn set_linear(&mut self, linear: usize, value: C) {
        self.cells[linear] = value;
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn cells(&self) -> &[C] {
        &self.cells
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn cells_mut(&mut self) -> &mut [C] {
        &mut self.cells
    }

    fn physical_linear(&self, coords: &[i64]) -> usize {
        assert_eq!(coords.len(), self.arity(), "capacity vector arity mismatch");
        let physical = coords
            .iter()
            .zip(&self.offsets)
            .zip(&self.geo.extents)
            .map(|((&c, &offset), &extent)| {
                let p = c + offset;
                assert!(
                    p >= 0 && (p as usize) < extent,
                    "capacity vector out of declared bounds"
                );
                p as usize
            })
            .collect::<Vec<_>>();
        self.geo.linear(&physical)
    }
}
