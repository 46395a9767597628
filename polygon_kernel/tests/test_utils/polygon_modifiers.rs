use polygon_kernel::polygon::Polygon;

/// Cycles all the vertex index positions forward by `n`. E.g. index 0 becomes 1, last index becomes
/// 0, etc.
pub fn cycle_start_index_forward(input: &Polygon<f64>, n: usize) -> Polygon<f64> {
    assert!(n > 0, "cycling forward by 0 just returns the same polygon");
    assert!(
        n < input.vertex_count(),
        "cycling forward by more than the vertex count is unnecessary"
    );
    input
        .iter_vertexes()
        .cycle()
        .skip(n)
        .take(input.vertex_count())
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ModifiedPolygonState {
    pub inverted_direction: bool,
    pub cycle_position: usize,
}

impl ModifiedPolygonState {
    pub fn new(inverted_direction: bool, cycle_position: usize) -> Self {
        Self {
            inverted_direction,
            cycle_position,
        }
    }
}

/// Set of variations of one polygon that describe the same shape (reversed winding and/or
/// shifted start vertex), used to check results do not depend on vertex order.
#[derive(Debug, Clone)]
pub struct ModifiedPolygonSet<'a> {
    pub input: &'a Polygon<f64>,
    pub invert_direction: bool,
    pub cycle_index_positions: bool,
}

impl<'a> ModifiedPolygonSet<'a> {
    pub fn new(
        input: &'a Polygon<f64>,
        invert_direction: bool,
        cycle_index_positions: bool,
    ) -> Self {
        Self {
            input,
            invert_direction,
            cycle_index_positions,
        }
    }

    pub fn accept_closure<F>(&self, visitor: &mut F)
    where
        F: FnMut(Polygon<f64>, ModifiedPolygonState),
    {
        visitor(self.input.clone(), ModifiedPolygonState::new(false, 0));
        if self.invert_direction {
            visitor(self.input.reversed(), ModifiedPolygonState::new(true, 0));
        }

        if self.cycle_index_positions {
            for i in 1..self.input.vertex_count() {
                let cycled = cycle_start_index_forward(self.input, i);
                visitor(cycled, ModifiedPolygonState::new(false, i));
            }

            if self.invert_direction {
                let inverted = self.input.reversed();
                for i in 1..self.input.vertex_count() {
                    let cycled = cycle_start_index_forward(&inverted, i);
                    visitor(cycled, ModifiedPolygonState::new(true, i));
                }
            }
        }
    }

    /// All variations collected into a vector.
    pub fn collect(&self) -> Vec<(Polygon<f64>, ModifiedPolygonState)> {
        let mut result = Vec::new();
        self.accept_closure(&mut |pg, state| result.push((pg, state)));
        result
    }
}
