/// strategies.rs
use proptest::prelude::*;

/// A build recipe for an arbitrary circuit: `resistors` two-terminal
/// components, `grounds` single-terminal ground symbols, and connections
/// between flat pin indices.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub resistors: usize,
    pub grounds: usize,
    pub connections: Vec<(usize, usize)>,
}

impl Recipe {
    pub fn pin_count(&self) -> usize {
        self.resistors * 2 + self.grounds
    }
}

/// Generate arbitrary recipes with up to `max_grounds` ground symbols.
pub fn arbitrary_recipe(max_grounds: usize) -> impl Strategy<Value = Recipe> {
    (1usize..=8, 0usize..=max_grounds).prop_flat_map(|(resistors, grounds)| {
        let pins = resistors * 2 + grounds;
        prop::collection::vec((0..pins, 0..pins), 0..=20).prop_map(move |connections| Recipe {
            resistors,
            grounds,
            connections,
        })
    })
}
