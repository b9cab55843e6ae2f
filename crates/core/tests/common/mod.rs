use netbind_core::{Circuit, Component, ComponentId};

pub mod strategies;

use strategies::Recipe;

/// Build a circuit from a recipe, returning the flat pin list in the same
/// order the recipe indexes it: resistor k owns pins 2k and 2k+1, ground g
/// owns pin `2 * resistors + g`.
pub fn build(recipe: &Recipe) -> (Circuit, Vec<(ComponentId, &'static str)>) {
    let mut circuit = Circuit::new();
    let mut pins = Vec::new();
    for k in 0..recipe.resistors {
        let id = circuit.add(Component::resistor(format!("R{k}")));
        pins.push((id, "n1"));
        pins.push((id, "n2"));
    }
    for g in 0..recipe.grounds {
        let id = circuit.add(Component::ground(format!("GND{g}")));
        pins.push((id, "n"));
    }
    for &(a, b) in &recipe.connections {
        circuit.connect(pins[a], pins[b]).unwrap();
    }
    (circuit, pins)
}

/// Reference partition of the recipe's pins under the declared connection
/// edges: repeated relabeling to a fixpoint, no union-find involved. With
/// `merge_grounds`, all ground pins are treated as one virtual node the way
/// resolution does.
pub fn reference_classes(recipe: &Recipe, merge_grounds: bool) -> Vec<usize> {
    let n = recipe.pin_count();
    let mut class: Vec<usize> = (0..n).collect();
    let mut edges = recipe.connections.clone();
    if merge_grounds && recipe.grounds > 1 {
        let first_ground = recipe.resistors * 2;
        for g in 1..recipe.grounds {
            edges.push((first_ground, first_ground + g));
        }
    }
    loop {
        let mut changed = false;
        for &(a, b) in &edges {
            let (ca, cb) = (class[a], class[b]);
            if ca != cb {
                let merged = ca.min(cb);
                for c in class.iter_mut() {
                    if *c == ca || *c == cb {
                        *c = merged;
                    }
                }
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    class
}
