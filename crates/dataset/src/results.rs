//! Analysis-shaped views over a parsed dataset, addressable by pin.
//!
//! Vector naming follows the netlist emitter's convention: node `k`'s
//! voltage is `k.V` (DC), `k.v` (AC) or `k.Vt` (transient); a source's
//! branch current is `name.I` / `name.i` / `name.It`; scattering
//! parameters are `S[i,j]`; sweep axes are `frequency` and `time`.
//!
//! Views are derived, read-only projections: rebuild one from the dataset
//! whenever fresh numbers arrive.

use indexmap::IndexMap;
use num_complex::Complex64;

use netbind_core::{Circuit, CircuitError, ComponentId, NodeId};

use crate::dataset::Dataset;
use crate::errors::{BindError, DatasetError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Dc,
    Ac,
    Transient,
    SParam,
}

/// Typed view of a dataset for one analysis kind.
#[derive(Debug, Clone)]
pub enum TypedResult {
    Dc(DcResult),
    Ac(AcResult),
    Transient(TransientResult),
    SParam(SParamResult),
}

/// Build the analysis-shaped view for `kind` from a dataset.
pub fn typed_result(dataset: &Dataset, kind: AnalysisKind) -> TypedResult {
    match kind {
        AnalysisKind::Dc => TypedResult::Dc(DcResult::from_dataset(dataset)),
        AnalysisKind::Ac => TypedResult::Ac(AcResult::from_dataset(dataset)),
        AnalysisKind::Transient => {
            TypedResult::Transient(TransientResult::from_dataset(dataset))
        }
        AnalysisKind::SParam => TypedResult::SParam(SParamResult::from_dataset(dataset)),
    }
}

/// Resolve a pin to its node id, surfacing "never resolved" as the binder's
/// pin-not-connected condition.
fn pin_node(circuit: &Circuit, id: ComponentId, terminal: &str) -> Result<NodeId, BindError> {
    match circuit.node_id(id, terminal) {
        Ok(node) => Ok(node),
        Err(CircuitError::Unresolved {
            component,
            terminal,
        }) => Err(BindError::PinNotConnected {
            component,
            terminal,
        }),
        Err(e) => Err(e.into()),
    }
}

/// DC operating point: one value per node voltage and per source current.
#[derive(Debug, Clone, Default)]
pub struct DcResult {
    pub voltages: IndexMap<String, Complex64>,
    pub currents: IndexMap<String, Complex64>,
}

impl DcResult {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut result = Self::default();
        for (name, vector) in dataset.dependents() {
            let Some(&value) = vector.values.first() else {
                continue;
            };
            if let Some(node) = name.strip_suffix(".V") {
                result.voltages.insert(node.to_string(), value);
            } else if let Some(component) = name.strip_suffix(".I") {
                result.currents.insert(component.to_string(), value);
            }
        }
        result
    }

    /// Voltage at one pin. Ground pins are zero by definition, without a
    /// vector lookup.
    pub fn voltage_at_pin(
        &self,
        circuit: &Circuit,
        id: ComponentId,
        terminal: &str,
    ) -> Result<Complex64, BindError> {
        let node = pin_node(circuit, id, terminal)?;
        if node.is_ground() {
            return Ok(Complex64::ZERO);
        }
        self.voltages
            .get(&node.to_string())
            .copied()
            .ok_or_else(|| {
                DatasetError::VectorNotFound {
                    name: format!("{node}.V"),
                    available: self.voltages.keys().map(|n| format!("{n}.V")).collect(),
                }
                .into()
            })
    }

    /// Branch current reported under a component's name. Only source-like
    /// components carry one.
    pub fn current_through(&self, name: &str) -> Result<Complex64, BindError> {
        self.currents
            .get(name)
            .copied()
            .ok_or_else(|| BindError::CurrentNotAvailable {
                name: name.to_string(),
                available: self.currents.keys().cloned().collect(),
            })
    }

    pub fn voltage_across(
        &self,
        circuit: &Circuit,
        id: ComponentId,
        terminal_a: &str,
        terminal_b: &str,
    ) -> Result<Complex64, BindError> {
        let a = self.voltage_at_pin(circuit, id, terminal_a)?;
        let b = self.voltage_at_pin(circuit, id, terminal_b)?;
        Ok(a - b)
    }

    /// Current flowing into a pin from the external circuit. The internal
    /// branch current of a two-terminal source flows from its first
    /// terminal to its second, so this is `+I` at the first terminal and
    /// `-I` at the second; the two always sum to exactly zero.
    pub fn current_into_pin(
        &self,
        circuit: &Circuit,
        id: ComponentId,
        terminal: &str,
    ) -> Result<Complex64, BindError> {
        let component = circuit.component(id);
        let current = self.current_through(component.name())?;
        let offset = component
            .terminal_index(terminal)
            .ok_or_else(|| CircuitError::UnknownTerminal {
                component: component.name().to_string(),
                terminal: terminal.to_string(),
                available: component.terminals().to_vec(),
            })?;
        match offset {
            0 => Ok(current),
            1 => Ok(-current),
            _ => Err(BindError::CurrentNotAvailable {
                name: component.name().to_string(),
                available: self.currents.keys().cloned().collect(),
            }),
        }
    }
}

/// Small-signal sweep: complex vectors over the frequency axis.
#[derive(Debug, Clone, Default)]
pub struct AcResult {
    pub frequency: Vec<f64>,
    pub voltages: IndexMap<String, Vec<Complex64>>,
    pub currents: IndexMap<String, Vec<Complex64>>,
}

impl AcResult {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut result = Self {
            frequency: sweep_axis(dataset, "frequency"),
            ..Self::default()
        };
        for (name, vector) in dataset.dependents() {
            if let Some(node) = name.strip_suffix(".v") {
                result
                    .voltages
                    .insert(node.to_string(), vector.values.clone());
            } else if let Some(component) = name.strip_suffix(".i") {
                result
                    .currents
                    .insert(component.to_string(), vector.values.clone());
            }
        }
        result
    }

    fn zeros(&self) -> Vec<Complex64> {
        vec![Complex64::ZERO; self.frequency.len()]
    }

    pub fn voltage_at_pin(
        &self,
        circuit: &Circuit,
        id: ComponentId,
        terminal: &str,
    ) -> Result<Vec<Complex64>, BindError> {
        let node = pin_node(circuit, id, terminal)?;
        if node.is_ground() {
            return Ok(self.zeros());
        }
        self.voltages.get(&node.to_string()).cloned().ok_or_else(|| {
            DatasetError::VectorNotFound {
                name: format!("{node}.v"),
                available: self.voltages.keys().map(|n| format!("{n}.v")).collect(),
            }
            .into()
        })
    }

    pub fn current_through(&self, name: &str) -> Result<Vec<Complex64>, BindError> {
        self.currents
            .get(name)
            .cloned()
            .ok_or_else(|| BindError::CurrentNotAvailable {
                name: name.to_string(),
                available: self.currents.keys().cloned().collect(),
            })
    }

    /// Elementwise `voltage_at_pin(a) - voltage_at_pin(b)`.
    pub fn voltage_across(
        &self,
        circuit: &Circuit,
        id: ComponentId,
        terminal_a: &str,
        terminal_b: &str,
    ) -> Result<Vec<Complex64>, BindError> {
        let a = self.voltage_at_pin(circuit, id, terminal_a)?;
        let b = self.voltage_at_pin(circuit, id, terminal_b)?;
        Ok(a.iter().zip(&b).map(|(x, y)| x - y).collect())
    }

    pub fn current_into_pin(
        &self,
        circuit: &Circuit,
        id: ComponentId,
        terminal: &str,
    ) -> Result<Vec<Complex64>, BindError> {
        let current = self.current_through(circuit.component(id).name())?;
        let component = circuit.component(id);
        let offset = component
            .terminal_index(terminal)
            .ok_or_else(|| CircuitError::UnknownTerminal {
                component: component.name().to_string(),
                terminal: terminal.to_string(),
                available: component.terminals().to_vec(),
            })?;
        match offset {
            0 => Ok(current),
            1 => Ok(current.iter().map(|c| -c).collect()),
            _ => Err(BindError::CurrentNotAvailable {
                name: component.name().to_string(),
                available: self.currents.keys().cloned().collect(),
            }),
        }
    }
}

/// Time-domain sweep: real vectors over the time axis.
#[derive(Debug, Clone, Default)]
pub struct TransientResult {
    pub time: Vec<f64>,
    pub voltages: IndexMap<String, Vec<f64>>,
    pub currents: IndexMap<String, Vec<f64>>,
}

impl TransientResult {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut result = Self {
            time: sweep_axis(dataset, "time"),
            ..Self::default()
        };
        for (name, vector) in dataset.dependents() {
            let reals: Vec<f64> = vector.values.iter().map(|c| c.re).collect();
            if let Some(node) = name.strip_suffix(".Vt") {
                result.voltages.insert(node.to_string(), reals);
            } else if let Some(component) = name.strip_suffix(".It") {
                result.currents.insert(component.to_string(), reals);
            }
        }
        result
    }

    pub fn voltage_at_pin(
        &self,
        circuit: &Circuit,
        id: ComponentId,
        terminal: &str,
    ) -> Result<Vec<f64>, BindError> {
        let node = pin_node(circuit, id, terminal)?;
        if node.is_ground() {
            return Ok(vec![0.0; self.time.len()]);
        }
        self.voltages.get(&node.to_string()).cloned().ok_or_else(|| {
            DatasetError::VectorNotFound {
                name: format!("{node}.Vt"),
                available: self.voltages.keys().map(|n| format!("{n}.Vt")).collect(),
            }
            .into()
        })
    }

    pub fn current_through(&self, name: &str) -> Result<Vec<f64>, BindError> {
        self.currents
            .get(name)
            .cloned()
            .ok_or_else(|| BindError::CurrentNotAvailable {
                name: name.to_string(),
                available: self.currents.keys().cloned().collect(),
            })
    }

    pub fn voltage_across(
        &self,
        circuit: &Circuit,
        id: ComponentId,
        terminal_a: &str,
        terminal_b: &str,
    ) -> Result<Vec<f64>, BindError> {
        let a = self.voltage_at_pin(circuit, id, terminal_a)?;
        let b = self.voltage_at_pin(circuit, id, terminal_b)?;
        Ok(a.iter().zip(&b).map(|(x, y)| x - y).collect())
    }
}

/// Scattering parameters: a sparse port-pair matrix over the frequency
/// axis.
#[derive(Debug, Clone, Default)]
pub struct SParamResult {
    pub frequency: Vec<f64>,
    pub params: IndexMap<(u32, u32), Vec<Complex64>>,
}

impl SParamResult {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut result = Self {
            frequency: sweep_axis(dataset, "frequency"),
            ..Self::default()
        };
        for (name, vector) in dataset.dependents() {
            if let Some(pair) = port_pair(name) {
                result.params.insert(pair, vector.values.clone());
            }
        }
        result
    }

    /// `S[i,j]` over the sweep. A pair with no vector in the dataset is a
    /// topologically disconnected port pair: its coupling is genuinely
    /// zero, so a zero vector of sweep length is synthesized instead of an
    /// error.
    pub fn s(&self, i: u32, j: u32) -> Vec<Complex64> {
        self.params
            .get(&(i, j))
            .cloned()
            .unwrap_or_else(|| vec![Complex64::ZERO; self.frequency.len()])
    }
}

/// `S[i,j]` -> (i, j).
fn port_pair(name: &str) -> Option<(u32, u32)> {
    let body = name.strip_prefix("S[")?.strip_suffix(']')?;
    let (i, j) = body.split_once(',')?;
    Some((i.trim().parse().ok()?, j.trim().parse().ok()?))
}

/// Real values of the named independent vector, falling back to the first
/// independent vector when the conventional name is absent.
fn sweep_axis(dataset: &Dataset, name: &str) -> Vec<f64> {
    dataset
        .independents()
        .find(|(n, _)| *n == name)
        .or_else(|| dataset.independents().next())
        .map(|(_, v)| v.values.iter().map(|c| c.re).collect())
        .unwrap_or_default()
}
