//! Component model as seen by the net-resolution core.
//!
//! The core never inspects electrical parameters. A component contributes
//! three things: its terminal-name sequence, whether it pins its net to
//! ground, and whether the solver reports a branch current under its name.
//! Parameter handling and netlist serialization live downstream.

/// Component categories known to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentKind {
    Resistor,
    Capacitor,
    Inductor,
    VoltageSource,
    CurrentSource,
    Diode,
    Bjt,
    Mosfet,
    /// Ground reference. Its terminal's net is forced to node 0.
    Ground,
    /// Excitation port for small-signal and scattering analyses.
    Port { number: u32 },
    /// File-backed N-port block. Terminal count is fixed at construction:
    /// one terminal per port plus a reference terminal.
    FileNPort { ports: usize },
    /// Parameter-only analysis card. No electrical pins.
    Analysis,
    /// Opaque field bag. Terminals are discovered by name convention.
    Custom { fields: Vec<String> },
}

impl ComponentKind {
    /// Terminal names in declaration order.
    pub fn terminal_names(&self) -> Vec<String> {
        match self {
            Self::Resistor | Self::Capacitor | Self::Inductor | Self::Port { .. } => {
                vec!["n1".into(), "n2".into()]
            }
            Self::VoltageSource | Self::CurrentSource => {
                vec!["nplus".into(), "nminus".into()]
            }
            Self::Diode => vec!["anode".into(), "cathode".into()],
            Self::Bjt => vec!["base".into(), "collector".into(), "emitter".into()],
            Self::Mosfet => {
                vec!["gate".into(), "drain".into(), "source".into(), "bulk".into()]
            }
            Self::Ground => vec!["n".into()],
            Self::FileNPort { ports } => {
                let mut names: Vec<String> = (1..=*ports).map(|i| format!("n{i}")).collect();
                names.push("ref".into());
                names
            }
            Self::Analysis => Vec::new(),
            Self::Custom { fields } => fields
                .iter()
                .filter(|field| is_terminal_name(field))
                .cloned()
                .collect(),
        }
    }

    pub fn is_ground(&self) -> bool {
        matches!(self, Self::Ground)
    }

    /// Whether the solver reports a branch current under this component's
    /// name. True for the source-like kinds.
    pub fn reports_current(&self) -> bool {
        matches!(
            self,
            Self::VoltageSource | Self::CurrentSource | Self::Port { .. }
        )
    }
}

/// Recognize a field name that denotes a connection terminal: the single
/// letter `n`, a letter followed by digits (`n1`, `p3`), or one of the
/// semantic aliases used by the built-in kinds.
pub fn is_terminal_name(name: &str) -> bool {
    const ALIASES: [&str; 12] = [
        "nplus",
        "nminus",
        "anode",
        "cathode",
        "base",
        "collector",
        "emitter",
        "gate",
        "drain",
        "source",
        "bulk",
        "ref",
    ];

    if name == "n" || ALIASES.contains(&name) {
        return true;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            let rest = chars.as_str();
            !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

/// One component instance. Identity is assigned by the circuit it is added
/// to; the terminal list is frozen at construction.
#[derive(Debug, Clone)]
pub struct Component {
    name: String,
    kind: ComponentKind,
    terminals: Vec<String>,
}

impl Component {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        let terminals = kind.terminal_names();
        Self {
            name: name.into(),
            kind,
            terminals,
        }
    }

    pub fn resistor(name: impl Into<String>) -> Self {
        Self::new(name, ComponentKind::Resistor)
    }

    pub fn capacitor(name: impl Into<String>) -> Self {
        Self::new(name, ComponentKind::Capacitor)
    }

    pub fn inductor(name: impl Into<String>) -> Self {
        Self::new(name, ComponentKind::Inductor)
    }

    pub fn voltage_source(name: impl Into<String>) -> Self {
        Self::new(name, ComponentKind::VoltageSource)
    }

    pub fn current_source(name: impl Into<String>) -> Self {
        Self::new(name, ComponentKind::CurrentSource)
    }

    pub fn ground(name: impl Into<String>) -> Self {
        Self::new(name, ComponentKind::Ground)
    }

    pub fn port(name: impl Into<String>, number: u32) -> Self {
        Self::new(name, ComponentKind::Port { number })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    /// Terminal names in declaration order.
    pub fn terminals(&self) -> &[String] {
        &self.terminals
    }

    pub fn terminal_index(&self, terminal: &str) -> Option<usize> {
        self.terminals.iter().position(|t| t == terminal)
    }

    pub fn is_ground(&self) -> bool {
        self.kind.is_ground()
    }

    pub fn reports_current(&self) -> bool {
        self.kind.reports_current()
    }
}
