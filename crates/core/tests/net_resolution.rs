use netbind_core::{Circuit, CircuitError, Component, ComponentKind, NodeId};

/// R1 in series with V1, both returned to a single ground symbol.
fn voltage_divider() -> Circuit {
    let mut circuit = Circuit::new();
    let v1 = circuit.add(Component::voltage_source("V1"));
    let r1 = circuit.add(Component::resistor("R1"));
    let r2 = circuit.add(Component::resistor("R2"));
    let gnd = circuit.add(Component::ground("GND1"));
    circuit.connect((v1, "nplus"), (r1, "n1")).unwrap();
    circuit.connect((r1, "n2"), (r2, "n1")).unwrap();
    circuit.connect((r2, "n2"), (gnd, "n")).unwrap();
    circuit.connect((v1, "nminus"), (gnd, "n")).unwrap();
    circuit
}

#[test]
fn test_ground_net_is_node_zero() {
    let mut circuit = voltage_divider();
    circuit.resolve_nodes();
    let gnd = circuit.find("GND1").unwrap();
    let r2 = circuit.find("R2").unwrap();
    let v1 = circuit.find("V1").unwrap();
    assert_eq!(circuit.node_id(gnd, "n").unwrap(), NodeId::GROUND);
    assert_eq!(circuit.node_id(r2, "n2").unwrap(), NodeId::GROUND);
    assert_eq!(circuit.node_id(v1, "nminus").unwrap(), NodeId::GROUND);
    assert!(!circuit.node_id(v1, "nplus").unwrap().is_ground());
}

#[test]
fn test_nonground_ids_are_dense_from_one() {
    let mut circuit = voltage_divider();
    circuit.resolve_nodes();
    let v1 = circuit.find("V1").unwrap();
    let r1 = circuit.find("R1").unwrap();
    let mut ids = vec![
        circuit.node_id(v1, "nplus").unwrap().as_u32(),
        circuit.node_id(r1, "n2").unwrap().as_u32(),
    ];
    ids.sort();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(circuit.node_count(), 2);
}

#[test]
fn test_transitive_connection_forms_one_net() {
    let mut circuit = Circuit::new();
    let r1 = circuit.add(Component::resistor("R1"));
    let r2 = circuit.add(Component::resistor("R2"));
    let r3 = circuit.add(Component::resistor("R3"));
    circuit.connect((r1, "n1"), (r2, "n1")).unwrap();
    circuit.connect((r2, "n1"), (r3, "n1")).unwrap();
    circuit.resolve_nodes();
    let a = circuit.node_id(r1, "n1").unwrap();
    let b = circuit.node_id(r2, "n1").unwrap();
    let c = circuit.node_id(r3, "n1").unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_disjoint_grounds_share_node_zero() {
    // Two ground symbols that are never wired to each other still name the
    // same virtual node.
    let mut circuit = Circuit::new();
    let r1 = circuit.add(Component::resistor("R1"));
    let g1 = circuit.add(Component::ground("GND1"));
    let g2 = circuit.add(Component::ground("GND2"));
    circuit.connect((r1, "n1"), (g1, "n")).unwrap();
    circuit.resolve_nodes();
    assert_eq!(circuit.node_id(g1, "n").unwrap(), NodeId::GROUND);
    assert_eq!(circuit.node_id(g2, "n").unwrap(), NodeId::GROUND);
    assert_eq!(circuit.node_id(r1, "n1").unwrap(), NodeId::GROUND);
    assert!(!circuit.node_id(r1, "n2").unwrap().is_ground());
}

#[test]
fn test_isolated_terminal_gets_its_own_node() {
    let mut circuit = Circuit::new();
    let r1 = circuit.add(Component::resistor("R1"));
    let r2 = circuit.add(Component::resistor("R2"));
    circuit.connect((r1, "n2"), (r2, "n1")).unwrap();
    circuit.resolve_nodes();
    // Never-connected pins still resolve, each to a distinct node.
    let a = circuit.node_id(r1, "n1").unwrap();
    let b = circuit.node_id(r2, "n2").unwrap();
    let shared = circuit.node_id(r1, "n2").unwrap();
    assert_ne!(a, b);
    assert_ne!(a, shared);
    assert_ne!(b, shared);
}

#[test]
fn test_resolution_is_idempotent() {
    let mut circuit = voltage_divider();
    circuit.resolve_nodes();
    let v1 = circuit.find("V1").unwrap();
    let first = circuit.node_id(v1, "nplus").unwrap();
    circuit.resolve_nodes();
    assert_eq!(circuit.node_id(v1, "nplus").unwrap(), first);
}

#[test]
fn test_repeated_connect_is_noop() {
    let mut circuit = Circuit::new();
    let r1 = circuit.add(Component::resistor("R1"));
    let r2 = circuit.add(Component::resistor("R2"));
    circuit.connect((r1, "n1"), (r2, "n1")).unwrap();
    circuit.connect((r1, "n1"), (r2, "n1")).unwrap();
    circuit.connect((r2, "n1"), (r1, "n1")).unwrap();
    circuit.resolve_nodes();
    assert_eq!(
        circuit.node_id(r1, "n1").unwrap(),
        circuit.node_id(r2, "n1").unwrap()
    );
    // One shared net plus two isolated pins.
    assert_eq!(circuit.node_count(), 3);
}

#[test]
fn test_unknown_terminal_fails_fast() {
    let mut circuit = Circuit::new();
    let r1 = circuit.add(Component::resistor("R1"));
    let r2 = circuit.add(Component::resistor("R2"));
    let err = circuit.connect((r1, "base"), (r2, "n1")).unwrap_err();
    match &err {
        CircuitError::UnknownTerminal {
            component,
            terminal,
            available,
        } => {
            assert_eq!(component, "R1");
            assert_eq!(terminal, "base");
            assert_eq!(available, &["n1".to_string(), "n2".to_string()]);
        }
        other => panic!("expected UnknownTerminal, got {other:?}"),
    }
    assert!(err.to_string().contains("R1"));
    assert!(err.to_string().contains("base"));
}

#[test]
fn test_node_id_before_resolution_is_error() {
    let mut circuit = Circuit::new();
    let r1 = circuit.add(Component::resistor("R1"));
    assert!(matches!(
        circuit.node_id(r1, "n1"),
        Err(CircuitError::Unresolved { .. })
    ));
}

#[test]
fn test_edit_after_resolution_invalidates() {
    let mut circuit = voltage_divider();
    circuit.resolve_nodes();
    assert!(circuit.is_resolved());
    let r3 = circuit.add(Component::resistor("R3"));
    assert!(!circuit.is_resolved());
    assert!(matches!(
        circuit.node_id(r3, "n1"),
        Err(CircuitError::Unresolved { .. })
    ));
    circuit.resolve_nodes();
    assert!(circuit.node_id(r3, "n1").is_ok());
}

#[test]
fn test_add_same_name_is_idempotent() {
    let mut circuit = Circuit::new();
    let first = circuit.add(Component::resistor("R1"));
    let again = circuit.add(Component::resistor("R1"));
    assert_eq!(first, again);
    assert_eq!(circuit.len(), 1);
}

#[test]
fn test_parameter_card_has_no_pins() {
    let mut circuit = Circuit::new();
    let card = circuit.add(Component::new("AC1", ComponentKind::Analysis));
    let r1 = circuit.add(Component::resistor("R1"));
    circuit.resolve_nodes();
    // The card is skipped by resolution but any terminal access on it is a
    // structural error.
    assert!(circuit.node_id(r1, "n1").is_ok());
    assert!(matches!(
        circuit.node_id(card, "n1"),
        Err(CircuitError::UnknownTerminal { .. })
    ));
}

#[test]
fn test_file_nport_terminal_arity() {
    let mut circuit = Circuit::new();
    let s2p = circuit.add(Component::new(
        "X1",
        ComponentKind::FileNPort { ports: 2 },
    ));
    assert_eq!(
        circuit.component(s2p).terminals(),
        &["n1".to_string(), "n2".to_string(), "ref".to_string()]
    );
    let gnd = circuit.add(Component::ground("GND1"));
    circuit.connect((s2p, "ref"), (gnd, "n")).unwrap();
    circuit.resolve_nodes();
    assert_eq!(circuit.node_id(s2p, "ref").unwrap(), NodeId::GROUND);
    assert!(!circuit.node_id(s2p, "n2").unwrap().is_ground());
}

#[test]
fn test_custom_component_terminal_scan() {
    let kind = ComponentKind::Custom {
        fields: vec![
            "n".to_string(),
            "n1".to_string(),
            "gate".to_string(),
            "width".to_string(),
            "model".to_string(),
        ],
    };
    let component = Component::new("U1", kind);
    assert_eq!(
        component.terminals(),
        &["n".to_string(), "n1".to_string(), "gate".to_string()]
    );
}
