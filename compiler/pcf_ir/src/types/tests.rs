use super::*;

#[test]
fn nat_is_the_only_base_type() {
    assert_eq!(PcfType::base("Nat"), Ok(PcfType::Natural));
    assert_eq!(
        PcfType::base("Bool"),
        Err(TypeNameError::Unsupported {
            name: "Bool".to_string()
        })
    );
}

#[test]
fn function_types_render_right_associative() {
    let nat_to_nat = PcfType::function(PcfType::Natural, PcfType::Natural);
    assert_eq!(nat_to_nat.to_string(), "Nat -> Nat");

    let curried = PcfType::function(PcfType::Natural, nat_to_nat.clone());
    assert_eq!(curried.to_string(), "Nat -> Nat -> Nat");

    let higher = PcfType::function(nat_to_nat, PcfType::Natural);
    assert_eq!(higher.to_string(), "(Nat -> Nat) -> Nat");
}
