use talkscript_core::condition::evaluate;
use talkscript_core::value::{Value, VariableStore};

fn store(pairs: &[(&str, Value)]) -> VariableStore {
    let mut s = VariableStore::new();
    for (k, v) in pairs {
        s.set(*k, v.clone());
    }
    s
}

#[test]
fn equality_is_case_insensitive() {
    let s = store(&[("name", Value::from("Greta"))]);
    assert!(evaluate("name == greta", &s));
    assert!(evaluate("name==GRETA", &s));
    assert!(!evaluate("name != Greta", &s));
}

#[test]
fn undefined_variable_is_false_not_an_error() {
    let s = VariableStore::new();
    assert!(!evaluate("ghost==1", &s));
    assert!(!evaluate("ghost<5", &s));
}

#[test]
fn le_is_not_matched_as_lt() {
    // If "<" matched first, the right side would be "=3" and the
    // comparison would silently degrade to false.
    let s = store(&[("count", Value::Int(3))]);
    assert!(evaluate("count<=3", &s));
    assert!(evaluate("count >= 3", &s));
    assert!(!evaluate("count<3", &s));
}

#[test]
fn integer_ordering() {
    let s = store(&[("count", Value::from("2"))]);
    assert!(evaluate("count<3", &s));
    assert!(evaluate("count>1", &s));
    assert!(!evaluate("count>3", &s));
    assert!(evaluate("count>=2", &s));
    assert!(evaluate("count<=2", &s));
}

#[test]
fn non_integer_ordering_is_false() {
    let s = store(&[("name", Value::from("abc"))]);
    assert!(!evaluate("name<5", &s));
    assert!(!evaluate("name>5", &s));
}

#[test]
fn boolean_values_compare_as_text() {
    let s = store(&[("armed", Value::Bool(true))]);
    assert!(evaluate("armed==TRUE", &s));
    assert!(evaluate("armed!=false", &s));
}

#[test]
fn missing_operator_is_false() {
    let s = store(&[("count", Value::Int(1))]);
    assert!(!evaluate("count", &s));
    assert!(!evaluate("", &s));
}
