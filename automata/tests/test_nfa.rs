use automata::{state_set, Automaton, Error, LookupError, StateSet, Symbol, Target, NFA};

include!("macros.rs");

/// Binary strings ending with a 1.
fn ends_with_one() -> NFA<&'static str, char> {
    NFA::new(
        ["p", "q"],
        ['0', '1'],
        [
            ("p", '0', state_set!["p"]),
            ("p", '1', state_set!["p", "q"]),
            ("q", '0', state_set![]),
            ("q", '1', state_set![]),
        ],
        "p",
        ["q"],
    )
    .unwrap()
}

/// Binary strings with an even number of 0s or an even number of 1s.
fn even_zeros_or_ones() -> NFA<&'static str, char> {
    NFA::new(
        ["S0", "S1", "S2", "S3", "S4"],
        [Symbol::Input('0'), Symbol::Input('1'), Symbol::Epsilon],
        [
            ("S0", Symbol::Epsilon, state_set!["S1", "S3"]),
            ("S1", Symbol::Input('0'), state_set!["S2"]),
            ("S1", Symbol::Input('1'), state_set!["S1"]),
            ("S2", Symbol::Input('0'), state_set!["S1"]),
            ("S2", Symbol::Input('1'), state_set!["S2"]),
            ("S3", Symbol::Input('0'), state_set!["S3"]),
            ("S3", Symbol::Input('1'), state_set!["S4"]),
            ("S4", Symbol::Input('0'), state_set!["S4"]),
            ("S4", Symbol::Input('1'), state_set!["S3"]),
        ],
        "S0",
        ["S1", "S3"],
    )
    .unwrap()
}

/// Strings containing "aaa".
fn triple_a() -> NFA<u32, char> {
    NFA::new(
        [0, 1, 2, 3],
        ['a', 'b'],
        [
            (0, 'a', state_set![0, 1]),
            (0, 'b', state_set![0]),
            (1, 'a', state_set![2]),
            (2, 'a', state_set![3]),
            (3, 'a', state_set![3]),
            (3, 'b', state_set![3]),
        ],
        0,
        [3],
    )
    .unwrap()
}

#[test]
fn test_has_epsilon_moves() {
    assert!(!ends_with_one().has_epsilon_moves());
    assert!(even_zeros_or_ones().has_epsilon_moves());
    assert!(!triple_a().has_epsilon_moves());
}

#[test]
fn test_delta() {
    let a1 = ends_with_one();
    assert_eq!(state_set!["p"], a1.delta(&"p", &'0'.into()).unwrap());
    assert_eq!(state_set!["p", "q"], a1.delta(&"p", &'1'.into()).unwrap());
    assert!(a1.delta(&"q", &'0'.into()).unwrap().is_empty());
    assert!(a1.delta(&"q", &'1'.into()).unwrap().is_empty());

    let a2 = even_zeros_or_ones();
    assert_eq!(
        state_set!["S1", "S3"],
        a2.delta(&"S0", &NFA::<&str, char>::EPSILON).unwrap()
    );
    assert!(a2.delta(&"S0", &'0'.into()).unwrap().is_empty());
    assert!(a2.delta(&"S1", &Symbol::Epsilon).unwrap().is_empty());
    assert_eq!(state_set!["S4"], a2.delta(&"S3", &'1'.into()).unwrap());
}

#[test]
fn test_delta_lookup_errors() {
    let a = triple_a();
    assert!(matches!(
        a.delta(&7, &'a'.into()),
        Err(Error::Lookup(LookupError::UnknownState { .. }))
    ));
    assert!(matches!(
        a.delta(&0, &Symbol::Epsilon),
        Err(Error::Lookup(LookupError::UnknownSymbol { .. }))
    ));
}

#[test]
fn test_accept() {
    run_tests!(ends_with_one(), &["110110110101", "1", "01"], &["11110", "", "10"]);
    run_tests!(
        even_zeros_or_ones(),
        &["1001", "10101", "", "0", "1"],
        &["10", "01", "0001"]
    );
    run_tests!(
        triple_a(),
        &["ababaaabaaaaabababa", "aaa", "baaab"],
        &["abababaa", "", "aabaab"]
    );
}

#[test]
fn test_accept_dead_branches_keep_reading() {
    let a1 = ends_with_one();
    // Every branch but the one staying in p dies along the way.
    assert!(a1.accept("1111101".chars()).unwrap());
    assert!(matches!(
        a1.accept("10x1".chars()),
        Err(Error::Lookup(LookupError::UnknownSymbol { .. }))
    ));

    let stuck: NFA<u32, char> =
        NFA::new([0, 1], ['a', 'b'], [(0, 'a', state_set![1])], 0, [1]).unwrap();
    assert!(!stuck.accept("b".chars()).unwrap());
    // The frontier is empty after "b", but the unknown symbol is still an error.
    assert!(stuck.accept("bz".chars()).is_err());
}

#[test]
fn test_epsilon_closure() {
    let a2 = even_zeros_or_ones();
    assert_eq!(
        state_set!["S0", "S1", "S3"],
        a2.epsilon_closure(&"S0").unwrap()
    );
    for state in ["S1", "S2", "S3", "S4"] {
        assert_eq!(state_set![state], a2.epsilon_closure(&state).unwrap());
    }

    // Without epsilon moves, the closure of a state is the state alone.
    let a1 = ends_with_one();
    assert_eq!(state_set!["p"], a1.epsilon_closure(&"p").unwrap());

    assert!(matches!(
        a2.epsilon_closure(&"S9"),
        Err(Error::Lookup(LookupError::UnknownState { .. }))
    ));
}

#[test]
fn test_epsilon_closure_set() {
    let a2 = even_zeros_or_ones();
    let set = state_set!["S0", "S2"];
    assert_eq!(
        state_set!["S0", "S1", "S2", "S3"],
        a2.epsilon_closure_set(&set).unwrap()
    );
    assert!(a2.epsilon_closure_set(&StateSet::new()).unwrap().is_empty());
    assert!(a2.epsilon_closure_set(&state_set!["S0", "S5"]).is_err());
}

#[test]
fn test_epsilon_closure_with_cycles() {
    let eps: Symbol<char> = Symbol::Epsilon;
    let a: NFA<u32, char> = NFA::new(
        [0, 1, 2, 3, 4],
        [Symbol::Input('a'), eps],
        [
            (0, eps, Target::multiple([1])),
            (1, eps, Target::multiple([2])),
            (2, eps, Target::multiple([0, 1])),
            (2, Symbol::Input('a'), Target::multiple([3])),
            (3, eps, Target::multiple([3, 4])),
        ],
        0,
        [4],
    )
    .unwrap();

    assert_eq!(state_set![0, 1, 2], a.epsilon_closure(&0).unwrap());
    assert_eq!(state_set![0, 1, 2], a.epsilon_closure(&2).unwrap());
    assert_eq!(state_set![3, 4], a.epsilon_closure(&3).unwrap());

    run_tests!(a, &["a"], &["", "aa"]);
}

#[test]
fn test_epsilon_closure_is_idempotent() {
    let a2 = even_zeros_or_ones();
    for state in a2.states().iter() {
        let closure = a2.epsilon_closure(state).unwrap();
        for member in closure.iter() {
            let inner = a2.epsilon_closure(member).unwrap();
            assert!(inner.is_subset(&closure));
        }
    }
}

#[test]
fn test_long_epsilon_chain() {
    let n: u32 = 10_000;
    let a: NFA<u32, char> = NFA::new(
        0..=n,
        [Symbol::Epsilon, Symbol::Input('a')],
        (0..n).map(|i| (i, Symbol::Epsilon, Target::multiple([i + 1]))),
        0,
        [n],
    )
    .unwrap();

    assert_eq!(n as usize + 1, a.epsilon_closure(&0).unwrap().len());
    assert!(a.accept("".chars()).unwrap());
}

#[test]
fn test_accessors() {
    let a = triple_a();
    assert!(!a.is_deterministic());
    assert_eq!(&0, a.initial_state());
    assert_eq!(&state_set![3], a.final_states());
    assert_eq!(4, a.states().len());
    assert_eq!(
        Some(&Target::multiple([0, 1])),
        a.transitions().get(&0, &Symbol::Input('a'))
    );
}
