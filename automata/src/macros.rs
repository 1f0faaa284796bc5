/// Create a [`StateSet`](crate::StateSet) holding the given states.
#[macro_export]
macro_rules! state_set {
    () => {
        $crate::StateSet::new()
    };
    ($($state:expr),+ $(,)?) => {{
        let mut set = $crate::StateSet::new();
        $(
            set.insert($state);
        )+
        set
    }};
}
