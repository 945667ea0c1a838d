/// DSL macro for building test schemas.
///
/// Produces `Schema<&'static str>`.
///
/// # Syntax
///
/// ```ignore
/// schema! {
///     [A, B, C];
///     A -> B;           // single attributes
///     A, B -> C;        // composite determinant
/// }
/// ```
///
/// Panics if the result is not a valid schema, so only use it for inputs the
/// test expects to be valid.
#[macro_export]
macro_rules! schema {
    ([$($attr:ident),* $(,)?] $(; $($lhs:ident),+ -> $($rhs:ident),+)* $(;)?) => {
        nfcheck_core::Schema::<&'static str>::new(
            [$(stringify!($attr)),*],
            vec![
                $($crate::fd!($($lhs),+ -> $($rhs),+)),*
            ],
        )
        .expect("test schema must be valid")
    };
}

/// Build a single `FunctionalDependency<&'static str>`.
#[macro_export]
macro_rules! fd {
    ($($lhs:ident),+ -> $($rhs:ident),+) => {
        nfcheck_core::FunctionalDependency::<&'static str>::new(
            [$(stringify!($lhs)),+],
            [$(stringify!($rhs)),+],
        )
    };
}

/// Build an `AttributeSet<&'static str>`.
#[macro_export]
macro_rules! attrs {
    ($($attr:ident),* $(,)?) => {
        [$(stringify!($attr)),*]
            .into_iter()
            .collect::<nfcheck_core::AttributeSet<&'static str>>()
    };
}
