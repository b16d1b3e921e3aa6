/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing path macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct an open path with the vertexes given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use polystroke::poly_open;
/// # use polystroke::poly::*;
/// let path = poly_open![(0.0, 1.0), (2.0, 0.0)];
/// assert!(!path.is_closed());
/// assert_eq!(path.vertex_count(), 2);
/// assert_eq!(path[1].x, 2.0);
/// ```
#[macro_export]
macro_rules! poly_open {
    ($( $x:expr ),* $(,)?) => {
        {
            use $crate::poly::*;
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut path = PolyPath::with_capacity(size, false);
            $(
                path.add($x.0, $x.1);
            )*
            path
        }
    };
}

/// Construct a closed path with the vertexes given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use polystroke::poly_closed;
/// # use polystroke::poly::*;
/// let path = poly_closed![(0.0, 1.0), (2.0, 0.0), (2.0, 2.0)];
/// assert!(path.is_closed());
/// assert_eq!(path.segment_count(), 3);
/// ```
#[macro_export]
macro_rules! poly_closed {
    ($( $x:expr ),* $(,)?) => {
        {
            use $crate::poly::*;
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut path = PolyPath::with_capacity(size, true);
            $(
                path.add($x.0, $x.1);
            )*
            path
        }
    };
}
