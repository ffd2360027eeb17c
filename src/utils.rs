// macro and utils

// HashSet macro to create sets easily (for free-variable assertions in tests)
#[macro_export]
macro_rules! set {
    ( $( $x:expr ),* ) => {
        {
            let mut temp_set = std::collections::HashSet::new();
            $(
                temp_set.insert($x);
            )*
            temp_set
        }
    };
}

// Term builders: terms are constructed programmatically (there is no parser),
// so these keep deeply nested trees readable.
//
//   app!(abs!("x", var!("x")), var!("y"))  ==  (λx. x) y

#[macro_export]
macro_rules! var {
    ( $name:expr ) => {
        $crate::term::Term::var($name)
    };
    ( $name:expr, $ty:expr ) => {
        $crate::term::Term::var_typed($name, $ty)
    };
}

#[macro_export]
macro_rules! abs {
    ( $param:expr, $body:expr ) => {
        $crate::term::Term::abs($param, $body)
    };
    ( $param:expr, $ty:expr, $body:expr ) => {
        $crate::term::Term::abs_typed($param, $ty, $body)
    };
}

#[macro_export]
macro_rules! app {
    ( $function:expr, $argument:expr ) => {
        $crate::term::Term::app($function, $argument)
    };
}
