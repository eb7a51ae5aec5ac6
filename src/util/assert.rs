pub fn assert_ord<T: PartialOrd>(_: &T) {}
pub fn assert_partial_eq<T: PartialEq>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

#[allow(unused_macros)]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub(crate) use current_location;

#[allow(unused_macros)]
macro_rules! check {
    ($lhs:expr) => {{
        let lhs = $lhs;
        $crate::util::assert::assert_type::<bool>(&lhs);
        if !lhs {
            panic!(
                "check failed: {}: {}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check;

#[allow(unused_macros)]
macro_rules! check_ge {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_ord(&lhs);
        if lhs < rhs {
            panic!(
                "check failed: {}: {} >= {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check_ge;

#[allow(unused_macros)]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_eq(&lhs);
        if lhs != rhs {
            panic!(
                "check failed: {}: {} == {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check_eq;

#[cfg(test)]
mod tests {
    #[test]
    fn check_passes_on_true() {
        check!(1 + 1 == 2);
        check_ge!(3usize, 3usize);
        check_eq!("a", "a");
    }

    #[test]
    fn check_evaluates_operands_once() {
        let mut calls = 0;
        let mut next = || {
            calls += 1;
            calls
        };
        check!(next() == 1);
        check_ge!(next(), 2);
        check_eq!(next(), 3);
        assert_eq!(calls, 3);
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn check_ge_panics_when_smaller() {
        check_ge!(2usize, 3usize);
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn check_eq_panics_when_different() {
        check_eq!(1, 2);
    }
}
