
/*
* caller broke an invariant it must guarantee
*/
#[macro_export]
macro_rules! never {
    () => {
        panic!("never call this")
    };
    ($($arg:tt)+) => {
        panic!($($arg)+)
    };
}
