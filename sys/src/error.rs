
pub type Ret<T> = Result<T, Error>;
pub type Rerr = Ret<()>;


#[macro_export]
macro_rules! errf {
    ($($arg:tt)*) => {
        Err(format!($($arg)*))
    };
}


#[macro_export]
macro_rules! erf {
    ($($arg:tt)*) => {
        format!($($arg)*)
    };
}


/*
* take Some(v) or return a not find error
*/
#[macro_export]
macro_rules! must_have {
    ($tip:expr, $obj:expr) => {
        match $obj {
            Some(v) => v,
            None => return errf!("{} not find", $tip),
        }
    };
}


#[cfg(test)]
mod error_tests {
    use super::*;

    fn find(v: Option<u8>) -> Ret<u8> {
        let n = must_have!("item", v);
        Ok(n + 1)
    }

    #[test]
    fn must_have_returns_not_find() {
        assert_eq!(find(Some(1)), Ok(2));
        assert_eq!(find(None), Err("item not find".to_owned()));
    }
}
