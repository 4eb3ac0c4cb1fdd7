
#[macro_export]
macro_rules! impl_field_only_new {
    ($class:ident) => {
        impl Field for $class {
            fn new() -> Self {
                Self::default()
            }
        }
    };
}


/*
* zero-sized key for single-value state items
*/
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Empty {}

impl Serialize for Empty {
    fn serialize(&self) -> Vec<u8> {
        vec![]
    }
    fn size(&self) -> usize {
        0
    }
}

impl Parse for Empty {
    fn parse(&mut self, _: &[u8]) -> Ret<usize> {
        Ok(0)
    }
}

impl_field_only_new!{Empty}
