
macro_rules! uint_define {
    ($class:ident, $size:expr, $numlen:expr, $vty:ty ) => {

        #[derive(Default, Debug, Hash, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $class {
            value: $vty,
        }

        impl Display for $class {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                write!(f, "{}", self.value)
            }
        }

        impl Deref for $class {
            type Target = $vty;
            fn deref(&self) -> &$vty {
                &self.value
            }
        }

        impl Parse for $class {
            fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
                let bts = bufeat_ref(buf, $size)?;
                let mut full = [0u8; $numlen];
                full[$numlen - $size..].copy_from_slice(bts);
                self.value = <$vty>::from_be_bytes(full);
                Ok($size)
            }
        }

        impl Serialize for $class {
            fn serialize(&self) -> Vec<u8> {
                self.to_bytes().to_vec()
            }
            fn size(&self) -> usize {
                $size
            }
        }

        impl_field_only_new!{$class}

        impl $class {

            pub const MAX: $vty = maybe!($size == $numlen,
                <$vty>::MAX,
                ((1u128 << ($size * 8)) - 1) as $vty
            );
            pub const SIZE: usize = $size;

            pub const fn from(v: $vty) -> Self {
                if v > Self::MAX {
                    panic!(concat!(stringify!($class), " overflow: value exceeds MAX"))
                }
                Self{ value: v }
            }

            pub fn from_u64(v: u64) -> Ret<Self> {
                if (v as u128) > (Self::MAX as u128) {
                    return errf!("{} value {} overflow max {}", stringify!($class), v, Self::MAX)
                }
                Ok(Self{ value: v as $vty })
            }

            pub fn uint(&self) -> $vty {
                self.value
            }

            pub fn to_bytes(&self) -> [u8; $size] {
                let mut real = [0u8; $size];
                let bts = self.value.to_be_bytes();
                real.copy_from_slice(&bts[$numlen - $size..]);
                real
            }

            pub fn checked_add_uint(&self, v: $vty) -> Ret<Self> {
                match self.value.checked_add(v) {
                    Some(n) if n <= Self::MAX => Ok(Self{ value: n }),
                    _ => errf!("{} add {} overflow", self.value, v),
                }
            }

            pub fn checked_sub_uint(&self, v: $vty) -> Ret<Self> {
                match self.value.checked_sub(v) {
                    Some(n) => Ok(Self{ value: n }),
                    _ => errf!("{} sub {} underflow", self.value, v),
                }
            }

        }

    };
}


uint_define!{Uint1, 1, 1, u8}
uint_define!{Uint2, 2, 2, u16}
uint_define!{Uint4, 4, 4, u32}
uint_define!{Uint5, 5, 8, u64}
uint_define!{Uint8, 8, 8, u64}
