
macro_rules! fixed_define {
    ($class:ident, $size: expr) => {

        #[derive(Debug, Hash, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $class {
            bytes: [u8; $size],
        }

        impl Default for $class {
            fn default() -> Self {
                Self::DEFAULT
            }
        }

        impl Display for $class {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                write!(f, "{}", hex::encode(&self.bytes))
            }
        }

        impl Index<usize> for $class {
            type Output = u8;
            fn index(&self, idx: usize) -> &Self::Output {
                &self.bytes[idx]
            }
        }

        impl Deref for $class {
            type Target = [u8; $size];
            fn deref(&self) -> &[u8; $size] {
                &self.bytes
            }
        }

        impl AsRef<[u8]> for $class {
            fn as_ref(&self) -> &[u8] {
                self.bytes.as_slice()
            }
        }

        impl Parse for $class {
            fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
                self.bytes = bufeat_array::<$size>(buf)?;
                Ok($size)
            }
        }

        impl Serialize for $class {
            fn serialize(&self) -> Vec<u8> {
                self.bytes.to_vec()
            }
            fn size(&self) -> usize {
                $size
            }
        }

        impl_field_only_new!{$class}

        impl Hex for $class {
            fn from_hex(buf: &[u8]) -> Ret<Self> {
                let bts = bytes_from_hex(buf, $size)?;
                Self::from_slice(&bts)
            }
            fn to_hex(&self) -> String {
                hex::encode(&self.bytes)
            }
        }

        impl $class {

            pub const SIZE: usize = $size;
            pub const DEFAULT: Self = Self{ bytes: [0u8; $size] };

            pub const fn from(v: [u8; $size]) -> Self {
                Self{ bytes: v }
            }

            pub fn from_slice(v: &[u8]) -> Ret<Self> {
                Ok(Self{ bytes: bufeat_array::<$size>(v)? })
            }

            pub fn not_zero(&self) -> bool {
                self.bytes.iter().any(|a|*a>0)
            }

            pub fn to_vec(&self) -> Vec<u8> {
                self.bytes.to_vec()
            }

            pub fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }

        }

    }
}


fixed_define!{Fixed1,  1}
fixed_define!{Fixed16, 16}
fixed_define!{Fixed21, 21}
fixed_define!{Fixed32, 32}
fixed_define!{Fixed33, 33}
fixed_define!{Fixed64, 64}


/*
* Bool
*/
pub type Bool = Fixed1;

impl Bool {

    pub fn check(&self) -> bool {
        self[0] != 0
    }

    pub fn new(v: bool) -> Self {
        Self {
            bytes: [maybe!(v, 1, 0)]
        }
    }

}
