use sys::*;


pub trait Serialize {
    fn serialize(&self) -> Vec<u8>;
    fn size(&self) -> usize;
}

pub trait Parse {
    // return: use length
    fn parse(&mut self, buf: &[u8]) -> Ret<usize>;
}


pub trait Field : Serialize + Parse {

    fn new() -> Self where Self: Sized;

    // panic if parse fail
    fn must(buf: &[u8]) -> Self where Self: Sized {
        let mut v = Self::new();
        if let Err(e) = v.parse(buf) {
            panic!("{}", e)
        }
        v
    }

    fn build(buf: &[u8]) -> Ret<Self> where Self: Sized {
        let mut v = Self::new();
        v.parse(buf).map(|_|v)
    }

    fn create(buf: &[u8]) -> Ret<(Self, usize)> where Self: Sized {
        let mut v = Self::new();
        v.parse(buf).map(|s|(v,s))
    }

}


pub trait Hex : Field {
    fn to_hex(&self) -> String;
    fn from_hex(buf: &[u8]) -> Ret<Self> where Self: Sized;
}

pub trait Readable : Field {
    fn to_readable(&self) -> String;
    fn from_readable(s: &str) -> Ret<Self> where Self: Sized;
}
