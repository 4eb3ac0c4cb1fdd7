use num_bigint::BigInt;
use num_bigint::Sign::{Minus, Plus, NoSign};
use num_traits::{Num, Zero, Signed};


pub const UNIT_MEI:  u8 = 248;
pub const UNIT_ZHU:  u8 = 240;
pub const UNIT_SHUO: u8 = 232;
pub const UNIT_AI:   u8 = 224;
pub const UNIT_MIAO: u8 = 216;

const U128S: usize = u128::BITS as usize / 8;
const U64S:  usize = u64::BITS as usize / 8;


/*
* value = numeral * 10^unit, numeral big-endian with sign in dist
*/
#[derive(Default, Hash, Clone, PartialEq, Eq)]
pub struct Amount {
    unit: u8,
    dist: i8,
    byte: Vec<u8>,
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.to_fin_string())
    }
}

impl Debug for Amount {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[{},{},{:?}]", self.unit, self.dist, self.byte)
    }
}


impl Parse for Amount {
    fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
        self.unit = bufeatone(buf)?;
        self.dist = bufeatone(&buf[1..])? as i8;
        let btlen = self.dist.unsigned_abs() as usize;
        self.byte = bufeat(&buf[2..], btlen)?;
        Ok(2 + btlen)
    }
}

impl Serialize for Amount {
    fn serialize(&self) -> Vec<u8> {
        let mut res = vec![self.unit, self.dist as u8];
        res.extend_from_slice(&self.byte);
        res
    }
    fn size(&self) -> usize {
        2 + self.byte.len()
    }
}

impl_field_only_new!{Amount}


impl Amount {

    pub fn unit(&self) -> u8 {
        self.unit
    }

    pub fn dist(&self) -> i8 {
        self.dist
    }

    pub fn byte(&self) -> &Vec<u8> {
        &self.byte
    }

    pub fn tail_len(&self) -> usize {
        self.byte.len()
    }

    pub fn tail_u128(&self) -> Ret<u128> {
        if self.byte.len() > U128S {
            return errf!("amount tail bytes length too long over {}", U128S)
        }
        let mut full = [0u8; U128S];
        full[U128S - self.byte.len()..].copy_from_slice(&self.byte);
        Ok(u128::from_be_bytes(full))
    }

    pub fn is_zero(&self) -> bool {
        self.unit == 0 || self.dist == 0 || bytes_is_zero(&self.byte)
    }

    pub fn not_zero(&self) -> bool {
        ! self.is_zero()
    }

    // must be positive and cannot be zero
    pub fn is_positive(&self) -> bool {
        self.dist > 0 && self.not_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.dist < 0 && self.not_zero()
    }

}


// create
impl Amount {

    pub fn zero() -> Amount {
        Self::default()
    }

    pub fn mei(v: u64) -> Amount {
        Self::coin(v, UNIT_MEI)
    }

    pub fn zhu(v: u64) -> Amount {
        Self::coin(v, UNIT_ZHU)
    }

    pub fn coin(v: u64, u: u8) -> Amount {
        Self::coin_u128(v as u128, u)
    }

    // strip decimal zeros into the unit
    pub fn coin_u128(mut v: u128, mut u: u8) -> Amount {
        if v == 0 || u == 0 {
            return Self::zero()
        }
        while v % 10 == 0 && u < u8::MAX {
            v /= 10;
            u += 1;
        }
        let byte = drop_left_zero(&v.to_be_bytes());
        Self {
            unit: u,
            dist: byte.len() as i8,
            byte,
        }
    }

    pub fn from_bigint(bignum: &BigInt) -> Ret<Amount> {
        if bignum.is_zero() {
            return Ok(Amount::zero())
        }
        let numstr = bignum.abs().to_string();
        let trimed = numstr.trim_end_matches('0');
        let unit = (numstr.len() - trimed.len()).min(u8::MAX as usize);
        let numuse = &numstr[..numstr.len() - unit];
        let Ok(numeral) = BigInt::from_str_radix(numuse, 10) else {
            return errf!("amount numeral {} format error", numuse)
        };
        let (_, byte) = numeral.to_bytes_be();
        if byte.len() > i8::MAX as usize {
            return errf!("amount is too wide")
        }
        let mut dist = byte.len() as i8;
        if bignum.sign() == Minus {
            dist = -dist;
        }
        Ok(Self { unit: unit as u8, dist, byte })
    }

    /*
    * "ㄜ12:248", "12:248" or "12.5" mei
    */
    pub fn from(v: &str) -> Ret<Amount> {
        let v = v.trim().trim_start_matches('ㄜ').replace(",", "");
        if let Some((num, unit)) = v.split_once(':') {
            let Ok(unit) = unit.parse::<u8>() else {
                return errf!("amount unit '{}' format error", unit)
            };
            let Ok(num) = BigInt::from_str_radix(num, 10) else {
                return errf!("amount '{}' format error", num)
            };
            return Self::from_bigint(&(num * BigInt::from(10).pow(unit as u32)))
        }
        let (intp, frac) = v.split_once('.').unwrap_or((v.as_str(), ""));
        if frac.len() > UNIT_MEI as usize || frac.starts_with('-') {
            return errf!("amount '{}' format error", v)
        }
        let Ok(num) = BigInt::from_str_radix(&format!("{}{}", intp, frac), 10) else {
            return errf!("amount '{}' format error", v)
        };
        let expn = UNIT_MEI as u32 - frac.len() as u32;
        Self::from_bigint(&(num * BigInt::from(10).pow(expn)))
    }

}


// value
impl Amount {

    pub fn to_bigint(&self) -> BigInt {
        let sign = maybe!(self.dist < 0, Minus, maybe!(self.is_zero(), NoSign, Plus));
        BigInt::from_bytes_be(sign, &self.byte) * BigInt::from(10).pow(self.unit as u32)
    }

    pub fn compare(&self, other: &Amount) -> Ordering {
        if self == other {
            return Ordering::Equal
        }
        self.to_bigint().cmp(&other.to_bigint())
    }

    pub fn equal(&self, other: &Amount) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn less_than(&self, other: &Amount) -> bool {
        self.compare(other) == Ordering::Less
    }

    // value in zhu, finer digits are truncated
    pub fn to_zhu_u64(&self) -> Ret<u64> {
        if self.is_negative() {
            return errf!("amount {} is negative", self)
        }
        let zhu = self.to_bigint() / BigInt::from(10).pow(UNIT_ZHU as u32);
        let (_, digits) = zhu.to_u64_digits();
        match digits.len() {
            0 => Ok(0),
            1 => Ok(digits[0]),
            _ => errf!("amount {} zhu overflow", self),
        }
    }

}


// compute
impl Amount {

    fn unify_u128(&self, other: &Amount) -> Ret<(u128, u128, u8)> {
        if self.is_negative() || other.is_negative() {
            return errf!("amount cannot be negative")
        }
        let base = self.unit.min(other.unit);
        let scale = |v: u128, d: u8| -> Ret<u128> {
            let mul = 10u128.checked_pow(d as u32);
            match mul.and_then(|m|v.checked_mul(m)) {
                Some(r) => Ok(r),
                None => errf!("amount unit {} and {} differ too much", self.unit, other.unit),
            }
        };
        let v1 = scale(self.tail_u128()?, self.unit - base)?;
        let v2 = scale(other.tail_u128()?, other.unit - base)?;
        Ok((v1, v2, base))
    }

    pub fn add_mode_u128(&self, other: &Amount) -> Ret<Amount> {
        if self.is_zero() {
            return Ok(other.clone())
        }
        if other.is_zero() {
            return Ok(self.clone())
        }
        let (v1, v2, base) = self.unify_u128(other)?;
        let Some(sum) = v1.checked_add(v2) else {
            return errf!("amount {} add {} overflow", self, other)
        };
        Ok(Self::coin_u128(sum, base))
    }

    pub fn add_mode_u64(&self, other: &Amount) -> Ret<Amount> {
        let res = self.add_mode_u128(other)?;
        if res.tail_len() > U64S {
            return errf!("amount {} add {} overflow u64", self, other)
        }
        Ok(res)
    }

    pub fn sub_mode_u128(&self, other: &Amount) -> Ret<Amount> {
        if other.is_zero() {
            return Ok(self.clone())
        }
        if self.is_zero() {
            return errf!("amount {} sub {} result negative", self, other)
        }
        let (v1, v2, base) = self.unify_u128(other)?;
        let Some(res) = v1.checked_sub(v2) else {
            return errf!("amount {} sub {} result negative", self, other)
        };
        Ok(Self::coin_u128(res, base))
    }

}


// string
impl Amount {

    pub fn to_fin_string(&self) -> String {
        let num = BigInt::from_bytes_be(maybe!(self.dist < 0, Minus, Plus), &self.byte);
        format!("ㄜ{}:{}", num, self.unit)
    }

    pub fn to_unit_string(&self, unit_name: &str) -> String {
        let base = match unit_name {
            "mei"  => UNIT_MEI,
            "zhu"  => UNIT_ZHU,
            "shuo" => UNIT_SHUO,
            "ai"   => UNIT_AI,
            "miao" => UNIT_MIAO,
            _ => return self.to_fin_string(),
        };
        if self.is_zero() {
            return s!("0")
        }
        let sign = maybe!(self.dist < 0, "-", "");
        let digits = BigInt::from_bytes_be(Plus, &self.byte).to_string();
        let expn = self.unit as i32 - base as i32;
        if expn >= 0 {
            return format!("{}{}{}", sign, digits, "0".repeat(expn as usize))
        }
        let point = (-expn) as usize;
        let digits = format!("{}{}", "0".repeat((point + 1).saturating_sub(digits.len())), digits);
        let (intp, frac) = digits.split_at(digits.len() - point);
        let frac = frac.trim_end_matches('0');
        maybe!(frac.is_empty(),
            format!("{}{}", sign, intp),
            format!("{}{}.{}", sign, intp, frac)
        )
    }

}
