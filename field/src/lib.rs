use std::fmt::{self, Debug, Display, Formatter};
use std::cmp::Ordering;
use std::ops::{Deref, Index};

use sys::*;


pub mod interface;
pub use interface::*;


include!{"util.rs"}

// number
include!{"number/uint.rs"}

// bytes
include!{"bytes/fixed.rs"}

// combi
include!{"combi/struct.rs"}
include!{"combi/list.rs"}
include!{"combi/optional.rs"}

// core
include!{"core/define.rs"}
include!{"core/address.rs"}
include!{"core/amount.rs"}

// component
include!{"component/sign.rs"}
include!{"component/balance.rs"}
include!{"component/total.rs"}
include!{"component/channel.rs"}
