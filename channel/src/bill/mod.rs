use sys::*;
use field::*;


include!{"basis.rs"}
include!{"reconciliation.rs"}
include!{"transfer.rs"}
include!{"chaswap.rs"}


#[cfg(test)]
mod tests;
