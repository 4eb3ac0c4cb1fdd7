use sys::*;


include!{"chain.rs"}
