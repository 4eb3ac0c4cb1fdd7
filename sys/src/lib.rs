use std::path::PathBuf;
use std::collections::HashMap;


pub type Error = String;


include!{"panic.rs"}
include!{"match.rs"}
include!{"error.rs"}
include!{"buffer.rs"}
include!{"string.rs"}
include!{"hash.rs"}
include!{"ini.rs"}
include!{"account.rs"}
include!{"config.rs"}
