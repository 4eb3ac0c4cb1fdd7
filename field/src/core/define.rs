
// block
pub type BlockHeight = Uint5;
pub type Timestamp = Uint5;

// balance
pub type Satoshi = Uint8;

// key
pub type ChannelId = Fixed16;

// common
pub type Hash = Fixed32;
pub type HashHalf = Fixed16;

impl Hash {

    pub fn half(&self) -> HashHalf {
        let mut pt = [0u8; HashHalf::SIZE];
        pt.copy_from_slice(&self.bytes[0..HashHalf::SIZE]);
        HashHalf::from(pt)
    }

}


combi_list!{HashHalfW1, Uint1, HashHalf}
