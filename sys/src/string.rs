
pub fn bytes_is_zero(bts: &[u8]) -> bool {
    bts.iter().all(|a|*a==0)
}

pub fn bytes_not_zero(bts: &[u8]) -> bool {
    ! bytes_is_zero(bts)
}

pub fn drop_left_zero(bts: &[u8]) -> Vec<u8> {
    let skip = bts.iter().take_while(|a|**a==0).count();
    bts[skip..].to_vec()
}

pub fn add_left_padding(bts: &[u8], n: usize) -> Vec<u8> {
    if bts.len() >= n {
        return bts.to_vec()
    }
    let mut res = vec![0u8; n - bts.len()];
    res.extend_from_slice(bts);
    res
}

pub fn bytes_from_hex(stuff: &[u8], len: usize) -> Ret<Vec<u8>> {
    let Ok(bts) = hex::decode(stuff) else {
        return errf!("hex format error")
    };
    if bts.len() != len {
        return errf!("hex length need {} but got {}", len, bts.len())
    }
    Ok(bts)
}
