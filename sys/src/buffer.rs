
/*
* take n bytes or fail
*/
pub fn bufeat(buf: &[u8], n: usize) -> Ret<Vec<u8>> {
    bufeat_ref(buf, n).map(|b|b.to_vec())
}


pub fn bufeat_ref(buf: &[u8], n: usize) -> Ret<&[u8]> {
    let buflen = buf.len();
    maybe!(n > buflen, 
        errf!("buf length too short need {} but got {}", n, buflen),
        Ok(&buf[..n])
    )
}


pub fn bufeatone(buf: &[u8]) -> Ret<u8> {
    maybe!(buf.len() >= 1, Ok(buf[0]), Err(s!("buf length too short")))
}


/*
* fixed size array from the head of buf
*/
pub fn bufeat_array<const N: usize>(buf: &[u8]) -> Ret<[u8; N]> {
    let bts = bufeat_ref(buf, N)?;
    let mut res = [0u8; N];
    res.copy_from_slice(bts);
    Ok(res)
}
