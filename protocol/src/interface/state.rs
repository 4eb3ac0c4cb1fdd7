
pub type MemMap = HashMap<Vec<u8>, Vec<u8>>;


/*
* transactional key-value view
*/
pub trait State : Send + Sync {
    fn get(&self, _: Vec<u8>) -> Option<Vec<u8>>;
    fn set(&mut self, _: Vec<u8>, _: Vec<u8>);
    fn del(&mut self, _: Vec<u8>);
    // full copy for snapshot and restore
    fn clone_state(&self) -> Box<dyn State>;
    fn as_mem(&self) -> &MemMap;
}
