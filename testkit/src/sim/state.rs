use protocol::interface::{MemMap, State};

#[derive(Default, Clone, Debug)]
pub struct FlatMemState {
    mem: MemMap,
}

impl FlatMemState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed() -> Box<dyn State> {
        Box::new(Self::default())
    }
}

impl State for FlatMemState {
    fn clone_state(&self) -> Box<dyn State> {
        Box::new(self.clone())
    }

    fn as_mem(&self) -> &MemMap {
        &self.mem
    }

    fn get(&self, k: Vec<u8>) -> Option<Vec<u8>> {
        self.mem.get(&k).cloned()
    }

    fn set(&mut self, k: Vec<u8>, v: Vec<u8>) {
        self.mem.insert(k, v);
    }

    fn del(&mut self, k: Vec<u8>) {
        self.mem.remove(&k);
    }
}
