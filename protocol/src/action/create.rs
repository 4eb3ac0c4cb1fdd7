
pub type FnActionTryCreate = fn(u16, &[u8]) -> Ret<Option<(Box<dyn Action>, usize)>>;

static ACTION_TRY_CREATE_FUNCS: RwLock<Vec<FnActionTryCreate>> = RwLock::new(Vec::new());


pub fn action_register(f: FnActionTryCreate) {
    let Ok(mut funcs) = ACTION_TRY_CREATE_FUNCS.write() else {
        never!("action register lock poisoned")
    };
    if ! funcs.iter().any(|a| *a as usize == f as usize) {
        funcs.push(f);
    }
}


fn cut_kind(buf: &[u8]) -> Ret<u16> {
    let mut kind = Uint2::default();
    kind.parse(buf)?;
    Ok(*kind)
}


pub fn action_create(buf: &[u8]) -> Ret<(Box<dyn Action>, usize)> {
    let kid = cut_kind(buf)?;
    let Ok(funcs) = ACTION_TRY_CREATE_FUNCS.read() else {
        never!("action register lock poisoned")
    };
    for try_create in funcs.iter() {
        if let Some(res) = try_create(kid, buf)? {
            return Ok(res)
        }
    }
    errf!("action kind '{}' not find", kid)
}


/*
* action list with u8 count
*/
#[derive(Default, Clone)]
pub struct DynListActionW1 {
    count: Uint1,
    vlist: Vec<Box<dyn Action>>,
}

impl std::fmt::Debug for DynListActionW1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[dyn list {}]", *self.count)
    }
}

impl Parse for DynListActionW1 {
    fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
        let mut seek = self.count.parse(buf)?;
        let count = *self.count as usize;
        self.vlist = Vec::with_capacity(count);
        for _ in 0..count {
            let (obj, mvsk) = action_create(&buf[seek..])?;
            seek += mvsk;
            self.vlist.push(obj);
        }
        Ok(seek)
    }
}

impl Serialize for DynListActionW1 {
    fn serialize(&self) -> Vec<u8> {
        let mut res = self.count.serialize();
        for act in &self.vlist {
            res.append(&mut act.serialize());
        }
        res
    }
    fn size(&self) -> usize {
        self.count.size() + self.vlist.iter().map(|a|a.size()).sum::<usize>()
    }
}

impl Field for DynListActionW1 {
    fn new() -> Self {
        Self::default()
    }
}

impl DynListActionW1 {

    pub fn as_list(&self) -> &Vec<Box<dyn Action>> {
        &self.vlist
    }

    pub fn push(&mut self, act: Box<dyn Action>) -> Rerr {
        self.count = self.count.checked_add_uint(1)?;
        self.vlist.push(act);
        Ok(())
    }

}
