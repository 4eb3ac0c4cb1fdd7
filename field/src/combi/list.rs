
#[macro_export] 
macro_rules! combi_list {
    ($class:ident, $cty:ty, $vty:ty) => (

#[derive(Default, Clone, PartialEq, Eq)]
pub struct $class  {
	count: $cty,
	lists: Vec<$vty>,
}

impl std::fmt::Debug for $class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,"[list {}]", *self.count)
    }
}

impl std::ops::Index<usize> for $class {
    type Output = $vty;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.lists[idx]
    }
}

impl Parse for $class {
    fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
        let mut seek = self.count.parse(buf)?;
        let count = *self.count as usize;
        self.lists = Vec::with_capacity(count);
        for _ in 0..count {
            let (obj, mvsk) = <$vty>::create(&buf[seek..])?;
            seek += mvsk;
            self.lists.push(obj);
        }
        Ok(seek)
    }
}

impl Serialize for $class {
    fn serialize(&self) -> Vec<u8> {
        let mut resdt = self.count.serialize();
        for item in &self.lists {
            resdt.append(&mut item.serialize());
        }
        resdt
    }
    fn size(&self) -> usize {
        self.count.size() + self.lists.iter().map(|a|a.size()).sum::<usize>()
    }
}

impl_field_only_new!{$class}

impl $class {

	pub fn length(&self) -> usize {
		self.lists.len()
	}

	pub fn as_list(&self) -> &Vec<$vty> {
		&self.lists
	}

	pub fn push(&mut self, v: $vty) -> Rerr {
		self.count = self.count.checked_add_uint(1)?;
		self.lists.push(v);
		Ok(())
	}

	pub fn from_list(list: Vec<$vty>) -> Ret<Self> {
		let mut obj = Self::default();
		for v in list {
			obj.push(v)?;
		}
		Ok(obj)
	}

	pub fn contains(&self, v: &$vty) -> bool {
		self.lists.contains(v)
	}

}

    )
}
