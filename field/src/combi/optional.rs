
#[macro_export] 
macro_rules! combi_optional {
    ($class:ident, $item:ident : $vty:ty) => (

        #[derive(Default, Clone, PartialEq, Eq)]
        pub struct $class {
            exist: Bool,
            $item: Option<$vty>,
        }

        impl std::fmt::Debug for $class {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match &self.$item {
                    Some(v) => write!(f, "[ifval {:?}]", v),
                    None => write!(f, "[ifval none]"),
                }
            }
        }

        impl Parse for $class {
            fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
                let mut seek = self.exist.parse(buf)?;
                self.$item = None;
                if self.exist.check() {
                    let (val, mvsk) = <$vty>::create(&buf[seek..])?;
                    self.$item = Some(val);
                    seek += mvsk
                }
                Ok(seek)
            }
        }

        impl Serialize for $class {
            fn serialize(&self) -> Vec<u8> {
                let mut resdt = self.exist.serialize();
                if let Some(v) = &self.$item {
                    resdt.append(&mut v.serialize());
                }
                resdt
            }
            fn size(&self) -> usize {
                self.exist.size() + self.$item.as_ref().map(|v|v.size()).unwrap_or(0)
            }
        }

        impl_field_only_new!{$class}

        impl $class {

            pub fn is_exist(&self) -> bool {
                self.$item.is_some()
            }

            pub fn must(v: $vty) -> $class {
                $class {
                    exist: Bool::new(true),
                    $item: Some(v),
                }
            }

            pub fn from_value(ifv: Option<$vty>) -> $class {
                match ifv {
                    Some(v) => <$class>::must(v),
                    _ => <$class>::default(),
                }
            }

            pub fn if_value(&self) -> Option<&$vty> {
                self.$item.as_ref()
            }

        }

    )
}
