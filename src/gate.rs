use crate::course::{Catalog, Module};

/// The first module is always free, every other one needs the guide unlocked.
pub fn is_locked(index: usize, unlocked: bool) -> bool {
    index > 0 && !unlocked
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleAccess {
    Open,
    Locked,
}

impl ModuleAccess {
    pub fn for_position(index: usize, unlocked: bool) -> Self {
        if is_locked(index, unlocked) {
            ModuleAccess::Locked
        } else {
            ModuleAccess::Open
        }
    }

    pub fn is_locked(self) -> bool {
        self == ModuleAccess::Locked
    }
}

/// Pairs every module of the catalog with its access level.
pub fn module_access(
    catalog: &Catalog,
    unlocked: bool,
) -> impl Iterator<Item = (&Module, ModuleAccess)> + '_ {
    catalog
        .modules
        .iter()
        .enumerate()
        .map(move |(index, module)| (module, ModuleAccess::for_position(index, unlocked)))
}
