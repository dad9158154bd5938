use alloc::sync::Arc;

use parking_lot::RwLock;
use vc_reflect::info::{NamedField, StructInfo};
use vc_utils::TypeIdMap;

use crate::alias::{OMIT_EMPTY, SKIP_FIELD, field_alias};

// -----------------------------------------------------------------------------
// FieldPlan

/// How one field of a struct is written.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldPlan {
    pub index: usize,
    pub field: &'static NamedField,
    pub alias: &'static str,
    pub omit_empty: bool,
}

fn build_plans(info: &'static StructInfo, tag: &str) -> Arc<[FieldPlan]> {
    info.iter()
        .enumerate()
        .filter_map(|(index, field)| {
            let (alias, options) = field_alias(field, tag);
            if alias == SKIP_FIELD {
                log::trace!("skip `{}.{}`", info.type_name(), field.name());
                return None;
            }
            Some(FieldPlan {
                index,
                field,
                alias,
                omit_empty: options.contains(OMIT_EMPTY),
            })
        })
        .collect()
}

// -----------------------------------------------------------------------------
// PlanCache

/// Field plans per struct type, built on first use.
pub(crate) struct PlanCache(RwLock<TypeIdMap<Arc<[FieldPlan]>>>);

impl PlanCache {
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    pub fn get_or_build(&self, info: &'static StructInfo, tag: &str) -> Arc<[FieldPlan]> {
        if let Some(plans) = self.0.read().get(&info.ty_id()) {
            return Arc::clone(plans);
        }

        // Built outside the lock, a racing thread may build the same plans.
        let plans = build_plans(info, tag);
        log::debug!(
            "cached {} field plans for `{}`",
            plans.len(),
            info.type_path()
        );

        let mut cache = self.0.write();
        Arc::clone(cache.get_or_insert_with(info.ty_id(), || plans))
    }

    pub fn clear(&mut self) {
        self.0.get_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{PlanCache, build_plans};
    use alloc::sync::Arc;
    use vc_reflect::derive::Reflect;
    use vc_reflect::info::Typed;

    #[derive(Reflect)]
    struct Search {
        #[reflect(tag(schema = "q", json = "query"))]
        text: String,
        #[reflect(tag(schema = "-"))]
        secret: String,
        #[reflect(tag(schema = "page,omitempty"))]
        page: u32,
    }

    #[test]
    fn skip_and_options() {
        let info = Search::type_info().as_struct().unwrap();
        let plans = build_plans(info, "schema");

        assert_eq!(plans.len(), 2);
        assert_eq!((plans[0].index, plans[0].alias, plans[0].omit_empty), (0, "q", false));
        assert_eq!((plans[1].index, plans[1].alias, plans[1].omit_empty), (2, "page", true));

        let plans = build_plans(info, "json");
        let aliases: Vec<_> = plans.iter().map(|plan| plan.alias).collect();
        assert_eq!(aliases, ["query", "secret", "page"]);
    }

    #[test]
    fn cached_per_type() {
        let info = Search::type_info().as_struct().unwrap();
        let mut cache = PlanCache::new();

        let first = cache.get_or_build(info, "schema");
        let second = cache.get_or_build(info, "json");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.get_or_build(info, "json")[0].alias, "query");
    }
}
