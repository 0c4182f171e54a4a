/*!
Alias chain resolution.

A resolving lookup follows alias entries, re-querying the same type with the
alias target each time, until it reaches a non-alias entry. The number of
redirections is bounded so that cyclic alias graphs terminate; running out of
hops looks exactly like a missing name.
*/

use crate::core::names::entry::{EntryData, NamedEntry};
use crate::core::names::handlers::TypeRegistry;
use crate::core::names::table::NameTable;

/// Look up `name` under `name_type`, following at most `max_depth` aliases.
pub fn resolve<'a, T>(
    table: &'a NameTable<T>,
    types: &TypeRegistry<T>,
    name: &str,
    name_type: i32,
    max_depth: usize,
) -> Option<&'a NamedEntry<T>> {
    let mut entry = table.find(types, name, name_type)?;
    let mut hops = 0;

    while let EntryData::Alias(target) = entry.data() {
        hops += 1;
        if hops > max_depth {
            log::warn!(
                "alias chain for {:?} (type {}) exceeds {} hops",
                name,
                name_type,
                max_depth
            );
            return None;
        }
        entry = table.find(types, target, name_type)?;
    }

    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_ALIAS_DEPTH;

    fn alias(name: &str, target: &str) -> NamedEntry<u32> {
        NamedEntry::new(name.to_string(), 1, EntryData::Alias(target.to_string()))
    }

    fn table_with(entries: Vec<NamedEntry<u32>>) -> (NameTable<u32>, TypeRegistry<u32>) {
        let types = TypeRegistry::new();
        let mut table = NameTable::with_capacity(16).unwrap();
        for entry in entries {
            table.insert(&types, entry).unwrap();
        }
        (table, types)
    }

    #[test]
    fn test_follows_chain() {
        let (table, types) = table_with(vec![
            alias("A", "B"),
            alias("B", "C"),
            NamedEntry::new("C".to_string(), 1, EntryData::Value(9)),
        ]);

        let found = resolve(&table, &types, "A", 1, MAX_ALIAS_DEPTH).unwrap();
        assert_eq!(found.name(), "C");
        assert_eq!(found.data().value(), Some(&9));
    }

    #[test]
    fn test_dangling_alias() {
        let (table, types) = table_with(vec![alias("A", "missing")]);
        assert!(resolve(&table, &types, "A", 1, MAX_ALIAS_DEPTH).is_none());
    }

    #[test]
    fn test_self_alias_terminates() {
        let (table, types) = table_with(vec![alias("A", "A")]);
        assert!(resolve(&table, &types, "A", 1, MAX_ALIAS_DEPTH).is_none());
    }

    #[test]
    fn test_depth_bound() {
        // n0 -> n1 -> ... -> n10 = value: exactly ten redirections
        let mut entries: Vec<_> = (0..10)
            .map(|i| alias(&format!("n{}", i), &format!("n{}", i + 1)))
            .collect();
        entries.push(NamedEntry::new("n10".to_string(), 1, EntryData::Value(1)));
        let (table, types) = table_with(entries);

        assert!(resolve(&table, &types, "n0", 1, MAX_ALIAS_DEPTH).is_some());
        assert!(resolve(&table, &types, "n0", 1, MAX_ALIAS_DEPTH - 1).is_none());
    }
}
