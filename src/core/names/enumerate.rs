/*!
Enumeration of the entries of one type.
*/

use crate::core::error::{Error, Result};
use crate::core::names::entry::NamedEntry;
use crate::core::names::table::NameTable;

/// Visit every entry of `name_type` in table order.
pub fn for_each_of_type<T, F>(table: &NameTable<T>, name_type: i32, mut visit: F)
where
    F: FnMut(&NamedEntry<T>),
{
    for entry in table.iter_type(name_type) {
        visit(entry);
    }
}

/// Collect the entries of `name_type` sorted by ascending byte order of name.
///
/// The scratch list is sized for the whole table up front; failing to
/// allocate it is reported instead of falling back to table order.
pub fn sorted_of_type<T>(table: &NameTable<T>, name_type: i32) -> Result<Vec<&NamedEntry<T>>> {
    let mut entries = Vec::new();
    entries
        .try_reserve_exact(table.len())
        .map_err(|_| Error::AllocationFailure("sorted enumeration"))?;

    entries.extend(table.iter_type(name_type));
    entries.sort_unstable_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes()));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::names::entry::EntryData;
    use crate::core::names::handlers::TypeRegistry;

    fn table() -> NameTable<u32> {
        let types = TypeRegistry::new();
        let mut table = NameTable::with_capacity(8).unwrap();
        for (name, name_type) in [("sha512", 1), ("md5", 1), ("aes", 2), ("SHA1", 1)] {
            table
                .insert(
                    &types,
                    NamedEntry::new(name.to_string(), name_type, EntryData::Value(0)),
                )
                .unwrap();
        }
        table
    }

    #[test]
    fn test_for_each_visits_only_type() {
        let table = table();
        let mut seen = Vec::new();
        for_each_of_type(&table, 1, |entry| seen.push(entry.name().to_string()));

        seen.sort();
        assert_eq!(seen, vec!["SHA1", "md5", "sha512"]);
    }

    #[test]
    fn test_sorted_order() {
        let table = table();
        let names: Vec<_> = sorted_of_type(&table, 1)
            .unwrap()
            .into_iter()
            .map(|entry| entry.name())
            .collect();
        assert_eq!(names, vec!["SHA1", "md5", "sha512"]);
    }

    #[test]
    fn test_sorted_unknown_type_is_empty() {
        let table = table();
        assert!(sorted_of_type(&table, 9).unwrap().is_empty());
    }
}
