use crate::ir::Contact;
use indexmap::IndexMap;

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Count how often each (already normalized) name occurs across the full
/// contact list. Computed once, consumed read-only by `assign_display_names`.
pub fn count_names(contacts: &[Contact]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for contact in contacts {
        *counts.entry(contact.name.clone()).or_insert(0) += 1;
    }
    counts
}

/// Assign one display name per contact, in original contact order. Unique
/// names are truncated to `max_len` chars; colliding names get a running
/// 1-based index appended after a `max_len - 2` char prefix, so a single-digit
/// index still fits the budget. Larger collision groups can push past the
/// budget; the filename pass clips the overflow (accepted gap, see DESIGN.md).
pub fn assign_display_names(
    contacts: &[Contact],
    counts: &IndexMap<String, usize>,
    max_len: usize,
) -> Vec<String> {
    let mut indices: IndexMap<String, usize> = IndexMap::new();
    contacts
        .iter()
        .map(|contact| {
            if counts.get(&contact.name).copied().unwrap_or(0) > 1 {
                let idx = indices.entry(contact.name.clone()).or_insert(0);
                *idx += 1;
                format!(
                    "{} {}",
                    truncate_chars(&contact.name, max_len.saturating_sub(2)),
                    idx
                )
            } else {
                truncate_chars(&contact.name, max_len)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts(names: &[&str]) -> Vec<Contact> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Contact {
                name: n.to_string(),
                phone: format!("555000{}", i),
            })
            .collect()
    }

    #[test]
    fn test_unique_name_untouched() {
        let list = contacts(&["Beto"]);
        let counts = count_names(&list);
        assert_eq!(assign_display_names(&list, &counts, 15), vec!["Beto"]);
    }

    #[test]
    fn test_collision_group_numbered_in_order() {
        let list = contacts(&["Ana", "Beto", "Ana", "Ana"]);
        let counts = count_names(&list);
        assert_eq!(counts.get("Ana"), Some(&3));
        assert_eq!(
            assign_display_names(&list, &counts, 15),
            vec!["Ana 1", "Beto", "Ana 2", "Ana 3"]
        );
    }

    #[test]
    fn test_unique_long_name_truncated_to_budget() {
        let list = contacts(&["Maximiliano Fernandez"]);
        let counts = count_names(&list);
        let names = assign_display_names(&list, &counts, 15);
        assert_eq!(names, vec!["Maximiliano Fer"]);
        assert_eq!(names[0].chars().count(), 15);
    }

    #[test]
    fn test_colliding_long_names_keep_distinct_suffixes() {
        let list = contacts(&["Maximiliano Fernandez", "Maximiliano Fernandez"]);
        let counts = count_names(&list);
        assert_eq!(
            assign_display_names(&list, &counts, 15),
            vec!["Maximiliano F 1", "Maximiliano F 2"]
        );
    }

    #[test]
    fn test_two_digit_index_exceeds_budget() {
        // With ten or more collisions the suffixed name runs 16 chars; the
        // overflow is only clipped later, when the filename is built.
        let list = contacts(&["Juan Carlos Gome"; 10]);
        let counts = count_names(&list);
        let names = assign_display_names(&list, &counts, 15);
        assert_eq!(names[9], "Juan Carlos G 10");
        assert_eq!(names[9].chars().count(), 16);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let list = contacts(&["Łukasz Żółkiewski xyz"]);
        let counts = count_names(&list);
        let names = assign_display_names(&list, &counts, 15);
        assert_eq!(names[0].chars().count(), 15);
    }
}
