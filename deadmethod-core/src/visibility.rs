//! Completeness oracle - the "fully defined, including friends" test.
//!
//! A private method may exist solely for a friend's benefit. If the class
//! or any of its friends is only partially visible in this unit, nothing
//! safe can be concluded about the method being unused, so such classes
//! are suppressed at report time. False negatives are preferred over
//! false positives here.

use std::collections::HashSet;

use crate::model::{ClassId, EntityIndex, FriendRef};

/// Whether `class` and every friend it declares are fully defined in this
/// unit.
///
/// Friend classes get a direct definition check only; their own friends
/// are not consulted. Friend references the frontend could not resolve
/// never reach the index and so cannot affect the result.
pub fn is_fully_visible(
    index: &EntityIndex,
    undefined_classes: &HashSet<ClassId>,
    class: ClassId,
) -> bool {
    if undefined_classes.contains(&class) {
        return false;
    }

    let record = index.class(class);
    // Checked directly as well: a forward-declared class that declares no
    // methods is otherwise invisible to the collector's derivation.
    if !record.has_definition {
        return false;
    }

    for friend in &record.friends {
        match friend {
            FriendRef::Function(id) => {
                if !index.function(*id).has_body {
                    return false;
                }
            }
            FriendRef::Class(id) => {
                if undefined_classes.contains(id) || !index.class(*id).has_definition {
                    return false;
                }
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defined_class(index: &mut EntityIndex, name: &str) -> ClassId {
        let id = index.intern_class(name).unwrap();
        index.mark_class_defined(id);
        id
    }

    #[test]
    fn test_defined_friendless_class_is_visible() {
        let mut index = EntityIndex::new();
        let class = defined_class(&mut index, "Box");
        assert!(is_fully_visible(&index, &HashSet::new(), class));
    }

    #[test]
    fn test_undefined_set_membership_blocks() {
        let mut index = EntityIndex::new();
        let class = defined_class(&mut index, "Box");
        let undefined: HashSet<_> = [class].into();
        assert!(!is_fully_visible(&index, &undefined, class));
    }

    #[test]
    fn test_missing_definition_body_blocks() {
        let mut index = EntityIndex::new();
        let class = index.intern_class("Opaque").unwrap();
        // Not in the set, but also never defined
        assert!(!is_fully_visible(&index, &HashSet::new(), class));
    }

    #[test]
    fn test_bodiless_friend_function_blocks() {
        let mut index = EntityIndex::new();
        let class = defined_class(&mut index, "Vault");
        let open = index.intern_function("open").unwrap();
        index.add_friend(class, FriendRef::Function(open));
        assert!(!is_fully_visible(&index, &HashSet::new(), class));

        index.mark_function_body(open);
        assert!(is_fully_visible(&index, &HashSet::new(), class));
    }

    #[test]
    fn test_undefined_friend_class_blocks() {
        let mut index = EntityIndex::new();
        let class = defined_class(&mut index, "Vault");
        let key = index.intern_class("Key").unwrap();
        index.add_friend(class, FriendRef::Class(key));
        assert!(!is_fully_visible(&index, &HashSet::new(), class));

        index.mark_class_defined(key);
        assert!(is_fully_visible(&index, &HashSet::new(), class));
    }

    #[test]
    fn test_friend_visibility_is_not_recursive() {
        let mut index = EntityIndex::new();
        let class = defined_class(&mut index, "Vault");
        let key = defined_class(&mut index, "Key");
        index.add_friend(class, FriendRef::Class(key));

        // Key's own friend is never defined, but only one level of friend
        // visibility is required.
        let locksmith = index.intern_function("locksmith").unwrap();
        index.add_friend(key, FriendRef::Function(locksmith));

        assert!(is_fully_visible(&index, &HashSet::new(), class));
        assert!(!is_fully_visible(&index, &HashSet::new(), key));
    }
}
